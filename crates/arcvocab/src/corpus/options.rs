//! # Corpus Options

/// Options for [`crate::corpus::Corpus::load_parser_training`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserCorpusOptions {
    /// Grow the vocabulary from this corpus (training data),
    /// rather than only looking symbols up (evaluation data).
    pub is_training: bool,

    /// Record per-word character indices.
    pub use_spelling: bool,
}

impl Default for ParserCorpusOptions {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ParserCorpusOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `is_training` - whether the corpus is training data.
    pub fn new(is_training: bool) -> Self {
        Self {
            is_training,
            use_spelling: false,
        }
    }

    /// Sets whether the corpus is training data.
    pub fn with_training(
        self,
        is_training: bool,
    ) -> Self {
        Self {
            is_training,
            ..self
        }
    }

    /// Sets whether spelling features are recorded.
    pub fn with_spelling(
        self,
        use_spelling: bool,
    ) -> Self {
        Self {
            use_spelling,
            ..self
        }
    }
}
