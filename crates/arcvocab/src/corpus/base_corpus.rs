//! # Corpus

use std::{io::BufRead, path::Path};

use crate::{
    corpus::{ParserCorpusOptions, Sentence, SingletonWords},
    errors::CorpusResult,
    readers::{CorpusReader, OracleTransitionReader},
    types::SymbolId,
    vocab::SharedVocabulary,
};

/// The training extension of a [`Corpus`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingAnnotations {
    /// Gold action indices; entry `i` belongs to sentence `i`.
    pub gold_actions: Vec<Vec<SymbolId>>,
}

/// An append-only sequence of [`Sentence`]s, and the vocabulary that indexes them.
///
/// A corpus optionally carries:
/// * [`TrainingAnnotations`] - gold action sequences, kept index-aligned with the sentences;
/// * [`SingletonWords`] - computed once, after loading.
///
/// The vocabulary is shared: it outlives the corpus, and may be shared
/// with other corpora read before or after this one.
///
/// Any corpus, plain or training, may record per-word character indices;
/// see [`Self::with_spelling`].
#[derive(Debug, Clone)]
pub struct Corpus {
    vocab: SharedVocabulary,
    use_spelling: bool,
    sentences: Vec<Sentence>,
    training: Option<TrainingAnnotations>,
    singletons: Option<SingletonWords>,
}

impl Corpus {
    /// Create an empty plain corpus.
    pub fn new(vocab: SharedVocabulary) -> Self {
        Self {
            vocab,
            use_spelling: false,
            sentences: Vec::new(),
            training: None,
            singletons: None,
        }
    }

    /// Create an empty corpus with a [`TrainingAnnotations`] extension.
    pub fn with_training(vocab: SharedVocabulary) -> Self {
        Self {
            training: Some(TrainingAnnotations::default()),
            ..Self::new(vocab)
        }
    }

    /// Set whether readers record per-word character indices.
    pub fn with_spelling(
        self,
        use_spelling: bool,
    ) -> Self {
        Self {
            use_spelling,
            ..self
        }
    }

    /// Read a corpus file with `reader`.
    ///
    /// ## Arguments
    /// * `vocab` - the vocabulary; the reader may grow it.
    /// * `reader` - the file format.
    /// * `path` - the file.
    pub fn load<P: AsRef<Path>>(
        vocab: SharedVocabulary,
        reader: &dyn CorpusReader,
        path: P,
    ) -> CorpusResult<Self> {
        let mut corpus = Self::new(vocab);
        corpus.read_path(reader, path.as_ref())?;
        Ok(corpus)
    }

    /// Read an oracle-transition file into a parser training corpus.
    ///
    /// Builds a corpus with [`TrainingAnnotations`], reads it with an
    /// [`OracleTransitionReader`], then counts [`SingletonWords`].
    pub fn load_parser_training<P: AsRef<Path>>(
        vocab: SharedVocabulary,
        path: P,
        options: ParserCorpusOptions,
    ) -> CorpusResult<Self> {
        let mut corpus = Self::with_training(vocab).with_spelling(options.use_spelling);
        let reader = OracleTransitionReader::new(options.is_training);
        corpus.read_path(&reader, path.as_ref())?;
        corpus.count_singletons();
        Ok(corpus)
    }

    /// As [`Self::load_parser_training`], reading from a stream.
    pub fn read_parser_training(
        vocab: SharedVocabulary,
        source: &mut dyn BufRead,
        options: ParserCorpusOptions,
    ) -> CorpusResult<Self> {
        let mut corpus = Self::with_training(vocab).with_spelling(options.use_spelling);
        let reader = OracleTransitionReader::new(options.is_training);
        corpus.read(&reader, source)?;
        corpus.count_singletons();
        Ok(corpus)
    }

    /// Append the sentences of a file.
    ///
    /// On error, both the corpus and the vocabulary are restored to their
    /// state before the call.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, reader)))]
    pub fn read_path(
        &mut self,
        reader: &dyn CorpusReader,
        path: &Path,
    ) -> CorpusResult<()> {
        self.atomically(|corpus| reader.read_path(path, corpus))?;
        log::info!(
            "{}: {} sentences, {} tokens",
            path.display(),
            self.len(),
            self.num_tokens()
        );
        Ok(())
    }

    /// Append the sentences of a stream.
    ///
    /// On error, both the corpus and the vocabulary are restored to their
    /// state before the call.
    pub fn read(
        &mut self,
        reader: &dyn CorpusReader,
        source: &mut dyn BufRead,
    ) -> CorpusResult<()> {
        self.atomically(|corpus| reader.read_sentences(source, corpus))
    }

    fn atomically<F>(
        &mut self,
        f: F,
    ) -> CorpusResult<()>
    where
        F: FnOnce(&mut Self) -> CorpusResult<()>,
    {
        let checkpoint = self.vocab.read().checkpoint();
        let num_sentences = self.sentences.len();

        let result = f(self);
        if result.is_err() {
            self.vocab.write().rollback(checkpoint);
            self.sentences.truncate(num_sentences);
            if let Some(training) = &mut self.training {
                training.gold_actions.truncate(num_sentences);
            }
        }
        result
    }

    /// The shared vocabulary handle.
    pub fn vocab(&self) -> &SharedVocabulary {
        &self.vocab
    }

    /// The sentences.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// The number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Are there no sentences?
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// The number of real tokens over all sentences.
    pub fn num_tokens(&self) -> usize {
        self.sentences.iter().map(Sentence::size).sum()
    }

    /// The training extension, if any.
    pub fn training(&self) -> Option<&TrainingAnnotations> {
        self.training.as_ref()
    }

    /// Should readers record character indices?
    pub fn use_spelling(&self) -> bool {
        self.use_spelling
    }

    /// The gold actions of sentence `index`, if this is a training corpus.
    pub fn gold_actions(
        &self,
        index: usize,
    ) -> Option<&[SymbolId]> {
        self.training
            .as_ref()
            .and_then(|t| t.gold_actions.get(index))
            .map(Vec::as_slice)
    }

    /// The singleton extension, if computed.
    pub fn singletons(&self) -> Option<&SingletonWords> {
        self.singletons.as_ref()
    }

    /// Append a sentence.
    ///
    /// On a training corpus, an empty gold action sequence is appended
    /// alongside it.
    pub fn push_sentence(
        &mut self,
        sentence: Sentence,
    ) {
        if let Some(training) = &mut self.training {
            training.gold_actions.push(Vec::new());
        }
        self.sentences.push(sentence);
    }

    /// Append a sentence and its gold action sequence.
    ///
    /// Adds a [`TrainingAnnotations`] extension if this corpus lacks one.
    pub fn push_training_sentence(
        &mut self,
        sentence: Sentence,
        gold_actions: Vec<SymbolId>,
    ) {
        let training = self.training.get_or_insert_with(Default::default);
        debug_assert_eq!(training.gold_actions.len(), self.sentences.len());
        training.gold_actions.push(gold_actions);
        self.sentences.push(sentence);
    }

    /// Compute the [`SingletonWords`] of this corpus.
    ///
    /// Call once, after all sentences are loaded.
    pub fn count_singletons(&mut self) -> &SingletonWords {
        let singletons = SingletonWords::count(&self.sentences);
        log::debug!("{} singleton words", singletons.len());
        self.singletons.insert(singletons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Vocabulary;

    fn sentence(words: &[SymbolId]) -> Sentence {
        let mut sentence = Sentence::new();
        for (position, &word) in words.iter().enumerate() {
            sentence.insert_token(position as u32, word, 0);
        }
        sentence.push_root();
        sentence
    }

    #[test]
    fn test_plain_corpus() {
        let mut corpus = Corpus::new(Vocabulary::new().into_shared());
        assert!(corpus.is_empty());
        assert!(corpus.training().is_none());
        assert!(!corpus.use_spelling());

        corpus.push_sentence(sentence(&[2, 3]));
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.num_tokens(), 2);
        assert_eq!(corpus.gold_actions(0), None);
    }

    #[test]
    fn test_training_alignment() {
        let mut corpus = Corpus::with_training(Vocabulary::new().into_shared());
        assert!(!corpus.use_spelling());

        corpus.push_training_sentence(sentence(&[2]), vec![0, 1]);
        corpus.push_sentence(sentence(&[3]));
        corpus.push_training_sentence(sentence(&[2, 3]), vec![0, 0, 1]);

        assert_eq!(corpus.gold_actions(0), Some(&[0, 1][..]));
        assert_eq!(corpus.gold_actions(1), Some(&[][..]));
        assert_eq!(corpus.gold_actions(2), Some(&[0, 0, 1][..]));
        assert_eq!(corpus.training().unwrap().gold_actions.len(), corpus.len());
    }

    #[test]
    fn test_spelling_without_training() {
        let corpus = Corpus::new(Vocabulary::new().into_shared()).with_spelling(true);
        assert!(corpus.use_spelling());
        assert!(corpus.training().is_none());

        let corpus = Corpus::with_training(Vocabulary::new().into_shared()).with_spelling(true);
        assert!(corpus.use_spelling());
        assert!(corpus.training().is_some());
    }

    #[test]
    fn test_count_singletons() {
        let mut corpus = Corpus::new(Vocabulary::new().into_shared());
        corpus.push_sentence(sentence(&[2, 3]));
        corpus.push_sentence(sentence(&[3, 4]));

        assert!(corpus.singletons().is_none());
        assert_eq!(corpus.count_singletons().iter().collect::<Vec<_>>(), vec![2, 4]);
        assert!(corpus.singletons().unwrap().contains(4));
    }
}
