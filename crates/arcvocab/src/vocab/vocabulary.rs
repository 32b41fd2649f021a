//! # Parser Vocabulary
//!
//! Four [`SymbolTable`]s (words, POS tags, characters, actions), the per-word
//! training-provenance flags, and the derived action arc labels.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    types::SymbolId,
    vocab::{
        SymbolTable,
        arc_labels::{derive_arc_label, derive_arc_labels},
    },
};

/// Reserved padding symbol; index 0 of the word and character tables.
pub const BAD0: &str = "<BAD0>";

/// Reserved unknown symbol; index 1 of the word and character tables.
pub const UNK: &str = "<UNK>";

/// Surface form reported for the synthetic root token.
///
/// The root is positional (see [`crate::corpus::ROOT_POSITION`]),
/// and is never a vocabulary entry.
pub const ROOT: &str = "<ROOT>";

/// Index of [`BAD0`] in the word and character tables.
pub const PAD_INDEX: SymbolId = 0;

/// Index of [`UNK`] in the word and character tables.
pub const UNK_INDEX: SymbolId = 1;

/// Sentinel returned by [`Vocabulary::get_pos`] for unseen tags.
pub const NOT_FOUND: SymbolId = SymbolId::MAX;

/// A vocabulary shared between the corpora built against it.
///
/// Corpus readers hold the write lock for the duration of a load.
pub type SharedVocabulary = Arc<RwLock<Vocabulary>>;

/// Table sizes captured by [`Vocabulary::checkpoint`].
#[derive(Debug, Clone, PartialEq)]
pub struct VocabCheckpoint {
    words: usize,
    pos_tags: usize,
    chars: usize,
    actions: usize,
    training_words: Vec<bool>,
}

/// The symbol inventory of a parser training session.
///
/// All tables are append-only; an index, once handed out, keeps its meaning
/// for the life of the vocabulary and any snapshot saved from it.
#[derive(Debug, PartialEq)]
pub struct Vocabulary {
    pub(crate) words: SymbolTable<SymbolId>,

    /// Parallel to `words`: was the word ever seen in a training context?
    pub(crate) training_words: Vec<bool>,

    pub(crate) pos_tags: SymbolTable<SymbolId>,
    pub(crate) chars: SymbolTable<SymbolId>,
    pub(crate) actions: SymbolTable<SymbolId>,

    /// Parallel to `actions`; always derived, never loaded.
    pub(crate) arc_labels: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary {
    /// Create a vocabulary holding only the reserved entries.
    pub fn new() -> Self {
        let mut words = SymbolTable::new();
        words.get_or_add(BAD0);
        words.get_or_add(UNK);

        let mut chars = SymbolTable::new();
        chars.get_or_add(BAD0);
        chars.get_or_add(UNK);

        Self {
            words,
            training_words: vec![true, true],
            pos_tags: SymbolTable::new(),
            chars,
            actions: SymbolTable::new(),
            arc_labels: Vec::new(),
        }
    }

    /// Wrap this vocabulary in a [`SharedVocabulary`] handle.
    pub fn into_shared(self) -> SharedVocabulary {
        Arc::new(RwLock::new(self))
    }

    /// Copy words, POS tags, characters and training flags; drop all actions.
    ///
    /// Supports reusing a learned word inventory for a task with a
    /// different action inventory.
    pub fn copy_without_actions(&self) -> Self {
        Self {
            words: self.words.clone(),
            training_words: self.training_words.clone(),
            pos_tags: self.pos_tags.clone(),
            chars: self.chars.clone(),
            actions: SymbolTable::new(),
            arc_labels: Vec::new(),
        }
    }

    /// The number of words, including the reserved entries.
    pub fn count_words(&self) -> usize {
        self.words.len()
    }

    /// The number of POS tags.
    pub fn count_pos(&self) -> usize {
        self.pos_tags.len()
    }

    /// The number of characters, including the reserved padding entry.
    pub fn count_chars(&self) -> usize {
        self.chars.len()
    }

    /// The number of actions.
    pub fn count_actions(&self) -> usize {
        self.actions.len()
    }

    /// The word table.
    pub fn words(&self) -> &SymbolTable<SymbolId> {
        &self.words
    }

    /// The POS tag table.
    pub fn pos_tags(&self) -> &SymbolTable<SymbolId> {
        &self.pos_tags
    }

    /// The character table.
    pub fn chars(&self) -> &SymbolTable<SymbolId> {
        &self.chars
    }

    /// The action table.
    pub fn actions(&self) -> &SymbolTable<SymbolId> {
        &self.actions
    }

    /// The training flags, parallel to [`Self::words`].
    pub fn training_words(&self) -> &[bool] {
        &self.training_words
    }

    /// The arc labels, parallel to [`Self::actions`].
    pub fn arc_labels(&self) -> &[String] {
        &self.arc_labels
    }

    /// Look up a word; unseen words map to [`UNK_INDEX`].
    pub fn get_word(
        &self,
        word: &str,
    ) -> SymbolId {
        self.words.get(word).unwrap_or(UNK_INDEX)
    }

    /// Look up a word, if present.
    pub fn lookup_word(
        &self,
        word: &str,
    ) -> Option<SymbolId> {
        self.words.get(word)
    }

    /// Return the index of `word`, adding it if absent.
    ///
    /// ## Arguments
    /// * `word` - The word.
    /// * `mark_as_training` - Record that this word was seen in training data.
    ///   The flag is sticky: once a word is marked, it stays marked.
    pub fn get_or_add_word(
        &mut self,
        word: &str,
        mark_as_training: bool,
    ) -> SymbolId {
        let id = self.words.get_or_add(word);
        let idx = id as usize;
        if idx == self.training_words.len() {
            self.training_words.push(mark_as_training);
        } else {
            self.training_words[idx] |= mark_as_training;
        }
        id
    }

    /// Was the word at `index` ever seen in a training context?
    pub fn is_training_word(
        &self,
        index: SymbolId,
    ) -> bool {
        self.training_words
            .get(index as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Look up a POS tag; unseen tags map to [`NOT_FOUND`].
    pub fn get_pos(
        &self,
        tag: &str,
    ) -> SymbolId {
        self.pos_tags.get(tag).unwrap_or(NOT_FOUND)
    }

    /// Look up a POS tag, if present.
    pub fn lookup_pos(
        &self,
        tag: &str,
    ) -> Option<SymbolId> {
        self.pos_tags.get(tag)
    }

    /// Return the index of a POS tag, adding it if absent.
    pub fn get_or_add_pos(
        &mut self,
        tag: &str,
    ) -> SymbolId {
        self.pos_tags.get_or_add(tag)
    }

    /// Look up a character; unseen characters map to [`UNK_INDEX`].
    pub fn get_char(
        &self,
        ch: &str,
    ) -> SymbolId {
        self.chars.get(ch).unwrap_or(UNK_INDEX)
    }

    /// Look up a character, if present.
    pub fn lookup_char(
        &self,
        ch: &str,
    ) -> Option<SymbolId> {
        self.chars.get(ch)
    }

    /// Return the index of a character, adding it if absent.
    pub fn get_or_add_char(
        &mut self,
        ch: &str,
    ) -> SymbolId {
        self.chars.get_or_add(ch)
    }

    /// Look up an action, if present.
    pub fn lookup_action(
        &self,
        action: &str,
    ) -> Option<SymbolId> {
        self.actions.get(action)
    }

    /// Return the index of an action, adding it (and its arc label) if absent.
    pub fn get_or_add_action(
        &mut self,
        action: &str,
    ) -> SymbolId {
        let id = self.actions.get_or_add(action);
        if id as usize == self.arc_labels.len() {
            self.arc_labels.push(derive_arc_label(action).to_string());
        }
        id
    }

    /// The arc label of the action at `index`.
    ///
    /// ## Returns
    /// The label, [`crate::vocab::NO_ARC_LABEL`] for unlabeled actions,
    /// or `None` if `index` is not an action.
    pub fn arc_label(
        &self,
        index: SymbolId,
    ) -> Option<&str> {
        self.arc_labels.get(index as usize).map(String::as_str)
    }

    /// Recompute every arc label from the action table.
    pub(crate) fn rederive_arc_labels(&mut self) {
        self.arc_labels = derive_arc_labels(self.actions.symbols());
    }

    /// Capture the current table sizes and training flags.
    pub fn checkpoint(&self) -> VocabCheckpoint {
        VocabCheckpoint {
            words: self.words.len(),
            pos_tags: self.pos_tags.len(),
            chars: self.chars.len(),
            actions: self.actions.len(),
            training_words: self.training_words.clone(),
        }
    }

    /// Undo all growth since `checkpoint` was taken.
    ///
    /// Only meaningful if no snapshot was loaded in between.
    pub fn rollback(
        &mut self,
        checkpoint: VocabCheckpoint,
    ) {
        self.words.truncate(checkpoint.words);
        self.pos_tags.truncate(checkpoint.pos_tags);
        self.chars.truncate(checkpoint.chars);
        self.actions.truncate(checkpoint.actions);
        self.arc_labels.truncate(checkpoint.actions);
        self.training_words = checkpoint.training_words;
    }
}
