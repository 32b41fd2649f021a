//! # Sentences

use std::collections::BTreeMap;

use crate::{
    types::{Position, SymbolId},
    vocab::{NOT_FOUND, PAD_INDEX, ROOT, Vocabulary},
};

/// The position key of the synthetic root token.
///
/// Greater than every real position, so the root iterates last.
pub const ROOT_POSITION: Position = Position::MAX;

/// `{ Position -> SymbolId }` map.
///
/// ## Style Hints
/// Instance names should prefer `words`, or `poses`.
pub type SentenceMap = BTreeMap<Position, SymbolId>;

/// `{ Position -> String }` map of out-of-vocabulary surface forms.
pub type SentenceUnkMap = BTreeMap<Position, String>;

/// `{ Position -> Vec<SymbolId> }` map of per-token character indices.
pub type SentenceCharMap = BTreeMap<Position, Vec<SymbolId>>;

/// A sentence as vocabulary indices.
///
/// Positions need not be contiguous; the root, when present,
/// is keyed at [`ROOT_POSITION`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sentence {
    /// Word index per position.
    pub words: SentenceMap,

    /// POS index per position.
    pub poses: SentenceMap,

    /// Literal spelling of each word which was out-of-vocabulary when read.
    pub unk_surface_forms: SentenceUnkMap,

    /// Character indices per position; empty unless spelling features were recorded.
    pub chars: SentenceCharMap,
}

impl Sentence {
    /// Create an empty sentence.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of real tokens; the root is not counted.
    pub fn size(&self) -> usize {
        self.words.len() - usize::from(self.has_root())
    }

    /// Does the sentence hold no real tokens?
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Has the root token been appended?
    pub fn has_root(&self) -> bool {
        self.words.contains_key(&ROOT_POSITION)
    }

    /// Record a token.
    ///
    /// ## Arguments
    /// * `position` - the token position; must not be [`ROOT_POSITION`].
    /// * `word` - the word index.
    /// * `pos` - the POS index, or [`NOT_FOUND`].
    pub fn insert_token(
        &mut self,
        position: Position,
        word: SymbolId,
        pos: SymbolId,
    ) {
        debug_assert_ne!(position, ROOT_POSITION);
        self.words.insert(position, word);
        self.poses.insert(position, pos);
    }

    /// Append the synthetic root token.
    ///
    /// The root's word slot holds [`PAD_INDEX`] and its POS slot [`NOT_FOUND`];
    /// neither is a vocabulary lookup.
    pub fn push_root(&mut self) {
        self.words.insert(ROOT_POSITION, PAD_INDEX);
        self.poses.insert(ROOT_POSITION, NOT_FOUND);
    }

    /// Iterate over the real tokens as ``(position, word, pos)``, in position order.
    pub fn tokens(&self) -> impl Iterator<Item = (Position, SymbolId, SymbolId)> + '_ {
        self.words
            .iter()
            .filter(|&(&position, _)| position != ROOT_POSITION)
            .map(|(&position, &word)| {
                let pos = self.poses.get(&position).copied().unwrap_or(NOT_FOUND);
                (position, word, pos)
            })
    }

    /// The word indices in position order, root last.
    pub fn word_ids(&self) -> Vec<SymbolId> {
        self.words.values().copied().collect()
    }

    /// The POS indices in position order, root last.
    pub fn pos_ids(&self) -> Vec<SymbolId> {
        self.poses.values().copied().collect()
    }

    /// The character indices recorded for `position`, if any.
    pub fn char_ids(
        &self,
        position: Position,
    ) -> Option<&[SymbolId]> {
        self.chars.get(&position).map(Vec::as_slice)
    }

    /// The spelling of the token at `position`.
    ///
    /// Out-of-vocabulary tokens report their recorded surface form;
    /// the root reports [`ROOT`]; others are spelled from `vocab`.
    pub fn surface_form<'a>(
        &'a self,
        position: Position,
        vocab: &'a Vocabulary,
    ) -> Option<&'a str> {
        if position == ROOT_POSITION {
            return self.has_root().then_some(ROOT);
        }
        if let Some(form) = self.unk_surface_forms.get(&position) {
            return Some(form.as_str());
        }
        self.words
            .get(&position)
            .and_then(|&word| vocab.words().symbol(word))
    }
}
