//! # Token Recording
//!
//! Shared word/POS/character bookkeeping for the corpus readers.

use crate::{
    corpus::Sentence,
    errors::{CorpusError, CorpusResult},
    types::{Position, SymbolId},
    utility::utf8_runs,
    vocab::{UNK_INDEX, Vocabulary},
};

/// Records tokens into a [`Sentence`] against a locked [`Vocabulary`].
///
/// Training recorders grow the word, POS and character tables;
/// evaluation recorders only look symbols up.
pub(crate) struct TokenRecorder<'v> {
    pub vocab: &'v mut Vocabulary,
    pub is_training: bool,
    pub use_spelling: bool,
}

impl TokenRecorder<'_> {
    /// Record `(word, pos)` at `position` of `sentence`.
    pub fn record_word(
        &mut self,
        sentence: &mut Sentence,
        position: Position,
        word: &str,
        pos: &str,
        line_no: usize,
    ) -> CorpusResult<()> {
        if sentence.words.contains_key(&position) {
            return Err(CorpusError::format(
                line_no,
                format!("duplicate token position {position}"),
            ));
        }

        let word_id = if self.is_training {
            self.vocab.get_or_add_word(word, true)
        } else {
            match self.vocab.lookup_word(word) {
                Some(id) => id,
                None => {
                    sentence
                        .unk_surface_forms
                        .insert(position, word.to_string());
                    UNK_INDEX
                }
            }
        };

        let pos_id = if self.is_training {
            self.vocab.get_or_add_pos(pos)
        } else {
            self.vocab.get_pos(pos)
        };

        if self.use_spelling {
            let chars = self.char_ids(word);
            sentence.chars.insert(position, chars);
        }

        sentence.insert_token(position, word_id, pos_id);
        Ok(())
    }

    /// Decompose `word` into code-point runs, as character indices.
    ///
    /// Evaluation-mode misses map to [`UNK_INDEX`].
    fn char_ids(
        &mut self,
        word: &str,
    ) -> Vec<SymbolId> {
        utf8_runs(word)
            .map(|run| {
                if self.is_training {
                    self.vocab.get_or_add_char(run)
                } else {
                    self.vocab.get_char(run)
                }
            })
            .collect()
    }
}
