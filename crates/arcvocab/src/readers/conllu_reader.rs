//! # ``CoNLL-U`` Reader
//!
//! Reads plain ``CoNLL-U`` treebanks (<https://universaldependencies.org/format.html>):
//! ten tab-separated columns per token, sentences separated by blank lines.
//!
//! Only ID, FORM, UPOS and XPOS are used:
//! * token `ID` `n` is stored at position `n - 1`;
//! * the POS tag is UPOS, or XPOS when UPOS is ``_``;
//! * ``#`` comment lines, multiword ranges (``3-4``) and empty nodes (``3.1``) are skipped.

use std::io::BufRead;

use crate::{
    corpus::{Corpus, Sentence},
    errors::{CorpusError, CorpusResult},
    readers::{CorpusReader, token_recorder::TokenRecorder},
    types::Position,
    utility::NumberedLines,
};

const CONLLU_COLUMNS: usize = 10;

const ID: usize = 0;
const FORM: usize = 1;
const UPOS: usize = 3;
const XPOS: usize = 4;

/// Reads ``CoNLL-U`` files into a plain corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConllUReader {
    is_training: bool,
}

impl ConllUReader {
    /// Create a reader.
    ///
    /// ## Arguments
    /// * `is_training` - grow the vocabulary, or only look symbols up.
    pub fn new(is_training: bool) -> Self {
        Self { is_training }
    }

    /// Is this a training-mode reader?
    pub fn is_training(&self) -> bool {
        self.is_training
    }
}

fn finish_sentence(
    sentence: &mut Sentence,
    corpus: &mut Corpus,
) {
    if sentence.words.is_empty() {
        return;
    }
    let mut sentence = std::mem::take(sentence);
    sentence.push_root();
    corpus.push_sentence(sentence);
}

/// Parse a token ID; `None` for multiword ranges and empty nodes.
fn parse_token_id(
    id: &str,
    line_no: usize,
) -> CorpusResult<Option<Position>> {
    if id.contains(['-', '.']) {
        return Ok(None);
    }
    match id.parse::<Position>() {
        Ok(n) if n > 0 => Ok(Some(n - 1)),
        _ => Err(CorpusError::format(
            line_no,
            format!("expected a positive token ID, found {id:?}"),
        )),
    }
}

impl CorpusReader for ConllUReader {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn read_sentences(
        &self,
        source: &mut dyn BufRead,
        corpus: &mut Corpus,
    ) -> CorpusResult<()> {
        let shared = corpus.vocab().clone();
        let mut vocab = shared.write();
        let mut recorder = TokenRecorder {
            vocab: &mut *vocab,
            is_training: self.is_training,
            use_spelling: corpus.use_spelling(),
        };

        let start = corpus.len();
        let mut sentence = Sentence::new();

        for line in NumberedLines::new(source) {
            let (line_no, line) = line?;
            let line = line.trim_end();

            if line.trim_start().is_empty() {
                finish_sentence(&mut sentence, corpus);
                continue;
            }
            if line.starts_with('#') {
                continue;
            }

            let columns: Vec<&str> = line.split('\t').collect();
            if columns.len() != CONLLU_COLUMNS {
                return Err(CorpusError::format(
                    line_no,
                    format!(
                        "expected {CONLLU_COLUMNS} tab-separated columns, found {}",
                        columns.len()
                    ),
                ));
            }

            let Some(position) = parse_token_id(columns[ID].trim(), line_no)? else {
                continue;
            };

            let pos = match columns[UPOS] {
                "_" => columns[XPOS],
                upos => upos,
            };

            recorder.record_word(&mut sentence, position, columns[FORM], pos, line_no)?;
        }
        finish_sentence(&mut sentence, corpus);

        log::debug!("read {} CoNLL-U sentences", corpus.len() - start);
        Ok(())
    }
}
