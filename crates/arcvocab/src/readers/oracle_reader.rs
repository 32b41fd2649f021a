//! # Oracle Transition Reader
//!
//! Reads sentences paired with their gold (oracle) transition sequences.
//!
//! ## Format
//!
//! ```text
//! <word> <POS>
//! <word> <POS>
//! ...
//! --
//! <action>
//! <action>
//! ...
//! ```
//!
//! * Each block is one sentence: its token lines, a ``--`` line, then its action lines.
//! * A token line has exactly two whitespace-separated fields.
//! * An action line has exactly one field; actions are opaque, except that
//!   ``LEFT-ARC(label)`` / ``RIGHT-ARC(label)`` carry an arc label.
//! * One or more blank lines end a block; so does the end of the input.
//!   A block which ends before its ``--`` line has no actions.
//! * Tokens are numbered from 0 in file order; a root token is appended
//!   after the last one.
//!
//! ```text
//! The DT
//! cat NN
//! sat VBD
//! --
//! SHIFT
//! SHIFT
//! LEFT-ARC(det)
//! SHIFT
//! LEFT-ARC(nsubj)
//! ```

use std::io::BufRead;

use crate::{
    corpus::{Corpus, ROOT_POSITION, Sentence},
    errors::{CorpusError, CorpusResult},
    readers::{CorpusReader, token_recorder::TokenRecorder},
    types::{Position, SymbolId},
    utility::NumberedLines,
    vocab::Vocabulary,
};

/// The line separating a block's token lines from its action lines.
pub const ACTION_SECTION_MARKER: &str = "--";

/// Reads the oracle-transition format into a training corpus.
///
/// Sentences and gold action sequences are appended in lockstep via
/// [`Corpus::push_training_sentence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleTransitionReader {
    is_training: bool,
}

impl OracleTransitionReader {
    /// Create a reader.
    ///
    /// ## Arguments
    /// * `is_training` - grow the vocabulary (training data), or only look
    ///   symbols up (evaluation data). In evaluation mode an unknown action
    ///   is an error.
    pub fn new(is_training: bool) -> Self {
        Self { is_training }
    }

    /// Is this a training-mode reader?
    pub fn is_training(&self) -> bool {
        self.is_training
    }

    fn record_action(
        &self,
        vocab: &mut Vocabulary,
        action: &str,
        line_no: usize,
    ) -> CorpusResult<SymbolId> {
        if self.is_training {
            return Ok(vocab.get_or_add_action(action));
        }
        vocab
            .lookup_action(action)
            .ok_or_else(|| CorpusError::UnknownAction {
                line: line_no,
                action: action.to_string(),
            })
    }
}

/// The sentence block being read.
#[derive(Default)]
struct OracleBlock {
    sentence: Sentence,
    actions: Vec<SymbolId>,
    next_position: Position,
    in_actions: bool,
}

impl OracleBlock {
    fn is_empty(&self) -> bool {
        self.sentence.words.is_empty() && self.actions.is_empty()
    }

    fn finish(
        &mut self,
        corpus: &mut Corpus,
    ) {
        let mut block = std::mem::take(self);
        block.sentence.push_root();
        corpus.push_training_sentence(block.sentence, block.actions);
    }
}

impl CorpusReader for OracleTransitionReader {
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
        let mut block = OracleBlock::default();

        for line in NumberedLines::new(source) {
            let (line_no, line) = line?;
            let fields: Vec<&str> = line.split_whitespace().collect();

            match fields.as_slice() {
                [] => {
                    if !block.is_empty() {
                        block.finish(corpus);
                    }
                }
                [marker] if *marker == ACTION_SECTION_MARKER => {
                    if block.in_actions {
                        return Err(CorpusError::format(
                            line_no,
                            format!("repeated {ACTION_SECTION_MARKER:?} line in sentence block"),
                        ));
                    }
                    if block.sentence.words.is_empty() {
                        return Err(CorpusError::format(
                            line_no,
                            "sentence block has no tokens",
                        ));
                    }
                    block.in_actions = true;
                }
                [word, pos] if !block.in_actions => {
                    let position = block.next_position;
                    if position == ROOT_POSITION {
                        return Err(CorpusError::format(line_no, "too many tokens in sentence"));
                    }
                    block.next_position += 1;

                    recorder.record_word(&mut block.sentence, position, word, pos, line_no)?;
                }
                [action] if block.in_actions => {
                    let id = self.record_action(recorder.vocab, action, line_no)?;
                    block.actions.push(id);
                }
                _ => {
                    let expected = if block.in_actions {
                        "`<action>` or a blank line".to_string()
                    } else {
                        format!("`<word> <POS>` or `{ACTION_SECTION_MARKER}`")
                    };
                    return Err(CorpusError::format(
                        line_no,
                        format!(
                            "expected {expected}, found {} fields: {line:?}",
                            fields.len()
                        ),
                    ));
                }
            }
        }

        if !block.is_empty() {
            block.finish(corpus);
        }

        log::debug!(
            "read {} oracle sentences ({})",
            corpus.len() - start,
            if self.is_training { "training" } else { "evaluation" }
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{NOT_FOUND, PAD_INDEX, UNK_INDEX};

    const ORACLE: &str = "\
The DT
cat NN
sat VBD
--
SHIFT
SHIFT
LEFT-ARC(det)
SHIFT
LEFT-ARC(nsubj)

The DT
dog NN
--
SHIFT
SHIFT
LEFT-ARC(det)
";

    fn read(
        corpus: &mut Corpus,
        reader: OracleTransitionReader,
        text: &str,
    ) -> CorpusResult<()> {
        corpus.read(&reader, &mut text.as_bytes())
    }

    #[test]
    fn test_read_training() {
        let vocab = Vocabulary::new().into_shared();
        let mut corpus = Corpus::with_training(vocab.clone());

        read(&mut corpus, OracleTransitionReader::new(true), ORACLE).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.sentences()[0].size(), 3);
        assert_eq!(corpus.sentences()[1].size(), 2);
        assert_eq!(corpus.gold_actions(0).unwrap().len(), 5);
        assert_eq!(corpus.gold_actions(1).unwrap().len(), 3);

        let vocab = vocab.read();
        assert_eq!(vocab.count_words(), 2 + 4);
        assert_eq!(vocab.count_pos(), 3);
        assert_eq!(vocab.count_actions(), 3);
        assert_eq!(vocab.count_chars(), 2);

        let first = &corpus.sentences()[0];
        let the = vocab.get_word("The");
        assert_eq!(first.words[&0], the);
        assert!(vocab.is_training_word(the));
        assert_eq!(first.poses[&2], vocab.get_pos("VBD"));
        assert_eq!(first.words[&ROOT_POSITION], PAD_INDEX);
        assert_eq!(first.poses[&ROOT_POSITION], NOT_FOUND);
        assert!(first.unk_surface_forms.is_empty());
        assert!(first.chars.is_empty());

        let left_det = vocab.lookup_action("LEFT-ARC(det)").unwrap();
        assert_eq!(corpus.gold_actions(1), Some(&[0, 0, left_det][..]));
        assert_eq!(vocab.arc_label(left_det), Some("det"));
    }

    #[test]
    fn test_read_evaluation_never_grows() {
        let vocab = Vocabulary::new().into_shared();
        let mut train = Corpus::with_training(vocab.clone());
        read(&mut train, OracleTransitionReader::new(true), ORACLE).unwrap();

        let before = vocab.read().checkpoint();

        let dev = "a DT\nbird NNX\n--\nSHIFT\nLEFT-ARC(det)\n";
        let mut corpus = Corpus::with_training(vocab.clone());
        read(&mut corpus, OracleTransitionReader::new(false), dev).unwrap();

        assert_eq!(vocab.read().checkpoint(), before);

        let sentence = &corpus.sentences()[0];
        assert_eq!(sentence.words[&0], UNK_INDEX);
        assert_eq!(sentence.words[&1], UNK_INDEX);
        assert_eq!(sentence.unk_surface_forms[&0], "a");
        assert_eq!(sentence.unk_surface_forms[&1], "bird");
        assert_eq!(sentence.poses[&0], vocab.read().get_pos("DT"));
        assert_eq!(sentence.poses[&1], NOT_FOUND);
    }

    #[test]
    fn test_unknown_action_in_evaluation() {
        let vocab = Vocabulary::new().into_shared();
        let mut corpus = Corpus::with_training(vocab);

        let err = read(
            &mut corpus,
            OracleTransitionReader::new(false),
            "a DT\n--\nSWAP\n",
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CorpusError::UnknownAction { line: 3, ref action } if action == "SWAP"
        ));
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_spelling() {
        let vocab = Vocabulary::new().into_shared();
        let mut corpus = Corpus::with_training(vocab.clone()).with_spelling(true);

        read(
            &mut corpus,
            OracleTransitionReader::new(true),
            "\u{4f60}\u{597d} NN\nab NN\n--\nSHIFT\n",
        )
        .unwrap();

        let vocab = vocab.read();
        // <BAD0>, <UNK>, two CJK characters, 'a', 'b'.
        assert_eq!(vocab.count_chars(), 6);
        assert_eq!(vocab.chars().symbol(2), Some("\u{4f60}"));

        let sentence = &corpus.sentences()[0];
        assert_eq!(sentence.char_ids(0), Some(&[2, 3][..]));
        assert_eq!(sentence.char_ids(1), Some(&[4, 5][..]));
        assert_eq!(sentence.char_ids(ROOT_POSITION), None);
    }

    #[test]
    fn test_spelling_evaluation_misses_unk() {
        let vocab = Vocabulary::new().into_shared();
        let mut train = Corpus::with_training(vocab.clone()).with_spelling(true);
        read(&mut train, OracleTransitionReader::new(true), "ab NN\n--\nSHIFT\n").unwrap();

        let mut dev = Corpus::with_training(vocab.clone()).with_spelling(true);
        read(&mut dev, OracleTransitionReader::new(false), "bz NN\n--\nSHIFT\n").unwrap();

        let b = vocab.read().lookup_char("b").unwrap();
        assert_eq!(dev.sentences()[0].char_ids(0), Some(&[b, UNK_INDEX][..]));
        assert_eq!(vocab.read().count_chars(), 4);
    }

    #[test]
    fn test_tolerates_whitespace_variance() {
        let vocab = Vocabulary::new().into_shared();
        let mut corpus = Corpus::with_training(vocab);

        let text = "\n\n  The\tDT  \r\ncat NN\r\n -- \r\nSHIFT\r\n \t\r\n\r\n\ndog NN\n--\nSHIFT";
        read(&mut corpus, OracleTransitionReader::new(true), text).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.sentences()[0].size(), 2);
        assert_eq!(corpus.sentences()[1].size(), 1);
    }

    #[test]
    fn test_tokens_without_actions() {
        let vocab = Vocabulary::new().into_shared();
        let mut corpus = Corpus::with_training(vocab);

        let text = "a DT\n\nb DT\n--\nSHIFT\n\nc DT\n--\n";
        read(&mut corpus, OracleTransitionReader::new(true), text).unwrap();

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.gold_actions(0), Some(&[][..]));
        assert_eq!(corpus.gold_actions(1).map(<[u32]>::len), Some(1));
        assert_eq!(corpus.gold_actions(2), Some(&[][..]));
    }

    #[test]
    fn test_empty_input() {
        let vocab = Vocabulary::new().into_shared();
        let mut corpus = Corpus::with_training(vocab);

        read(&mut corpus, OracleTransitionReader::new(true), "").unwrap();
        read(&mut corpus, OracleTransitionReader::new(true), "\n\n  \n").unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_format_errors() {
        let cases: &[(&str, usize)] = &[
            // wrong column count.
            ("a DT x\n--\nSHIFT\n", 1),
            // token line missing its POS.
            ("The DT\ncat\nSHIFT\n", 2),
            ("The DT\ncat\n--\nSHIFT\nSHIFT\n", 2),
            // token after actions.
            ("a DT\n--\nSHIFT\nb DT\n", 4),
            // extra fields in the action section.
            ("a DT\n--\nSHIFT\nLEFT-ARC (det)\n", 4),
            // repeated section marker.
            ("a DT\n--\n--\nSHIFT\n", 3),
            // zero-token block.
            ("a DT\n--\nSHIFT\n\n--\nSHIFT\n", 5),
            ("a DT\n--\nSHIFT\n\nSHIFT\n", 5),
        ];

        for &(text, line) in cases {
            let vocab = Vocabulary::new().into_shared();
            let mut corpus = Corpus::with_training(vocab.clone());

            let err = read(&mut corpus, OracleTransitionReader::new(true), text).unwrap_err();
            assert!(
                matches!(err, CorpusError::Format { line: l, .. } if l == line),
                "{text:?}: {err}"
            );

            // Nothing from a failed read survives.
            assert!(corpus.is_empty());
            assert_eq!(corpus.gold_actions(0), None);
            assert_eq!(*vocab.read(), Vocabulary::new());
        }
    }
}
