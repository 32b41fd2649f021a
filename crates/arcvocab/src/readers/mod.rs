//! # Corpus Readers
//!
//! A [`CorpusReader`] parses one source format into a [`Corpus`],
//! growing the corpus's vocabulary as it goes.
//!
//! Callers hold a `&dyn CorpusReader`; the concrete formats are:
//! * [`OracleTransitionReader`] - tokens with gold oracle transitions,
//! * [`ConllUReader`] - plain ``CoNLL-U`` treebanks.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    corpus::Corpus,
    errors::{CorpusError, CorpusResult},
};

mod conllu_reader;
mod oracle_reader;
mod token_recorder;

#[doc(inline)]
pub use conllu_reader::ConllUReader;
#[doc(inline)]
pub use oracle_reader::{ACTION_SECTION_MARKER, OracleTransitionReader};

/// Parses a source format into a [`Corpus`].
///
/// Implementations may add entries to the corpus vocabulary.
/// On error, the caller must treat the corpus as invalid;
/// [`Corpus::read`] and [`Corpus::read_path`] roll back partial reads.
pub trait CorpusReader {
    /// Parse `source`, appending its sentences to `corpus`.
    fn read_sentences(
        &self,
        source: &mut dyn BufRead,
        corpus: &mut Corpus,
    ) -> CorpusResult<()>;

    /// Parse the file at `path`, appending its sentences to `corpus`.
    ///
    /// Errors are attributed to `path`.
    fn read_path(
        &self,
        path: &Path,
        corpus: &mut Corpus,
    ) -> CorpusResult<()> {
        let file = File::open(path).map_err(|err| CorpusError::from(err).in_file(path))?;
        let mut source = BufReader::new(file);
        self.read_sentences(&mut source, corpus)
            .map_err(|err| err.in_file(path))
    }
}
