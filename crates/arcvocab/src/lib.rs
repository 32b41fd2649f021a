//! # `arcvocab` Parser Vocabulary and Corpus Ingestion
//!
//! This crate builds the symbol inventory and the indexed training data
//! for a transition-based (arc-standard / arc-hybrid) dependency parser.
//!
//! See:
//! * [`vocab`] to manage the parser [`vocab::Vocabulary`], and persist it.
//! * [`corpus`] to hold indexed sentences, gold actions, and singleton words.
//! * [`readers`] to parse oracle-transition and ``CoNLL-U`` files into a [`corpus::Corpus`].
//!
//! A training corpus and its evaluation corpora share one vocabulary;
//! the training read grows it, evaluation reads only look symbols up.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//!
//! #### feature: ``ahash``
//!
//! This swaps all ``HashMap`` implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::AVHashMap`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! This swaps all ``HashMap`` implementations for ``foldhash``.
//! If both "ahash" and "foldhash" are enabled, then "ahash" will win.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Loading A Training Corpus
//!
//! ```rust,no_run
//! use arcvocab::{
//!     corpus::{Corpus, ParserCorpusOptions},
//!     vocab::{Vocabulary, io::save_vocabulary_path},
//! };
//!
//! fn example() -> arcvocab::CorpusResult<()> {
//!     let vocab = Vocabulary::new().into_shared();
//!     let corpus = Corpus::load_parser_training(
//!         vocab.clone(),
//!         "train.oracle",
//!         ParserCorpusOptions::default(),
//!     )?;
//!
//!     let singletons = corpus.singletons().map_or(0, |s| s.len());
//!     println!("{} sentences; {singletons} singleton words", corpus.len());
//!
//!     save_vocabulary_path(&vocab.read(), "vocab.json")?;
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod errors;
pub mod readers;
pub mod types;
pub mod utility;
pub mod vocab;

#[doc(inline)]
pub use errors::{CorpusError, CorpusResult};
