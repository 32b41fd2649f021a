//! # Corpora
//!
//! A [`Corpus`] is a sequence of [`Sentence`]s, indexed against a shared
//! [`crate::vocab::Vocabulary`].
//!
//! ## Sentences
//!
//! Each [`Sentence`] maps token positions to word and POS indices;
//! out-of-vocabulary tokens keep their surface form, and characters are
//! recorded when spelling is enabled. The synthetic root token sits at
//! [`ROOT_POSITION`], after every real token.
//!
//! ## Parser Training Corpora
//!
//! A training corpus carries [`TrainingAnnotations`] (one gold action
//! sequence per sentence) and, once loaded, its [`SingletonWords`]:
//!
//! ```rust,no_run
//! use arcvocab::{
//!     corpus::{Corpus, ParserCorpusOptions},
//!     vocab::Vocabulary,
//! };
//!
//! fn example() -> arcvocab::CorpusResult<()> {
//!     let vocab = Vocabulary::new().into_shared();
//!
//!     let train = Corpus::load_parser_training(
//!         vocab.clone(),
//!         "train.oracle",
//!         ParserCorpusOptions::new(true).with_spelling(true),
//!     )?;
//!     let dev = Corpus::load_parser_training(
//!         vocab.clone(),
//!         "dev.oracle",
//!         ParserCorpusOptions::new(false).with_spelling(true),
//!     )?;
//!
//!     println!("{} / {} sentences", train.len(), dev.len());
//!     Ok(())
//! }
//! ```

mod base_corpus;

pub mod options;
pub mod sentence;
pub mod singletons;

#[doc(inline)]
pub use base_corpus::{Corpus, TrainingAnnotations};
#[doc(inline)]
pub use options::ParserCorpusOptions;
#[doc(inline)]
pub use sentence::{ROOT_POSITION, Sentence, SentenceCharMap, SentenceMap, SentenceUnkMap};
#[doc(inline)]
pub use singletons::SingletonWords;
