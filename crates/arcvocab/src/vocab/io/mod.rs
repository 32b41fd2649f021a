//! # Vocabulary IO
//!
//! ## Persisting A Vocab
//!
//! A snapshot stores only the ``index -> string`` lists and the training flags.
//! Loading rebuilds each ``string -> index`` map positionally, so an index saved
//! in one process names the same symbol in the next.
//!
//! ```rust,no_run
//! use arcvocab::vocab::{
//!     Vocabulary,
//!     io::{load_vocab_snapshot_path, save_vocabulary_path},
//! };
//!
//! fn example() -> arcvocab::CorpusResult<Vocabulary> {
//!     let mut vocab = Vocabulary::new();
//!     vocab.get_or_add_word("parser", true);
//!     save_vocabulary_path(&vocab, "vocab.json")?;
//!
//!     // Later, possibly over a vocabulary that has since grown:
//!     if let Some(warning) = vocab.load_snapshot(load_vocab_snapshot_path("vocab.json")?)? {
//!         eprintln!("{warning}");
//!     }
//!     Ok(vocab)
//! }
//! ```

mod snapshot;

#[doc(inline)]
pub use snapshot::*;
