//! # Vocabulary
//!
//! This module provides the parser vocabulary and its persistence.
//!
//! ## Symbol Tables
//!
//! [`SymbolTable`] is the append-only ``{ String <-> T }`` index underlying
//! every vocabulary table.
//!
//! ## Parser Vocabulary
//!
//! [`Vocabulary`] contains:
//! * `words` - a [`SymbolTable`], with reserved [`BAD0`] and [`UNK`] entries,
//! * `pos_tags` - a closed [`SymbolTable`] of part-of-speech tags,
//! * `chars` - a [`SymbolTable`] of UTF-8 characters, with reserved [`BAD0`] and [`UNK`] entries,
//! * `actions` - a [`SymbolTable`] of oracle transitions, and their derived arc labels.
pub mod io;

pub mod arc_labels;
pub mod symbol_table;
pub mod vocabulary;

#[doc(inline)]
pub use arc_labels::{NO_ARC_LABEL, derive_arc_label};
#[doc(inline)]
pub use symbol_table::SymbolTable;
#[doc(inline)]
pub use vocabulary::{
    BAD0,
    NOT_FOUND,
    PAD_INDEX,
    ROOT,
    SharedVocabulary,
    UNK,
    UNK_INDEX,
    VocabCheckpoint,
    Vocabulary,
};
