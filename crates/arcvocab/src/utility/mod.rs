//! # Support Utilities

pub mod lines;
pub mod utf8;

#[doc(inline)]
pub use lines::NumberedLines;
#[doc(inline)]
pub use utf8::{Utf8Runs, utf8_len, utf8_runs};
