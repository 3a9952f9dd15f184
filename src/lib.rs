//! Random nucleotide sequences with a windowed GC-content guarantee: every
//! sliding window of a configured size stays within a ± band around the
//! desired GC percentage, not just the sequence as a whole.

pub mod error;
pub mod gc;
pub mod generate;
pub mod logger;
pub mod output;
pub mod seq;

pub use error::{GcgenError, Result};
