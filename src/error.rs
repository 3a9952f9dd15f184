use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GcgenError {
    #[error("cannot compute GC content of an empty sequence")]
    EmptySequence,

    #[error("sequence length must be at least 1")]
    ZeroLength,

    #[error("window size must be at least 1")]
    ZeroWindow,

    #[error("window size {window_size} exceeds sequence length {length}")]
    WindowTooLarge { window_size: usize, length: usize },

    #[error("no {window_size} bp window with GC content in {lo}-{hi}% after {attempts} attempts")]
    ConstraintUnsatisfiable {
        window_size: usize,
        lo: u8,
        hi: u8,
        attempts: usize,
    },

    #[error(
        "sequence still has a {window_size} bp window with GC content outside {lo}-{hi}% after {repairs} repairs"
    )]
    RepairLimitExceeded {
        window_size: usize,
        lo: u8,
        hi: u8,
        repairs: usize,
    },

    #[error("unknown output format '{0}', expected 'fasta' or 'tab'")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, GcgenError>;
