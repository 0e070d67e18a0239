use thiserror::Error;

pub type Result<T> = std::result::Result<T, AcqError>;

#[derive(Debug, Error)]
pub enum AcqError {
    #[error("config error: {0}")]
    Config(String),

    #[error("short read: frame {index} needs {expected} bytes, got {got}")]
    ShortRead {
        index: u64,
        expected: usize,
        got: usize,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
