use std::io;

/// Everything that can stop a load or a search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dictionary word holds a byte outside `a..=z`.
    #[error("invalid letter {letter:?} in dictionary word {word:?}")]
    InvalidLetter { word: String, letter: char },

    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
