//! Error types for the sticks crate

use thiserror::Error;

/// Main error type for the sticks crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("a game needs at least one stick, got {sticks}")]
    InvalidStickCount { sticks: usize },

    #[error("illegal move: cannot take {take} with {sticks} sticks remaining")]
    IllegalMove { sticks: usize, take: usize },

    #[error("game already over")]
    GameOver,

    #[error("hat for position {position} is empty")]
    EmptyHat { position: usize },

    #[error("no hat exists for position {position}")]
    UnknownPosition { position: usize },

    #[error("position {position} was already drawn from in the current game")]
    PositionAlreadyPlayed { position: usize },

    #[error("invalid ball counts {counts:?} for position {position}")]
    InvalidHatCounts { position: usize, counts: [u32; 3] },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
