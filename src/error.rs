use thiserror::Error;

use std::{io, num::ParseIntError};

/// Errors raised while turning a line of text into a [`Sample`](crate::Sample).
///
/// `Empty` and `InvalidToken` are both reported to the user as invalid input,
/// the distinction only shows up in logs.
#[derive(Debug, Error)]
pub enum Error {
    /// The line held no tokens at all
    #[error("no integers in input")]
    Empty,
    /// A token could not be read as a base-10 integer
    #[error("invalid integer `{token}`: {source}")]
    InvalidToken {
        /// The offending token, verbatim
        token: String,
        /// Why the conversion failed
        source: ParseIntError,
    },
    /// The input line could not be read
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns `true` for the errors the user sees as "please enter at least one integer"
    ///
    /// # Returns
    ///
    /// * `bool` - True for `Empty` and `InvalidToken`
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Empty | Self::InvalidToken { .. })
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
