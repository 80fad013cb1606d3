//! Error types.
//!
//! - `MoveError`: a rejected move or Add-Pieces amount. Always recovered
//!   locally by asking again.
//! - `FrontendError`: the I/O collaborator can no longer answer.
//! - `MatchError`: what a match or session operation can fail with.

use std::fmt;

/// Why a proposed amount was not applied to the pile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The reply could not be read as an integer.
    NotANumber(String),
    /// The amount is outside the legal range.
    OutOfRange { amount: i64, min: u32, max: u32 },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotANumber(raw) => write!(f, "'{}' is not a valid number", raw.trim()),
            MoveError::OutOfRange { amount, min, max } => {
                write!(f, "{amount} is not allowed, choose between {min} and {max}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// The frontend failed to produce an answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrontendError {
    /// No more input will arrive (end of stdin, exhausted script).
    Closed,
    /// The underlying terminal reported an error.
    Io(String),
}

impl fmt::Display for FrontendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontendError::Closed => write!(f, "input closed"),
            FrontendError::Io(msg) => write!(f, "terminal error: {msg}"),
        }
    }
}

impl std::error::Error for FrontendError {}

/// Failure of a match or session operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// A turn was requested while the match is not in its active phase.
    NotActive,
    /// `start` was called on a match that already started.
    AlreadyStarted,
    /// The frontend gave up mid-match.
    Frontend(FrontendError),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::NotActive => write!(f, "match is not active"),
            MatchError::AlreadyStarted => write!(f, "match has already started"),
            MatchError::Frontend(e) => write!(f, "match aborted: {e}"),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Frontend(e) => Some(e),
            MatchError::NotActive | MatchError::AlreadyStarted => None,
        }
    }
}

impl From<FrontendError> for MatchError {
    fn from(e: FrontendError) -> Self {
        MatchError::Frontend(e)
    }
}

/// Parse a raw reply and check it against an inclusive range.
pub fn parse_amount(raw: &str, min: u32, max: u32) -> Result<u32, MoveError> {
    let amount: i64 = raw
        .trim()
        .parse()
        .map_err(|_| MoveError::NotANumber(raw.to_string()))?;
    if amount < i64::from(min) || amount > i64::from(max) {
        return Err(MoveError::OutOfRange { amount, min, max });
    }
    Ok(amount as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 3\n", 1, 5), Ok(3));
        assert_eq!(parse_amount("1", 1, 1), Ok(1));
        assert_eq!(
            parse_amount("abc", 1, 5),
            Err(MoveError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_amount("-2", 1, 5),
            Err(MoveError::OutOfRange { amount: -2, min: 1, max: 5 })
        );
        assert_eq!(
            parse_amount("6", 1, 5),
            Err(MoveError::OutOfRange { amount: 6, min: 1, max: 5 })
        );
    }

    #[test]
    fn test_display() {
        let e = MoveError::OutOfRange { amount: 9, min: 1, max: 4 };
        assert_eq!(e.to_string(), "9 is not allowed, choose between 1 and 4");

        let e = MatchError::from(FrontendError::Closed);
        assert_eq!(e.to_string(), "match aborted: input closed");
    }
}
