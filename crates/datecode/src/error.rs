//! Error types for the cds-datecode crate.

use cds_base58::Base58Error;
use chrono::NaiveDate;

/// Error type for all fallible operations in the cds-datecode crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateCodecError {
    /// Returned when a date, or a decoded day offset, falls outside the
    /// representable range (before the epoch, or beyond the calendar).
    #[error("date out of range: {reason}")]
    DateOutOfRange {
        /// Description of the offending value.
        reason: String,
    },

    /// Returned when a date is too far past the epoch for the payload width.
    #[error("date {date} has day offset {offset}, which does not fit in {width} digits")]
    EncodingOverflow {
        /// The date being encoded.
        date: NaiveDate,
        /// Its day offset from the epoch.
        offset: u64,
        /// The fixed payload width.
        width: usize,
    },

    /// Returned when a token has the wrong prefix or the wrong length.
    #[error("malformed token {token:?}: {reason}")]
    MalformedToken {
        /// The rejected token.
        token: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Returned when a token payload contains a character outside the alphabet.
    #[error("invalid character {character:?} at payload position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based index within the payload (after the prefix).
        position: usize,
    },

    /// Returned when a [`FormatConfig`](crate::FormatConfig) fails validation.
    #[error("invalid format config: {reason}")]
    InvalidConfig {
        /// Description of the violated constraint.
        reason: String,
    },

    /// Any other failure reported by the integer codec.
    #[error(transparent)]
    Base58(Base58Error),
}

impl From<Base58Error> for DateCodecError {
    fn from(err: Base58Error) -> Self {
        match err {
            Base58Error::InvalidCharacter {
                character,
                position,
            } => Self::InvalidCharacter {
                character,
                position,
            },
            other => Self::Base58(other),
        }
    }
}
