//! Error types for the cds-base58 crate.

/// Error type for all fallible operations in the cds-base58 crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base58Error {
    /// Returned when the input cannot be encoded or decoded at all:
    /// a negative integer on encode, or an empty string on decode.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Short description of what was wrong with the input.
        reason: &'static str,
    },

    /// Returned when a character outside the alphabet appears in the input.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character index within the decoded string.
        position: usize,
    },

    /// Returned when an alphabet does not have exactly 58 characters.
    #[error("alphabet must have 58 characters, got {len}")]
    AlphabetLength {
        /// Number of characters supplied.
        len: usize,
    },

    /// Returned when an alphabet contains a character more than once.
    #[error("alphabet contains {character:?} more than once")]
    DuplicateCharacter {
        /// The repeated character.
        character: char,
    },

    /// Returned when an alphabet contains a non-ASCII character.
    #[error("alphabet character {character:?} is not ASCII")]
    NonAsciiCharacter {
        /// The non-ASCII character.
        character: char,
    },

    /// Returned when a decoded value does not fit the requested integer type.
    #[error("decoded value does not fit in {target}")]
    Overflow {
        /// Name of the narrow integer type.
        target: &'static str,
    },
}
