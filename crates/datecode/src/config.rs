//! Format constants for date tokens.

use cds_base58::Alphabet;
use chrono::NaiveDate;

use crate::error::DateCodecError;

/// Prefix character of canonical tokens.
pub const DEFAULT_PREFIX: char = '[';

/// Payload width of canonical tokens, in digits.
pub const DEFAULT_WIDTH: usize = 3;

/// Widest accepted payload. Five digits already span the whole calendar.
pub const MAX_WIDTH: usize = 16;

/// Version tag of the canonical token format.
pub const FORMAT_VERSION: &str = "25.A";

/// Epoch of canonical tokens: 1970-01-01.
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("1970-01-01 is a valid date")
}

/// The four constants that define a token format.
///
/// A token is `prefix` followed by the day offset from `epoch`, written in
/// `alphabet` and left-padded with the zero digit to exactly `width`
/// characters.
///
/// # Example
///
/// ```
/// use cds_datecode::FormatConfig;
/// use chrono::NaiveDate;
///
/// let config = FormatConfig::new()
///     .with_epoch(NaiveDate::from_ymd_opt(2001, 1, 1).unwrap())
///     .with_prefix('(')
///     .with_width(4);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    epoch: NaiveDate,
    alphabet: Alphabet,
    prefix: char,
    width: usize,
}

impl FormatConfig {
    /// Creates the canonical format.
    ///
    /// Defaults: epoch 1970-01-01, Bitcoin alphabet, prefix `[`, width 3.
    pub fn new() -> Self {
        Self {
            epoch: default_epoch(),
            alphabet: Alphabet::BITCOIN,
            prefix: DEFAULT_PREFIX,
            width: DEFAULT_WIDTH,
        }
    }

    /// Sets the date that encodes as day offset 1.
    pub fn with_epoch(mut self, epoch: NaiveDate) -> Self {
        self.epoch = epoch;
        self
    }

    /// Sets the digit alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Sets the prefix character.
    pub fn with_prefix(mut self, prefix: char) -> Self {
        self.prefix = prefix;
        self
    }

    /// Sets the payload width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Returns the epoch.
    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Returns the digit alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the prefix character.
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// Returns the payload width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the width is outside `1..=MAX_WIDTH` or the
    /// prefix is also a digit of the alphabet.
    pub fn validate(&self) -> Result<(), DateCodecError> {
        if self.width < 1 {
            return Err(DateCodecError::InvalidConfig {
                reason: "payload width must be >= 1".to_string(),
            });
        }
        if self.width > MAX_WIDTH {
            return Err(DateCodecError::InvalidConfig {
                reason: format!(
                    "payload width must be <= {MAX_WIDTH}, got {}",
                    self.width
                ),
            });
        }
        if self.alphabet.contains(self.prefix) {
            return Err(DateCodecError::InvalidConfig {
                reason: format!("prefix {:?} is also an alphabet digit", self.prefix),
            });
        }
        Ok(())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FormatConfig::default();
        assert_eq!(config.epoch(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(config.alphabet(), &Alphabet::BITCOIN);
        assert_eq!(config.prefix(), '[');
        assert_eq!(config.width(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_chain() {
        let epoch = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
        let config = FormatConfig::new()
            .with_epoch(epoch)
            .with_prefix('(')
            .with_width(5);
        assert_eq!(config.epoch(), epoch);
        assert_eq!(config.prefix(), '(');
        assert_eq!(config.width(), 5);
    }

    #[test]
    fn zero_width_rejected() {
        let err = FormatConfig::new().with_width(0).validate().unwrap_err();
        assert_eq!(
            err,
            DateCodecError::InvalidConfig {
                reason: "payload width must be >= 1".to_string()
            }
        );
    }

    #[test]
    fn huge_width_rejected() {
        let err = FormatConfig::new()
            .with_width(1usize << 32)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            DateCodecError::InvalidConfig {
                reason: "payload width must be <= 16, got 4294967296".to_string()
            }
        );
    }

    #[test]
    fn max_width_accepted() {
        assert!(FormatConfig::new().with_width(MAX_WIDTH).validate().is_ok());
        assert!(FormatConfig::new().with_width(MAX_WIDTH + 1).validate().is_err());
    }

    #[test]
    fn prefix_in_alphabet_rejected() {
        let err = FormatConfig::new().with_prefix('A').validate().unwrap_err();
        assert!(matches!(err, DateCodecError::InvalidConfig { .. }));
        assert!(err.to_string().contains("'A'"));
    }

    #[test]
    fn ambiguous_character_is_a_valid_prefix() {
        // '0' is not a Bitcoin digit.
        assert!(FormatConfig::new().with_prefix('0').validate().is_ok());
    }
}
