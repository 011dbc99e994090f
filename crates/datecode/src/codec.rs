//! Date to token conversion.

use std::sync::LazyLock;

use cds_base58::RADIX;
use chrono::{Days, NaiveDate};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use tracing::{debug, trace};

use crate::config::FormatConfig;
use crate::error::DateCodecError;

/// Codec for the canonical format, built on first use.
static CANONICAL: LazyLock<DateCodec> = LazyLock::new(DateCodec::default);

/// Encodes and decodes date tokens for one [`FormatConfig`].
///
/// The codec is immutable after construction and can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct DateCodec {
    config: FormatConfig,
    /// Largest day offset that fits in the payload: `58^width - 1`.
    max_offset: BigUint,
}

impl DateCodec {
    /// Creates a codec for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DateCodecError::InvalidConfig`] if `config` fails
    /// [`FormatConfig::validate`].
    pub fn new(config: FormatConfig) -> Result<Self, DateCodecError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: FormatConfig) -> Self {
        // Validation caps the width at MAX_WIDTH, so it always fits a u32.
        let width = u32::try_from(config.width()).unwrap_or(u32::MAX);
        let max_offset = BigUint::from(RADIX).pow(width) - BigUint::one();
        debug!(
            epoch = %config.epoch(),
            prefix = %config.prefix(),
            width = config.width(),
            %max_offset,
            "date codec configured"
        );
        Self { config, max_offset }
    }

    /// Returns the shared codec for the canonical format.
    pub fn canonical() -> &'static DateCodec {
        &CANONICAL
    }

    /// Returns the format this codec was built with.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Returns the length of every token, in characters.
    pub fn token_len(&self) -> usize {
        1 + self.config.width()
    }

    /// Returns the largest day offset the payload can hold.
    pub fn max_offset(&self) -> &BigUint {
        &self.max_offset
    }

    /// Returns the earliest encodable date (the epoch).
    pub fn min_date(&self) -> NaiveDate {
        self.config.epoch()
    }

    /// Returns the latest encodable date.
    ///
    /// Wide payloads can outreach the calendar; the result is then
    /// clamped to [`NaiveDate::MAX`].
    pub fn max_date(&self) -> NaiveDate {
        self.max_offset
            .to_u64()
            .and_then(|max| max.checked_sub(1))
            .and_then(|days| self.config.epoch().checked_add_days(Days::new(days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns the day offset of `date`: 1 for the epoch, 2 for the day after.
    ///
    /// # Errors
    ///
    /// Returns [`DateCodecError::DateOutOfRange`] if `date` precedes the epoch.
    pub fn day_offset(&self, date: NaiveDate) -> Result<u64, DateCodecError> {
        let epoch = self.config.epoch();
        let offset = date.signed_duration_since(epoch).num_days() + 1;
        if offset < 1 {
            trace!(%date, %epoch, "rejecting date before epoch");
            return Err(DateCodecError::DateOutOfRange {
                reason: format!("{date} is before epoch {epoch}"),
            });
        }
        Ok(offset as u64)
    }

    /// Returns the date with the given day offset.
    ///
    /// # Errors
    ///
    /// Returns [`DateCodecError::DateOutOfRange`] if `offset` is zero or
    /// lands past the end of the calendar.
    pub fn date_from_offset(&self, offset: u64) -> Result<NaiveDate, DateCodecError> {
        if offset < 1 {
            return Err(DateCodecError::DateOutOfRange {
                reason: "day offset 0 precedes the epoch".to_string(),
            });
        }
        self.config
            .epoch()
            .checked_add_days(Days::new(offset - 1))
            .ok_or_else(|| DateCodecError::DateOutOfRange {
                reason: format!("day offset {offset} is past the end of the calendar"),
            })
    }

    /// Encodes `date` as a fixed-width token.
    ///
    /// # Errors
    ///
    /// Returns [`DateCodecError::DateOutOfRange`] if `date` precedes the
    /// epoch and [`DateCodecError::EncodingOverflow`] if its offset needs
    /// more digits than the payload width.
    pub fn encode(&self, date: NaiveDate) -> Result<String, DateCodecError> {
        let offset = self.day_offset(date)?;
        let alphabet = self.config.alphabet();
        let payload = alphabet.encode(offset)?;

        let width = self.config.width();
        if payload.len() > width {
            trace!(%date, offset, width, "rejecting date past payload range");
            return Err(DateCodecError::EncodingOverflow {
                date,
                offset,
                width,
            });
        }

        let mut token = String::with_capacity(self.token_len());
        token.push(self.config.prefix());
        token.extend(std::iter::repeat_n(alphabet.zero(), width - payload.len()));
        token.push_str(&payload);
        Ok(token)
    }

    /// Decodes a token produced by [`DateCodec::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`DateCodecError::MalformedToken`] for a wrong prefix or
    /// length, [`DateCodecError::InvalidCharacter`] for a payload character
    /// outside the alphabet, and [`DateCodecError::DateOutOfRange`] if the
    /// payload is all zero digits.
    pub fn decode(&self, token: &str) -> Result<NaiveDate, DateCodecError> {
        let prefix = self.config.prefix();
        let malformed = |reason: &'static str| {
            trace!(token, reason, "rejecting malformed token");
            DateCodecError::MalformedToken {
                token: token.to_string(),
                reason,
            }
        };

        let payload = token
            .strip_prefix(prefix)
            .ok_or_else(|| malformed("wrong prefix"))?;
        if payload.chars().count() != self.config.width() {
            return Err(malformed("wrong payload length"));
        }

        // The zero digit is ASCII, so byte and character counts agree here.
        let zero = self.config.alphabet().zero();
        let stripped = payload.trim_start_matches(zero);
        let digits = if stripped.is_empty() {
            &payload[payload.len() - 1..]
        } else {
            stripped
        };
        let skipped = payload.len() - digits.len();

        let value = self.config.alphabet().decode(digits).map_err(|err| {
            match DateCodecError::from(err) {
                DateCodecError::InvalidCharacter {
                    character,
                    position,
                } => DateCodecError::InvalidCharacter {
                    character,
                    position: position + skipped,
                },
                other => other,
            }
        })?;

        let offset = value
            .to_u64()
            .ok_or_else(|| DateCodecError::DateOutOfRange {
                reason: format!("day offset {value} is past the end of the calendar"),
            })?;
        self.date_from_offset(offset)
    }
}

impl Default for DateCodec {
    fn default() -> Self {
        Self::from_valid(FormatConfig::default())
    }
}

/// Encodes `date` in the canonical format.
///
/// # Errors
///
/// See [`DateCodec::encode`].
pub fn encode_date(date: NaiveDate) -> Result<String, DateCodecError> {
    DateCodec::canonical().encode(date)
}

/// Decodes a canonical token.
///
/// # Errors
///
/// See [`DateCodec::decode`].
pub fn decode_date(token: &str) -> Result<NaiveDate, DateCodecError> {
    DateCodec::canonical().decode(token)
}
