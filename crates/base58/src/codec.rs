//! Positional integer encoding over an [`Alphabet`].

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};
use tracing::trace;

use crate::alphabet::{Alphabet, RADIX};
use crate::error::Base58Error;

impl Alphabet {
    /// Encodes a non-negative integer, most significant digit first.
    ///
    /// Zero encodes as the single zero digit, never as an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Base58Error::InvalidInput`] if `n` is negative.
    pub fn encode<N: Into<BigInt>>(&self, n: N) -> Result<String, Base58Error> {
        let n: BigInt = n.into();
        let mut n: BigUint = match n.sign() {
            Sign::Minus => {
                trace!(value = %n, "rejecting negative integer");
                return Err(Base58Error::InvalidInput {
                    reason: "negative integer",
                });
            }
            Sign::NoSign => return Ok(self.zero().to_string()),
            Sign::Plus => n.magnitude().clone(),
        };

        let mut digits = Vec::new();
        while !n.is_zero() {
            let remainder = (&n % RADIX).to_usize().unwrap_or_default();
            digits.extend(self.digit(remainder));
            n /= RADIX;
        }
        Ok(digits.into_iter().rev().collect())
    }

    /// Decodes a string of digits into a non-negative integer.
    ///
    /// Leading zero digits are accepted and do not change the value.
    ///
    /// # Errors
    ///
    /// Returns [`Base58Error::InvalidInput`] if `s` is empty and
    /// [`Base58Error::InvalidCharacter`] for the first character outside the
    /// alphabet.
    pub fn decode(&self, s: &str) -> Result<BigUint, Base58Error> {
        if s.is_empty() {
            return Err(Base58Error::InvalidInput {
                reason: "empty string",
            });
        }
        let mut value = BigUint::zero();
        for (position, character) in s.chars().enumerate() {
            let digit = self.value_of(character).ok_or_else(|| {
                trace!(%character, position, "rejecting character outside alphabet");
                Base58Error::InvalidCharacter {
                    character,
                    position,
                }
            })?;
            value = value * RADIX + digit;
        }
        Ok(value)
    }

    /// Decodes `s` and narrows the result to a `u64`.
    ///
    /// # Errors
    ///
    /// Same as [`Alphabet::decode`], plus [`Base58Error::Overflow`] if the
    /// value exceeds `u64::MAX`.
    pub fn decode_u64(&self, s: &str) -> Result<u64, Base58Error> {
        self.decode(s)?
            .to_u64()
            .ok_or(Base58Error::Overflow { target: "u64" })
    }
}

/// Encodes `n` with the Bitcoin alphabet.
///
/// # Errors
///
/// Returns [`Base58Error::InvalidInput`] if `n` is negative.
pub fn encode<N: Into<BigInt>>(n: N) -> Result<String, Base58Error> {
    Alphabet::BITCOIN.encode(n)
}

/// Decodes `s` with the Bitcoin alphabet.
///
/// # Errors
///
/// See [`Alphabet::decode`].
pub fn decode(s: &str) -> Result<BigUint, Base58Error> {
    Alphabet::BITCOIN.decode(s)
}

/// Decodes `s` with the Bitcoin alphabet into a `u64`.
///
/// # Errors
///
/// See [`Alphabet::decode_u64`].
pub fn decode_u64(s: &str) -> Result<u64, Base58Error> {
    Alphabet::BITCOIN.decode_u64(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_zero_is_zero_digit() {
        assert_eq!(encode(0u32).unwrap(), "1");
    }

    #[test]
    fn encode_single_digits() {
        assert_eq!(encode(1u32).unwrap(), "2");
        assert_eq!(encode(9u32).unwrap(), "A");
        assert_eq!(encode(57u32).unwrap(), "z");
    }

    #[test]
    fn encode_carries_into_second_digit() {
        assert_eq!(encode(58u32).unwrap(), "21");
        assert_eq!(encode(3363u32).unwrap(), "zz");
    }

    #[test]
    fn encode_negative_rejected() {
        assert_eq!(
            encode(-1i64).unwrap_err(),
            Base58Error::InvalidInput {
                reason: "negative integer"
            }
        );
    }

    #[test]
    fn encode_beyond_u64() {
        let n = BigUint::from(u64::MAX) + 1u32;
        assert_eq!(encode(n).unwrap(), "jpXCZedGfVR");
    }

    #[test]
    fn decode_known_values() {
        assert_eq!(decode("1").unwrap(), BigUint::zero());
        assert_eq!(decode("21").unwrap(), BigUint::from(58u32));
        assert_eq!(decode("zzz").unwrap(), BigUint::from(195_111u32));
    }

    #[test]
    fn decode_ignores_leading_zero_digits() {
        assert_eq!(decode("1112").unwrap(), decode("2").unwrap());
    }

    #[test]
    fn decode_empty_rejected() {
        assert_eq!(
            decode("").unwrap_err(),
            Base58Error::InvalidInput {
                reason: "empty string"
            }
        );
    }

    #[test]
    fn decode_invalid_character_position() {
        assert_eq!(
            decode("2z0").unwrap_err(),
            Base58Error::InvalidCharacter {
                character: '0',
                position: 2,
            }
        );
    }

    #[test]
    fn decode_u64_overflow() {
        assert_eq!(decode_u64("jpXCZedGfVQ").unwrap(), u64::MAX);
        assert_eq!(
            decode_u64("jpXCZedGfVR").unwrap_err(),
            Base58Error::Overflow { target: "u64" }
        );
    }

    #[test]
    fn custom_alphabet_zero() {
        let digits: String = Alphabet::BITCOIN.as_str().chars().rev().collect();
        let a = Alphabet::new(&digits).unwrap();
        assert_eq!(a.encode(0u8).unwrap(), "z");
        assert_eq!(a.encode(1u8).unwrap(), "y");
        assert_eq!(a.decode("yz").unwrap(), BigUint::from(58u32));
    }
}
