//! Ordered 58-character digit alphabet with reverse lookup.

use crate::error::Base58Error;

/// Number of digits in the numeral system.
pub const RADIX: u32 = 58;

/// Marker for ASCII codes that are not part of the alphabet.
const NOT_A_DIGIT: u8 = u8::MAX;

const BITCOIN_DIGITS: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// An ordered set of 58 distinct ASCII characters.
///
/// `digits[i]` is the character for digit value `i`. The reverse table maps
/// each ASCII code back to its digit value, so lookups in both directions
/// are O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    digits: [u8; 58],
    values: [u8; 128],
}

impl Alphabet {
    /// The Bitcoin alphabet: digits and letters without `0`, `O`, `I` and `l`.
    pub const BITCOIN: Alphabet = Alphabet::from_digits(BITCOIN_DIGITS);

    /// Builds an alphabet from a string of 58 distinct ASCII characters.
    ///
    /// # Errors
    ///
    /// Returns [`Base58Error::NonAsciiCharacter`] for a character outside ASCII,
    /// [`Base58Error::AlphabetLength`] if the string does not hold exactly 58
    /// characters, and [`Base58Error::DuplicateCharacter`] if any repeats.
    pub fn new(digits: &str) -> Result<Self, Base58Error> {
        if let Some(character) = digits.chars().find(|c| !c.is_ascii()) {
            return Err(Base58Error::NonAsciiCharacter { character });
        }
        let bytes: &[u8; 58] = digits
            .as_bytes()
            .try_into()
            .map_err(|_| Base58Error::AlphabetLength { len: digits.len() })?;

        let mut seen = [false; 128];
        for &b in bytes {
            if seen[b as usize] {
                return Err(Base58Error::DuplicateCharacter {
                    character: b as char,
                });
            }
            seen[b as usize] = true;
        }
        Ok(Self::from_digits(bytes))
    }

    /// Builds the lookup tables. Callers guarantee distinct ASCII input.
    const fn from_digits(digits: &[u8; 58]) -> Self {
        let mut values = [NOT_A_DIGIT; 128];
        let mut i = 0;
        while i < digits.len() {
            values[digits[i] as usize] = i as u8;
            i += 1;
        }
        Self {
            digits: *digits,
            values,
        }
    }

    /// Returns the character for digit value zero.
    pub fn zero(&self) -> char {
        self.digits[0] as char
    }

    /// Returns the character for `value`, or `None` if `value >= 58`.
    pub fn digit(&self, value: usize) -> Option<char> {
        self.digits.get(value).map(|&b| b as char)
    }

    /// Returns the digit value of `c`, or `None` if `c` is not in the alphabet.
    pub fn value_of(&self, c: char) -> Option<u32> {
        if !c.is_ascii() {
            return None;
        }
        match self.values[c as usize] {
            NOT_A_DIGIT => None,
            v => Some(u32::from(v)),
        }
    }

    /// Returns `true` if `c` is one of the 58 digits.
    pub fn contains(&self, c: char) -> bool {
        self.value_of(c).is_some()
    }

    /// Returns the digits in value order.
    pub fn as_str(&self) -> &str {
        // Only ever built from ASCII bytes.
        std::str::from_utf8(&self.digits).unwrap_or_default()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::BITCOIN
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Alphabet {
    type Err = Base58Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitcoin_excludes_ambiguous_characters() {
        let a = Alphabet::BITCOIN;
        for c in ['0', 'O', 'I', 'l'] {
            assert!(!a.contains(c), "{c:?} should not be a digit");
        }
    }

    #[test]
    fn bitcoin_digit_values() {
        let a = Alphabet::BITCOIN;
        assert_eq!(a.zero(), '1');
        assert_eq!(a.digit(1), Some('2'));
        assert_eq!(a.digit(9), Some('A'));
        assert_eq!(a.digit(57), Some('z'));
        assert_eq!(a.digit(58), None);
    }

    #[test]
    fn value_of_inverts_digit() {
        let a = Alphabet::BITCOIN;
        for v in 0..58 {
            let c = a.digit(v).unwrap();
            assert_eq!(a.value_of(c), Some(v as u32));
        }
    }

    #[test]
    fn value_of_rejects_foreign_characters() {
        let a = Alphabet::BITCOIN;
        assert_eq!(a.value_of('0'), None);
        assert_eq!(a.value_of(' '), None);
        assert_eq!(a.value_of('é'), None);
    }

    #[test]
    fn new_matches_constant() {
        let a = Alphabet::new(Alphabet::BITCOIN.as_str()).unwrap();
        assert_eq!(a, Alphabet::BITCOIN);
    }

    #[test]
    fn new_wrong_length() {
        assert_eq!(
            Alphabet::new("123").unwrap_err(),
            Base58Error::AlphabetLength { len: 3 }
        );
    }

    #[test]
    fn new_duplicate() {
        let digits = format!("1{}", &Alphabet::BITCOIN.as_str()[..57]);
        assert_eq!(
            Alphabet::new(&digits).unwrap_err(),
            Base58Error::DuplicateCharacter { character: '1' }
        );
    }

    #[test]
    fn new_non_ascii() {
        let digits = format!("é{}", &Alphabet::BITCOIN.as_str()[1..]);
        assert_eq!(
            Alphabet::new(&digits).unwrap_err(),
            Base58Error::NonAsciiCharacter { character: 'é' }
        );
    }

    #[test]
    fn display_and_parse() {
        let a: Alphabet = Alphabet::BITCOIN.to_string().parse().unwrap();
        assert_eq!(a, Alphabet::BITCOIN);
    }
}
