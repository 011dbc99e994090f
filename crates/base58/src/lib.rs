//! # cds-base58
//!
//! Arbitrary-precision base58 integer codec.
//!
//! Integers are written most significant digit first over a 58-character
//! alphabet. The default is the Bitcoin alphabet, which leaves out the
//! look-alike characters `0`, `O`, `I` and `l`.
//!
//! ## Quick Start
//!
//! ```
//! use cds_base58::{Alphabet, BigUint, decode, encode};
//!
//! assert_eq!(encode(58u32).unwrap(), "21");
//! assert_eq!(decode("21").unwrap(), BigUint::from(58u32));
//!
//! // Zero is the zero digit, not the empty string.
//! assert_eq!(encode(0u32).unwrap(), "1");
//! assert_eq!(Alphabet::BITCOIN.zero(), '1');
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `alphabet` | Validated digit alphabet with reverse lookup |
//! | `codec` | Integer encode/decode |
//! | `error` | Error types |

mod alphabet;
mod codec;
mod error;

pub use alphabet::{Alphabet, RADIX};
pub use codec::{decode, decode_u64, encode};
pub use error::Base58Error;
pub use num_bigint::{BigInt, BigUint};
