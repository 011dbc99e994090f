//! # cds-datecode
//!
//! Compact, reversible date tokens.
//!
//! A date maps to its day offset from a fixed epoch (the epoch itself is
//! offset 1), the offset is written in base58, left-padded with the zero
//! digit to a fixed width and tagged with a one-character prefix.
//!
//! ## Architecture
//!
//! ```text
//! encode:  NaiveDate -> day offset -> base58 digits -> pad to width -> prefix
//! decode:  token -> check prefix/len -> strip zero padding -> day offset -> NaiveDate
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use cds_datecode::{decode_date, encode_date};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 11, 23).unwrap();
//! let token = encode_date(date).unwrap();
//! assert_eq!(token, "[6xi");
//! assert_eq!(decode_date(&token).unwrap(), date);
//! ```
//!
//! The canonical format (epoch 1970-01-01, Bitcoin alphabet, prefix `[`,
//! width 3) covers 195111 days, up to 2504-03-12. Other formats are built
//! from a [`FormatConfig`] through [`DateCodec::new`].
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Format constants |
//! | `codec` | Date token encode/decode |
//! | `error` | Error types |

mod codec;
mod config;
mod error;

pub use codec::{DateCodec, decode_date, encode_date};
pub use config::{
    DEFAULT_PREFIX, DEFAULT_WIDTH, FORMAT_VERSION, FormatConfig, MAX_WIDTH, default_epoch,
};
pub use error::DateCodecError;
