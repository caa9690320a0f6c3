//! stamp48: compact, sortable 48-bit encoding for UTC calendar timestamps
//!
//! Packs a UTC date/time (year, month, day, hour, minute, second,
//! millisecond) into exactly 6 bytes, most significant field first, so that
//! lexicographic byte order matches chronological order. A thin Base64URL
//! adapter turns the 6 bytes into an 8-character URL-safe token for use in
//! identifiers and sort keys.
//!
//! Encoding validates each field against its bit width and can fail;
//! decoding is total over 6-byte content and only rejects a wrong input
//! length. Day is never correlated with month or year: `2021-02-31` packs
//! and round-trips as-is.
//!
//! # Features
//! - `std`: (Default) Implements `std::error::Error` for the error type.
//! - `serde`: Serialize/Deserialize derives on [`Timestamp`].
//!
//! # Quick Start
//!
//! ```rust
//! use stamp48::{token, Timestamp};
//!
//! # fn main() -> Result<(), stamp48::Stamp48Error> {
//! let ts = Timestamp::new(2019, 6, 16, 19, 11, 22, 333)?;
//!
//! let bytes = ts.pack()?;
//! assert_eq!(bytes, [0x7E, 0x36, 0x84, 0xCB, 0x59, 0x4D]);
//! assert_eq!(Timestamp::unpack(&bytes)?, ts);
//!
//! let tok = token::encode(&ts)?;
//! assert_eq!(tok, "fjaEy1lN");
//! assert_eq!(token::decode(&tok)?, ts);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Layout constants, field identification, and error types
pub mod common;
/// Calendar timestamp and the 48-bit pack/unpack core
pub mod timestamp;
/// Base64URL text adapter (8-character tokens)
pub mod token;

// Re-export public API
pub use crate::common::*;
pub use crate::timestamp::*;
