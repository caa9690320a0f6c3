//! Common constants and error types shared across the stamp48 codec
//!
//! This module defines the field widths and upper bounds of the 48-bit
//! timestamp layout, the `Field` enum used for precise error reporting,
//! and the crate-wide error type.

use core::fmt;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Size constants
pub mod sizes {
    /// Packed timestamp size in bytes
    pub const PACKED: usize = 6;
    /// Base64URL token length in characters (6 bytes = 8 six-bit groups)
    pub const TOKEN: usize = 8;
    /// Total layout width in bits
    pub const BITS: u32 = 48;
}

/// Bit width of each field, most significant first
pub mod field_bits {
    /// Year width
    pub const YEAR: u32 = 12;
    /// Month width
    pub const MONTH: u32 = 4;
    /// Day width
    pub const DAY: u32 = 5;
    /// Hour width
    pub const HOUR: u32 = 5;
    /// Minute width
    pub const MINUTE: u32 = 6;
    /// Second width
    pub const SECOND: u32 = 6;
    /// Millisecond width
    pub const MILLISECOND: u32 = 10;
}

/// Largest encodable value per field
pub mod field_max {
    /// Year upper bound (12 bits)
    pub const YEAR: u16 = 4095;
    /// Month upper bound (1-based)
    pub const MONTH: u8 = 12;
    /// Day upper bound (1-based)
    pub const DAY: u8 = 31;
    /// Hour upper bound
    pub const HOUR: u8 = 23;
    /// Minute upper bound
    pub const MINUTE: u8 = 59;
    /// Second upper bound
    pub const SECOND: u8 = 59;
    /// Millisecond upper bound (10 bits)
    pub const MILLISECOND: u16 = 999;
}

// =============================================================================
// FIELD IDENTIFICATION
// =============================================================================

/// Identifies one of the seven timestamp fields.
///
/// Carried inside [`Stamp48Error::FieldOutOfRange`] so callers can match on
/// the failing field directly instead of parsing error strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Year (12 bits, 0-4095)
    Year,
    /// Month (4 bits, 1-12)
    Month,
    /// Day (5 bits, 1-31)
    Day,
    /// Hour (5 bits, 0-23)
    Hour,
    /// Minute (6 bits, 0-59)
    Minute,
    /// Second (6 bits, 0-59)
    Second,
    /// Millisecond (10 bits, 0-999)
    Millisecond,
}

impl Field {
    /// Largest value the field can encode
    pub const fn max(self) -> u16 {
        match self {
            Field::Year => field_max::YEAR,
            Field::Month => field_max::MONTH as u16,
            Field::Day => field_max::DAY as u16,
            Field::Hour => field_max::HOUR as u16,
            Field::Minute => field_max::MINUTE as u16,
            Field::Second => field_max::SECOND as u16,
            Field::Millisecond => field_max::MILLISECOND,
        }
    }

    /// Bit width allocated to the field
    pub const fn bits(self) -> u32 {
        match self {
            Field::Year => field_bits::YEAR,
            Field::Month => field_bits::MONTH,
            Field::Day => field_bits::DAY,
            Field::Hour => field_bits::HOUR,
            Field::Minute => field_bits::MINUTE,
            Field::Second => field_bits::SECOND,
            Field::Millisecond => field_bits::MILLISECOND,
        }
    }

    /// Lowercase field name
    pub const fn name(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
            Field::Millisecond => "millisecond",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

/// Custom error type for stamp48 codec operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stamp48Error {
    /// A field value exceeds its bit-width capacity at encode time.
    FieldOutOfRange {
        /// The offending field.
        field: Field,
        /// The rejected value.
        value: i32,
        /// The largest legal value for the field.
        max: u16,
    },
    /// The decoder received a buffer that is not exactly 6 bytes.
    InvalidLength {
        /// The expected byte length.
        expected: usize,
        /// The actual byte length received.
        actual: usize,
    },
    /// The text adapter received a token that is not exactly 8 characters.
    InvalidTextLength {
        /// The expected character length.
        expected: usize,
        /// The actual character length received.
        actual: usize,
    },
    /// The text adapter received a character outside `[A-Za-z0-9_-]`.
    InvalidTextAlphabet(char),
}

impl fmt::Display for Stamp48Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stamp48Error::FieldOutOfRange { field, value, max } => {
                write!(
                    f,
                    "{} exceeds {}-bit capacity: {} (max {})",
                    field,
                    field.bits(),
                    value,
                    max
                )
            }
            Stamp48Error::InvalidLength { expected, actual } => {
                write!(f, "Invalid buffer length: expected {}, got {}", expected, actual)
            }
            Stamp48Error::InvalidTextLength { expected, actual } => {
                write!(f, "Invalid token length: expected {}, got {}", expected, actual)
            }
            Stamp48Error::InvalidTextAlphabet(c) => {
                write!(f, "Invalid token character: {:?}", c)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Stamp48Error {}
