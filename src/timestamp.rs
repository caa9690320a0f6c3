//! 48-bit calendar timestamp implementation
//!
//! A `Timestamp` holds the seven UTC fields of the layout and packs into
//! exactly 6 bytes, most significant field first:
//!
//! `year(12) | month(4) | day(5) | hour(5) | minute(6) | second(6) | millisecond(10)`
//!
//! Because the fields are ordered big-endian, lexicographic byte order of the
//! packed form matches chronological order.

use crate::common::{field_max, sizes, Field, Stamp48Error};
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

/// UTC calendar timestamp (packs to 6 bytes)
///
/// Fields are plain unsigned integers so values outside the encodable range
/// can be constructed; [`Timestamp::pack`] rejects them. Day is never checked
/// against the month or year: `2021-02-31` encodes as-is. Derived ordering is
/// field-by-field from year down to millisecond, which coincides with the
/// byte order of the packed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    /// u12: absolute year (0-4095)
    pub year: u16,
    /// u4: 1-based month (1-12)
    pub month: u8,
    /// u5: 1-based day (1-31)
    pub day: u8,
    /// u5: hour (0-23)
    pub hour: u8,
    /// u6: minute (0-59)
    pub minute: u8,
    /// u6: second (0-59)
    pub second: u8,
    /// u10: millisecond (0-999)
    pub millisecond: u16,
}

impl Timestamp {
    /// Create a new Timestamp with validation.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<Self, Stamp48Error> {
        let ts = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        };
        ts.validate()?;
        Ok(ts)
    }

    /// Validate every field against its bit-width capacity.
    ///
    /// Checks run in layout order and the first violation is returned, so
    /// callers always see the most significant offending field. Only upper
    /// bounds are checked: the unsigned field types rule out negatives, and
    /// day/month are deliberately not correlated.
    pub fn validate(&self) -> Result<(), Stamp48Error> {
        if self.year > field_max::YEAR {
            return Err(self.range_error(Field::Year, i32::from(self.year)));
        }
        if self.month > field_max::MONTH {
            return Err(self.range_error(Field::Month, i32::from(self.month)));
        }
        if self.day > field_max::DAY {
            return Err(self.range_error(Field::Day, i32::from(self.day)));
        }
        if self.hour > field_max::HOUR {
            return Err(self.range_error(Field::Hour, i32::from(self.hour)));
        }
        if self.minute > field_max::MINUTE {
            return Err(self.range_error(Field::Minute, i32::from(self.minute)));
        }
        if self.second > field_max::SECOND {
            return Err(self.range_error(Field::Second, i32::from(self.second)));
        }
        if self.millisecond > field_max::MILLISECOND {
            return Err(self.range_error(Field::Millisecond, i32::from(self.millisecond)));
        }
        Ok(())
    }

    fn range_error(&self, field: Field, value: i32) -> Stamp48Error {
        Stamp48Error::FieldOutOfRange {
            field,
            value,
            max: field.max(),
        }
    }

    /// Pack the timestamp into 6 big-endian bytes.
    ///
    /// Bytes are built directly from adjacent field pairs; no single field is
    /// wider than 16 bits, so no wide-integer arithmetic is involved.
    pub fn pack(&self) -> Result<[u8; sizes::PACKED], Stamp48Error> {
        self.validate()?;
        Ok([
            (self.year >> 4) as u8,
            ((self.year & 0x0F) as u8) << 4 | self.month,
            self.day << 3 | self.hour >> 2,
            (self.hour & 0x03) << 6 | self.minute,
            self.second << 2 | (self.millisecond >> 8) as u8,
            (self.millisecond & 0xFF) as u8,
        ])
    }

    /// Unpack a timestamp from exactly 6 bytes.
    ///
    /// Never fails on bit content: every 48-bit pattern maps to a populated
    /// timestamp (month stays 1-based; fields are delivered raw, without
    /// range checks, so decoding is the total inverse of [`Timestamp::pack`]).
    /// Only a wrong buffer length is an error.
    pub fn unpack(bytes: &[u8]) -> Result<Self, Stamp48Error> {
        if bytes.len() != sizes::PACKED {
            return Err(Stamp48Error::InvalidLength {
                expected: sizes::PACKED,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            year: u16::from(bytes[0]) << 4 | u16::from(bytes[1] >> 4),
            month: bytes[1] & 0x0F,
            day: bytes[2] >> 3,
            hour: (bytes[2] & 0x07) << 2 | bytes[3] >> 6,
            minute: bytes[3] & 0x3F,
            second: bytes[4] >> 2,
            millisecond: u16::from(bytes[4] & 0x03) << 8 | u16::from(bytes[5]),
        })
    }

    /// View the packed form as the low 48 bits of a u64.
    pub fn to_u48(&self) -> Result<u64, Stamp48Error> {
        let bytes = self.pack()?;
        let mut wide = [0u8; 8];
        wide[2..].copy_from_slice(&bytes);
        Ok(u64::from_be_bytes(wide))
    }

    /// Rebuild a timestamp from the low 48 bits of a u64.
    ///
    /// The upper 16 bits are ignored. Like [`Timestamp::unpack`], this is
    /// total: it cannot fail on any input value.
    pub fn from_u48(value: u64) -> Self {
        Self {
            year: ((value >> 36) & 0xFFF) as u16,
            month: ((value >> 32) & 0x0F) as u8,
            day: ((value >> 27) & 0x1F) as u8,
            hour: ((value >> 22) & 0x1F) as u8,
            minute: ((value >> 16) & 0x3F) as u8,
            second: ((value >> 10) & 0x3F) as u8,
            millisecond: (value & 0x3FF) as u16,
        }
    }

    /// Capture the current wall-clock time in UTC.
    ///
    /// Convenience layered on top of the pure codec; fails only once the
    /// system year no longer fits 12 bits.
    pub fn now() -> Result<Self, Stamp48Error> {
        Self::from_datetime(&Utc::now())
    }

    /// Extract the seven fields from a chrono UTC datetime.
    ///
    /// Years outside 0-4095 are rejected here rather than at pack time, as
    /// the format has no sign bit. Chrono represents a leap second as a
    /// subsecond value of 1000 or more; it is clamped to 999.
    pub fn from_datetime(dt: &DateTime<Utc>) -> Result<Self, Stamp48Error> {
        let year = dt.year();
        if year < 0 || year > i32::from(field_max::YEAR) {
            return Err(Stamp48Error::FieldOutOfRange {
                field: Field::Year,
                value: year,
                max: field_max::YEAR,
            });
        }
        Ok(Self {
            year: year as u16,
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
            millisecond: dt.timestamp_subsec_millis().min(999) as u16,
        })
    }

    /// Convert back to a chrono UTC datetime.
    ///
    /// Returns `None` when the fields do not name a real calendar instant
    /// (the permissive layout admits e.g. `2021-02-31` or month 0). This is
    /// the only place calendar validity is consulted, and it is advisory;
    /// the codec itself never rejects such values on decode.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )?;
        let naive = date.and_hms_milli_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
            u32::from(self.millisecond),
        )?;
        Some(naive.and_utc())
    }

    /// Get the packed size in bytes.
    pub const fn size() -> usize {
        sizes::PACKED
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self {
            year: 0,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }
}

// =============================================================================
// DISPLAY IMPLEMENTATIONS
// =============================================================================

impl core::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}
