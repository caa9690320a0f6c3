//! Base64URL text adapter
//!
//! Maps the 6-byte packed form to an 8-character URL-safe token and back.
//! 6 bytes are exactly eight 6-bit groups, so the token carries no padding
//! and no slack bits. All bit-layout logic lives in [`crate::timestamp`];
//! this module is a pass-through to the `base64` codec.

use crate::common::{sizes, Stamp48Error};
use crate::timestamp::Timestamp;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

/// Encode a timestamp as an 8-character Base64URL token.
///
/// The output always matches `[A-Za-z0-9_-]{8}`.
pub fn encode(ts: &Timestamp) -> Result<String, Stamp48Error> {
    Ok(URL_SAFE_NO_PAD.encode(ts.pack()?))
}

/// Decode an 8-character Base64URL token back into a timestamp.
///
/// Fails with [`Stamp48Error::InvalidTextLength`] when the token is not
/// exactly 8 characters and [`Stamp48Error::InvalidTextAlphabet`] when it
/// contains a character outside `[A-Za-z0-9_-]`.
pub fn decode(token: &str) -> Result<Timestamp, Stamp48Error> {
    if token.len() != sizes::TOKEN {
        return Err(Stamp48Error::InvalidTextLength {
            expected: sizes::TOKEN,
            actual: token.len(),
        });
    }
    let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|err| match err {
        base64::DecodeError::InvalidByte(_, byte) => {
            Stamp48Error::InvalidTextAlphabet(byte as char)
        }
        // The no-pad engine reports trailing '=' as a padding violation.
        base64::DecodeError::InvalidPadding => Stamp48Error::InvalidTextAlphabet('='),
        // 8 alphabet characters always decode to 6 full bytes, so any
        // residual error is a length problem.
        _ => Stamp48Error::InvalidTextLength {
            expected: sizes::TOKEN,
            actual: token.len(),
        },
    })?;
    Timestamp::unpack(&bytes)
}

/// Encode the current UTC wall-clock time as a token.
pub fn generate() -> Result<String, Stamp48Error> {
    encode(&Timestamp::now()?)
}
