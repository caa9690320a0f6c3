//! Integration tests for the Base64URL token adapter.
//!
//! This file contains tests for:
//! - Token shape (8 characters, URL-safe alphabet, no padding)
//! - Encode/decode roundtrip against the canonical fixture
//! - Length and alphabet rejection
//! - Current-time token generation

#![allow(clippy::all)]
use stamp48::common::*;
use stamp48::timestamp::*;
use stamp48::token;

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Timestamp {
        Timestamp::new(2019, 6, 16, 19, 11, 22, 333).unwrap()
    }

    fn is_token_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    }

    #[test]
    fn test_encode_fixture() {
        assert_eq!(token::encode(&fixture()).unwrap(), "fjaEy1lN");
    }

    #[test]
    fn test_decode_fixture() {
        assert_eq!(token::decode("fjaEy1lN").unwrap(), fixture());
    }

    #[test]
    fn test_token_shape() {
        let samples = [
            Timestamp::default(),
            Timestamp::new(4095, 12, 31, 23, 59, 59, 999).unwrap(),
            fixture(),
        ];
        for ts in samples {
            let tok = token::encode(&ts).unwrap();
            assert_eq!(tok.len(), sizes::TOKEN);
            assert!(tok.chars().all(is_token_char), "bad token: {tok}");
        }
    }

    #[test]
    fn test_roundtrip() {
        let ts = Timestamp::new(2022, 5, 15, 10, 30, 45, 500).unwrap();
        let tok = token::encode(&ts).unwrap();
        assert_eq!(token::decode(&tok).unwrap(), ts);
    }

    #[test]
    fn test_all_max_token() {
        let ts = Timestamp::new(4095, 12, 31, 23, 59, 59, 999).unwrap();
        let tok = token::encode(&ts).unwrap();
        assert_eq!(tok, "__z9--_n");
        assert_eq!(token::decode(&tok).unwrap(), ts);
    }

    #[test]
    fn test_invalid_length() {
        for tok in ["", "fjaEy1l", "fjaEy1lNN", "fjaEy1lNfjaEy1lN"] {
            assert_eq!(
                token::decode(tok).unwrap_err(),
                Stamp48Error::InvalidTextLength { expected: 8, actual: tok.len() }
            );
        }
    }

    #[test]
    fn test_invalid_alphabet() {
        assert_eq!(
            token::decode("fjaEy1l!").unwrap_err(),
            Stamp48Error::InvalidTextAlphabet('!')
        );
        // Standard-base64 characters are not part of the URL-safe alphabet.
        assert_eq!(
            token::decode("fjaEy1l+").unwrap_err(),
            Stamp48Error::InvalidTextAlphabet('+')
        );
        assert_eq!(
            token::decode("fjaEy1l/").unwrap_err(),
            Stamp48Error::InvalidTextAlphabet('/')
        );
        // Padding is never accepted.
        assert_eq!(
            token::decode("fjaEy1l=").unwrap_err(),
            Stamp48Error::InvalidTextAlphabet('=')
        );
    }

    #[test]
    fn test_encode_rejects_invalid_fields() {
        let ts = Timestamp { millisecond: 1000, ..fixture() };
        assert_eq!(
            token::encode(&ts).unwrap_err(),
            Stamp48Error::FieldOutOfRange {
                field: Field::Millisecond,
                value: 1000,
                max: 999,
            }
        );
    }

    #[test]
    fn test_generate() {
        let tok = token::generate().unwrap();
        assert_eq!(tok.len(), 8);
        assert!(tok.chars().all(is_token_char));
        let ts = token::decode(&tok).unwrap();
        assert!(ts.year >= 2025);
    }

    #[test]
    fn test_generate_is_fresh_each_call() {
        // Two calls may or may not land in the same millisecond, but both
        // must decode to in-range timestamps.
        let a = token::decode(&token::generate().unwrap()).unwrap();
        let b = token::decode(&token::generate().unwrap()).unwrap();
        assert!(a.validate().is_ok());
        assert!(b.validate().is_ok());
        assert!(a <= b);
    }
}
