//! Base-62 identifiers for UUIDs.
//!
//! A UUID is 128 bits. Its canonical text form spends 36 characters on it (32 hex digits and
//! four hyphens). Reading the same 16 bytes as one big-endian unsigned integer and writing it
//! in base 62 gives a case-sensitive, URL-safe identifier of at most 22 characters.
//!
//! This crate provides:
//! - A general codec ([`encode`] / [`decode`]) between arbitrary-precision non-negative
//!   integers and text in any radix from 2 to 62.
//! - A UUID adapter ([`uuid_to_base62`] / [`base62_to_uuid`]) built on the codec at radix 62,
//!   with optional left padding to a fixed width of [`PADDED_WIDTH`] characters.
//! - A small wrapper type ([`Uuid62`]) that carries a UUID and always displays in the padded
//!   base-62 form.
//!
//! ## Alphabet
//! Digit values `0..=61` map, in order, onto:
//!
//! `0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ`
//!
//! For radices up to 36 this agrees with the usual lowercase hexadecimal/base-36 digits.
//!
//! ## Example
//! ```
//! use uuid62::{base62_to_uuid, uuid_to_base62, Uuid};
//!
//! let id = Uuid::parse_str("3078350b-bfd0-41ff-8cc2-3a3a7969ceb9").unwrap();
//! let short = uuid_to_base62(&id, false).unwrap();
//! assert_eq!(short, "1tsz7Nk9Grmziqc5gFI0pX");
//!
//! let padded = uuid_to_base62(&id, true).unwrap();
//! assert_eq!(padded, "01tsz7Nk9Grmziqc5gFI0pX");
//!
//! assert_eq!(base62_to_uuid(&padded).unwrap(), id);
//! ```
//!
//! All functions are pure. Nothing here logs; every failure is returned to the caller.

mod codec;
mod service;

// Re-export public types
pub use codec::{
    decode, digit_char, digit_value, encode, min_width, ALPHABET, MAX_RADIX, MIN_RADIX,
};
pub use num_bigint::BigUint;
pub use service::{base62_to_uuid, uuid_to_base62, Uuid, Uuid62, PADDED_WIDTH, UUID_BITS};

/// Error type for base-N and UUID conversions.
///
/// Every variant describes a problem with the caller's input. None are transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Uuid62Error {
    /// Requested radix is outside `MIN_RADIX..=MAX_RADIX`.
    #[error("radix must be between 2-62 inclusive, got {0}")]
    InvalidRadix(u32),

    /// A character is not in the alphabet, or its digit value is not below the radix.
    #[error("invalid digit {digit:?} at position {position} for radix {radix}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },

    /// Decoded value does not fit in the 16 bytes of a UUID.
    #[error("decoded value needs {bytes} bytes, a UUID holds 16")]
    MagnitudeOverflow { bytes: usize },
}

/// Result type for base-N and UUID conversions.
pub type Uuid62Result<T> = Result<T, Uuid62Error>;
