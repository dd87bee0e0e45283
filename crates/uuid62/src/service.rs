//! UUID adapter over the base-N codec.
//!
//! A UUID's 16 bytes are read as one big-endian unsigned integer and written in base 62.

use crate::codec::{decode, encode};
use crate::{Uuid62Error, Uuid62Result};
use num_bigint::BigUint;
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Width of a UUID in bits.
pub const UUID_BITS: u32 = 128;

/// Fixed width of a padded base-62 UUID.
///
/// `min_width(UUID_BITS, 62)` is 22, since `62^22 > 2^128 > 62^21`. Padded identifiers are
/// published at 23 characters, so every padded UUID begins with at least one `'0'`.
/// If `UUID_BITS` grows, recompute the width with [`crate::min_width`]; the tests check
/// this constant is never below it.
pub const PADDED_WIDTH: usize = 23;

const UUID_BYTES: usize = 16;
const RADIX: u32 = 62;

/// Encodes `uuid` in base 62.
///
/// With `pad` set, the result is left-filled with `'0'` to exactly [`PADDED_WIDTH`]
/// characters. Otherwise it is the shortest form, and the nil UUID encodes to `"0"`.
///
/// # Errors
///
/// Only propagates codec errors, none of which can occur at radix 62. Turning a [`Uuid`]
/// into its 16 bytes cannot fail.
pub fn uuid_to_base62(uuid: &Uuid, pad: bool) -> Uuid62Result<String> {
    let value = BigUint::from_bytes_be(uuid.as_bytes());
    let encoded = encode(&value, RADIX)?;

    if pad {
        Ok(format!("{:0>width$}", encoded, width = PADDED_WIDTH))
    } else {
        Ok(encoded)
    }
}

/// Decodes base-62 text (padded or not) into a UUID.
///
/// Any number of leading `'0'` characters is accepted. The empty string decodes to the
/// nil UUID.
///
/// # Errors
///
/// - [`Uuid62Error::InvalidDigit`] if `text` contains a character outside the alphabet.
///   Malformed text is never mapped to the nil UUID.
/// - [`Uuid62Error::MagnitudeOverflow`] if the value exceeds `2^128 - 1`. Leading bytes
///   are never truncated.
pub fn base62_to_uuid(text: &str) -> Uuid62Result<Uuid> {
    let value = decode(text, RADIX)?;
    let bytes = value.to_bytes_be();

    if bytes.len() > UUID_BYTES {
        return Err(Uuid62Error::MagnitudeOverflow { bytes: bytes.len() });
    }

    let mut buf = [0u8; UUID_BYTES];
    buf[UUID_BYTES - bytes.len()..].copy_from_slice(&bytes);
    Ok(Uuid::from_bytes(buf))
}

/// A UUID that renders as padded base 62.
///
/// This wrapper is handy wherever identifiers cross a text boundary (URLs, keys, logs):
/// [`Display`](fmt::Display) always produces the 23-character padded form and
/// [`FromStr`] accepts padded or unpadded text.
///
/// # Ordering
/// `Ord` follows the 128-bit value. Do not sort the encoded strings byte-wise instead:
/// the alphabet places `a-z` before `A-Z`, which ASCII orders the other way round.
///
/// # Construction
/// - [`Uuid62::new`] generates a random (version 4) identifier.
/// - [`Uuid62::parse`] decodes base-62 text.
/// - `From<Uuid>` wraps an existing UUID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid62(Uuid);

impl Default for Uuid62 {
    fn default() -> Self {
        Self::new()
    }
}

impl Uuid62 {
    /// Generates a new random identifier (RFC 4122 version 4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses padded or unpadded base-62 text.
    ///
    /// # Errors
    ///
    /// Same as [`base62_to_uuid`].
    pub fn parse(input: &str) -> Uuid62Result<Self> {
        base62_to_uuid(input).map(Self)
    }

    /// Returns the inner `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Encodes this identifier, padded to [`PADDED_WIDTH`] or not.
    pub fn to_base62(&self, pad: bool) -> String {
        // Radix 62 is in range, so the codec cannot fail here.
        uuid_to_base62(&self.0, pad).expect("radix 62 is always valid")
    }
}

impl From<Uuid> for Uuid62 {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<Uuid62> for Uuid {
    fn from(id: Uuid62) -> Self {
        id.0
    }
}

impl fmt::Display for Uuid62 {
    /// Formats as padded base 62 (always 23 characters).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base62(true))
    }
}

impl FromStr for Uuid62 {
    type Err = Uuid62Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid62::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uuid62 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uuid62 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Uuid62::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::min_width;

    const SAMPLE: &str = "3078350b-bfd0-41ff-8cc2-3a3a7969ceb9";
    const SAMPLE_62: &str = "1tsz7Nk9Grmziqc5gFI0pX";

    fn uuid(s: &str) -> Uuid {
        Uuid::parse_str(s).unwrap()
    }

    #[test]
    fn test_padded_width_covers_128_bits() {
        assert!(PADDED_WIDTH >= min_width(UUID_BITS, RADIX).unwrap());
        assert_eq!(min_width(UUID_BITS, RADIX).unwrap(), 22);
    }

    #[test]
    fn test_nil_uuid_unpadded_is_zero() {
        assert_eq!(uuid_to_base62(&Uuid::nil(), false).unwrap(), "0");
    }

    #[test]
    fn test_nil_uuid_padded_is_all_zeros() {
        assert_eq!(
            uuid_to_base62(&Uuid::nil(), true).unwrap(),
            "00000000000000000000000"
        );
    }

    #[test]
    fn test_known_vector() {
        let id = uuid(SAMPLE);
        assert_eq!(uuid_to_base62(&id, false).unwrap(), SAMPLE_62);
        assert_eq!(uuid_to_base62(&id, true).unwrap(), format!("0{}", SAMPLE_62));
        assert_eq!(base62_to_uuid(SAMPLE_62).unwrap(), id);
    }

    #[test]
    fn test_max_uuid() {
        let id = Uuid::from_u128(u128::MAX);
        let unpadded = uuid_to_base62(&id, false).unwrap();
        assert_eq!(unpadded, "7N42dgm5tFLK9N8MT7fHC7");
        assert_eq!(uuid_to_base62(&id, true).unwrap().len(), PADDED_WIDTH);
        assert_eq!(base62_to_uuid(&unpadded).unwrap(), id);
    }

    #[test]
    fn test_smallest_non_nil_uuid() {
        let id = Uuid::from_u128(1);
        assert_eq!(uuid_to_base62(&id, false).unwrap(), "1");
        assert_eq!(
            uuid_to_base62(&id, true).unwrap(),
            "00000000000000000000001"
        );
        assert_eq!(base62_to_uuid("1").unwrap(), id);
    }

    #[test]
    fn test_round_trip_both_pad_settings() {
        for s in [
            SAMPLE,
            "550e8400-e29b-41d4-a716-446655440000",
            "00000000-0000-0000-0000-000000000000",
            "ffffffff-ffff-ffff-ffff-ffffffffffff",
            "00000000-0000-0000-0000-0000000000ff",
            "ff000000-0000-0000-0000-000000000000",
        ] {
            let id = uuid(s);
            for pad in [true, false] {
                let encoded = uuid_to_base62(&id, pad).unwrap();
                assert_eq!(base62_to_uuid(&encoded).unwrap(), id, "{s} pad={pad}");
            }
        }
    }

    #[test]
    fn test_padded_is_always_fixed_width() {
        for _ in 0..200 {
            let encoded = uuid_to_base62(&Uuid::new_v4(), true).unwrap();
            assert_eq!(encoded.len(), PADDED_WIDTH);
            assert!(encoded.starts_with('0'));
        }
    }

    #[test]
    fn test_unpadded_is_padded_without_leading_zeros() {
        let id = uuid("00000000-0000-0000-0000-0000000000ff");
        let padded = uuid_to_base62(&id, true).unwrap();
        let unpadded = uuid_to_base62(&id, false).unwrap();
        assert_eq!(unpadded, "47");
        assert_eq!(padded.trim_start_matches('0'), unpadded);
        assert!(padded.ends_with(&unpadded));
    }

    #[test]
    fn test_decode_empty_is_nil() {
        assert_eq!(base62_to_uuid("").unwrap(), Uuid::nil());
    }

    #[test]
    fn test_decode_accepts_extra_leading_zeros() {
        let long = format!("{}{}", "0".repeat(40), SAMPLE_62);
        assert_eq!(base62_to_uuid(&long).unwrap(), uuid(SAMPLE));
    }

    #[test]
    fn test_decode_invalid_digit_is_an_error() {
        let err = base62_to_uuid("1tsz7Nk9-rmziqc5gFI0pX").unwrap_err();
        assert_eq!(
            err,
            Uuid62Error::InvalidDigit {
                digit: '-',
                position: 8,
                radix: 62
            }
        );
    }

    #[test]
    fn test_decode_hyphenated_uuid_text_is_rejected() {
        assert!(matches!(
            base62_to_uuid(SAMPLE),
            Err(Uuid62Error::InvalidDigit { digit: '-', .. })
        ));
    }

    #[test]
    fn test_decode_rejects_values_above_128_bits() {
        // 2^128, one past the largest UUID.
        assert_eq!(
            base62_to_uuid("7N42dgm5tFLK9N8MT7fHC8"),
            Err(Uuid62Error::MagnitudeOverflow { bytes: 17 })
        );
        assert!(matches!(
            base62_to_uuid("ZZZZZZZZZZZZZZZZZZZZZZZ"),
            Err(Uuid62Error::MagnitudeOverflow { .. })
        ));
    }

    #[test]
    fn test_uuid62_display_is_padded() {
        let id = Uuid62::from(uuid(SAMPLE));
        assert_eq!(id.to_string(), format!("0{}", SAMPLE_62));
        assert_eq!(id.to_base62(false), SAMPLE_62);
    }

    #[test]
    fn test_uuid62_parse_and_from_str() {
        let expected = Uuid62::from(uuid(SAMPLE));
        assert_eq!(Uuid62::parse(SAMPLE_62).unwrap(), expected);

        let parsed: Uuid62 = format!("0{}", SAMPLE_62).parse().unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(Uuid::from(parsed), uuid(SAMPLE));
    }

    #[test]
    fn test_uuid62_from_str_invalid() {
        let result: Result<Uuid62, _> = "not base62!".parse();
        assert!(matches!(result, Err(Uuid62Error::InvalidDigit { .. })));
    }

    #[test]
    fn test_uuid62_new_round_trips() {
        let original = Uuid62::new();
        assert_eq!(original.uuid().get_version_num(), 4);

        let parsed = Uuid62::parse(&original.to_string()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_uuid62_new_is_unique() {
        assert_ne!(Uuid62::new(), Uuid62::default());
    }

    #[test]
    fn test_uuid62_ordering_follows_value() {
        // 'a' is digit 10 and 'A' is digit 36, but b'A' < b'a'.
        let ten = Uuid62::from(Uuid::from_u128(10));
        let thirty_six = Uuid62::from(Uuid::from_u128(36));
        assert!(ten < thirty_six);
        assert!(ten.to_string() > thirty_six.to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_uuid62_serde_round_trip() {
        let id = Uuid62::from(uuid(SAMPLE));
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"0{}\"", SAMPLE_62));

        let back: Uuid62 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_uuid62_serde_rejects_invalid() {
        let result: Result<Uuid62, _> = serde_json::from_str("\"abc-def\"");
        assert!(result.is_err());
    }
}
