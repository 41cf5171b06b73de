//! Serde support.
//!
//! Strings serialize as a byte string. Deserialization accepts a byte
//! string, a text string, or a sequence of `u8`, and fails if the content
//! does not fit: decoded data is never silently truncated.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::string::FixedString;

impl<const N: usize> Serialize for FixedString<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedString<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(FixedStringVisitor::<N>)
    }
}

struct FixedStringVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for FixedStringVisitor<N> {
    type Value = FixedString<N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a byte string of at most {} bytes", N)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        FixedString::try_from_bytes(v).map_err(|_| E::invalid_length(v.len(), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        self.visit_bytes(v.as_bytes())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = FixedString::new();
        while let Some(byte) = seq.next_element::<u8>()? {
            if out.push(byte).is_err() {
                return Err(de::Error::invalid_length(N + 1, &self));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Small = FixedString<2>;
    type Medium = FixedString<40>;

    #[test]
    fn test_json_roundtrip() {
        let s = Medium::from("1234");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[49,50,51,52]");

        let back: Medium = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_json_accepts_text() {
        let s: Medium = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(s, "hello");
    }

    #[test]
    fn test_json_rejects_overflow() {
        assert!(serde_json::from_str::<Small>("[49,50,51]").is_err());
        assert!(serde_json::from_str::<Small>("\"123\"").is_err());
        assert!(serde_json::from_str::<Small>("\"12\"").is_ok());
    }

    #[test]
    fn test_cbor_roundtrip() {
        let s = Medium::from(&[0x00u8, 0x01, 0xff, b'a'][..]);
        let mut buf = Vec::new();
        ciborium::into_writer(&s, &mut buf).unwrap();

        // Major type 2 (byte string), length 4.
        assert_eq!(buf[0], 0x44);

        let back: Medium = ciborium::from_reader(buf.as_slice()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_cbor_rejects_overflow() {
        let mut buf = Vec::new();
        ciborium::into_writer(&Medium::from("123"), &mut buf).unwrap();
        assert!(ciborium::from_reader::<Small, _>(buf.as_slice()).is_err());
    }

    #[test]
    fn test_nested_in_struct() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Record {
            name: FixedString<16>,
            id: u32,
        }

        let record = Record {
            name: FixedString::from("sensor-a"),
            id: 7,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
