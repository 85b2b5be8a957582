use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::fmt;

use crate::error::Error;
use crate::object::ObjectType;

/// SHA-1 digest used for content addressing, rendered as 40 lowercase hex chars
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash([u8; 20]);

impl Hash {
    /// zero hash, useful as a sentinel in tests
    pub const ZERO: Hash = Hash([0u8; 20]);

    /// create from raw bytes
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// parse from a 40-char hex string
    pub fn from_hex(s: &str) -> crate::error::Result<Self> {
        let bytes = hex::decode(s).map_err(|_| Error::InvalidHash(s.to_string()))?;
        if bytes.len() != 20 {
            return Err(Error::InvalidHash(s.to_string()));
        }
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// raw bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// 40-char lowercase hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// split into (first 2 hex chars, remaining 38) for the object store's
    /// fan-out prefix index
    pub fn to_path_components(&self) -> (String, String) {
        let hex = self.to_hex();
        (hex[..2].to_string(), hex[2..].to_string())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", &self.to_hex()[..12])
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// compute the SHA-1 hash of `<type tag> <length marker>\0<payload>`.
///
/// `length_marker` is the single ASCII character `'0'` when `payload` is
/// empty, otherwise the ASCII decimal digits of `payload.len()`. the `'0'`
/// special case is a deliberate divergence from canonical Git, preserved
/// bit-exactly.
pub fn hash_object(object_type: ObjectType, payload: &[u8]) -> Hash {
    let mut hasher = Sha1::new();
    hasher.update(object_type.tag().as_bytes());
    hasher.update(b" ");
    if payload.is_empty() {
        hasher.update(b"0");
    } else {
        hasher.update(payload.len().to_string().as_bytes());
    }
    hasher.update(b"\0");
    hasher.update(payload);
    Hash(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_hex_roundtrip() {
        let original = Hash::from_hex("abcdef0123456789abcdef0123456789abcdef01").unwrap();
        let hex = original.to_hex();
        let parsed = Hash::from_hex(&hex).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_hash_invalid_hex() {
        assert!(Hash::from_hex("not valid hex").is_err());
        assert!(Hash::from_hex("abcd").is_err());
        assert!(Hash::from_hex("abcdef0123456789abcdef0123456789abcdef0123").is_err());
    }

    #[test]
    fn test_hash_path_components() {
        let h = Hash::from_hex("abcdef0123456789abcdef0123456789abcdef01").unwrap();
        let (dir, file) = h.to_path_components();
        assert_eq!(dir, "ab");
        assert_eq!(file, "cdef0123456789abcdef0123456789abcdef01");
    }

    #[test]
    fn test_hash_ordering() {
        let h1 = Hash::from_hex("0000000000000000000000000000000000000a").unwrap();
        let h2 = Hash::from_hex("0000000000000000000000000000000000000b").unwrap();
        assert!(h1 < h2);
    }

    #[test]
    fn test_hash_object_determinism() {
        let h1 = hash_object(ObjectType::Blob, b"hello");
        let h2 = hash_object(ObjectType::Blob, b"hello");
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_hash_object_different_type_same_payload() {
        let h1 = hash_object(ObjectType::Blob, b"hello");
        let h2 = hash_object(ObjectType::Tree, b"hello");
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_hash_object_empty_payload_uses_literal_zero_char() {
        // manually replicate the framing to pin down the '0' special case
        let mut hasher = Sha1::new();
        hasher.update(b"blob");
        hasher.update(b" ");
        hasher.update(b"0");
        hasher.update(b"\0");
        let expected = Hash(hasher.finalize().into());

        assert_eq!(hash_object(ObjectType::Blob, b""), expected);
    }

    #[test]
    fn test_hash_object_nonempty_uses_decimal_length() {
        let mut hasher = Sha1::new();
        hasher.update(b"blob");
        hasher.update(b" ");
        hasher.update(b"5");
        hasher.update(b"\0");
        hasher.update(b"hello");
        let expected = Hash(hasher.finalize().into());

        assert_eq!(hash_object(ObjectType::Blob, b"hello"), expected);
    }

    #[test]
    fn test_hash_serde_json() {
        let h = Hash::from_hex("abcdef0123456789abcdef0123456789abcdef01").unwrap();
        let json = serde_json::to_string(&h).unwrap();
        assert!(json.contains("abcdef"));
        let parsed: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(h, parsed);
    }
}
