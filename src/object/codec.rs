//! binary framing shared by blob/tree/commit encodings.
//!
//! strings are length-prefixed UTF-8 (2-byte big-endian length); counts and
//! blob payload lengths are 4-byte big-endian integers. this format is bespoke
//! to the object encodings and intentionally does not reuse a generic
//! serialization crate (see DESIGN.md).

use crate::error::{Error, Result};

/// cursor over an encoded object's bytes, tracking a read position
pub struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.pos + n > self.bytes.len() {
            return Err(Error::EncodingFailure(format!(
                "expected {} more bytes, had {}",
                n,
                self.bytes.len() - self.pos
            )));
        }
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// read a `write_string`-framed value: 2-byte length then UTF-8 bytes
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::EncodingFailure(format!("invalid utf-8: {e}")))
    }

    /// read a 4-byte-length-prefixed raw byte payload (blob framing)
    pub fn read_bytes(&mut self) -> Result<Vec<u8>> {
        let len = self.read_u32()? as usize;
        Ok(self.take(len)?.to_vec())
    }
}

/// append a `write_string`-framed value: 2-byte big-endian length then UTF-8 bytes
pub fn write_string(buf: &mut Vec<u8>, s: &str) {
    let bytes = s.as_bytes();
    buf.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
    buf.extend_from_slice(bytes);
}

/// append a 4-byte big-endian count or length
pub fn write_u32(buf: &mut Vec<u8>, n: u32) {
    buf.extend_from_slice(&n.to_be_bytes());
}

/// append a single tag byte
pub fn write_u8(buf: &mut Vec<u8>, n: u8) {
    buf.push(n);
}

/// append a 4-byte-length-prefixed raw byte payload (blob framing)
pub fn write_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    write_u32(buf, bytes.len() as u32);
    buf.extend_from_slice(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_roundtrip() {
        let mut buf = Vec::new();
        write_string(&mut buf, "hello world");
        let mut reader = Reader::new(&buf);
        assert_eq!(reader.read_string().unwrap(), "hello world");
        assert!(reader.is_empty());
    }

    #[test]
    fn test_empty_string_roundtrip() {
        let mut buf = Vec::new();
        write_string(&mut buf, "");
        let mut reader = Reader::new(&buf);
        assert_eq!(reader.read_string().unwrap(), "");
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut buf = Vec::new();
        write_bytes(&mut buf, b"payload");
        let mut reader = Reader::new(&buf);
        assert_eq!(reader.read_bytes().unwrap(), b"payload".to_vec());
    }

    #[test]
    fn test_truncated_buffer_is_encoding_failure() {
        let mut buf = Vec::new();
        write_string(&mut buf, "hello");
        buf.truncate(buf.len() - 2);
        let mut reader = Reader::new(&buf);
        assert!(reader.read_string().is_err());
    }

    #[test]
    fn test_u32_roundtrip() {
        let mut buf = Vec::new();
        write_u32(&mut buf, 70000);
        let mut reader = Reader::new(&buf);
        assert_eq!(reader.read_u32().unwrap(), 70000);
    }
}
