use crate::error::Result;
use crate::object::codec::{write_bytes, Reader};

/// an owned byte payload
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Blob {
    pub bytes: Vec<u8>,
}

impl Blob {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// `int32 length` then `length` payload bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(4 + self.bytes.len());
        write_bytes(&mut buf, &self.bytes);
        buf
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(data);
        let bytes = reader.read_bytes()?;
        Ok(Self { bytes })
    }
}
