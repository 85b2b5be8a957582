use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};
use crate::hash::Hash;
use crate::object::codec::{write_string, write_u32, Reader};

/// a tree snapshot plus authorship metadata and parent links.
///
/// `parent_hashes` is empty for a root commit, has one entry for an ordinary
/// commit, and two or more for a merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    pub tree_hash: Hash,
    pub author: String,
    pub author_timestamp: DateTime<FixedOffset>,
    pub committer: String,
    pub committer_timestamp: DateTime<FixedOffset>,
    pub message: String,
    pub parent_hashes: Vec<Hash>,
}

impl Commit {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tree_hash: Hash,
        author: impl Into<String>,
        author_timestamp: DateTime<FixedOffset>,
        committer: impl Into<String>,
        committer_timestamp: DateTime<FixedOffset>,
        message: impl Into<String>,
        parent_hashes: Vec<Hash>,
    ) -> Self {
        Self {
            tree_hash,
            author: author.into(),
            author_timestamp,
            committer: committer.into(),
            committer_timestamp,
            message: message.into(),
            parent_hashes,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_hashes.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parent_hashes.len() > 1
    }

    /// `int32 parent_count`, then each parent hash, then tree_hash, author,
    /// author_timestamp, committer, committer_timestamp, message
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        write_u32(&mut buf, self.parent_hashes.len() as u32);
        for parent in &self.parent_hashes {
            write_string(&mut buf, &parent.to_hex());
        }
        write_string(&mut buf, &self.tree_hash.to_hex());
        write_string(&mut buf, &self.author);
        write_string(&mut buf, &self.author_timestamp.to_rfc3339());
        write_string(&mut buf, &self.committer);
        write_string(&mut buf, &self.committer_timestamp.to_rfc3339());
        write_string(&mut buf, &self.message);
        buf
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(data);
        let parent_count = reader.read_u32()?;
        let mut parent_hashes = Vec::with_capacity(parent_count as usize);
        for _ in 0..parent_count {
            let hex = reader.read_string()?;
            if hex.is_empty() {
                return Err(Error::EncodingFailure(
                    "null parent hash not representable in this commit model".to_string(),
                ));
            }
            parent_hashes.push(Hash::from_hex(&hex)?);
        }

        let tree_hash = Hash::from_hex(&reader.read_string()?)?;
        let author = reader.read_string()?;
        let author_timestamp = parse_timestamp(&reader.read_string()?)?;
        let committer = reader.read_string()?;
        let committer_timestamp = parse_timestamp(&reader.read_string()?)?;
        let message = reader.read_string()?;

        Ok(Self {
            tree_hash,
            author,
            author_timestamp,
            committer,
            committer_timestamp,
            message,
            parent_hashes,
        })
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::EncodingFailure(format!("invalid timestamp {s:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-01-15T09:30:00+00:00").unwrap()
    }

    fn sample_hash() -> Hash {
        Hash::from_hex("abcdef0123456789abcdef0123456789abcdef01").unwrap()
    }

    #[test]
    fn test_root_commit_roundtrip() {
        let commit = Commit::new(
            sample_hash(),
            "author",
            ts(),
            "committer",
            ts(),
            "initial commit",
            vec![],
        );
        let decoded = Commit::decode(&commit.encode()).unwrap();
        assert_eq!(commit, decoded);
        assert!(decoded.is_root());
        assert!(!decoded.is_merge());
    }

    #[test]
    fn test_ordinary_commit_roundtrip() {
        let parent = Hash::from_hex("1111111111111111111111111111111111111111").unwrap();
        let commit = Commit::new(
            sample_hash(),
            "author",
            ts(),
            "committer",
            ts(),
            "follow-up",
            vec![parent],
        );
        let decoded = Commit::decode(&commit.encode()).unwrap();
        assert_eq!(decoded.parent_hashes, vec![parent]);
        assert!(!decoded.is_root());
        assert!(!decoded.is_merge());
    }

    #[test]
    fn test_merge_commit_roundtrip() {
        let p1 = Hash::from_hex("1111111111111111111111111111111111111111").unwrap();
        let p2 = Hash::from_hex("2222222222222222222222222222222222222222").unwrap();
        let commit = Commit::new(
            sample_hash(),
            "author",
            ts(),
            "committer",
            ts(),
            "merge",
            vec![p1, p2],
        );
        let decoded = Commit::decode(&commit.encode()).unwrap();
        assert!(decoded.is_merge());
        assert_eq!(decoded.parent_hashes.len(), 2);
    }

    #[test]
    fn test_timestamp_preserves_offset() {
        let offset_ts = DateTime::parse_from_rfc3339("2024-06-01T12:00:00-05:00").unwrap();
        let commit = Commit::new(sample_hash(), "a", offset_ts, "a", offset_ts, "m", vec![]);
        let decoded = Commit::decode(&commit.encode()).unwrap();
        assert_eq!(decoded.author_timestamp.offset(), offset_ts.offset());
    }
}
