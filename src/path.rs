//! Resource path parsing and normalization.
//!
//! Paths are virtual (never resolved against a filesystem): a sequence of
//! non-empty segments rendered with a leading separator. Segments are
//! normalized to Unicode NFC so two spellings of the same name address the
//! same node.

use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// An absolute path inside one repository.
///
/// The empty segment sequence is the repository root, rendered as `/`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// The repository root path.
    pub fn root() -> Self {
        ResourcePath { segments: vec![] }
    }

    /// Parse a raw path string.
    ///
    /// Leading and trailing separators are tolerated (clients may or may
    /// not send them), interior empty segments are rejected, and every
    /// segment is NFC-normalized.
    pub fn parse(raw: &str) -> Result<Self, StorageError> {
        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let mut segments = Vec::new();
        for segment in trimmed.split('/') {
            if segment.is_empty() {
                return Err(StorageError::InvalidPath(format!(
                    "empty segment in {:?}",
                    raw
                )));
            }
            segments.push(segment.nfc().collect());
        }

        Ok(ResourcePath { segments })
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Final segment, `None` for the root.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(|s| s.as_str())
    }

    /// Parent path, `None` for the root.
    pub fn parent(&self) -> Option<ResourcePath> {
        if self.segments.is_empty() {
            return None;
        }
        Some(ResourcePath {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Append one segment.
    pub fn join(&self, segment: &str) -> Result<ResourcePath, StorageError> {
        if segment.is_empty() || segment.contains('/') {
            return Err(StorageError::InvalidPath(format!(
                "invalid segment {:?}",
                segment
            )));
        }
        let mut segments = self.segments.clone();
        segments.push(segment.nfc().collect());
        Ok(ResourcePath { segments })
    }

    /// Whether `prefix` is this path or an ancestor of it.
    pub fn starts_with(&self, prefix: &ResourcePath) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }

    /// Replace the `from` prefix with `to`. Returns `None` when this path
    /// is not under `from`. Used for subtree moves.
    pub fn rebased(&self, from: &ResourcePath, to: &ResourcePath) -> Option<ResourcePath> {
        if !self.starts_with(from) {
            return None;
        }
        let mut segments = to.segments.clone();
        segments.extend_from_slice(&self.segments[from.segments.len()..]);
        Some(ResourcePath { segments })
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for ResourcePath {
    type Error = StorageError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        ResourcePath::parse(&raw)
    }
}

impl From<ResourcePath> for String {
    fn from(path: ResourcePath) -> String {
        path.to_string()
    }
}
