//! Version tags and binary fingerprints for recognized game builds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a recognized build of the game executable (e.g. "1.0.0").
///
/// Opaque and compared by value; the tag itself carries no ordering or
/// structure beyond what the version catalog assigns to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionTag(String);

impl VersionTag {
    /// Create a new version tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content fingerprint used to recognize a specific build.
///
/// A build is known either by the MD5 digests of its compressed and
/// decompressed executable images, or it is declared always-compatible when
/// no digests have been recorded yet. The wildcard is a deliberate variant,
/// not an empty digest pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryFingerprint {
    /// Digest pair for the compressed and decompressed executable images
    Md5Pair {
        compressed: String,
        decompressed: String,
    },
    /// No digests known yet; matches any executable of the supported format
    AlwaysCompatible,
}

impl BinaryFingerprint {
    /// Whether a loaded executable's digest matches this fingerprint.
    ///
    /// An `AlwaysCompatible` fingerprint matches unconditionally; whether
    /// such entries participate in identification at all is decided by the
    /// caller's options, not here.
    pub fn matches(&self, digest: &str) -> bool {
        match self {
            Self::Md5Pair {
                compressed,
                decompressed,
            } => digest == compressed || digest == decompressed,
            Self::AlwaysCompatible => true,
        }
    }

    /// Whether this fingerprint is the wildcard variant
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::AlwaysCompatible)
    }
}

/// A single row of the version catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// The build this entry recognizes
    pub tag: VersionTag,
    /// How the build is recognized
    pub fingerprint: BinaryFingerprint,
}

/// Outcome of identifying a loaded executable against the version catalog.
///
/// `UnsupportedFormat` is the only hard-stop condition: the calling stage is
/// expected to skip all further analysis. `Unrecognized` merely degrades
/// routine resolution to the version-independent subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identification {
    /// The executable matched a known build
    Version(VersionTag),
    /// The executable format label is not the supported one
    UnsupportedFormat(String),
    /// Supported format, but the digest matched no catalog entry
    Unrecognized,
}

impl Identification {
    /// The matched version tag, if any
    pub fn version(&self) -> Option<&VersionTag> {
        match self {
            Self::Version(tag) => Some(tag),
            _ => None,
        }
    }

    /// Whether the executable format is the supported one
    pub fn is_supported_format(&self) -> bool {
        !matches!(self, Self::UnsupportedFormat(_))
    }
}
