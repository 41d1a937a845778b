//! Catalog of recognized game builds

use once_cell::sync::Lazy;

use crate::models::{BinaryFingerprint, VersionEntry, VersionTag};

/// Known builds in declaration order; earlier entries win when more than one
/// could match the same executable.
static CATALOG: Lazy<Vec<VersionEntry>> = Lazy::new(|| {
    vec![
        VersionEntry {
            tag: VersionTag::new("1.0.0"),
            fingerprint: BinaryFingerprint::Md5Pair {
                compressed: "f5d9aa2af3abef3070791057060ee93c".to_string(),
                decompressed: "0bfaa4258b49b560bb5bdf4d353ec0f6".to_string(),
            },
        },
        // TODO: record 1.0.1 digests and drop the wildcard entry
        VersionEntry {
            tag: VersionTag::new("1.0.1"),
            fingerprint: BinaryFingerprint::AlwaysCompatible,
        },
    ]
});

/// The version catalog, in declaration order
pub fn catalog() -> &'static [VersionEntry] {
    &CATALOG
}
