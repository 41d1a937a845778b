//! Fixed addresses of well-known internal routines

use crate::models::VersionTag;

/// Logical routine names, stable across versions
pub const CXA_GUARD_ACQUIRE: &str = "__cxa_guard_acquire";
pub const CXA_GUARD_RELEASE: &str = "__cxa_guard_release";
pub const READ_CONFIG_VALUE: &str = "ReadConfigValue";
pub const UNK1: &str = "unk1";
pub const UNK2: &str = "unk2";

/// Where a routine lives, per version or unconditionally
#[derive(Debug, Clone, Copy)]
pub enum RoutineAddress {
    /// Address differs per recognized version; entries are (tag, address)
    PerVersion(&'static [(&'static str, u64)]),
    /// Same address in every recognized version
    AllVersions(u64),
}

impl RoutineAddress {
    /// The address registered for a version, if any.
    ///
    /// `AllVersions` addresses resolve even when no version was identified.
    pub fn for_version(&self, version: Option<&VersionTag>) -> Option<u64> {
        match self {
            Self::AllVersions(addr) => Some(*addr),
            Self::PerVersion(entries) => {
                let tag = version?;
                entries
                    .iter()
                    .find(|(candidate, _)| *candidate == tag.as_str())
                    .map(|(_, addr)| *addr)
            }
        }
    }
}

/// One row of the known-routine table
#[derive(Debug, Clone, Copy)]
pub struct RoutineSpec {
    /// Logical name
    pub name: &'static str,
    /// Registered address(es)
    pub address: RoutineAddress,
}

/// Every routine the analysis knows how to locate
pub const KNOWN_ROUTINES: &[RoutineSpec] = &[
    RoutineSpec {
        name: CXA_GUARD_ACQUIRE,
        address: RoutineAddress::PerVersion(&[
            ("1.0.0", 0x71011f3000),
            ("1.0.1", 0x71011f37e0),
        ]),
    },
    RoutineSpec {
        name: CXA_GUARD_RELEASE,
        address: RoutineAddress::PerVersion(&[
            ("1.0.0", 0x71011f3010),
            ("1.0.1", 0x71011f37f0),
        ]),
    },
    RoutineSpec {
        name: READ_CONFIG_VALUE,
        address: RoutineAddress::AllVersions(0x71000003d4),
    },
    RoutineSpec {
        name: UNK1,
        address: RoutineAddress::AllVersions(0x7100080124),
    },
    RoutineSpec {
        name: UNK2,
        address: RoutineAddress::AllVersions(0x7100000250),
    },
];
