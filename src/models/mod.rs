//! Data models for program analysis results

pub mod version;
pub mod program;
pub mod call_site;
pub mod routine;


pub use self::version::{BinaryFingerprint, Identification, VersionEntry, VersionTag};
pub use self::program::{AddressRange, Function, Reference, ReferenceKind};
pub use self::call_site::{CallSite, Callee};
pub use self::routine::RoutineBinding;
