//! Read-only program model consumed by the analyses.
//!
//! The analyses never own or mutate a program: they query an externally
//! supplied model for format metadata, functions, and references. The
//! queries are expected to be idempotent; nothing here caches their results.

pub mod export;

pub use self::export::ProgramExport;

use crate::models::{AddressRange, Function, Reference};

/// External collaborator supplying the loaded program's structure.
///
/// Implementations must be read-only and safely callable repeatedly with the
/// same arguments. All analyses in this crate are pure queries over this
/// trait, so per-function work may be parallelized by the caller without any
/// synchronization.
pub trait ProgramModel {
    /// Executable format label (e.g. "Nintendo Switch Binary")
    fn executable_format(&self) -> &str;

    /// MD5 hex digest of the loaded executable image
    fn executable_md5(&self) -> &str;

    /// The function whose entry point is exactly `addr`, if any
    fn function_at(&self, addr: u64) -> Option<Function>;

    /// All references originating inside `range`, in ascending origin order.
    ///
    /// Multiple references from the same origin keep the order the program
    /// model provides; they are not re-sorted among themselves.
    fn references_from(&self, range: &AddressRange) -> Vec<Reference>;
}
