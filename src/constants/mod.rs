//! Constants used throughout the analysis

pub mod versions;
pub mod routines;

/// Executable format label of the single supported platform.
///
/// Anything else is rejected before version identification runs.
pub const SUPPORTED_FORMAT: &str = "Nintendo Switch Binary";
