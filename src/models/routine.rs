//! Resolution results for well-known routines

use serde::{Deserialize, Serialize};

use super::program::Function;

/// Resolution of one well-known routine under a given version.
///
/// Either part may be absent: no address is registered for the routine under
/// the identified version, or the program model has no function at the
/// registered address. Both cases leave the binding unresolved rather than
/// failing resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineBinding {
    /// Registered address for the identified version, if any
    pub address: Option<u64>,
    /// Function found at that address, if any
    pub function: Option<Function>,
}

impl RoutineBinding {
    /// A binding with no registered address
    pub fn unresolved() -> Self {
        Self {
            address: None,
            function: None,
        }
    }

    /// Whether the routine resolved all the way to a function
    pub fn is_resolved(&self) -> bool {
        self.function.is_some()
    }
}
