//! Resolution of well-known routines to functions

use std::collections::BTreeMap;

use crate::constants::routines::KNOWN_ROUTINES;
use crate::models::{RoutineBinding, VersionTag};
use crate::program::ProgramModel;

/// Resolve every known routine under the given version.
///
/// Each binding looks up the routine's registered address for the version,
/// then asks the program model for the function at that address. Missing
/// addresses and missing functions both leave the binding unresolved; the
/// map always contains every known routine name. With no identified version
/// the version-specific routines are unresolved while the
/// version-independent ones still bind normally.
pub fn resolve(
    program: &dyn ProgramModel,
    version: Option<&VersionTag>,
) -> BTreeMap<&'static str, RoutineBinding> {
    let mut bindings = BTreeMap::new();
    for spec in KNOWN_ROUTINES {
        let address = spec.address.for_version(version);
        let function = address.and_then(|addr| program.function_at(addr));
        bindings.insert(spec.name, RoutineBinding { address, function });
    }
    bindings
}
