//! Build identification against the version catalog

use log::debug;

use crate::analyzer::AnalyzerOptions;
use crate::constants::{versions, SUPPORTED_FORMAT};
use crate::models::Identification;
use crate::program::ProgramModel;

/// Identify which known build the loaded executable is.
///
/// The format check runs first and short-circuits everything else. After
/// that the catalog is scanned in declaration order and the first matching
/// entry wins, so earlier specific entries take priority over a later
/// wildcard. Wildcard entries only participate when the options allow
/// treating unfingerprinted builds as compatible.
pub fn identify(program: &dyn ProgramModel, options: &AnalyzerOptions) -> Identification {
    let format = program.executable_format();
    if format != SUPPORTED_FORMAT {
        return Identification::UnsupportedFormat(format.to_string());
    }

    let digest = program.executable_md5();
    for entry in versions::catalog() {
        let matched = if entry.fingerprint.is_wildcard() {
            options.assume_unknown_compatible
        } else {
            entry.fingerprint.matches(digest)
        };
        if matched {
            debug!("executable {} identified as version {}", digest, entry.tag);
            return Identification::Version(entry.tag.clone());
        }
    }

    debug!("executable {} matched no known version", digest);
    Identification::Unrecognized
}
