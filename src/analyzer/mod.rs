//! Core analysis engine: build identification, routine resolution, and
//! call-site extraction.

mod version;
mod routines;
mod call_sites;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AnalyzerError, Result};
use crate::models::{CallSite, Function, Identification, RoutineBinding, VersionTag};
use crate::program::{ProgramExport, ProgramModel};
use crate::report::{AnalysisReport, FunctionReport};

/// Provenance a calling stage should attach to symbols it creates.
///
/// Carried here as data for the caller; no analysis in this crate changes
/// its behavior based on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolSource {
    /// Symbols created by automated analysis
    Analysis,
    /// Symbols that overwrite user-defined names
    UserDefined,
}

/// Options consumed by the analysis pipeline.
///
/// The two force flags only affect how a calling stage treats previously
/// produced results and symbol provenance; identification, resolution, and
/// extraction run identically regardless of their value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerOptions {
    /// Re-analyze even if results already exist for this binary
    pub force_reanalysis: bool,
    /// Rename symbols even when a user-defined name is present
    pub force_rename: bool,
    /// Let catalog entries with no recorded digests match any executable of
    /// the supported format
    pub assume_unknown_compatible: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            force_reanalysis: false,
            force_rename: false,
            assume_unknown_compatible: true,
        }
    }
}

impl AnalyzerOptions {
    /// Symbol provenance implied by the rename flag
    pub fn symbol_source(&self) -> SymbolSource {
        if self.force_rename {
            SymbolSource::UserDefined
        } else {
            SymbolSource::Analysis
        }
    }
}

/// Main analyzer coordinating the three analyses.
///
/// Holds only options; every method is a pure query over the supplied
/// program model, so a single analyzer may be shared freely across calls.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalyzerOptions,
}

impl Analyzer {
    /// Create an analyzer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with explicit options
    pub fn with_options(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    /// The options this analyzer runs with
    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Identify which known build the loaded executable is.
    ///
    /// Pure query; callers thread the returned tag into routine resolution
    /// themselves rather than relying on any cached state.
    pub fn identify(&self, program: &dyn ProgramModel) -> Identification {
        version::identify(program, &self.options)
    }

    /// Resolve every well-known routine under the identified version
    pub fn resolve_routines(
        &self,
        program: &dyn ProgramModel,
        version: Option<&VersionTag>,
    ) -> BTreeMap<&'static str, RoutineBinding> {
        routines::resolve(program, version)
    }

    /// Reconstruct the ordered call sites of one function
    pub fn extract_call_sites(
        &self,
        program: &dyn ProgramModel,
        function: &Function,
    ) -> Vec<CallSite> {
        call_sites::extract(program, function)
    }

    /// Run the full pipeline over a loaded program export.
    ///
    /// The only hard failure is an unsupported executable format; an
    /// unrecognized version still yields a report with the
    /// version-independent routines resolved.
    pub fn analyze(&self, export: &ProgramExport) -> Result<AnalysisReport> {
        let identification = self.identify(export);
        if let Identification::UnsupportedFormat(format) = &identification {
            return Err(AnalyzerError::UnsupportedFormat(format.clone()));
        }

        let routines = self.resolve_routines(export, identification.version());

        let functions = export
            .functions()
            .iter()
            .map(|f| FunctionReport::new(f, self.extract_call_sites(export, f)))
            .collect();

        Ok(AnalysisReport::new(
            export,
            &identification,
            self.options.symbol_source(),
            &routines,
            functions,
        ))
    }
}
