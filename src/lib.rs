//! A library for structural analysis of Metroid Dread executables
//!
//! This crate identifies which known build of the game a program database
//! export was taken from, resolves a fixed set of well-known internal
//! routines to their per-version addresses, and reconstructs, for each
//! function, the ordered call sites together with the parameter references
//! feeding each call. Later reverse-engineering stages (symbol naming,
//! structure recovery) consume the resulting report.

pub mod analyzer;
pub mod constants;
pub mod errors;
pub mod models;
pub mod program;
pub mod report;
pub mod utils;

use std::path::Path;

use anyhow::Result;

pub use crate::analyzer::{Analyzer, AnalyzerOptions};
pub use crate::report::AnalysisReport;

/// Main entry point: load a program export and run the full pipeline
pub fn analyze_export(
    export_path: &Path,
    options: AnalyzerOptions,
    output_path: Option<&Path>,
) -> Result<AnalysisReport> {
    let export = program::ProgramExport::from_path(export_path)?;

    let analyzer = Analyzer::with_options(options);
    let analysis = analyzer.analyze(&export)?;

    if let Some(path) = output_path {
        report::save_report(&analysis, path)?;
    }

    Ok(analysis)
}

/// Version of the analysis crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
