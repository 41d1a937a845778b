//! Serializable analysis reports

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::analyzer::SymbolSource;
use crate::models::{CallSite, Callee, Function, Identification, RoutineBinding};
use crate::program::{ProgramExport, ProgramModel};
use crate::utils::format_address;

/// One parameter reference feeding a call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamReport {
    pub from: String,
    pub to: String,
}

/// One reconstructed call site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSiteReport {
    /// Callee symbol name, when the destination resolved to a named function
    pub callee: Option<String>,
    /// Destination address, resolved or not
    pub callee_address: String,
    /// Whether the destination resolved to a function at all
    pub resolved: bool,
    /// Parameter references in stream order
    pub params: Vec<ParamReport>,
}

impl From<&CallSite> for CallSiteReport {
    fn from(site: &CallSite) -> Self {
        let (callee, resolved) = match &site.callee {
            Callee::Function(f) => (f.name.clone(), true),
            Callee::Unresolved(_) => (None, false),
        };
        Self {
            callee,
            callee_address: format_address(site.callee.address()),
            resolved,
            params: site
                .params
                .iter()
                .map(|r| ParamReport {
                    from: format_address(r.from),
                    to: format_address(r.to),
                })
                .collect(),
        }
    }
}

/// One analyzed function with its call sites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionReport {
    pub name: Option<String>,
    pub entry: String,
    pub call_sites: Vec<CallSiteReport>,
}

impl FunctionReport {
    /// Build a function's slice of the report from its extracted call sites
    pub fn new(function: &Function, call_sites: Vec<CallSite>) -> Self {
        Self {
            name: function.name.clone(),
            entry: format_address(function.entry),
            call_sites: call_sites.iter().map(CallSiteReport::from).collect(),
        }
    }
}

/// Resolution outcome for one well-known routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineReport {
    pub name: String,
    /// Registered address under the identified version, if any
    pub address: Option<String>,
    /// Name of the function found at that address, if any
    pub function: Option<String>,
    pub resolved: bool,
}

/// Full output of one pipeline run over a program export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub format: String,
    pub md5: String,
    /// Identified version tag; absent when the digest matched no catalog entry
    pub version: Option<String>,
    /// Symbol provenance the calling stage should use
    pub symbol_source: SymbolSource,
    pub routines: Vec<RoutineReport>,
    pub functions: Vec<FunctionReport>,
}

impl AnalysisReport {
    /// Assemble a report from the pipeline's pieces
    pub fn new(
        export: &ProgramExport,
        identification: &Identification,
        symbol_source: SymbolSource,
        routines: &BTreeMap<&'static str, RoutineBinding>,
        functions: Vec<FunctionReport>,
    ) -> Self {
        Self {
            format: export.executable_format().to_string(),
            md5: export.executable_md5().to_string(),
            version: identification.version().map(|v| v.to_string()),
            symbol_source,
            routines: routines
                .iter()
                .map(|(name, binding)| RoutineReport {
                    name: name.to_string(),
                    address: binding.address.map(format_address),
                    function: binding
                        .function
                        .as_ref()
                        .and_then(|f| f.name.clone()),
                    resolved: binding.is_resolved(),
                })
                .collect(),
            functions,
        }
    }
}

/// Save a report as pretty-printed JSON
pub fn save_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(report)
        .with_context(|| "Failed to serialize analysis report")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;

    info!("Report saved to: {}", path.display());
    Ok(())
}
