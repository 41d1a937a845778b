//! Program database exports in JSON form.
//!
//! The original analysis lives inside a host framework that owns the program
//! database. For standalone use the relevant slice of that database is
//! exported as JSON: the executable format label, its MD5 digest, the
//! function list, and the typed reference list. Addresses in the export are
//! hex string literals as the exporter writes them.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::errors::Result;
use crate::models::{AddressRange, Function, Reference, ReferenceKind};
use crate::program::ProgramModel;
use crate::utils::parse_address;

/// Function record as written by the exporter
#[derive(Debug, Deserialize)]
struct RawFunction {
    entry: String,
    size: u64,
    #[serde(default)]
    name: Option<String>,
}

/// Reference record as written by the exporter; `kind` is the framework's
/// flow-type label and is classified on load.
#[derive(Debug, Deserialize)]
struct RawReference {
    from: String,
    to: String,
    kind: String,
}

#[derive(Debug, Deserialize)]
struct RawExport {
    format: String,
    md5: String,
    #[serde(default)]
    functions: Vec<RawFunction>,
    #[serde(default)]
    references: Vec<RawReference>,
}

/// A loaded program export backing the [`ProgramModel`] trait.
#[derive(Debug, Clone)]
pub struct ProgramExport {
    format: String,
    md5: String,
    functions: Vec<Function>,
    by_entry: HashMap<u64, usize>,
    references: Vec<Reference>,
}

impl ProgramExport {
    /// Load an export from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse an export from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawExport = serde_json::from_str(json)?;

        let mut functions = Vec::with_capacity(raw.functions.len());
        for f in raw.functions {
            functions.push(Function::new(parse_address(&f.entry)?, f.size, f.name));
        }
        functions.sort_by_key(|f| f.entry);

        let by_entry = functions
            .iter()
            .enumerate()
            .map(|(i, f)| (f.entry, i))
            .collect();

        let mut references = Vec::with_capacity(raw.references.len());
        for r in raw.references {
            references.push(Reference::new(
                parse_address(&r.from)?,
                parse_address(&r.to)?,
                ReferenceKind::classify(&r.kind),
            ));
        }
        // Stable sort: same-origin references keep their export order.
        references.sort_by_key(|r| r.from);

        debug!(
            "loaded program export: {} functions, {} references",
            functions.len(),
            references.len()
        );

        Ok(Self {
            format: raw.format,
            md5: raw.md5,
            functions,
            by_entry,
            references,
        })
    }

    /// All functions in the export, sorted by entry address
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Look up a function by name or by entry address literal
    pub fn find_function(&self, name_or_addr: &str) -> Option<&Function> {
        if let Some(f) = self
            .functions
            .iter()
            .find(|f| f.name.as_deref() == Some(name_or_addr))
        {
            return Some(f);
        }
        let addr = parse_address(name_or_addr).ok()?;
        self.by_entry.get(&addr).map(|&i| &self.functions[i])
    }
}

impl ProgramModel for ProgramExport {
    fn executable_format(&self) -> &str {
        &self.format
    }

    fn executable_md5(&self) -> &str {
        &self.md5
    }

    fn function_at(&self, addr: u64) -> Option<Function> {
        self.by_entry.get(&addr).map(|&i| self.functions[i].clone())
    }

    fn references_from(&self, range: &AddressRange) -> Vec<Reference> {
        self.references
            .iter()
            .filter(|r| range.contains(r.from))
            .copied()
            .collect()
    }
}
