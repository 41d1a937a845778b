//! Program objects consumed from the external program model

use serde::{Deserialize, Serialize};

/// A half-open address range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRange {
    pub start: u64,
    pub end: u64,
}

impl AddressRange {
    /// Create a new range; `end` is exclusive
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Whether an address falls inside the range
    pub fn contains(&self, addr: u64) -> bool {
        addr >= self.start && addr < self.end
    }

    /// Number of addresses covered
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range covers no addresses
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// A function discovered by the external program model.
///
/// The body is the contiguous range `[entry, entry + size)`; reference
/// enumeration and call-site extraction operate on that range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// Entry point address
    pub entry: u64,
    /// Body size in bytes
    pub size: u64,
    /// Symbol name, if the program model has one
    pub name: Option<String>,
}

impl Function {
    /// Create a new function record
    pub fn new(entry: u64, size: u64, name: Option<String>) -> Self {
        Self { entry, size, name }
    }

    /// The function body as an address range
    pub fn body(&self) -> AddressRange {
        AddressRange::new(self.entry, self.entry.saturating_add(self.size))
    }
}

/// Classification of a reference edge.
///
/// Only parameter bindings and call flows matter to call-site extraction;
/// every other flow type maps to `Other` and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// The reference binds an argument value for an upcoming call
    Param,
    /// The reference is a call-flavored control-flow edge
    Call,
    /// Anything else; passes through unclassified
    Other,
}

impl ReferenceKind {
    /// Classify a flow-type label as exported by the analysis framework.
    ///
    /// Call-flavored labels follow the framework's flow-type names; the set
    /// here covers every label whose flow is a call, terminators included.
    pub fn classify(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "PARAM" => Self::Param,
            "UNCONDITIONAL_CALL"
            | "CONDITIONAL_CALL"
            | "COMPUTED_CALL"
            | "CALL_OVERRIDE_UNCONDITIONAL"
            | "CALL_TERMINATOR"
            | "CONDITIONAL_CALL_TERMINATOR"
            | "COMPUTED_CALL_TERMINATOR" => Self::Call,
            _ => Self::Other,
        }
    }
}

/// A directed reference between two code addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Origin address
    pub from: u64,
    /// Destination address
    pub to: u64,
    /// Edge classification
    pub kind: ReferenceKind,
}

impl Reference {
    /// Create a new reference edge
    pub fn new(from: u64, to: u64, kind: ReferenceKind) -> Self {
        Self { from, to, kind }
    }
}
