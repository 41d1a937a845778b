//! Reconstructed call sites with their parameter references

use serde::{Deserialize, Serialize};

use super::program::{Function, Reference};

/// Destination of a reconstructed call.
///
/// A call whose destination has no function in the program model is still
/// reported, with the raw destination address kept so the caller can decide
/// what to do with it. This is distinct from a resolved call with zero
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Callee {
    /// The destination resolved to a function
    Function(Function),
    /// No function exists at the destination address
    Unresolved(u64),
}

impl Callee {
    /// The resolved function, if any
    pub fn function(&self) -> Option<&Function> {
        match self {
            Self::Function(f) => Some(f),
            Self::Unresolved(_) => None,
        }
    }

    /// The destination address, resolved or not
    pub fn address(&self) -> u64 {
        match self {
            Self::Function(f) => f.entry,
            Self::Unresolved(addr) => *addr,
        }
    }
}

/// A call instruction paired with the parameter references feeding it.
///
/// Parameters are in discovery order within the address-ordered reference
/// stream preceding the call. Call sites are computed fresh per extraction
/// and owned by the caller that requested them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    /// Where the call goes
    pub callee: Callee,
    /// Parameter-binding references consumed by this call, in stream order
    pub params: Vec<Reference>,
}

impl CallSite {
    /// Create a new call site
    pub fn new(callee: Callee, params: Vec<Reference>) -> Self {
        Self { callee, params }
    }
}
