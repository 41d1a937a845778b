//! Call-site reconstruction from a function's outgoing references

use crate::models::{CallSite, Callee, Function, ReferenceKind};
use crate::program::ProgramModel;

/// Walk a function's outgoing references and group parameter references with
/// the call that consumes them.
///
/// Single linear pass over the body's references in ascending origin order.
/// Parameter-binding references accumulate in a pending list; each
/// call-flavored reference emits a call site carrying a copy of the pending
/// list and then clears it, whether or not anything was pending. A call
/// whose destination has no function still produces a call site with an
/// unresolved callee. Trailing parameter references after the last call
/// belong to no call and are dropped. A function with no body or no
/// references yields an empty sequence.
pub fn extract(program: &dyn ProgramModel, function: &Function) -> Vec<CallSite> {
    let mut call_sites = Vec::new();
    let mut pending = Vec::new();

    for reference in program.references_from(&function.body()) {
        match reference.kind {
            ReferenceKind::Param => pending.push(reference),
            ReferenceKind::Call => {
                let callee = match program.function_at(reference.to) {
                    Some(f) => Callee::Function(f),
                    None => Callee::Unresolved(reference.to),
                };
                call_sites.push(CallSite::new(callee, pending.clone()));
                pending.clear();
            }
            ReferenceKind::Other => {}
        }
    }

    call_sites
}
