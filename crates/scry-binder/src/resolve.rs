//! Entry points used by drivers and tooling.

use crate::declaration::Declaration;
use crate::scope_chain::enclosing_scope;
use scry_syntax::syntax_kind::{REFERENCE_EXPRESSION, UNKNOWN, kind_name};
use scry_syntax::{NodeArena, NodeIndex};
use tracing::{Level, debug, span};

/// Resolve a reference node to the declaration it binds to.
///
/// Returns `None` for unresolved names (globals, builtins, uses before any
/// binding) and for nodes that are not references.
pub fn resolve_reference(arena: &NodeArena, reference: NodeIndex) -> Option<Declaration<'_>> {
    let _span = span!(Level::DEBUG, "resolve_reference", reference = reference.0).entered();

    match arena.kind_of(reference) {
        Some(REFERENCE_EXPRESSION) => {}
        kind => {
            debug!(
                kind = kind_name(kind.unwrap_or(UNKNOWN)),
                "not a reference expression"
            );
            return None;
        }
    }
    enclosing_scope(arena, reference).resolve(reference)
}
