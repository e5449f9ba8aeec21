//! Scope-bearing node classification and the upward scope walk.
//!
//! Which nodes own a scope, and which kind of scope they own, is decided in
//! exactly one place: [`scope_kind_of`]. Everything else walks parent links
//! and asks this table.

use crate::scope::{Scope, ScopeKind};
use scry_syntax::syntax_kind::{
    BLOCK, FUNCTION_DECLARATION, IF_STATEMENT, SOURCE_FILE, UNKNOWN, kind_name,
};
use scry_syntax::{NodeArena, NodeIndex};
use tracing::{trace, warn};

/// Upper bound on parent steps in a single walk.
pub const MAX_SCOPE_WALK_ITERATIONS: usize = 10_000;

/// The kind of scope a node owns, or `None` if the node is not scope-bearing.
///
/// | node                               | scope                 |
/// |------------------------------------|-----------------------|
/// | SOURCE_FILE                        | Global                |
/// | BLOCK that is a function's body    | Function              |
/// | BLOCK that is an `if`'s then-block | ConditionalBinding    |
/// | any other BLOCK                    | Block                 |
pub fn scope_kind_of(arena: &NodeArena, node: NodeIndex) -> Option<ScopeKind> {
    match arena.kind_of(node)? {
        SOURCE_FILE => Some(ScopeKind::Global),
        BLOCK => {
            let owner = arena.parent_of(node);
            let owner_node = arena.get(owner);
            match owner_node.map(|n| n.kind) {
                Some(FUNCTION_DECLARATION) => {
                    let is_body = owner_node
                        .and_then(|n| arena.get_function(n))
                        .is_some_and(|function| function.body == node);
                    Some(if is_body {
                        ScopeKind::Function
                    } else {
                        ScopeKind::Block
                    })
                }
                Some(IF_STATEMENT) => {
                    let is_then = owner_node
                        .and_then(|n| arena.get_if_statement(n))
                        .is_some_and(|if_data| if_data.then_block == node);
                    Some(if is_then {
                        ScopeKind::ConditionalBinding
                    } else {
                        ScopeKind::Block
                    })
                }
                _ => Some(ScopeKind::Block),
            }
        }
        _ => None,
    }
}

/// Nearest scope-bearing node at or above `node`, as a scope.
///
/// Returns `None` if the walk leaves the tree without meeting one, or gives up
/// after [`MAX_SCOPE_WALK_ITERATIONS`] steps on a cyclic parent chain.
pub fn find_enclosing_scope(arena: &NodeArena, node: NodeIndex) -> Option<Scope<'_>> {
    let mut current = node;
    let mut iterations = 0;

    while current.is_some() {
        iterations += 1;
        if iterations > MAX_SCOPE_WALK_ITERATIONS {
            warn!(
                start = node.0,
                start_kind = kind_name(arena.kind_of(node).unwrap_or(UNKNOWN)),
                "scope walk exceeded {MAX_SCOPE_WALK_ITERATIONS} steps"
            );
            break;
        }
        if let Some(kind) = scope_kind_of(arena, current) {
            trace!(
                node = current.0,
                node_kind = kind_name(arena.kind_of(current).unwrap_or(UNKNOWN)),
                ?kind,
                steps = iterations,
                "found scope-bearing node"
            );
            return Some(Scope::from_parts(arena, kind, current));
        }
        current = arena.parent_of(current);
    }

    None
}

/// Nearest enclosing scope of `node`.
///
/// # Panics
///
/// Panics if the walk from `node` meets no scope-bearing node. Trees built by
/// a front end always have a SOURCE_FILE root, so this indicates a caller bug
/// rather than an unresolvable reference.
pub fn enclosing_scope(arena: &NodeArena, node: NodeIndex) -> Scope<'_> {
    match find_enclosing_scope(arena, node) {
        Some(scope) => scope,
        None => panic!(
            "node {} has no enclosing source file; scope discovery needs a well-formed tree",
            node.0
        ),
    }
}
