//! Lexical scopes derived on demand from the syntax tree.
//!
//! A [`Scope`] is a cheap view: the arena, a scope-bearing node and its
//! [`ScopeKind`]. Nothing is cached or stored between queries; two scopes built
//! for the same node are interchangeable.
//!
//! # Visibility
//!
//! The global scope sees its top-level bindings that start before a position.
//! Every block scope composes three sources:
//!
//! 1. what its parent sees just before the block starts,
//! 2. minus every outer declaration whose names are all rebound by one of the
//!    scope's introduced declarations (parameters, optional bindings),
//! 3. plus the introduced declarations and the block's own bindings that start
//!    before the position.
//!
//! Resolution returns the first visible declaration, in position order, that
//! binds the name. Shadowing relies entirely on step 2; a local binding that
//! reuses a parameter's name is not filtered, and the earlier parameter wins.

use crate::declaration::Declaration;
use crate::scope_chain::{enclosing_scope, scope_kind_of};
use rustc_hash::FxHashSet;
use scry_syntax::syntax_kind::REFERENCE_EXPRESSION;
use scry_syntax::{NodeArena, NodeIndex};
use serde::Serialize;
use std::fmt;
use tracing::{Level, debug, span, trace};

/// The closed set of scope kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    /// The compilation unit. No parent, nothing introduced.
    Global,
    /// A function body. Introduces the parameters.
    Function,
    /// The then-block of an `if`. Introduces the optional bindings.
    ConditionalBinding,
    /// Any other block (`else` branches, `do` blocks). Introduces nothing.
    Block,
}

impl ScopeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScopeKind::Global => "global",
            ScopeKind::Function => "function",
            ScopeKind::ConditionalBinding => "conditional binding",
            ScopeKind::Block => "block",
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy)]
pub struct Scope<'a> {
    arena: &'a NodeArena,
    kind: ScopeKind,
    node: NodeIndex,
}

impl PartialEq for Scope<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.node == other.node && std::ptr::eq(self.arena, other.arena)
    }
}

impl Eq for Scope<'_> {}

impl fmt::Debug for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("kind", &self.kind)
            .field("node", &self.node)
            .finish()
    }
}

impl<'a> Scope<'a> {
    /// The scope owned by `node`, or `None` if `node` is not scope-bearing.
    pub fn new(arena: &'a NodeArena, node: NodeIndex) -> Option<Scope<'a>> {
        let kind = scope_kind_of(arena, node)?;
        Some(Scope { arena, kind, node })
    }

    pub(crate) fn from_parts(arena: &'a NodeArena, kind: ScopeKind, node: NodeIndex) -> Scope<'a> {
        Scope { arena, kind, node }
    }

    #[inline]
    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// The scope-bearing node (SOURCE_FILE or BLOCK).
    #[inline]
    pub fn node(&self) -> NodeIndex {
        self.node
    }

    #[inline]
    pub fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    /// Offset at which the scope's node begins.
    pub fn start_position(&self) -> u32 {
        self.arena.get(self.node).map_or(0, |node| node.pos)
    }

    /// The nearest enclosing scope; `None` only for the global scope.
    ///
    /// # Panics
    ///
    /// Panics if a non-global scope's node is not inside a source file.
    pub fn parent(&self) -> Option<Scope<'a>> {
        if self.kind == ScopeKind::Global {
            return None;
        }
        let above = self.arena.parent_of(self.node);
        Some(enclosing_scope(self.arena, above))
    }

    /// Declarations contributed by the scope's owning construct.
    pub fn introduced_declarations(&self) -> Vec<Declaration<'a>> {
        let arena = self.arena;
        let owner = arena.parent_of(self.node);
        let Some(owner_node) = arena.get(owner) else {
            return Vec::new();
        };

        match self.kind {
            ScopeKind::Global | ScopeKind::Block => Vec::new(),
            ScopeKind::Function => arena
                .get_function(owner_node)
                .map(|function| {
                    function
                        .parameters
                        .iter()
                        .filter_map(|param| Declaration::from_parameter(arena, param))
                        .collect()
                })
                .unwrap_or_default(),
            ScopeKind::ConditionalBinding => arena
                .get_if_statement(owner_node)
                .map(|if_data| {
                    if_data
                        .conditions
                        .iter()
                        .filter_map(|condition| Declaration::from_optional_binding(arena, condition))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Bindings made directly in the scope's own statement list.
    pub fn local_declarations(&self) -> Vec<Declaration<'a>> {
        self.arena
            .statements_of(self.node)
            .iter()
            .filter_map(|&statement| Declaration::from_variable_statement(self.arena, statement))
            .collect()
    }

    /// Everything visible just before `position`, sorted by position.
    pub fn declarations_before(&self, position: u32) -> Vec<Declaration<'a>> {
        let _span = span!(
            Level::DEBUG,
            "declarations_before",
            kind = self.kind.as_str(),
            node = self.node.0,
            position
        )
        .entered();

        let locals = self
            .local_declarations()
            .into_iter()
            .filter(|decl| decl.position() < position);

        let mut visible = match self.parent() {
            None => locals.collect::<Vec<_>>(),
            Some(parent) => {
                let start = parent.declarations_before(self.start_position());
                let introduced = self.introduced_declarations();
                let mut visible = remove_shadowed(start, &introduced);
                visible.extend(introduced);
                visible.extend(locals);
                visible
            }
        };

        visible.sort_by_key(|decl| decl.position());
        visible
    }

    /// Resolve a reference node. Non-reference nodes resolve to `None`.
    pub fn resolve(&self, reference: NodeIndex) -> Option<Declaration<'a>> {
        let node = self.arena.get(reference)?;
        if node.kind != REFERENCE_EXPRESSION {
            return None;
        }
        let name = self.arena.identifier_text(reference)?;
        self.lookup(name, node.pos)
    }

    /// First declaration binding `name` among those visible before `position`.
    pub fn lookup(&self, name: &str, position: u32) -> Option<Declaration<'a>> {
        let _span = span!(Level::DEBUG, "lookup", name, position).entered();

        let found = self
            .declarations_before(position)
            .into_iter()
            .find(|decl| decl.refers_to(name));

        match &found {
            Some(decl) => debug!(
                name,
                declaration = decl.node().0,
                kind = decl.kind().as_str(),
                "[RESOLVE] found"
            ),
            None => debug!(name, scope = self.kind.as_str(), "[RESOLVE] not found"),
        }
        found
    }

    /// Distinct names visible before `position`, in declaration order.
    pub fn visible_names(&self, position: u32) -> Vec<&'a str> {
        let mut seen = FxHashSet::default();
        let mut names = Vec::new();
        for decl in self.declarations_before(position) {
            for &name in decl.names() {
                if seen.insert(name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

/// Drop every declaration of `start` whose names are all rebound by a single
/// introduced declaration. Partially rebound declarations stay visible.
pub fn remove_shadowed<'a>(
    start: Vec<Declaration<'a>>,
    introduced: &[Declaration<'a>],
) -> Vec<Declaration<'a>> {
    if introduced.is_empty() {
        return start;
    }
    start
        .into_iter()
        .filter(|decl| {
            let shadowed_by = introduced
                .iter()
                .find(|inner| decl.refers_to_names(inner.names()));
            if let Some(inner) = shadowed_by {
                trace!(
                    outer = decl.node().0,
                    inner = inner.node().0,
                    names = ?decl.names(),
                    "shadowed"
                );
            }
            shadowed_by.is_none()
        })
        .collect()
}
