//! Declarations: named bindings introduced at a source position.
//!
//! A [`Declaration`] is a handle into the arena plus the names it binds. It is
//! built once per binding occurrence from one of three node shapes:
//!
//! - a VARIABLE_STATEMENT (`let a = 1, (b, c) = pair`), which may bind several names
//! - a PARAMETER, which binds its internal name
//! - an OPTIONAL_BINDING_CONDITION (`if let a = maybe`), which binds a simple identifier
//!
//! Construction never fails loudly. A node that yields no identifier (wildcards,
//! unsupported pattern shapes) produces no declaration and is simply invisible
//! to name lookup.

use scry_syntax::syntax_kind::{
    IDENTIFIER_PATTERN, OPTIONAL_BINDING_CONDITION, PARAMETER, TUPLE_PATTERN, VARIABLE_STATEMENT,
};
use scry_syntax::{NodeArena, NodeIndex};
use serde::Serialize;
use smallvec::SmallVec;

/// Which binding form produced a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Variable,
    Parameter,
    OptionalBinding,
}

impl DeclarationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Variable => "variable",
            DeclarationKind::Parameter => "parameter",
            DeclarationKind::OptionalBinding => "optional binding",
        }
    }
}

/// Bound names, inline for the common one- and two-name cases.
pub type DeclarationNames<'a> = SmallVec<[&'a str; 2]>;

/// A binding of one or more names, borrowed from the arena it was built from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Declaration<'a> {
    kind: DeclarationKind,
    node: NodeIndex,
    names: DeclarationNames<'a>,
    position: u32,
}

impl<'a> Declaration<'a> {
    /// Build a declaration from parts. Returns `None` when `names` is empty.
    pub fn new(
        kind: DeclarationKind,
        node: NodeIndex,
        names: DeclarationNames<'a>,
        position: u32,
    ) -> Option<Self> {
        if names.is_empty() {
            return None;
        }
        Some(Declaration {
            kind,
            node,
            names,
            position,
        })
    }

    /// Build the declaration for any recognized binding node.
    pub fn from_node(arena: &'a NodeArena, node: NodeIndex) -> Option<Self> {
        match arena.kind_of(node)? {
            VARIABLE_STATEMENT => Self::from_variable_statement(arena, node),
            PARAMETER => Self::from_parameter(arena, node),
            OPTIONAL_BINDING_CONDITION => Self::from_optional_binding(arena, node),
            _ => None,
        }
    }

    /// All identifier names bound by the statement's declarators, in source order.
    pub fn from_variable_statement(arena: &'a NodeArena, node: NodeIndex) -> Option<Self> {
        let header = arena.get(node)?;
        let variable = arena.get_variable(header)?;

        let mut names = DeclarationNames::new();
        for decl_idx in variable.declarations.iter() {
            let Some(decl) = arena
                .get(decl_idx)
                .and_then(|decl_node| arena.get_variable_declaration(decl_node))
            else {
                continue;
            };
            collect_pattern_names(arena, decl.pattern, &mut names);
        }

        Self::new(DeclarationKind::Variable, node, names, header.pos)
    }

    /// The internal name of a parameter: the second slot when present, the
    /// only slot otherwise.
    pub fn from_parameter(arena: &'a NodeArena, node: NodeIndex) -> Option<Self> {
        let header = arena.get(node)?;
        let param = arena.get_parameter(header)?;

        let bound = if param.second_name.is_some() {
            param.second_name
        } else {
            param.first_name
        };
        let name = arena.identifier_text(bound)?;

        Self::new(
            DeclarationKind::Parameter,
            node,
            SmallVec::from_elem(name, 1),
            header.pos,
        )
    }

    /// Only `let name = ...` conditions bind; other pattern shapes are ignored.
    pub fn from_optional_binding(arena: &'a NodeArena, node: NodeIndex) -> Option<Self> {
        let header = arena.get(node)?;
        let binding = arena.get_optional_binding(header)?;

        if arena.kind_of(binding.pattern) != Some(IDENTIFIER_PATTERN) {
            return None;
        }
        let name = arena.identifier_text(binding.pattern)?;

        Self::new(
            DeclarationKind::OptionalBinding,
            node,
            SmallVec::from_elem(name, 1),
            header.pos,
        )
    }

    #[inline]
    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    #[inline]
    pub fn node(&self) -> NodeIndex {
        self.node
    }

    #[inline]
    pub fn names(&self) -> &[&'a str] {
        &self.names
    }

    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// True if `name` is one of the bound names.
    #[inline]
    pub fn refers_to(&self, name: &str) -> bool {
        self.names.iter().any(|bound| *bound == name)
    }

    /// True if every bound name also appears in `other_names`.
    ///
    /// This is a subset test: `{x, y}` is covered by `{x, y}` and by
    /// `{x, y, z}`, but not by `{x}`.
    pub fn refers_to_names(&self, other_names: &[&str]) -> bool {
        self.names
            .iter()
            .all(|bound| other_names.contains(bound))
    }
}

/// Identifiers of a pattern; tuples are flattened, wildcards contribute nothing.
fn collect_pattern_names<'a>(
    arena: &'a NodeArena,
    pattern: NodeIndex,
    names: &mut DeclarationNames<'a>,
) {
    match arena.kind_of(pattern) {
        Some(IDENTIFIER_PATTERN) => {
            if let Some(name) = arena.identifier_text(pattern) {
                names.push(name);
            }
        }
        Some(TUPLE_PATTERN) => {
            let Some(list) = arena
                .get(pattern)
                .and_then(|node| arena.get_pattern_list(node))
            else {
                return;
            };
            for element in list.elements.iter() {
                collect_pattern_names(arena, element, names);
            }
        }
        _ => {}
    }
}
