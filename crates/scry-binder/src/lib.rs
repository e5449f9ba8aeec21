//! Lexical name resolution over a scry syntax tree.
//!
//! Scopes are never stored: for any node, [`enclosing_scope`] walks parent
//! links to the nearest scope-bearing node and builds a [`Scope`] view on the
//! spot. A scope answers two questions:
//!
//! - [`Scope::declarations_before`]: what is visible just before a position
//! - [`Scope::resolve`]: which [`Declaration`] a reference binds to
//!
//! Only three binding forms declare names: `let` statements, function
//! parameters and `if let` optional bindings.
//!
//! Every query only reads the arena, so references can be resolved in any
//! order and from any number of threads.

pub mod declaration;
pub use declaration::{Declaration, DeclarationKind, DeclarationNames};

pub mod scope;
pub use scope::{Scope, ScopeKind, remove_shadowed};

pub mod scope_chain;
pub use scope_chain::{
    MAX_SCOPE_WALK_ITERATIONS, enclosing_scope, find_enclosing_scope, scope_kind_of,
};

mod resolve;
pub use resolve::resolve_reference;

#[cfg(test)]
#[path = "tests/declaration_tests.rs"]
mod declaration_tests;
#[cfg(test)]
#[path = "tests/scope_chain_tests.rs"]
mod scope_chain_tests;
