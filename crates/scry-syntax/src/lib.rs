//! Arena syntax tree for the scry name resolver.
//!
//! The tree is stored as thin [`Node`] headers plus typed data pools inside a
//! [`NodeArena`]. Nodes are addressed by [`NodeIndex`] and carry their parent
//! link, so tools can walk both down (via typed data) and up (via
//! [`NodeArena::parent_of`]).
//!
//! Source text is not parsed here. Front ends describe a program as an
//! [`Outline`] and [`lower_outline`] turns it into a [`SyntaxTree`] with
//! rendered text and real source offsets.

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod syntax_kind;

pub mod node;
pub use node::*;

mod node_access;
mod node_arena;

pub mod line_map;
pub use line_map::{LineMap, Position};

pub mod outline;
pub use outline::{
    BindingOutline, ConditionOutline, ElseOutline, ExprOutline, FunctionOutline, IfOutline,
    Outline, ParameterOutline, PatternOutline, StatementOutline,
};

pub mod lower;
pub use lower::{SyntaxTree, lower_outline};

#[cfg(test)]
#[path = "tests/node_arena_tests.rs"]
mod node_arena_tests;
#[cfg(test)]
#[path = "tests/line_map_tests.rs"]
mod line_map_tests;
