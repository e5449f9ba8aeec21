//! Thin node headers and typed data pools.
//!
//! Every node is a small fixed-size [`Node`] header holding its kind, source
//! range and an index into the pool that stores its kind-specific data. Parent
//! links live in a parallel `extended_info` vector so the header stays small.
//!
//! # Construction order
//!
//! Children are always added before their parents, so a parent's index is
//! strictly greater than the indices of its children. Walking parent links
//! therefore always terminates at the root.

use super::base::{NodeIndex, NodeList};
use serde::{Deserialize, Serialize};

/// A thin node header.
///
/// - `kind`: one of the [`syntax_kind`](crate::syntax_kind) constants
/// - `pos`/`end`: byte range in the source text
/// - `data_index`: index into the kind-specific pool (`u32::MAX` = no data)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: u16,
    pub pos: u32,
    pub end: u32,
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    /// Create a node with no associated data (wildcards)
    #[inline]
    pub fn new(kind: u16, pos: u32, end: u32) -> Node {
        Node {
            kind,
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    /// Create a node pointing into a data pool
    #[inline]
    pub fn with_data(kind: u16, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }
}

/// Per-node information that is not needed on hot paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
}

impl Default for ExtendedNodeInfo {
    fn default() -> Self {
        ExtendedNodeInfo {
            parent: NodeIndex::NONE,
        }
    }
}

// =============================================================================
// Typed Data Pools
// =============================================================================

/// Identifier text. Shared by plain names, identifier patterns and references.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierData {
    pub text: String,
}

/// Integer and string literals keep their source spelling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator: String,
    pub right: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExprData {
    pub callee: NodeIndex,
    pub arguments: NodeList,
}

/// Elements of a tuple pattern `(a, b, _)`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternListData {
    pub elements: NodeList,
}

/// `let a = 1, (b, c) = pair`: one statement, several declarators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableData {
    pub declarations: NodeList,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    pub pattern: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionData {
    pub name: NodeIndex,
    pub parameters: NodeList,
    pub body: NodeIndex,
}

/// A parameter has one or two name slots.
///
/// With a single slot the name is both the call-site label and the name bound
/// in the body. With two slots the first is the external label and the second
/// is the bound name (`_ value`, `from start`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterData {
    pub first_name: NodeIndex,
    pub second_name: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfStatementData {
    pub conditions: NodeList,
    pub then_block: NodeIndex,
    /// A BLOCK, a chained IF_STATEMENT, or NONE
    pub else_branch: NodeIndex,
}

/// `let pattern = initializer` used as an `if` condition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalBindingData {
    pub pattern: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeList,
}

/// Arena holding every node of one compilation unit.
///
/// The arena is append-only while a front end builds it and read-only
/// afterwards; resolution only ever borrows it immutably.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub extended_info: Vec<ExtendedNodeInfo>,

    // Names
    pub identifiers: Vec<IdentifierData>,

    // Expressions
    pub literals: Vec<LiteralData>,
    pub binary_exprs: Vec<BinaryExprData>,
    pub call_exprs: Vec<CallExprData>,

    // Patterns
    pub pattern_lists: Vec<PatternListData>,

    // Declarations
    pub variables: Vec<VariableData>,
    pub variable_declarations: Vec<VariableDeclarationData>,
    pub functions: Vec<FunctionData>,
    pub parameters: Vec<ParameterData>,

    // Statements
    pub if_statements: Vec<IfStatementData>,
    pub optional_bindings: Vec<OptionalBindingData>,
    pub expr_statements: Vec<ExprStatementData>,
    pub return_data: Vec<ReturnData>,
    pub blocks: Vec<BlockData>,

    pub source_files: Vec<SourceFileData>,
}
