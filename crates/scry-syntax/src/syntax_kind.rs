//! Node kind discriminators.
//!
//! Kinds are plain `u16` constants stored in [`Node::kind`](crate::Node::kind),
//! grouped by family. Values are stable so serialized arenas stay readable.

pub const UNKNOWN: u16 = 0;

// Names
pub const IDENTIFIER: u16 = 1;
pub const WILDCARD: u16 = 2;

// Patterns
pub const IDENTIFIER_PATTERN: u16 = 10;
pub const TUPLE_PATTERN: u16 = 11;
pub const WILDCARD_PATTERN: u16 = 12;

// Expressions
pub const REFERENCE_EXPRESSION: u16 = 20;
pub const INTEGER_LITERAL: u16 = 21;
pub const STRING_LITERAL: u16 = 22;
pub const CALL_EXPRESSION: u16 = 23;
pub const BINARY_EXPRESSION: u16 = 24;

// Declarations and statements
pub const VARIABLE_STATEMENT: u16 = 40;
pub const VARIABLE_DECLARATION: u16 = 41;
pub const FUNCTION_DECLARATION: u16 = 42;
pub const PARAMETER: u16 = 43;
pub const IF_STATEMENT: u16 = 44;
pub const OPTIONAL_BINDING_CONDITION: u16 = 45;
pub const EXPRESSION_STATEMENT: u16 = 46;
pub const RETURN_STATEMENT: u16 = 47;
pub const BLOCK: u16 = 48;

pub const SOURCE_FILE: u16 = 60;

/// Human-readable name of a kind, used in trace and debug fields.
pub fn kind_name(kind: u16) -> &'static str {
    match kind {
        IDENTIFIER => "Identifier",
        WILDCARD => "Wildcard",
        IDENTIFIER_PATTERN => "IdentifierPattern",
        TUPLE_PATTERN => "TuplePattern",
        WILDCARD_PATTERN => "WildcardPattern",
        REFERENCE_EXPRESSION => "ReferenceExpression",
        INTEGER_LITERAL => "IntegerLiteral",
        STRING_LITERAL => "StringLiteral",
        CALL_EXPRESSION => "CallExpression",
        BINARY_EXPRESSION => "BinaryExpression",
        VARIABLE_STATEMENT => "VariableStatement",
        VARIABLE_DECLARATION => "VariableDeclaration",
        FUNCTION_DECLARATION => "FunctionDeclaration",
        PARAMETER => "Parameter",
        IF_STATEMENT => "IfStatement",
        OPTIONAL_BINDING_CONDITION => "OptionalBindingCondition",
        EXPRESSION_STATEMENT => "ExpressionStatement",
        RETURN_STATEMENT => "ReturnStatement",
        BLOCK => "Block",
        SOURCE_FILE => "SourceFile",
        _ => "Unknown",
    }
}
