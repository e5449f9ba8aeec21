//! NodeArena access methods.
//!
//! Typed getters return `None` when the node is not of the expected kind, so
//! callers can inspect a node without checking its kind first.

use super::base::NodeIndex;
use super::node::*;
use super::syntax_kind::*;

impl NodeArena {
    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    /// Parent of a node, or `NodeIndex::NONE` for the root and unknown indices.
    #[inline]
    pub fn parent_of(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    #[inline]
    pub fn kind_of(&self, index: NodeIndex) -> Option<u16> {
        self.get(index).map(|node| node.kind)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes of one kind, in ascending index order.
    ///
    /// Leaves are created in source order, so for leaf kinds such as
    /// REFERENCE_EXPRESSION this is also ascending position order.
    pub fn iter_kind(&self, kind: u16) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.kind == kind)
            .map(|(i, _)| NodeIndex(i as u32))
    }

    // ==========================================================================
    // Typed data access
    // ==========================================================================

    /// Identifier data for IDENTIFIER, IDENTIFIER_PATTERN and REFERENCE_EXPRESSION.
    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.has_data()
            && matches!(
                node.kind,
                IDENTIFIER | IDENTIFIER_PATTERN | REFERENCE_EXPRESSION
            )
        {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Text of an identifier-like node.
    #[inline]
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node).map(|data| data.text.as_str())
    }

    #[inline]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        if node.has_data() && matches!(node.kind, INTEGER_LITERAL | STRING_LITERAL) {
            self.literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_binary_expr(&self, node: &Node) -> Option<&BinaryExprData> {
        if node.has_data() && node.kind == BINARY_EXPRESSION {
            self.binary_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_call_expr(&self, node: &Node) -> Option<&CallExprData> {
        if node.has_data() && node.kind == CALL_EXPRESSION {
            self.call_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_pattern_list(&self, node: &Node) -> Option<&PatternListData> {
        if node.has_data() && node.kind == TUPLE_PATTERN {
            self.pattern_lists.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable(&self, node: &Node) -> Option<&VariableData> {
        if node.has_data() && node.kind == VARIABLE_STATEMENT {
            self.variables.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable_declaration(&self, node: &Node) -> Option<&VariableDeclarationData> {
        if node.has_data() && node.kind == VARIABLE_DECLARATION {
            self.variable_declarations.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_function(&self, node: &Node) -> Option<&FunctionData> {
        if node.has_data() && node.kind == FUNCTION_DECLARATION {
            self.functions.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_parameter(&self, node: &Node) -> Option<&ParameterData> {
        if node.has_data() && node.kind == PARAMETER {
            self.parameters.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_if_statement(&self, node: &Node) -> Option<&IfStatementData> {
        if node.has_data() && node.kind == IF_STATEMENT {
            self.if_statements.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_optional_binding(&self, node: &Node) -> Option<&OptionalBindingData> {
        if node.has_data() && node.kind == OPTIONAL_BINDING_CONDITION {
            self.optional_bindings.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_expression_statement(&self, node: &Node) -> Option<&ExprStatementData> {
        if node.has_data() && node.kind == EXPRESSION_STATEMENT {
            self.expr_statements.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_return(&self, node: &Node) -> Option<&ReturnData> {
        if node.has_data() && node.kind == RETURN_STATEMENT {
            self.return_data.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_block(&self, node: &Node) -> Option<&BlockData> {
        if node.has_data() && node.kind == BLOCK {
            self.blocks.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_source_file(&self, node: &Node) -> Option<&SourceFileData> {
        if node.has_data() && node.kind == SOURCE_FILE {
            self.source_files.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Statement list of a BLOCK or SOURCE_FILE node.
    pub fn statements_of(&self, index: NodeIndex) -> &[NodeIndex] {
        let Some(node) = self.get(index) else {
            return &[];
        };
        if let Some(block) = self.get_block(node) {
            &block.statements.nodes
        } else if let Some(file) = self.get_source_file(node) {
            &file.statements.nodes
        } else {
            &[]
        }
    }
}
