//! NodeArena creation methods (add_* methods).
//!
//! Every `add_*` method pushes the node header, its data, and records the new
//! node as the parent of each child it references.

use super::base::{NodeIndex, NodeList};
use super::node::*;
use super::syntax_kind;

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            extended_info: Vec::with_capacity(capacity),
            identifiers: Vec::with_capacity(capacity / 3),
            ..NodeArena::default()
        }
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if !child.is_none() {
            if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
                info.parent = parent;
            }
        }
    }

    #[inline]
    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for &child in &list.nodes {
            self.set_parent(child, parent);
        }
    }

    #[inline]
    fn push_node(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo::default());
        NodeIndex(index)
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Add a node that carries no data (wildcard names and patterns)
    pub fn add_token(&mut self, kind: u16, pos: u32, end: u32) -> NodeIndex {
        self.push_node(Node::new(kind, pos, end))
    }

    /// Add an identifier-like node: IDENTIFIER, IDENTIFIER_PATTERN or
    /// REFERENCE_EXPRESSION.
    pub fn add_identifier(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: IdentifierData,
    ) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(data);
        self.push_node(Node::with_data(kind, pos, end, data_index))
    }

    pub fn add_literal(&mut self, kind: u16, pos: u32, end: u32, data: LiteralData) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(data);
        self.push_node(Node::with_data(kind, pos, end, data_index))
    }

    pub fn add_binary_expr(&mut self, pos: u32, end: u32, data: BinaryExprData) -> NodeIndex {
        let left = data.left;
        let right = data.right;

        let data_index = self.binary_exprs.len() as u32;
        self.binary_exprs.push(data);
        let parent = self.push_node(Node::with_data(
            syntax_kind::BINARY_EXPRESSION,
            pos,
            end,
            data_index,
        ));

        self.set_parent(left, parent);
        self.set_parent(right, parent);
        parent
    }

    pub fn add_call_expr(&mut self, pos: u32, end: u32, data: CallExprData) -> NodeIndex {
        let callee = data.callee;
        let arguments = data.arguments.clone();

        let data_index = self.call_exprs.len() as u32;
        self.call_exprs.push(data);
        let parent = self.push_node(Node::with_data(
            syntax_kind::CALL_EXPRESSION,
            pos,
            end,
            data_index,
        ));

        self.set_parent(callee, parent);
        self.set_parent_list(&arguments, parent);
        parent
    }

    pub fn add_tuple_pattern(&mut self, pos: u32, end: u32, data: PatternListData) -> NodeIndex {
        let elements = data.elements.clone();

        let data_index = self.pattern_lists.len() as u32;
        self.pattern_lists.push(data);
        let parent = self.push_node(Node::with_data(
            syntax_kind::TUPLE_PATTERN,
            pos,
            end,
            data_index,
        ));

        self.set_parent_list(&elements, parent);
        parent
    }

    pub fn add_variable_declaration(
        &mut self,
        pos: u32,
        end: u32,
        data: VariableDeclarationData,
    ) -> NodeIndex {
        let pattern = data.pattern;
        let initializer = data.initializer;

        let data_index = self.variable_declarations.len() as u32;
        self.variable_declarations.push(data);
        let parent = self.push_node(Node::with_data(
            syntax_kind::VARIABLE_DECLARATION,
            pos,
            end,
            data_index,
        ));

        self.set_parent(pattern, parent);
        self.set_parent(initializer, parent);
        parent
    }

    pub fn add_variable_statement(&mut self, pos: u32, end: u32, data: VariableData) -> NodeIndex {
        let declarations = data.declarations.clone();

        let data_index = self.variables.len() as u32;
        self.variables.push(data);
        let parent = self.push_node(Node::with_data(
            syntax_kind::VARIABLE_STATEMENT,
            pos,
            end,
            data_index,
        ));

        self.set_parent_list(&declarations, parent);
        parent
    }

    pub fn add_parameter(&mut self, pos: u32, end: u32, data: ParameterData) -> NodeIndex {
        let first_name = data.first_name;
        let second_name = data.second_name;

        let data_index = self.parameters.len() as u32;
        self.parameters.push(data);
        let parent = self.push_node(Node::with_data(
            syntax_kind::PARAMETER,
            pos,
            end,
            data_index,
        ));

        self.set_parent(first_name, parent);
        self.set_parent(second_name, parent);
        parent
    }

    pub fn add_function(&mut self, pos: u32, end: u32, data: FunctionData) -> NodeIndex {
        let name = data.name;
        let parameters = data.parameters.clone();
        let body = data.body;

        let data_index = self.functions.len() as u32;
        self.functions.push(data);
        let parent = self.push_node(Node::with_data(
            syntax_kind::FUNCTION_DECLARATION,
            pos,
            end,
            data_index,
        ));

        self.set_parent(name, parent);
        self.set_parent_list(&parameters, parent);
        self.set_parent(body, parent);
        parent
    }

    pub fn add_optional_binding(
        &mut self,
        pos: u32,
        end: u32,
        data: OptionalBindingData,
    ) -> NodeIndex {
        let pattern = data.pattern;
        let initializer = data.initializer;

        let data_index = self.optional_bindings.len() as u32;
        self.optional_bindings.push(data);
        let parent = self.push_node(Node::with_data(
            syntax_kind::OPTIONAL_BINDING_CONDITION,
            pos,
            end,
            data_index,
        ));

        self.set_parent(pattern, parent);
        self.set_parent(initializer, parent);
        parent
    }

    pub fn add_if_statement(&mut self, pos: u32, end: u32, data: IfStatementData) -> NodeIndex {
        let conditions = data.conditions.clone();
        let then_block = data.then_block;
        let else_branch = data.else_branch;

        let data_index = self.if_statements.len() as u32;
        self.if_statements.push(data);
        let parent = self.push_node(Node::with_data(
            syntax_kind::IF_STATEMENT,
            pos,
            end,
            data_index,
        ));

        self.set_parent_list(&conditions, parent);
        self.set_parent(then_block, parent);
        self.set_parent(else_branch, parent);
        parent
    }

    pub fn add_expression_statement(
        &mut self,
        pos: u32,
        end: u32,
        data: ExprStatementData,
    ) -> NodeIndex {
        let expression = data.expression;

        let data_index = self.expr_statements.len() as u32;
        self.expr_statements.push(data);
        let parent = self.push_node(Node::with_data(
            syntax_kind::EXPRESSION_STATEMENT,
            pos,
            end,
            data_index,
        ));

        self.set_parent(expression, parent);
        parent
    }

    pub fn add_return(&mut self, pos: u32, end: u32, data: ReturnData) -> NodeIndex {
        let expression = data.expression;

        let data_index = self.return_data.len() as u32;
        self.return_data.push(data);
        let parent = self.push_node(Node::with_data(
            syntax_kind::RETURN_STATEMENT,
            pos,
            end,
            data_index,
        ));

        self.set_parent(expression, parent);
        parent
    }

    pub fn add_block(&mut self, pos: u32, end: u32, data: BlockData) -> NodeIndex {
        let statements = data.statements.clone();

        let data_index = self.blocks.len() as u32;
        self.blocks.push(data);
        let parent = self.push_node(Node::with_data(syntax_kind::BLOCK, pos, end, data_index));

        self.set_parent_list(&statements, parent);
        parent
    }

    pub fn add_source_file(&mut self, pos: u32, end: u32, data: SourceFileData) -> NodeIndex {
        let statements = data.statements.clone();

        let data_index = self.source_files.len() as u32;
        self.source_files.push(data);
        let parent = self.push_node(Node::with_data(
            syntax_kind::SOURCE_FILE,
            pos,
            end,
            data_index,
        ));

        self.set_parent_list(&statements, parent);
        parent
    }
}
