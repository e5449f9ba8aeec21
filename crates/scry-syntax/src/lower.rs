//! Outline lowering: builds a [`NodeArena`] and renders canonical source text.
//!
//! Lowering walks the outline top-down while appending text to a buffer, and
//! adds nodes bottom-up (children first) so parent links can be set as each
//! parent is created. Each node's `pos`/`end` is the byte range of its own
//! rendering, so positions are real offsets into [`SyntaxTree::text`].

use crate::base::{NodeIndex, NodeList};
use crate::line_map::{LineMap, Position};
use crate::node::*;
use crate::outline::*;
use crate::syntax_kind;
use tracing::{Level, debug, span};

const INDENT: &str = "    ";

/// A lowered compilation unit: the arena, its root, and the rendered text.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    pub arena: NodeArena,
    pub root: NodeIndex,
    pub text: String,
    pub line_map: LineMap,
}

impl SyntaxTree {
    pub fn file_name(&self) -> &str {
        self.arena
            .get(self.root)
            .and_then(|node| self.arena.get_source_file(node))
            .map_or("", |file| file.file_name.as_str())
    }

    /// Line/column of a node's start.
    pub fn position_of(&self, index: NodeIndex) -> Position {
        let offset = self.arena.get(index).map_or(0, |node| node.pos);
        self.line_map.offset_to_position(offset, &self.text)
    }

    /// Source text covered by a node.
    pub fn text_of(&self, index: NodeIndex) -> &str {
        self.arena
            .get(index)
            .and_then(|node| self.text.get(node.pos as usize..node.end as usize))
            .unwrap_or("")
    }

    /// References in source order.
    pub fn references(&self) -> Vec<NodeIndex> {
        self.arena
            .iter_kind(syntax_kind::REFERENCE_EXPRESSION)
            .collect()
    }
}

/// Lower an outline into a syntax tree.
pub fn lower_outline(outline: &Outline) -> SyntaxTree {
    let _span = span!(Level::DEBUG, "lower_outline", file = %outline.file_name).entered();

    let mut lowerer = Lowerer::new();
    let root = lowerer.lower_source_file(outline);
    let Lowerer { arena, text, .. } = lowerer;

    debug!(
        nodes = arena.len(),
        bytes = text.len(),
        "lowered outline"
    );

    let line_map = LineMap::build(&text);
    SyntaxTree {
        arena,
        root,
        text,
        line_map,
    }
}

struct Lowerer {
    arena: NodeArena,
    text: String,
    depth: usize,
}

impl Lowerer {
    fn new() -> Self {
        Lowerer {
            arena: NodeArena::new(),
            text: String::new(),
            depth: 0,
        }
    }

    #[inline]
    fn pos(&self) -> u32 {
        self.text.len() as u32
    }

    fn emit(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Emit a word and return its range.
    fn emit_word(&mut self, s: &str) -> (u32, u32) {
        let start = self.pos();
        self.emit(s);
        (start, self.pos())
    }

    fn newline(&mut self) {
        self.text.push('\n');
        for _ in 0..self.depth {
            self.text.push_str(INDENT);
        }
    }

    fn lower_source_file(&mut self, outline: &Outline) -> NodeIndex {
        let mut statements = Vec::with_capacity(outline.statements.len());
        for statement in &outline.statements {
            statements.push(self.lower_statement(statement));
            self.emit("\n");
        }
        let end = self.pos();
        self.arena.add_source_file(
            0,
            end,
            SourceFileData {
                file_name: outline.file_name.clone(),
                statements: NodeList::new(statements),
            },
        )
    }

    fn lower_statement(&mut self, statement: &StatementOutline) -> NodeIndex {
        match statement {
            StatementOutline::Let(bindings) => self.lower_let(bindings),
            StatementOutline::Func(function) => self.lower_function(function),
            StatementOutline::If(if_outline) => self.lower_if(if_outline),
            StatementOutline::Expr(expr) => {
                let start = self.pos();
                let expression = self.lower_expr(expr);
                let end = self.pos();
                self.arena
                    .add_expression_statement(start, end, ExprStatementData { expression })
            }
            StatementOutline::Return(expr) => {
                let start = self.pos();
                self.emit("return");
                let expression = match expr {
                    Some(expr) => {
                        self.emit(" ");
                        self.lower_expr(expr)
                    }
                    None => NodeIndex::NONE,
                };
                let end = self.pos();
                self.arena.add_return(start, end, ReturnData { expression })
            }
            StatementOutline::Do(statements) => {
                self.emit("do ");
                self.lower_block(statements)
            }
        }
    }

    fn lower_let(&mut self, bindings: &[BindingOutline]) -> NodeIndex {
        let start = self.pos();
        self.emit("let ");
        let mut declarations = Vec::with_capacity(bindings.len());
        for (i, binding) in bindings.iter().enumerate() {
            if i > 0 {
                self.emit(", ");
            }
            let decl_start = self.pos();
            let pattern = self.lower_pattern(&binding.pattern);
            let initializer = self.lower_initializer(binding.value.as_ref());
            let decl_end = self.pos();
            declarations.push(self.arena.add_variable_declaration(
                decl_start,
                decl_end,
                VariableDeclarationData {
                    pattern,
                    initializer,
                },
            ));
        }
        let end = self.pos();
        self.arena.add_variable_statement(
            start,
            end,
            VariableData {
                declarations: NodeList::new(declarations),
            },
        )
    }

    fn lower_initializer(&mut self, value: Option<&ExprOutline>) -> NodeIndex {
        match value {
            Some(expr) => {
                self.emit(" = ");
                self.lower_expr(expr)
            }
            None => NodeIndex::NONE,
        }
    }

    fn lower_pattern(&mut self, pattern: &PatternOutline) -> NodeIndex {
        match pattern {
            PatternOutline::Name(name) if name == WILDCARD_TEXT => {
                let (start, end) = self.emit_word(WILDCARD_TEXT);
                self.arena
                    .add_token(syntax_kind::WILDCARD_PATTERN, start, end)
            }
            PatternOutline::Name(name) => {
                let (start, end) = self.emit_word(name);
                self.arena.add_identifier(
                    syntax_kind::IDENTIFIER_PATTERN,
                    start,
                    end,
                    IdentifierData { text: name.clone() },
                )
            }
            PatternOutline::Tuple(elements) => {
                let start = self.pos();
                self.emit("(");
                let mut lowered = Vec::with_capacity(elements.len());
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        self.emit(", ");
                    }
                    lowered.push(self.lower_pattern(element));
                }
                self.emit(")");
                let end = self.pos();
                self.arena.add_tuple_pattern(
                    start,
                    end,
                    PatternListData {
                        elements: NodeList::new(lowered),
                    },
                )
            }
        }
    }

    fn lower_name(&mut self, name: &str) -> NodeIndex {
        let (start, end) = self.emit_word(name);
        if name == WILDCARD_TEXT {
            self.arena.add_token(syntax_kind::WILDCARD, start, end)
        } else {
            self.arena.add_identifier(
                syntax_kind::IDENTIFIER,
                start,
                end,
                IdentifierData {
                    text: name.to_string(),
                },
            )
        }
    }

    fn lower_function(&mut self, function: &FunctionOutline) -> NodeIndex {
        let start = self.pos();
        self.emit("func ");
        let name = self.lower_name(&function.name);
        self.emit("(");
        let mut parameters = Vec::with_capacity(function.params.len());
        for (i, param) in function.params.iter().enumerate() {
            if i > 0 {
                self.emit(", ");
            }
            parameters.push(self.lower_parameter(param));
        }
        self.emit(") ");
        let body = self.lower_block(&function.body);
        let end = self.pos();
        self.arena.add_function(
            start,
            end,
            FunctionData {
                name,
                parameters: NodeList::new(parameters),
                body,
            },
        )
    }

    fn lower_parameter(&mut self, param: &ParameterOutline) -> NodeIndex {
        let start = self.pos();
        let (first_name, second_name) = match param {
            ParameterOutline::Name(name) => (self.lower_name(name), NodeIndex::NONE),
            ParameterOutline::Labeled { label, name } => {
                let first = self.lower_name(label);
                self.emit(" ");
                (first, self.lower_name(name))
            }
        };
        let end = self.pos();
        self.arena.add_parameter(
            start,
            end,
            ParameterData {
                first_name,
                second_name,
            },
        )
    }

    fn lower_if(&mut self, if_outline: &IfOutline) -> NodeIndex {
        let start = self.pos();
        self.emit("if ");
        let mut conditions = Vec::with_capacity(if_outline.conditions.len());
        for (i, condition) in if_outline.conditions.iter().enumerate() {
            if i > 0 {
                self.emit(", ");
            }
            conditions.push(self.lower_condition(condition));
        }
        if !if_outline.conditions.is_empty() {
            self.emit(" ");
        }
        let then_block = self.lower_block(&if_outline.then);
        let else_branch = match &if_outline.else_branch {
            Some(ElseOutline::Block(statements)) => {
                self.emit(" else ");
                self.lower_block(statements)
            }
            Some(ElseOutline::If(nested)) => {
                self.emit(" else ");
                self.lower_if(nested)
            }
            None => NodeIndex::NONE,
        };
        let end = self.pos();
        self.arena.add_if_statement(
            start,
            end,
            IfStatementData {
                conditions: NodeList::new(conditions),
                then_block,
                else_branch,
            },
        )
    }

    fn lower_condition(&mut self, condition: &ConditionOutline) -> NodeIndex {
        match condition {
            ConditionOutline::Let(binding) => {
                let start = self.pos();
                self.emit("let ");
                let pattern = self.lower_pattern(&binding.pattern);
                let initializer = self.lower_initializer(binding.value.as_ref());
                let end = self.pos();
                self.arena.add_optional_binding(
                    start,
                    end,
                    OptionalBindingData {
                        pattern,
                        initializer,
                    },
                )
            }
            ConditionOutline::Expr(expr) => self.lower_expr(expr),
        }
    }

    fn lower_block(&mut self, statements: &[StatementOutline]) -> NodeIndex {
        let start = self.pos();
        self.emit("{");
        self.depth += 1;
        let mut lowered = Vec::with_capacity(statements.len());
        for statement in statements {
            self.newline();
            lowered.push(self.lower_statement(statement));
        }
        self.depth -= 1;
        if !statements.is_empty() {
            self.newline();
        }
        self.emit("}");
        let end = self.pos();
        self.arena.add_block(
            start,
            end,
            BlockData {
                statements: NodeList::new(lowered),
            },
        )
    }

    fn lower_expr(&mut self, expr: &ExprOutline) -> NodeIndex {
        match expr {
            ExprOutline::Ref(name) => {
                let (start, end) = self.emit_word(name);
                self.arena.add_identifier(
                    syntax_kind::REFERENCE_EXPRESSION,
                    start,
                    end,
                    IdentifierData { text: name.clone() },
                )
            }
            ExprOutline::Int(value) => {
                let text = value.to_string();
                let (start, end) = self.emit_word(&text);
                self.arena
                    .add_literal(syntax_kind::INTEGER_LITERAL, start, end, LiteralData { text })
            }
            ExprOutline::Str(value) => {
                let text = format!("{value:?}");
                let (start, end) = self.emit_word(&text);
                self.arena
                    .add_literal(syntax_kind::STRING_LITERAL, start, end, LiteralData { text })
            }
            ExprOutline::Call { callee, args } => {
                let start = self.pos();
                let callee = self.lower_expr(callee);
                self.emit("(");
                let mut arguments = Vec::with_capacity(args.len());
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.emit(", ");
                    }
                    arguments.push(self.lower_expr(arg));
                }
                self.emit(")");
                let end = self.pos();
                self.arena.add_call_expr(
                    start,
                    end,
                    CallExprData {
                        callee,
                        arguments: NodeList::new(arguments),
                    },
                )
            }
            ExprOutline::Binary { op, lhs, rhs } => {
                let start = self.pos();
                let left = self.lower_operand(lhs);
                self.emit(" ");
                self.emit(op);
                self.emit(" ");
                let right = self.lower_operand(rhs);
                let end = self.pos();
                self.arena.add_binary_expr(
                    start,
                    end,
                    BinaryExprData {
                        left,
                        operator: op.clone(),
                        right,
                    },
                )
            }
        }
    }

    /// Nested binary operands are parenthesized so the rendering stays unambiguous.
    fn lower_operand(&mut self, expr: &ExprOutline) -> NodeIndex {
        if matches!(expr, ExprOutline::Binary { .. }) {
            self.emit("(");
            let inner = self.lower_expr(expr);
            self.emit(")");
            inner
        } else {
            self.lower_expr(expr)
        }
    }
}
