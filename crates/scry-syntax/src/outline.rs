//! Serde model of a program outline.
//!
//! An outline is the nested, JSON-friendly description of a compilation unit
//! that front ends hand to [`lower_outline`](crate::lower_outline). It carries
//! structure only; source text and offsets are produced by lowering.
//!
//! ```json
//! {
//!   "file_name": "demo.scry",
//!   "statements": [
//!     { "let": [{ "pattern": "c", "value": { "int": 1 } }] },
//!     { "func": {
//!         "name": "f",
//!         "params": ["a", { "label": "_", "name": "b" }],
//!         "body": [
//!           { "if": {
//!               "conditions": [{ "let": { "pattern": "b", "value": { "ref": "b" } } }],
//!               "then": [{ "expr": { "call": { "callee": { "ref": "print" }, "args": [{ "ref": "b" }] } } }]
//!           } }
//!         ]
//!     } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Spelling of the wildcard in names and patterns.
pub const WILDCARD_TEXT: &str = "_";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default)]
    pub statements: Vec<StatementOutline>,
}

fn default_file_name() -> String {
    "main.scry".to_string()
}

impl Outline {
    pub fn new(file_name: impl Into<String>, statements: Vec<StatementOutline>) -> Self {
        Outline {
            file_name: file_name.into(),
            statements,
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Outline> {
        serde_json::from_str(json)
    }

    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Outline> {
        serde_json::from_value(value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementOutline {
    /// `let p1 = v1, p2 = v2`
    Let(Vec<BindingOutline>),
    Func(FunctionOutline),
    If(IfOutline),
    Expr(ExprOutline),
    Return(Option<ExprOutline>),
    /// A bare nested block, rendered `do { ... }`
    Do(Vec<StatementOutline>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BindingOutline {
    pub pattern: PatternOutline,
    #[serde(default)]
    pub value: Option<ExprOutline>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternOutline {
    /// An identifier, or the wildcard when spelled `_`
    Name(String),
    Tuple(Vec<PatternOutline>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionOutline {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParameterOutline>,
    #[serde(default)]
    pub body: Vec<StatementOutline>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterOutline {
    /// One slot: label and bound name are the same
    Name(String),
    /// Two slots: external label, then bound name
    Labeled { label: String, name: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IfOutline {
    #[serde(default)]
    pub conditions: Vec<ConditionOutline>,
    #[serde(default)]
    pub then: Vec<StatementOutline>,
    #[serde(default, rename = "else")]
    pub else_branch: Option<ElseOutline>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElseOutline {
    Block(Vec<StatementOutline>),
    If(Box<IfOutline>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOutline {
    /// `let pattern = value`; without a value the binding is the shorthand `let x`
    Let(BindingOutline),
    Expr(ExprOutline),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExprOutline {
    Ref(String),
    Int(i64),
    Str(String),
    Call {
        callee: Box<ExprOutline>,
        #[serde(default)]
        args: Vec<ExprOutline>,
    },
    Binary {
        op: String,
        lhs: Box<ExprOutline>,
        rhs: Box<ExprOutline>,
    },
}
