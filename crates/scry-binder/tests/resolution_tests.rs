//! Reference resolution tests.
//!
//! Each test lowers a small outline and checks which declaration a reference
//! binds to. References are located by name and occurrence index.

use scry_binder::{Declaration, DeclarationKind, ScopeKind, enclosing_scope, resolve_reference};
use scry_syntax::{NodeIndex, Outline, SyntaxTree, lower_outline, syntax_kind};
use serde_json::json;

fn lower(value: serde_json::Value) -> SyntaxTree {
    lower_outline(&Outline::from_value(value).expect("outline should deserialize"))
}

fn nth_reference(tree: &SyntaxTree, name: &str, n: usize) -> NodeIndex {
    tree.arena
        .iter_kind(syntax_kind::REFERENCE_EXPRESSION)
        .filter(|&idx| tree.arena.identifier_text(idx) == Some(name))
        .nth(n)
        .unwrap_or_else(|| panic!("no reference #{n} to `{name}` in:\n{}", tree.text))
}

fn resolve<'a>(tree: &'a SyntaxTree, name: &str, n: usize) -> Option<Declaration<'a>> {
    resolve_reference(&tree.arena, nth_reference(tree, name, n))
}

/// Rendered text of the node a reference resolves to.
fn resolved_text<'a>(tree: &'a SyntaxTree, name: &str, n: usize) -> Option<&'a str> {
    resolve(tree, name, n).map(|decl| tree.text_of(decl.node()))
}

fn call(callee: &str, args: &[&str]) -> serde_json::Value {
    let args: Vec<_> = args.iter().map(|arg| json!({ "ref": arg })).collect();
    json!({ "expr": { "call": { "callee": { "ref": callee }, "args": args } } })
}

fn let_int(pattern: serde_json::Value, value: i64) -> serde_json::Value {
    json!({ "let": [{ "pattern": pattern, "value": { "int": value } }] })
}

/// let c = 1
/// func f(a, b) {
///     if let b = b {
///         print(b, c)
///     }
///     print(a, b)
/// }
/// func g() {
///     print(d)
/// }
fn scenario_tree() -> SyntaxTree {
    lower(json!({
        "statements": [
            let_int(json!("c"), 1),
            { "func": {
                "name": "f",
                "params": ["a", "b"],
                "body": [
                    { "if": {
                        "conditions": [{ "let": { "pattern": "b", "value": { "ref": "b" } } }],
                        "then": [call("print", &["b", "c"])]
                    } },
                    call("print", &["a", "b"])
                ]
            } },
            { "func": { "name": "g", "params": [], "body": [call("print", &["d"])] } }
        ]
    }))
}

// =============================================================================
// Core scenarios
// =============================================================================

#[test]
fn conditional_binding_shadows_parameter_inside_its_body() {
    let tree = scenario_tree();

    let b = resolve(&tree, "b", 1).expect("b resolves inside the conditional body");
    assert_eq!(b.kind(), DeclarationKind::OptionalBinding);
    assert_eq!(tree.text_of(b.node()), "let b = b");

    let c = resolve(&tree, "c", 0).expect("c resolves to the top-level binding");
    assert_eq!(c.kind(), DeclarationKind::Variable);
    assert_eq!(tree.text_of(c.node()), "let c = 1");
}

#[test]
fn conditional_initializer_sees_the_parameter() {
    let tree = scenario_tree();
    let b = resolve(&tree, "b", 0).unwrap();
    assert_eq!(b.kind(), DeclarationKind::Parameter);
}

#[test]
fn conditional_binding_does_not_leak_out_of_its_block() {
    let tree = scenario_tree();

    let a = resolve(&tree, "a", 0).unwrap();
    assert_eq!(a.kind(), DeclarationKind::Parameter);
    assert_eq!(a.names(), &["a"]);

    let b = resolve(&tree, "b", 2).unwrap();
    assert_eq!(b.kind(), DeclarationKind::Parameter);
    assert_eq!(b.names(), &["b"]);
}

#[test]
fn undeclared_names_are_unresolved() {
    let tree = scenario_tree();
    assert_eq!(resolve(&tree, "d", 0), None);
    // Builtins are not declared anywhere in the unit.
    for n in 0..3 {
        assert_eq!(resolve(&tree, "print", n), None);
    }
}

#[test]
fn duplicate_top_level_bindings_resolve_to_the_earliest() {
    let tree = lower(json!({
        "statements": [
            let_int(json!("x"), 1),
            call("use", &["x"]),
            let_int(json!("x"), 2),
            call("use", &["x"])
        ]
    }));

    assert_eq!(resolved_text(&tree, "x", 0), Some("let x = 1"));
    // Both bindings are visible here; the earliest match wins.
    assert_eq!(resolved_text(&tree, "x", 1), Some("let x = 1"));
}

// =============================================================================
// Position ordering
// =============================================================================

#[test]
fn references_before_a_binding_are_unresolved() {
    let tree = lower(json!({
        "statements": [
            call("use", &["y"]),
            let_int(json!("y"), 1),
            call("use", &["y"])
        ]
    }));
    assert_eq!(resolved_text(&tree, "y", 0), None);
    assert_eq!(resolved_text(&tree, "y", 1), Some("let y = 1"));
}

#[test]
fn function_body_locals_are_visible_only_after_their_binding() {
    let tree = lower(json!({
        "statements": [{ "func": {
            "name": "f",
            "body": [
                call("use", &["t"]),
                let_int(json!("t"), 1),
                call("use", &["t"])
            ]
        } }]
    }));
    assert_eq!(resolved_text(&tree, "t", 0), None);
    assert_eq!(resolved_text(&tree, "t", 1), Some("let t = 1"));
}

#[test]
fn functions_do_not_see_later_top_level_bindings() {
    let tree = lower(json!({
        "statements": [
            { "func": { "name": "h", "body": [call("use", &["late"])] } },
            let_int(json!("late"), 1),
            call("use", &["late"])
        ]
    }));
    assert_eq!(resolved_text(&tree, "late", 0), None);
    assert_eq!(resolved_text(&tree, "late", 1), Some("let late = 1"));
}

// =============================================================================
// Nesting
// =============================================================================

#[test]
fn nested_functions_see_enclosing_parameters() {
    let tree = lower(json!({
        "statements": [{ "func": {
            "name": "outer",
            "params": ["p"],
            "body": [{ "func": {
                "name": "inner",
                "params": ["q"],
                "body": [call("use", &["p", "q"])]
            } }]
        } }]
    }));

    assert_eq!(resolved_text(&tree, "p", 0), Some("p"));
    assert_eq!(resolved_text(&tree, "q", 0), Some("q"));
    let scope = enclosing_scope(&tree.arena, nth_reference(&tree, "p", 0));
    assert_eq!(scope.kind(), ScopeKind::Function);
    assert_eq!(scope.parent().map(|s| s.kind()), Some(ScopeKind::Function));
}

#[test]
fn else_branches_bind_their_own_locals_but_not_conditional_bindings() {
    let tree = lower(json!({
        "statements": [{ "if": {
            "conditions": [{ "let": { "pattern": "v", "value": { "ref": "m" } } }],
            "then": [call("use", &["v"])],
            "else": [let_int(json!("e"), 1), call("use", &["e", "v"])]
        } }]
    }));

    assert_eq!(resolved_text(&tree, "v", 0), Some("let v = m"));
    assert_eq!(resolved_text(&tree, "e", 0), Some("let e = 1"));
    assert_eq!(resolved_text(&tree, "v", 1), None);
}

#[test]
fn else_if_chains_get_their_own_conditional_scope() {
    let tree = lower(json!({
        "statements": [{ "if": {
            "conditions": [{ "let": { "pattern": "v", "value": { "ref": "m" } } }],
            "then": [],
            "else": {
                "conditions": [{ "let": { "pattern": "w", "value": { "ref": "v" } } }],
                "then": [call("use", &["w", "v"])]
            }
        } }]
    }));

    // `v` in the else-if condition and body is outside the first then-block.
    assert_eq!(resolved_text(&tree, "v", 0), None);
    assert_eq!(resolved_text(&tree, "v", 1), None);
    assert_eq!(resolved_text(&tree, "w", 0), Some("let w = v"));
}

#[test]
fn do_block_locals_stay_inside_the_block() {
    let tree = lower(json!({
        "statements": [
            { "do": [let_int(json!("t"), 1), call("use", &["t"])] },
            call("use", &["t"])
        ]
    }));
    assert_eq!(resolved_text(&tree, "t", 0), Some("let t = 1"));
    assert_eq!(resolved_text(&tree, "t", 1), None);
}

#[test]
fn shorthand_optional_binding_resolves() {
    let tree = lower(json!({
        "statements": [
            let_int(json!("v"), 0),
            { "if": {
                "conditions": [{ "let": { "pattern": "v" } }],
                "then": [call("use", &["v"])]
            } }
        ]
    }));
    let v = resolve(&tree, "v", 0).unwrap();
    assert_eq!(v.kind(), DeclarationKind::OptionalBinding);
}

// =============================================================================
// Binding forms
// =============================================================================

#[test]
fn tuple_bindings_resolve_every_element() {
    let tree = lower(json!({
        "statements": [
            { "let": [{ "pattern": ["m", ["n", "_"]], "value": { "ref": "p" } }] },
            call("use", &["m", "n", "_"])
        ]
    }));
    assert_eq!(resolved_text(&tree, "m", 0), Some("let (m, (n, _)) = p"));
    assert_eq!(resolved_text(&tree, "n", 0), Some("let (m, (n, _)) = p"));
    assert_eq!(resolved_text(&tree, "_", 0), None);
}

#[test]
fn labeled_parameters_bind_the_internal_name_only() {
    let tree = lower(json!({
        "statements": [{ "func": {
            "name": "walk",
            "params": [{ "label": "from", "name": "start" }],
            "body": [call("use", &["start", "from"])]
        } }]
    }));
    assert_eq!(resolved_text(&tree, "start", 0), Some("from start"));
    assert_eq!(resolved_text(&tree, "from", 0), None);
}

#[test]
fn parameter_fully_rebinding_an_outer_binding_shadows_it() {
    let tree = lower(json!({
        "statements": [
            let_int(json!("x"), 1),
            { "func": { "name": "f", "params": ["x"], "body": [call("use", &["x"])] } }
        ]
    }));
    let x = resolve(&tree, "x", 0).unwrap();
    assert_eq!(x.kind(), DeclarationKind::Parameter);
}

#[test]
fn partially_rebound_outer_binding_stays_visible_and_wins() {
    // The tuple binds {x, y}; the parameter only rebinds {x}, so the tuple is
    // not shadowed and, being earlier, is what `x` resolves to.
    let tree = lower(json!({
        "statements": [
            { "let": [{ "pattern": ["x", "y"], "value": { "ref": "pair" } }] },
            { "func": { "name": "f", "params": ["x"], "body": [call("use", &["x", "y"])] } }
        ]
    }));
    assert_eq!(resolved_text(&tree, "x", 0), Some("let (x, y) = pair"));
    assert_eq!(resolved_text(&tree, "y", 0), Some("let (x, y) = pair"));
}

#[test]
fn body_local_reusing_a_parameter_name_resolves_to_the_parameter() {
    let tree = lower(json!({
        "statements": [{ "func": {
            "name": "f",
            "params": ["a"],
            "body": [let_int(json!("a"), 2), call("use", &["a"])]
        } }]
    }));
    let a = resolve(&tree, "a", 0).unwrap();
    assert_eq!(a.kind(), DeclarationKind::Parameter);
}

#[test]
fn non_reference_nodes_resolve_to_nothing() {
    let tree = scenario_tree();
    let function = tree
        .arena
        .iter_kind(syntax_kind::FUNCTION_DECLARATION)
        .next()
        .unwrap();
    assert_eq!(resolve_reference(&tree.arena, function), None);
    assert_eq!(resolve_reference(&tree.arena, tree.root), None);
    assert_eq!(resolve_reference(&tree.arena, NodeIndex::NONE), None);
}

#[test]
fn scope_resolve_matches_resolve_reference() {
    let tree = scenario_tree();
    for reference in tree.references() {
        let via_scope = enclosing_scope(&tree.arena, reference).resolve(reference);
        assert_eq!(via_scope, resolve_reference(&tree.arena, reference));
    }
}
