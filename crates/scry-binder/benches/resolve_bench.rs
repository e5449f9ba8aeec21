//! Name resolution benchmarks.
//!
//! Scopes are computed on demand, so resolution cost grows with nesting depth
//! and with the number of bindings visible at each reference.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rayon::prelude::*;
use scry_binder::{enclosing_scope, resolve_reference};
use scry_syntax::{Outline, SyntaxTree, lower_outline};
use serde_json::{Value, json};

/// `functions` top-level functions, each with `locals` body bindings and a
/// conditional binding that shadows its first parameter.
fn wide_program(functions: usize, locals: usize) -> Value {
    let mut statements = vec![json!({ "let": [{ "pattern": "shared", "value": { "int": 0 } }] })];
    for f in 0..functions {
        let mut body = Vec::new();
        for l in 0..locals {
            let previous = if l == 0 {
                "shared".to_string()
            } else {
                format!("v{}", l - 1)
            };
            body.push(json!({ "let": [{
                "pattern": format!("v{l}"),
                "value": { "binary": { "op": "+", "lhs": { "ref": previous }, "rhs": { "ref": "p" } } }
            }] }));
        }
        body.push(json!({ "if": {
            "conditions": [{ "let": { "pattern": "p", "value": { "ref": "p" } } }],
            "then": [{ "expr": { "call": {
                "callee": { "ref": "print" },
                "args": [{ "ref": "p" }, { "ref": "q" }, { "ref": "shared" }]
            } } }]
        } }));
        statements.push(json!({ "func": {
            "name": format!("f{f}"),
            "params": ["p", { "label": "with", "name": "q" }],
            "body": body
        } }));
    }
    json!({ "file_name": "bench.scry", "statements": statements })
}

/// A chain of `depth` nested functions, each referencing every outer parameter.
fn deep_program(depth: usize) -> Value {
    let mut body: Vec<Value> = vec![json!({ "expr": { "call": {
        "callee": { "ref": "use" },
        "args": (0..depth).map(|d| json!({ "ref": format!("p{d}") })).collect::<Vec<_>>()
    } } })];
    for d in (0..depth).rev() {
        body = vec![json!({ "func": {
            "name": format!("level{d}"),
            "params": [format!("p{d}")],
            "body": body
        } })];
    }
    json!({ "file_name": "deep.scry", "statements": body })
}

fn build(value: Value) -> SyntaxTree {
    lower_outline(&Outline::from_value(value).expect("benchmark outline is well-formed"))
}

fn bench_resolve_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_all");

    for (functions, locals) in [(10, 5), (50, 20), (200, 20)] {
        let tree = build(wide_program(functions, locals));
        let references = tree.references();
        let id = format!("{functions}x{locals}");
        group.throughput(Throughput::Elements(references.len() as u64));

        group.bench_with_input(BenchmarkId::new("sequential", &id), &references, |b, refs| {
            b.iter(|| {
                let resolved = refs
                    .iter()
                    .filter(|&&reference| resolve_reference(&tree.arena, reference).is_some())
                    .count();
                black_box(resolved)
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", &id), &references, |b, refs| {
            b.iter(|| {
                let resolved = refs
                    .par_iter()
                    .filter(|&&reference| resolve_reference(&tree.arena, reference).is_some())
                    .count();
                black_box(resolved)
            })
        });
    }

    group.finish();
}

fn bench_nesting_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("nesting_depth");

    for depth in [4, 16, 64] {
        let tree = build(deep_program(depth));
        let references = tree.references();

        group.bench_with_input(BenchmarkId::new("resolve", depth), &references, |b, refs| {
            b.iter(|| {
                for &reference in refs {
                    black_box(resolve_reference(&tree.arena, reference));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("visible_names", depth), &references, |b, refs| {
            b.iter(|| {
                for &reference in refs {
                    let scope = enclosing_scope(&tree.arena, reference);
                    let position = tree.arena.get(reference).map_or(0, |node| node.pos);
                    black_box(scope.visible_names(position));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve_all, bench_nesting_depth);
criterion_main!(benches);
