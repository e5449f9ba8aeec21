//! Load an outline, lower it, and resolve every reference in it.

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use scry_binder::{Declaration, DeclarationKind, ScopeKind, enclosing_scope, resolve_reference};
use scry_syntax::{NodeIndex, Outline, SyntaxTree, lower_outline};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{Level, debug, info, span};

use crate::args::CliArgs;

/// Driver-facing knobs, separate from how the report is printed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Drop resolved references from the report. Counts are unaffected.
    pub unresolved_only: bool,
    /// Size of a dedicated rayon pool; `None` uses the global pool.
    pub threads: Option<usize>,
}

impl From<&CliArgs> for ResolveOptions {
    fn from(args: &CliArgs) -> Self {
        ResolveOptions {
            unresolved_only: args.unresolved_only,
            threads: args.threads,
        }
    }
}

/// 1-based line and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    fn of(tree: &SyntaxTree, node: NodeIndex) -> Self {
        let position = tree.position_of(node);
        Location {
            line: position.line + 1,
            column: position.column + 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeclarationInfo {
    pub kind: DeclarationKind,
    pub node: u32,
    pub names: Vec<String>,
    pub location: Location,
    pub text: String,
}

impl DeclarationInfo {
    fn new(tree: &SyntaxTree, decl: &Declaration<'_>) -> Self {
        DeclarationInfo {
            kind: decl.kind(),
            node: decl.node().0,
            names: decl.names().iter().map(|name| name.to_string()).collect(),
            location: Location::of(tree, decl.node()),
            text: tree.text_of(decl.node()).to_string(),
        }
    }
}

/// One reference and what it bound to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedReference {
    pub name: String,
    pub node: u32,
    pub location: Location,
    pub scope: ScopeKind,
    pub declaration: Option<DeclarationInfo>,
    /// Names in scope at the reference, filled in only when it is unresolved.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub visible: Vec<String>,
}

impl ResolvedReference {
    pub fn is_resolved(&self) -> bool {
        self.declaration.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    pub file_name: String,
    /// References seen, before any filtering.
    pub total: usize,
    pub unresolved: usize,
    pub references: Vec<ResolvedReference>,
}

impl ResolutionReport {
    pub fn all_resolved(&self) -> bool {
        self.unresolved == 0
    }
}

/// Read and deserialize an outline. `-` reads standard input.
pub fn load_outline(input: &Path) -> Result<Outline> {
    let (source, label) = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read outline from stdin")?;
        (buf, "<stdin>".to_string())
    } else {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        (text, input.display().to_string())
    };

    parse_outline(&source).with_context(|| format!("invalid outline in {label}"))
}

/// Deserialize outline JSON, rejecting empty input with a clearer message
/// than serde's end-of-input error.
pub fn parse_outline(source: &str) -> Result<Outline> {
    if source.trim().is_empty() {
        bail!("outline is empty");
    }
    Ok(Outline::from_json(source)?)
}

/// Resolve every reference in `tree`, in source order.
pub fn resolve_tree(tree: &SyntaxTree, options: &ResolveOptions) -> Result<ResolutionReport> {
    let _span = span!(Level::INFO, "resolve_tree", file = tree.file_name()).entered();

    let references = tree.references();
    let resolve_all = || -> Vec<ResolvedReference> {
        references
            .par_iter()
            .map(|&reference| resolve_one(tree, reference))
            .collect()
    };

    let resolved = match options.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("failed to build resolver thread pool")?
            .install(resolve_all),
        None => resolve_all(),
    };

    let total = resolved.len();
    let unresolved = resolved.iter().filter(|r| !r.is_resolved()).count();
    info!(total, unresolved, "resolved references");

    let references = if options.unresolved_only {
        resolved.into_iter().filter(|r| !r.is_resolved()).collect()
    } else {
        resolved
    };

    Ok(ResolutionReport {
        file_name: tree.file_name().to_string(),
        total,
        unresolved,
        references,
    })
}

fn resolve_one(tree: &SyntaxTree, reference: NodeIndex) -> ResolvedReference {
    let name = tree.arena.identifier_text(reference).unwrap_or_default();
    let scope = enclosing_scope(&tree.arena, reference);
    let declaration = resolve_reference(&tree.arena, reference);
    debug!(name, node = reference.0, resolved = declaration.is_some());

    let visible = match declaration {
        Some(_) => Vec::new(),
        None => {
            let position = tree.arena.get(reference).map_or(0, |node| node.pos);
            scope
                .visible_names(position)
                .into_iter()
                .map(str::to_string)
                .collect()
        }
    };

    ResolvedReference {
        name: name.to_string(),
        node: reference.0,
        location: Location::of(tree, reference),
        scope: scope.kind(),
        declaration: declaration.map(|decl| DeclarationInfo::new(tree, &decl)),
        visible,
    }
}

/// Load, lower, and resolve in one step.
pub fn run(input: &Path, options: &ResolveOptions) -> Result<(SyntaxTree, ResolutionReport)> {
    let outline = load_outline(input)?;
    let tree = lower_outline(&outline);
    let report = resolve_tree(&tree, options)?;
    Ok((tree, report))
}
