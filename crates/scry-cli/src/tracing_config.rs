//! Tracing configuration for inspecting scope walks and lookups.
//!
//! Three output formats, selected by `SCRY_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented span hierarchy via `tracing-tree`, handy for following
//!   one reference through nested `declarations_before` calls
//! - `json`: one JSON object per span/event
//!
//! ```bash
//! SCRY_LOG=debug SCRY_LOG_FORMAT=tree scry program.json
//! SCRY_LOG="scry_binder::scope=trace" scry program.json
//! ```
//!
//! A bare level in `SCRY_LOG` applies to the scry crates only, so `debug`
//! shows scope walks and lookups without rayon's internals. Directives that
//! name a target are used as written. Nothing is installed unless `SCRY_LOG`
//! (or `RUST_LOG`) is set.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Targets a bare `SCRY_LOG` level is scoped to.
pub const SCRY_TARGETS: &[&str] = &["scry_syntax", "scry_binder", "scry_cli"];

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a `SCRY_LOG_FORMAT` value. Unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("SCRY_LOG_FORMAT").unwrap_or_default())
    }
}

/// Expand a bare level (`debug`, `trace`, ...) into one directive per scry
/// crate. Anything else is returned unchanged.
pub fn scry_directives(value: &str) -> String {
    let value = value.trim();
    if value.parse::<LevelFilter>().is_err() {
        return value.to_string();
    }
    SCRY_TARGETS
        .iter()
        .map(|target| format!("{target}={value}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// `SCRY_LOG` takes precedence over `RUST_LOG`, which is used as-is.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("SCRY_LOG") {
        EnvFilter::builder().parse_lossy(scry_directives(&val))
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber. Output goes to stderr so it never
/// mixes with the report on stdout.
pub fn init_tracing() {
    let has_scry_log = std::env::var("SCRY_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_scry_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
