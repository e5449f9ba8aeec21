use anyhow::{Context, Result};
use colored::Colorize;
use scry_binder::DeclarationKind;
use scry_syntax::SyntaxTree;

use crate::driver::{ResolutionReport, ResolvedReference};

/// Renders resolution reports for humans or tools.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// One line per reference, then a summary line. Every line ends with `\n`.
    ///
    /// ```text
    /// main.scry:4:15 b -> optional binding `let b = b` at 3:8 [conditional binding]
    /// main.scry:9:15 d -> unresolved [function] (in scope: c, a)
    /// ```
    pub fn render_text(&self, report: &ResolutionReport) -> String {
        let mut out = String::new();
        for reference in &report.references {
            out.push_str(&self.format_reference(&report.file_name, reference));
            out.push('\n');
        }
        out.push_str(&self.format_summary(report));
        out.push('\n');
        out
    }

    pub fn render_json(&self, report: &ResolutionReport) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(report).context("failed to serialize resolution report")?;
        json.push('\n');
        Ok(json)
    }

    /// The rendered source with right-aligned line numbers.
    ///
    /// ```text
    ///     1   let c = 1
    ///     2   func f(a, b) {
    /// ```
    pub fn render_source(&self, tree: &SyntaxTree) -> String {
        let mut out = String::new();
        for (index, line) in tree.text.lines().enumerate() {
            let number = format!("{:>5}", index + 1);
            let number = if self.color {
                number.dimmed().to_string()
            } else {
                number
            };
            out.push_str(&format!("{number}   {line}\n"));
        }
        out
    }

    fn format_reference(&self, file_name: &str, reference: &ResolvedReference) -> String {
        let location = format!(
            "{}:{}:{}",
            file_name, reference.location.line, reference.location.column
        );
        let scope = format!("[{}]", reference.scope);

        let target = match &reference.declaration {
            Some(decl) => {
                let text = format!("`{}`", decl.text);
                format!(
                    "{} {} at {}:{}",
                    self.format_kind(decl.kind),
                    if self.color {
                        text.cyan().to_string()
                    } else {
                        text
                    },
                    decl.location.line,
                    decl.location.column
                )
            }
            None => {
                if self.color {
                    "unresolved".red().bold().to_string()
                } else {
                    "unresolved".to_string()
                }
            }
        };

        let mut line = if self.color {
            format!(
                "{} {} -> {} {}",
                location.dimmed(),
                reference.name.bold(),
                target,
                scope.dimmed()
            )
        } else {
            format!("{location} {} -> {target} {scope}", reference.name)
        };
        if !reference.visible.is_empty() {
            let in_scope = format!("(in scope: {})", reference.visible.join(", "));
            line.push(' ');
            if self.color {
                line.push_str(&in_scope.dimmed().to_string());
            } else {
                line.push_str(&in_scope);
            }
        }
        line
    }

    fn format_kind(&self, kind: DeclarationKind) -> String {
        let label = kind.as_str();
        if !self.color {
            return label.to_string();
        }
        match kind {
            DeclarationKind::Variable => label.green().to_string(),
            DeclarationKind::Parameter => label.yellow().to_string(),
            DeclarationKind::OptionalBinding => label.magenta().to_string(),
        }
    }

    fn format_summary(&self, report: &ResolutionReport) -> String {
        let noun = if report.total == 1 {
            "reference"
        } else {
            "references"
        };
        let summary = format!(
            "{} {noun}, {} unresolved",
            report.total, report.unresolved
        );
        if !self.color {
            return summary;
        }
        if report.all_resolved() {
            summary.green().to_string()
        } else {
            summary.yellow().to_string()
        }
    }
}
