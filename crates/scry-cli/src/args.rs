use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// CLI arguments for the scry binary.
#[derive(Parser, Debug)]
#[command(
    name = "scry",
    version,
    about = "Resolve every identifier reference in a program outline to its declaration"
)]
pub struct CliArgs {
    /// Outline JSON file to resolve, or `-` to read standard input.
    pub input: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to color text output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print the rendered source with line numbers before the report.
    #[arg(long)]
    pub show_source: bool,

    /// Only report references that did not resolve.
    #[arg(long)]
    pub unresolved_only: bool,

    /// Exit with status 1 if any reference is unresolved.
    #[arg(long)]
    pub deny_unresolved: bool,

    /// Worker threads for resolution (0 lets rayon decide).
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

impl CliArgs {
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One line per reference.
    Text,
    /// A single JSON document.
    Json,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}
