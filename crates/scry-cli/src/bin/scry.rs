use anyhow::Result;
use clap::Parser;

use scry_cli::args::{CliArgs, ColorChoice, OutputFormat};
use scry_cli::driver::{self, ResolveOptions};
use scry_cli::reporter::Reporter;

const EXIT_UNRESOLVED: i32 = 1;

fn main() -> Result<()> {
    // Installs a subscriber only when SCRY_LOG or RUST_LOG is set.
    scry_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let options = ResolveOptions::from(&args);

    let color = args.color.enabled();
    if args.color == ColorChoice::Always {
        colored::control::set_override(true);
    }
    let reporter = Reporter::new(color && args.format == OutputFormat::Text);

    let (tree, report) = driver::run(&args.input, &options)?;

    if args.show_source && args.format == OutputFormat::Text {
        print!("{}", reporter.render_source(&tree));
        println!();
    }

    match args.format {
        OutputFormat::Text => print!("{}", reporter.render_text(&report)),
        OutputFormat::Json => print!("{}", reporter.render_json(&report)?),
    }

    if args.deny_unresolved && !report.all_resolved() {
        std::process::exit(EXIT_UNRESOLVED);
    }
    Ok(())
}
