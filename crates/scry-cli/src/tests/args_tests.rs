use clap::Parser;
use std::path::PathBuf;

use super::args::{CliArgs, ColorChoice, OutputFormat};
use super::driver::ResolveOptions;

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["scry", "program.json"]).expect("default args should parse");

    assert_eq!(args.input, PathBuf::from("program.json"));
    assert_eq!(args.format, OutputFormat::Text);
    assert_eq!(args.color, ColorChoice::Auto);
    assert!(!args.show_source);
    assert!(!args.unresolved_only);
    assert!(!args.deny_unresolved);
    assert_eq!(args.threads, None);
    assert!(!args.reads_stdin());
}

#[test]
fn parses_all_flags() {
    let args = CliArgs::try_parse_from([
        "scry",
        "--format",
        "json",
        "--color",
        "never",
        "--show-source",
        "--unresolved-only",
        "--deny-unresolved",
        "-j",
        "4",
        "-",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.color, ColorChoice::Never);
    assert!(args.show_source);
    assert!(args.unresolved_only);
    assert!(args.deny_unresolved);
    assert_eq!(args.threads, Some(4));
    assert!(args.reads_stdin());
}

#[test]
fn input_is_required() {
    assert!(CliArgs::try_parse_from(["scry"]).is_err());
}

#[test]
fn rejects_unknown_format() {
    assert!(CliArgs::try_parse_from(["scry", "--format", "yaml", "a.json"]).is_err());
}

#[test]
fn explicit_color_choices_ignore_the_terminal() {
    assert!(ColorChoice::Always.enabled());
    assert!(!ColorChoice::Never.enabled());
}

#[test]
fn resolve_options_follow_args() {
    let args = CliArgs::try_parse_from(["scry", "--unresolved-only", "--threads", "2", "a.json"])
        .expect("args should parse");
    let options = ResolveOptions::from(&args);
    assert!(options.unresolved_only);
    assert_eq!(options.threads, Some(2));

    let defaults = ResolveOptions::default();
    assert!(!defaults.unresolved_only);
    assert_eq!(defaults.threads, None);
}
