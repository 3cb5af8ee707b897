//! # benchreport
//!
//! A CLI tool for rendering benchmark report documents in the terminal.
//!
//! ## Overview
//!
//! benchreport is built on top of benchreportlib. It loads a JSON report
//! document, formats every classed cell through the built-in (and any
//! user-supplied) formatter classes, and prints titled tables to stdout.
//!
//! ## Usage
//!
//! ```bash
//! # Render a report
//! benchreport report.json
//!
//! # Read the report from stdin
//! generate-report | benchreport -
//!
//! # Choose a table style
//! benchreport report.json --table-style compact
//!
//! # Add formatter classes and a renderer config
//! benchreport report.json --classes classes.json --config renderer.json
//!
//! # Enable debug logging
//! RUST_LOG=debug benchreport report.json
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::debug;

use benchreportlib::{
    ClassDefinitions, ColorChoice, ConsoleRenderer, Document, FormatterRegistry,
    FormatterResolver, PlainTableDrawer, RenderConfig, TableStyle, Theme,
};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("benchreport")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render benchmark report documents as terminal tables")
        .arg(
            Arg::new("report")
                .required(true)
                .help("Report document (JSON), or - to read from stdin"),
        )
        .arg(
            Arg::new("table-style")
                .short('s')
                .long("table-style")
                .value_parser(TableStyle::ALL.map(|s| s.as_str()))
                .help("Table style (overrides the config file)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Renderer config file (JSON)"),
        )
        .arg(
            Arg::new("classes")
                .long("classes")
                .value_name("FILE")
                .action(ArgAction::Append)
                .help("Extra formatter class definitions (can be specified multiple times)"),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_parser(["auto", "always", "never"])
                .default_value("auto")
                .help("When to use terminal styling"),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .action(ArgAction::SetTrue)
                .help("Draw tables as plain aligned columns (table styles are ignored)"),
        )
}

/// Resolve the render config: config file first, then the --table-style flag
fn build_config(matches: &ArgMatches) -> anyhow::Result<RenderConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => RenderConfig::from_path(path)
            .with_context(|| format!("loading renderer config '{}'", path))?,
        None => RenderConfig::default(),
    };

    if let Some(style) = matches.get_one::<String>("table-style") {
        config = config.table_style(style.parse()?);
    }

    Ok(config)
}

/// Build the resolver from the built-in classes plus any --classes files
fn build_resolver(matches: &ArgMatches) -> anyhow::Result<FormatterResolver> {
    let mut classes = ClassDefinitions::builtin()?;

    if let Some(paths) = matches.get_many::<String>("classes") {
        for path in paths {
            let extra = ClassDefinitions::from_path(path)
                .with_context(|| format!("loading formatter classes '{}'", path))?;
            debug!("loaded {} classes from {}", extra.len(), path);
            classes = classes.merge(extra);
        }
    }

    Ok(FormatterResolver::new(
        FormatterRegistry::with_builtins(),
        classes,
    )?)
}

/// Load the report from a path or stdin
fn load_document(source: &str) -> anyhow::Result<Document> {
    let document = if source == "-" {
        Document::from_reader(io::stdin().lock()).context("reading report from stdin")?
    } else {
        Document::from_path(source).with_context(|| format!("loading report '{}'", source))?
    };
    Ok(document)
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    // Validate configuration before producing any output.
    let config = build_config(matches)?;
    let resolver = build_resolver(matches)?;

    let source = matches
        .get_one::<String>("report")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let document = load_document(source)?;

    let color: ColorChoice = matches
        .get_one::<String>("color")
        .map(|s| s.parse::<ColorChoice>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();

    let stdout = io::stdout().lock();
    let mut renderer = ConsoleRenderer::new(stdout, resolver).theme(Theme::for_choice(color));
    if matches.get_flag("plain") {
        renderer = renderer.drawer(PlainTableDrawer);
    }

    renderer.render(&document, &config)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = build_command().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        build_command()
            .try_get_matches_from(std::iter::once("benchreport").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_config_defaults() {
        let config = build_config(&matches(&["report.json"])).unwrap();
        assert_eq!(config.table_style, TableStyle::Default);
    }

    #[test]
    fn test_table_style_flag() {
        let config = build_config(&matches(&["report.json", "-s", "borderless"])).unwrap();
        assert_eq!(config.table_style, TableStyle::Borderless);
    }

    #[test]
    fn test_table_style_flag_rejects_unknown() {
        let result = build_command().try_get_matches_from(["benchreport", "r.json", "-s", "fancy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolver_has_builtin_classes() {
        let resolver = build_resolver(&matches(&["report.json"])).unwrap();
        assert!(resolver.classes().get("mem").is_some());
    }
}
