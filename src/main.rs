use clap::{ArgAction, Parser, Subcommand};
use design_patterns::adapter::{LegacyPrinter, PrinterAdapter};
use design_patterns::builder::HouseStyle;
use design_patterns::config::DemoConfig;
use design_patterns::demo::{
    capture_adapter, run_abstract_factory, run_adapter, run_builder, run_factory_method,
    AdapterOutcome, BuiltHouse, FactoryOutcome, TransportOutcome,
};
use design_patterns::logging::init_logging;
use design_patterns::report::{tally, to_json, ReportFormatter};
use design_patterns::Result;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "patterns")]
#[command(version)]
#[command(about = "Factory, abstract factory, builder and adapter demonstrations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// TOML file with demo inputs
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Resolve abstract-factory selectors into transport/store pairs
    Factory {
        #[arg(value_name = "SELECTOR")]
        selectors: Vec<String>,
    },
    /// Create single transports through the factory method
    Transport {
        #[arg(value_name = "KIND")]
        kinds: Vec<String>,
    },
    /// Build a house through the director
    Builder {
        #[arg(long, value_enum)]
        style: Option<HouseStyle>,
        /// Rebind the director to this style and build a second house
        #[arg(long, value_enum)]
        rebind: Option<HouseStyle>,
    },
    /// Print a message through the adapted legacy printer
    Adapter { message: Option<String> },
    /// Run every demonstration
    All,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Unknown selectors and kinds are part of the output, not failures.
fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let config = DemoConfig::load_or_default(cli.config.as_deref())?;
    if !config.use_colors() {
        colored::control::set_override(false);
    }

    match cli.command.unwrap_or(Command::All) {
        Command::Factory { selectors } => {
            let selectors = or_configured(selectors, &config.factory.selectors);
            let outcomes = run_abstract_factory(&selectors);
            if cli.json {
                writeln!(out, "{}", to_json(&outcomes)?)?;
            } else {
                write!(out, "{}", ReportFormatter::format_factories(&outcomes))?;
            }
        }
        Command::Transport { kinds } => {
            let kinds = or_configured(kinds, &config.transport.kinds);
            let outcomes = run_factory_method(&kinds);
            if cli.json {
                writeln!(out, "{}", to_json(&outcomes)?)?;
            } else {
                write!(out, "{}", ReportFormatter::format_transports(&outcomes))?;
            }
        }
        Command::Builder { style, rebind } => {
            let style = style.unwrap_or(config.builder.style);
            let houses = run_builder(style, rebind.or(config.builder.rebind));
            if cli.json {
                writeln!(out, "{}", to_json(&houses)?)?;
            } else {
                write!(out, "{}", ReportFormatter::format_houses(&houses))?;
            }
        }
        Command::Adapter { message } => {
            let message = message.unwrap_or(config.adapter.message);
            if cli.json {
                writeln!(out, "{}", to_json(&capture_adapter(&message)?)?)?;
            } else {
                write!(out, "{}", ReportFormatter::heading("Adapter"))?;
                run_adapter(&mut PrinterAdapter::new(LegacyPrinter::new(&mut *out)), &message)?;
            }
        }
        Command::All => run_all(&config, cli.json, out)?,
    }
    Ok(())
}

#[derive(Serialize)]
struct FullReport<'a> {
    factories: &'a [FactoryOutcome],
    transports: &'a [TransportOutcome],
    houses: &'a [BuiltHouse],
    adapter: &'a AdapterOutcome,
}

fn run_all(config: &DemoConfig, as_json: bool, out: &mut dyn Write) -> Result<()> {
    let factories = run_abstract_factory(&config.factory.selectors);
    let transports = run_factory_method(&config.transport.kinds);
    let houses = run_builder(config.builder.style, config.builder.rebind);

    if as_json {
        let adapter = capture_adapter(&config.adapter.message)?;
        let report = FullReport {
            factories: &factories,
            transports: &transports,
            houses: &houses,
            adapter: &adapter,
        };
        writeln!(out, "{}", to_json(&report)?)?;
        return Ok(());
    }

    writeln!(out, "{}", ReportFormatter::format_transports(&transports))?;
    writeln!(out, "{}", ReportFormatter::format_factories(&factories))?;
    writeln!(out, "{}", ReportFormatter::format_houses(&houses))?;
    write!(out, "{}", ReportFormatter::heading("Adapter"))?;
    run_adapter(
        &mut PrinterAdapter::new(LegacyPrinter::new(&mut *out)),
        &config.adapter.message,
    )?;
    writeln!(out)?;

    let (found, missing) = tally(&factories, &transports);
    writeln!(out, "{}", ReportFormatter::format_summary(found, missing))?;
    Ok(())
}

/// Command-line values win; with none given, use the configured list.
fn or_configured(given: Vec<String>, configured: &[String]) -> Vec<String> {
    if given.is_empty() {
        configured.to_vec()
    } else {
        given
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_patterns::PatternError;
    use serde_json::Value;
    use tempfile::NamedTempFile;

    fn run_args(args: &[&str]) -> (Result<()>, String) {
        colored::control::set_override(false);
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut out = Vec::new();
        let result = run(cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn run_json(args: &[&str]) -> Value {
        let (result, output) = run_args(args);
        assert!(result.is_ok(), "{result:?}");
        serde_json::from_str(&output).unwrap()
    }

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_cli_defaults_to_all() {
        let cli = Cli::try_parse_from(["patterns"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_factory_selectors() {
        let args = ["patterns", "factory", "coldWithTruck", "frozenWithRocket"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Command::Factory { selectors }) => {
                assert_eq!(selectors, vec!["coldWithTruck", "frozenWithRocket"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_builder_styles() {
        let args = ["patterns", "-vv", "builder", "--style", "stone", "--rebind", "apartment"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Builder { style, rebind }) => {
                assert_eq!(style, Some(HouseStyle::Stone));
                assert_eq!(rebind, Some(HouseStyle::Apartment));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_style() {
        assert!(Cli::try_parse_from(["patterns", "builder", "--style", "castle"]).is_err());
    }

    #[test]
    fn test_or_configured() {
        let configured = vec!["a".to_string()];
        assert_eq!(or_configured(Vec::new(), &configured), configured);
        assert_eq!(or_configured(vec!["b".to_string()], &configured), vec!["b".to_string()]);
    }

    #[test]
    fn test_unknown_selector_is_reported_not_fatal() {
        let args = ["patterns", "factory", "coldWithTruck", "frozenWithRocket"];
        let (result, output) = run_args(&args);
        assert!(result.is_ok());
        assert!(output.contains("[ok] coldWithTruck"));
        assert!(output.contains("[err] no such factory: 'frozenWithRocket'"));
    }

    #[test]
    fn test_unknown_transport_is_reported_not_fatal() {
        let (result, output) = run_args(&["patterns", "transport", "ship"]);
        assert!(result.is_ok());
        assert!(output.contains("[err] unknown transport kind: 'ship'"));
    }

    #[test]
    fn test_all_text_runs_every_demo() {
        let (result, output) = run_args(&["patterns", "all"]);
        assert!(result.is_ok());
        for heading in ["Factory Method", "Abstract Factory", "Builder", "Adapter"] {
            assert!(output.contains(&format!("=== {heading} ===")), "missing {heading}");
        }
        assert!(output.contains("this is adapter pattern\n"));
        assert!(output.contains("Summary: 4 resolved, 2 unknown keys"));
    }

    #[test]
    fn test_all_json_includes_every_demo() {
        let report = run_json(&["patterns", "--json", "all"]);
        let keys: Vec<&str> = report.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for key in ["factories", "transports", "houses", "adapter"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(report["factories"].as_array().unwrap().len(), 3);
        assert_eq!(report["factories"][2]["status"], "missing");
        assert_eq!(report["transports"].as_array().unwrap().len(), 3);
        assert_eq!(report["houses"][0]["style"], "wood");
        assert_eq!(report["adapter"]["message"], "this is adapter pattern");
        assert_eq!(report["adapter"]["forwarded"], "this is adapter pattern\n");
    }

    #[test]
    fn test_adapter_json() {
        let report = run_json(&["patterns", "adapter", "hello", "--json"]);
        assert_eq!(report["message"], "hello");
        assert_eq!(report["forwarded"], "hello\n");
    }

    #[test]
    fn test_adapter_text_goes_to_output() {
        let (result, output) = run_args(&["patterns", "adapter", "hello"]);
        assert!(result.is_ok());
        assert!(output.ends_with("hello\n"));
    }

    #[test]
    fn test_builder_uses_config_section() {
        let file = config_file("[builder]\nstyle = \"stone\"\nrebind = \"apartment\"\n");
        let path = file.path().to_str().unwrap();
        let houses = run_json(&["patterns", "--config", path, "--json", "builder"]);
        assert_eq!(houses[0]["style"], "stone");
        assert_eq!(houses[1]["style"], "apartment");
    }

    #[test]
    fn test_cli_style_and_rebind_override_config() {
        let file = config_file("[builder]\nstyle = \"stone\"\nrebind = \"apartment\"\n");
        let path = file.path().to_str().unwrap();

        let houses = run_json(&["patterns", "-c", path, "--json", "builder", "--style", "wood"]);
        assert_eq!(houses[0]["style"], "wood");
        assert_eq!(houses[1]["style"], "apartment");

        let houses = run_json(&["patterns", "-c", path, "--json", "builder", "--rebind", "stone"]);
        assert_eq!(houses[0]["style"], "stone");
        assert_eq!(houses[1]["style"], "stone");
        assert!(houses[1]["house"]["yard"].is_object());
    }

    #[test]
    fn test_missing_config_fails_with_path() {
        let (result, output) = run_args(&["patterns", "--config", "/nonexistent/patterns.toml"]);
        assert!(output.is_empty());
        let err = result.unwrap_err();
        assert!(matches!(err, PatternError::ConfigRead { .. }));
        assert!(err.to_string().contains("/nonexistent/patterns.toml"));
    }
}
