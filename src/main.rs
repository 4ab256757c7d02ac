use anyhow::Result;
use brat::{Action, Configuration, Params};
use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator, Shell};
use clap_verbosity_flag::Verbosity;
use colored_json::to_colored_json_auto;
use console::style;
use serde_json::Value;
use std::io;
use std::path::PathBuf;
use tracing_log::AsTrace;

#[derive(Debug, Parser)]
#[command(name = "brat", author, version, about, long_about = None)] // Read from `Cargo.toml`
struct Cli {
    // If provided, outputs the completion file for given shell
    #[arg(long = "generate", value_enum)]
    generator: Option<Shell>,
    /// YAML config file, defaults to the user config dir
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,
    /// Run delete_* and remove_* commands without asking
    #[arg(short, long)]
    yes: bool,
    #[command(flatten)]
    verbose: Verbosity,
    /// `info`, `help`, `actions` or one of the actions
    command: Option<String>,
    /// Positional arguments followed by `--key=value` options
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Splits `--key=value` options from positional arguments.
fn split_args(args: &[String]) -> (Vec<String>, Params) {
    let mut positional = Vec::new();
    let mut options = Params::new();

    for arg in args {
        match arg.strip_prefix("--").and_then(|a| a.split_once('=')) {
            Some((key, value)) => {
                options.insert(key, option_value(value));
            }
            None => positional.push(arg.clone()),
        }
    }

    (positional, options)
}

fn option_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Bool(_) | Value::Number(_))) => value,
        _ => Value::String(raw.to_owned()),
    }
}

fn print_actions() {
    for name in brat::actions() {
        println!("{name}");
    }
}

fn print_info(config: &Configuration) {
    for (key, value) in config.options() {
        println!("{key}: {}", value.unwrap_or("not set"));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbose.log_level_filter().as_trace())
        .with_writer(io::stderr)
        .init();

    if let Some(generator) = cli.generator {
        let mut cmd = Cli::command();
        eprintln!("Generating completion file for {generator:?}...");
        print_completions(generator, &mut cmd);

        return Ok(());
    }

    let config = Configuration::load(cli.config.as_deref())?;
    brat::configure(|c| *c = config);

    match cli.command.as_deref() {
        None | Some("help" | "actions") => print_actions(),
        Some("info") => print_info(&brat::configuration()),
        Some(command) => {
            let Ok(action) = command.parse::<Action>() else {
                eprintln!("Unknown command. Run `brat help` for a list of available commands.");
                std::process::exit(1);
            };

            if action.is_destructive() && !cli.yes {
                let confirmed = inquire::Confirm::new(&format!("Run {action}?"))
                    .with_default(false)
                    .prompt()?;

                if !confirmed {
                    println!("{}", style("Command aborted.").yellow());
                    return Ok(());
                }
            }

            let (args, options) = split_args(&cli.args);
            let client = brat::client()?;
            let output = action.run(&client, &args, &options)?;

            #[cfg(windows)]
            let _enabled = colored_json::enable_ansi_support();

            println!("{}", to_colored_json_auto(&serde_json::to_value(&output)?)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_args_separates_options() {
        let args: Vec<String> = ["3", "Fix", "--assignee_id=42", "--confidential=true", "--labels=bug"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let (positional, options) = split_args(&args);

        assert_eq!(positional, vec!["3", "Fix"]);
        assert_eq!(options.get("assignee_id"), Some(&Value::from(42)));
        assert_eq!(options.get("confidential"), Some(&Value::Bool(true)));
        assert_eq!(options.get("labels"), Some(&Value::from("bug")));
    }

    #[test]
    fn flag_without_value_stays_positional() {
        let (positional, options) = split_args(&["--dry".to_string()]);

        assert_eq!(positional, vec!["--dry"]);
        assert!(options.is_empty());
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
