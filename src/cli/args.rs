use crate::constants::exit_codes;
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for helmtpl.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Templated input file (e.g. `values.tpl`).
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Rendered output file. Defaults to the input's name with a `.yaml` extension.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists.
    #[arg(short, long)]
    pub force: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse command line arguments, printing help and exiting with status 1
/// when a required argument is missing.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `--verbose` to the log level.
pub fn get_log_level_from_verbose(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}
