use std::process::ExitCode;
use clap::{Parser, Subcommand};
use cdnrules::check;
use cdnrules::config::{self, parse, ValueParser};
use cdnrules::types::Field;

mod report;

/// Check CDN delivery rule fields against the formats the service accepts.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check every delivery rule in a YAML document.
    File {
        /// Path to the document.
        path: String,
        /// Print diagnostics as YAML.
        #[arg(long)]
        yaml: bool,
    },
    /// Check a single value for a field, eg. `url-redirect-query-string`.
    Value {
        field: Field,
        value: String,
    },
}

fn check_file(path: &str, yaml: bool) -> Result<ExitCode, String> {
    let path = parse::FILE_PATH.parse(path)?;
    log::info!("checking {path:?}");
    let cfg = config::file::new(&path)?;
    let diags = check::check_rules(&cfg)?;
    if yaml {
        print!("{}", report::yaml(&diags)?);
    } else {
        print!("{}", report::lines(&diags));
    }
    Ok(report::exit_code(diags.is_empty()))
}

fn check_value(field: Field, value: &str) -> Result<ExitCode, String> {
    let result = check::check_value(field, value);
    if result.is_valid() {
        // day counts beyond TimeDelta's range are still valid
        let duration = match field {
            Field::CacheExpirationDuration =>
                parse::CACHE_DURATION.parse(value).ok(),
            _ => None,
        };
        match duration {
            Some(duration) => println!("valid: {}s", duration.num_seconds()),
            None => println!("valid"),
        }
    }
    for message in result.messages() {
        println!("{message}");
    }
    Ok(report::exit_code(result.is_valid()))
}

fn main() -> Result<ExitCode, String> {
    env_logger::init();

    let args = Args::parse();
    match &args.command {
        Command::File { path, yaml } => check_file(path, *yaml),
        Command::Value { field, value } => check_value(*field, value),
    }
}
