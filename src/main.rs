mod age;
mod month;
mod svg;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Calculates your age in years, months, and days from a date of birth.
#[derive(Parser)]
#[command(name = "agecalc", version)]
struct Cli {
    /// Day of birth (1-31)
    #[arg(short, long)]
    day: u32,

    /// Month of birth, as a name ("June") or number (6)
    #[arg(short, long, value_parser = parse_month_arg)]
    month: u32,

    /// Year of birth
    #[arg(short, long)]
    year: i32,

    /// Reference date to measure against, instead of the current date
    #[arg(long, value_name = "YYYY-MM-DD")]
    on: Option<NaiveDate>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Also write the result as an SVG card to this path
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,

    /// Card theme
    #[arg(long, default_value = "light")]
    theme: svg::Theme,
}

fn parse_month_arg(s: &str) -> Result<u32, String> {
    month::parse_month(s).ok_or_else(|| format!("'{s}' is not a month name or a number in 1-12"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(valid) => {
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the calculation and renders every requested output. Returns whether
/// the inputs passed validation; a rejected date is a normal outcome here,
/// not an `Err`.
fn run(cli: &Cli) -> Result<bool> {
    let today = cli.on.unwrap_or_else(|| Utc::now().date_naive());
    let outcome = age::compute_age(cli.day, cli.month, cli.year, today);

    match &outcome {
        Ok(result) => {
            if cli.json {
                println!("{}", serde_json::to_string(result)?);
            } else {
                println!("Your age is: {result}");
            }
        }
        Err(err) => eprintln!("{err}"),
    }

    if let Some(path) = &cli.svg {
        // Month is already validated, the name lookup cannot miss.
        let selection = format!(
            "{} {} {}",
            cli.day,
            month::month_name(cli.month).unwrap_or_default(),
            cli.year
        );
        let card = svg::generate_svg(&selection, &outcome, cli.theme);
        fs::write(path, card).with_context(|| format!("writing SVG card to {}", path.display()))?;
    }

    Ok(outcome.is_ok())
}
