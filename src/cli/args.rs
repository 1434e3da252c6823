// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use country_stats_domain::options::{RankSpec, YearRange};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "country_stats",
    version = crate::VERSION,
    about = "Country population, carbon emission and land area report",
    group(
        clap::ArgGroup::new("code_source")
            .args(&["codes", "no_codes"])
            .multiple(false)
    )
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Reference list of valid country codes, one per line [default: codes.txt]
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub codes: Option<PathBuf>,

    /// Accept every country code instead of checking a reference list
    #[arg(long, help_heading = "Input")]
    pub no_codes: bool,

    /// Country list in code,name,area form [default: countries.csv]
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub countries: Option<PathBuf>,

    /// Per-year details in code,year,emission,population form [default: country_info.csv]
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub details: Option<PathBuf>,

    /// Input CSV files start with a header row
    #[arg(long, help_heading = "Input")]
    pub headers: bool,

    /// Only accept detail rows within this year range (e.g. 2000..=2021)
    #[arg(long, help_heading = "Input")]
    pub years: Option<YearRange>,

    /// Years to report highest/lowest emission for (comma separated)
    #[arg(long = "emission-year", value_delimiter = ',', help_heading = "Report")]
    pub emission_years: Vec<i32>,

    /// Years to report world population for (comma separated)
    #[arg(long = "population-year", value_delimiter = ',', help_heading = "Report")]
    pub population_years: Vec<i32>,

    /// Ranking key and order (area, name, code; optional :asc/:desc)
    #[arg(long, help_heading = "Report")]
    pub rank: Option<RankSpec>,

    /// Show only the first N ranked countries
    #[arg(long, help_heading = "Report")]
    pub top: Option<usize>,

    /// Output format
    #[arg(long, value_enum, help_heading = "Output")]
    pub format: Option<CliOutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Configuration file (JSON or YAML); flags override its values
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Behavior")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Behavior")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Behavior")]
    pub quiet: bool,
}
