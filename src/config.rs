// src/config.rs
use std::path::{Path, PathBuf};

use country_stats_domain::options::{RankSpec, YearRange};
use country_stats_shared_kernel::{
    ErrorContext, InfrastructureError, PresentationError, Result, Year,
};
use country_stats_usecase::ReportRequest;
use serde::{Deserialize, Serialize};

use crate::{cli::Args, presentation::OutputFormat};

pub const DEFAULT_CODES: &str = "codes.txt";
pub const DEFAULT_COUNTRIES: &str = "countries.csv";
pub const DEFAULT_DETAILS: &str = "country_info.csv";

/// Optional settings read from `--config`. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub codes: Option<PathBuf>,
    pub validate_codes: Option<bool>,
    pub countries: Option<PathBuf>,
    pub details: Option<PathBuf>,
    pub headers: Option<bool>,
    pub years: Option<YearRange>,
    pub emission_years: Option<Vec<i32>>,
    pub population_years: Option<Vec<i32>>,
    pub rank: Option<RankSpec>,
    pub top: Option<usize>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

impl FileConfig {
    /// Reads a JSON file, or YAML when the extension is `.yaml`/`.yml`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        if is_yaml {
            serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
        } else {
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
        }
    }
}

/// Paths of the three input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    /// `None` disables code validation.
    pub codes: Option<PathBuf>,
    pub countries: PathBuf,
    pub details: PathBuf,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub inputs: InputPaths,
    pub has_headers: bool,
    pub year_range: Option<YearRange>,
    pub request: ReportRequest,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Config {
    /// Merges CLI flags over the optional config file over built-in defaults.
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    fn merge(args: Args, file: FileConfig) -> Result<Self> {
        if args.top == Some(0) || (args.top.is_none() && file.top == Some(0)) {
            return Err(PresentationError::InvalidValue {
                flag: "--top".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        let validate = !args.no_codes && file.validate_codes.unwrap_or(true);
        let codes = if validate {
            Some(args.codes.or(file.codes).unwrap_or_else(|| PathBuf::from(DEFAULT_CODES)))
        } else {
            None
        };

        let defaults = ReportRequest::default();
        let emission_years = pick_years(args.emission_years, file.emission_years).unwrap_or(defaults.emission_years);
        let population_years =
            pick_years(args.population_years, file.population_years).unwrap_or(defaults.population_years);

        Ok(Self {
            inputs: InputPaths {
                codes,
                countries: args.countries.or(file.countries).unwrap_or_else(|| PathBuf::from(DEFAULT_COUNTRIES)),
                details: args.details.or(file.details).unwrap_or_else(|| PathBuf::from(DEFAULT_DETAILS)),
            },
            has_headers: args.headers || file.headers.unwrap_or(false),
            year_range: args.years.or(file.years),
            request: ReportRequest {
                emission_years,
                population_years,
                rank: args.rank.or(file.rank).unwrap_or_default(),
                top: args.top.or(file.top),
            },
            format: args.format.map(OutputFormat::from).or(file.format).unwrap_or_default(),
            output: args.output.or(file.output),
        })
    }
}

fn pick_years(cli: Vec<i32>, file: Option<Vec<i32>>) -> Option<Vec<Year>> {
    let years = if cli.is_empty() { file? } else { cli };
    Some(years.into_iter().map(Year::new).collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use country_stats_domain::options::RankKey;
    use country_stats_shared_kernel::{CountryStatsError, PresentationError};

    use super::*;

    fn config_from(argv: &[&str]) -> Result<Config> {
        let mut full = vec!["country_stats"];
        full.extend_from_slice(argv);
        Config::from_args(Args::parse_from(full))
    }

    #[test]
    fn defaults_match_reference_layout() {
        let config = config_from(&[]).expect("config builds");
        assert_eq!(config.inputs.codes, Some(PathBuf::from("codes.txt")));
        assert_eq!(config.inputs.countries, PathBuf::from("countries.csv"));
        assert_eq!(config.inputs.details, PathBuf::from("country_info.csv"));
        assert_eq!(config.request, ReportRequest::default());
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.year_range.is_none());
    }

    #[test]
    fn no_codes_disables_validation() {
        let config = config_from(&["--no-codes"]).unwrap();
        assert_eq!(config.inputs.codes, None);
    }

    #[test]
    fn cli_years_replace_defaults() {
        let config = config_from(&["--emission-year", "1990", "--population-year", "2005,2015"]).unwrap();
        assert_eq!(config.request.emission_years, vec![Year::new(1990)]);
        assert_eq!(config.request.population_years, vec![Year::new(2005), Year::new(2015)]);
    }

    #[test]
    fn zero_top_is_rejected() {
        let err = config_from(&["--top", "0"]).unwrap_err();
        if let CountryStatsError::Presentation(PresentationError::InvalidValue { flag, value, .. }) = err {
            assert_eq!(flag, "--top");
            assert_eq!(value, "0");
        } else {
            panic!("unexpected error variant: {err:?}");
        }
    }

    #[test]
    fn yaml_file_supplies_values_and_flags_win() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "countries: data/c.csv\nrank:\n  key: name\n  order: descending\nemission_years: [2005]\nformat: json\nyears: 2000..=2021"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = config_from(&["--config", &path, "--format", "yaml"]).unwrap();
        assert_eq!(config.inputs.countries, PathBuf::from("data/c.csv"));
        assert_eq!(config.request.rank, RankSpec::descending(RankKey::Name));
        assert_eq!(config.request.emission_years, vec![Year::new(2005)]);
        assert_eq!(config.format, OutputFormat::Yaml);
        assert_eq!(config.year_range.map(|r| r.year_count()), Some(22));
    }

    #[test]
    fn json_file_with_unknown_field_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"countries": "c.csv", "colour": "blue"}}"#).unwrap();

        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("parsing"));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(config_from(&["--config", "no/such/config.json"]).is_err());
    }
}
