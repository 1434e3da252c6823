// crates/infra/src/codes.rs
use std::{collections::HashSet, io::BufRead, path::Path};

use country_stats_ports::validation::CodeValidator;
use country_stats_shared_kernel::{InfrastructureError, Result};
use log::debug;

use crate::persistence::FileReader;

/// Reference list of valid country codes.
#[derive(Debug, Clone, Default)]
pub struct CodeList {
    codes: HashSet<String>,
}

impl CodeList {
    /// Reads one code per line; blank lines are ignored and entries trimmed.
    pub fn load(path: &Path) -> Result<Self> {
        let reader = FileReader::open_buffered(path)?;
        let mut codes = HashSet::new();
        for line in reader.lines() {
            let line = line.map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
            let code = line.trim();
            if !code.is_empty() {
                codes.insert(code.to_string());
            }
        }
        debug!("loaded {} reference codes from {}", codes.len(), path.display());
        Ok(Self { codes })
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CodeList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { codes: iter.into_iter().map(Into::into).collect() }
    }
}

impl CodeValidator for CodeList {
    fn is_valid_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }
}
