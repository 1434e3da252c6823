//! Input file fixtures.
#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

pub const CODES: &str = "USA\nCHN\nISL\nFRA\n\n";

pub const COUNTRIES: &str = "\
USA,United States,9833520
CHN,China,9596961
ISL,Iceland,103000
FRA,France,551695
XXX,Atlantis,1
not a country line
";

pub const DETAILS: &str = "\
USA,2000,5775807,282162411
USA,2020,4535301,331501080
CHN,2000,3405180,1262645000
CHN,2020,10667887,1411100000
ISL,2000,2200,281205
ISL,2020,3400,366425
FRA,2000,380000,60912500
FRA,2020,277000,67571107
XXX,2000,1,1
";

pub const WORLD_2000: u64 = 1_606_001_116;
pub const WORLD_2020: u64 = 1_810_538_612;

/// The three input files written into a temporary directory.
pub struct DataSet {
    dir: TempDir,
}

impl DataSet {
    pub fn new() -> Self {
        Self::with_contents(CODES, COUNTRIES, DETAILS)
    }

    pub fn with_contents(codes: &str, countries: &str, details: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("codes.txt"), codes).unwrap();
        fs::write(dir.path().join("countries.csv"), countries).unwrap();
        fs::write(dir.path().join("country_info.csv"), details).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).unwrap();
        path
    }
}
