// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use country_stats_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing report files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`.
    pub fn create(path: &Path) -> InfraResult<BufWriter<File>> {
        File::create(path).map(BufWriter::new).map_err(|source| InfrastructureError::OutputError {
            message: format!("cannot create '{}': {source}", path.display()),
            source: Some(Box::new(source)),
        })
    }

    /// Write `data` to `path`, replacing any previous content.
    pub fn write_all(path: &Path, data: &[u8]) -> InfraResult<()> {
        let mut writer = Self::create(path)?;
        writer.write_all(data)?;
        writer.flush()?;
        Ok(())
    }
}
