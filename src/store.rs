//! File-backed persistence for the host configuration.

use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{error, info};

use crate::config::HostConfiguration;
use crate::error::{BundleError, Result};
use crate::selector::Persistence;

/// Writes the whole configuration as pretty JSON.
///
/// The JSON goes to a randomly named temporary file in the destination's
/// directory, which is synced and then renamed over the destination. Readers
/// see either the old or the new configuration, never a partial one.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write(&self, config: &HostConfiguration) -> anyhow::Result<()> {
        let json = config.to_json()?;
        let dir = self.directory();

        // O_EXCL with a random name, so a pre-planted link is never followed
        let mut staged = NamedTempFile::new_in(dir)
            .with_context(|| format!("cannot create temporary file in {:?}", dir))?;
        staged
            .write_all(json.as_bytes())
            .context("cannot write temporary file")?;
        staged
            .as_file()
            .sync_all()
            .context("cannot sync temporary file")?;
        staged
            .persist(&self.path)
            .with_context(|| format!("cannot move temporary file to {:?}", self.path))?;
        Ok(())
    }
}

impl Persistence for JsonFileStore {
    fn persist(&mut self, config: &HostConfiguration) -> Result<()> {
        match self.write(config) {
            Ok(()) => {
                info!("Persisted {} host entries to {:?}", config.hosts.len(), self.path);
                Ok(())
            }
            Err(e) => {
                error!("Failed to persist configuration to {:?}: {:#}", self.path, e);
                Err(BundleError::persist(&self.path, format!("{:#}", e)))
            }
        }
    }
}
