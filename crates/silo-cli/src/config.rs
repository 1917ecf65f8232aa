//! Local key-value configuration store, persisted as TOML.

use std::path::{Path, PathBuf};

use anyhow::Context;

/// Config key holding the LogDNA service key.
pub const SERVICE_KEY: &str = "logdna_service_key";

/// A flat key-value store backed by a TOML file on disk.
///
/// Reads tolerate a missing file (every key is `None`); writes create the
/// parent directory and rewrite the whole file.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Open the store at its default location
    /// (`$XDG_CONFIG_HOME/silo/config.toml`), or wherever the
    /// `SILO_CONFIG` environment variable points.
    pub fn open_default() -> anyhow::Result<Self> {
        if let Ok(path) = std::env::var("SILO_CONFIG") {
            return Ok(Self::at(path));
        }
        let dir = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(Self::at(dir.join("silo").join("config.toml")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let table = self.read_table()?;
        Ok(table
            .get(key)
            .and_then(toml::Value::as_str)
            .map(String::from))
    }

    pub fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), toml::Value::String(value.to_string()));
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("could not create {}", parent.display()))?;
        }
        std::fs::write(&self.path, table.to_string())
            .with_context(|| format!("could not write {}", self.path.display()))
    }

    fn read_table(&self) -> anyhow::Result<toml::Table> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("could not read {}", self.path.display()))?;
        contents
            .parse::<toml::Table>()
            .with_context(|| format!("invalid config file {}", self.path.display()))
    }
}
