use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
};

/// Reads `AppConfig` from a TOML file, defaulting to `./config.toml`.
#[derive(Debug, Clone, Default)]
pub struct FileConfigAdapter {
    path: Option<PathBuf>,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        let config = load(self.path.as_deref())?;

        // The user id is stamped on every chat and message this client creates.
        if config.user.id.trim().is_empty() {
            bail!("config value user.id must not be blank");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let adapter = FileConfigAdapter::new(Some(&dir.path().join("absent.toml")));

        let config = adapter.load().expect("defaults should load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_values_from_given_path() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[user]\nid = \"alice\"\n").expect("config should be written");

        let config = FileConfigAdapter::new(Some(&path))
            .load()
            .expect("config should load");

        assert_eq!(config.user.id, "alice");
    }

    #[test]
    fn rejects_blank_user_id() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[user]\nid = \"  \"\n").expect("config should be written");

        let error = FileConfigAdapter::new(Some(&path))
            .load()
            .expect_err("blank user id must fail");

        assert!(error.to_string().contains("user.id"));
    }
}
