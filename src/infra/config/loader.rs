use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Loads config from `path` (or `./config.toml`), layering file values over
/// defaults. A missing file is not an error.
pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"[logging]
level = "debug"

[api]
base_url = "http://localhost:8080"

[user]
id = "alice"
"#,
        )
        .expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_ms, None);
        assert_eq!(config.user.id, "alice");
        assert_eq!(config.ui.loading_timeout_ms, 3_000);
    }

    #[test]
    fn reads_optional_timeouts() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "[api]\ntimeout_ms = 2500\n\n[ui]\nloading_timeout_ms = 500\n",
        )
        .expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.api.timeout_ms, Some(2_500));
        assert_eq!(config.ui.loading_timeout_ms, 500);
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let config_path = dir.path().join("broken.toml");
        fs::write(&config_path, "[api\nbase_url = ").expect("must write test config");

        let error = load(Some(&config_path)).expect_err("broken config must fail");

        assert!(matches!(error, AppError::ConfigParse { ref path, .. } if path == &config_path));
    }
}
