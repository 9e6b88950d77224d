use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the subdirectory holding the generated description texts
pub const DESCRIPTION_DIR: &str = "description";
/// Name of the subdirectory holding the copied title images
pub const TITLE_DIR: &str = "title";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    // Output layout
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
    #[serde(default = "default_source_image")]
    pub source_image: PathBuf,

    // Logging and run records, empty means disabled
    #[serde(default = "default_empty_string")]
    pub log_file: String,
    #[serde(default = "default_empty_string")]
    pub report_path: String,
}

fn default_empty_string() -> String {
    "".to_string()
}

fn default_output_root() -> PathBuf {
    PathBuf::from("./product")
}

fn default_source_image() -> PathBuf {
    PathBuf::from("./testimg.png")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            source_image: default_source_image(),
            log_file: default_empty_string(),
            report_path: default_empty_string(),
        }
    }
}

impl AppConfig {
    /// Load from an optional config file (any extension the `config` crate
    /// understands), then let `PGEN_*` environment variables override it.
    pub fn from_env_or_file(file_name: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(file_name).required(false))
            .add_source(Environment::with_prefix("PGEN"))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Config rooted at an explicit output directory, everything else default
    #[cfg(test)]
    pub fn with_root<P: AsRef<std::path::Path>>(root: P, source_image: P) -> Self {
        Self {
            output_root: root.as_ref().to_path_buf(),
            source_image: source_image.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn description_dir(&self) -> PathBuf {
        self.output_root.join(DESCRIPTION_DIR)
    }

    pub fn title_dir(&self) -> PathBuf {
        self.output_root.join(TITLE_DIR)
    }

    pub fn log_file(&self) -> Option<&str> {
        Some(self.log_file.as_str()).filter(|path| !path.is_empty())
    }

    pub fn report_path(&self) -> Option<&str> {
        Some(self.report_path.as_str()).filter(|path| !path.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.output_root, PathBuf::from("./product"));
        assert_eq!(config.source_image, PathBuf::from("./testimg.png"));
        assert_eq!(config.description_dir(), PathBuf::from("./product/description"));
        assert_eq!(config.title_dir(), PathBuf::from("./product/title"));
        assert!(config.log_file().is_none());
        assert!(config.report_path().is_none());
    }

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let name = temp_dir.path().join("config");
        let config = AppConfig::from_env_or_file(name.to_str().unwrap()).unwrap();
        assert_eq!(config.source_image, PathBuf::from("./testimg.png"));
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("config.toml"),
            "output_root = \"out/product\"\nreport_path = \"out/report.json\"\n",
        )
        .unwrap();

        let name = temp_dir.path().join("config");
        let config = AppConfig::from_env_or_file(name.to_str().unwrap()).unwrap();

        assert_eq!(config.output_root, PathBuf::from("out/product"));
        assert_eq!(config.title_dir(), PathBuf::from("out/product/title"));
        assert_eq!(config.report_path(), Some("out/report.json"));
        assert!(config.log_file().is_none());
    }
}
