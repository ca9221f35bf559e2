use permit_compiler_ts::EmitOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "permit.config.json";

/// Permit configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source directory containing .permit.json files
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Output directory for .d.ts files, next to the sources when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    /// Declare `filter` as optional in every emitted permit
    #[serde(default)]
    pub filter_optional: bool,
}

fn default_src_dir() -> String {
    "src".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get absolute path to source directory
    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    /// Emit options from the config, overridden by `--filter-optional`
    /// or `--filter-required`
    pub fn emit_options(&self, filter_optional: bool, filter_required: bool) -> EmitOptions {
        let filter_optional = if filter_required {
            false
        } else {
            filter_optional || self.filter_optional
        };
        EmitOptions { filter_optional }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: None,
            filter_optional: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "srcDir": "schema",
            "outDir": "types",
            "filterOptional": true
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.src_dir, "schema");
        assert_eq!(config.out_dir, Some("types".to_string()));
        assert!(config.filter_optional);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.src_dir, "src");
        assert_eq!(config.out_dir, None);
        assert!(!config.filter_optional);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "outDir": "gen" }"#).unwrap();
        assert_eq!(config.src_dir, "src");
        assert_eq!(config.out_dir, Some("gen".to_string()));
    }

    #[test]
    fn test_emit_options_flags_override_config() {
        let required = Config::default();
        assert!(!required.emit_options(false, false).filter_optional);
        assert!(required.emit_options(true, false).filter_optional);

        let optional = Config {
            filter_optional: true,
            ..Config::default()
        };
        assert!(optional.emit_options(false, false).filter_optional);
        assert!(!optional.emit_options(false, true).filter_optional);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "srcDir": "permits", "filterOptional": true }"#,
        )
        .unwrap();

        let cwd = dir.path().to_str().unwrap();
        let config = Config::load(cwd).unwrap();
        assert_eq!(config.src_dir, "permits");
        assert!(config.filter_optional);
        assert_eq!(config.get_src_dir(cwd), dir.path().join("permits"));
    }
}
