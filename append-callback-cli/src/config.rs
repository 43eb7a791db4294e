//! Configuration loading and parsing

use anyhow::{Context, Result};
use append_callback::{AppendConfig, Value};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::report::OutputFormat;

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sequence: SequenceConfig,
    #[serde(default)]
    pub append: AppendConfig,
    #[serde(default)]
    pub callback: CallbackConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SequenceConfig {
    #[serde(default = "default_values")]
    pub values: Vec<Value>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            values: default_values(),
        }
    }
}

fn default_values() -> Vec<Value> {
    ["Juan", "Karla", "Ricardo", "Pedro"]
        .into_iter()
        .map(Value::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallbackConfig {
    #[serde(default = "default_callback")]
    pub name: String,
    #[serde(default = "default_repeat")]
    pub repeat: usize,
}

impl Default for CallbackConfig {
    fn default() -> Self {
        Self {
            name: default_callback(),
            repeat: default_repeat(),
        }
    }
}

fn default_callback() -> String {
    "print".to_string()
}

fn default_repeat() -> usize {
    1
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [sequence]
            values = ["Ana", 7, 2.5]

            [append]
            literal = "end"

            [callback]
            name = "json"
            repeat = 2

            [output]
            format = "json"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.sequence.values,
            vec![Value::from("Ana"), Value::Integer(7), Value::Float(2.5)]
        );
        assert_eq!(config.append.literal, Value::from("end"));
        assert_eq!(config.callback.name, "json");
        assert_eq!(config.callback.repeat, 2);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.sequence.values.len(), 4);
        assert_eq!(config.append.literal, Value::Integer(100));
        assert_eq!(config.callback.name, "print");
        assert_eq!(config.callback.repeat, 1);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[callback]\nname = \"log\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.callback.name, "log");
        assert_eq!(config.sequence.values, default_values());
    }

    #[test]
    fn test_load_config_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[callback]\nrepeat = \"many\"").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        let missing = load_config(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(missing.to_string().contains("Failed to read config file"));
    }
}
