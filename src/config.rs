use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ExportFormat;
use crate::error::ConfigError;
use crate::export::DEFAULT_SHEET_NAME;

/// Run configuration for quizsheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Source .docx quiz
    pub input: PathBuf,
    /// Destination file
    pub output: PathBuf,
    /// Tab name of the generated sheet
    pub sheet_name: String,
    pub format: ExportFormat,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            input: PathBuf::from("quiz.docx"),
            output: PathBuf::from("quiz_export.xlsx"),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            format: ExportFormat::Xlsx,
        }
    }
}

impl QuizConfig {
    /// Load config from an explicit file, else the config directory.
    ///
    /// An explicit path must exist; the default location is optional and
    /// falls back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::from_file(&config_path);
            }
        }

        Ok(QuizConfig::default())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to the given path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the path to the default config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quizsheet").join("config.toml"))
    }

    /// Write the default config file and return where it went
    pub fn init_default() -> Result<PathBuf, ConfigError> {
        let path = Self::get_config_path().ok_or(ConfigError::NoConfigDir)?;
        QuizConfig::default().save_to(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventional_paths() {
        let config = QuizConfig::default();
        assert_eq!(config.input, PathBuf::from("quiz.docx"));
        assert_eq!(config.output, PathBuf::from("quiz_export.xlsx"));
        assert_eq!(config.sheet_name, "Quiz Questions");
        assert_eq!(config.format, ExportFormat::Xlsx);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output = \"out.json\"\nformat = \"json\"\n").unwrap();

        let config = QuizConfig::load(Some(&path)).unwrap();
        assert_eq!(config.output, PathBuf::from("out.json"));
        assert_eq!(config.format, ExportFormat::Json);
        assert_eq!(config.input, PathBuf::from("quiz.docx"));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = QuizConfig {
            sheet_name: "Week 3".to_string(),
            ..QuizConfig::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(QuizConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = QuizConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = [").unwrap();
        assert!(matches!(
            QuizConfig::from_file(&path).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }
}
