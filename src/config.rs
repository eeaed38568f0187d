use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where table-cell text lands in the extracted body text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableTextOrder {
    /// All table-cell paragraphs follow every top-level paragraph.
    #[default]
    Appended,
    /// Table-cell paragraphs are emitted where the table sits in the body.
    Positional,
}

/// Tunables for metadata extraction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Words assumed per page when a format has no native pagination
    pub words_per_page: usize,
    /// Length (in characters) of `extracted_text` handed to downstream consumers
    pub max_extracted_chars: usize,
    /// Upper bound on diagram references counted from text
    pub diagram_reference_cap: usize,
    /// Deepest level assigned by the plain-text heading heuristic
    pub max_pdf_heading_level: u32,
    pub table_text: TableTextOrder,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            words_per_page: 300,
            max_extracted_chars: 5000,
            diagram_reference_cap: 50,
            max_pdf_heading_level: 6,
            table_text: TableTextOrder::Appended,
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from the user's config directory
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        // Defaults when no config file exists
        Ok(ExtractorConfig::default())
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ExtractorConfig = toml::from_str(content)?;
        Ok(config.sanitized())
    }

    /// Write configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("metadox").join("config.toml"))
    }

    // A zero divisor or zero heading depth would break the estimators.
    fn sanitized(mut self) -> Self {
        self.words_per_page = self.words_per_page.max(1);
        self.max_pdf_heading_level = self.max_pdf_heading_level.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ExtractorConfig::from_toml_str("words_per_page = 250\n").unwrap();
        assert_eq!(config.words_per_page, 250);
        assert_eq!(config.max_extracted_chars, 5000);
        assert_eq!(config.diagram_reference_cap, 50);
        assert_eq!(config.table_text, TableTextOrder::Appended);
    }

    #[test]
    fn test_table_text_order_parses() {
        let config = ExtractorConfig::from_toml_str("table_text = \"positional\"").unwrap();
        assert_eq!(config.table_text, TableTextOrder::Positional);
    }

    #[test]
    fn test_zero_words_per_page_is_clamped() {
        let config = ExtractorConfig::from_toml_str("words_per_page = 0").unwrap();
        assert_eq!(config.words_per_page, 1);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = ExtractorConfig {
            diagram_reference_cap: 10,
            table_text: TableTextOrder::Positional,
            ..ExtractorConfig::default()
        };
        config.save_to(&path).unwrap();

        let loaded = ExtractorConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(ExtractorConfig::from_toml_str("words_per_page = \"many\"").is_err());
    }
}
