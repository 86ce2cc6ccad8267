//! Configuration structures for the statement pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::record::BankId;
use crate::error::CardStmtError;

/// Main configuration for the cardstmt pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementConfig {
    /// PDF text extraction configuration.
    pub pdf: PdfConfig,

    /// Bank classification configuration.
    pub classifier: ClassifierConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Text extraction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEngine {
    /// The `pdf-extract` crate.
    PdfExtract,
    /// Page-by-page extraction with `lopdf`.
    Lopdf,
}

/// PDF text extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Password for encrypted statements (empty = none).
    pub password: String,

    /// Engine tried first.
    pub primary_engine: TextEngine,

    /// Engine tried when the primary fails or returns no text.
    pub secondary_engine: TextEngine,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            password: String::new(),
            primary_engine: TextEngine::PdfExtract,
            secondary_engine: TextEngine::Lopdf,
        }
    }
}

/// A user-supplied cue phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueConfig {
    /// Phrase searched for in lower-cased statement text.
    pub phrase: String,
    /// Bank reported when the phrase is found.
    pub bank: BankId,
}

/// Bank classification configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Cues checked after the built-in table, in order.
    pub extra_cues: Vec<CueConfig>,
}

/// Batch processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of documents processed in parallel.
    pub jobs: usize,

    /// File extensions picked up from the input folder.
    pub extensions: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            jobs: 4,
            extensions: vec!["pdf".to_string()],
        }
    }
}

impl BatchConfig {
    /// Whether a file extension is accepted (case-insensitive).
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// JSON results path.
    pub json_path: PathBuf,

    /// CSV results path.
    pub csv_path: PathBuf,

    /// Print the JSON results to stdout.
    pub print_console: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_path: PathBuf::from("results.json"),
            csv_path: PathBuf::from("results.csv"),
            print_console: true,
        }
    }
}

impl StatementConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Check values that deserialize fine but cannot drive a run.
    pub fn validate(&self) -> crate::Result<()> {
        if self.batch.jobs == 0 {
            return Err(CardStmtError::Config("batch.jobs must be at least 1".to_string()));
        }
        if self.batch.extensions.iter().all(|ext| ext.trim().is_empty()) {
            return Err(CardStmtError::Config("batch.extensions must name at least one extension".to_string()));
        }
        if let Some(cue) = self.classifier.extra_cues.iter().find(|cue| !cue.bank.is_known()) {
            return Err(CardStmtError::Config(format!(
                "cue {:?} must map to a known bank, not {}",
                cue.phrase, cue.bank
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = StatementConfig::default();
        assert_eq!(config.pdf.primary_engine, TextEngine::PdfExtract);
        assert_eq!(config.pdf.secondary_engine, TextEngine::Lopdf);
        assert!(config.pdf.password.is_empty());
        assert_eq!(config.batch.jobs, 4);
        assert_eq!(config.output.json_path, PathBuf::from("results.json"));
        assert_eq!(config.output.csv_path, PathBuf::from("results.csv"));
        assert!(config.classifier.extra_cues.is_empty());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "pdf": { "primary_engine": "lopdf" },
            "classifier": { "extra_cues": [ { "phrase": "acme card services", "bank": "bank4" } ] }
        }"#;

        let config: StatementConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.pdf.primary_engine, TextEngine::Lopdf);
        assert_eq!(config.pdf.secondary_engine, TextEngine::Lopdf);
        assert_eq!(
            config.classifier.extra_cues,
            vec![CueConfig {
                phrase: "acme card services".to_string(),
                bank: BankId::Bank4,
            }]
        );
        assert_eq!(config.batch.jobs, 4);
    }

    #[test]
    fn test_accepts_extension() {
        let batch = BatchConfig::default();
        assert!(batch.accepts_extension("pdf"));
        assert!(batch.accepts_extension("PDF"));
        assert!(!batch.accepts_extension("txt"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = StatementConfig::default();
        config.pdf.password = "secret".to_string();
        config.batch.jobs = 2;
        config.save(&path).unwrap();

        let loaded = StatementConfig::from_file(&path).unwrap();
        assert_eq!(loaded.pdf.password, "secret");
        assert_eq!(loaded.batch.jobs, 2);
    }

    #[test]
    fn test_invalid_file_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = StatementConfig::from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_validate() {
        assert!(StatementConfig::default().validate().is_ok());

        let mut config = StatementConfig::default();
        config.batch.jobs = 0;
        assert!(matches!(config.validate(), Err(CardStmtError::Config(_))));

        let mut config = StatementConfig::default();
        config.batch.extensions = vec![" ".to_string()];
        assert!(config.validate().is_err());

        let mut config = StatementConfig::default();
        config.classifier.extra_cues.push(CueConfig {
            phrase: "Acme".to_string(),
            bank: BankId::Unknown,
        });
        assert!(config.validate().is_err());
    }
}
