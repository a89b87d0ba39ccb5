//! Run configuration. Defaults reproduce the fixed batch setup: the first
//! 90,000 lowercased characters of one corpus file, ten-item rankings, CSV
//! reports in `results/`.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::annotate::Stages;
use crate::error::{AnalysisError, Result};
use crate::tense::TenseSets;

pub const DEFAULT_INPUT: &str = "data/2600-0.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "results";
pub const DEFAULT_CHAR_LIMIT: usize = 90_000;
pub const DEFAULT_TOP_N: usize = 10;

/// Tabular output flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delimiter(self) -> u8 {
        match self {
            ExportFormat::Csv => b',',
            ExportFormat::Tsv => b'\t',
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Plain-text corpus.
    pub input: PathBuf,
    /// Pre-annotated spaCy JSON; replaces loading and annotating `input`.
    pub annotations: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub create_output_dir: bool,
    /// Characters kept from the start of the input.
    pub char_limit: usize,
    pub lowercase: bool,
    /// Length of every top-N ranking.
    pub top_n: usize,
    pub export_format: ExportFormat,
    pub stages: Stages,
    pub tense_sets: TenseSets,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            annotations: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            create_output_dir: false,
            char_limit: DEFAULT_CHAR_LIMIT,
            lowercase: true,
            top_n: DEFAULT_TOP_N,
            export_format: ExportFormat::Csv,
            stages: Stages::default(),
            tense_sets: TenseSets::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.char_limit == 0 {
            return Err(AnalysisError::InvalidConfig(
                "character limit must be at least 1".to_string(),
            ));
        }
        if self.top_n == 0 {
            return Err(AnalysisError::InvalidConfig(
                "top-N must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_batch_setup() {
        let config = AnalysisConfig::default();
        assert_eq!(config.char_limit, 90_000);
        assert_eq!(config.top_n, 10);
        assert!(config.lowercase);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limits_are_rejected() {
        let config = AnalysisConfig {
            top_n: 0,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn export_format_maps_to_delimiter_and_extension() {
        assert_eq!(ExportFormat::Tsv.delimiter(), b'\t');
        assert_eq!(ExportFormat::Csv.extension(), "csv");
    }
}
