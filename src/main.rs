#![forbid(unsafe_code)]
//! # POS Analysis CLI
//!
//! Command-line interface for the `pos_analysis` crate. Annotates one text
//! file (or imports spaCy JSON) and writes the full report set.
//!
//! ## Example
//! ```bash
//! cargo run --release -- data/2600-0.txt --output-dir results --create-output-dir
//! ```
//!
//! See `--help` for all available options.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;
use pos_analysis::config::{DEFAULT_CHAR_LIMIT, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, DEFAULT_TOP_N};
use pos_analysis::{AnalysisConfig, ExportFormat, Stage, Stages, TenseSets, run};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// UTF-8 text file to analyze
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Pre-annotated spaCy JSON document to use instead of annotating the input
    #[arg(long)]
    annotations: Option<PathBuf>,

    /// Directory that receives the report files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Create the output directory if it does not exist
    #[arg(long, default_value_t = false)]
    create_output_dir: bool,

    /// Number of characters kept from the start of the input
    #[arg(long, default_value_t = DEFAULT_CHAR_LIMIT)]
    char_limit: usize,

    /// Keep the original letter case instead of lowercasing
    #[arg(long, default_value_t = false)]
    keep_case: bool,

    /// Length of the top-N frequency rankings
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Output format for the reports (csv, tsv)
    #[arg(long, default_value = "csv")]
    export_format: ExportFormat,

    /// Pipeline stage to switch off; may be repeated
    #[arg(long, value_enum)]
    disable: Vec<Stage>,

    /// Fine-grained tag counted as future tense; may be repeated
    #[arg(long)]
    future_tag: Vec<String>,
}

impl Cli {
    fn into_config(self) -> AnalysisConfig {
        let stages = self
            .disable
            .iter()
            .fold(Stages::default(), |stages, &stage| stages.without(stage));
        let mut tense_sets = TenseSets::default();
        if !self.future_tag.is_empty() {
            tense_sets.future = self.future_tag;
        }
        AnalysisConfig {
            input: self.input,
            annotations: self.annotations,
            output_dir: self.output_dir,
            create_output_dir: self.create_output_dir,
            char_limit: self.char_limit,
            lowercase: !self.keep_case,
            top_n: self.top,
            export_format: self.export_format,
            stages,
            tense_sets,
        }
    }
}

fn main() {
    env_logger::init();
    let config = Cli::parse().into_config();

    match run(&config) {
        Ok(summary) => println!("{}", summary.to_text()),
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }
}
