//! # POS Analysis
//!
//! Batch analysis of a single English text: the text is annotated once
//! (sentences, part-of-speech tags, noun chunks, person names) and every
//! report is derived from that one annotated [`Doc`].
//!
//! Reports are small CSV (or TSV) files, each starting with a caption row:
//! counts, lists and frequency tables per category, adjacent tag pairs,
//! sentence filters, tense buckets, and a `summary.json` manifest.
//!
//! ## Example
//! ```no_run
//! use pos_analysis::{AnalysisConfig, run};
//!
//! let config = AnalysisConfig {
//!     input: "data/2600-0.txt".into(),
//!     create_output_dir: true,
//!     ..AnalysisConfig::default()
//! };
//! let summary = run(&config).unwrap();
//! println!("{}", summary.to_text());
//! ```

pub mod aggregate;
pub mod analysis;
pub mod annotate;
pub mod config;
pub mod error;
pub mod loader;
pub mod paragraphs;
pub mod patterns;
pub mod report;
pub mod tense;

pub use aggregate::{Aggregate, Category, FrequencyTable, Selector, count_items};
pub use analysis::{Analysis, RunSummary, analyze, run, write_reports};
pub use annotate::{Annotator, Doc, DocBuilder, Pipeline, Pos, Stage, Stages, Token};
pub use config::{AnalysisConfig, ExportFormat};
pub use error::{AnalysisError, Result};
pub use loader::{load_annotations, load_text, prepare_text};
pub use report::{ReportWriter, csv_safe_cell};
pub use tense::TenseSets;
