//! CSV/TSV report files.
//!
//! Every file starts with a human-readable caption row. Tables and rankings
//! add a two-column sub-header before their data rows.

use std::fmt::Display;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};
use log::info;
use serde::Serialize;

use crate::aggregate::FrequencyTable;
use crate::config::ExportFormat;
use crate::error::{AnalysisError, Result};

/// Neutralises spreadsheet formulas: a cell starting with `=`, `+`, `-`,
/// `@`, tab or carriage return gets a leading `'`. Cells already starting
/// with `'` are left alone.
///
/// ```
/// use pos_analysis::csv_safe_cell;
/// assert_eq!(csv_safe_cell("=SUM(A1)".to_string()), "'=SUM(A1)");
/// assert_eq!(csv_safe_cell("-- ".to_string()), "'-- ");
/// assert_eq!(csv_safe_cell("fox".to_string()), "fox");
/// ```
pub fn csv_safe_cell(cell: String) -> String {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{cell}"),
        _ => cell,
    }
}

/// Writes report files into one output directory and remembers their paths.
#[derive(Debug)]
pub struct ReportWriter {
    dir: PathBuf,
    format: ExportFormat,
    written: Vec<PathBuf>,
}

impl ReportWriter {
    /// Fails with [`AnalysisError::MissingOutputDir`] unless `dir` is an
    /// existing directory.
    pub fn new(dir: impl Into<PathBuf>, format: ExportFormat) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(AnalysisError::MissingOutputDir(dir));
        }
        Ok(ReportWriter {
            dir,
            format,
            written: Vec::new(),
        })
    }

    /// Like [`ReportWriter::new`], creating the directory first.
    pub fn create(dir: impl Into<PathBuf>, format: ExportFormat) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| AnalysisError::io(&dir, e))?;
        Self::new(dir, format)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Caption row, then the value. `None` leaves the value cell empty.
    pub fn write_scalar<T: Display>(
        &mut self,
        name: &str,
        caption: &str,
        value: Option<T>,
    ) -> Result<PathBuf> {
        let value = value.map(|v| v.to_string()).unwrap_or_default();
        self.write_rows(name, caption, None, vec![vec![value]])
    }

    /// Caption row, then the items sorted lexically, one per row.
    pub fn write_list<S: AsRef<str>>(
        &mut self,
        name: &str,
        caption: &str,
        items: &[S],
    ) -> Result<PathBuf> {
        let mut sorted: Vec<&str> = items.iter().map(|s| s.as_ref()).collect();
        sorted.sort_unstable();
        let rows = sorted.into_iter().map(|s| vec![s.to_string()]).collect();
        self.write_rows(name, caption, None, rows)
    }

    /// Caption, sub-header, then one row per key in key order.
    pub fn write_table(
        &mut self,
        name: &str,
        caption: &str,
        headers: [&str; 2],
        table: &FrequencyTable,
    ) -> Result<PathBuf> {
        let rows = table
            .sorted_by_key()
            .into_iter()
            .map(|(item, n)| vec![item.to_string(), n.to_string()])
            .collect();
        self.write_rows(name, caption, Some(headers), rows)
    }

    /// Caption, sub-header, then the entries of a top-N ranking sorted by
    /// key. The ranking decides which entries appear, not their row order.
    pub fn write_ranking(
        &mut self,
        name: &str,
        caption: &str,
        headers: [&str; 2],
        ranking: &[(String, usize)],
    ) -> Result<PathBuf> {
        let mut entries: Vec<&(String, usize)> = ranking.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        let rows = entries
            .into_iter()
            .map(|(item, n)| vec![item.clone(), n.to_string()])
            .collect();
        self.write_rows(name, caption, Some(headers), rows)
    }

    /// Pretty-printed JSON file `<name>.json`.
    pub fn write_json<T: Serialize>(&mut self, name: &str, value: &T) -> Result<PathBuf> {
        let path = self.dir.join(format!("{name}.json"));
        let file = File::create(&path).map_err(|e| AnalysisError::io(&path, e))?;
        serde_json::to_writer_pretty(file, value)?;
        self.record(path)
    }

    fn write_rows(
        &mut self,
        name: &str,
        caption: &str,
        headers: Option<[&str; 2]>,
        rows: Vec<Vec<String>>,
    ) -> Result<PathBuf> {
        let path = self
            .dir
            .join(format!("{name}.{}", self.format.extension()));
        let mut wtr = self.open(&path)?;
        wtr.write_record([csv_safe_cell(caption.to_string())])?;
        if let Some(headers) = headers {
            wtr.write_record(headers)?;
        }
        for row in rows {
            wtr.write_record(row.into_iter().map(csv_safe_cell))?;
        }
        wtr.flush().map_err(|e| AnalysisError::io(&path, e))?;
        self.record(path)
    }

    fn open(&self, path: &Path) -> Result<Writer<File>> {
        let file = File::create(path).map_err(|e| AnalysisError::io(path, e))?;
        Ok(WriterBuilder::new()
            .flexible(true)
            .delimiter(self.format.delimiter())
            .from_writer(file))
    }

    fn record(&mut self, path: PathBuf) -> Result<PathBuf> {
        info!("wrote {}", path.display());
        self.written.push(path.clone());
        Ok(path)
    }
}
