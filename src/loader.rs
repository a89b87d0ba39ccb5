//! Input loading: raw corpus text or pre-annotated JSON.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::annotate::Doc;
use crate::error::{AnalysisError, Result};

/// Reads `path`, then applies [`prepare_text`].
pub fn load_text(path: &Path, char_limit: usize, lowercase: bool) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|e| AnalysisError::io(path, e))?;
    let text = prepare_text(&raw, char_limit, lowercase);
    debug!(
        "loaded {} of {} characters from {}",
        text.chars().count(),
        raw.chars().count(),
        path.display()
    );
    Ok(text)
}

/// Drops a byte-order mark, lowercases, and keeps the first `char_limit`
/// characters.
///
/// ```
/// use pos_analysis::prepare_text;
/// assert_eq!(prepare_text("\u{feff}War And Peace", 7, true), "war and");
/// ```
pub fn prepare_text(raw: &str, char_limit: usize, lowercase: bool) -> String {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    if lowercase {
        truncate_chars(&raw.to_lowercase(), char_limit).to_string()
    } else {
        truncate_chars(raw, char_limit).to_string()
    }
}

/// Longest prefix of `text` holding at most `limit` characters.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

pub fn load_annotations(path: &Path) -> Result<Doc> {
    let json = fs::read_to_string(path).map_err(|e| AnalysisError::io(path, e))?;
    let doc = Doc::from_spacy_json(&json)?;
    if doc.tokens().is_empty() {
        warn!("{} contains no tokens", path.display());
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("añb", 2), "añ");
        assert_eq!(truncate_chars("ab", 10), "ab");
        assert_eq!(truncate_chars("ab", 0), "");
    }

    #[test]
    fn case_is_kept_on_request() {
        assert_eq!(prepare_text("Anna Pavlovna", 4, false), "Anna");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_text(Path::new("/definitely/not/here.txt"), 10, true).unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }

    #[test]
    fn loads_and_truncates_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "The Quick Fox").unwrap();
        let text = load_text(file.path(), 9, true).unwrap();
        assert_eq!(text, "the quick");
    }
}
