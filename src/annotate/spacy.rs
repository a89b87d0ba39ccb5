//! Import of spaCy `Doc.to_json()` output.
//!
//! spaCy reports character offsets; they are converted to byte offsets here.
//! An optional `noun_chunks` array (same shape as `sents`) is honoured,
//! otherwise chunks are derived from the POS tags.

use std::ops::Range;

use serde::Deserialize;

use super::chunker::noun_chunks;
use super::doc::{Doc, Entity, Pos, Token};
use crate::error::{AnalysisError, Result};

#[derive(Debug, Deserialize)]
struct SpacyDoc {
    text: String,
    #[serde(default)]
    tokens: Vec<SpacyToken>,
    #[serde(default)]
    sents: Vec<SpacySpan>,
    #[serde(default)]
    ents: Vec<SpacyEntity>,
    #[serde(default)]
    noun_chunks: Option<Vec<SpacySpan>>,
}

#[derive(Debug, Deserialize)]
struct SpacyToken {
    start: usize,
    end: usize,
    #[serde(default)]
    pos: String,
    #[serde(default)]
    tag: String,
    #[serde(default)]
    lemma: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpacySpan {
    start: usize,
    end: usize,
}

#[derive(Debug, Deserialize)]
struct SpacyEntity {
    start: usize,
    end: usize,
    label: String,
}

impl Doc {
    /// Parses a spaCy JSON document.
    ///
    /// ```
    /// use pos_analysis::{Doc, Pos};
    /// let json = r#"{"text": "dogs bark.",
    ///   "tokens": [{"id": 0, "start": 0, "end": 4, "pos": "NOUN", "tag": "NNS"},
    ///              {"id": 1, "start": 5, "end": 9, "pos": "VERB", "tag": "VBP"},
    ///              {"id": 2, "start": 9, "end": 10, "pos": "PUNCT", "tag": "."}],
    ///   "sents": [{"start": 0, "end": 10}], "ents": []}"#;
    /// let doc = Doc::from_spacy_json(json).unwrap();
    /// assert_eq!(doc.tokens()[1].pos, Pos::Verb);
    /// assert_eq!(doc.span_text(&doc.noun_chunks()[0]), "dogs");
    /// ```
    pub fn from_spacy_json(json: &str) -> Result<Doc> {
        let parsed: SpacyDoc = serde_json::from_str(json)?;
        let offsets = CharOffsets::new(&parsed.text);

        let mut tokens = Vec::with_capacity(parsed.tokens.len());
        let mut last_end = 0;
        for (i, t) in parsed.tokens.iter().enumerate() {
            let (start, end) = (offsets.byte(t.start)?, offsets.byte(t.end)?);
            if start < last_end || end <= start {
                return Err(AnalysisError::Annotation(format!(
                    "token {i} has offsets {}..{} out of order",
                    t.start, t.end
                )));
            }
            last_end = end;
            let text = &parsed.text[start..end];
            let pos = Pos::from_label(&t.pos);
            let lemma = t.lemma.clone().unwrap_or_else(|| text.to_lowercase());
            tokens.push(Token::new(text, start, pos, &t.tag, &lemma));
        }

        let sents = if parsed.sents.is_empty() {
            vec![0..tokens.len()]
        } else {
            let sents = parsed
                .sents
                .iter()
                .map(|s| token_span(&tokens, &offsets, s.start, s.end))
                .collect::<Result<Vec<_>>>()?;
            check_coverage(&sents, tokens.len())?;
            sents
        };

        let ents = parsed
            .ents
            .iter()
            .map(|e| {
                Ok(Entity {
                    span: token_span(&tokens, &offsets, e.start, e.end)?,
                    label: e.label.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let chunks = match &parsed.noun_chunks {
            Some(spans) => spans
                .iter()
                .map(|s| token_span(&tokens, &offsets, s.start, s.end))
                .collect::<Result<Vec<_>>>()?,
            None => noun_chunks(&tokens, &sents),
        };

        Ok(Doc::from_parts(parsed.text, tokens, sents, ents, chunks))
    }
}

/// Character index to byte index table.
struct CharOffsets {
    bytes: Vec<usize>,
}

impl CharOffsets {
    fn new(text: &str) -> Self {
        let mut bytes: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        bytes.push(text.len());
        CharOffsets { bytes }
    }

    fn byte(&self, char_offset: usize) -> Result<usize> {
        self.bytes.get(char_offset).copied().ok_or_else(|| {
            AnalysisError::Annotation(format!("character offset {char_offset} is past the text"))
        })
    }
}

/// Token range exactly covering the character span `start..end`.
fn token_span(
    tokens: &[Token],
    offsets: &CharOffsets,
    start: usize,
    end: usize,
) -> Result<Range<usize>> {
    let (start_byte, end_byte) = (offsets.byte(start)?, offsets.byte(end)?);
    let first = tokens.iter().position(|t| t.start == start_byte);
    let last = tokens.iter().rposition(|t| t.end == end_byte);
    match (first, last) {
        (Some(first), Some(last)) if first <= last => Ok(first..last + 1),
        _ => Err(AnalysisError::Annotation(format!(
            "span {start}..{end} does not align with token boundaries"
        ))),
    }
}

fn check_coverage(sents: &[Range<usize>], token_count: usize) -> Result<()> {
    let mut expected = 0;
    for sent in sents {
        if sent.start != expected {
            return Err(AnalysisError::Annotation(format!(
                "sentences leave tokens {expected}..{} unassigned",
                sent.start
            )));
        }
        expected = sent.end;
    }
    if expected != token_count {
        return Err(AnalysisError::Annotation(
            "sentences do not cover every token".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "text": "pierre smiled.\n\nhe is happy.",
        "tokens": [
            {"id": 0, "start": 0, "end": 6, "pos": "PROPN", "tag": "NNP", "lemma": "pierre"},
            {"id": 1, "start": 7, "end": 13, "pos": "VERB", "tag": "VBD", "lemma": "smile"},
            {"id": 2, "start": 13, "end": 14, "pos": "PUNCT", "tag": "."},
            {"id": 3, "start": 14, "end": 16, "pos": "SPACE", "tag": "_SP"},
            {"id": 4, "start": 16, "end": 18, "pos": "PRON", "tag": "PRP"},
            {"id": 5, "start": 19, "end": 21, "pos": "AUX", "tag": "VBZ"},
            {"id": 6, "start": 22, "end": 27, "pos": "ADJ", "tag": "JJ"},
            {"id": 7, "start": 27, "end": 28, "pos": "PUNCT", "tag": "."}
        ],
        "sents": [{"start": 0, "end": 16}, {"start": 16, "end": 28}],
        "ents": [{"start": 0, "end": 6, "label": "PERSON"}]
    }"#;

    #[test]
    fn imports_tokens_sentences_and_entities() {
        let doc = Doc::from_spacy_json(SAMPLE).unwrap();
        assert_eq!(doc.tokens().len(), 8);
        assert_eq!(doc.sents(), &[0..4, 4..8]);
        assert_eq!(doc.sentence_text(0), "pierre smiled.");
        assert_eq!(doc.tokens()[1].lemma, "smile");
        assert!(doc.tokens()[3].is_space);
        assert!(doc.tokens()[4].is_stop);
        assert_eq!(doc.entity_text(&doc.ents()[0]), "pierre");
        assert_eq!(doc.ents()[0].label, "PERSON");
    }

    #[test]
    fn character_offsets_become_byte_offsets() {
        let json = r#"{"text": "café noir",
            "tokens": [{"start": 0, "end": 4, "pos": "NOUN", "tag": "NN"},
                       {"start": 5, "end": 9, "pos": "ADJ", "tag": "JJ"}]}"#;
        let doc = Doc::from_spacy_json(json).unwrap();
        assert_eq!(doc.tokens()[0].text, "café");
        assert_eq!(doc.tokens()[1].start, 6);
        assert_eq!(doc.tokens()[1].text, "noir");
        assert_eq!(doc.sents(), &[0..2]);
    }

    #[test]
    fn misaligned_spans_are_rejected() {
        let json = r#"{"text": "big dog",
            "tokens": [{"start": 0, "end": 3, "pos": "ADJ"}, {"start": 4, "end": 7, "pos": "NOUN"}],
            "ents": [{"start": 1, "end": 7, "label": "PERSON"}]}"#;
        assert!(matches!(
            Doc::from_spacy_json(json),
            Err(AnalysisError::Annotation(_))
        ));
    }

    #[test]
    fn explicit_noun_chunks_win() {
        let json = r#"{"text": "big dog",
            "tokens": [{"start": 0, "end": 3, "pos": "ADJ"}, {"start": 4, "end": 7, "pos": "NOUN"}],
            "noun_chunks": [{"start": 4, "end": 7}]}"#;
        let doc = Doc::from_spacy_json(json).unwrap();
        assert_eq!(doc.noun_chunks(), &[1..2]);
    }
}
