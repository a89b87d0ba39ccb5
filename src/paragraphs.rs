//! Paragraph splitting on blank-line whitespace tokens.

use std::ops::Range;

use crate::annotate::{Doc, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Byte range in the doc text, boundary excluded.
    pub bytes: Range<usize>,
    pub tokens: Range<usize>,
    /// Byte range of the blank-line token that ends this paragraph.
    pub boundary: Option<Range<usize>>,
}

pub fn is_paragraph_break(token: &Token) -> bool {
    token.is_space && token.text.matches('\n').count() >= 2
}

/// Every paragraph, including a trailing one after the last boundary.
/// Concatenating each paragraph's text and its boundary restores the doc text.
pub fn split_paragraphs(doc: &Doc) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut byte_start = 0;
    let mut token_start = 0;
    for (i, token) in doc.tokens().iter().enumerate() {
        if is_paragraph_break(token) {
            paragraphs.push(Paragraph {
                bytes: byte_start..token.start,
                tokens: token_start..i,
                boundary: Some(token.start..token.end),
            });
            byte_start = token.end;
            token_start = i + 1;
        }
    }
    paragraphs.push(Paragraph {
        bytes: byte_start..doc.text().len(),
        tokens: token_start..doc.tokens().len(),
        boundary: None,
    });
    paragraphs
}

pub fn paragraph_text<'a>(doc: &'a Doc, paragraph: &Paragraph) -> &'a str {
    &doc.text()[paragraph.bytes.clone()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{DocBuilder, Pos};

    fn doc() -> Doc {
        DocBuilder::new()
            .word("one", Pos::Num, "CD")
            .word(".", Pos::Punct, ".")
            .space("\n")
            .word("still", Pos::Adv, "RB")
            .word("one", Pos::Num, "CD")
            .space("\n\n")
            .end_sentence()
            .word("two", Pos::Num, "CD")
            .space("\n \n")
            .end_sentence()
            .word("three", Pos::Num, "CD")
            .build()
    }

    #[test]
    fn splits_on_blank_lines_only() {
        let doc = doc();
        let paragraphs = split_paragraphs(&doc);
        let texts: Vec<&str> = paragraphs.iter().map(|p| paragraph_text(&doc, p)).collect();
        assert_eq!(texts, vec!["one.\nstill one", "two", "three"]);
        assert_eq!(paragraphs[0].tokens, 0..5);
        assert!(paragraphs[2].boundary.is_none());
    }

    #[test]
    fn paragraphs_and_boundaries_reconstruct_text() {
        let doc = doc();
        let mut rebuilt = String::new();
        for p in split_paragraphs(&doc) {
            rebuilt.push_str(paragraph_text(&doc, &p));
            if let Some(b) = p.boundary {
                rebuilt.push_str(&doc.text()[b]);
            }
        }
        assert_eq!(rebuilt, doc.text());
    }

    #[test]
    fn text_without_breaks_is_one_paragraph() {
        let doc = DocBuilder::new().word("solo", Pos::Noun, "NN").build();
        assert_eq!(split_paragraphs(&doc).len(), 1);
    }
}
