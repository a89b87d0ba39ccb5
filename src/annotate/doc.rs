//! Annotated document model.
//!
//! A [`Doc`] owns its source text; tokens, sentences, entities and noun
//! chunks refer back into it by byte offset or token index. Nothing here is
//! mutated after annotation.

use std::fmt;
use std::ops::Range;

use super::chunker::noun_chunks;
use super::stopwords::is_stop_word;

/// Coarse part-of-speech category (Universal POS tag set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Space,
}

impl Pos {
    pub fn as_str(self) -> &'static str {
        match self {
            Pos::Adj => "ADJ",
            Pos::Adp => "ADP",
            Pos::Adv => "ADV",
            Pos::Aux => "AUX",
            Pos::Cconj => "CCONJ",
            Pos::Det => "DET",
            Pos::Intj => "INTJ",
            Pos::Noun => "NOUN",
            Pos::Num => "NUM",
            Pos::Part => "PART",
            Pos::Pron => "PRON",
            Pos::Propn => "PROPN",
            Pos::Punct => "PUNCT",
            Pos::Sconj => "SCONJ",
            Pos::Sym => "SYM",
            Pos::Verb => "VERB",
            Pos::X => "X",
            Pos::Space => "SPACE",
        }
    }

    /// Parses a UPOS label. Unknown labels map to [`Pos::X`]; the legacy
    /// `CONJ` label maps to [`Pos::Cconj`].
    pub fn from_label(label: &str) -> Pos {
        match label.to_ascii_uppercase().as_str() {
            "ADJ" => Pos::Adj,
            "ADP" => Pos::Adp,
            "ADV" => Pos::Adv,
            "AUX" => Pos::Aux,
            "CCONJ" | "CONJ" => Pos::Cconj,
            "DET" => Pos::Det,
            "INTJ" => Pos::Intj,
            "NOUN" => Pos::Noun,
            "NUM" => Pos::Num,
            "PART" => Pos::Part,
            "PRON" => Pos::Pron,
            "PROPN" => Pos::Propn,
            "PUNCT" => Pos::Punct,
            "SCONJ" => Pos::Sconj,
            "SYM" => Pos::Sym,
            "VERB" => Pos::Verb,
            "SPACE" | "_SP" => Pos::Space,
            _ => Pos::X,
        }
    }

    pub fn is_nominal(self) -> bool {
        matches!(self, Pos::Noun | Pos::Propn)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    /// Byte offset of the first byte in [`Doc::text`].
    pub start: usize,
    /// Byte offset one past the last byte.
    pub end: usize,
    pub pos: Pos,
    /// Fine-grained (Penn Treebank) tag, empty when the tagger did not run.
    pub tag: String,
    pub lemma: String,
    pub is_stop: bool,
    pub is_punct: bool,
    pub is_space: bool,
    /// Index of the owning sentence.
    pub sent: usize,
}

impl Token {
    pub(crate) fn new(text: &str, start: usize, pos: Pos, tag: &str, lemma: &str) -> Token {
        Token {
            text: text.to_string(),
            start,
            end: start + text.len(),
            pos,
            tag: tag.to_string(),
            lemma: lemma.to_string(),
            is_stop: is_stop_word(&text.to_lowercase()),
            is_punct: pos == Pos::Punct,
            is_space: pos == Pos::Space,
            sent: 0,
        }
    }
}

/// A labeled token span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub span: Range<usize>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Doc {
    text: String,
    tokens: Vec<Token>,
    sents: Vec<Range<usize>>,
    ents: Vec<Entity>,
    noun_chunks: Vec<Range<usize>>,
}

impl Doc {
    /// Assembles a doc from parts that are already consistent: tokens ordered
    /// and on char boundaries, sentences contiguous and covering every token.
    /// Sets each token's `sent` index.
    pub(crate) fn from_parts(
        text: String,
        mut tokens: Vec<Token>,
        sents: Vec<Range<usize>>,
        ents: Vec<Entity>,
        noun_chunks: Vec<Range<usize>>,
    ) -> Doc {
        for (i, sent) in sents.iter().enumerate() {
            for token in &mut tokens[sent.clone()] {
                token.sent = i;
            }
        }
        Doc {
            text,
            tokens,
            sents,
            ents,
            noun_chunks,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Sentences as token index ranges.
    pub fn sents(&self) -> &[Range<usize>] {
        &self.sents
    }

    pub fn ents(&self) -> &[Entity] {
        &self.ents
    }

    pub fn noun_chunks(&self) -> &[Range<usize>] {
        &self.noun_chunks
    }

    /// Source text covered by a token span, from the first token's start to
    /// the last token's end. Empty spans yield `""`.
    pub fn span_text(&self, span: &Range<usize>) -> &str {
        if span.start >= span.end {
            return "";
        }
        let start = self.tokens[span.start].start;
        let end = self.tokens[span.end - 1].end;
        &self.text[start..end]
    }

    pub fn sentence_tokens(&self, sent: usize) -> &[Token] {
        &self.tokens[self.sents[sent].clone()]
    }

    /// Sentence text without leading or trailing whitespace tokens.
    pub fn sentence_text(&self, sent: usize) -> &str {
        let range = &self.sents[sent];
        let tokens = &self.tokens[range.clone()];
        let first = tokens.iter().position(|t| !t.is_space);
        let last = tokens.iter().rposition(|t| !t.is_space);
        match (first, last) {
            (Some(first), Some(last)) => {
                self.span_text(&(range.start + first..range.start + last + 1))
            }
            _ => "",
        }
    }

    /// True when the sentence holds nothing but whitespace tokens.
    pub fn is_blank_sentence(&self, sent: usize) -> bool {
        self.sentence_tokens(sent).iter().all(|t| t.is_space)
    }

    pub fn entity_text(&self, entity: &Entity) -> &str {
        self.span_text(&entity.span)
    }
}

/// Builds a [`Doc`] word by word.
///
/// Words are separated by a single space unless they are punctuation;
/// [`DocBuilder::space`] inserts an explicit whitespace token. Noun chunks are
/// derived from the POS tags when the doc is built.
///
/// ```
/// use pos_analysis::{DocBuilder, Pos};
/// let doc = DocBuilder::new()
///     .word("the", Pos::Det, "DT")
///     .word("dog", Pos::Noun, "NN")
///     .word("sleeps", Pos::Verb, "VBZ")
///     .word(".", Pos::Punct, ".")
///     .end_sentence()
///     .build();
/// assert_eq!(doc.text(), "the dog sleeps.");
/// assert_eq!(doc.sentence_text(0), "the dog sleeps.");
/// ```
#[derive(Debug, Default)]
pub struct DocBuilder {
    text: String,
    tokens: Vec<Token>,
    sents: Vec<Range<usize>>,
    sent_start: usize,
    ents: Vec<Entity>,
}

impl DocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word(mut self, text: &str, pos: Pos, tag: &str) -> Self {
        let glue = pos == Pos::Punct || self.tokens.last().is_none_or(|t| t.is_space);
        if !glue {
            self.text.push(' ');
        }
        let token = Token::new(text, self.text.len(), pos, tag, &text.to_lowercase());
        self.text.push_str(text);
        self.tokens.push(token);
        self
    }

    pub fn space(mut self, whitespace: &str) -> Self {
        let token = Token::new(whitespace, self.text.len(), Pos::Space, "_SP", whitespace);
        self.text.push_str(whitespace);
        self.tokens.push(token);
        self
    }

    pub fn end_sentence(mut self) -> Self {
        if self.sent_start < self.tokens.len() {
            self.sents.push(self.sent_start..self.tokens.len());
            self.sent_start = self.tokens.len();
        }
        self
    }

    /// Labels the token span `span` (indices of previously added tokens).
    pub fn entity(mut self, span: Range<usize>, label: &str) -> Self {
        self.ents.push(Entity {
            span,
            label: label.to_string(),
        });
        self
    }

    pub fn build(self) -> Doc {
        let builder = self.end_sentence();
        let chunks = noun_chunks(&builder.tokens, &builder.sents);
        Doc::from_parts(
            builder.text,
            builder.tokens,
            builder.sents,
            builder.ents,
            chunks,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Doc {
        DocBuilder::new()
            .word("the", Pos::Det, "DT")
            .word("quick", Pos::Adj, "JJ")
            .word("fox", Pos::Noun, "NN")
            .word("jumps", Pos::Verb, "VBZ")
            .word(".", Pos::Punct, ".")
            .space("\n\n")
            .end_sentence()
            .word("anna", Pos::Propn, "NNP")
            .word("sleeps", Pos::Verb, "VBZ")
            .word(".", Pos::Punct, ".")
            .entity(6..7, "PERSON")
            .build()
    }

    #[test]
    fn builder_glues_punctuation_and_spaces() {
        let doc = sample();
        assert_eq!(doc.text(), "the quick fox jumps.\n\nanna sleeps.");
        assert_eq!(doc.sents().len(), 2);
        assert_eq!(doc.tokens()[6].sent, 1);
        assert_eq!(doc.tokens()[2].start, 10);
        assert_eq!(doc.tokens()[2].end, 13);
    }

    #[test]
    fn sentence_text_strips_whitespace_tokens() {
        let doc = sample();
        assert_eq!(doc.sentence_text(0), "the quick fox jumps.");
        assert_eq!(doc.sentence_text(1), "anna sleeps.");
        assert!(!doc.is_blank_sentence(0));
    }

    #[test]
    fn flags_follow_pos_and_stop_list() {
        let doc = sample();
        let tokens = doc.tokens();
        assert!(tokens[0].is_stop);
        assert!(!tokens[2].is_stop);
        assert!(tokens[4].is_punct);
        assert!(tokens[5].is_space);
    }

    #[test]
    fn entities_and_chunks_resolve_to_text() {
        let doc = sample();
        assert_eq!(doc.entity_text(&doc.ents()[0]), "anna");
        let chunks: Vec<&str> = doc.noun_chunks().iter().map(|c| doc.span_text(c)).collect();
        assert_eq!(chunks, vec!["the quick fox", "anna"]);
    }

    #[test]
    fn pos_labels_parse_leniently() {
        assert_eq!(Pos::from_label("noun"), Pos::Noun);
        assert_eq!(Pos::from_label("CONJ"), Pos::Cconj);
        assert_eq!(Pos::from_label("???"), Pos::X);
        assert_eq!(Pos::Verb.to_string(), "VERB");
    }
}
