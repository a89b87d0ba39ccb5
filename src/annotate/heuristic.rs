//! Built-in rule-based English annotator.
//!
//! Tokenizes, splits sentences on terminal punctuation and blank lines, tags
//! each sentence (in parallel) from the lexicon plus a left-to-right pass of
//! context rules, then finds person names and noun chunks. Accuracy is that of
//! a heuristic tagger; import spaCy annotations when exact tags matter.

use std::ops::Range;

use log::{debug, warn};
use rayon::prelude::*;
use whatlang::Lang;

use super::chunker::noun_chunks;
use super::doc::{Doc, Entity, Pos, Token};
use super::lexicon::{ABBREVIATIONS, Form, Lex, Lexicon, SPEECH_VERBS, singular};
use super::{Annotator, Stages};
use crate::error::Result;

const CLITICS: &[&str] = &[
    "n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m",
];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they", "he", "she", "it", "who"];

const BE_CONTRACTION_HOSTS: &[&str] = &[
    "he", "she", "it", "that", "there", "what", "who", "here", "where", "how", "let",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Word,
    Punct,
    Space,
}

#[derive(Debug, Clone, Copy)]
struct RawToken {
    start: usize,
    end: usize,
    kind: Kind,
}

#[derive(Debug, Clone)]
struct Tagged {
    pos: Pos,
    tag: &'static str,
    lemma: String,
}

impl Tagged {
    fn new(pos: Pos, tag: &'static str, lemma: impl Into<String>) -> Tagged {
        Tagged {
            pos,
            tag,
            lemma: lemma.into(),
        }
    }
}

pub struct HeuristicAnnotator {
    lexicon: Lexicon,
}

impl Default for HeuristicAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicAnnotator {
    pub fn new() -> Self {
        HeuristicAnnotator {
            lexicon: Lexicon::english(),
        }
    }

    fn tag_sentence(&self, text: &str, raw: &[RawToken]) -> Vec<Tagged> {
        let words: Vec<String> = raw
            .iter()
            .map(|t| text[t.start..t.end].to_lowercase())
            .collect();
        let first_word = raw.iter().position(|t| t.kind == Kind::Word);
        let lex: Vec<Option<Lex>> = raw
            .iter()
            .zip(&words)
            .map(|(t, w)| (t.kind == Kind::Word).then(|| self.lexicon.classify(w)))
            .collect();

        let mut out: Vec<Tagged> = Vec::with_capacity(raw.len());
        for i in 0..raw.len() {
            let surface = &text[raw[i].start..raw[i].end];
            let tagged = match (&raw[i].kind, &lex[i]) {
                (Kind::Space, _) => Tagged::new(Pos::Space, "_SP", surface),
                (Kind::Punct, _) => punct(surface),
                (Kind::Word, Some(lex_i)) => {
                    if Some(i) != first_word && is_capitalized(surface) && is_open_class(lex_i) {
                        Tagged::new(Pos::Propn, "NNP", &words[i])
                    } else {
                        let next = next_word(raw, i).and_then(|j| lex[j].as_ref());
                        self.resolve(lex_i, &words, i, &out, next)
                    }
                }
                (Kind::Word, None) => Tagged::new(Pos::X, "", &words[i]),
            };
            out.push(tagged);
        }
        settle_auxiliaries(&mut out);
        out
    }

    fn resolve(
        &self,
        lex: &Lex,
        words: &[String],
        i: usize,
        out: &[Tagged],
        next: Option<&Lex>,
    ) -> Tagged {
        let word = words[i].as_str();
        let prev = previous(out, i, false).map(|j| &out[j]);
        let effective_idx = previous(out, i, true);
        let effective = effective_idx.map(|j| &out[j]);
        let subject = effective_idx.is_some_and(|j| is_subject(&out[j], &words[j]));
        let after_determiner = prev.is_some_and(|p| {
            matches!(p.pos, Pos::Det | Pos::Adj | Pos::Num) || p.tag == "PRP$" || p.tag == "POS"
        });

        match lex {
            Lex::Fixed(pos, tag) => Tagged::new(*pos, *tag, word),
            Lex::Be(tag) => Tagged::new(Pos::Aux, *tag, "be"),
            Lex::Have(tag) => Tagged::new(Pos::Aux, *tag, "have"),
            Lex::Do(tag) => Tagged::new(Pos::Aux, *tag, "do"),
            Lex::Modal => Tagged::new(Pos::Aux, "MD", word),
            Lex::Number => Tagged::new(Pos::Num, "CD", word),
            Lex::Adv => Tagged::new(Pos::Adv, "RB", word),
            Lex::Adj { tag, lemma } => Tagged::new(Pos::Adj, *tag, lemma.as_str()),
            Lex::Noun { tag, lemma } => Tagged::new(Pos::Noun, *tag, lemma.as_str()),
            Lex::Honorific => match next {
                Some(Lex::Noun { .. }) => Tagged::new(Pos::Propn, "NNP", word),
                _ => Tagged::new(Pos::Noun, "NN", word),
            },
            Lex::To => match next {
                Some(Lex::Verb {
                    form: Form::Base, ..
                })
                | Some(Lex::Like)
                | Some(Lex::Be("VB"))
                | Some(Lex::Have("VBP"))
                | Some(Lex::Do("VBP")) => Tagged::new(Pos::Part, "TO", word),
                _ => Tagged::new(Pos::Adp, "IN", word),
            },
            Lex::That => match next {
                Some(Lex::Noun { .. }) | Some(Lex::Adj { .. }) => {
                    Tagged::new(Pos::Det, "DT", word)
                }
                Some(Lex::Fixed(Pos::Pron, _)) | Some(Lex::Fixed(Pos::Det, _)) => {
                    Tagged::new(Pos::Sconj, "IN", word)
                }
                _ => Tagged::new(Pos::Pron, "WDT", word),
            },
            Lex::Her => match next {
                Some(Lex::Noun { .. }) | Some(Lex::Adj { .. }) | Some(Lex::Verb { .. }) => {
                    Tagged::new(Pos::Pron, "PRP$", word)
                }
                _ => Tagged::new(Pos::Pron, "PRP", word),
            },
            Lex::ApostropheS => {
                let host = previous(out, i, false).map(|j| words[j].as_str());
                if host.is_some_and(|h| BE_CONTRACTION_HOSTS.contains(&h)) {
                    Tagged::new(Pos::Aux, "VBZ", "be")
                } else {
                    Tagged::new(Pos::Part, "POS", word)
                }
            }
            Lex::Like => match effective {
                Some(e) if subject || e.tag == "NNS" => {
                    Tagged::new(Pos::Verb, "VBP", "like")
                }
                Some(e) if e.tag == "MD" || e.tag == "TO" || e.lemma == "do" => {
                    Tagged::new(Pos::Verb, "VB", "like")
                }
                _ => Tagged::new(Pos::Adp, "IN", word),
            },
            Lex::Verb { lemma, form } => {
                Self::resolve_verb(word, lemma, *form, after_determiner, effective, subject, out, i)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn resolve_verb(
        word: &str,
        lemma: &str,
        form: Form,
        after_determiner: bool,
        effective: Option<&Tagged>,
        subject: bool,
        out: &[Tagged],
        i: usize,
    ) -> Tagged {
        let verb = |tag: &'static str| Tagged::new(Pos::Verb, tag, lemma);
        match form {
            Form::Base => {
                if after_determiner {
                    return Tagged::new(Pos::Noun, "NN", word);
                }
                let Some(e) = effective else {
                    return verb("VB");
                };
                match e.pos {
                    Pos::Aux | Pos::Part if e.tag == "MD" || e.tag == "TO" || e.lemma == "do" => {
                        verb("VB")
                    }
                    Pos::Pron if subject => verb("VBP"),
                    Pos::Noun if e.tag == "NNS" => verb("VBP"),
                    Pos::Noun | Pos::Propn | Pos::Adp => Tagged::new(Pos::Noun, "NN", word),
                    Pos::Cconj => match verb_before_conjunction(out, i) {
                        Some(tag) => verb(tag),
                        None => Tagged::new(Pos::Noun, "NN", word),
                    },
                    _ => verb("VB"),
                }
            }
            Form::ThirdPerson => {
                if after_determiner {
                    return Tagged::new(Pos::Noun, "NNS", singular(word));
                }
                match effective {
                    Some(e)
                        if matches!(e.pos, Pos::Noun | Pos::Propn | Pos::Pron | Pos::Sconj)
                            && e.tag != "PRP$"
                            && e.tag != "NNS" =>
                    {
                        verb("VBZ")
                    }
                    _ => Tagged::new(Pos::Noun, "NNS", singular(word)),
                }
            }
            Form::Gerund => {
                if after_determiner {
                    Tagged::new(Pos::Noun, "NN", word)
                } else {
                    verb("VBG")
                }
            }
            Form::Past => match effective {
                Some(e) if e.lemma == "have" => verb("VBN"),
                _ => verb("VBD"),
            },
            Form::Participle => {
                if after_determiner {
                    Tagged::new(Pos::Adj, "JJ", word)
                } else {
                    verb("VBN")
                }
            }
            Form::PastOrParticiple => match effective {
                Some(e) if e.lemma == "have" || e.lemma == "be" => verb("VBN"),
                _ if after_determiner => Tagged::new(Pos::Adj, "JJ", word),
                _ => verb("VBD"),
            },
        }
    }

    /// Person names: up to two name-like tokens after an honorific, and
    /// capitalised proper-noun runs next to a speech verb. Name tokens are
    /// retagged as proper nouns.
    fn recognize_people(&self, tokens: &mut [Token], sents: &[Range<usize>]) -> Vec<Entity> {
        let mut ents = Vec::new();
        for sent in sents {
            let mut i = sent.start;
            while i < sent.end {
                let lower = tokens[i].text.to_lowercase();
                if self.lexicon.is_honorific(&lower) {
                    let mut end = i + 1;
                    while end < sent.end && end - i <= 2 && self.is_name_like(&tokens[end]) {
                        end += 1;
                    }
                    if end > i + 1 {
                        ents.push(person(i + 1..end, tokens));
                        i = end;
                        continue;
                    }
                } else if tokens[i].pos == Pos::Propn && is_capitalized(&tokens[i].text) {
                    let mut end = i + 1;
                    while end < sent.end
                        && tokens[end].pos == Pos::Propn
                        && is_capitalized(&tokens[end].text)
                    {
                        end += 1;
                    }
                    if near_speech_verb(tokens, i..end, sent) {
                        ents.push(person(i..end, tokens));
                    }
                    i = end;
                    continue;
                }
                i += 1;
            }
        }
        ents
    }

    fn is_name_like(&self, token: &Token) -> bool {
        matches!(token.pos, Pos::Noun | Pos::Propn | Pos::X)
            && !token.is_stop
            && token.text.chars().all(char::is_alphabetic)
            && !self.lexicon.is_verb_base(&token.text.to_lowercase())
    }
}

impl Annotator for HeuristicAnnotator {
    fn name(&self) -> &str {
        "heuristic-en"
    }

    fn annotate(&self, text: &str, stages: Stages) -> Result<Doc> {
        check_language(text);
        let raw = tokenize(text);
        let sents = split_sentences(text, &raw);
        debug!("{} tokens in {} sentences", raw.len(), sents.len());

        let tagged: Vec<Tagged> = if stages.tagger {
            sents
                .par_iter()
                .map(|s| self.tag_sentence(text, &raw[s.clone()]))
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        } else {
            raw.iter()
                .map(|t| {
                    let surface = &text[t.start..t.end];
                    match t.kind {
                        Kind::Space => Tagged::new(Pos::Space, "_SP", surface),
                        Kind::Punct => punct(surface),
                        Kind::Word => Tagged::new(Pos::X, "", surface.to_lowercase()),
                    }
                })
                .collect()
        };

        let mut tokens: Vec<Token> = raw
            .iter()
            .zip(tagged)
            .map(|(r, t)| Token::new(&text[r.start..r.end], r.start, t.pos, t.tag, &t.lemma))
            .collect();
        let ents = if stages.ner {
            self.recognize_people(&mut tokens, &sents)
        } else {
            Vec::new()
        };
        let chunks = if stages.parser {
            noun_chunks(&tokens, &sents)
        } else {
            Vec::new()
        };
        Ok(Doc::from_parts(text.to_string(), tokens, sents, ents, chunks))
    }
}

fn check_language(text: &str) {
    match whatlang::detect(text) {
        Some(info) if info.lang() != Lang::Eng && info.is_reliable() => warn!(
            "text looks like {} rather than English; built-in tagging will be poor",
            info.lang().eng_name()
        ),
        Some(info) => debug!("detected language {:?}", info.lang()),
        None => debug!("language could not be detected"),
    }
}

fn tokenize(text: &str) -> Vec<RawToken> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(b, _)| b);
    let mut out = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i].1;
        let mut j = i + 1;
        if c.is_whitespace() {
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            let (start, end) = (byte_at(i), byte_at(j));
            if &text[start..end] != " " {
                out.push(RawToken {
                    start,
                    end,
                    kind: Kind::Space,
                });
            }
        } else if c.is_alphanumeric() {
            while j < chars.len() {
                let cj = chars[j].1;
                let joins_next = matches!(cj, '\'' | '’' | '-')
                    && chars.get(j + 1).is_some_and(|&(_, n)| n.is_alphanumeric());
                if cj.is_alphanumeric() {
                    j += 1;
                } else if joins_next {
                    j += 2;
                } else {
                    break;
                }
            }
            let start = byte_at(i);
            let word = &text[start..byte_at(j)];
            if chars.get(j).is_some_and(|&(_, n)| n == '.')
                && ABBREVIATIONS.contains(&word.to_lowercase().as_str())
            {
                j += 1;
            }
            push_word(text, start, byte_at(j), &mut out);
        } else {
            if matches!(c, '.' | '-' | '!' | '?') {
                while j < chars.len() && chars[j].1 == c {
                    j += 1;
                }
            }
            out.push(RawToken {
                start: byte_at(i),
                end: byte_at(j),
                kind: Kind::Punct,
            });
        }
        i = j;
    }
    out
}

/// Pushes a word, splitting off a trailing clitic ("do" + "n't", "dog" + "'s").
fn push_word(text: &str, start: usize, end: usize, out: &mut Vec<RawToken>) {
    let word = &text[start..end];
    for clitic in CLITICS {
        if word.len() > clitic.len() {
            let split = word.len() - clitic.len();
            if word.is_char_boundary(split) && word[split..].eq_ignore_ascii_case(clitic) {
                out.push(RawToken {
                    start,
                    end: start + split,
                    kind: Kind::Word,
                });
                out.push(RawToken {
                    start: start + split,
                    end,
                    kind: Kind::Word,
                });
                return;
            }
        }
    }
    out.push(RawToken {
        start,
        end,
        kind: Kind::Word,
    });
}

/// Sentence token ranges. A sentence ends after terminal punctuation (plus
/// any closing quotes, brackets and whitespace) or at a blank line.
fn split_sentences(text: &str, raw: &[RawToken]) -> Vec<Range<usize>> {
    let mut sents = Vec::new();
    let mut start = 0;
    let mut pending = false;
    for (i, token) in raw.iter().enumerate() {
        let surface = &text[token.start..token.end];
        match token.kind {
            Kind::Space => {
                if surface.matches('\n').count() >= 2 && i > start {
                    pending = true;
                }
            }
            Kind::Punct if pending && is_closing(surface) && token.start == raw[i - 1].end => {}
            _ => {
                if pending {
                    sents.push(start..i);
                    start = i;
                    pending = false;
                }
                if token.kind == Kind::Punct && surface.starts_with(['.', '!', '?']) {
                    pending = true;
                }
            }
        }
    }
    if start < raw.len() {
        sents.push(start..raw.len());
    }
    sents
}

fn is_closing(surface: &str) -> bool {
    matches!(surface, "\"" | "'" | ")" | "]" | "”" | "’" | "»")
}

fn punct(surface: &str) -> Tagged {
    let tag = match surface {
        s if s.starts_with(['.', '!', '?']) => ".",
        "," => ",",
        ":" | ";" => ":",
        s if s.starts_with('-') => ":",
        "\"" | "“" | "‘" | "«" => "``",
        "”" | "’" | "'" | "»" => "''",
        "(" | "[" | "{" => "-LRB-",
        ")" | "]" | "}" => "-RRB-",
        _ => "SYM",
    };
    if tag == "SYM" {
        Tagged::new(Pos::Sym, tag, surface)
    } else {
        Tagged::new(Pos::Punct, tag, surface)
    }
}

fn is_capitalized(surface: &str) -> bool {
    surface.chars().next().is_some_and(char::is_uppercase)
}

fn is_open_class(lex: &Lex) -> bool {
    matches!(
        lex,
        Lex::Noun { .. } | Lex::Adj { .. } | Lex::Verb { .. } | Lex::Honorific
    )
}

fn next_word(raw: &[RawToken], i: usize) -> Option<usize> {
    (i + 1..raw.len()).find(|&j| raw[j].kind == Kind::Word)
}

/// Index of the previous non-space token; with `skip_modifiers`, adverbs and
/// negations are skipped too.
fn previous(out: &[Tagged], i: usize, skip_modifiers: bool) -> Option<usize> {
    (0..i).rev().find(|&j| {
        let t = &out[j];
        !(t.pos == Pos::Space
            || skip_modifiers && (t.pos == Pos::Adv || (t.pos == Pos::Part && t.tag == "RB")))
    })
}

fn is_subject(tagged: &Tagged, word: &str) -> bool {
    tagged.pos == Pos::Pron && tagged.tag == "PRP" && SUBJECT_PRONOUNS.contains(&word)
}

/// Tag of a base/present verb coordinated by the conjunction before `i`.
fn verb_before_conjunction(out: &[Tagged], i: usize) -> Option<&'static str> {
    let conj = previous(out, i, true)?;
    let before = previous(out, conj, true)?;
    let t = &out[before];
    (t.pos == Pos::Verb && (t.tag == "VB" || t.tag == "VBP")).then_some(t.tag)
}

/// "have" and "do" stay auxiliaries only when a verb follows; otherwise they
/// are main verbs.
fn settle_auxiliaries(out: &mut [Tagged]) {
    for i in 0..out.len() {
        let lemma = out[i].lemma.as_str();
        if out[i].pos != Pos::Aux || (lemma != "have" && lemma != "do") {
            continue;
        }
        let is_do = lemma == "do";
        let next = (i + 1..out.len()).find(|&j| {
            let t = &out[j];
            !(t.pos == Pos::Space
                || t.pos == Pos::Adv
                || (t.pos == Pos::Part && t.tag == "RB")
                || (is_do && t.pos == Pos::Pron && t.tag == "PRP"))
        });
        let keeps_aux = next.is_some_and(|j| {
            let t = &out[j];
            if is_do {
                t.pos == Pos::Verb && t.tag == "VB"
            } else {
                (t.pos == Pos::Verb || t.pos == Pos::Aux) && t.tag == "VBN"
            }
        });
        if !keeps_aux {
            out[i].pos = Pos::Verb;
        }
    }
}

fn person(span: Range<usize>, tokens: &mut [Token]) -> Entity {
    for token in &mut tokens[span.clone()] {
        token.pos = Pos::Propn;
        token.tag = "NNP".to_string();
    }
    Entity {
        span,
        label: "PERSON".to_string(),
    }
}

fn near_speech_verb(tokens: &[Token], run: Range<usize>, sent: &Range<usize>) -> bool {
    let is_speech = |j: usize| SPEECH_VERBS.contains(&tokens[j].text.to_lowercase().as_str());
    let before = (sent.start..run.start)
        .rev()
        .find(|&j| !tokens[j].is_space && !tokens[j].is_punct);
    let after = (run.end..sent.end).find(|&j| !tokens[j].is_space && !tokens[j].is_punct);
    before.is_some_and(is_speech) || after.is_some_and(is_speech)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotate(text: &str) -> Doc {
        HeuristicAnnotator::new()
            .annotate(text, Stages::default())
            .unwrap()
    }

    fn words_with(doc: &Doc, pos: Pos) -> Vec<&str> {
        doc.tokens()
            .iter()
            .filter(|t| t.pos == pos)
            .map(|t| t.text.as_str())
            .collect()
    }

    fn surfaces(text: &str) -> Vec<&str> {
        tokenize(text)
            .iter()
            .map(|t| &text[t.start..t.end])
            .collect()
    }

    #[test]
    fn tokenizer_splits_clitics_and_keeps_abbreviations() {
        assert_eq!(
            surfaces("mr. bennet didn't see anna's dog..."),
            vec!["mr.", "bennet", "did", "n't", "see", "anna", "'s", "dog", "..."]
        );
        assert_eq!(surfaces("well-known"), vec!["well-known"]);
    }

    #[test]
    fn tokenizer_keeps_unusual_whitespace() {
        assert_eq!(surfaces("a b\n\nc  d"), vec!["a", "b", "\n\n", "c", "  ", "d"]);
    }

    #[test]
    fn sentences_end_at_terminals_and_blank_lines() {
        let doc = annotate("it rained. \"really?\" she asked\n\nthe end");
        let sents: Vec<&str> = (0..doc.sents().len())
            .map(|i| doc.sentence_text(i))
            .collect();
        assert_eq!(sents, vec!["it rained.", "\"really?\"", "she asked", "the end"]);
    }

    #[test]
    fn shape_check_nouns_adjectives_verbs() {
        let doc = annotate("the quick fox jumps. the lazy dog sleeps.");
        assert_eq!(words_with(&doc, Pos::Noun), vec!["fox", "dog"]);
        assert_eq!(words_with(&doc, Pos::Adj), vec!["quick", "lazy"]);
        assert_eq!(words_with(&doc, Pos::Verb), vec!["jumps", "sleeps"]);
        assert_eq!(doc.tokens()[3].tag, "VBZ");
        assert_eq!(doc.tokens()[3].lemma, "jump");
    }

    #[test]
    fn context_separates_nouns_from_verbs() {
        let doc = annotate("they walk to the walk.");
        let tags: Vec<(&str, &str)> = doc
            .tokens()
            .iter()
            .map(|t| (t.text.as_str(), t.tag.as_str()))
            .collect();
        assert_eq!(
            tags,
            vec![
                ("they", "PRP"),
                ("walk", "VBP"),
                ("to", "IN"),
                ("the", "DT"),
                ("walk", "NN"),
                (".", "."),
            ]
        );
    }

    #[test]
    fn auxiliaries_and_participles() {
        let doc = annotate("she had gone. he had a horse. they were loved.");
        let by_text = |s: &str, n: usize| {
            doc.tokens()
                .iter()
                .filter(|t| t.text == s)
                .nth(n)
                .map(|t| (t.pos, t.tag.clone()))
                .unwrap()
        };
        assert_eq!(by_text("had", 0), (Pos::Aux, "VBD".to_string()));
        assert_eq!(by_text("gone", 0), (Pos::Verb, "VBN".to_string()));
        assert_eq!(by_text("had", 1), (Pos::Verb, "VBD".to_string()));
        assert_eq!(by_text("loved", 0), (Pos::Verb, "VBN".to_string()));
    }

    #[test]
    fn honorifics_introduce_people() {
        let doc = annotate("prince andrew smiled. the count said nothing.");
        let names: Vec<&str> = doc.ents().iter().map(|e| doc.entity_text(e)).collect();
        assert_eq!(names, vec!["andrew"]);
        assert_eq!(doc.ents()[0].label, "PERSON");
    }

    #[test]
    fn capitalised_names_next_to_speech_verbs() {
        let doc = annotate("\"Go,\" said Natasha Rostova. He went to Moscow.");
        let names: Vec<&str> = doc.ents().iter().map(|e| doc.entity_text(e)).collect();
        assert_eq!(names, vec!["Natasha Rostova"]);
    }

    #[test]
    fn disabled_stages_leave_parts_empty() {
        let stages = Stages {
            tagger: false,
            parser: false,
            ner: false,
        };
        let doc = HeuristicAnnotator::new()
            .annotate("mr. darcy walked home.", stages)
            .unwrap();
        assert!(doc.ents().is_empty());
        assert!(doc.noun_chunks().is_empty());
        assert!(doc.tokens()[1..4].iter().all(|t| t.pos == Pos::X));
        assert_eq!(doc.tokens()[4].pos, Pos::Punct);
    }
}
