//! Frequency counting over annotated items.
//!
//! One aggregator serves every report: a [`Selector`] picks the items (tokens
//! of a category, entities of a label, noun chunks, adjacent tag pairs) and
//! [`aggregate`] turns them into a count, a frequency table, a top-N ranking
//! and a favorite.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::annotate::{Doc, Pos};
use crate::paragraphs::split_paragraphs;
use crate::patterns::adjacent_pairs;

/// Item counts that remember the order in which keys were first seen, so
/// that every tie-break is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: &str) {
        match self.counts.get_mut(item) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(item.to_string(), 1);
                self.order.push(item.to_string());
            }
        }
    }

    pub fn get(&self, item: &str) -> Option<usize> {
        self.counts.get(item).copied()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order
            .iter()
            .map(|item| (item.as_str(), self.counts[item.as_str()]))
    }

    pub fn sorted_by_key(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// All entries by descending count; equal counts keep first-seen order.
    pub fn ranking(&self) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> =
            self.iter().map(|(item, n)| (item.to_string(), n)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.ranking();
        ranked.truncate(n);
        ranked
    }

    /// Most frequent item; the earliest seen wins a tie. `None` when empty.
    pub fn favorite(&self) -> Option<(&str, usize)> {
        self.iter()
            .fold(None::<(&str, usize)>, |best, (item, n)| match best {
                Some((_, best_n)) if best_n >= n => best,
                _ => Some((item, n)),
            })
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for item in iter {
            table.add(item.as_ref());
        }
        table
    }
}

/// Counts each item in `items`.
///
/// ```
/// use pos_analysis::count_items;
/// let table = count_items(&["one", "two", "two", "three", "three", "three"]);
/// assert_eq!(table.get("three"), Some(3));
/// assert_eq!(table.top(2), vec![("three".to_string(), 3), ("two".to_string(), 2)]);
/// ```
pub fn count_items<S: AsRef<str>>(items: &[S]) -> FrequencyTable {
    items.iter().collect()
}

/// Result of one aggregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    /// Matching items in document order.
    pub items: Vec<String>,
    pub table: FrequencyTable,
    pub top: Vec<(String, usize)>,
}

impl Aggregate {
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn favorite(&self) -> Option<&str> {
        self.table.favorite().map(|(item, _)| item)
    }
}

pub fn aggregate(items: Vec<String>, top_n: usize) -> Aggregate {
    let table = count_items(&items);
    let top = table.top(top_n);
    Aggregate { items, table, top }
}

/// What to aggregate over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Token texts of one coarse category.
    Pos(Pos),
    /// Entity texts with this label.
    EntityLabel(String),
    NounChunks,
    /// Two adjacent tokens, first category then second.
    Adjacent(Pos, Pos),
}

pub fn select(doc: &Doc, selector: &Selector) -> Vec<String> {
    match selector {
        Selector::Pos(pos) => doc
            .tokens()
            .iter()
            .filter(|t| t.pos == *pos)
            .map(|t| t.text.clone())
            .collect(),
        Selector::EntityLabel(label) => doc
            .ents()
            .iter()
            .filter(|e| e.label == *label)
            .map(|e| doc.entity_text(e).to_string())
            .collect(),
        Selector::NounChunks => doc
            .noun_chunks()
            .iter()
            .map(|span| doc.span_text(span).to_string())
            .collect(),
        Selector::Adjacent(first, second) => adjacent_pairs(doc, *first, *second)
            .iter()
            .map(|m| doc.span_text(&m.span).to_string())
            .collect(),
    }
}

pub fn aggregate_doc(doc: &Doc, selector: &Selector, top_n: usize) -> Aggregate {
    aggregate(select(doc, selector), top_n)
}

/// Token texts that are neither stop words, punctuation nor whitespace.
pub fn clean_words(doc: &Doc) -> Vec<String> {
    doc.tokens()
        .iter()
        .filter(|t| !t.is_stop && !t.is_punct && !t.is_space)
        .map(|t| t.text.clone())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Noun,
    Adjective,
    Verb,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Noun => "noun",
            Category::Adjective => "adjective",
            Category::Verb => "verb",
        })
    }
}

/// Category with the most items. Ties go to noun, then adjective, then verb.
pub fn favorite_category(nouns: usize, adjectives: usize, verbs: usize) -> Option<Category> {
    [
        (Category::Noun, nouns),
        (Category::Adjective, adjectives),
        (Category::Verb, verbs),
    ]
    .into_iter()
    .filter(|(_, n)| *n > 0)
    .fold(None::<(Category, usize)>, |best, (cat, n)| match best {
        Some((_, best_n)) if best_n >= n => best,
        _ => Some((cat, n)),
    })
    .map(|(cat, _)| cat)
}

fn mean(counts: impl Iterator<Item = usize>) -> Option<f64> {
    let (units, total) = counts
        .filter(|&n| n > 0)
        .fold((0usize, 0usize), |(units, total), n| (units + 1, total + n));
    (units > 0).then(|| total as f64 / units as f64)
}

/// Mean number of `pos` tokens over the sentences that contain any.
pub fn average_per_sentence(doc: &Doc, pos: Pos) -> Option<f64> {
    mean(
        (0..doc.sents().len())
            .map(|s| doc.sentence_tokens(s).iter().filter(|t| t.pos == pos).count()),
    )
}

/// Mean number of `pos` tokens over the paragraphs that contain any.
pub fn average_per_paragraph(doc: &Doc, pos: Pos) -> Option<f64> {
    mean(split_paragraphs(doc).iter().map(|p| {
        doc.tokens()[p.tokens.clone()]
            .iter()
            .filter(|t| t.pos == pos)
            .count()
    }))
}
