//! Present / past / future sentence buckets from fine verb tags.
//!
//! The default future set (`VBC`, `VBF`) holds tags that Penn Treebank
//! taggers never emit, so that bucket stays empty unless the set is
//! overridden.

use log::debug;

use crate::annotate::{Doc, Pos};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenseSets {
    pub present: Vec<String>,
    pub past: Vec<String>,
    pub future: Vec<String>,
}

impl Default for TenseSets {
    fn default() -> Self {
        let owned = |tags: &[&str]| tags.iter().map(|t| t.to_string()).collect();
        TenseSets {
            present: owned(&["VBZ", "VBP", "VBG"]),
            past: owned(&["VBD", "VBN"]),
            future: owned(&["VBC", "VBF"]),
        }
    }
}

/// Sentence indices per bucket, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenseBuckets {
    /// Sentences holding at least one `VERB` token.
    pub with_verbs: Vec<usize>,
    pub present: Vec<usize>,
    pub past: Vec<usize>,
    pub future: Vec<usize>,
}

/// Buckets overlap freely; a verb sentence may also land in none of them.
pub fn classify(doc: &Doc, sets: &TenseSets) -> TenseBuckets {
    let mut buckets = TenseBuckets::default();
    for sent in 0..doc.sents().len() {
        let tokens = doc.sentence_tokens(sent);
        if !tokens.iter().any(|t| t.pos == Pos::Verb) {
            continue;
        }
        buckets.with_verbs.push(sent);
        let has = |set: &[String]| tokens.iter().any(|t| set.iter().any(|tag| *tag == t.tag));
        if has(&sets.present) {
            buckets.present.push(sent);
        }
        if has(&sets.past) {
            buckets.past.push(sent);
        }
        if has(&sets.future) {
            buckets.future.push(sent);
        }
    }
    if buckets.future.is_empty() && !buckets.with_verbs.is_empty() {
        debug!("no sentence matched the future tag set {:?}", sets.future);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::DocBuilder;

    fn doc() -> Doc {
        DocBuilder::new()
            .word("he", Pos::Pron, "PRP")
            .word("walks", Pos::Verb, "VBZ")
            .word(".", Pos::Punct, ".")
            .end_sentence()
            .word("she", Pos::Pron, "PRP")
            .word("walked", Pos::Verb, "VBD")
            .word("and", Pos::Cconj, "CC")
            .word("is", Pos::Aux, "VBZ")
            .word("singing", Pos::Verb, "VBG")
            .word(".", Pos::Punct, ".")
            .end_sentence()
            .word("what", Pos::Pron, "WP")
            .word("a", Pos::Det, "DT")
            .word("day", Pos::Noun, "NN")
            .word("!", Pos::Punct, ".")
            .end_sentence()
            .word("they", Pos::Pron, "PRP")
            .word("will", Pos::Aux, "MD")
            .word("go", Pos::Verb, "VB")
            .word(".", Pos::Punct, ".")
            .build()
    }

    #[test]
    fn sentences_are_bucketed_by_fine_tag() {
        let buckets = classify(&doc(), &TenseSets::default());
        assert_eq!(buckets.with_verbs, vec![0, 1, 3]);
        assert_eq!(buckets.present, vec![0, 1]);
        assert_eq!(buckets.past, vec![1]);
        assert!(buckets.future.is_empty());
    }

    #[test]
    fn bucket_members_are_verb_sentences() {
        let buckets = classify(&doc(), &TenseSets::default());
        for sent in buckets.present.iter().chain(&buckets.past).chain(&buckets.future) {
            assert!(buckets.with_verbs.contains(sent));
        }
    }

    #[test]
    fn custom_future_set_is_honoured() {
        let sets = TenseSets {
            future: vec!["MD".to_string()],
            ..TenseSets::default()
        };
        assert_eq!(classify(&doc(), &sets).future, vec![3]);
    }
}
