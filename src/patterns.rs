//! Local tag patterns: adjacent pairs, same-category runs, and sentence
//! filters built on them.

use std::ops::Range;

use crate::annotate::{Doc, Pos};

/// A matched token span and its owning sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub span: Range<usize>,
    pub sent: usize,
}

/// Every `first` token directly followed by a `second` token in the same
/// sentence.
pub fn adjacent_pairs(doc: &Doc, first: Pos, second: Pos) -> Vec<Match> {
    doc.tokens()
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| {
            pair[0].pos == first && pair[1].pos == second && pair[0].sent == pair[1].sent
        })
        .map(|(i, pair)| Match {
            span: i..i + 2,
            sent: pair[0].sent,
        })
        .collect()
}

/// Maximal runs of `pos` tokens at least `min_len` long. A run ends at any
/// other token and at a sentence boundary; each run is reported once.
pub fn runs(doc: &Doc, pos: Pos, min_len: usize) -> Vec<Match> {
    let min_len = min_len.max(1);
    let mut matches = Vec::new();
    for (sent, range) in doc.sents().iter().enumerate() {
        let mut run_start = range.start;
        let mut run_len = 0;
        for i in range.clone() {
            if doc.tokens()[i].pos == pos {
                if run_len == 0 {
                    run_start = i;
                }
                run_len += 1;
            } else {
                if run_len >= min_len {
                    matches.push(Match {
                        span: run_start..i,
                        sent,
                    });
                }
                run_len = 0;
            }
        }
        if run_len >= min_len {
            matches.push(Match {
                span: run_start..range.end,
                sent,
            });
        }
    }
    matches
}

/// Sentences holding a run of `min_len` or more `pos` tokens, each listed once.
pub fn sentences_with_run(doc: &Doc, pos: Pos, min_len: usize) -> Vec<usize> {
    let mut sents: Vec<usize> = runs(doc, pos, min_len).into_iter().map(|m| m.sent).collect();
    sents.dedup();
    sents
}

/// Non-blank sentences without a single `pos` token.
pub fn sentences_without(doc: &Doc, pos: Pos) -> Vec<usize> {
    (0..doc.sents().len())
        .filter(|&s| !doc.is_blank_sentence(s))
        .filter(|&s| doc.sentence_tokens(s).iter().all(|t| t.pos != pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::DocBuilder;

    // "the war hero statue stood . something good happened . peace"
    fn doc() -> Doc {
        DocBuilder::new()
            .word("the", Pos::Det, "DT")
            .word("war", Pos::Noun, "NN")
            .word("hero", Pos::Noun, "NN")
            .word("statue", Pos::Noun, "NN")
            .word("stood", Pos::Verb, "VBD")
            .word(".", Pos::Punct, ".")
            .end_sentence()
            .word("something", Pos::Noun, "NN")
            .word("good", Pos::Adj, "JJ")
            .word("happened", Pos::Verb, "VBD")
            .word(".", Pos::Punct, ".")
            .end_sentence()
            .word("peace", Pos::Noun, "NN")
            .build()
    }

    #[test]
    fn pairs_match_adjacent_tags() {
        let doc = doc();
        let pairs = adjacent_pairs(&doc, Pos::Noun, Pos::Adj);
        assert_eq!(pairs, vec![Match { span: 6..8, sent: 1 }]);
        assert_eq!(doc.span_text(&pairs[0].span), "something good");
    }

    #[test]
    fn pairs_do_not_cross_sentences() {
        let doc = DocBuilder::new()
            .word("old", Pos::Adj, "JJ")
            .end_sentence()
            .word("men", Pos::Noun, "NNS")
            .build();
        assert!(adjacent_pairs(&doc, Pos::Adj, Pos::Noun).is_empty());
    }

    #[test]
    fn runs_are_maximal_and_homogeneous() {
        let doc = doc();
        let found = runs(&doc, Pos::Noun, 2);
        assert_eq!(found, vec![Match { span: 1..4, sent: 0 }]);
        for m in &found {
            assert!(m.span.len() >= 2);
            assert!(doc.tokens()[m.span.clone()].iter().all(|t| t.pos == Pos::Noun));
        }
        assert_eq!(runs(&doc, Pos::Noun, 1).len(), 3);
    }

    #[test]
    fn each_run_is_reported_and_sentences_listed_once() {
        // "war hero met army men there . peace talks"
        let doc = DocBuilder::new()
            .word("war", Pos::Noun, "NN")
            .word("hero", Pos::Noun, "NN")
            .word("met", Pos::Verb, "VBD")
            .word("army", Pos::Noun, "NN")
            .word("men", Pos::Noun, "NNS")
            .word("there", Pos::Adv, "RB")
            .word(".", Pos::Punct, ".")
            .end_sentence()
            .word("peace", Pos::Noun, "NN")
            .word("talks", Pos::Noun, "NNS")
            .build();
        assert_eq!(
            runs(&doc, Pos::Noun, 2),
            vec![
                Match { span: 0..2, sent: 0 },
                Match { span: 3..5, sent: 0 },
                Match { span: 7..9, sent: 1 },
            ]
        );
        assert_eq!(sentences_with_run(&doc, Pos::Noun, 2), vec![0, 1]);
    }

    #[test]
    fn sentence_filters() {
        let doc = doc();
        assert_eq!(sentences_with_run(&doc, Pos::Noun, 2), vec![0]);
        assert_eq!(sentences_without(&doc, Pos::Adj), vec![0, 2]);
        assert_eq!(sentences_without(&doc, Pos::Verb), vec![2]);
    }
}
