//! Noun chunk detection.
//!
//! Pattern: `(DET|PRP$)? (ADJ|NUM)* (NOUN|PROPN)+`, matched greedily left to
//! right and never across a sentence boundary.

use std::ops::Range;

use super::doc::{Pos, Token};

pub(crate) fn noun_chunks(tokens: &[Token], sents: &[Range<usize>]) -> Vec<Range<usize>> {
    let mut chunks = Vec::new();
    for sent in sents {
        let mut i = sent.start;
        while i < sent.end {
            match match_chunk(tokens, i, sent.end) {
                Some(end) => {
                    chunks.push(i..end);
                    i = end;
                }
                None => i += 1,
            }
        }
    }
    chunks
}

/// Returns the exclusive end of a chunk starting at `start`.
fn match_chunk(tokens: &[Token], start: usize, limit: usize) -> Option<usize> {
    let mut end = start;
    if tokens[end].pos == Pos::Det || tokens[end].tag == "PRP$" {
        end += 1;
    }
    while end < limit && matches!(tokens[end].pos, Pos::Adj | Pos::Num) {
        end += 1;
    }
    let head_start = end;
    while end < limit && tokens[end].pos.is_nominal() {
        end += 1;
    }
    (end > head_start).then_some(end)
}
