//! One analysis run: load, annotate once, aggregate, write every report.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use log::{debug, info};
use serde::Serialize;

use crate::aggregate::{
    Aggregate, Category, Selector, aggregate_doc, average_per_paragraph,
    average_per_sentence, clean_words, favorite_category,
};
use crate::annotate::{Doc, Pipeline, Pos, Stages};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::loader::{load_annotations, load_text};
use crate::paragraphs::split_paragraphs;
use crate::patterns::{sentences_with_run, sentences_without};
use crate::report::ReportWriter;
use crate::tense::{TenseBuckets, TenseSets, classify};

const FREQUENCY_HEADER: &str = "Frequencies";

/// Results that need POS tags.
#[derive(Debug, Clone, PartialEq)]
pub struct PosAnalysis {
    pub nouns: Aggregate,
    pub adjectives: Aggregate,
    pub verbs: Aggregate,
    pub adjectives_per_sentence: Option<f64>,
    pub adjectives_per_paragraph: Option<f64>,
    pub noun_adj: Aggregate,
    pub adj_noun: Aggregate,
    /// Sentence indices holding two or more adjacent nouns / adjectives / verbs.
    pub noun_runs: Vec<usize>,
    pub adjective_runs: Vec<usize>,
    pub verb_runs: Vec<usize>,
    pub without_nouns: Vec<usize>,
    pub without_adjectives: Vec<usize>,
    pub without_verbs: Vec<usize>,
    pub favorite_category: Option<Category>,
    pub tenses: TenseBuckets,
}

/// Everything computed from one doc. Parts whose stage was disabled are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub clean_words: Vec<String>,
    pub pos: Option<PosAnalysis>,
    pub noun_phrases: Option<Aggregate>,
    pub names: Option<Aggregate>,
    pub paragraphs: usize,
}

fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let instant = Instant::now();
    let out = f();
    debug!("{label} finished in {:?}", instant.elapsed());
    out
}

pub fn analyze(doc: &Doc, stages: Stages, top_n: usize, tense_sets: &TenseSets) -> Analysis {
    let pos = stages.tagger.then(|| {
        let by_pos = |pos| {
            timed(pos_label(pos), || {
                aggregate_doc(doc, &Selector::Pos(pos), top_n)
            })
        };
        let nouns = by_pos(Pos::Noun);
        let adjectives = by_pos(Pos::Adj);
        let verbs = by_pos(Pos::Verb);
        let favorite_category =
            favorite_category(nouns.count(), adjectives.count(), verbs.count());
        PosAnalysis {
            adjectives_per_sentence: average_per_sentence(doc, Pos::Adj),
            adjectives_per_paragraph: average_per_paragraph(doc, Pos::Adj),
            noun_adj: aggregate_doc(doc, &Selector::Adjacent(Pos::Noun, Pos::Adj), top_n),
            adj_noun: aggregate_doc(doc, &Selector::Adjacent(Pos::Adj, Pos::Noun), top_n),
            noun_runs: sentences_with_run(doc, Pos::Noun, 2),
            adjective_runs: sentences_with_run(doc, Pos::Adj, 2),
            verb_runs: sentences_with_run(doc, Pos::Verb, 2),
            without_nouns: sentences_without(doc, Pos::Noun),
            without_adjectives: sentences_without(doc, Pos::Adj),
            without_verbs: sentences_without(doc, Pos::Verb),
            favorite_category,
            tenses: timed("tense", || classify(doc, tense_sets)),
            nouns,
            adjectives,
            verbs,
        }
    });
    if pos.is_none() {
        info!("tagger disabled, skipping part-of-speech reports");
    }
    let noun_phrases = stages
        .parser
        .then(|| aggregate_doc(doc, &Selector::NounChunks, top_n));
    if noun_phrases.is_none() {
        info!("parser disabled, skipping noun phrase reports");
    }
    let names = stages
        .ner
        .then(|| aggregate_doc(doc, &Selector::EntityLabel("PERSON".to_string()), top_n));
    if names.is_none() {
        info!("entity recognizer disabled, skipping name reports");
    }
    Analysis {
        clean_words: clean_words(doc),
        pos,
        noun_phrases,
        names,
        paragraphs: split_paragraphs(doc).len(),
    }
}

fn pos_label(pos: Pos) -> &'static str {
    match pos {
        Pos::Noun => "nouns",
        Pos::Adj => "adjectives",
        Pos::Verb => "verbs",
        _ => "tokens",
    }
}

/// Count, list, frequency table and top-N for one category.
fn write_category(
    writer: &mut ReportWriter,
    agg: &Aggregate,
    stem: &str,
    table_stem: &str,
    plural: &str,
) -> Result<()> {
    let title = capitalize(plural);
    writer.write_scalar(
        &format!("{stem}_count"),
        &format!("Total number of {plural}"),
        Some(agg.count()),
    )?;
    writer.write_list(&format!("{stem}_list"), &format!("list of {plural}"), &agg.items)?;
    writer.write_table(
        &format!("{table_stem}_frequency"),
        &format!("{title} Frequencies"),
        [title.as_str(), FREQUENCY_HEADER],
        &agg.table,
    )?;
    writer.write_ranking(
        &format!("top_ten_{stem}_frequency"),
        &format!("Favorite {} {title}", agg.top.len()),
        [title.as_str(), FREQUENCY_HEADER],
        &agg.top,
    )?;
    Ok(())
}

/// Favorite, list and frequency table for one phrase kind.
fn write_phrases(writer: &mut ReportWriter, agg: &Aggregate, kind: &str) -> Result<()> {
    let stem = kind.replace('-', "_");
    writer.write_scalar(
        &format!("favorite_{stem}_phrase"),
        &format!("Favorite {kind} phrase"),
        agg.favorite(),
    )?;
    writer.write_list(
        &format!("{stem}_phrase_list"),
        &format!("list of {kind} phrases"),
        &agg.items,
    )?;
    writer.write_table(
        &format!("{stem}_phrase_frequency"),
        &format!("{kind} phrase frequencies"),
        [format!("{kind} phrases").as_str(), "frequencies"],
        &agg.table,
    )?;
    Ok(())
}

fn write_sentences(
    writer: &mut ReportWriter,
    doc: &Doc,
    name: &str,
    caption: &str,
    sents: &[usize],
) -> Result<()> {
    let texts: Vec<&str> = sents.iter().map(|&s| doc.sentence_text(s)).collect();
    writer.write_list(name, caption, &texts)?;
    Ok(())
}

/// Writes every CSV report of `analysis` in a fixed order.
pub fn write_reports(doc: &Doc, analysis: &Analysis, writer: &mut ReportWriter) -> Result<()> {
    writer.write_list(
        "clean_text",
        "Words without stop_words, spaces, punctuations",
        &analysis.clean_words,
    )?;

    if let Some(pos) = &analysis.pos {
        write_category(writer, &pos.nouns, "noun", "noun", "nouns")?;

        write_category(writer, &pos.adjectives, "adj", "adjective", "adjectives")?;
        writer.write_scalar("favorite_adj", "Favorite adjective", pos.adjectives.favorite())?;
        writer.write_scalar(
            "average_per_sentences",
            "Average number of adjectives per sentences",
            pos.adjectives_per_sentence,
        )?;
        writer.write_scalar(
            "average_per_paragraphs",
            "Average number of adjectives per paragraphs",
            pos.adjectives_per_paragraph,
        )?;

        write_category(writer, &pos.verbs, "verb", "verb", "verbs")?;
    }

    if let Some(phrases) = &analysis.noun_phrases {
        write_phrases(writer, phrases, "noun-noun")?;
    }

    if let Some(pos) = &analysis.pos {
        write_phrases(writer, &pos.noun_adj, "noun-adj")?;
        write_phrases(writer, &pos.adj_noun, "adj-noun")?;

        for (name, label, sents) in [
            ("nouns", "nouns", &pos.noun_runs),
            ("adj", "adj", &pos.adjective_runs),
            ("verbs", "verbs", &pos.verb_runs),
        ] {
            write_sentences(
                writer,
                doc,
                &format!("sentences_with_two_or_more_{name}"),
                &format!("list of sentences with two or more {label}"),
                sents,
            )?;
        }
        for (name, label, sents) in [
            ("noun", "nouns", &pos.without_nouns),
            ("adj", "adj", &pos.without_adjectives),
            ("verbs", "verbs", &pos.without_verbs),
        ] {
            write_sentences(
                writer,
                doc,
                &format!("sentences_without_{name}"),
                &format!("list of sentences without {label}"),
                sents,
            )?;
        }
    }

    if let Some(names) = &analysis.names {
        writer.write_scalar("favorite_name", "Favorite character", names.favorite())?;
        writer.write_list("name_list", "list of person names", &names.items)?;
        writer.write_table(
            "name_frequency",
            "Person Name Frequencies",
            ["Person Names", FREQUENCY_HEADER],
            &names.table,
        )?;
    }

    if let Some(pos) = &analysis.pos {
        writer.write_scalar(
            "favorite",
            "Favorite among nouns, adjectives and verbs",
            pos.favorite_category,
        )?;
        let tenses = &pos.tenses;
        for (name, caption, sents) in [
            ("present", "Present", &tenses.present),
            ("past", "Past", &tenses.past),
            ("future", "Future", &tenses.future),
        ] {
            write_sentences(
                writer,
                doc,
                &format!("{name}_tense_sentences"),
                &format!("{caption} tense sentences"),
                sents,
            )?;
        }
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Manifest of one run, written as `summary.json` and printed to stdout.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generated_at: String,
    pub source: String,
    pub annotator: String,
    pub characters: usize,
    pub tokens: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub noun_count: Option<usize>,
    pub adjective_count: Option<usize>,
    pub verb_count: Option<usize>,
    pub favorite_category: Option<Category>,
    pub favorite_adjective: Option<String>,
    pub favorite_name: Option<String>,
    pub top_nouns: Vec<(String, usize)>,
    pub top_adjectives: Vec<(String, usize)>,
    pub top_verbs: Vec<(String, usize)>,
    pub reports: Vec<PathBuf>,
}

impl RunSummary {
    fn new(doc: &Doc, analysis: &Analysis, source: String, annotator: String) -> Self {
        let pos = analysis.pos.as_ref();
        RunSummary {
            generated_at: Local::now().to_rfc3339(),
            source,
            annotator,
            characters: doc.text().chars().count(),
            tokens: doc.tokens().len(),
            sentences: doc.sents().len(),
            paragraphs: analysis.paragraphs,
            noun_count: pos.map(|p| p.nouns.count()),
            adjective_count: pos.map(|p| p.adjectives.count()),
            verb_count: pos.map(|p| p.verbs.count()),
            favorite_category: pos.and_then(|p| p.favorite_category),
            favorite_adjective: pos.and_then(|p| p.adjectives.favorite().map(str::to_string)),
            favorite_name: analysis
                .names
                .as_ref()
                .and_then(|n| n.favorite().map(str::to_string)),
            top_nouns: pos.map(|p| p.nouns.top.clone()).unwrap_or_default(),
            top_adjectives: pos.map(|p| p.adjectives.top.clone()).unwrap_or_default(),
            top_verbs: pos.map(|p| p.verbs.top.clone()).unwrap_or_default(),
            reports: Vec::new(),
        }
    }

    /// Plain-text overview for the terminal.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Analyzed {} characters ({} tokens, {} sentences, {} paragraphs) from {} with {}",
            self.characters,
            self.tokens,
            self.sentences,
            self.paragraphs,
            self.source,
            self.annotator
        );
        let counts = (self.noun_count, self.adjective_count, self.verb_count);
        if let (Some(n), Some(a), Some(v)) = counts {
            let _ = writeln!(out, "Nouns: {n}  Adjectives: {a}  Verbs: {v}");
        }
        if let Some(cat) = self.favorite_category {
            let _ = writeln!(out, "Favorite category: {cat}");
        }
        for (title, top) in [
            ("nouns", &self.top_nouns),
            ("adjectives", &self.top_adjectives),
            ("verbs", &self.top_verbs),
        ] {
            if top.is_empty() {
                continue;
            }
            let _ = writeln!(out, "Top {} {title}:", top.len());
            for (item, n) in top {
                let _ = writeln!(out, "  {item}\t{n}");
            }
        }
        let _ = write!(out, "Wrote {} reports", self.reports.len());
        out
    }
}

/// Runs the whole batch described by `config`.
///
/// The output directory is checked (or created) before any input is read,
/// so a bad destination fails fast.
pub fn run(config: &AnalysisConfig) -> Result<RunSummary> {
    config.validate()?;
    let mut writer = if config.create_output_dir {
        ReportWriter::create(&config.output_dir, config.export_format)?
    } else {
        ReportWriter::new(&config.output_dir, config.export_format)?
    };

    let (doc, source, annotator, stages) = match &config.annotations {
        Some(path) => {
            let doc = timed("load annotations", || load_annotations(path))?;
            (
                doc,
                path.display().to_string(),
                "spacy-json".to_string(),
                Stages::default(),
            )
        }
        None => {
            let text = timed("load", || {
                load_text(&config.input, config.char_limit, config.lowercase)
            })?;
            let pipeline = Pipeline::heuristic(config.stages);
            let doc = timed("annotate", || pipeline.annotate(&text))?;
            (
                doc,
                config.input.display().to_string(),
                pipeline.annotator().name().to_string(),
                config.stages,
            )
        }
    };

    let analysis = timed("analyze", || {
        analyze(&doc, stages, config.top_n, &config.tense_sets)
    });
    timed("write reports", || write_reports(&doc, &analysis, &mut writer))?;

    let mut summary = RunSummary::new(&doc, &analysis, source, annotator);
    summary.reports = writer.written().to_vec();
    let path = writer.write_json("summary", &summary)?;
    summary.reports.push(path);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::DocBuilder;
    use crate::config::ExportFormat;
    use tempfile::tempdir;

    fn doc() -> Doc {
        DocBuilder::new()
            .word("prince", Pos::Propn, "NNP")
            .word("andrew", Pos::Propn, "NNP")
            .word("saw", Pos::Verb, "VBD")
            .word("the", Pos::Det, "DT")
            .word("old", Pos::Adj, "JJ")
            .word("oak", Pos::Noun, "NN")
            .word(".", Pos::Punct, ".")
            .entity(1..2, "PERSON")
            .end_sentence()
            .word("andrew", Pos::Propn, "NNP")
            .word("walks", Pos::Verb, "VBZ")
            .word(".", Pos::Punct, ".")
            .entity(7..8, "PERSON")
            .build()
    }

    #[test]
    fn analysis_covers_every_stage() {
        let a = analyze(&doc(), Stages::default(), 10, &TenseSets::default());
        let pos = a.pos.as_ref().unwrap();
        assert_eq!(pos.nouns.items, vec!["oak"]);
        assert_eq!(pos.verbs.count(), 2);
        assert_eq!(pos.favorite_category, Some(Category::Verb));
        assert_eq!(pos.tenses.present, vec![1]);
        assert_eq!(pos.tenses.past, vec![0]);
        assert_eq!(pos.without_adjectives, vec![1]);
        assert_eq!(a.names.as_ref().unwrap().favorite(), Some("andrew"));
        assert_eq!(
            a.noun_phrases.as_ref().unwrap().items,
            vec!["prince andrew", "the old oak", "andrew"]
        );
        assert_eq!(a.paragraphs, 1);
    }

    #[test]
    fn disabled_stages_skip_their_results() {
        let stages = Stages {
            tagger: false,
            parser: false,
            ner: false,
        };
        let a = analyze(&doc(), stages, 10, &TenseSets::default());
        assert!(a.pos.is_none());
        assert!(a.noun_phrases.is_none());
        assert!(a.names.is_none());
        assert!(!a.clean_words.is_empty());
    }

    #[test]
    fn reports_are_written_with_fixed_names() {
        let td = tempdir().unwrap();
        let doc = doc();
        let a = analyze(&doc, Stages::default(), 10, &TenseSets::default());
        let mut w = ReportWriter::new(td.path(), ExportFormat::Csv).unwrap();
        write_reports(&doc, &a, &mut w).unwrap();
        for name in [
            "clean_text.csv",
            "noun_count.csv",
            "top_ten_adj_frequency.csv",
            "verb_frequency.csv",
            "favorite_noun_noun_phrase.csv",
            "adj_noun_phrase_list.csv",
            "sentences_with_two_or_more_verbs.csv",
            "sentences_without_noun.csv",
            "name_frequency.csv",
            "favorite.csv",
            "future_tense_sentences.csv",
        ] {
            assert!(td.path().join(name).is_file(), "missing {name}");
        }
        let favorite = std::fs::read_to_string(td.path().join("favorite.csv")).unwrap();
        assert_eq!(favorite.lines().nth(1), Some("verb"));
    }

    #[test]
    fn summary_text_lists_counts() {
        let doc = doc();
        let a = analyze(&doc, Stages::default(), 10, &TenseSets::default());
        let summary = RunSummary::new(&doc, &a, "memory".into(), "test".into());
        let text = summary.to_text();
        assert!(text.contains("Nouns: 1  Adjectives: 1  Verbs: 2"));
        assert!(text.contains("Top 2 verbs:\n  saw\t1\n  walks\t1"));
    }
}
