//! Annotation pipeline: turns raw text into an annotated [`Doc`].

mod chunker;
mod doc;
mod heuristic;
mod lexicon;
mod spacy;
mod stopwords;

use std::sync::OnceLock;

use clap::ValueEnum;
use log::info;

pub use doc::{Doc, DocBuilder, Entity, Pos, Token};
pub use heuristic::HeuristicAnnotator;
pub use stopwords::is_stop_word;

use crate::error::Result;

/// Optional pipeline stages. Sentence splitting always runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stages {
    pub tagger: bool,
    /// Phrase structure; gates noun chunks.
    pub parser: bool,
    pub ner: bool,
}

impl Default for Stages {
    fn default() -> Self {
        Stages {
            tagger: true,
            parser: true,
            ner: true,
        }
    }
}

impl Stages {
    pub fn without(mut self, stage: Stage) -> Self {
        match stage {
            Stage::Tagger => self.tagger = false,
            Stage::Parser => self.parser = false,
            Stage::Ner => self.ner = false,
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Stage {
    Tagger,
    Parser,
    Ner,
}

/// Something that can annotate text.
pub trait Annotator: Send + Sync {
    fn name(&self) -> &str;
    fn annotate(&self, text: &str, stages: Stages) -> Result<Doc>;
}

type Factory = Box<dyn Fn() -> Box<dyn Annotator> + Send + Sync>;

/// Reusable pipeline handle. The annotator (the "model") is built on first
/// use and kept for every later call.
pub struct Pipeline {
    stages: Stages,
    factory: Factory,
    annotator: OnceLock<Box<dyn Annotator>>,
}

impl Pipeline {
    pub fn new<F>(stages: Stages, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Annotator> + Send + Sync + 'static,
    {
        Pipeline {
            stages,
            factory: Box::new(factory),
            annotator: OnceLock::new(),
        }
    }

    /// Pipeline backed by the built-in English annotator.
    pub fn heuristic(stages: Stages) -> Self {
        Self::new(stages, || Box::new(HeuristicAnnotator::new()))
    }

    pub fn stages(&self) -> Stages {
        self.stages
    }

    pub fn is_loaded(&self) -> bool {
        self.annotator.get().is_some()
    }

    pub fn annotator(&self) -> &dyn Annotator {
        let annotator = self.annotator.get_or_init(|| {
            let annotator = (self.factory)();
            info!("loaded annotator {}", annotator.name());
            annotator
        });
        &**annotator
    }

    pub fn annotate(&self, text: &str) -> Result<Doc> {
        self.annotator().annotate(text, self.stages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn pipeline_loads_annotator_once() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&loads);
        let pipeline = Pipeline::new(Stages::default(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Box::new(HeuristicAnnotator::new())
        });
        assert!(!pipeline.is_loaded());
        pipeline.annotate("the dog sleeps.").unwrap();
        pipeline.annotate("the cat sleeps.").unwrap();
        assert!(pipeline.is_loaded());
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn stages_can_be_switched_off() {
        let stages = Stages::default().without(Stage::Ner).without(Stage::Parser);
        assert!(stages.tagger);
        assert!(!stages.parser);
        assert!(!stages.ner);
    }
}
