//! The batch transformer capability and the pipeline that chains stages.

use std::fmt;

use tracing::debug;

use crate::error::TextError;

/// A batch text stage.
///
/// Implementations must return exactly one output per input, in input order.
pub trait TextTransformer {
    /// Short stage name used in logs and errors.
    fn name(&self) -> &str;

    /// Transforms a batch of texts.
    fn transform(&self, texts: &[String]) -> Result<Vec<String>, TextError>;
}

/// Splits one text into sentences.
///
/// Unlike a [`TextTransformer`] this changes the number of texts, so it is applied with
/// [`split_sentences`] rather than placed in a pipeline.
pub trait SentenceSplitter {
    /// Returns the sentences of `text`, in order.
    fn split(&self, text: &str) -> Vec<String>;
}

impl<F> SentenceSplitter for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn split(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Splits every text and concatenates the sentences in order.
pub fn split_sentences(splitter: &dyn SentenceSplitter, texts: &[String]) -> Vec<String> {
    let out: Vec<String> = texts.iter().flat_map(|t| splitter.split(t)).collect();
    debug!(texts = texts.len(), sentences = out.len(), "sentence split done");
    out
}

/// An ordered chain of text stages.
#[derive(Default)]
pub struct TextPipeline {
    /// Stages in application order.
    stages: Vec<Box<dyn TextTransformer>>,
}

impl TextPipeline {
    /// Creates an empty pipeline, which returns its input unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage.
    pub fn stage(mut self, stage: impl TextTransformer + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Appends an already boxed stage.
    pub fn push(&mut self, stage: Box<dyn TextTransformer>) {
        self.stages.push(stage);
    }

    /// Returns the stage names in order.
    pub fn names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns true if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every stage in order.
    ///
    /// Fails as soon as a stage errors or returns a batch of a different length.
    pub fn run(&self, texts: Vec<String>) -> Result<Vec<String>, TextError> {
        let mut current = texts;
        for stage in &self.stages {
            let next = stage.transform(&current)?;
            if next.len() != current.len() {
                return Err(TextError::LengthChanged {
                    stage: stage.name().to_string(),
                    expected: current.len(),
                    found: next.len(),
                });
            }
            debug!(stage = stage.name(), texts = next.len(), "text stage done");
            current = next;
        }
        Ok(current)
    }
}

impl TextTransformer for TextPipeline {
    fn name(&self) -> &str {
        "pipeline"
    }

    fn transform(&self, texts: &[String]) -> Result<Vec<String>, TextError> {
        self.run(texts.to_vec())
    }
}

impl fmt::Debug for TextPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextPipeline")
            .field("stages", &self.names())
            .finish()
    }
}
