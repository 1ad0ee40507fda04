use std::collections::HashMap;

use rewrite_protocol::AnnotatedSentence;

use crate::conll::{parse_conll, ConllSentence};
use crate::error::AnnotateError;
use crate::Annotator;

/// Serves annotations prepared ahead of time, keyed by the query text.
#[derive(Debug, Clone, Default)]
pub struct FixedAnnotator {
    sentences: HashMap<String, AnnotatedSentence>,
}

impl FixedAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every sentence of a CoNLL-U document. Sentences are keyed by
    /// their `# text` comment, or by their forms joined with spaces.
    pub fn from_conll(input: &str) -> Result<Self, AnnotateError> {
        let mut annotator = Self::new();
        for sentence in parse_conll(input)? {
            annotator.insert_sentence(sentence);
        }
        Ok(annotator)
    }

    pub fn insert(&mut self, query: impl Into<String>, tokens: AnnotatedSentence) {
        self.sentences.insert(query.into().trim().to_string(), tokens);
    }

    fn insert_sentence(&mut self, sentence: ConllSentence) {
        let key = sentence.key();
        self.insert(key, sentence.tokens);
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl Annotator for FixedAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedSentence, AnnotateError> {
        self.sentences
            .get(text.trim())
            .cloned()
            .ok_or_else(|| AnnotateError::UnknownQuery(text.to_string()))
    }
}
