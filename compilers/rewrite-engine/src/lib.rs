pub mod components;
pub mod error;
pub mod lexicon;
pub mod rules;
pub mod substitute;
pub mod tables;

use std::collections::BTreeSet;

use rewrite_annotate::Annotator;
use rewrite_protocol::Lexicon;
use tracing::debug;

pub use components::{extract_components, QuestionComponents};
pub use error::{LexiconError, RewriteError};
pub use lexicon::{from_archive_bytes, load_lexicon, to_archive_bytes};
pub use rules::structural_variations;
pub use substitute::apply_substitutions;
pub use tables::{SynonymTable, WhWordCategories};

/// Number of candidates kept by the substitution pass unless overridden.
pub const DEFAULT_SUBSTITUTION_LIMIT: usize = 2;

/// Question-to-keyword-query rewriter.
///
/// Owns the static tables and an annotator. Nothing is mutated after
/// construction, so repeated calls on the same query give the same output.
#[derive(Debug, Clone)]
pub struct Reformulator<A> {
    annotator: A,
    synonyms: SynonymTable,
    categories: WhWordCategories,
    substitution_limit: usize,
}

impl<A: Annotator> Reformulator<A> {
    /// Uses the built-in tables.
    pub fn new(annotator: A) -> Self {
        Self::with_lexicon(annotator, &Lexicon::builtin())
    }

    pub fn with_lexicon(annotator: A, lexicon: &Lexicon) -> Self {
        Self {
            annotator,
            synonyms: SynonymTable::from_entries(&lexicon.synonyms),
            categories: WhWordCategories::from_entries(&lexicon.categories),
            substitution_limit: DEFAULT_SUBSTITUTION_LIMIT,
        }
    }

    pub fn with_substitution_limit(mut self, limit: usize) -> Self {
        self.substitution_limit = limit;
        self
    }

    /// Annotates `query` and extracts its skeleton.
    pub fn components(&self, query: &str) -> Result<QuestionComponents, RewriteError> {
        let tokens = self.annotator.annotate(query)?;
        let comp = extract_components(&tokens);
        debug!(
            wh_word = %comp.wh_word,
            root_verb = %comp.root_verb,
            subject = %comp.subject,
            objects = ?comp.objects,
            modifiers = ?comp.modifiers,
            "extracted components"
        );
        Ok(comp)
    }

    /// Structural rewrites only. The substitution pass is not applied.
    pub fn reformulate(&self, query: &str) -> Result<Vec<String>, RewriteError> {
        let comp = self.components(query)?;
        Ok(self.rewrite_components(&comp))
    }

    /// Structural rewrites followed by [`Reformulator::apply_substitutions`].
    pub fn reformulate_with_substitutions(&self, query: &str) -> Result<Vec<String>, RewriteError> {
        let base = self.reformulate(query)?;
        Ok(self.apply_substitutions(&base))
    }

    pub fn rewrite_components(&self, comp: &QuestionComponents) -> Vec<String> {
        let variations = structural_variations(comp);
        debug!(wh_word = %comp.wh_word, count = variations.len(), "structural variations");
        variations
    }

    pub fn apply_substitutions<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<String> {
        apply_substitutions(candidates, &self.synonyms, self.substitution_limit)
    }

    pub fn categories(&self, wh_word: &str) -> Option<&BTreeSet<String>> {
        self.categories.get(wh_word)
    }

    pub fn wh_categories(&self) -> &WhWordCategories {
        &self.categories
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn substitution_limit(&self) -> usize {
        self.substitution_limit
    }
}
