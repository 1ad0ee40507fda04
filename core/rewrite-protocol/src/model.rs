use rkyv::{Archive, Deserialize, Serialize};
use crate::dependency::DependencyLabel;
use crate::ids::TokenId;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Penn Treebank tags for interrogatives (WDT, WP, WP$, WRB) share this prefix.
pub const INTERROGATIVE_TAG_PREFIX: char = 'W';

/// One token as emitted by the external annotator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct AnnotatedToken {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: TokenId,
    pub text: String,
    pub tag: String,
    pub dep: DependencyLabel,
    #[cfg_attr(feature = "serde", serde(default))]
    pub head: TokenId,
}

impl AnnotatedToken {
    pub fn new(id: u32, text: &str, tag: &str, dep: DependencyLabel, head: u32) -> Self {
        Self {
            id: TokenId(id),
            text: text.to_string(),
            tag: tag.to_string(),
            dep,
            head: TokenId(head),
        }
    }

    pub fn is_interrogative(&self) -> bool {
        self.tag.starts_with(INTERROGATIVE_TAG_PREFIX)
    }
}

pub type AnnotatedSentence = Vec<AnnotatedToken>;

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct SynonymEntry {
    pub trigger: String,
    pub substitutes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct CategoryEntry {
    pub wh_word: String,
    pub labels: Vec<String>,
}

/// Source form of the rewriter's static tables.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub synonyms: Vec<SynonymEntry>,
    pub categories: Vec<CategoryEntry>,
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|w| w.to_string()).collect()
}

fn synonym(trigger: &str, substitutes: &[&str]) -> SynonymEntry {
    SynonymEntry { trigger: trigger.to_string(), substitutes: words(substitutes) }
}

fn category(wh_word: &str, labels: &[&str]) -> CategoryEntry {
    CategoryEntry { wh_word: wh_word.to_string(), labels: words(labels) }
}

impl Lexicon {
    /// The tables shipped with the engine (mirrors `data/lexicon.json`).
    pub fn builtin() -> Self {
        Self {
            version: 1,
            synonyms: alloc::vec![
                // Question words
                synonym("what", &["define", "explain", "describe"]),
                synonym("when", &["time", "date", "period"]),
                synonym("where", &["location", "place", "area"]),
                synonym("who", &["person", "individual"]),
                // Common verbs
                synonym("is", &["was", "are", "exists"]),
                synonym("do", &["does", "did", "perform"]),
                synonym("has", &["have", "had", "possess"]),
            ],
            categories: alloc::vec![
                category("what", &["definition", "description", "purpose"]),
                category("when", &["time", "date", "period"]),
                category("where", &["location", "place", "direction"]),
                category("who", &["person", "agent", "doer"]),
                category("why", &["reason", "cause", "purpose"]),
                category("how", &["method", "manner", "degree"]),
            ],
        }
    }
}
