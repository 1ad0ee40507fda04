use std::collections::{BTreeSet, HashMap};

use rewrite_protocol::{CategoryEntry, Lexicon, SynonymEntry};

/// Trigger word -> ordered substitutes. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// A trigger listed twice keeps its first entry.
    pub fn from_entries(entries: &[SynonymEntry]) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            map.entry(entry.trigger.clone())
                .or_insert_with(|| entry.substitutes.clone());
        }
        Self { entries: map }
    }

    pub fn builtin() -> Self {
        Self::from_entries(&Lexicon::builtin().synonyms)
    }

    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Semantic categories per interrogative. Carried for rule extensions;
/// no current rule reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhWordCategories {
    entries: HashMap<String, BTreeSet<String>>,
}

impl WhWordCategories {
    /// Repeated wh-words merge their labels.
    pub fn from_entries(entries: &[CategoryEntry]) -> Self {
        let mut map: HashMap<String, BTreeSet<String>> = HashMap::with_capacity(entries.len());
        for entry in entries {
            map.entry(entry.wh_word.clone())
                .or_default()
                .extend(entry.labels.iter().cloned());
        }
        Self { entries: map }
    }

    pub fn builtin() -> Self {
        Self::from_entries(&Lexicon::builtin().categories)
    }

    pub fn get(&self, wh_word: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(wh_word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_synonyms() {
        let table = SynonymTable::builtin();
        assert_eq!(table.len(), 7);
        assert_eq!(table.get("is").unwrap(), ["was", "are", "exists"]);
        assert_eq!(table.get("who").unwrap(), ["person", "individual"]);
        // Lookups are case-sensitive
        assert!(table.get("Is").is_none());
        assert!(table.get("dog").is_none());
    }

    #[test]
    fn test_duplicate_trigger_keeps_first() {
        let entries = vec![
            SynonymEntry { trigger: "has".into(), substitutes: vec!["owns".into()] },
            SynonymEntry { trigger: "has".into(), substitutes: vec!["holds".into()] },
        ];
        let table = SynonymTable::from_entries(&entries);
        assert_eq!(table.get("has").unwrap(), ["owns"]);
    }

    #[test]
    fn test_builtin_categories() {
        let categories = WhWordCategories::builtin();
        assert_eq!(categories.len(), 6);

        let what: Vec<&str> = categories.get("what").unwrap().iter().map(String::as_str).collect();
        assert_eq!(what, vec!["definition", "description", "purpose"]);
        assert!(categories.get("how").unwrap().contains("manner"));
        assert!(categories.get("which").is_none());
    }

    #[test]
    fn test_category_merge() {
        let entries = vec![
            CategoryEntry { wh_word: "why".into(), labels: vec!["reason".into()] },
            CategoryEntry { wh_word: "why".into(), labels: vec!["cause".into(), "reason".into()] },
        ];
        let categories = WhWordCategories::from_entries(&entries);
        assert_eq!(categories.get("why").unwrap().len(), 2);
    }
}
