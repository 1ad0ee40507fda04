use std::collections::HashSet;

use crate::tables::SynonymTable;

/// Lexical expansion pass. Every whitespace-separated word found in the
/// table yields one new candidate per substitute, with only that word
/// replaced. Source candidates themselves are not emitted. The result is
/// deduplicated in first-seen order and cut to `limit` entries.
pub fn apply_substitutions<S: AsRef<str>>(
    candidates: &[S],
    table: &SynonymTable,
    limit: usize,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for candidate in candidates {
        let words: Vec<&str> = candidate.as_ref().split_whitespace().collect();

        for (i, word) in words.iter().enumerate() {
            let Some(substitutes) = table.get(word) else {
                continue;
            };

            for similar in substitutes {
                if result.len() >= limit {
                    return result;
                }

                let mut new_words = words.clone();
                new_words[i] = similar.as_str();
                let variant = new_words.join(" ");

                if seen.insert(variant.clone()) {
                    result.push(variant);
                }
            }
        }
    }

    result
}
