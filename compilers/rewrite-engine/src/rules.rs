use tracing::debug;

use crate::components::QuestionComponents;

const COPULAS: [&str; 2] = ["is", "are"];
const DEFINITION_SUFFIXES: [&str; 4] = ["definition", "meaning", "explanation", "basics"];

/// Rewrites a skeleton into keyword-style candidates. Exactly one rule runs,
/// chosen by the wh-word. Candidates may repeat.
pub fn structural_variations(comp: &QuestionComponents) -> Vec<String> {
    match comp.wh_word.as_str() {
        "what" => what_variations(comp),
        "when" => when_variations(comp),
        "where" => where_variations(comp),
        "who" => who_variations(comp),
        _ => fallback_variations(comp),
    }
}

fn what_variations(comp: &QuestionComponents) -> Vec<String> {
    if COPULAS.contains(&comp.root_verb.as_str()) {
        // Definition pattern
        return DEFINITION_SUFFIXES
            .iter()
            .map(|suffix| format!("{} {}", comp.subject, suffix))
            .collect();
    }

    // Action pattern
    if comp.objects.is_empty() {
        vec![comp.root_verb.clone()]
    } else {
        vec![format!("{} {}", comp.root_verb, comp.objects.join(" "))]
    }
}

fn when_variations(comp: &QuestionComponents) -> Vec<String> {
    let event = format!("{} {}", comp.subject, comp.root_verb);
    vec![format!("time of {event}"), format!("date of {event}")]
}

fn where_variations(comp: &QuestionComponents) -> Vec<String> {
    let entity = &comp.subject;
    vec![format!("location of {entity}"), format!("find {entity}")]
}

/// Needs an object to name the action; without one there is nothing to
/// rewrite and the rule yields no candidates.
fn who_variations(comp: &QuestionComponents) -> Vec<String> {
    match comp.objects.last() {
        Some(object) => vec![format!("{} {}", comp.root_verb, object)],
        None => {
            debug!(root_verb = %comp.root_verb, "who-question without an object, no rewrite");
            Vec::new()
        }
    }
}

fn fallback_variations(comp: &QuestionComponents) -> Vec<String> {
    vec![format!(
        "{} {} {}",
        comp.subject,
        comp.root_verb,
        comp.objects.join(" ")
    )]
}
