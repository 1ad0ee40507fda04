use rewrite_protocol::{AnnotatedToken, DependencyLabel, RoleSet};
use tracing::trace;

/// Grammatical skeleton of a question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionComponents {
    /// Lowercased interrogative, empty when the sentence has none.
    pub wh_word: String,
    pub root_verb: String,
    pub subject: String,
    pub objects: Vec<String>,
    pub modifiers: Vec<String>,
}

/// Single left-to-right pass. Each token lands in the first slot whose test
/// it passes, checked in the order: root, interrogative tag, subject,
/// object, modifier. The scalar slots keep their first match.
pub fn extract_components(tokens: &[AnnotatedToken]) -> QuestionComponents {
    let mut comp = QuestionComponents::default();
    // `None` until the first match; an empty surface form still claims the slot
    let mut wh_word: Option<String> = None;
    let mut root_verb: Option<String> = None;
    let mut subject: Option<String> = None;

    for token in tokens {
        let role = token.dep.role();

        if token.dep == DependencyLabel::Root {
            trace!(text = %token.text, "root");
            root_verb.get_or_insert_with(|| token.text.clone());
        } else if token.is_interrogative() {
            trace!(text = %token.text, tag = %token.tag, "interrogative");
            wh_word.get_or_insert_with(|| token.text.to_lowercase());
        } else if RoleSet::SUBJECT.intersects(role) {
            trace!(text = %token.text, dep = %token.dep, "subject");
            subject.get_or_insert_with(|| token.text.clone());
        } else if RoleSet::OBJECT.intersects(role) {
            comp.objects.push(token.text.clone());
        } else if RoleSet::MODIFIER.intersects(role) {
            comp.modifiers.push(token.text.clone());
        }
    }

    comp.wh_word = wh_word.unwrap_or_default();
    comp.root_verb = root_verb.unwrap_or_default();
    comp.subject = subject.unwrap_or_default();
    comp
}
