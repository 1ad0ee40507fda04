use std::cell::Cell;

use rewrite_annotate::{AnnotateError, FixedAnnotator};
use rewrite_engine::{Reformulator, RewriteError};
use rewrite_protocol::{AnnotatedSentence, Lexicon, SynonymEntry};

const QUESTIONS: &str = include_str!("fixtures/questions.conllu");

fn engine() -> Reformulator<FixedAnnotator> {
    let annotator = FixedAnnotator::from_conll(QUESTIONS).expect("fixture parses");
    Reformulator::new(annotator)
}

#[test]
fn test_what_is_definition_pattern() {
    let out = engine().reformulate("What is a dog?").unwrap();
    assert_eq!(out, vec!["dog definition", "dog meaning", "dog explanation", "dog basics"]);
}

#[test]
fn test_what_action_pattern() {
    let out = engine().reformulate("What causes thunder?").unwrap();
    assert_eq!(out, vec!["causes thunder"]);
}

#[test]
fn test_when_pattern() {
    let out = engine().reformulate("When did the treaty end?").unwrap();
    assert_eq!(out, vec!["time of treaty end", "date of treaty end"]);
}

#[test]
fn test_where_pattern() {
    let out = engine().reformulate("Where is the library?").unwrap();
    assert_eq!(out, vec!["location of library", "find library"]);
}

#[test]
fn test_who_pattern() {
    let out = engine().reformulate("Who wrote the book?").unwrap();
    assert_eq!(out, vec!["wrote book"]);
}

#[test]
fn test_who_without_object_yields_nothing() {
    assert!(engine().reformulate("Who won?").unwrap().is_empty());
}

#[test]
fn test_all_empty_skeleton() {
    let out = engine().reformulate("?!").unwrap();
    assert_eq!(out, vec!["  "]);

    let empty = Reformulator::new(|_: &str| -> Result<AnnotatedSentence, AnnotateError> { Ok(Vec::new()) });
    assert_eq!(empty.reformulate("").unwrap(), vec!["  "]);
}

#[test]
fn test_repeated_calls_agree() {
    let engine = engine();
    for query in ["What is a dog?", "When did the treaty end?", "The sky is blue"] {
        let first = engine.reformulate(query).unwrap();
        let second = engine.reformulate(query).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_annotation_failure_propagates() {
    let calls = Cell::new(0);
    let failing = Reformulator::new(|_: &str| -> Result<AnnotatedSentence, AnnotateError> {
        calls.set(calls.get() + 1);
        Err(AnnotateError::UnknownQuery("model not loaded".to_string()))
    });

    match failing.reformulate("What is a dog?") {
        Err(RewriteError::Annotation(AnnotateError::UnknownQuery(_))) => {}
        other => panic!("Expected annotation error, got {:?}", other),
    }
    // One attempt per query, no retry
    assert_eq!(calls.get(), 1);

    assert!(matches!(
        engine().reformulate("How far is the moon?"),
        Err(RewriteError::Annotation(AnnotateError::UnknownQuery(_)))
    ));
}

#[test]
fn test_substitution_is_opt_in() {
    let engine = engine();

    let plain = engine.reformulate("The sky is blue").unwrap();
    assert_eq!(plain, vec!["sky is "]);

    let substituted = engine.reformulate_with_substitutions("The sky is blue").unwrap();
    assert_eq!(substituted, vec!["sky was", "sky are"]);

    let wider = engine.clone().with_substitution_limit(5);
    let all = wider.reformulate_with_substitutions("The sky is blue").unwrap();
    assert_eq!(all, vec!["sky was", "sky are", "sky exists"]);
}

#[test]
fn test_substitution_without_triggers() {
    let out = engine().reformulate_with_substitutions("What is a dog?").unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_custom_lexicon() {
    let lexicon = Lexicon {
        version: 2,
        synonyms: vec![SynonymEntry {
            trigger: "find".to_string(),
            substitutes: vec!["locate".to_string(), "map".to_string()],
        }],
        categories: Vec::new(),
    };
    let annotator = FixedAnnotator::from_conll(QUESTIONS).unwrap();
    let engine = Reformulator::with_lexicon(annotator, &lexicon);

    let out = engine.reformulate_with_substitutions("Where is the library?").unwrap();
    assert_eq!(out, vec!["locate library", "map library"]);
    assert!(engine.categories("what").is_none());
}

#[test]
fn test_category_table_is_available_but_unused() {
    let engine = engine();
    let labels = engine.categories("when").unwrap();
    assert!(labels.contains("date"));

    let comp = engine.components("When did the treaty end?").unwrap();
    assert_eq!(comp.wh_word, "when");
    assert_eq!(comp.subject, "treaty");
    assert_eq!(comp.root_verb, "end");
    // Rules never mention category labels
    let out = engine.rewrite_components(&comp);
    assert!(out.iter().all(|q| !q.contains("period")));
}

#[test]
fn test_engine_reports_its_tables() {
    let engine = engine();
    assert_eq!(engine.substitution_limit(), 2);
    assert_eq!(engine.synonyms().len(), 7);
    assert_eq!(engine.wh_categories().len(), 6);

    let bare = Lexicon { version: 1, synonyms: Vec::new(), categories: Vec::new() };
    let empty = Reformulator::with_lexicon(FixedAnnotator::default(), &bare).with_substitution_limit(0);
    assert_eq!(empty.substitution_limit(), 0);
    assert!(empty.synonyms().is_empty());
    assert!(empty.wh_categories().is_empty());
}
