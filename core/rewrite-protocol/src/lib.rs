#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod dependency;
pub mod ids;

pub use dependency::{DependencyLabel, RoleSet};
pub use ids::{SentenceId, TokenId};

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_label_vocabularies() {
        assert_eq!(DependencyLabel::from("ROOT"), DependencyLabel::Root);
        assert_eq!(DependencyLabel::from("root"), DependencyLabel::Root);
        assert_eq!(DependencyLabel::from("nsubj:pass"), DependencyLabel::PassiveSubject);
        assert_eq!(DependencyLabel::from("obj"), DependencyLabel::DirectObject);
        assert_eq!(DependencyLabel::from("det"), DependencyLabel::Other);
        assert_eq!(DependencyLabel::from("Root"), DependencyLabel::Other);
    }

    #[test]
    fn test_role_groups() {
        assert!(RoleSet::SUBJECT.intersects(DependencyLabel::PassiveSubject.role()));
        assert!(RoleSet::OBJECT.intersects(DependencyLabel::Attribute.role()));
        assert!(RoleSet::MODIFIER.intersects(DependencyLabel::AdjectivalModifier.role()));
        assert!(!RoleSet::OBJECT.intersects(DependencyLabel::NominalSubject.role()));
        assert!(DependencyLabel::Other.role().is_empty());
    }

    #[test]
    fn test_interrogative_tag() {
        let who = AnnotatedToken::new(1, "Who", "WP", DependencyLabel::NominalSubject, 2);
        let wrote = AnnotatedToken::new(2, "wrote", "VBD", DependencyLabel::Root, 0);
        let lower = AnnotatedToken::new(1, "who", "wp", DependencyLabel::NominalSubject, 2);
        assert!(who.is_interrogative());
        assert!(!wrote.is_interrogative());
        assert!(!lower.is_interrogative());
    }

    #[test]
    fn test_lexicon_archive() {
        let original = Lexicon::builtin();

        let bytes = to_bytes::<_, 1024>(&original).expect("Failed to serialize Lexicon");
        let restored: Lexicon = from_bytes(&bytes).expect("Failed to deserialize Lexicon");

        assert_eq!(original, restored);
        assert_eq!(restored.synonyms.len(), 7);
        assert_eq!(restored.categories.len(), 6);
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(core::mem::size_of::<TokenId>(), 4);
    }
}
