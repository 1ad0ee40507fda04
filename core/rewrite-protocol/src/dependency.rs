use bitflags::bitflags;

/// Dependency relation of a token to its head, reduced to the labels the
/// extractor distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DependencyLabel {
    Root = 0,
    NominalSubject = 1,
    PassiveSubject = 2,
    DirectObject = 3,
    PrepositionalObject = 4,
    Attribute = 5,
    AdverbialModifier = 6,
    AdjectivalModifier = 7,
    Other = 8,
}

impl DependencyLabel {
    /// Canonical (spaCy / ClearNLP) spelling.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DependencyLabel::Root => "ROOT",
            DependencyLabel::NominalSubject => "nsubj",
            DependencyLabel::PassiveSubject => "nsubjpass",
            DependencyLabel::DirectObject => "dobj",
            DependencyLabel::PrepositionalObject => "pobj",
            DependencyLabel::Attribute => "attr",
            DependencyLabel::AdverbialModifier => "advmod",
            DependencyLabel::AdjectivalModifier => "amod",
            DependencyLabel::Other => "dep",
        }
    }

    pub const fn role(&self) -> RoleSet {
        match self {
            DependencyLabel::Root => RoleSet::ROOT,
            DependencyLabel::NominalSubject => RoleSet::NOMINAL_SUBJECT,
            DependencyLabel::PassiveSubject => RoleSet::PASSIVE_SUBJECT,
            DependencyLabel::DirectObject => RoleSet::DIRECT_OBJECT,
            DependencyLabel::PrepositionalObject => RoleSet::PREPOSITIONAL_OBJECT,
            DependencyLabel::Attribute => RoleSet::ATTRIBUTE,
            DependencyLabel::AdverbialModifier => RoleSet::ADVERBIAL_MODIFIER,
            DependencyLabel::AdjectivalModifier => RoleSet::ADJECTIVAL_MODIFIER,
            DependencyLabel::Other => RoleSet::empty(),
        }
    }
}

/// Accepts both the spaCy label set and the Universal Dependencies spellings.
/// Anything unrecognised collapses to `Other`.
impl From<&str> for DependencyLabel {
    fn from(label: &str) -> Self {
        match label {
            "ROOT" | "root" => DependencyLabel::Root,
            "nsubj" => DependencyLabel::NominalSubject,
            "nsubjpass" | "nsubj:pass" => DependencyLabel::PassiveSubject,
            "dobj" | "obj" => DependencyLabel::DirectObject,
            "pobj" => DependencyLabel::PrepositionalObject,
            "attr" => DependencyLabel::Attribute,
            "advmod" => DependencyLabel::AdverbialModifier,
            "amod" => DependencyLabel::AdjectivalModifier,
            _ => DependencyLabel::Other,
        }
    }
}

impl core::fmt::Display for DependencyLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DependencyLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DependencyLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = <alloc::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(DependencyLabel::from(label.as_str()))
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct RoleSet: u16 {
        const ROOT = 1;

        // Subjects (Bits 1-2)
        const NOMINAL_SUBJECT = 2;
        const PASSIVE_SUBJECT = 4;

        // Objects and predicate complements (Bits 3-5)
        const DIRECT_OBJECT = 8;
        const PREPOSITIONAL_OBJECT = 16;
        const ATTRIBUTE = 32;

        // Modifiers (Bits 6-7)
        const ADVERBIAL_MODIFIER = 64;
        const ADJECTIVAL_MODIFIER = 128;

        const SUBJECT = Self::NOMINAL_SUBJECT.bits() | Self::PASSIVE_SUBJECT.bits();
        const OBJECT = Self::DIRECT_OBJECT.bits()
            | Self::PREPOSITIONAL_OBJECT.bits()
            | Self::ATTRIBUTE.bits();
        const MODIFIER = Self::ADVERBIAL_MODIFIER.bits() | Self::ADJECTIVAL_MODIFIER.bits();
    }
}
