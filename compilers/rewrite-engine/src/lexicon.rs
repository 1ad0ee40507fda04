use std::fs;
use std::path::Path;

use rewrite_protocol::Lexicon;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::AlignedVec;
use tracing::info;

use crate::error::LexiconError;

/// Loads a lexicon from disk. `.json` files are read as the source format;
/// anything else must be an archive produced by `lexicon-compiler`.
pub fn load_lexicon(path: impl AsRef<Path>) -> Result<Lexicon, LexiconError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let lexicon: Lexicon = if is_json {
        serde_json::from_slice(&bytes)?
    } else {
        from_archive_bytes(&bytes)?
    };

    info!(
        path = %path.display(),
        version = lexicon.version,
        synonyms = lexicon.synonyms.len(),
        categories = lexicon.categories.len(),
        "loaded lexicon"
    );
    Ok(lexicon)
}

/// Validates and deserializes an rkyv archive. The input is copied into an
/// aligned buffer first, so any byte slice is accepted.
pub fn from_archive_bytes(bytes: &[u8]) -> Result<Lexicon, LexiconError> {
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    rkyv::from_bytes::<Lexicon>(&aligned).map_err(|e| LexiconError::Archive(format!("{e:?}")))
}

pub fn to_archive_bytes(lexicon: &Lexicon) -> Result<Vec<u8>, LexiconError> {
    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(lexicon)
        .map_err(|e| LexiconError::Archive(format!("{e:?}")))?;
    Ok(serializer.into_serializer().into_inner().to_vec())
}
