use rewrite_protocol::{AnnotatedSentence, TokenId};

use crate::error::AnnotateError;

/// Reads a JSON array of `{text, tag, dep, head?, id?}` objects.
/// Tokens that carry no id are numbered from 1 in array order.
pub fn parse_json_tokens(input: &str) -> Result<AnnotatedSentence, AnnotateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut tokens: AnnotatedSentence = serde_json::from_str(trimmed)?;
    for (index, token) in tokens.iter_mut().enumerate() {
        if token.id == TokenId::default() {
            token.id = TokenId((index + 1) as u32);
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewrite_protocol::DependencyLabel;

    #[test]
    fn test_spacy_style_tokens() {
        let input = r#"[
            {"text": "Who", "tag": "WP", "dep": "nsubj", "head": 2},
            {"text": "wrote", "tag": "VBD", "dep": "ROOT"},
            {"text": "the", "tag": "DT", "dep": "det", "head": 4},
            {"text": "book", "tag": "NN", "dep": "dobj", "head": 2}
        ]"#;

        let tokens = parse_json_tokens(input).unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].id, TokenId(1));
        assert_eq!(tokens[3].id, TokenId(4));
        assert_eq!(tokens[1].dep, DependencyLabel::Root);
        assert_eq!(tokens[1].head, TokenId(0));
        assert_eq!(tokens[3].dep, DependencyLabel::DirectObject);
        assert_eq!(tokens[2].dep, DependencyLabel::Other);
    }

    #[test]
    fn test_blank_and_invalid_input() {
        assert!(parse_json_tokens("  \n").unwrap().is_empty());
        assert!(matches!(parse_json_tokens("{\"text\": 1}"), Err(AnnotateError::Json(_))));
    }
}
