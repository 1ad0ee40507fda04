use nom::{
    bytes::complete::{tag, take_till1},
    character::complete::{char, space0},
    combinator::{all_consuming, rest},
    multi::separated_list1,
    sequence::{preceded, tuple},
    IResult,
};
use rewrite_protocol::{AnnotatedSentence, AnnotatedToken, DependencyLabel, SentenceId};
use tracing::trace;

use crate::error::AnnotateError;

// CoNLL-U column positions (0-based).
const ID: usize = 0;
const FORM: usize = 1;
const UPOS: usize = 3;
const XPOS: usize = 4;
const HEAD: usize = 6;
const DEPREL: usize = 7;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConllSentence {
    pub id: SentenceId,
    /// Value of the `# text = ...` comment, when present.
    pub text: Option<String>,
    pub tokens: AnnotatedSentence,
}

impl ConllSentence {
    /// The `# text` comment, or the forms joined by single spaces.
    pub fn key(&self) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => self
                .tokens
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

fn field(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c == '\t')(input)
}

fn columns(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list1(char('\t'), field))(input)
}

fn text_comment(input: &str) -> IResult<&str, &str> {
    preceded(
        tuple((char('#'), space0, tag("text"), space0, char('='), space0)),
        rest,
    )(input)
}

/// Reads a CoNLL-U document. Blank lines separate sentences; comments other
/// than `# text = ...` are ignored, as are multiword ranges (`3-4`) and
/// empty nodes (`5.1`).
pub fn parse_conll(input: &str) -> Result<Vec<ConllSentence>, AnnotateError> {
    let mut sentences = Vec::new();
    let mut current = ConllSentence::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;

        if line.trim().is_empty() {
            flush(&mut sentences, &mut current);
            continue;
        }

        if line.starts_with('#') {
            if let Ok((_, text)) = text_comment(line) {
                // A new text comment closes a sentence that had no blank line after it
                if !current.tokens.is_empty() {
                    flush(&mut sentences, &mut current);
                }
                current.text = Some(text.trim().to_string());
            }
            continue;
        }

        let (_, cols) = columns(line)
            .map_err(|_| AnnotateError::malformed(line_no, "expected tab-separated columns"))?;

        if cols.len() <= DEPREL {
            return Err(AnnotateError::malformed(
                line_no,
                format!("expected at least {} columns, found {}", DEPREL + 1, cols.len()),
            ));
        }

        let raw_id = cols[ID];
        if raw_id.contains('-') || raw_id.contains('.') {
            trace!(line = line_no, id = raw_id, "skipping multiword range or empty node");
            continue;
        }

        let id: u32 = raw_id
            .parse()
            .map_err(|_| AnnotateError::malformed(line_no, format!("invalid token id '{raw_id}'")))?;

        let head: u32 = match cols[HEAD] {
            "_" => 0,
            raw => raw
                .parse()
                .map_err(|_| AnnotateError::malformed(line_no, format!("invalid head '{raw}'")))?,
        };

        let pos_tag = if cols[XPOS] != "_" { cols[XPOS] } else { cols[UPOS] };

        current.tokens.push(AnnotatedToken::new(
            id,
            cols[FORM],
            pos_tag,
            DependencyLabel::from(cols[DEPREL]),
            head,
        ));
    }

    flush(&mut sentences, &mut current);
    Ok(sentences)
}

/// All tokens of a CoNLL-U document as one sequence, in document order.
pub fn parse_conll_tokens(input: &str) -> Result<AnnotatedSentence, AnnotateError> {
    Ok(parse_conll(input)?
        .into_iter()
        .flat_map(|sentence| sentence.tokens)
        .collect())
}

fn flush(sentences: &mut Vec<ConllSentence>, current: &mut ConllSentence) {
    if current.tokens.is_empty() && current.text.is_none() {
        return;
    }
    let mut sentence = std::mem::take(current);
    sentence.id = SentenceId(sentences.len() as u32);
    sentences.push(sentence);
}
