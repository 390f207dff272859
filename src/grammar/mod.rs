//! Grammar for message definition files.
//!
//! ```text
//! message  := "NAME" word "SLOTS" word+ ["CONSTANTS" word+]
//!             "EQUATIONS" equation+ "OUTPUT" word+
//! equation := word "=" function "(" word+ [";" (word "'"?)+] ")"
//! word     := [A-Za-z0-9_-]+ that is not a section keyword
//! ```
//!
//! Tokens are whitespace separated; line breaks carry no meaning. Every parse
//! action returns a typed [`Section`](crate::spec::Section) fragment and the
//! fragments are merged by the [`SpecAssembler`](crate::spec::SpecAssembler).

mod equation;
mod lexical;
mod sections;

pub use equation::FunctionRegistry;

use crate::error::SyntaxError;
use crate::spec::Section;
use itertools::Itertools;
use log::debug;
use winnow::Parser;
use winnow::error::{ContextError, ErrMode, StrContext};

pub(crate) type PResult<O> = Result<O, ErrMode<ContextError>>;

/// Parses a complete definition into its section fragments, in source order.
pub fn parse_sections(text: &str, functions: &FunctionRegistry) -> Result<Vec<Section>, SyntaxError> {
    let mut parser = |input: &mut &str| sections::message(input, functions);
    let sections = parser
        .parse(text)
        .map_err(|e| locate(text, e.offset(), e.inner()))?;

    for section in &sections {
        debug!("Parsed {} section", section.keyword());
    }
    Ok(sections)
}

fn offending_token(rest: &str) -> String {
    let run: String = rest.chars().take_while(|c| lexical::is_word_char(*c)).collect();
    if !run.is_empty() {
        return format!("'{}'", run);
    }
    match rest.chars().next() {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}

/// Turns a failure offset into a line/column diagnostic.
fn locate(text: &str, offset: usize, error: &ContextError) -> SyntaxError {
    let rest = &text[offset..];
    let offset = offset + (rest.len() - rest.trim_start().len());
    let rest = &text[offset..];

    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;

    let mut expected = error
        .context()
        .filter_map(|c| match c {
            StrContext::Expected(value) => Some(value.to_string()),
            _ => None,
        })
        .unique()
        .join(" or ");
    if expected.is_empty() {
        expected = "end of input".to_string();
    }
    if let Some(label) = error.context().find_map(|c| match c {
        StrContext::Label(label) => Some(*label),
        _ => None,
    }) {
        expected = format!("{} in {}", expected, label);
    }

    SyntaxError {
        line,
        column,
        offset,
        found: offending_token(rest),
        expected,
    }
}
