use super::PResult;
use crate::spec::SectionKeyword;
use winnow::Parser;
use winnow::ascii::multispace0;
use winnow::combinator::preceded;
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::token::take_while;

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Maximal run of word characters, reserved or not.
pub(crate) fn word_run<'s>(input: &mut &'s str) -> PResult<&'s str> {
    preceded(multispace0, take_while(1.., is_word_char)).parse_next(input)
}

/// An identifier: any word run that is not a section keyword.
pub(crate) fn word(input: &mut &str) -> PResult<String> {
    word_run
        .verify(|w: &str| SectionKeyword::from_word(w).is_none())
        .map(str::to_string)
        .context(StrContext::Expected(StrContextValue::Description("word")))
        .parse_next(input)
}

pub(crate) fn keyword<'s>(kw: SectionKeyword) -> impl Parser<&'s str, (), ErrMode<ContextError>> {
    word_run
        .verify(move |w: &str| w == kw.as_str())
        .void()
        .context(StrContext::Expected(StrContextValue::StringLiteral(
            kw.as_str(),
        )))
}

pub(crate) fn symbol<'s>(sym: &'static str) -> impl Parser<&'s str, (), ErrMode<ContextError>> {
    preceded(multispace0, sym)
        .void()
        .context(StrContext::Expected(StrContextValue::StringLiteral(sym)))
}

pub(crate) fn trailing_space(input: &mut &str) -> PResult<()> {
    multispace0.void().parse_next(input)
}
