use super::PResult;
use super::equation::{FunctionRegistry, equation};
use super::lexical::{keyword, trailing_space, word};
use crate::spec::{Equation, Section, SectionKeyword};
use winnow::Parser;
use winnow::combinator::{cut_err, opt, preceded, repeat};
use winnow::error::StrContext;

fn word_list(input: &mut &str) -> PResult<Vec<String>> {
    repeat(1.., word).parse_next(input)
}

fn name_section(input: &mut &str) -> PResult<Section> {
    preceded(keyword(SectionKeyword::Name), cut_err(word))
        .map(Section::Name)
        .context(StrContext::Label("NAME section"))
        .parse_next(input)
}

fn slots_section(input: &mut &str) -> PResult<Section> {
    preceded(keyword(SectionKeyword::Slots), cut_err(word_list))
        .map(Section::Slots)
        .context(StrContext::Label("SLOTS section"))
        .parse_next(input)
}

fn constants_section(input: &mut &str) -> PResult<Section> {
    preceded(keyword(SectionKeyword::Constants), cut_err(word_list))
        .map(Section::Constants)
        .context(StrContext::Label("CONSTANTS section"))
        .parse_next(input)
}

fn equations_section<'s>(input: &mut &'s str, functions: &FunctionRegistry) -> PResult<Section> {
    keyword(SectionKeyword::Equations).parse_next(input)?;
    let equations: Vec<Equation> = cut_err(repeat(1.., |i: &mut &'s str| equation(i, functions)))
        .context(StrContext::Label("EQUATIONS section"))
        .parse_next(input)?;
    Ok(Section::Equations(equations))
}

fn output_section(input: &mut &str) -> PResult<Section> {
    preceded(keyword(SectionKeyword::Output), cut_err(word_list))
        .map(Section::Output)
        .context(StrContext::Label("OUTPUT section"))
        .parse_next(input)
}

/// The whole input: sections in fixed order, CONSTANTS optional.
pub(crate) fn message(input: &mut &str, functions: &FunctionRegistry) -> PResult<Vec<Section>> {
    let mut sections = vec![name_section(input)?, slots_section(input)?];
    if let Some(constants) = opt(constants_section).parse_next(input)? {
        sections.push(constants);
    }
    sections.push(equations_section(input, functions)?);
    sections.push(output_section(input)?);
    trailing_space(input)?;
    Ok(sections)
}
