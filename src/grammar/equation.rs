use super::PResult;
use super::lexical::{symbol, word, word_run};
use crate::spec::{Equation, SecondaryArg};
use winnow::Parser;
use winnow::combinator::{cut_err, opt, preceded, repeat};
use winnow::error::{StrContext, StrContextValue};

/// The function identifiers an equation may call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRegistry {
    names: Vec<String>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self {
            names: vec!["lexicon".to_string()],
        }
    }
}

impl FunctionRegistry {
    pub fn register(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.names.push(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

fn function_name(input: &mut &str, functions: &FunctionRegistry) -> PResult<String> {
    word_run
        .verify(|w: &str| functions.contains(w))
        .map(str::to_string)
        .context(StrContext::Expected(StrContextValue::Description(
            "a registered function name",
        )))
        .parse_next(input)
}

/// `word` optionally followed by the `'` variant marker.
fn secondary_arg(input: &mut &str) -> PResult<SecondaryArg> {
    let name = word.parse_next(input)?;
    let quoted = opt(symbol("'")).parse_next(input)?.is_some();
    Ok(SecondaryArg { name, quoted })
}

fn secondary_group(input: &mut &str) -> PResult<Vec<SecondaryArg>> {
    cut_err(repeat(1.., secondary_arg)).parse_next(input)
}

/// `word "=" function "(" word+ [";" (word "'"?)+] ")"`
///
/// Once the leading name has matched, any later failure is fatal.
pub(crate) fn equation<'s>(input: &mut &'s str, functions: &FunctionRegistry) -> PResult<Equation> {
    let name = word.parse_next(input)?;

    cut_err(move |i: &mut &'s str| -> PResult<Equation> {
        symbol("=").parse_next(i)?;
        let function = function_name(i, functions)?;
        symbol("(").parse_next(i)?;
        let primary_args: Vec<String> = repeat(1.., word).parse_next(i)?;
        let secondary_args = opt(preceded(symbol(";"), secondary_group))
            .parse_next(i)?
            .unwrap_or_default();
        symbol(")").parse_next(i)?;

        Ok(Equation {
            name: name.clone(),
            function,
            primary_args,
            secondary_args,
        })
    })
    .parse_next(input)
}
