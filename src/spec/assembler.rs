use super::model::{Equation, MessageSpec, SectionKeyword};
use crate::error::{NameKind, SpecError};
use ahash::AHashSet;

/// The typed result of parsing one top-level section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Name(String),
    Slots(Vec<String>),
    Constants(Vec<String>),
    Equations(Vec<Equation>),
    Output(Vec<String>),
}

impl Section {
    pub fn keyword(&self) -> SectionKeyword {
        match self {
            Section::Name(_) => SectionKeyword::Name,
            Section::Slots(_) => SectionKeyword::Slots,
            Section::Constants(_) => SectionKeyword::Constants,
            Section::Equations(_) => SectionKeyword::Equations,
            Section::Output(_) => SectionKeyword::Output,
        }
    }
}

/// Merges section fragments into one `MessageSpec`.
#[derive(Debug, Default)]
pub struct SpecAssembler {
    name: Option<String>,
    slots: Option<Vec<String>>,
    constants: Option<Vec<String>>,
    equations: Option<Vec<Equation>>,
    outputs: Option<Vec<String>>,
}

fn place<T>(slot: &mut Option<T>, value: T, keyword: SectionKeyword) -> Result<(), SpecError> {
    if slot.is_some() {
        return Err(SpecError::RepeatedSection(keyword));
    }
    *slot = Some(value);
    Ok(())
}

fn require<T>(slot: Option<T>, keyword: SectionKeyword) -> Result<T, SpecError> {
    slot.ok_or(SpecError::MissingSection(keyword))
}

fn reject_duplicates<'a>(
    names: impl IntoIterator<Item = &'a str>,
    kind: NameKind,
) -> Result<AHashSet<&'a str>, SpecError> {
    let mut seen = AHashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(SpecError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(seen)
}

impl SpecAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: Section) -> Result<(), SpecError> {
        let keyword = section.keyword();
        match section {
            Section::Name(name) => place(&mut self.name, name, keyword),
            Section::Slots(slots) => place(&mut self.slots, slots, keyword),
            Section::Constants(constants) => place(&mut self.constants, constants, keyword),
            Section::Equations(equations) => place(&mut self.equations, equations, keyword),
            Section::Output(outputs) => place(&mut self.outputs, outputs, keyword),
        }
    }

    pub fn finish(self) -> Result<MessageSpec, SpecError> {
        let name = require(self.name, SectionKeyword::Name)?;
        let slots = require(self.slots, SectionKeyword::Slots)?;
        let constants = self.constants.unwrap_or_default();
        let equations = require(self.equations, SectionKeyword::Equations)?;
        let outputs = require(self.outputs, SectionKeyword::Output)?;

        reject_duplicates(slots.iter().map(String::as_str), NameKind::Slot)?;
        let constant_names =
            reject_duplicates(constants.iter().map(String::as_str), NameKind::Constant)?;
        let equation_names =
            reject_duplicates(equations.iter().map(|e| e.name.as_str()), NameKind::Equation)?;

        // A shared name would make argument resolution ambiguous.
        for (names, kind) in [
            (&constant_names, NameKind::Constant),
            (&equation_names, NameKind::Equation),
        ] {
            if let Some(name) = slots.iter().find(|s| names.contains(s.as_str())) {
                return Err(SpecError::SlotNameReused {
                    kind,
                    name: name.clone(),
                });
            }
        }
        if let Some(eq) = equations
            .iter()
            .find(|e| constant_names.contains(e.name.as_str()))
        {
            return Err(SpecError::EquationShadowsConstant(eq.name.clone()));
        }

        Ok(MessageSpec {
            name,
            slots,
            constants,
            equations,
            outputs,
        })
    }
}

/// Assembles a spec from fragments in one call.
pub fn assemble(sections: impl IntoIterator<Item = Section>) -> Result<MessageSpec, SpecError> {
    let mut assembler = SpecAssembler::new();
    for section in sections {
        assembler.push(section)?;
    }
    assembler.finish()
}
