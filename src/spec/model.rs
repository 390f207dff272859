use serde::Serialize;
use std::fmt;

/// The five top-level section keywords, in the only order the grammar accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKeyword {
    Name,
    Slots,
    Constants,
    Equations,
    Output,
}

impl SectionKeyword {
    pub const ALL: [SectionKeyword; 5] = [
        SectionKeyword::Name,
        SectionKeyword::Slots,
        SectionKeyword::Constants,
        SectionKeyword::Equations,
        SectionKeyword::Output,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKeyword::Name => "NAME",
            SectionKeyword::Slots => "SLOTS",
            SectionKeyword::Constants => "CONSTANTS",
            SectionKeyword::Equations => "EQUATIONS",
            SectionKeyword::Output => "OUTPUT",
        }
    }

    /// Case-sensitive lookup; only the upper-case spelling is reserved.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == word)
    }
}

impl fmt::Display for SectionKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One argument of an equation's secondary group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecondaryArg {
    pub name: String,
    /// Set by a trailing `'` marker; selects the variant connection.
    pub quoted: bool,
}

impl SecondaryArg {
    pub fn new(name: impl Into<String>, quoted: bool) -> Self {
        Self {
            name: name.into(),
            quoted,
        }
    }
}

/// A parsed `name = function(primary… ; secondary…)` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equation {
    pub name: String,
    pub function: String,
    pub primary_args: Vec<String>,
    pub secondary_args: Vec<SecondaryArg>,
}

/// A fully assembled message definition.
///
/// Only the assembler constructs this, so the duplicate-name invariants hold
/// for every value that exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageSpec {
    pub(super) name: String,
    pub(super) slots: Vec<String>,
    pub(super) constants: Vec<String>,
    pub(super) equations: Vec<Equation>,
    pub(super) outputs: Vec<String>,
}

impl MessageSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slot names in router outlet order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn constants(&self) -> &[String] {
        &self.constants
    }

    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Router outlet index for a slot name.
    pub fn slot_index(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|s| s == name)
    }
}
