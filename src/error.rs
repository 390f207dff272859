use crate::spec::SectionKeyword;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A grammar failure at the earliest position the parser could not get past.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("syntax error at line {line}, column {column}: expected {expected}, found {found}")]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    /// Byte offset into the source text.
    pub offset: usize,
    /// The offending token, or `end of input`.
    pub found: String,
    pub expected: String,
}

/// What kind of declaration a duplicated name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Slot,
    Constant,
    Equation,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Slot => write!(f, "slot"),
            NameKind::Constant => write!(f, "constant"),
            NameKind::Equation => write!(f, "equation"),
        }
    }
}

/// Errors raised while merging parsed sections into a `MessageSpec`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("Duplicate {kind} name '{name}'")]
    DuplicateName { kind: NameKind, name: String },

    #[error("Equation '{0}' reuses the name of a constant")]
    EquationShadowsConstant(String),

    #[error("The {kind} name '{name}' is already used by a slot")]
    SlotNameReused { kind: NameKind, name: String },

    #[error("Section {0} is missing")]
    MissingSection(SectionKeyword),

    #[error("Section {0} appears more than once")]
    RepeatedSection(SectionKeyword),
}

/// Where an unresolved name was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSite {
    PrimaryArgs { equation: String },
    SecondaryArgs { equation: String },
    Output,
}

impl fmt::Display for ReferenceSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceSite::PrimaryArgs { equation } => {
                write!(f, "primary arguments of equation '{}'", equation)
            }
            ReferenceSite::SecondaryArgs { equation } => {
                write!(f, "secondary arguments of equation '{}'", equation)
            }
            ReferenceSite::Output => write!(f, "OUTPUT section"),
        }
    }
}

/// Errors that can occur while emitting the patch graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error(
        "Unresolved reference '{name}' in {site}: not a slot, a constant, or an earlier equation"
    )]
    UnresolvedReference { name: String, site: ReferenceSite },
}

/// Any failure of a compile run.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("Could not {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
