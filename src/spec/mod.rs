//! The parsed message definition and the assembler that produces it.

mod assembler;
mod model;

pub use assembler::{Section, SpecAssembler, assemble};
pub use model::{Equation, MessageSpec, SecondaryArg, SectionKeyword};
