//! # msgpatch - Message Definitions to Pure Data Patches
//!
//! **msgpatch** compiles a small declarative message-definition language into
//! a Pure Data patch implementing a message-processing unit. Incoming tagged
//! data is routed by slot name into equation nodes, and a bang on the first
//! inlet emits every configured output as a single list.
//!
//! ## The Language
//!
//! ```text
//! NAME greeting
//! SLOTS who mood
//! CONSTANTS hello
//! EQUATIONS
//!   phrase = lexicon(who; mood')
//! OUTPUT hello phrase
//! ```
//!
//! Sections appear in this fixed order; `CONSTANTS` may be omitted. Equations
//! may only reference slots, constants, and equations declared before them.
//! A name belongs to exactly one slot, constant, or equation.
//!
//! ## Core Workflow
//!
//! 1.  **Parse**: the grammar turns the text into typed section fragments.
//! 2.  **Assemble**: the fragments are merged and checked into one immutable
//!     [`MessageSpec`](spec::MessageSpec).
//! 3.  **Build**: the [`GraphBuilder`](graph::GraphBuilder) emits routers,
//!     triggers, equation nodes and the output merge chain onto a
//!     [`Canvas`](graph::Canvas).
//! 4.  **Write**: the [`PdPatch`](patch::PdPatch) canvas serializes to `.pd`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use msgpatch::prelude::*;
//!
//! fn main() -> Result<(), CompileError> {
//!     let compiler = Compiler::builder().build();
//!
//!     // Parse and build in memory
//!     let compilation = compiler.compile_str(
//!         "NAME msg SLOTS a b EQUATIONS y = lexicon(a) OUTPUT y",
//!     )?;
//!     println!("{} nodes", compilation.patch.nodes().len());
//!
//!     // Or go straight from file to file; writes `msg.pd` here
//!     let written = compiler.compile_file(Path::new("msg.def"), None)?;
//!     println!("Wrote {}", written.display());
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod error;
pub mod grammar;
pub mod graph;
pub mod patch;
pub mod prelude;
pub mod spec;
