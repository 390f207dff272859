//! Prelude module for convenient imports
//!
//! Re-exports the types most programs need to compile message definitions.
//!
//! # Example
//!
//! ```rust,no_run
//! use msgpatch::prelude::*;
//!
//! # fn run_example() -> Result<(), CompileError> {
//! let compiler = Compiler::builder().with_function("phrase").build();
//! let spec = compiler.parse(&std::fs::read_to_string("path/to/message.def").unwrap())?;
//! println!("Compiling message '{}'", spec.name());
//! # Ok(())
//! # }
//! ```

// Compilation driver
pub use crate::compiler::{Compilation, Compiler, CompilerBuilder, default_output_path};

// Parsed definition
pub use crate::spec::{Equation, MessageSpec, SecondaryArg};

// Graph emission
pub use crate::graph::{BuiltGraph, Canvas, GraphBuilder, NodeHandle, NodeKind, Position};
pub use crate::patch::{CanvasConfig, PdPatch};

// Error types
pub use crate::error::{BuildError, CompileError, SpecError, SyntaxError};

pub use std::path::Path;
