//! Emission of the message-processing graph.
//!
//! The builder knows the topology (router, unknown-slot sink, constants,
//! equations, trigger, merge chain) and nothing about file formats; it talks
//! to any [`Canvas`].

mod builder;
mod canvas;

pub use builder::{BuiltGraph, GraphBuilder};
pub use canvas::{Canvas, NodeHandle, NodeKind, Position};
