use crate::error::CompileError;
use crate::grammar::{FunctionRegistry, parse_sections};
use crate::graph::{BuiltGraph, Canvas, GraphBuilder};
use crate::patch::{CanvasConfig, PdPatch};
use crate::spec::{MessageSpec, assemble};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a successful in-memory compile produces.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub spec: MessageSpec,
    pub graph: BuiltGraph,
    pub patch: PdPatch,
}

/// Parses message definitions and emits them as Pd patches.
#[derive(Debug, Clone)]
pub struct Compiler {
    functions: FunctionRegistry,
    canvas: CanvasConfig,
}

pub struct CompilerBuilder {
    functions: FunctionRegistry,
    canvas: CanvasConfig,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self {
            functions: FunctionRegistry::default(),
            canvas: CanvasConfig::default(),
        }
    }

    /// Accept `name` as an equation function in addition to `lexicon`.
    pub fn with_function(mut self, name: &str) -> Self {
        self.functions.register(name);
        self
    }

    pub fn with_canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            functions: self.functions,
            canvas: self.canvas,
        }
    }
}

impl Default for CompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Compiler {
    fn default() -> Self {
        CompilerBuilder::new().build()
    }
}

/// `<message-name>.<ext>`, used when no output path is given.
pub fn default_output_path(spec: &MessageSpec, extension: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", spec.name(), extension))
}

impl Compiler {
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    /// Grammar plus assembly: text to an immutable `MessageSpec`.
    pub fn parse(&self, text: &str) -> Result<MessageSpec, CompileError> {
        let sections = parse_sections(text, &self.functions)?;
        let spec = assemble(sections)?;
        info!(
            "Parsed message '{}': {} slots, {} constants, {} equations, {} outputs",
            spec.name(),
            spec.slots().len(),
            spec.constants().len(),
            spec.equations().len(),
            spec.outputs().len()
        );
        Ok(spec)
    }

    /// Emits `spec` onto any canvas implementation.
    pub fn build_graph<C: Canvas>(
        &self,
        spec: &MessageSpec,
        canvas: &mut C,
    ) -> Result<BuiltGraph, CompileError> {
        Ok(GraphBuilder::new(spec, canvas).build()?)
    }

    /// Parses and builds without touching the filesystem.
    pub fn compile_str(&self, text: &str) -> Result<Compilation, CompileError> {
        let spec = self.parse(text)?;
        let mut patch = PdPatch::new(self.canvas);
        let graph = self.build_graph(&spec, &mut patch)?;
        info!(
            "Built graph with {} nodes and {} connections",
            patch.nodes().len(),
            patch.connections().len()
        );
        Ok(Compilation { spec, graph, patch })
    }

    /// Reads `input`, compiles it, and writes the patch.
    ///
    /// The output defaults to `<message-name>.pd`, so it is only known once
    /// parsing succeeds. Nothing is written unless the whole build succeeds.
    /// Returns the path written.
    pub fn compile_file(&self, input: &Path, output: Option<&Path>) -> Result<PathBuf, CompileError> {
        let text = fs::read_to_string(input).map_err(|source| CompileError::Io {
            action: "read",
            path: input.to_path_buf(),
            source,
        })?;
        let Compilation { spec, patch, .. } = self.compile_str(&text)?;

        let path = match output {
            Some(path) => path.to_path_buf(),
            None => default_output_path(&spec, patch.extension()),
        };
        patch.write(&path).map_err(|source| CompileError::Io {
            action: "write",
            path: path.clone(),
            source,
        })?;
        info!("Wrote {}", path.display());
        Ok(path)
    }
}
