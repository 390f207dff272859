use std::fmt;
use std::io;
use std::path::Path;

/// Opaque reference to a node, valid for the whole compile run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub(crate) usize);

impl NodeHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// What a node is: an object box with a class and creation arguments, or a
/// message box that emits its content when banged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object { class: String, args: Vec<String> },
    Message { content: Vec<String> },
}

impl NodeKind {
    pub fn object<I, S>(class: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NodeKind::Object {
            class: class.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// An object box without creation arguments.
    pub fn bare(class: impl Into<String>) -> Self {
        NodeKind::Object {
            class: class.into(),
            args: Vec::new(),
        }
    }

    pub fn message<I, S>(content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NodeKind::Message {
            content: content.into_iter().map(Into::into).collect(),
        }
    }

    pub fn class(&self) -> Option<&str> {
        match self {
            NodeKind::Object { class, .. } => Some(class),
            NodeKind::Message { .. } => None,
        }
    }

    /// Number of outlets for the built-in vocabulary; `None` for classes whose
    /// shape depends on an external library.
    pub fn outlet_count(&self) -> Option<usize> {
        match self {
            NodeKind::Message { .. } => Some(1),
            NodeKind::Object { class, args } => match class.as_str() {
                "route" => Some(args.len() + 1),
                "t" | "trigger" => Some(args.len()),
                "list" | "inlet" => Some(1),
                "outlet" | "print" => Some(0),
                _ => None,
            },
        }
    }
}

/// The node/connection collaborator the graph builder drives.
///
/// The builder only ever creates nodes, connects them, and moves the layout
/// cursor; serialization belongs to the implementation.
pub trait Canvas {
    /// Creates a node at `position`, or at the layout cursor when `None`.
    fn create_node(&mut self, kind: NodeKind, position: Option<Position>) -> NodeHandle;

    fn connect(&mut self, source: NodeHandle, outlet: usize, dest: NodeHandle, inlet: usize);

    /// Where the next implicitly placed node goes.
    fn set_cursor(&mut self, position: Position);

    /// Canonical file extension of the target format, without the dot.
    fn extension(&self) -> &'static str;

    fn write(&self, path: &Path) -> io::Result<()>;
}
