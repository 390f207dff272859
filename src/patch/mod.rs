//! In-memory Pure Data patch and its `.pd` text serialization.

use crate::graph::{Canvas, NodeHandle, NodeKind, Position};
use itertools::Itertools;
use log::debug;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// Canonical extension of Pure Data patch files.
pub const PD_EXTENSION: &str = "pd";

/// Window geometry written into the canvas header, plus the auto-layout step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasConfig {
    pub origin: (i32, i32),
    pub size: (u32, u32),
    pub font_size: u32,
    /// Vertical distance between implicitly placed nodes.
    pub row_spacing: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            origin: (10, 10),
            size: (500, 500),
            font_size: 16,
            row_spacing: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdNode {
    pub kind: NodeKind,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PdConnection {
    pub source: NodeHandle,
    pub outlet: usize,
    pub dest: NodeHandle,
    pub inlet: usize,
}

/// A single top-level Pd canvas.
#[derive(Debug, Clone)]
pub struct PdPatch {
    config: CanvasConfig,
    cursor: Position,
    nodes: Vec<PdNode>,
    connections: Vec<PdConnection>,
}

impl Default for PdPatch {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

/// Pd treats `;`, `,` and `$` as syntax inside atoms.
fn escape_atom(atom: &str) -> String {
    let mut out = String::with_capacity(atom.len());
    for c in atom.chars() {
        if matches!(c, ';' | ',' | '$') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

impl PdPatch {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            cursor: Position::new(config.origin.0, config.origin.1),
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn nodes(&self) -> &[PdNode] {
        &self.nodes
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&PdNode> {
        self.nodes.get(handle.index())
    }

    /// Nodes with their handles, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &PdNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeHandle(i), node))
    }

    pub fn connections(&self) -> &[PdConnection] {
        &self.connections
    }

    /// Connections leaving `handle`, in the order they were made.
    pub fn connections_from(&self, handle: NodeHandle) -> impl Iterator<Item = &PdConnection> {
        self.connections.iter().filter(move |c| c.source == handle)
    }

    /// Renders the patch in Pd's text format.
    pub fn to_pd_string(&self) -> String {
        let mut out = String::new();
        let (x, y) = self.config.origin;
        let (w, h) = self.config.size;
        // Writing to a String cannot fail.
        let _ = writeln!(out, "#N canvas {} {} {} {} {};", x, y, w, h, self.config.font_size);

        for node in &self.nodes {
            let Position { x, y } = node.position;
            let _ = match &node.kind {
                NodeKind::Object { class, args } => writeln!(
                    out,
                    "#X obj {} {} {};",
                    x,
                    y,
                    std::iter::once(class)
                        .chain(args)
                        .map(|a| escape_atom(a))
                        .join(" ")
                ),
                NodeKind::Message { content } => writeln!(
                    out,
                    "#X msg {} {} {};",
                    x,
                    y,
                    content.iter().map(|a| escape_atom(a)).join(" ")
                ),
            };
        }

        for c in &self.connections {
            let _ = writeln!(
                out,
                "#X connect {} {} {} {};",
                c.source.index(),
                c.outlet,
                c.dest.index(),
                c.inlet
            );
        }
        out
    }
}

impl Canvas for PdPatch {
    fn create_node(&mut self, kind: NodeKind, position: Option<Position>) -> NodeHandle {
        let position = position.unwrap_or_else(|| {
            let at = self.cursor;
            self.cursor.y += self.config.row_spacing;
            at
        });
        self.nodes.push(PdNode { kind, position });
        NodeHandle(self.nodes.len() - 1)
    }

    fn connect(&mut self, source: NodeHandle, outlet: usize, dest: NodeHandle, inlet: usize) {
        self.connections.push(PdConnection {
            source,
            outlet,
            dest,
            inlet,
        });
    }

    fn set_cursor(&mut self, position: Position) {
        self.cursor = position;
    }

    fn extension(&self) -> &'static str {
        PD_EXTENSION
    }

    fn write(&self, path: &Path) -> io::Result<()> {
        debug!(
            "Writing {} nodes and {} connections to {}",
            self.nodes.len(),
            self.connections.len(),
            path.display()
        );
        fs::write(path, self.to_pd_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cursor_advances_only_for_implicit_nodes() {
        let mut patch = PdPatch::default();
        patch.set_cursor(Position::new(100, 100));
        let a = patch.create_node(NodeKind::bare("a"), None);
        let fixed = patch.create_node(NodeKind::bare("b"), Some(Position::new(1, 2)));
        let c = patch.create_node(NodeKind::bare("c"), None);

        assert_eq!(patch.node(a).unwrap().position, Position::new(100, 100));
        assert_eq!(patch.node(fixed).unwrap().position, Position::new(1, 2));
        assert_eq!(patch.node(c).unwrap().position, Position::new(100, 130));
    }

    #[test]
    fn test_serializes_header_nodes_and_connections() {
        let mut patch = PdPatch::new(CanvasConfig {
            font_size: 12,
            ..CanvasConfig::default()
        });
        let inlet = patch.create_node(NodeKind::bare("inlet"), Some(Position::new(10, 10)));
        let route = patch.create_node(
            NodeKind::object("route", ["a", "b"]),
            Some(Position::new(100, 50)),
        );
        let msg = patch.create_node(NodeKind::message(["hello"]), Some(Position::new(300, 122)));
        patch.connect(inlet, 0, route, 0);
        patch.connect(route, 2, msg, 0);

        assert_eq!(
            patch.to_pd_string(),
            "#N canvas 10 10 500 500 12;\n\
             #X obj 10 10 inlet;\n\
             #X obj 100 50 route a b;\n\
             #X msg 300 122 hello;\n\
             #X connect 0 0 1 0;\n\
             #X connect 1 2 2 0;\n"
        );
    }

    #[test]
    fn test_escapes_pd_syntax_characters() {
        assert_eq!(escape_atom("a;b,c$1"), "a\\;b\\,c\\$1");
        assert_eq!(escape_atom("msg:"), "msg:");
    }
}
