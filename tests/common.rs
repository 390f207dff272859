//! Common test fixtures: message definitions and patch inspection helpers.
use msgpatch::patch::PdConnection;
use msgpatch::prelude::*;

/// Smallest useful definition: one equation routed from the first slot.
#[allow(dead_code)]
pub const MINIMAL_MESSAGE: &str = "NAME msg  SLOTS a b  EQUATIONS y = lexicon(a)  OUTPUT y";

/// Every section, chained equations, and both argument groups.
#[allow(dead_code)]
pub const GREETING_MESSAGE: &str = r#"
NAME greeting
SLOTS who mood time
CONSTANTS hello comma
EQUATIONS
    salutation = lexicon(time; mood')
    addressee  = lexicon(who)
    phrase     = lexicon(salutation addressee; comma hello')
OUTPUT hello phrase
"#;

/// Compiles in memory, panicking on failure.
#[allow(dead_code)]
pub fn compile(text: &str) -> Compilation {
    Compiler::default()
        .compile_str(text)
        .unwrap_or_else(|e| panic!("Failed to compile: {}", e))
}

/// Handles of every node whose object class is `class`.
#[allow(dead_code)]
pub fn nodes_of_class(patch: &PdPatch, class: &str) -> Vec<NodeHandle> {
    patch
        .iter()
        .filter(|(_, node)| node.kind.class() == Some(class))
        .map(|(handle, _)| handle)
        .collect()
}

/// Connections rewritten with stable labels instead of creation indices.
#[allow(dead_code)]
pub fn labelled_connections(compilation: &Compilation) -> Vec<(String, usize, String, usize)> {
    let label = |h: NodeHandle| -> String {
        let graph = &compilation.graph;
        if let Some(name) = graph.name_of(h) {
            return name.to_string();
        }
        if let Some(i) = graph.merges.iter().position(|m| *m == h) {
            return format!("merge{}", i);
        }
        let role = [
            (graph.bang_inlet, "bang_inlet"),
            (graph.slot_inlet, "slot_inlet"),
            (graph.outlet, "outlet"),
            (graph.router, "router"),
            (graph.error_sink, "error_sink"),
            (graph.trigger, "trigger"),
        ]
        .into_iter()
        .find(|(r, _)| *r == h)
        .map(|(_, name)| name)
        .unwrap_or("unknown");
        role.to_string()
    };
    let mut out: Vec<_> = compilation
        .patch
        .connections()
        .iter()
        .map(|c: &PdConnection| (label(c.source), c.outlet, label(c.dest), c.inlet))
        .collect();
    out.sort();
    out
}
