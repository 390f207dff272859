use super::canvas::{Canvas, NodeHandle, NodeKind, Position};
use crate::error::{BuildError, ReferenceSite};
use crate::spec::{Equation, MessageSpec};
use ahash::AHashMap;
use log::{debug, trace};

const BANG_INLET_POS: Position = Position::new(10, 10);
const SLOT_INLET_POS: Position = Position::new(100, 10);
const OUTLET_POS: Position = Position::new(10, 400);
const ROUTER_POS: Position = Position::new(100, 50);
const ERROR_SINK_POS: Position = Position::new(100, 400);
const CONSTANTS_CURSOR: Position = Position::new(300, 122);
const EQUATIONS_CURSOR: Position = Position::new(100, 100);
const OUTPUT_CURSOR: Position = Position::new(10, 100);

/// Inlet receiving the primary argument group.
const PRIMARY_INLET: usize = 0;
/// Inlet receiving the secondary argument group.
const SECONDARY_INLET: usize = 1;
/// Secondary inlet, variant 2: where quoted secondary arguments land.
const VARIANT_INLET: usize = 2;

/// Handles of every node the builder emitted, by role.
#[derive(Debug, Clone)]
pub struct BuiltGraph {
    pub bang_inlet: NodeHandle,
    pub slot_inlet: NodeHandle,
    pub outlet: NodeHandle,
    pub router: NodeHandle,
    pub error_sink: NodeHandle,
    pub constants: Vec<NodeHandle>,
    pub equations: Vec<NodeHandle>,
    pub trigger: NodeHandle,
    pub merges: Vec<NodeHandle>,
    named: AHashMap<String, NodeHandle>,
}

impl BuiltGraph {
    /// The node created for a constant or equation.
    pub fn node_named(&self, name: &str) -> Option<NodeHandle> {
        self.named.get(name).copied()
    }

    /// Reverse lookup of [`node_named`](Self::node_named).
    pub fn name_of(&self, handle: NodeHandle) -> Option<&str> {
        self.named
            .iter()
            .find(|(_, h)| **h == handle)
            .map(|(name, _)| name.as_str())
    }
}

/// Translates a `MessageSpec` into canvas calls in a fixed order.
pub struct GraphBuilder<'a, C: Canvas> {
    spec: &'a MessageSpec,
    canvas: &'a mut C,
    named: AHashMap<String, NodeHandle>,
}

impl<'a, C: Canvas> GraphBuilder<'a, C> {
    pub fn new(spec: &'a MessageSpec, canvas: &'a mut C) -> Self {
        Self {
            spec,
            canvas,
            named: AHashMap::new(),
        }
    }

    pub fn build(mut self) -> Result<BuiltGraph, BuildError> {
        let spec = self.spec;

        // 1. Endpoints
        let bang_inlet = self.create(NodeKind::bare("inlet"), Some(BANG_INLET_POS));
        let slot_inlet = self.create(NodeKind::bare("inlet"), Some(SLOT_INLET_POS));
        let outlet = self.create(NodeKind::bare("outlet"), Some(OUTLET_POS));

        // 2. Router over the slots, unmatched branch last
        let router = self.create(
            NodeKind::object("route", spec.slots().iter().cloned()),
            Some(ROUTER_POS),
        );
        self.wire(slot_inlet, 0, router, 0);

        // 3. Diagnostics for unknown slots
        let error_sink = self.create(
            NodeKind::object(
                "print",
                [format!("{}:", spec.name()), "unknown".into(), "slot".into()],
            ),
            Some(ERROR_SINK_POS),
        );
        self.wire(router, spec.slots().len(), error_sink, 0);

        // 4. Constants
        self.canvas.set_cursor(CONSTANTS_CURSOR);
        let mut constants = Vec::with_capacity(spec.constants().len());
        for constant in spec.constants() {
            let handle = self.create(NodeKind::message([constant.as_str()]), None);
            self.named.insert(constant.clone(), handle);
            constants.push(handle);
        }

        // 5. Equations, in source order
        self.canvas.set_cursor(EQUATIONS_CURSOR);
        let mut equations = Vec::with_capacity(spec.equations().len());
        for equation in spec.equations() {
            equations.push(self.build_equation(router, equation)?);
        }

        // 6. Trigger: constants on outlets 1..=N, the merge chain on outlet 0.
        // Pd fires trigger outlets right to left, so the chain fires last.
        let outputs = self.resolve_outputs()?;
        self.canvas.set_cursor(OUTPUT_CURSOR);
        let trigger = self.create(
            NodeKind::object("t", vec!["b"; constants.len() + 1]),
            None,
        );
        self.wire(bang_inlet, 0, trigger, 0);
        for (idx, &constant) in constants.iter().enumerate() {
            self.wire(trigger, idx + 1, constant, 0);
        }

        // 7. Left-to-right list chain accumulating the outputs
        let mut merges = Vec::with_capacity(outputs.len());
        let mut previous = trigger;
        for source in outputs {
            let merge = self.create(NodeKind::bare("list"), None);
            self.wire(previous, 0, merge, 0);
            self.wire(source, 0, merge, 1);
            merges.push(merge);
            previous = merge;
        }
        self.wire(previous, 0, outlet, 0);

        Ok(BuiltGraph {
            bang_inlet,
            slot_inlet,
            outlet,
            router,
            error_sink,
            constants,
            equations,
            trigger,
            merges,
            named: self.named,
        })
    }

    fn build_equation(
        &mut self,
        router: NodeHandle,
        equation: &Equation,
    ) -> Result<NodeHandle, BuildError> {
        let mut incoming = Vec::new();
        for name in &equation.primary_args {
            let site = ReferenceSite::PrimaryArgs {
                equation: equation.name.clone(),
            };
            let (source, outlet) = self.resolve(router, name, site)?;
            incoming.push((source, outlet, PRIMARY_INLET));
        }
        for arg in &equation.secondary_args {
            let site = ReferenceSite::SecondaryArgs {
                equation: equation.name.clone(),
            };
            let (source, outlet) = self.resolve(router, &arg.name, site)?;
            let inlet = if arg.quoted {
                VARIANT_INLET
            } else {
                SECONDARY_INLET
            };
            incoming.push((source, outlet, inlet));
        }

        let node = self.create(NodeKind::bare(equation.function.as_str()), None);
        for (source, outlet, inlet) in incoming {
            self.wire(source, outlet, node, inlet);
        }
        // Registered after wiring so an equation cannot feed itself.
        self.named.insert(equation.name.clone(), node);
        debug!("Built equation '{}' as node {}", equation.name, node);
        Ok(node)
    }

    /// Source node and outlet for a name. Slot names never collide with
    /// named nodes, and named nodes must already exist.
    fn resolve(
        &self,
        router: NodeHandle,
        name: &str,
        site: ReferenceSite,
    ) -> Result<(NodeHandle, usize), BuildError> {
        if let Some(idx) = self.spec.slot_index(name) {
            return Ok((router, idx));
        }
        self.named
            .get(name)
            .map(|&handle| (handle, 0))
            .ok_or_else(|| BuildError::UnresolvedReference {
                name: name.to_string(),
                site,
            })
    }

    fn resolve_outputs(&self) -> Result<Vec<NodeHandle>, BuildError> {
        self.spec
            .outputs()
            .iter()
            .map(|name| {
                self.named
                    .get(name)
                    .copied()
                    .ok_or_else(|| BuildError::UnresolvedReference {
                        name: name.clone(),
                        site: ReferenceSite::Output,
                    })
            })
            .collect()
    }

    fn create(&mut self, kind: NodeKind, position: Option<Position>) -> NodeHandle {
        trace!("Creating {:?}", kind);
        self.canvas.create_node(kind, position)
    }

    fn wire(&mut self, source: NodeHandle, outlet: usize, dest: NodeHandle, inlet: usize) {
        trace!("Connecting {}:{} -> {}:{}", source, outlet, dest, inlet);
        self.canvas.connect(source, outlet, dest, inlet);
    }
}
