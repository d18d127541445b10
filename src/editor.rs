//! The pointer-event-driven graph construction state machine.
//!
//! [`GraphEditor`] interprets raw click coordinates into node creation,
//! selection toggling, edge formation, and collision-based rejection of
//! overlapping placements. It owns the interaction mode, the node and edge
//! registries, and the ordered selection list; geometry lives in the injected
//! [`Surface`] and is never duplicated here.
//!
//! There is deliberately no error taxonomy in this module: every anomalous
//! condition (placement collision, click while viewing, re-click toggling)
//! is a recoverable policy branch expressed as a silent no-op plus a
//! diagnostic line.

use crate::constants;
use crate::logging::DiagnosticSink;
use crate::surface::Surface;
use crate::types::{BoundingBox, Color, EdgeId, NodeId, Point, ShapeId, ShapeStyle};
use std::collections::{HashMap, HashSet};

const LOG_CONTEXT: &str = "fastgraph::editor";

/// Interaction mode of the editor surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Clicks are inert.
    Viewing,
    /// Clicks create nodes, toggle selection, and form edges.
    Drawing,
}

/// What a registered shape responds to when clicked.
///
/// The table mapping shapes to targets is filled at creation time, so click
/// identity comes from registration rather than being re-derived from
/// geometry. This stays robust once shapes overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The shape is a node; clicks toggle its selection.
    Node(NodeId),
    /// The shape is an edge; clicks are currently inert, anticipating
    /// future edge-selection behavior.
    Edge(EdgeId),
}

/// Tunable editor behavior and appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Node diameter in pixels.
    pub node_diameter: i32,
    /// Factor by which the diameter is inflated when testing a candidate
    /// placement for collisions.
    pub collision_inflation: f32,
    /// When set, colliding placements are created anyway.
    pub allow_overlap: bool,
    /// When set, selecting a second node immediately connects the pair and
    /// clears the selection.
    pub auto_connect: bool,
    /// When set, multiple edges between the same node pair are permitted.
    pub allow_parallel_edges: bool,
    /// Node interior fill color.
    pub node_fill_color: Color,
    /// Outline color for unselected nodes.
    pub node_outline_color: Color,
    /// Outline thickness for unselected nodes.
    pub node_outline_thickness: f32,
    /// Outline color for selected nodes.
    pub selected_outline_color: Color,
    /// Outline thickness for selected nodes.
    pub selected_outline_thickness: f32,
    /// Edge stroke color.
    pub edge_color: Color,
    /// Edge stroke thickness.
    pub edge_thickness: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            node_diameter: constants::NODE_DIAMETER,
            collision_inflation: constants::COLLISION_INFLATION,
            allow_overlap: false,
            auto_connect: true,
            allow_parallel_edges: true,
            node_fill_color: constants::NODE_FILL_COLOR,
            node_outline_color: constants::NODE_OUTLINE_COLOR,
            node_outline_thickness: constants::NODE_OUTLINE_THICKNESS,
            selected_outline_color: constants::SELECTED_OUTLINE_COLOR,
            selected_outline_thickness: constants::SELECTED_OUTLINE_THICKNESS,
            edge_color: constants::EDGE_COLOR,
            edge_thickness: constants::EDGE_THICKNESS,
        }
    }
}

/// Interactive graph editor over an injected rendering surface.
///
/// The editor issues draw and style commands to the surface and emits
/// diagnostics to the injected sink. Node centers are resolved from the
/// surface on demand; the editor itself only tracks membership, edge
/// endpoints, the selection order, and the per-shape click table.
pub struct GraphEditor<S: Surface> {
    surface: S,
    sink: Box<dyn DiagnosticSink>,
    config: EditorConfig,
    mode: Mode,
    nodes: HashSet<NodeId>,
    edges: HashMap<EdgeId, (NodeId, NodeId)>,
    selection: Vec<NodeId>,
    click_targets: HashMap<ShapeId, ClickTarget>,
}

impl<S: Surface> GraphEditor<S> {
    /// Creates an editor in viewing mode over the given surface.
    pub fn new(surface: S, sink: Box<dyn DiagnosticSink>, config: EditorConfig) -> Self {
        Self {
            surface,
            sink,
            config,
            mode: Mode::Viewing,
            nodes: HashSet::new(),
            edges: HashMap::new(),
            selection: Vec::new(),
            click_targets: HashMap::new(),
        }
    }

    /// Returns the current interaction mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the editor configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Returns a shared reference to the rendering surface, for painting.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the number of nodes created so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges created so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the endpoints of an edge in selection order, if it exists.
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(&edge).copied()
    }

    /// Returns the currently selected nodes, oldest selection first.
    pub fn selection(&self) -> &[NodeId] {
        &self.selection
    }

    /// Switches the editor into drawing mode. No effect if already drawing.
    pub fn enter_drawing_mode(&mut self) {
        if self.mode != Mode::Drawing {
            self.mode = Mode::Drawing;
            self.sink.info(LOG_CONTEXT, "entered drawing mode");
        }
    }

    /// Switches the editor back into viewing mode, making clicks inert.
    /// No effect if already viewing. Selection state is left untouched.
    pub fn enter_viewing_mode(&mut self) {
        if self.mode != Mode::Viewing {
            self.mode = Mode::Viewing;
            self.sink.info(LOG_CONTEXT, "entered viewing mode");
        }
    }

    /// Handles a primary-button click on empty canvas area.
    ///
    /// In viewing mode the click is inert. In drawing mode an inflated
    /// square region around the click point is tested for overlap with
    /// existing shapes; a node is created unless the region is occupied and
    /// overlapping placement is disallowed. Rejection is silent apart from
    /// diagnostics.
    pub fn handle_surface_click(&mut self, x: i32, y: i32) -> Option<NodeId> {
        self.sink
            .debug(LOG_CONTEXT, &format!("surface click at ({x}, {y})"));
        if self.mode == Mode::Viewing {
            return None;
        }

        let side = (self.config.node_diameter as f32 * self.config.collision_inflation) as i32;
        let region = BoundingBox::clipped_around(Point::new(x, y), side);
        let hits = self.surface.query_overlap(region);

        if hits.is_empty() || self.config.allow_overlap {
            Some(self.create_node_at(x, y))
        } else {
            self.sink.warning(
                LOG_CONTEXT,
                &format!(
                    "placement at ({x}, {y}) collides with {} existing shape(s)",
                    hits.len()
                ),
            );
            self.sink.info(LOG_CONTEXT, "node placement skipped");
            None
        }
    }

    /// Creates a node centered at the given point and returns its identifier.
    ///
    /// The bounding box top-left is clamped to the top/left surface edges,
    /// so the box never has a negative origin. The node receives default
    /// (unselected) styling immediately and is registered in the click
    /// table under its own identifier.
    pub fn create_node_at(&mut self, x: i32, y: i32) -> NodeId {
        let d = self.config.node_diameter;
        let top_left = Point::new((x - d / 2).max(0), (y - d / 2).max(0));
        let bounds = BoundingBox::square(top_left, d);

        let id = self.surface.draw_circle(bounds, self.config.node_fill_color);
        self.apply_default_style(id);
        self.click_targets.insert(id, ClickTarget::Node(id));
        self.nodes.insert(id);

        self.sink
            .info(LOG_CONTEXT, &format!("created node {id} at ({x}, {y})"));
        id
    }

    /// Dispatches a click that landed on a registered shape.
    ///
    /// Node shapes forward to [`GraphEditor::handle_node_click`]; edge
    /// shapes are inert placeholders for future edge selection. Clicks on
    /// unregistered shapes are logged and dropped.
    pub fn handle_click_on(&mut self, shape: ShapeId) {
        match self.click_targets.get(&shape).copied() {
            Some(ClickTarget::Node(node)) => self.handle_node_click(node),
            Some(ClickTarget::Edge(edge)) => {
                self.sink
                    .debug(LOG_CONTEXT, &format!("click on edge {edge} ignored"));
            }
            None => {
                self.sink
                    .debug(LOG_CONTEXT, &format!("click on unregistered shape {shape}"));
            }
        }
    }

    /// Toggles the selection state of a node.
    ///
    /// Ignored in viewing mode, even though the click landed on a node.
    /// Selecting a second node while auto-connect is enabled immediately
    /// forms an edge between the first and second selections (in that
    /// order) and clears the selection, restoring default styling on both
    /// endpoints.
    pub fn handle_node_click(&mut self, node: NodeId) {
        if self.mode == Mode::Viewing {
            self.sink
                .debug(LOG_CONTEXT, &format!("viewing-mode click on node {node} ignored"));
            return;
        }

        if let Some(pos) = self.selection.iter().position(|id| *id == node) {
            self.selection.remove(pos);
            self.apply_default_style(node);
            self.sink
                .debug(LOG_CONTEXT, &format!("deselected node {node}"));
        } else {
            self.selection.push(node);
            self.apply_selected_style(node);
            self.sink.debug(LOG_CONTEXT, &format!("selected node {node}"));
        }

        if self.selection.len() == 2 && self.config.auto_connect {
            let (a, b) = (self.selection[0], self.selection[1]);
            self.connect(a, b);
            self.selection.clear();
            // Both endpoints are no longer selected; restyle them explicitly
            // so neither is left rendered as a phantom selection.
            self.apply_default_style(a);
            self.apply_default_style(b);
        }
    }

    /// Creates an edge between two distinct existing nodes and returns its
    /// identifier, or `None` when policy rejects the pair.
    ///
    /// Self-loops are not permitted. When parallel edges are disallowed, a
    /// second edge between the same pair (in either endpoint order) is
    /// suppressed. The line is drawn between the nodes' current centers and
    /// sent behind all other shapes so nodes keep occluding it.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        if a == b {
            self.sink
                .warning(LOG_CONTEXT, &format!("self-loop on node {a} rejected"));
            return None;
        }
        if !self.nodes.contains(&a) || !self.nodes.contains(&b) {
            self.sink.warning(
                LOG_CONTEXT,
                &format!("cannot connect {a} and {b}: unknown node"),
            );
            return None;
        }
        if !self.config.allow_parallel_edges
            && self
                .edges
                .values()
                .any(|&(x, y)| (x, y) == (a, b) || (x, y) == (b, a))
        {
            self.sink.info(
                LOG_CONTEXT,
                &format!("parallel edge between {a} and {b} suppressed"),
            );
            return None;
        }

        let (center_a, center_b) = match (self.surface.center_of(a), self.surface.center_of(b)) {
            (Some(ca), Some(cb)) => (ca, cb),
            _ => {
                self.sink.error(
                    LOG_CONTEXT,
                    &format!("surface has no center for node {a} or {b}"),
                );
                return None;
            }
        };

        let id = self.surface.draw_line(
            center_a,
            center_b,
            self.config.edge_color,
            self.config.edge_thickness,
        );
        self.apply_default_edge_style(id);
        self.surface.send_to_back(id);
        self.click_targets.insert(id, ClickTarget::Edge(id));
        self.edges.insert(id, (a, b));

        self.sink.info(
            LOG_CONTEXT,
            &format!(
                "created edge {id} from {a} ({}, {}) to {b} ({}, {})",
                center_a.x, center_a.y, center_b.x, center_b.y
            ),
        );
        Some(id)
    }

    /// Applies the selected outline style to a node shape.
    fn apply_selected_style(&mut self, node: NodeId) {
        self.surface.set_style(
            node,
            ShapeStyle {
                fill_color: self.config.node_fill_color,
                outline_color: self.config.selected_outline_color,
                outline_thickness: self.config.selected_outline_thickness,
            },
        );
    }

    /// Applies the default (unselected) outline style to a node shape.
    fn apply_default_style(&mut self, node: NodeId) {
        self.surface.set_style(
            node,
            ShapeStyle {
                fill_color: self.config.node_fill_color,
                outline_color: self.config.node_outline_color,
                outline_thickness: self.config.node_outline_thickness,
            },
        );
    }

    /// Applies the default stroke style to an edge shape.
    fn apply_default_edge_style(&mut self, edge: EdgeId) {
        self.surface.set_style(
            edge,
            ShapeStyle {
                fill_color: self.config.edge_color,
                outline_color: self.config.edge_color,
                outline_thickness: self.config.edge_thickness,
            },
        );
    }
}
