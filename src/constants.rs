//! Shared application-wide constants.
//! Centralizes tweakable values used by the editor defaults and canvas.

use crate::types::Color;

// Node appearance
/// Default node diameter in pixels.
pub const NODE_DIAMETER: i32 = 20;
/// Default node fill color.
pub const NODE_FILL_COLOR: Color = Color::new(0, 0, 0);
/// Outline color for unselected nodes.
pub const NODE_OUTLINE_COLOR: Color = Color::new(0, 0, 0);
/// Outline thickness for unselected nodes (in pixels).
pub const NODE_OUTLINE_THICKNESS: f32 = 1.0;
/// Outline color for selected nodes.
pub const SELECTED_OUTLINE_COLOR: Color = Color::new(100, 150, 255);
/// Outline thickness for selected nodes (in pixels).
pub const SELECTED_OUTLINE_THICKNESS: f32 = 3.0;

// Edge appearance
/// Default edge stroke color.
pub const EDGE_COLOR: Color = Color::new(0, 0, 0);
/// Default edge stroke thickness (in pixels).
pub const EDGE_THICKNESS: f32 = 2.0;

// Collision testing
/// Factor by which the node diameter is inflated when testing a candidate
/// placement for overlap with existing shapes.
pub const COLLISION_INFLATION: f32 = 2.0;
