//! Core data types for the graph editor.
//!
//! This module defines the identifier aliases, integer pixel geometry, and
//! style structures shared between the editor state machine and the rendering
//! surface.

use uuid::Uuid;

/// Unique identifier for a primitive drawn on the surface.
///
/// Assigned by the surface when a shape is created; never changes and is
/// never reused for another shape.
pub type ShapeId = Uuid;

/// Unique identifier for graph nodes. A node is identified by its backing
/// circle shape.
pub type NodeId = ShapeId;

/// Unique identifier for graph edges. An edge is identified by its backing
/// line shape.
pub type EdgeId = ShapeId;

/// A point in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// Horizontal coordinate in pixels.
    pub x: i32,
    /// Vertical coordinate in pixels.
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in surface pixel space, stored as inclusive
/// min/max corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Top-left corner.
    pub min: Point,
    /// Bottom-right corner.
    pub max: Point,
}

impl BoundingBox {
    /// Creates a bounding box from its two corners.
    ///
    /// The caller is expected to pass `min` and `max` in order; no
    /// normalization is performed.
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates a square box of the given side length with its top-left
    /// corner at `top_left`.
    pub fn square(top_left: Point, side: i32) -> Self {
        Self {
            min: top_left,
            max: Point::new(top_left.x + side, top_left.y + side),
        }
    }

    /// Creates a square region of the given side length centered on `center`,
    /// clipped against the top/left surface edges.
    ///
    /// When the centered region would extend past an edge, the near corner is
    /// clamped to zero while the far corner stays where it is. The region is
    /// clipped rather than translated, so a click near the origin tests a
    /// smaller area instead of a shifted one.
    pub fn clipped_around(center: Point, side: i32) -> Self {
        let half = side / 2;
        Self {
            min: Point::new((center.x - half).max(0), (center.y - half).max(0)),
            max: Point::new(center.x + half, center.y + half),
        }
    }

    /// Creates a bounding box spanning two arbitrary points, normalizing the
    /// corner order.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Returns the center of the box, truncating toward the top-left on odd
    /// extents.
    pub fn center(&self) -> Point {
        Point::new(
            self.min.x + (self.max.x - self.min.x) / 2,
            self.min.y + (self.max.y - self.min.y) / 2,
        )
    }

    /// Returns whether this box and `other` overlap or touch.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Returns whether the given point lies inside or on the box boundary.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// An opaque RGB color.
///
/// Kept renderer-agnostic; conversion to the host toolkit's color type
/// happens at the paint seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Visual style applied to a drawn shape.
///
/// For circles the fill and outline are distinct; for lines the outline
/// describes the stroke and the fill is unused by the painter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Interior fill color.
    pub fill_color: Color,
    /// Outline (or stroke) color.
    pub outline_color: Color,
    /// Outline (or stroke) thickness in pixels.
    pub outline_thickness: f32,
}
