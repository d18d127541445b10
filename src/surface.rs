//! Rendering-surface abstraction and the retained shape store.
//!
//! The editor core never talks to a toolkit directly. It issues draw and
//! style commands through the [`Surface`] trait and receives opaque shape
//! identifiers back. [`ShapeStore`] is the production implementation: a
//! retained, back-to-front list of primitives that the egui canvas paints
//! each frame and that answers overlap and hit-test queries against shape
//! bounding boxes.

use crate::types::{BoundingBox, Color, Point, ShapeId, ShapeStyle};
use uuid::Uuid;

/// Drawing and hit-testing capability consumed by the editor core.
///
/// Implementations assign a fresh [`ShapeId`] per drawn primitive;
/// identifiers are never reused.
pub trait Surface {
    /// Draws a filled circle inscribed in `bounds` and returns its identifier.
    fn draw_circle(&mut self, bounds: BoundingBox, fill_color: Color) -> ShapeId;

    /// Draws a line segment from `a` to `b` and returns its identifier.
    fn draw_line(&mut self, a: Point, b: Point, color: Color, thickness: f32) -> ShapeId;

    /// Replaces the style of an existing shape. Unknown identifiers are
    /// ignored.
    fn set_style(&mut self, shape: ShapeId, style: ShapeStyle);

    /// Returns the center of the given shape, or `None` for unknown
    /// identifiers.
    fn center_of(&self, shape: ShapeId) -> Option<Point>;

    /// Returns the identifiers of all shapes whose bounding box overlaps the
    /// given region, in back-to-front draw order.
    fn query_overlap(&self, region: BoundingBox) -> Vec<ShapeId>;

    /// Moves the given shape behind all other shapes in draw order.
    fn send_to_back(&mut self, shape: ShapeId);
}

/// Geometry of a retained primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// A filled circle inscribed in its bounding box.
    Circle {
        /// Bounding box the circle is inscribed in.
        bounds: BoundingBox,
    },
    /// A straight line segment between two points.
    Line {
        /// First endpoint.
        a: Point,
        /// Second endpoint.
        b: Point,
    },
}

/// A retained primitive: geometry plus current style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Identifier assigned at creation.
    pub id: ShapeId,
    /// Geometry of the primitive.
    pub kind: ShapeKind,
    /// Current visual style.
    pub style: ShapeStyle,
}

impl Shape {
    /// Returns the shape's axis-aligned bounding box.
    pub fn bounds(&self) -> BoundingBox {
        match self.kind {
            ShapeKind::Circle { bounds } => bounds,
            ShapeKind::Line { a, b } => BoundingBox::from_points(a, b),
        }
    }

    /// Returns the shape's center point.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }
}

/// Retained draw list backing the canvas.
///
/// Shapes are stored back-to-front: index 0 paints first (deepest), the last
/// index paints on top. Overlap queries and hit tests operate on bounding
/// boxes, matching the behavior of classic canvas toolkits where even line
/// items participate with their enclosing rectangle.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all shapes in back-to-front draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns the number of retained shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns whether the store holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns the current style of a shape, if it exists.
    pub fn style_of(&self, shape: ShapeId) -> Option<ShapeStyle> {
        self.find(shape).map(|s| s.style)
    }

    /// Returns the bounding box of a shape, if it exists.
    pub fn bounds_of(&self, shape: ShapeId) -> Option<BoundingBox> {
        self.find(shape).map(|s| s.bounds())
    }

    /// Returns the topmost shape whose bounding box contains the given
    /// point, if any.
    pub fn topmost_at(&self, p: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.bounds().contains(p))
            .map(|s| s.id)
    }

    fn find(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    fn push(&mut self, kind: ShapeKind, style: ShapeStyle) -> ShapeId {
        let id = Uuid::new_v4();
        self.shapes.push(Shape { id, kind, style });
        id
    }
}

impl Surface for ShapeStore {
    fn draw_circle(&mut self, bounds: BoundingBox, fill_color: Color) -> ShapeId {
        self.push(
            ShapeKind::Circle { bounds },
            ShapeStyle {
                fill_color,
                outline_color: fill_color,
                outline_thickness: 1.0,
            },
        )
    }

    fn draw_line(&mut self, a: Point, b: Point, color: Color, thickness: f32) -> ShapeId {
        self.push(
            ShapeKind::Line { a, b },
            ShapeStyle {
                fill_color: color,
                outline_color: color,
                outline_thickness: thickness,
            },
        )
    }

    fn set_style(&mut self, shape: ShapeId, style: ShapeStyle) {
        if let Some(s) = self.shapes.iter_mut().find(|s| s.id == shape) {
            s.style = style;
        }
    }

    fn center_of(&self, shape: ShapeId) -> Option<Point> {
        self.find(shape).map(|s| s.center())
    }

    fn query_overlap(&self, region: BoundingBox) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .filter(|s| s.bounds().intersects(&region))
            .map(|s| s.id)
            .collect()
    }

    fn send_to_back(&mut self, shape: ShapeId) {
        if let Some(idx) = self.shapes.iter().position(|s| s.id == shape) {
            let s = self.shapes.remove(idx);
            self.shapes.insert(0, s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle_at(store: &mut ShapeStore, x: i32, y: i32, side: i32) -> ShapeId {
        store.draw_circle(
            BoundingBox::square(Point::new(x, y), side),
            Color::new(0, 0, 0),
        )
    }

    #[test]
    fn test_shape_ids_are_unique() {
        let mut store = ShapeStore::new();
        let a = circle_at(&mut store, 0, 0, 20);
        let b = circle_at(&mut store, 0, 0, 20);
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_center_of_circle_and_line() {
        let mut store = ShapeStore::new();
        let circle = circle_at(&mut store, 10, 10, 20);
        let line = store.draw_line(
            Point::new(0, 0),
            Point::new(100, 50),
            Color::new(0, 0, 0),
            2.0,
        );

        assert_eq!(store.center_of(circle), Some(Point::new(20, 20)));
        assert_eq!(store.center_of(line), Some(Point::new(50, 25)));
        assert_eq!(store.center_of(Uuid::new_v4()), None);
    }

    #[test]
    fn test_query_overlap_hits_and_misses() {
        let mut store = ShapeStore::new();
        let near = circle_at(&mut store, 0, 0, 20);
        let far = circle_at(&mut store, 200, 200, 20);

        let hits = store.query_overlap(BoundingBox::square(Point::new(10, 10), 30));
        assert_eq!(hits, vec![near]);

        let hits = store.query_overlap(BoundingBox::square(Point::new(500, 500), 30));
        assert!(hits.is_empty());

        let hits = store.query_overlap(BoundingBox::square(Point::new(0, 0), 300));
        assert_eq!(hits, vec![near, far]);
    }

    #[test]
    fn test_query_overlap_sees_line_bounding_box() {
        let mut store = ShapeStore::new();
        let line = store.draw_line(
            Point::new(0, 0),
            Point::new(100, 100),
            Color::new(0, 0, 0),
            2.0,
        );

        // The query region only crosses the line's bounding box, not the
        // line itself; bounding-box semantics still report a hit.
        let hits = store.query_overlap(BoundingBox::square(Point::new(80, 0), 15));
        assert_eq!(hits, vec![line]);
    }

    #[test]
    fn test_send_to_back_reorders_draw_list() {
        let mut store = ShapeStore::new();
        let first = circle_at(&mut store, 0, 0, 20);
        let second = circle_at(&mut store, 0, 0, 20);
        assert_eq!(store.shapes()[0].id, first);

        store.send_to_back(second);
        assert_eq!(store.shapes()[0].id, second);
        assert_eq!(store.shapes()[1].id, first);
    }

    #[test]
    fn test_topmost_at_prefers_front_shape() {
        let mut store = ShapeStore::new();
        let bottom = circle_at(&mut store, 0, 0, 20);
        let top = circle_at(&mut store, 10, 10, 20);

        assert_eq!(store.topmost_at(Point::new(15, 15)), Some(top));
        assert_eq!(store.topmost_at(Point::new(2, 2)), Some(bottom));
        assert_eq!(store.topmost_at(Point::new(300, 300)), None);
    }

    #[test]
    fn test_set_style_replaces_existing_style() {
        let mut store = ShapeStore::new();
        let id = circle_at(&mut store, 0, 0, 20);
        let style = ShapeStyle {
            fill_color: Color::new(1, 2, 3),
            outline_color: Color::new(4, 5, 6),
            outline_thickness: 3.0,
        };

        store.set_style(id, style);
        assert_eq!(store.style_of(id), Some(style));

        // Unknown ids are ignored rather than panicking.
        store.set_style(Uuid::new_v4(), style);
        assert_eq!(store.len(), 1);
    }
}
