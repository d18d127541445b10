//! Canvas input wiring and shape painting.
//!
//! This module converts egui pointer positions into canvas-local integer
//! pixels, routes presses either to a registered shape or to the blank
//! surface handler, and paints the retained shape store each frame.

use super::state::GraphApp;
use crate::surface::ShapeKind;
use crate::types::{Color, Point};
use eframe::egui;

impl GraphApp {
    /// Draws the canvas area and processes pointer clicks on it.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let canvas_rect = response.rect;

        let background = if self.dark_mode {
            egui::Color32::from_gray(24)
        } else {
            egui::Color32::from_gray(250)
        };
        painter.rect_filled(canvas_rect, 0.0, background);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - canvas_rect.min;
                self.route_click(Point::new(local.x as i32, local.y as i32));
            }
        }

        self.paint_shapes(&painter, canvas_rect);
    }

    /// Routes a primary-button click at a canvas-local position.
    ///
    /// A click landing on a retained shape is dispatched through the
    /// editor's per-shape click table; a click on blank canvas goes to the
    /// surface-click handler.
    pub fn route_click(&mut self, pos: Point) {
        match self.editor.surface().topmost_at(pos) {
            Some(shape) => self.editor.handle_click_on(shape),
            None => {
                self.editor.handle_surface_click(pos.x, pos.y);
            }
        }
    }

    /// Paints every retained shape in back-to-front order, offset into the
    /// canvas rectangle.
    fn paint_shapes(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let origin = canvas_rect.min.to_vec2();

        for shape in self.editor.surface().shapes() {
            let stroke = egui::Stroke::new(
                shape.style.outline_thickness,
                color32(shape.style.outline_color),
            );
            match shape.kind {
                ShapeKind::Circle { bounds } => {
                    let center = bounds.center();
                    let radius = (bounds.max.x - bounds.min.x) as f32 / 2.0;
                    let screen_center = egui::pos2(center.x as f32, center.y as f32) + origin;
                    painter.circle_filled(screen_center, radius, color32(shape.style.fill_color));
                    painter.circle_stroke(screen_center, radius, stroke);
                }
                ShapeKind::Line { a, b } => {
                    painter.line_segment(
                        [
                            egui::pos2(a.x as f32, a.y as f32) + origin,
                            egui::pos2(b.x as f32, b.y as f32) + origin,
                        ],
                        stroke,
                    );
                }
            }
        }
    }
}

/// Converts a surface color to an egui color.
fn color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}
