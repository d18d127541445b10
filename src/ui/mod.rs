//! User interface components for the graph editor.
//!
//! This module contains the eframe application wrapper around the editor
//! core, the top toolbar, and the canvas panel.
//!
//! # Module Organization
//!
//! - `state` - Application state structure and the main GraphApp
//! - `canvas` - Canvas input routing and shape painting

mod canvas;
mod state;

#[cfg(test)]
mod tests;

pub use state::GraphApp;

use crate::editor::Mode;
use eframe::egui;

impl eframe::App for GraphApp {
    /// Main update function called by egui for each frame.
    ///
    /// Lays out the top toolbar and the central canvas area.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `frame` - The eframe frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });
    }
}

impl GraphApp {
    /// Draws the toolbar with mode toggles, graph counters, and the theme
    /// switch.
    pub(crate) fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mode = self.editor.mode();
            if ui.selectable_label(mode == Mode::Viewing, "View").clicked() {
                self.editor.enter_viewing_mode();
            }
            if ui.selectable_label(mode == Mode::Drawing, "Draw").clicked() {
                self.editor.enter_drawing_mode();
            }

            ui.separator();
            ui.label(format!(
                "{} nodes, {} edges",
                self.editor.node_count(),
                self.editor.edge_count()
            ));
            if !self.editor.selection().is_empty() {
                ui.label(format!("{} selected", self.editor.selection().len()));
            }

            ui.separator();
            let theme_label = if self.dark_mode { "Light" } else { "Dark" };
            if ui.button(theme_label).clicked() {
                self.dark_mode = !self.dark_mode;
            }
        });
    }
}
