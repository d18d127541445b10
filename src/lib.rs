//! # Fastgraph
//!
//! A fast interactive graph drawing surface: click blank canvas to place
//! nodes, click two nodes in sequence to connect them with an edge. The
//! surface maintains selection styling and rejects placements that would
//! overlap an existing node.
//!
//! ## Architecture
//!
//! - The [`GraphEditor`] state machine interprets clicks; it is decoupled
//!   from any rendering technology through the [`Surface`] trait.
//! - [`ShapeStore`] is the retained draw list painted by the egui canvas
//!   and queried for overlaps and hit tests.
//! - Diagnostics flow through an injected [`DiagnosticSink`] rather than a
//!   process-wide logger.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
mod editor;
mod logging;
mod surface;
mod types;
mod ui;

// Re-export public types and functions
pub use editor::*;
pub use logging::*;
pub use surface::*;
pub use types::*;
use ui::GraphApp;

/// Runs the graph editor application with default settings.
///
/// This function initializes the egui application window and starts the main
/// event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use fastgraph::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Fastgraph",
        options,
        Box::new(|_cc| Ok(Box::new(GraphApp::default()))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_defaults() {
        let editor = GraphEditor::new(
            ShapeStore::new(),
            Box::new(NullSink),
            EditorConfig::default(),
        );
        assert_eq!(editor.mode(), Mode::Viewing);
        assert_eq!(editor.node_count(), 0);
        assert_eq!(editor.edge_count(), 0);
    }

    #[test]
    fn test_default_config_matches_constants() {
        let config = EditorConfig::default();
        assert_eq!(config.node_diameter, constants::NODE_DIAMETER);
        assert!(!config.allow_overlap);
        assert!(config.auto_connect);
        assert!(config.allow_parallel_edges);
    }
}
