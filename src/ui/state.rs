//! Application state for the graph editor window.

use crate::editor::{EditorConfig, GraphEditor};
use crate::logging::LogSink;
use crate::surface::ShapeStore;

/// The main application structure wrapping the editor core.
///
/// This struct implements the `eframe::App` trait and wires pointer input
/// from the egui canvas into the editor's click handlers.
pub struct GraphApp {
    /// The graph editor state machine over the retained shape store.
    pub editor: GraphEditor<ShapeStore>,
    /// Whether dark mode visuals are enabled.
    pub dark_mode: bool,
}

impl Default for GraphApp {
    fn default() -> Self {
        Self {
            editor: GraphEditor::new(
                ShapeStore::new(),
                Box::new(LogSink),
                EditorConfig::default(),
            ),
            dark_mode: false,
        }
    }
}
