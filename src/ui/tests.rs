use super::*;
use crate::types::Point;

/// Run a single headless egui frame with the provided closure.
fn run_ui_with(mut f: impl FnMut(&egui::Context)) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));

    let ctx = egui::Context::default();
    ctx.run(raw, |ctx| {
        ctx.set_visuals(egui::Visuals::light());
        f(ctx);
    })
}

#[test]
fn routed_click_on_blank_canvas_creates_node_in_drawing_mode() {
    let mut app = GraphApp::default();
    app.editor.enter_drawing_mode();

    app.route_click(Point::new(150, 120));

    assert_eq!(app.editor.node_count(), 1);
}

#[test]
fn routed_click_is_inert_in_viewing_mode() {
    let mut app = GraphApp::default();

    app.route_click(Point::new(150, 120));

    assert_eq!(app.editor.node_count(), 0);
    assert!(app.editor.surface().is_empty());
}

#[test]
fn routed_clicks_build_an_edge_between_two_nodes() {
    let mut app = GraphApp::default();
    app.editor.enter_drawing_mode();

    // Place two nodes far enough apart to avoid the collision region.
    app.route_click(Point::new(100, 100));
    app.route_click(Point::new(300, 100));
    assert_eq!(app.editor.node_count(), 2);

    // Click each node center; the second selection auto-connects them.
    app.route_click(Point::new(100, 100));
    assert_eq!(app.editor.selection().len(), 1);
    app.route_click(Point::new(300, 100));

    assert_eq!(app.editor.edge_count(), 1);
    assert!(app.editor.selection().is_empty());
}

#[test]
fn routed_click_on_existing_node_does_not_place_another() {
    let mut app = GraphApp::default();
    app.editor.enter_drawing_mode();

    app.route_click(Point::new(100, 100));
    // A second click on the same spot lands on the node shape and is
    // routed to selection, never to placement.
    app.route_click(Point::new(100, 100));

    assert_eq!(app.editor.node_count(), 1);
    assert_eq!(app.editor.selection().len(), 1);
}

#[test]
fn canvas_renders_without_mutating_graph_state() {
    let mut app = GraphApp::default();
    app.editor.enter_drawing_mode();
    app.editor.create_node_at(100, 100);
    app.editor.create_node_at(300, 100);

    let _ = run_ui_with(|ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_canvas(ui);
        });
    });

    assert_eq!(app.editor.node_count(), 2);
    assert_eq!(app.editor.edge_count(), 0);
    assert!(app.editor.selection().is_empty());
}

#[test]
fn toolbar_renders_for_both_modes() {
    let mut app = GraphApp::default();

    let _ = run_ui_with(|ctx| {
        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            app.draw_toolbar(ui);
        });
    });

    app.editor.enter_drawing_mode();
    let _ = run_ui_with(|ctx| {
        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            app.draw_toolbar(ui);
        });
    });
}
