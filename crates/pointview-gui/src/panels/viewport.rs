use pointview_core::scene::{build_scene, pick, ScreenRect};
use pointview_core::view::hover_events;

use crate::app::PointViewApp;
use crate::convert::rgb_to_color32;

const HOVER_STROKE_WIDTH: f32 = 1.5;

pub fn show(ctx: &egui::Context, app: &mut PointViewApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            paint_background(ui, rect);

            if app.dataset.is_empty() {
                show_placeholder(ui);
                return;
            }

            let response = ui.allocate_rect(rect, egui::Sense::hover());
            let viewport = to_screen_rect(rect);

            update_hover(&response, app, &viewport);
            draw_points(ui, app, &viewport);
        });
}

fn to_screen_rect(rect: egui::Rect) -> ScreenRect {
    ScreenRect::new([rect.min.x, rect.min.y], [rect.width(), rect.height()])
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Pick the point under the pointer and turn any change into enter/leave events.
fn update_hover(response: &egui::Response, app: &mut PointViewApp, viewport: &ScreenRect) {
    let scene = build_scene(&app.dataset, &app.view, &app.config);
    let projected = scene.project(viewport);
    let picked = response
        .hover_pos()
        .and_then(|pos| pick(&projected, [pos.x, pos.y]));

    let events = hover_events(app.view.hovered(), picked);
    app.dispatch_all(events);
}

fn draw_points(ui: &egui::Ui, app: &PointViewApp, viewport: &ScreenRect) {
    let scene = build_scene(&app.dataset, &app.view, &app.config);
    let painter = ui.painter();

    for projected in scene.project(viewport) {
        let Some(point) = scene.points.get(projected.index) else {
            continue;
        };
        let center = egui::pos2(projected.center[0], projected.center[1]);
        painter.circle_filled(center, projected.radius, rgb_to_color32(point.shaded));
        if point.hovered {
            painter.circle_stroke(
                center,
                projected.radius,
                egui::Stroke::new(HOVER_STROKE_WIDTH, egui::Color32::WHITE),
            );
        }
    }
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("No points to display")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
