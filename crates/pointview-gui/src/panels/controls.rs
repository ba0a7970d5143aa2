use pointview_core::view::ViewerEvent;

use crate::app::PointViewApp;

const PANEL_MARGIN: f32 = 10.0;
const SLIDER_WIDTH: f32 = 200.0;

/// Point size slider floating over the top-left corner of the viewer.
pub fn show(ctx: &egui::Context, app: &mut PointViewApp) {
    let min = app.config.point_size.min;
    let max = app.config.point_size.max;
    let step = app.config.point_size.step;

    egui::Area::new(egui::Id::new("point_size_controls"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(PANEL_MARGIN, PANEL_MARGIN))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Point Size");
                    ui.spacing_mut().slider_width = SLIDER_WIDTH;

                    let mut value = app.view.point_size();
                    let response = ui.add(
                        egui::Slider::new(&mut value, min..=max)
                            .step_by(step as f64)
                            .clamping(egui::SliderClamping::Always),
                    );
                    if response.changed() {
                        app.dispatch(ViewerEvent::SliderChange(value));
                    }
                });
            });
        });
}
