use crate::app::PointViewApp;

pub fn show(ctx: &egui::Context, app: &PointViewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            ui.label(format!("{} points", app.dataset.len()));
            ui.separator();
            ui.label(format!("Point size: {:.1}", app.view.point_size()));
            ui.separator();
            match app.view.hovered().and_then(|i| app.dataset.get(i)) {
                Some(p) => ui.label(format!(
                    "#{} ({}, {})  label {}  {}",
                    p.index, p.x, p.y, p.label, p.file_path
                )),
                None => ui.label("No point hovered"),
            };
        });
        ui.add_space(2.0);
    });
}
