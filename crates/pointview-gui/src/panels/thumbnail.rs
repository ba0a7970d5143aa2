use crate::app::PointViewApp;
use crate::state::ThumbnailSlot;

/// Draw the hovered point's thumbnail next to the pointer.
///
/// Painted on a tooltip layer with no widget behind it, so it never takes
/// pointer input away from the points underneath.
pub fn show(ctx: &egui::Context, app: &PointViewApp) {
    let Some(view) = app.view.thumbnail() else {
        return;
    };
    let Some(ThumbnailSlot::Ready(texture)) = app.thumbnails.get(view.src) else {
        return;
    };

    let [tex_w, tex_h] = texture.size();
    let width = app.config.thumbnail.width;
    let height = width * tex_h as f32 / tex_w.max(1) as f32;
    let rect = egui::Rect::from_min_size(
        egui::pos2(view.position[0], view.position[1]),
        egui::vec2(width, height),
    );

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("thumbnail"),
    ));
    painter.image(
        texture.id(),
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}
