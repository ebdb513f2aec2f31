use egui::{Color32, Context, Id, LayerId, Order, Stroke, pos2};
use glam::Vec3;
use snakeview_common::{BlockKind, Layer};
use snakeview_tools::SceneInspector;
use snakeview_viewer::Viewer;

const CROSSHAIR_HALF: f32 = 8.0;

/// Overlay panel: frame, counts, layer toggles and block selection.
pub fn draw_panel(ctx: &Context, viewer: &mut Viewer, camera: Vec3, captured: bool) {
    let summary = SceneInspector::summary(viewer.scene());

    egui::Window::new("snakeview")
        .default_pos(pos2(12.0, 12.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!(
                "Frame: {}  ({})",
                viewer.frame(),
                viewer.store().root().display()
            ));
            ui.label(format!("Blocks: {}", summary.total));
            ui.label(format!(
                "Camera: ({:.1}, {:.1}, {:.1})",
                camera.x, camera.y, camera.z
            ));
            ui.separator();

            ui.label("Layers");
            for (n, layer) in Layer::ALL.into_iter().enumerate() {
                let mut visible = viewer.layers().is_visible(layer);
                let kind = layer.block_kind();
                let label = format!("{} {} ({})", n + 1, layer, summary.count(kind));
                if ui.checkbox(&mut visible, label).changed() {
                    viewer.toggle_layer(layer);
                }
            }
            ui.separator();

            ui.label("Place");
            ui.horizontal(|ui| {
                for (n, kind) in BlockKind::ALL.into_iter().enumerate() {
                    let selected = viewer.selected() == kind;
                    if ui
                        .selectable_label(selected, format!("{} {kind}", n + 5))
                        .clicked()
                    {
                        viewer.select_block(kind);
                    }
                }
            });

            ui.separator();
            if captured {
                ui.small("LMB: remove | RMB: place | Esc: release mouse");
            } else {
                ui.small("Click to capture mouse | +/-: frame | F1: hide");
            }
        });
}

/// Cross painted at the screen center, above every panel.
pub fn draw_crosshair(ctx: &Context) {
    let center = ctx.screen_rect().center();
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("crosshair")));
    let stroke = Stroke::new(2.0, Color32::WHITE);
    painter.line_segment(
        [
            pos2(center.x - CROSSHAIR_HALF, center.y),
            pos2(center.x + CROSSHAIR_HALF, center.y),
        ],
        stroke,
    );
    painter.line_segment(
        [
            pos2(center.x, center.y - CROSSHAIR_HALF),
            pos2(center.x, center.y + CROSSHAIR_HALF),
        ],
        stroke,
    );
}
