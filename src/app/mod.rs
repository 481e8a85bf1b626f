use eframe::egui::{self, Color32, Context, RichText};

use crate::scene::Scene;

mod panel;
mod render_utils;

const FIGURE_TITLE_SIZE: f32 = 18.0;

/// Static window showing the original and coarse-grained networks.
pub struct ComparisonApp {
    scene: Scene,
}

impl ComparisonApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, scene: Scene) -> Self {
        Self { scene }
    }
}

impl eframe::App for ComparisonApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let frame = egui::Frame::new().fill(Color32::WHITE).inner_margin(12.0);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            if let Some(title) = &self.scene.title {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(title.as_str())
                            .size(FIGURE_TITLE_SIZE)
                            .color(Color32::BLACK),
                    );
                });
                ui.add_space(6.0);
            }

            let scene = &self.scene;
            ui.columns(2, |columns| {
                panel::draw_panel(
                    &mut columns[0],
                    &scene.fine,
                    scene.edge_color,
                    scene.node_border_color,
                );
                panel::draw_panel(
                    &mut columns[1],
                    &scene.coarse,
                    scene.edge_color,
                    scene.node_border_color,
                );
            });
        });
    }
}

/// Opens the viewer window and blocks until it is closed.
pub fn show(scene: Scene, inner_size: [f32; 2]) -> eframe::Result<()> {
    let window_title = scene
        .title
        .clone()
        .unwrap_or_else(|| "coarse-view".to_owned());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_title(window_title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &window_title,
        options,
        Box::new(move |cc| Ok(Box::new(ComparisonApp::new(cc, scene)))),
    )
}
