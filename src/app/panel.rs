use eframe::egui::{Color32, RichText, Sense, Stroke, Ui};

use crate::scene::PanelScene;

use super::render_utils::{PanelTransform, marker_radius, pt_to_points};

const NODE_BORDER_PT: f32 = 1.0;
const PANEL_TITLE_SIZE: f32 = 15.0;

pub(super) fn draw_panel(
    ui: &mut Ui,
    panel: &PanelScene,
    edge_color: Color32,
    node_border_color: Color32,
) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(panel.title)
                .size(PANEL_TITLE_SIZE)
                .color(Color32::BLACK),
        );
    });

    let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, Color32::WHITE);

    let inset = panel
        .nodes
        .iter()
        .map(|node| marker_radius(node.size))
        .fold(0.0_f32, f32::max)
        + pt_to_points(NODE_BORDER_PT);
    let transform = PanelTransform::fit(rect, panel.nodes.iter().map(|node| node.position), inset);

    for edge in &panel.edges {
        let start = transform.world_to_screen(edge.from);
        let end = transform.world_to_screen(edge.to);
        if start == end {
            continue;
        }
        painter.line_segment(
            [start, end],
            Stroke::new(pt_to_points(edge.width), edge_color),
        );
    }

    let border = Stroke::new(pt_to_points(NODE_BORDER_PT), node_border_color);
    for node in &panel.nodes {
        painter.circle(
            transform.world_to_screen(node.position),
            marker_radius(node.size),
            node.fill,
            border,
        );
    }
}
