use eframe::egui::{Pos2, Rect, Vec2};

/// Logical points per inch of figure; sizes and widths are given in pt.
const POINTS_PER_INCH: f32 = 100.0;
const PT: f32 = POINTS_PER_INCH / 72.0;

const AXIS_MARGIN: f32 = 0.05;

pub(super) fn pt_to_points(pt: f32) -> f32 {
    pt * PT
}

/// Radius of a marker whose area is `area` pt².
pub(super) fn marker_radius(area: f32) -> f32 {
    pt_to_points(area.max(0.0).sqrt() / 2.0)
}

/// Maps layout coordinates into a panel, y pointing up, each axis fitted
/// on its own with a small margin around the data.
#[derive(Clone, Copy, Debug)]
pub(super) struct PanelTransform {
    rect: Rect,
    origin: Vec2,
    span: Vec2,
}

impl PanelTransform {
    pub(super) fn fit(rect: Rect, positions: impl IntoIterator<Item = Vec2>, inset: f32) -> Self {
        let (min, max) = positions.into_iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), position| (min.min(position), max.max(position)),
        );
        let rect = rect.shrink(inset.min(rect.width() / 2.0).min(rect.height() / 2.0));

        if !min.x.is_finite() {
            return Self {
                rect,
                origin: Vec2::ZERO,
                span: Vec2::ZERO,
            };
        }

        let data_span = max - min;
        let pad = data_span * AXIS_MARGIN;
        Self {
            rect,
            origin: min - pad,
            span: data_span + pad * 2.0,
        }
    }

    pub(super) fn world_to_screen(&self, world: Vec2) -> Pos2 {
        let x = if self.span.x > 0.0 {
            self.rect.left() + (world.x - self.origin.x) / self.span.x * self.rect.width()
        } else {
            self.rect.center().x
        };
        let y = if self.span.y > 0.0 {
            self.rect.bottom() - (world.y - self.origin.y) / self.span.y * self.rect.height()
        } else {
            self.rect.center().y
        };
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    fn panel() -> Rect {
        Rect::from_min_size(Pos2::new(0.0, 0.0), vec2(110.0, 220.0))
    }

    #[test]
    fn marker_radius_follows_area() {
        assert_eq!(marker_radius(0.0), 0.0);
        assert!((marker_radius(144.0) - 6.0 * PT).abs() < 1e-5);
        assert!(marker_radius(300.0) > marker_radius(60.0));
    }

    #[test]
    fn data_bounds_land_inside_the_margin() {
        let transform = PanelTransform::fit(panel(), [vec2(-1.0, -1.0), vec2(1.0, 1.0)], 0.0);

        let low = transform.world_to_screen(vec2(-1.0, -1.0));
        let high = transform.world_to_screen(vec2(1.0, 1.0));
        assert!((low.x - 5.0).abs() < 1e-4);
        assert!((high.x - 105.0).abs() < 1e-4);
        // y points up on screen
        assert!((low.y - 210.0).abs() < 1e-4);
        assert!((high.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn flat_axes_are_centred() {
        let transform = PanelTransform::fit(panel(), [vec2(0.3, 2.0), vec2(0.3, 4.0)], 0.0);
        let point = transform.world_to_screen(vec2(0.3, 3.0));
        assert_eq!(point.x, 55.0);
        assert!((point.y - 110.0).abs() < 1e-4);

        let empty = PanelTransform::fit(panel(), std::iter::empty(), 0.0);
        assert_eq!(empty.world_to_screen(Vec2::ZERO), Pos2::new(55.0, 110.0));
    }

    #[test]
    fn inset_shrinks_the_plotting_area() {
        let transform = PanelTransform::fit(panel(), [vec2(0.0, 0.0), vec2(1.0, 1.0)], 10.0);
        let corner = transform.world_to_screen(vec2(1.0, 1.0));
        assert!(corner.x < 100.0);
        assert!(corner.y > 10.0);
    }
}
