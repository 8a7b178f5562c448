// canvas.rs - Cell painting and the cached gridlines

use conway_engine::Grid;
use egui::{vec2, Color32, Painter, Rect, Shape, Stroke, Vec2};
use tracing::debug;

/// Gridlines for the current canvas, rebuilt only when its geometry changes.
#[derive(Default)]
pub struct GridlineCache {
    key: Option<(Rect, usize, f32)>,
    shapes: Vec<Shape>,
    rebuilds: usize,
}

impl GridlineCache {
    pub fn shapes(&mut self, rect: Rect, size: usize, scale: f32) -> &[Shape] {
        let key = (rect, size, scale);
        if self.key != Some(key) {
            self.shapes = gridlines(rect, size, scale);
            self.key = Some(key);
            self.rebuilds += 1;
            debug!(size, scale, "gridlines rebuilt");
        }
        &self.shapes
    }

    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }
}

fn gridlines(rect: Rect, size: usize, scale: f32) -> Vec<Shape> {
    let stroke = Stroke::new(1.0, Color32::from_gray(60));
    let extent = scale * size as f32;

    (0..=size)
        .flat_map(|i| {
            let offset = i as f32 * scale;
            [
                // Vertical
                Shape::line_segment(
                    [rect.min + vec2(offset, 0.0), rect.min + vec2(offset, extent)],
                    stroke,
                ),
                // Horizontal
                Shape::line_segment(
                    [rect.min + vec2(0.0, offset), rect.min + vec2(extent, offset)],
                    stroke,
                ),
            ]
        })
        .collect()
}

/// Screen rectangle of a live cell, inset so the gridlines stay visible.
pub fn cell_rect(canvas: Rect, row: usize, col: usize, scale: f32) -> Rect {
    let min = canvas.min + vec2(col as f32 * scale, row as f32 * scale);
    Rect::from_min_size(min, Vec2::splat(scale)).shrink((scale * 0.1).max(1.0))
}

pub fn paint_cells(painter: &Painter, canvas: Rect, grid: &Grid, scale: f32, color: Color32) {
    for (row, col) in grid.alive_cells() {
        painter.rect_filled(cell_rect(canvas, row, col, scale), 1.0, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(10.0, 60.0), Vec2::splat(600.0))
    }

    #[test]
    fn gridlines_are_built_once_per_geometry() {
        let mut cache = GridlineCache::default();

        assert_eq!(cache.shapes(canvas(), 40, 15.0).len(), 82);
        cache.shapes(canvas(), 40, 15.0);
        cache.shapes(canvas(), 40, 15.0);
        assert_eq!(cache.rebuilds(), 1);

        let moved = canvas().translate(vec2(5.0, 0.0));
        cache.shapes(moved, 40, 15.0);
        assert_eq!(cache.rebuilds(), 2);
    }

    #[test]
    fn cell_rect_sits_inside_its_footprint() {
        let rect = cell_rect(canvas(), 2, 3, 15.0);
        let footprint = Rect::from_min_size(pos2(55.0, 90.0), Vec2::splat(15.0));

        assert!(footprint.contains_rect(rect));
        assert!(rect.width() < 15.0);
        assert_eq!(rect.center(), footprint.center());
    }
}
