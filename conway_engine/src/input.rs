// input.rs - Pointer coordinates to cell edits

use tracing::debug;

use crate::SimulationEngine;

/// Placement of the drawn grid in pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    /// Pixels per cell.
    pub scale: f32,
    /// Cells per side.
    pub size: usize,
}

impl CanvasGeometry {
    pub fn new(origin_x: f32, origin_y: f32, scale: f32, size: usize) -> Self {
        Self { origin_x, origin_y, scale, size }
    }

    /// Side length of the canvas in pixels.
    pub fn extent(&self) -> f32 {
        self.scale * self.size as f32
    }

    /// `(row, col)` under a pointer position, or `None` off the canvas.
    ///
    /// Rows follow `y` and columns follow `x`. Positions are truncated, so a
    /// pixel on a shared gridline belongs to the cell starting there.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        if !(dx >= 0.0 && dy >= 0.0) {
            return None;
        }
        let col = (dx / self.scale) as usize;
        let row = (dy / self.scale) as usize;
        (row < self.size && col < self.size).then_some((row, col))
    }
}

/// Turns press / drag / release events into toggle and paint calls.
///
/// A press toggles the cell under the pointer and remembers the result; drags
/// then paint that value until the button is released.
#[derive(Debug, Clone)]
pub struct InputTranslator {
    canvas: CanvasGeometry,
    stroke: Option<bool>,
}

impl InputTranslator {
    pub fn new(canvas: CanvasGeometry) -> Self {
        Self { canvas, stroke: None }
    }

    pub fn canvas(&self) -> CanvasGeometry {
        self.canvas
    }

    /// Moves the canvas, e.g. after the host toolkit has laid it out.
    pub fn set_origin(&mut self, origin_x: f32, origin_y: f32) {
        self.canvas.origin_x = origin_x;
        self.canvas.origin_y = origin_y;
    }

    /// Value being painted by the current stroke, if any.
    pub fn stroke(&self) -> Option<bool> {
        self.stroke
    }

    /// Returns the cell that was toggled.
    pub fn on_press(
        &mut self,
        engine: &mut SimulationEngine,
        x: f32,
        y: f32,
    ) -> Option<(usize, usize)> {
        let (row, col) = self.canvas.cell_at(x, y)?;
        let alive = engine.toggle_cell(row, col).ok()?;
        debug!(row, col, alive, "stroke started");
        self.stroke = Some(alive);
        Some((row, col))
    }

    /// Returns the cell that was painted.
    pub fn on_drag(
        &mut self,
        engine: &mut SimulationEngine,
        x: f32,
        y: f32,
    ) -> Option<(usize, usize)> {
        let alive = self.stroke?;
        let (row, col) = self.canvas.cell_at(x, y)?;
        engine.set_cell(row, col, alive).ok()?;
        Some((row, col))
    }

    pub fn on_release(&mut self) {
        self.stroke = None;
    }
}
