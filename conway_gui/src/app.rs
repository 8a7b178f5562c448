// app.rs - eframe front end driving a shared engine

use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

use conway_engine::{
    patterns, spawn_ticker, CanvasGeometry, Grid, InputTranslator, Intent, LifeConfig,
    SharedEngine, SimulationEngine,
};
use eframe::egui;
use egui::{Color32, Sense, Vec2};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::canvas::{self, GridlineCache};

pub struct LifeApp {
    engine: SharedEngine,
    input: InputTranslator,
    gridlines: GridlineCache,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
    speed_ms: u64,
    speed_bounds: RangeInclusive<u64>,
    ticker: JoinHandle<()>,
    _runtime: Runtime,
}

impl LifeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, runtime: Runtime, config: LifeConfig) -> Self {
        let speed_bounds = config.min_interval_ms..=config.max_interval_ms;
        // The real origin is only known once the canvas has been laid out.
        let canvas = CanvasGeometry::new(0.0, 0.0, config.cell_scale, config.grid_size);
        let engine = SharedEngine::new(SimulationEngine::with_config(config));

        let ctx = cc.egui_ctx.clone();
        let ticker = {
            let _guard = runtime.enter();
            spawn_ticker(engine.clone(), move |_| ctx.request_repaint())
        };
        let speed_ms = engine.with(|engine| engine.step_interval().as_millis() as u64);

        Self {
            engine,
            input: InputTranslator::new(canvas),
            gridlines: GridlineCache::default(),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            speed_ms,
            speed_bounds,
            ticker,
            _runtime: runtime,
        }
    }

    fn send(&self, intent: Intent) {
        if let Err(err) = self.engine.apply(intent) {
            warn!(%err, ?intent, "intent rejected");
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("▶ Play").clicked() {
                self.send(Intent::Play);
            }
            if ui.button("⏹ Stop").clicked() {
                self.send(Intent::Stop);
            }
            if ui.button("Next Step").clicked() {
                self.send(Intent::Step);
            }
            if ui.button("Clear Cells").clicked() {
                self.send(Intent::Clear);
            }

            ui.separator();

            ui.label("Play Speed:");
            let slider =
                egui::Slider::new(&mut self.speed_ms, self.speed_bounds.clone()).suffix(" ms");
            if ui.add(slider).changed() {
                self.send(Intent::SetSpeed { millis: self.speed_ms });
            }
        });

        ui.horizontal(|ui| {
            if ui.button("🎲 Random").clicked() {
                self.send(Intent::Randomize { seed: random_seed() });
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Apply Pattern").clicked() {
                self.send(Intent::LoadPattern { index: self.selected_pattern });
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    /// Feeds this frame's primary-button events to the input translator.
    ///
    /// Only events the canvas itself receives count, so clicks on a popup or
    /// colour picker drawn over it leave the grid alone.
    fn handle_pointer(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let (pressed, down, released, pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });
        let action = pointer_action(
            pressed,
            down,
            response.hovered(),
            response.is_pointer_button_down_on(),
        );

        if let (Some(action), Some(pos)) = (action, pos) {
            let input = &mut self.input;
            self.engine.with(|engine| match action {
                PointerAction::Press => {
                    input.on_press(engine, pos.x, pos.y);
                }
                PointerAction::Drag => {
                    input.on_drag(engine, pos.x, pos.y);
                }
            });
        }
        if released {
            self.input.on_release();
        }
    }

    /// Lays out the canvas, applies pointer edits, then paints the grid.
    fn grid_view(&mut self, ui: &mut egui::Ui) -> Grid {
        let geometry = self.input.canvas();
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(geometry.extent()), Sense::click_and_drag());
        let rect = response.rect;

        self.input.set_origin(rect.min.x, rect.min.y);
        self.handle_pointer(ui, &response);

        let grid = self.engine.snapshot();
        painter.rect_filled(rect, 0.0, self.dead_color);
        canvas::paint_cells(&painter, rect, &grid, geometry.scale, self.live_color);
        painter.extend(
            self.gridlines
                .shapes(rect, geometry.size, geometry.scale)
                .iter()
                .cloned(),
        );
        grid
    }

    fn statistics(&self, ui: &mut egui::Ui, grid: &Grid) {
        let total = grid.size() * grid.size();
        let live_cells = grid.live_count();
        let generation = self.engine.with(|engine| engine.generation());

        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", generation));
            ui.label(format!("Live cells: {}", live_cells));
            ui.label(format!("Dead cells: {}", total - live_cells));
            ui.label(format!(
                "Population: {:.1}%",
                live_cells as f32 / total.max(1) as f32 * 100.0
            ));
        });
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.controls(ui);
            ui.separator();
            let grid = self.grid_view(ui);
            ui.separator();
            self.statistics(ui, &grid);
        });
    }
}

impl Drop for LifeApp {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerAction {
    Press,
    Drag,
}

/// Decides what this frame's primary button does to the canvas.
///
/// `hovered` is false while another layer covers the pointer. `held_on_canvas`
/// is true only for a press that began on the canvas.
fn pointer_action(
    pressed: bool,
    down: bool,
    hovered: bool,
    held_on_canvas: bool,
) -> Option<PointerAction> {
    if pressed {
        hovered.then_some(PointerAction::Press)
    } else if down && held_on_canvas {
        Some(PointerAction::Drag)
    } else {
        None
    }
}

fn random_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_on_the_canvas_starts_a_stroke() {
        assert_eq!(pointer_action(true, true, true, true), Some(PointerAction::Press));
        assert_eq!(pointer_action(true, true, true, false), Some(PointerAction::Press));
    }

    #[test]
    fn press_on_an_overlapping_popup_is_ignored() {
        // A combo box entry or colour picker over the canvas: not hovered.
        assert_eq!(pointer_action(true, true, false, false), None);
    }

    #[test]
    fn drag_continues_only_a_stroke_begun_on_the_canvas() {
        assert_eq!(pointer_action(false, true, true, true), Some(PointerAction::Drag));
        // Leaving the canvas mid-stroke keeps dragging; the translator filters.
        assert_eq!(pointer_action(false, true, false, true), Some(PointerAction::Drag));
        // Dragging a colour slider across the canvas.
        assert_eq!(pointer_action(false, true, true, false), None);
    }

    #[test]
    fn idle_pointer_does_nothing() {
        assert_eq!(pointer_action(false, false, true, false), None);
        assert_eq!(pointer_action(false, false, true, true), None);
    }
}
