use common::games::GameResult;
use common::games::snake::{Cell, GamePhase, GameSnapshot};

const BACKGROUND: egui::Color32 = egui::Color32::BLACK;
const GRID_LINE: egui::Color32 = egui::Color32::from_rgb(40, 40, 40);
const SNAKE_BODY: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
const SNAKE_HEAD: egui::Color32 = egui::Color32::from_rgb(120, 255, 120);
const FOOD: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
const SCORE_TEXT: egui::Color32 = egui::Color32::from_rgb(255, 215, 0);

pub const HEADER_HEIGHT: f32 = 40.0;

/// Paints a snapshot. Holds no game state of its own.
pub struct SnakeGameUi {
    cell_size: f32,
}

impl SnakeGameUi {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    pub fn canvas_size(&self, rows: usize, cols: usize) -> egui::Vec2 {
        egui::vec2(cols as f32 * self.cell_size, rows as f32 * self.cell_size)
    }

    pub fn render_game(
        &self,
        ui: &mut egui::Ui,
        snapshot: Option<&GameSnapshot>,
        last_result: Option<&GameResult>,
    ) {
        let Some(state) = snapshot else {
            ui.centered_and_justified(|ui| {
                ui.label("Waiting for game to start...");
            });
            return;
        };

        self.render_header(ui, state);

        let (response, painter) =
            ui.allocate_painter(self.canvas_size(state.rows, state.cols), egui::Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, BACKGROUND);
        self.render_grid(&painter, rect, state);

        if let Some(food) = state.food {
            painter.rect_filled(self.cell_rect(rect.min, food).shrink(2.0), 4.0, FOOD);
        }

        for (i, cell) in state.snake.iter().enumerate() {
            let color = if i == 0 { SNAKE_HEAD } else { SNAKE_BODY };
            painter.rect_filled(self.cell_rect(rect.min, *cell).shrink(1.0), 2.0, color);
        }

        match state.phase {
            GamePhase::Running => {}
            GamePhase::Paused => {
                self.render_overlay(&painter, rect, "PAUSED", "Press P to resume");
            }
            GamePhase::GameOver => {
                let detail = match (state.end_reason, last_result.and_then(|r| r.rank)) {
                    (Some(reason), Some(rank)) => format!(
                        "The snake {}. High score #{}. Press R or Enter to play again",
                        reason, rank
                    ),
                    (Some(reason), None) => {
                        format!("The snake {}. Press R or Enter to play again", reason)
                    }
                    (None, _) => "Press R or Enter to play again".to_string(),
                };
                self.render_overlay(&painter, rect, "GAME OVER", &detail);
            }
        }
    }

    fn render_header(&self, ui: &mut egui::Ui, state: &GameSnapshot) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("Score: {}    Level: {}", state.score, state.level))
                    .color(SCORE_TEXT)
                    .size(20.0),
            );
            if let Some(best) = state.best_score {
                ui.label(format!("Best: {}", best));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label("P = pause/resume");
            });
        });
    }

    fn render_grid(&self, painter: &egui::Painter, rect: egui::Rect, state: &GameSnapshot) {
        let stroke = egui::Stroke::new(1.0, GRID_LINE);
        for col in 1..state.cols {
            let x = rect.min.x + col as f32 * self.cell_size;
            painter.line_segment([egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)], stroke);
        }
        for row in 1..state.rows {
            let y = rect.min.y + row as f32 * self.cell_size;
            painter.line_segment([egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)], stroke);
        }
    }

    fn render_overlay(&self, painter: &egui::Painter, rect: egui::Rect, title: &str, detail: &str) {
        painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(160));
        painter.text(
            rect.center() - egui::vec2(0.0, 20.0),
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(48.0),
            egui::Color32::WHITE,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 25.0),
            egui::Align2::CENTER_CENTER,
            detail,
            egui::FontId::proportional(16.0),
            egui::Color32::WHITE,
        );
    }

    fn cell_rect(&self, origin: egui::Pos2, cell: Cell) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                origin.x + cell.col as f32 * self.cell_size,
                origin.y + cell.row as f32 * self.cell_size,
            ),
            egui::vec2(self.cell_size, self.cell_size),
        )
    }
}
