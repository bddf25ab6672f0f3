use common::games::snake::{SessionCommand, SessionSummary, SnakeSessionState};
use common::log;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::input::InputAdapter;
use crate::offline::spawn_snake_session;
use crate::state::SharedState;
use super::game::{SnakeGameUi, HEADER_HEIGHT};

const WINDOW_MARGIN: f32 = 16.0;

pub struct SnakeApp {
    shared_state: SharedState,
    input: InputAdapter,
    game_ui: SnakeGameUi,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<SessionCommand>,
        cell_size: f32,
    ) -> Self {
        Self {
            shared_state,
            input: InputAdapter::new(command_tx),
            game_ui: SnakeGameUi::new(cell_size),
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        self.input.handle_input(ctx);

        let snapshot = self.shared_state.get_snapshot();
        let last_result = self.shared_state.get_last_result();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.game_ui
                .render_game(ui, snapshot.as_ref(), last_result.as_ref());
        });
    }
}

/// Starts the engine session and runs the window until it is closed.
/// Closing the window drops the command sender, which ends the session.
pub fn create_game_window(
    config: &Config,
    session_state: SnakeSessionState,
) -> Result<Option<SessionSummary>, Box<dyn std::error::Error>> {
    let shared_state = SharedState::new();
    let cell_size = config.window.cell_size_px as f32;
    let board_size = SnakeGameUi::new(cell_size)
        .canvas_size(config.game.rows as usize, config.game.cols as usize);

    let (command_tx, session_thread) = spawn_snake_session(session_state, shared_state.clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                board_size.x + WINDOW_MARGIN * 2.0,
                board_size.y + HEADER_HEIGHT + WINDOW_MARGIN * 2.0,
            ])
            .with_resizable(false)
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    log!("Opening game window ({} px cells)", config.window.cell_size_px);
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |cc| {
            shared_state.set_context(cc.egui_ctx.clone());
            Ok(Box::new(SnakeApp::new(shared_state, command_tx, cell_size)))
        }),
    )?;

    session_thread
        .join()
        .map_err(|_| "Game session thread panicked".into())
}
