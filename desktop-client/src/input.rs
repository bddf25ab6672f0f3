use common::games::snake::{Direction, SessionCommand};
use common::log;
use tokio::sync::mpsc;

/// Arrows and WASD steer, `P` pauses, `R`/`Enter` starts a new game once the
/// current one is over. Anything else is ignored.
pub fn command_for_key(key: egui::Key) -> Option<SessionCommand> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(SessionCommand::Turn(Direction::Up)),
        egui::Key::ArrowDown | egui::Key::S => Some(SessionCommand::Turn(Direction::Down)),
        egui::Key::ArrowLeft | egui::Key::A => Some(SessionCommand::Turn(Direction::Left)),
        egui::Key::ArrowRight | egui::Key::D => Some(SessionCommand::Turn(Direction::Right)),
        egui::Key::P => Some(SessionCommand::TogglePause),
        egui::Key::R | egui::Key::Enter => Some(SessionCommand::Restart),
        _ => None,
    }
}

pub struct InputAdapter {
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    session_closed: bool,
}

impl InputAdapter {
    pub fn new(command_tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self {
            command_tx,
            session_closed: false,
        }
    }

    /// Forwards this frame's key presses in the order they happened.
    /// Closes the window once the session has stopped listening.
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        let commands: Vec<SessionCommand> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => command_for_key(*key),
                    _ => None,
                })
                .collect()
        });

        if !self.forward(commands) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Returns `false` once the session is gone.
    fn forward(&mut self, commands: impl IntoIterator<Item = SessionCommand>) -> bool {
        if self.session_closed {
            return false;
        }
        for command in commands {
            if let Err(e) = self.command_tx.send(command) {
                log!("Game session stopped, dropping {:?}", e.0);
                self.session_closed = true;
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_wasd_keys_map_to_same_turn() {
        assert_eq!(command_for_key(egui::Key::ArrowUp), command_for_key(egui::Key::W));
        assert_eq!(command_for_key(egui::Key::ArrowDown), command_for_key(egui::Key::S));
        assert_eq!(command_for_key(egui::Key::ArrowLeft), command_for_key(egui::Key::A));
        assert_eq!(
            command_for_key(egui::Key::ArrowRight),
            Some(SessionCommand::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_pause_and_restart_keys() {
        assert_eq!(command_for_key(egui::Key::P), Some(SessionCommand::TogglePause));
        assert_eq!(command_for_key(egui::Key::R), Some(SessionCommand::Restart));
        assert_eq!(command_for_key(egui::Key::Enter), Some(SessionCommand::Restart));
    }

    #[test]
    fn test_commands_reach_session_in_order() {
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();
        let mut input = InputAdapter::new(command_tx);

        assert!(input.forward([SessionCommand::TogglePause, SessionCommand::Turn(Direction::Up)]));
        assert_eq!(command_rx.try_recv().unwrap(), SessionCommand::TogglePause);
        assert_eq!(command_rx.try_recv().unwrap(), SessionCommand::Turn(Direction::Up));
        assert!(!input.session_closed);
    }

    #[test]
    fn test_stopped_session_is_detected() {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let mut input = InputAdapter::new(command_tx);
        drop(command_rx);

        assert!(!input.forward([SessionCommand::Turn(Direction::Left)]));
        assert!(input.session_closed);
        assert!(!input.forward(std::iter::empty()));
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        assert_eq!(command_for_key(egui::Key::Q), None);
        assert_eq!(command_for_key(egui::Key::Space), None);
        assert_eq!(command_for_key(egui::Key::F1), None);
    }
}
