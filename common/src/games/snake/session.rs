use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::error::EngineResult;
use crate::games::{GameBroadcaster, GameResult, SessionRng};
use crate::{debug, log};
use super::game_state::SnakeGameState;
use super::high_scores::HighScores;
use super::settings::SnakeSessionSettings;
use super::snapshot::GameSnapshot;
use super::types::{Direction, GamePhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Turn(Direction),
    TogglePause,
    Restart,
    Shutdown,
}

#[derive(Clone, Debug)]
pub struct SessionSummary {
    pub high_scores: HighScores,
    pub games_played: u32,
}

/// Everything a running session owns. Only the session task touches it.
pub struct SnakeSessionState {
    pub game_state: SnakeGameState,
    pub rng: SessionRng,
    pub high_scores: HighScores,
    pub games_played: u32,
}

impl SnakeSessionState {
    pub fn create(settings: SnakeSessionSettings, seed: u64) -> EngineResult<Self> {
        let mut rng = SessionRng::new(seed);
        let high_scores = HighScores::new(settings.high_score_capacity);
        let game_state = SnakeGameState::new(settings, &mut rng)?;

        Ok(Self {
            game_state,
            rng,
            high_scores,
            games_played: 0,
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            best_score: self.high_scores.best(),
            ..self.game_state.snapshot()
        }
    }

    fn record_result(&mut self) -> Option<GameResult> {
        let reason = self.game_state.end_reason()?;
        let score = self.game_state.score();
        let level = self.game_state.level();

        self.games_played += 1;
        let rank = self.high_scores.record(score, level);
        if let Some(rank) = rank {
            log!("Score {} entered the high score table at #{}", score, rank);
        }

        Some(GameResult {
            score,
            level,
            reason,
            rank,
        })
    }

    fn into_summary(self) -> SessionSummary {
        SessionSummary {
            high_scores: self.high_scores,
            games_played: self.games_played,
        }
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives the game until `Shutdown` arrives or every command sender is dropped.
    ///
    /// The clock only runs while the game is `Running`; pausing or losing
    /// suspends it, and un-pausing restarts it with a full interval.
    pub async fn run(
        mut session_state: SnakeSessionState,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> SessionSummary {
        let mut period = session_state.game_state.tick_interval();
        let mut ticker = create_ticker(period);

        log!(
            "Session started (seed {}, {}x{} board, tick {:?})",
            session_state.rng.seed(),
            session_state.game_state.board().rows(),
            session_state.game_state.board().cols(),
            period
        );
        broadcaster.broadcast_state(session_state.snapshot()).await;

        loop {
            let running = session_state.game_state.phase() == GamePhase::Running;

            tokio::select! {
                _ = ticker.tick(), if running => {
                    let SnakeSessionState { game_state, rng, .. } = &mut session_state;
                    game_state.tick(rng);

                    if session_state.game_state.phase() == GamePhase::GameOver
                        && let Some(result) = session_state.record_result()
                    {
                        broadcaster.broadcast_game_over(result).await;
                    }

                    let new_period = session_state.game_state.tick_interval();
                    if new_period != period {
                        debug!("Tick interval changed from {:?} to {:?}", period, new_period);
                        period = new_period;
                        ticker = create_ticker(period);
                    }

                    broadcaster.broadcast_state(session_state.snapshot()).await;
                }
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        debug!("Command channel closed");
                        break;
                    };

                    match command {
                        SessionCommand::Turn(direction) => {
                            session_state.game_state.set_direction(direction);
                        }
                        SessionCommand::TogglePause => {
                            if session_state.game_state.toggle_pause() {
                                if session_state.game_state.phase() == GamePhase::Running {
                                    ticker.reset();
                                }
                                broadcaster.broadcast_state(session_state.snapshot()).await;
                            }
                        }
                        SessionCommand::Restart => {
                            let SnakeSessionState { game_state, rng, .. } = &mut session_state;
                            match game_state.restart(rng) {
                                Ok(true) => {
                                    period = session_state.game_state.tick_interval();
                                    ticker = create_ticker(period);
                                    broadcaster.broadcast_state(session_state.snapshot()).await;
                                }
                                Ok(false) => {
                                    debug!("Restart ignored while the game is still in progress");
                                }
                                Err(e) => {
                                    log!("Failed to restart game: {}", e);
                                    break;
                                }
                            }
                        }
                        SessionCommand::Shutdown => break,
                    }
                }
            }
        }

        log!(
            "Session finished after {} game(s), best score {:?}",
            session_state.games_played,
            session_state.high_scores.best()
        );
        session_state.into_summary()
    }
}

fn create_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
