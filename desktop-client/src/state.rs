use common::games::GameResult;
use common::games::snake::GameSnapshot;
use std::sync::{Arc, Mutex, MutexGuard};

/// Hand-off point between the session thread and the UI thread. The session
/// writes, the UI reads clones.
#[derive(Clone, Default)]
pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    last_result: Arc<Mutex<Option<GameResult>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *lock(&self.snapshot) = Some(snapshot);
    }

    pub fn get_snapshot(&self) -> Option<GameSnapshot> {
        lock(&self.snapshot).clone()
    }

    pub fn set_last_result(&self, result: GameResult) {
        *lock(&self.last_result) = Some(result);
    }

    pub fn get_last_result(&self) -> Option<GameResult> {
        *lock(&self.last_result)
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    /// Does not wait for the frame.
    pub fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }
}
