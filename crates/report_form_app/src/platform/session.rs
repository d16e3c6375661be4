use std::time::{Duration, Instant};

use report_form_core::Msg;

use super::controller::FormController;
use super::effects::EffectRunner;
use super::ui::dom::Document;

/// A controller wired to an engine: messages in, effects out, results back in.
pub struct Session {
    controller: FormController,
    runner: EffectRunner,
}

impl Session {
    pub fn new(runner: EffectRunner) -> Self {
        Self {
            controller: FormController::new(),
            runner,
        }
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let effects = self.controller.dispatch(msg);
        self.runner.enqueue(effects);
    }

    /// Dispatches every engine result that has already arrived. Returns how many.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(msg) = self.runner.try_next_msg() {
            self.dispatch(msg);
            handled += 1;
        }
        handled
    }

    /// Dispatches engine results until `done` holds, giving up after `timeout`.
    pub fn pump_until<F>(&mut self, timeout: Duration, done: F) -> bool
    where
        F: Fn(&FormController) -> bool,
    {
        let deadline = Instant::now() + timeout;
        while !done(&self.controller) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            if let Some(msg) = self.runner.next_msg_timeout(remaining) {
                self.dispatch(msg);
            }
        }
        true
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn document(&self) -> &Document {
        self.controller.document()
    }
}
