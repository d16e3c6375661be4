use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Repeating timer that calls `on_tick` every period until stopped.
///
/// The first call happens one full period after `start`.
#[derive(Debug, Default)]
pub struct StatusTicker {
    token: Option<CancellationToken>,
}

impl StatusTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts ticking on `handle`, replacing any running ticker.
    pub fn start<F>(&mut self, handle: &Handle, period: Duration, on_tick: F)
    where
        F: Fn() + Send + 'static,
    {
        self.stop();
        let token = CancellationToken::new();
        let cancelled = token.clone();
        handle.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => on_tick(),
                }
            }
        });
        self.token = Some(token);
    }

    /// Cancels the running ticker, if any.
    pub fn stop(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.token.is_some()
    }
}

impl Drop for StatusTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
