use std::time::Duration;

/// Messages cycled in the status line while a report is being generated.
pub const STATUS_MESSAGES: [&str; 5] = [
    "Fetching company fundamentals...",
    "Downloading price history...",
    "Computing technical indicators...",
    "Comparing peers and gathering news...",
    "Building your PDF report...",
];

/// Interval between status message changes.
pub const STATUS_PERIOD: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCycle {
    index: usize,
    active: bool,
    generation: u64,
}

impl StatusCycle {
    /// Shows the first message immediately and opens a new generation.
    pub fn start(&mut self) -> u64 {
        self.index = 0;
        self.active = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Advances one message, wrapping after the last. Returns false when
    /// stopped or when the tick belongs to an earlier run.
    pub fn advance(&mut self, generation: u64) -> bool {
        if !self.active || generation != self.generation {
            return false;
        }
        self.index = (self.index + 1) % STATUS_MESSAGES.len();
        true
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn message(&self) -> &'static str {
        STATUS_MESSAGES[self.index]
    }
}
