use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe log buffer with a maximum capacity, mirrored into the UI.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.inner.lock().unwrap();
        buf.push_back(msg);
        while buf.len() > MAX_LOG_LINES {
            buf.pop_front();
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap().iter().cloned().collect()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Input validation status, reflected in the input field border.
pub enum InputStatus {
    Incomplete,
    Invalid(&'static str),
    Valid,
}

/// Which screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    PlayerEntry,
    DifficultySelect,
    SecretEntry,
    Guessing,
    RoundOver,
    Stats,
}

/// How the secret for the next round is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    Solo,
    TwoPlayer,
}

/// Statistics screen view, cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsView {
    Summary,
    Chart,
    Rounds,
}

impl StatsView {
    pub fn next(self) -> Self {
        match self {
            StatsView::Summary => StatsView::Chart,
            StatsView::Chart => StatsView::Rounds,
            StatsView::Rounds => StatsView::Summary,
        }
    }
}
