use std::time::{Duration, Instant};

/// Wall-clock source for [`ToastController::tick`](crate::ToastController::tick).
///
/// Unlike a game-loop clock the delta is never capped: a toast whose
/// dismissal was due during a long stall is dismissed on the next tick.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Time elapsed between the last two ticks
    delta: Duration,
    /// Number of ticks taken
    frame_count: u64,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            delta: Duration::ZERO,
            frame_count: 0,
            last_tick: Instant::now(),
        }
    }

    /// Take a tick, returning the time since the previous one.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.frame_count += 1;
        self.delta
    }

    #[inline]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Restart measuring from now, discarding time since the last tick.
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
        self.delta = Duration::ZERO;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
