use chrono::{DateTime, Duration, Local};

/// Countdown state: total length, elapsed time and the running flag.
///
/// All mutation goes through the operations below; the fields stay private.
/// The countdown advances in fixed tick quanta, not wall-clock deltas.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    /// Full countdown length; grows and shrinks via adjustment
    total: Duration,
    /// Time accumulated while running, in whole tick intervals
    elapsed: Duration,
    /// Amount added per tick
    interval: Duration,
    running: bool,
    completed: bool,
    /// When the countdown was created (displayed, never shifted)
    started_at: DateTime<Local>,
    /// Projected wall-clock end; shifts with pauses and adjustments
    ends_at: DateTime<Local>,
    /// Set while paused; the gap to the resume instant shifts `ends_at`
    paused_at: Option<DateTime<Local>>,
}

impl CountdownTimer {
    pub fn new(total: Duration, interval: Duration) -> Self {
        let now = Local::now();
        Self {
            total,
            elapsed: Duration::zero(),
            interval,
            running: true,
            completed: false,
            started_at: now,
            ends_at: now + total,
            paused_at: None,
        }
    }

    /// Advance the countdown by one tick interval.
    ///
    /// No-op while paused or once completed. Returns true exactly once, on
    /// the tick that reaches the total.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.completed {
            return false;
        }
        self.elapsed = self.elapsed + self.interval;
        self.check_completed()
    }

    /// Flip between running and paused; no-op once completed.
    ///
    /// Resuming shifts the projected end forward by the pause gap.
    pub fn toggle(&mut self, now: DateTime<Local>) {
        if self.completed {
            return;
        }
        if self.running {
            self.running = false;
            self.paused_at = Some(now);
        } else {
            self.running = true;
            if let Some(paused) = self.paused_at.take() {
                self.ends_at = self.ends_at + (now - paused);
            }
        }
    }

    /// Apply a signed delta to the total and shift the projected end.
    ///
    /// Completion is re-checked eagerly; a shrink below the elapsed time
    /// completes the countdown even while paused. Returns true exactly once,
    /// when the adjustment itself finishes the countdown.
    pub fn adjust(&mut self, delta: Duration) -> bool {
        self.total = self.total + delta;
        self.ends_at = self.ends_at + delta;
        self.check_completed()
    }

    /// Start over with a new total; the running flag is left unchanged.
    #[allow(dead_code)]
    pub fn reset(&mut self, initial: Duration) {
        let now = Local::now();
        self.total = initial;
        self.elapsed = Duration::zero();
        self.completed = false;
        self.started_at = now;
        self.ends_at = now + initial;
        if self.paused_at.is_some() {
            self.paused_at = Some(now);
        }
    }

    /// Elapsed over total as a float in [0, 1]; a non-positive total counts
    /// as already complete.
    pub fn progress_fraction(&self) -> f64 {
        let total_ms = self.total.num_milliseconds();
        if total_ms <= 0 {
            return 1.0;
        }
        let fraction = self.elapsed.num_milliseconds() as f64 / total_ms as f64;
        fraction.clamp(0.0, 1.0)
    }

    /// Time left on the countdown; negative once an adjustment has pushed
    /// the total below the elapsed time
    pub fn remaining(&self) -> Duration {
        self.total - self.elapsed
    }

    #[allow(dead_code)]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[allow(dead_code)]
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn ends_at(&self) -> DateTime<Local> {
        self.ends_at
    }

    fn check_completed(&mut self) -> bool {
        if !self.completed && self.elapsed >= self.total {
            self.completed = true;
            return true;
        }
        false
    }
}
