/// Frame-rate cap for the fixed simulation tick.
///
/// Ticks run no faster than `rate` per second; under load they simply fall
/// behind, nothing is caught up.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: f64,
    last_tick: Option<f64>,
}

impl FramePacer {
    pub fn new(rate: f32) -> Self {
        Self {
            interval: interval_for(rate),
            last_tick: None,
        }
    }

    /// Change the target rate. Takes effect from the next check.
    pub fn set_rate(&mut self, rate: f32) {
        self.interval = interval_for(rate);
    }

    /// Seconds between ticks.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Returns true, and records `now`, when a tick is due.
    pub fn is_due(&mut self, now: f64) -> bool {
        match self.last_tick {
            Some(last) if now - last < self.interval => false,
            _ => {
                self.last_tick = Some(now);
                true
            },
        }
    }

    /// Forget the last tick so the next check fires immediately.
    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}

fn interval_for(rate: f32) -> f64 {
    if rate > 0.0 {
        1.0 / f64::from(rate)
    } else {
        f64::INFINITY
    }
}
