/// Frame-interval gate for the browser's animation callback.
/// Caps simulation ticks at a fixed rate regardless of display refresh.
pub struct FrameGate {
    /// Minimum milliseconds between ticks.
    interval_ms: f64,
    /// Timestamp of the last accepted frame, snapped back by the remainder.
    last_ms: Option<f64>,
}

impl FrameGate {
    pub fn new(frame_rate: f64) -> Self {
        Self {
            interval_ms: 1000.0 / frame_rate.max(1.0),
            last_ms: None,
        }
    }

    /// Decide whether the frame at `timestamp_ms` should run a tick.
    ///
    /// The first frame always ticks. Afterwards a tick runs once at least one
    /// interval has elapsed, and the reference time is snapped to the interval
    /// grid (`timestamp - delta % interval`) so cadence does not drift.
    pub fn should_tick(&mut self, timestamp_ms: f64) -> bool {
        let Some(last) = self.last_ms else {
            self.last_ms = Some(timestamp_ms);
            return true;
        };
        let delta = timestamp_ms - last;
        if delta < self.interval_ms {
            return false;
        }
        self.last_ms = Some(timestamp_ms - delta % self.interval_ms);
        true
    }

    /// Forget the reference time (e.g. after the tab was hidden).
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
