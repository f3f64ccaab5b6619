use serde::{Deserialize, Serialize};

use crate::error::{OrbitError, OrbitResult};

/// Speed slider range. The UI reads this; the clock clamps to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    #[serde(rename = "defaultValue", alias = "default")]
    pub default_value: f64,
}

impl SpeedConfig {
    /// Require finite values with `0 < min <= default_value <= max` and a
    /// positive step.
    pub fn validate(&self) -> OrbitResult<()> {
        let fail = |reason: String| -> OrbitResult<()> {
            Err(OrbitError::InvalidSpeedRange { reason })
        };
        let values = [self.min, self.max, self.step, self.default_value];
        if values.iter().any(|v| !v.is_finite()) {
            return fail(format!("non-finite value in {self:?}"));
        }
        if self.min <= 0.0 {
            return fail(format!("min {} must be positive", self.min));
        }
        if self.min > self.max {
            return fail(format!("min {} exceeds max {}", self.min, self.max));
        }
        if !(self.min..=self.max).contains(&self.default_value) {
            return fail(format!(
                "default {} outside [{}, {}]",
                self.default_value, self.min, self.max
            ));
        }
        if self.step <= 0.0 {
            return fail(format!("step {} must be positive", self.step));
        }
        Ok(())
    }
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 1000.0,
            step: 1.0,
            default_value: 1.0,
        }
    }
}

/// Global simulation clock shared by every body.
///
/// `speed_multiplier` uniformly scales each body's anomaly step; `tick_scale`
/// converts "speed units" into radians per tick.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    speed_multiplier: f64,
    tick_scale: f64,
    paused: bool,
    range: SpeedConfig,
    ticks: u64,
}

impl SimulationClock {
    /// Build a clock at the slider default. Fails if the slider range or
    /// tick scale could produce a non-positive multiplier or step.
    pub fn new(tick_scale: f64, range: SpeedConfig) -> OrbitResult<Self> {
        range.validate()?;
        if !tick_scale.is_finite() || tick_scale <= 0.0 {
            return Err(OrbitError::InvalidSpeedRange {
                reason: format!("tick scale {tick_scale} must be positive and finite"),
            });
        }
        Ok(Self::unchecked(tick_scale, range))
    }

    fn unchecked(tick_scale: f64, range: SpeedConfig) -> Self {
        Self {
            speed_multiplier: range.default_value,
            tick_scale,
            paused: false,
            range,
            ticks: 0,
        }
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn tick_scale(&self) -> f64 {
        self.tick_scale
    }

    pub fn range(&self) -> SpeedConfig {
        self.range
    }

    /// Set the multiplier. Rejects non-positive or non-finite values; clamps
    /// anything else into the slider range. Returns the value applied.
    pub fn set_speed_multiplier(&mut self, speed: f64) -> OrbitResult<f64> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(OrbitError::InvalidSpeed(speed));
        }
        let clamped = speed.clamp(self.range.min, self.range.max);
        if clamped != speed {
            log::debug!("speed {speed} clamped to {clamped}");
        }
        self.speed_multiplier = clamped;
        Ok(clamped)
    }

    /// Toggle pause. Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Count one simulation tick (paused ticks are not counted).
    pub fn record_tick(&mut self) {
        if !self.paused {
            self.ticks += 1;
        }
    }

    /// Number of unpaused ticks so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::unchecked(crate::DEFAULT_TICK_SCALE, SpeedConfig::default())
    }
}
