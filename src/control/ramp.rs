use crate::constants::RAMP_DURATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampParameter {
    Pressure,
    Temperature,
}

// Linear slider animation: moves one ambient scalar from its current value
// to a target over a fixed duration, one interpolated sample per tick.
pub struct ParameterRamp {
    pub active: bool,
    pub parameter: RampParameter,
    start_value: f64,
    target_value: f64,
    elapsed: f64,
    duration: f64,
    direction: f64, // +1.0 rising, -1.0 falling
}

impl ParameterRamp {
    pub fn new() -> Self {
        ParameterRamp {
            active: false,
            parameter: RampParameter::Pressure,
            start_value: 0.0,
            target_value: 0.0,
            elapsed: 0.0,
            duration: RAMP_DURATION,
            direction: 1.0,
        }
    }

    pub fn begin(&mut self, parameter: RampParameter, start: f64, target: f64) {
        self.active = true;
        self.parameter = parameter;
        self.start_value = start;
        self.target_value = target;
        self.elapsed = 0.0;
        self.direction = if target >= start { 1.0 } else { -1.0 };
        log::debug!(
            "ramping {:?} {} from {:.1} to {:.1} over {:.0} s",
            parameter,
            if self.direction > 0.0 { "up" } else { "down" },
            start,
            target,
            self.duration
        );
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }

    // Yields the interpolated value for this tick, or None while idle. The
    // final sample snaps exactly onto the target so no floating-point
    // residue is left behind, then the ramp deactivates.
    pub fn advance(&mut self, delta_time: f64) -> Option<f64> {
        if !self.active {
            return None;
        }

        self.elapsed += delta_time;
        if self.elapsed >= self.duration {
            self.active = false;
            Some(self.target_value)
        } else {
            let progress = self.elapsed / self.duration;
            Some(self.start_value + (self.target_value - self.start_value) * progress)
        }
    }

    pub fn get_direction(&self) -> f64 {
        self.direction
    }

    pub fn get_progress(&self) -> f64 {
        (self.elapsed / self.duration).min(1.0)
    }
}
