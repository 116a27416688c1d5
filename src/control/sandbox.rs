use crate::constants::{MAX_TIME_STEP, RESET_DELAY};
use crate::errors::SimulationError;

use super::engine::{GasBalloonEngine, SimMode};
use super::gas::GasSpecies;
use super::ramp::{ParameterRamp, RampParameter};

// Read-only view published to observers once per frame.
#[derive(Debug, Clone, Copy)]
pub struct StateSnapshot {
    pub mode: SimMode,
    pub altitude: f64,        // m
    pub velocity: f64,        // m/s
    pub volume: f64,          // m³
    pub radius: f64,          // m
    pub pressure: f64,        // Pa
    pub temperature: f64,     // K
    pub moles: f64,           // mol
    pub constant_volume: f64, // m³
    pub burst: bool,
    pub running: bool,
    pub elapsed: f64, // s of sandbox time
}

#[derive(Debug, Clone, Copy)]
pub struct FrameReport {
    pub snapshot: StateSnapshot,
    pub exploded: bool,
    pub reset_fired: bool,
}

// Countdown for the post-burst recovery. It runs on simulation time, so a
// pending reset can be cancelled deterministically before it lands.
struct ResetTimer {
    remaining: f64, // s
}

impl ResetTimer {
    fn new(delay: f64) -> Self {
        ResetTimer { remaining: delay }
    }

    fn tick(&mut self, delta_time: f64) -> bool {
        self.remaining -= delta_time;
        self.remaining <= 0.0
    }
}

pub struct Sandbox {
    pub engine: GasBalloonEngine,
    pub ramp: ParameterRamp,
    pending_reset: Option<ResetTimer>,
    elapsed: f64,
}

impl Sandbox {
    pub fn new(gas: GasSpecies) -> Self {
        Sandbox {
            engine: GasBalloonEngine::new(gas),
            ramp: ParameterRamp::new(),
            pending_reset: None,
            elapsed: 0.0,
        }
    }

    // One complete frame: ramp, physics step, burst handling, snapshot.
    // Incoming deltas are capped so a stalled caller cannot blow up the
    // integration.
    pub fn advance_frame(&mut self, delta_time: f64) -> FrameReport {
        let dt = delta_time.min(MAX_TIME_STEP);
        self.elapsed += dt;

        // After a burst the engine sits inert until the scheduled reset
        // lands; only the countdown moves.
        if let Some(timer) = self.pending_reset.as_mut() {
            let fired = timer.tick(dt);
            if fired {
                self.pending_reset = None;
                self.engine.reset();
                log::info!("post-burst reset landed");
            }
            return FrameReport {
                snapshot: self.snapshot(),
                exploded: false,
                reset_fired: fired,
            };
        }

        if let Some(value) = self.ramp.advance(dt) {
            match self.ramp.parameter {
                RampParameter::Pressure => self.engine.set_pressure(value),
                RampParameter::Temperature => self.engine.set_temperature(value),
            }
        }

        let outcome = self.engine.step(dt);
        if outcome.exploded {
            self.engine.halt();
            self.ramp.cancel();
            self.pending_reset = Some(ResetTimer::new(RESET_DELAY));
            log::info!("reset scheduled {} s after burst", RESET_DELAY);
        }

        FrameReport {
            snapshot: self.snapshot(),
            exploded: outcome.exploded,
            reset_fired: false,
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            mode: self.engine.get_mode(),
            altitude: self.engine.environment.altitude,
            velocity: self.engine.kinematics.velocity,
            volume: self.engine.balloon.volume,
            radius: self.engine.balloon.radius,
            pressure: self.engine.environment.pressure,
            temperature: self.engine.environment.temperature,
            moles: self.engine.balloon.moles,
            constant_volume: self.engine.balloon.constant_volume,
            burst: self.engine.is_burst(),
            running: self.engine.is_running(),
            elapsed: self.elapsed,
        }
    }

    // A stale reset landing on top of newer state would clobber it, so any
    // explicit mode switch or reset throws the pending one away.
    pub fn select_mode(&mut self, mode: SimMode) {
        self.cancel_pending_reset();
        self.ramp.cancel();
        self.engine.set_mode(mode);
    }

    pub fn manual_reset(&mut self) {
        self.cancel_pending_reset();
        self.ramp.cancel();
        self.engine.reset();
    }

    pub fn start_ramp(
        &mut self,
        parameter: RampParameter,
        target: f64,
    ) -> Result<(), SimulationError> {
        // A ramp begun now would sample its start from the dead pre-burst
        // state and resume on top of the recovered one
        if self.pending_reset.is_some() {
            return Err(SimulationError::RampError(
                "cannot start a ramp while a post-burst reset is pending".to_string(),
            ));
        }
        let mode = self.engine.get_mode();
        if mode.runs_flight_dynamics() {
            return Err(SimulationError::RampError(
                "slider ramps are unavailable while flight dynamics drive the environment"
                    .to_string(),
            ));
        }
        let permitted = match parameter {
            RampParameter::Pressure => mode.allows_pressure_input(),
            RampParameter::Temperature => mode.allows_temperature_input(),
        };
        if !permitted {
            return Err(SimulationError::RampError(format!(
                "{:?} mode does not expose the {:?} axis",
                mode, parameter
            )));
        }

        let start = match parameter {
            RampParameter::Pressure => self.engine.environment.pressure,
            RampParameter::Temperature => self.engine.environment.temperature,
        };
        self.ramp.begin(parameter, start, target);
        Ok(())
    }

    pub fn stop_ramp(&mut self) {
        self.ramp.cancel();
    }

    pub fn launch(&mut self) -> Result<(), SimulationError> {
        if self.pending_reset.is_some() {
            return Err(SimulationError::ControlError(
                "cannot launch while a post-burst reset is pending".to_string(),
            ));
        }
        self.engine.launch()
    }

    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset.is_some()
    }

    pub fn get_elapsed(&self) -> f64 {
        self.elapsed
    }

    fn cancel_pending_reset(&mut self) {
        if self.pending_reset.take().is_some() {
            log::info!("pending post-burst reset cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SEA_LEVEL_PRESSURE, TIME_STEP, UNIVERSAL_GAS_CONSTANT};
    use approx::assert_relative_eq;

    fn create_sandbox() -> Sandbox {
        Sandbox::new(GasSpecies::Helium)
    }

    // Drives the sandbox until the burst frame and returns it.
    fn advance_to_burst(sandbox: &mut Sandbox) -> FrameReport {
        sandbox.engine.set_pressure(500.0);
        let report = sandbox.advance_frame(TIME_STEP);
        assert!(report.exploded, "the low-pressure frame should burst");
        report
    }

    #[test]
    fn test_frame_applies_ramp_before_physics() {
        let mut sandbox = create_sandbox();
        sandbox.select_mode(SimMode::Boyle);
        sandbox
            .start_ramp(RampParameter::Pressure, 50_000.0)
            .unwrap();

        let report = sandbox.advance_frame(TIME_STEP);

        // The snapshot volume is resolved against the freshly ramped
        // pressure, proving the ramp ran first
        let snapshot = report.snapshot;
        let expected_volume =
            snapshot.moles * UNIVERSAL_GAS_CONSTANT * snapshot.temperature / snapshot.pressure;
        assert!(snapshot.pressure < SEA_LEVEL_PRESSURE);
        assert_relative_eq!(snapshot.volume, expected_volume, max_relative = 1e-9);
    }

    #[test]
    fn test_ramp_rejected_in_mission_mode() {
        let mut sandbox = create_sandbox();
        sandbox.select_mode(SimMode::Mission);

        let result = sandbox.start_ramp(RampParameter::Temperature, 350.0);

        assert!(matches!(result, Err(SimulationError::RampError(_))));
        assert!(!sandbox.ramp.active);
    }

    #[test]
    fn test_ramp_axis_must_match_mode() {
        let mut sandbox = create_sandbox();
        sandbox.select_mode(SimMode::Boyle);

        let result = sandbox.start_ramp(RampParameter::Temperature, 350.0);

        assert!(matches!(result, Err(SimulationError::RampError(_))));
    }

    #[test]
    fn test_ramp_completion_snaps_snapshot_value() {
        let mut sandbox = create_sandbox();
        sandbox.select_mode(SimMode::Charles);
        sandbox
            .start_ramp(RampParameter::Temperature, 350.0)
            .unwrap();

        let mut frames = 0;
        while sandbox.ramp.active && frames < 200 {
            sandbox.advance_frame(TIME_STEP);
            frames += 1;
        }

        assert!(!sandbox.ramp.active, "the ramp should finish well within 200 frames");
        assert_eq!(sandbox.snapshot().temperature, 350.0);
    }

    #[test]
    fn test_stop_ramp_freezes_the_parameter() {
        let mut sandbox = create_sandbox();
        sandbox.select_mode(SimMode::Boyle);
        sandbox
            .start_ramp(RampParameter::Pressure, 50_000.0)
            .unwrap();
        for _ in 0..10 {
            sandbox.advance_frame(TIME_STEP);
        }

        sandbox.stop_ramp();
        let frozen = sandbox.snapshot().pressure;
        for _ in 0..10 {
            sandbox.advance_frame(TIME_STEP);
        }

        assert_relative_eq!(sandbox.snapshot().pressure, frozen, max_relative = 1e-12);
    }

    #[test]
    fn test_burst_schedules_delayed_reset() {
        let mut sandbox = create_sandbox();
        advance_to_burst(&mut sandbox);

        assert!(sandbox.has_pending_reset());

        // The engine is inert while the countdown runs: 2.5 s in, the
        // burst radius is still on display
        let mut fired = false;
        for _ in 0..25 {
            let report = sandbox.advance_frame(TIME_STEP);
            fired |= report.reset_fired;
            assert!(report.snapshot.burst);
            assert!(report.snapshot.radius > 5.0);
        }
        assert!(!fired, "the reset must not land before its delay expires");

        // Let the remaining ~0.5 s run out
        for _ in 0..10 {
            let report = sandbox.advance_frame(TIME_STEP);
            if report.reset_fired {
                fired = true;
                break;
            }
        }

        assert!(fired, "the reset must land once the delay expires");
        assert!(!sandbox.has_pending_reset());
        let snapshot = sandbox.snapshot();
        assert!(!snapshot.burst);
        assert_relative_eq!(snapshot.radius, 1.0, max_relative = 1e-12);
        assert_relative_eq!(snapshot.pressure, SEA_LEVEL_PRESSURE, max_relative = 1e-12);
    }

    #[test]
    fn test_burst_cancels_running_ramp() {
        let mut sandbox = create_sandbox();
        sandbox.select_mode(SimMode::Boyle);
        sandbox.start_ramp(RampParameter::Pressure, 200.0).unwrap();

        // The ramp dives toward 200 Pa; the envelope lets go on the way
        let mut exploded = false;
        for _ in 0..150 {
            let report = sandbox.advance_frame(TIME_STEP);
            if report.exploded {
                exploded = true;
                break;
            }
        }

        assert!(exploded, "ramping toward 200 Pa must burst the envelope");
        assert!(!sandbox.ramp.active, "a burst must cancel the ramp");
    }

    #[test]
    fn test_mode_switch_cancels_pending_reset() {
        let mut sandbox = create_sandbox();
        advance_to_burst(&mut sandbox);
        assert!(sandbox.has_pending_reset());

        sandbox.select_mode(SimMode::Charles);

        assert!(!sandbox.has_pending_reset());
        for _ in 0..60 {
            let report = sandbox.advance_frame(TIME_STEP);
            assert!(
                !report.reset_fired,
                "a cancelled reset must never land on the new mode"
            );
        }
        assert_eq!(sandbox.snapshot().mode, SimMode::Charles);
    }

    #[test]
    fn test_manual_reset_cancels_pending_reset() {
        let mut sandbox = create_sandbox();
        advance_to_burst(&mut sandbox);

        sandbox.manual_reset();

        assert!(!sandbox.has_pending_reset());
        let snapshot = sandbox.snapshot();
        assert!(!snapshot.burst);
        assert_relative_eq!(snapshot.radius, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_launch_blocked_while_reset_pending() {
        let mut sandbox = create_sandbox();
        sandbox.select_mode(SimMode::Mission);
        sandbox.engine.set_max_radius(0.5); // bursts on the first step
        sandbox.launch().unwrap();
        let report = sandbox.advance_frame(TIME_STEP);
        assert!(report.exploded);

        let result = sandbox.launch();

        assert!(matches!(result, Err(SimulationError::ControlError(_))));
    }

    #[test]
    fn test_ramp_rejected_while_reset_pending() {
        let mut sandbox = create_sandbox();
        sandbox.select_mode(SimMode::Boyle);
        advance_to_burst(&mut sandbox);
        assert!(sandbox.has_pending_reset());

        let result = sandbox.start_ramp(RampParameter::Pressure, 400.0);

        assert!(matches!(result, Err(SimulationError::RampError(_))));
        assert!(!sandbox.ramp.active);

        // Let the countdown run out; the recovered state must stay put
        let mut fired = false;
        for _ in 0..40 {
            let report = sandbox.advance_frame(TIME_STEP);
            fired |= report.reset_fired;
            assert!(
                !report.exploded,
                "the freshly reset balloon must not burst again"
            );
        }

        assert!(fired, "the reset itself still lands");
        let snapshot = sandbox.snapshot();
        assert_relative_eq!(snapshot.pressure, SEA_LEVEL_PRESSURE, max_relative = 1e-12);
        assert_relative_eq!(snapshot.radius, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_frame_caps_oversized_deltas() {
        let mut sandbox = create_sandbox();

        sandbox.advance_frame(5.0);

        assert_relative_eq!(sandbox.get_elapsed(), 0.1, max_relative = 1e-12);
    }

    #[test]
    fn test_snapshot_mirrors_engine_state() {
        let mut sandbox = create_sandbox();
        sandbox.select_mode(SimMode::Mission);
        sandbox.launch().unwrap();
        for _ in 0..100 {
            sandbox.advance_frame(TIME_STEP);
        }

        let snapshot = sandbox.snapshot();

        assert!(snapshot.running);
        assert!(snapshot.altitude > 0.0);
        assert_relative_eq!(
            snapshot.altitude,
            sandbox.engine.kinematics.position_y,
            max_relative = 1e-12
        );
        assert_relative_eq!(snapshot.moles, sandbox.engine.balloon.moles, max_relative = 1e-12);
    }
}
