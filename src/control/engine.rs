use crate::constants::{
    DEFAULT_INITIAL_RADIUS, MAX_TIME_STEP, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE,
    SPHERE_DRAG_COEFFICIENT,
};
use crate::errors::SimulationError;
use crate::trajectory_system::{aerostatics::Aerostatics, kinematics::Kinematics};

use super::{balloon::Balloon, environment::Environment, gas::GasSpecies};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum SimMode {
    Free,
    Boyle,
    Charles,
    GayLussac,
    Mission,
}

impl SimMode {
    // Which ambient axes accept external writes in this mode.
    pub fn allows_pressure_input(&self) -> bool {
        matches!(self, SimMode::Free | SimMode::Boyle)
    }

    pub fn allows_temperature_input(&self) -> bool {
        matches!(self, SimMode::Free | SimMode::Charles | SimMode::GayLussac)
    }

    // Gay-Lussac's law demonstrates pressure response at frozen volume.
    pub fn holds_volume_constant(&self) -> bool {
        matches!(self, SimMode::GayLussac)
    }

    // Only the mission integrates vertical motion through the atmosphere.
    pub fn runs_flight_dynamics(&self) -> bool {
        matches!(self, SimMode::Mission)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub exploded: bool,
}

pub struct GasBalloonEngine {
    pub environment: Environment,
    pub balloon: Balloon,
    pub kinematics: Kinematics,
    pub aerostatics: Aerostatics,
    mode: SimMode,
    initial_radius: f64, // m, radius handed to fill on every reset
    running: bool,
    burst: bool,
}

impl GasBalloonEngine {
    pub fn new(gas: GasSpecies) -> Self {
        let mut engine = GasBalloonEngine {
            environment: Environment::new(),
            balloon: Balloon::new(gas),
            kinematics: Kinematics::new(),
            aerostatics: Aerostatics::new(SPHERE_DRAG_COEFFICIENT),
            mode: SimMode::Free,
            initial_radius: DEFAULT_INITIAL_RADIUS,
            running: false,
            burst: false,
        };
        engine.fill(
            SEA_LEVEL_PRESSURE,
            SEA_LEVEL_TEMPERATURE,
            DEFAULT_INITIAL_RADIUS,
        );
        engine
    }

    // Re-derives the gas inventory at the given conditions and clears the
    // burst latch. Runs on construction, mode entry, resets and
    // initial-radius changes; between fills the mole count never moves.
    pub fn fill(&mut self, pressure: f64, temperature: f64, radius: f64) {
        self.environment.pressure = pressure;
        self.environment.temperature = temperature;
        self.balloon.fill(pressure, temperature, radius);
        self.burst = false;
        log::debug!(
            "filled {:.2} mol of {} at {:.0} Pa / {:.1} K, radius {:.2} m",
            self.balloon.moles,
            self.balloon.gas.symbol(),
            pressure,
            temperature,
            radius
        );
    }

    pub fn step(&mut self, delta_time: f64) -> StepOutcome {
        assert!(self.balloon.moles > 0.0, "step requires a filled balloon");
        let dt = delta_time.min(MAX_TIME_STEP);

        let in_flight = self.mode.runs_flight_dynamics() && self.running;

        // The ambient conditions follow the balloon through the atmosphere,
        // using the altitude it drifts to under last tick's velocity.
        if in_flight {
            self.kinematics.advance_position(dt);
            self.environment.update(self.kinematics.position_y);
        }

        if self.mode.holds_volume_constant() {
            // Volume and radius stay frozen; the pressure answers for the
            // temperature instead, including every tick of a ramp.
            self.environment.pressure = self
                .balloon
                .constant_volume_pressure(self.environment.temperature);
        } else {
            self.balloon
                .resolve_volume(self.environment.pressure, self.environment.temperature);
        }

        // Buoyancy against weight and drag, integrated explicitly. There is
        // no finite force balance once the envelope degenerates toward
        // vacuum expansion; the burst latch below reports that instead.
        if in_flight && self.balloon.radius.is_finite() {
            let total_mass = self.balloon.get_total_mass();
            let lift = self
                .aerostatics
                .calculate_lift(&self.environment, self.balloon.volume);
            let weight = total_mass * self.environment.gravity;
            let drag = self.aerostatics.calculate_drag(
                self.kinematics.velocity,
                self.balloon.radius,
                &self.environment,
            );

            let acceleration = (lift - weight + drag) / total_mass;
            self.kinematics.apply_acceleration(acceleration, dt);

            if self.kinematics.clamp_to_ground() {
                self.environment.update(0.0);
            }
        }

        let exploded = !self.burst && self.balloon.exceeds_burst_radius();
        if exploded {
            self.burst = true;
            log::warn!(
                "balloon burst: radius {:.2} m reached the {:.2} m limit",
                self.balloon.radius,
                self.balloon.max_radius
            );
        }

        StepOutcome { exploded }
    }

    // Slider writes land only on the axes the current mode exposes;
    // anything else is dropped without complaint.
    pub fn set_pressure(&mut self, pressure: f64) {
        if self.mode.allows_pressure_input() {
            self.environment.pressure = pressure;
        }
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        if self.mode.allows_temperature_input() {
            self.environment.temperature = temperature;
        }
    }

    pub fn set_mode(&mut self, mode: SimMode) {
        self.mode = mode;
        self.reinitialize();
        log::info!("mode switched to {:?}", mode);
    }

    pub fn set_gas(&mut self, gas: GasSpecies) {
        self.balloon.gas = gas;
    }

    pub fn set_payload_mass(&mut self, mass: f64) {
        self.balloon.payload_mass = mass;
    }

    pub fn set_envelope_mass(&mut self, mass: f64) {
        self.balloon.envelope_mass = mass;
    }

    pub fn set_max_radius(&mut self, radius: f64) {
        self.balloon.max_radius = radius;
    }

    // Changing the starting radius is a fill event: the inventory is
    // re-derived at the current ambient conditions.
    pub fn set_initial_radius(&mut self, radius: f64) {
        self.initial_radius = radius;
        self.fill(
            self.environment.pressure,
            self.environment.temperature,
            radius,
        );
    }

    pub fn launch(&mut self) -> Result<(), SimulationError> {
        if !self.mode.runs_flight_dynamics() {
            return Err(SimulationError::ControlError(format!(
                "launch is only available in Mission mode, not {:?}",
                self.mode
            )));
        }
        if !self.balloon.gas.is_lighter_than_air() {
            log::warn!(
                "{} is denser than air; the balloon will stay grounded",
                self.balloon.gas.symbol()
            );
        }
        self.running = true;
        log::info!("balloon launched");
        Ok(())
    }

    pub fn halt(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.reinitialize();
        log::info!("simulation reset in {:?} mode", self.mode);
    }

    fn reinitialize(&mut self) {
        self.running = false;
        self.kinematics.reset();
        self.environment.reset();
        self.fill(
            SEA_LEVEL_PRESSURE,
            SEA_LEVEL_TEMPERATURE,
            self.initial_radius,
        );
    }

    pub fn get_mode(&self) -> SimMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_burst(&self) -> bool {
        self.burst
    }

    pub fn get_initial_radius(&self) -> f64 {
        self.initial_radius
    }
}
