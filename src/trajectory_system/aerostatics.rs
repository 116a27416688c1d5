use crate::constants::{MOLAR_MASS_AIR, UNIVERSAL_GAS_CONSTANT};
use crate::control::environment::Environment;
use crate::control::gas::GasSpecies;

#[derive(Debug)]
pub struct Aerostatics {
    pub drag_coefficient: f64,
}

impl Aerostatics {
    pub fn new(drag_coefficient: f64) -> Self {
        Aerostatics { drag_coefficient }
    }

    // Ideal-gas density of the ambient air, kg/m³.
    pub fn air_density(&self, environment: &Environment) -> f64 {
        environment.pressure * MOLAR_MASS_AIR
            / (UNIVERSAL_GAS_CONSTANT * environment.temperature)
    }

    // Density of the fill gas at the same conditions, kg/m³.
    pub fn gas_density(&self, environment: &Environment, gas: GasSpecies) -> f64 {
        environment.pressure * gas.molar_mass()
            / (UNIVERSAL_GAS_CONSTANT * environment.temperature)
    }

    // Archimedes: the buoyant force equals the weight of displaced air.
    pub fn calculate_lift(&self, environment: &Environment, volume: f64) -> f64 {
        self.air_density(environment) * volume * environment.gravity
    }

    // Quadratic drag on a sphere, signed to oppose the vertical motion.
    pub fn calculate_drag(&self, velocity: f64, radius: f64, environment: &Environment) -> f64 {
        let cross_section = std::f64::consts::PI * radius * radius;
        let dynamic_pressure = 0.5 * self.air_density(environment) * velocity * velocity;

        -velocity.signum() * dynamic_pressure * self.drag_coefficient * cross_section
    }
}
