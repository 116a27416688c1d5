use crate::constants::{
    DEFAULT_ENVELOPE_MASS, DEFAULT_MAX_RADIUS, DEFAULT_PAYLOAD_MASS, UNIVERSAL_GAS_CONSTANT,
};
use crate::control::gas::GasSpecies;

pub struct Balloon {
    pub gas: GasSpecies,
    pub moles: f64,           // mol, fixed between fills
    pub volume: f64,          // m³
    pub radius: f64,          // m
    pub constant_volume: f64, // m³, frozen at the last fill
    pub max_radius: f64,      // m, envelope burst threshold
    pub envelope_mass: f64,   // kg
    pub payload_mass: f64,    // kg
}

impl Balloon {
    pub fn new(gas: GasSpecies) -> Self {
        Balloon {
            gas,
            moles: 0.0,
            volume: 0.0,
            radius: 0.0,
            constant_volume: 0.0,
            max_radius: DEFAULT_MAX_RADIUS,
            envelope_mass: DEFAULT_ENVELOPE_MASS,
            payload_mass: DEFAULT_PAYLOAD_MASS,
        }
    }

    // Locks in the gas inventory from the fill conditions: n = PV/RT.
    // The volume at fill time also becomes the frozen reference for
    // constant-volume operation.
    pub fn fill(&mut self, pressure: f64, temperature: f64, radius: f64) {
        let volume = sphere_volume(radius);
        self.moles = pressure * volume / (UNIVERSAL_GAS_CONSTANT * temperature);
        self.volume = volume;
        self.radius = radius;
        self.constant_volume = volume;
    }

    // Ideal-gas volume at the given ambient conditions. Toward vacuum the
    // envelope expands without bound; the radius turns infinite and the
    // burst threshold takes over.
    pub fn resolve_volume(&mut self, pressure: f64, temperature: f64) {
        self.volume = if pressure > 0.0 {
            self.moles * UNIVERSAL_GAS_CONSTANT * temperature / pressure
        } else {
            f64::INFINITY
        };
        self.radius = sphere_radius(self.volume);
    }

    // Pressure that holds the frozen volume at the given temperature.
    pub fn constant_volume_pressure(&self, temperature: f64) -> f64 {
        self.moles * UNIVERSAL_GAS_CONSTANT * temperature / self.constant_volume
    }

    pub fn exceeds_burst_radius(&self) -> bool {
        self.radius >= self.max_radius
    }

    pub fn get_gas_mass(&self) -> f64 {
        self.moles * self.gas.molar_mass()
    }

    pub fn get_total_mass(&self) -> f64 {
        self.payload_mass + self.envelope_mass + self.get_gas_mass()
    }
}

pub fn sphere_volume(radius: f64) -> f64 {
    4.0 / 3.0 * std::f64::consts::PI * radius.powi(3)
}

pub fn sphere_radius(volume: f64) -> f64 {
    (3.0 * volume / (4.0 * std::f64::consts::PI)).cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn create_filled_balloon() -> Balloon {
        let mut balloon = Balloon::new(GasSpecies::Helium);
        balloon.fill(SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE, 1.0);
        balloon
    }

    #[test]
    fn test_fill_locks_in_moles() {
        let balloon = create_filled_balloon();

        // n = PV/RT for a one-meter sphere at 101325 Pa and 293 K
        assert_relative_eq!(balloon.volume, 4.188790204786391, max_relative = 1e-12);
        assert_abs_diff_eq!(balloon.moles, 174.23, epsilon = 0.01);
        assert_relative_eq!(balloon.radius, 1.0, max_relative = 1e-12);
        assert_relative_eq!(
            balloon.constant_volume,
            balloon.volume,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_sphere_geometry_round_trip() {
        let radius = 2.37;

        let volume = sphere_volume(radius);
        let recovered = sphere_radius(volume);

        assert_relative_eq!(recovered, radius, max_relative = 1e-12);
    }

    #[test]
    fn test_resolve_volume_follows_ideal_gas_law() {
        let mut balloon = create_filled_balloon();

        balloon.resolve_volume(SEA_LEVEL_PRESSURE / 2.0, SEA_LEVEL_TEMPERATURE);

        // Halving the pressure at fixed temperature doubles the volume
        assert_relative_eq!(
            balloon.volume,
            2.0 * balloon.constant_volume,
            max_relative = 1e-9
        );
        assert_relative_eq!(balloon.radius, 2.0_f64.cbrt(), max_relative = 1e-9);
    }

    #[test]
    fn test_resolve_volume_toward_vacuum() {
        let mut balloon = create_filled_balloon();

        balloon.resolve_volume(0.0, SEA_LEVEL_TEMPERATURE);

        assert!(
            balloon.volume.is_infinite(),
            "volume must expand without bound at zero pressure, got {}",
            balloon.volume
        );
        assert!(balloon.radius.is_infinite());
        assert!(balloon.exceeds_burst_radius());
    }

    #[test]
    fn test_constant_volume_pressure_matches_fill_point() {
        let balloon = create_filled_balloon();

        let pressure = balloon.constant_volume_pressure(SEA_LEVEL_TEMPERATURE);

        // At the fill temperature the frozen volume demands the fill pressure
        assert_relative_eq!(pressure, SEA_LEVEL_PRESSURE, max_relative = 1e-9);
    }

    #[test]
    fn test_constant_volume_pressure_scales_with_temperature() {
        let balloon = create_filled_balloon();

        let cold = balloon.constant_volume_pressure(SEA_LEVEL_TEMPERATURE / 2.0);

        assert_relative_eq!(cold, SEA_LEVEL_PRESSURE / 2.0, max_relative = 1e-9);
    }

    #[test]
    fn test_mass_accounting() {
        let balloon = create_filled_balloon();

        // ~174.23 mol of helium is roughly 0.697 kg of gas
        assert_abs_diff_eq!(balloon.get_gas_mass(), 0.6974, epsilon = 1e-3);
        assert_abs_diff_eq!(
            balloon.get_total_mass(),
            DEFAULT_PAYLOAD_MASS + DEFAULT_ENVELOPE_MASS + 0.6974,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_burst_predicate() {
        let mut balloon = create_filled_balloon();

        assert!(!balloon.exceeds_burst_radius());

        balloon.radius = balloon.max_radius;
        assert!(
            balloon.exceeds_burst_radius(),
            "reaching the threshold exactly must count as burst"
        );
    }
}
