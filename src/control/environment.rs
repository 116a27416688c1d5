use crate::constants::{
    GRAVITY, MIN_TEMPERATURE, MOLAR_MASS_AIR, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE,
    TROPOSPHERE_LAPSE_RATE, UNIVERSAL_GAS_CONSTANT,
};

// Ambient conditions sampled from the atmosphere model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericConditions {
    pub pressure: f64,    // Pa
    pub temperature: f64, // K
}

pub struct Environment {
    pub altitude: f64,    // m
    pub pressure: f64,    // Pa
    pub temperature: f64, // K
    pub gravity: f64,     // m/s²
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            altitude: 0.0,
            pressure: SEA_LEVEL_PRESSURE,
            temperature: SEA_LEVEL_TEMPERATURE,
            gravity: GRAVITY,
        }
    }

    // Troposphere approximation extended over all real altitudes: linear
    // temperature lapse with a barometric power law for pressure. The
    // temperature is floored rather than allowed through absolute zero,
    // and pressure saturates to vacuum once the power-law base goes
    // non-positive.
    pub fn conditions_at(altitude: f64) -> AtmosphericConditions {
        let temperature =
            (SEA_LEVEL_TEMPERATURE - TROPOSPHERE_LAPSE_RATE * altitude).max(MIN_TEMPERATURE);

        let exponent =
            GRAVITY * MOLAR_MASS_AIR / (UNIVERSAL_GAS_CONSTANT * TROPOSPHERE_LAPSE_RATE);
        let base = 1.0 - TROPOSPHERE_LAPSE_RATE * altitude / SEA_LEVEL_TEMPERATURE;
        let pressure = if base > 0.0 {
            SEA_LEVEL_PRESSURE * base.powf(exponent)
        } else {
            0.0
        };

        AtmosphericConditions {
            pressure,
            temperature,
        }
    }

    pub fn update(&mut self, altitude: f64) {
        let conditions = Self::conditions_at(altitude);
        self.altitude = altitude;
        self.pressure = conditions.pressure;
        self.temperature = conditions.temperature;
    }

    pub fn reset(&mut self) {
        *self = Environment::new();
    }
}
