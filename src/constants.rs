// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.314; // J/(mol·K)
pub const MOLAR_MASS_AIR: f64 = 0.0289644; // kg/mol

// Environmental Constants
pub const SEA_LEVEL_TEMPERATURE: f64 = 293.0; // K
pub const SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa (pascals)
pub const TROPOSPHERE_LAPSE_RATE: f64 = 0.0065; // K per meter
pub const MIN_TEMPERATURE: f64 = 1.0; // K, lapse-rate floor

// Balloon Constants
pub const SPHERE_DRAG_COEFFICIENT: f64 = 0.47;
pub const DEFAULT_INITIAL_RADIUS: f64 = 1.0; // m
pub const DEFAULT_MAX_RADIUS: f64 = 5.0; // m, envelope burst threshold
pub const DEFAULT_ENVELOPE_MASS: f64 = 2.0; // kg
pub const DEFAULT_PAYLOAD_MASS: f64 = 1.0; // kg

// Simulation Parameters
pub const TIME_STEP: f64 = 0.1; // s
pub const MAX_TIME_STEP: f64 = 0.1; // s, cap on incoming frame deltas
pub const MAX_SIMULATION_TIME: f64 = 86400.0; // s
pub const RAMP_DURATION: f64 = 10.0; // s, slider animation length
pub const RESET_DELAY: f64 = 3.0; // s, latency of the post-burst reset
