pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::balloon::Balloon;
pub use control::engine::{GasBalloonEngine, SimMode, StepOutcome};
pub use control::environment::{AtmosphericConditions, Environment};
pub use control::gas::GasSpecies;
pub use control::ramp::{ParameterRamp, RampParameter};
pub use control::sandbox::{FrameReport, Sandbox, StateSnapshot};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerostatics::Aerostatics;
pub use trajectory_system::kinematics::Kinematics;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;
