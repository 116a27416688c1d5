use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Control error: {0}")]
    ControlError(String),

    #[error("Ramp error: {0}")]
    RampError(String),
}
