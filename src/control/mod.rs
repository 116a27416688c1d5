pub mod balloon;
pub mod engine;
pub mod environment;
pub mod gas;
pub mod ramp;
pub mod sandbox;
