pub mod aerostatics;
pub mod kinematics;
