use crate::constants::MOLAR_MASS_AIR;

// Fill gases available to the balloon envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasSpecies {
    Helium,
    Neon,
    Argon,
}

impl GasSpecies {
    // Standard atomic weights, kg/mol.
    pub fn molar_mass(&self) -> f64 {
        match self {
            GasSpecies::Helium => 0.004002602,
            GasSpecies::Neon => 0.0201797,
            GasSpecies::Argon => 0.039948,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            GasSpecies::Helium => "He",
            GasSpecies::Neon => "Ne",
            GasSpecies::Argon => "Ar",
        }
    }

    // A balloon can only generate net lift when the fill gas displaces
    // heavier air.
    pub fn is_lighter_than_air(&self) -> bool {
        self.molar_mass() < MOLAR_MASS_AIR
    }
}
