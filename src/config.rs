use serde::{Deserialize, Serialize};
use crate::boundary::Boundaries;
use crate::hydro::error::Error;




/// Adiabatic index of a diatomic ideal gas.
pub const DEFAULT_GAMMA_LAW_INDEX: f64 = 1.4;

pub const DEFAULT_COURANT_NUMBER: f64 = 0.8;

pub const DEFAULT_FINAL_TIME: f64 = 0.2;




/**
 * How the faces normal to each axis contribute to a step on a
 * two-dimensional mesh. The two choices coincide in one dimension.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Splitting {
    /// Fluxes on all faces are computed from the state at the start of the
    /// step, and their differences are applied together. Flows that vary
    /// along both axes need a Courant number of about one half or less.
    Unsplit,
    /// The x-sweep is applied and committed before the y-sweep computes its
    /// fluxes. Guard zones are not refreshed between the sweeps.
    Sequential,
}

impl Default for Splitting {
    fn default() -> Self {
        Splitting::Unsplit
    }
}




/**
 * Run-time parameters of an Euler solver run. The mesh resolution is carried
 * separately by `Mesh`.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gamma_law_index: f64,
    pub courant_number: f64,
    pub final_time: f64,
    pub boundaries: Boundaries,
    pub splitting: Splitting,
    /// Validate every interior zone after each step, and abort the run on
    /// the first non-finite or unphysical state.
    pub check_finite: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gamma_law_index: DEFAULT_GAMMA_LAW_INDEX,
            courant_number: DEFAULT_COURANT_NUMBER,
            final_time: DEFAULT_FINAL_TIME,
            boundaries: Boundaries::reflective(),
            splitting: Splitting::Unsplit,
            check_finite: true,
        }
    }
}




// ============================================================================
impl Config {

    pub fn with_courant_number(self, courant_number: f64) -> Self {
        Self { courant_number, ..self }
    }

    pub fn with_final_time(self, final_time: f64) -> Self {
        Self { final_time, ..self }
    }

    pub fn with_gamma_law_index(self, gamma_law_index: f64) -> Self {
        Self { gamma_law_index, ..self }
    }

    pub fn with_boundaries(self, boundaries: Boundaries) -> Self {
        Self { boundaries, ..self }
    }

    pub fn with_splitting(self, splitting: Splitting) -> Self {
        Self { splitting, ..self }
    }

    pub fn with_check_finite(self, check_finite: bool) -> Self {
        Self { check_finite, ..self }
    }

    /**
     * Check that the parameters describe a run the explicit scheme can carry
     * out. The Courant number must lie strictly between zero and one.
     */
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.gamma_law_index > 1.0) || !self.gamma_law_index.is_finite() {
            Err(Error::InvalidConfig(format!("gamma law index must exceed 1, got {}", self.gamma_law_index)))
        } else if !(self.courant_number > 0.0 && self.courant_number < 1.0) {
            Err(Error::InvalidConfig(format!("Courant number must be in (0, 1), got {}", self.courant_number)))
        } else if !(self.final_time > 0.0) || !self.final_time.is_finite() {
            Err(Error::InvalidConfig(format!("final time must be positive, got {}", self.final_time)))
        } else {
            Ok(())
        }
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::Config;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.gamma_law_index, 1.4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unstable_courant_numbers_are_rejected() {
        assert!(Config::default().with_courant_number(1.0).validate().is_err());
        assert!(Config::default().with_courant_number(0.0).validate().is_err());
        assert!(Config::default().with_courant_number(f64::NAN).validate().is_err());
        assert!(Config::default().with_courant_number(0.6).validate().is_ok());
    }

    #[test]
    fn unphysical_parameters_are_rejected() {
        assert!(Config::default().with_gamma_law_index(1.0).validate().is_err());
        assert!(Config::default().with_final_time(0.0).validate().is_err());
        assert!(Config::default().with_final_time(f64::INFINITY).validate().is_err());
    }
}
