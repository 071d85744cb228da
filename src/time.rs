//! Time-integration schedule for the dynamics calculation.

use serde::{Deserialize, Serialize};

/// Two-phase time-stepping schedule plus the cumulative duration.
///
/// The initialisation phase brings the model to a quasi-static state before
/// the calculation phase runs the moving-load analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeIntegration {
    /// Total initialisation time [s].
    pub tot_ini_time: f64,
    /// Number of time steps in the initialisation phase.
    pub n_t_ini: u32,
    /// Total time during the calculation phase [s].
    pub tot_calc_time: f64,
    /// Number of time steps during the calculation phase.
    pub n_t_calc: u32,
    /// Cumulative time for the calculation [days].
    pub cumulative_time: u32,
}

impl Default for TimeIntegration {
    fn default() -> Self {
        Self {
            tot_ini_time: 0.5,
            n_t_ini: 5000,
            tot_calc_time: 1.0,
            n_t_calc: 8000,
            cumulative_time: 365,
        }
    }
}
