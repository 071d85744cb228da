//! Track geometry and material constants.
//!
//! Everything here is fixed apart from the sleeper counts: the segment
//! count is derived from the length of the sleeper list, all other values
//! are identical across segments.

use serde::{Deserialize, Serialize};

/// Track geometry parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    /// Number of track segments.
    pub n_segments: usize,
    /// Number of sleepers per segment.
    pub n_sleepers: Vec<u32>,
    /// Distance between sleepers, equal for each segment [m].
    pub sleeper_distance: f64,
    /// Depth of the soil per segment [m].
    pub depth_soil: Vec<f64>,
    /// Sleeper length [m].
    pub sleeper_length: f64,
    /// Sleeper width [m].
    pub sleeper_width: f64,
}

impl TrackGeometry {
    /// Builds the geometry for the given per-segment sleeper counts.
    ///
    /// The segment count is the length of the list; all other fields are
    /// fixed constants.
    #[must_use]
    pub fn for_segments(n_sleepers: Vec<u32>) -> Self {
        Self {
            n_segments: n_sleepers.len(),
            n_sleepers,
            sleeper_distance: 0.6,
            depth_soil: vec![1.0],
            sleeper_length: 3.5,
            sleeper_width: 0.25,
        }
    }
}

/// Track material constants: rail, Rayleigh damping, rail pad, sleeper and
/// the Hertzian contact model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMaterials {
    /// Young's modulus of the rail [N/m2].
    pub young_mod_beam: f64,
    /// Poisson ratio of the rail.
    pub poisson_beam: f64,
    /// Inertia of the rail [m4].
    pub inertia_beam: f64,
    /// Density of the rail [kg/m3].
    pub rho: f64,
    /// Cross-sectional area of the rail [m2].
    pub rail_area: f64,
    /// Timoshenko shear factor of the rail.
    pub shear_factor_rail: f64,
    /// Rayleigh damping ratio.
    pub damping_ratio: f64,
    /// First radial frequency of the Rayleigh damping system [rad/s].
    pub omega_one: f64,
    /// Second radial frequency of the Rayleigh damping system [rad/s].
    pub omega_two: f64,
    /// Mass of the rail pad [kg].
    pub mass_rail_pad: f64,
    /// Stiffness of the rail pad [N/m2].
    pub stiffness_rail_pad: f64,
    /// Damping of the rail pad [N/m2/s].
    pub damping_rail_pad: f64,
    /// Mass of the sleeper [kg].
    pub mass_sleeper: f64,
    /// Hertzian contact coefficient.
    pub hertzian_contact_coef: f64,
    /// Hertzian power.
    pub hertzian_power: f64,
}

impl Default for TrackMaterials {
    fn default() -> Self {
        Self {
            young_mod_beam: 210e9,
            poisson_beam: 0.0,
            inertia_beam: 2.24e-5,
            rho: 7860.0,
            rail_area: 69.6e-2,
            shear_factor_rail: 0.0,
            damping_ratio: 0.02,
            omega_one: 6.283,
            omega_two: 125.66,
            mass_rail_pad: 5.0,
            stiffness_rail_pad: 750e6,
            damping_rail_pad: 750e3,
            mass_sleeper: 140.0,
            hertzian_contact_coef: 9.1e-7,
            hertzian_power: 1.5,
        }
    }
}

/// Combined track information: geometry plus materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    /// Geometry of the track segments.
    pub geometry: TrackGeometry,
    /// Material constants, identical for all segments.
    pub materials: TrackMaterials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_count_follows_sleeper_list() {
        let geometry = TrackGeometry::for_segments(vec![140, 120, 160]);
        assert_eq!(geometry.n_segments, 3);
        assert_eq!(geometry.n_sleepers, vec![140, 120, 160]);
    }

    #[test]
    fn test_geometry_constants() {
        let geometry = TrackGeometry::for_segments(vec![140]);
        assert!((geometry.sleeper_distance - 0.6).abs() < f64::EPSILON);
        assert_eq!(geometry.depth_soil, vec![1.0]);
        assert!((geometry.sleeper_length - 3.5).abs() < f64::EPSILON);
        assert!((geometry.sleeper_width - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_material_constants() {
        let materials = TrackMaterials::default();
        assert!((materials.young_mod_beam - 210e9).abs() < f64::EPSILON);
        assert!((materials.hertzian_power - 1.5).abs() < f64::EPSILON);
        assert!((materials.mass_sleeper - 140.0).abs() < f64::EPSILON);
    }
}
