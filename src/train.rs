//! Default train fleet and traffic profiles.
//!
//! The dashboard works with a fixed fleet of four Dutch train types. Each
//! type has a static physical/kinematic parameter set and a traffic profile
//! (trains per hour, hours per day, axles per train). The assembler fills
//! in the shared velocity afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four train types of the default fleet, in fixed output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainType {
    /// SGM sprinter, local stopping service.
    Sprinter,
    /// Double-deck intercity stock.
    Intercity,
    /// TRAXX locomotive.
    Traxx,
    /// SGNS container freight wagons.
    Cargo,
}

impl TrainType {
    /// All train types in the fixed fleet order.
    pub const ALL: [Self; 4] = [Self::Sprinter, Self::Intercity, Self::Traxx, Self::Cargo];

    /// Returns the display label used as the `type` field in the output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sprinter => "Sprinter",
            Self::Intercity => "Intercity",
            Self::Traxx => "Traxx",
            Self::Cargo => "Cargo",
        }
    }

    /// Returns the static traffic profile for this train type.
    #[must_use]
    pub const fn traffic(&self) -> TrafficProfile {
        match self {
            Self::Sprinter | Self::Intercity | Self::Traxx => TrafficProfile {
                trains_per_hour: 4,
                hours_per_day: 16,
                axles_per_train: 16,
            },
            Self::Cargo => TrafficProfile {
                trains_per_hour: 27,
                hours_per_day: 1,
                axles_per_train: 40,
            },
        }
    }

    /// Builds the static model for this train type.
    ///
    /// `time` and `velocity` are kinematic placeholders; the assembler
    /// overwrites the velocity with the uniform fleet value.
    #[must_use]
    pub fn model(
        &self,
        time: Option<Vec<f64>>,
        velocity: Option<f64>,
        start_coord: f64,
    ) -> TrainModel {
        match self {
            Self::Sprinter => TrainModel {
                n_carts: 4,
                cart_length: 25.15,
                bogie_distances: [-9.0, 9.0],
                wheel_distances: [-1.25, 1.25],
                mass_cart: 46_000.0,
                mass_bogie: 3_200.0,
                mass_wheel: 1_500.0,
                inertia_cart: 1.3e6,
                inertia_bogie: 1_000.0,
                prim_stiffness: 1.2e6,
                prim_damping: 5_000.0,
                sec_stiffness: 4.0e5,
                sec_damping: 30_000.0,
                time,
                velocity,
                start_coord,
            },
            Self::Intercity => TrainModel {
                n_carts: 4,
                cart_length: 26.4,
                bogie_distances: [-10.0, 10.0],
                wheel_distances: [-1.25, 1.25],
                mass_cart: 64_000.0,
                mass_bogie: 4_800.0,
                mass_wheel: 1_800.0,
                inertia_cart: 2.0e6,
                inertia_bogie: 1_400.0,
                prim_stiffness: 1.4e6,
                prim_damping: 6_000.0,
                sec_stiffness: 4.5e5,
                sec_damping: 35_000.0,
                time,
                velocity,
                start_coord,
            },
            Self::Traxx => TrainModel {
                n_carts: 1,
                cart_length: 18.9,
                bogie_distances: [-5.2, 5.2],
                wheel_distances: [-1.3, 1.3],
                mass_cart: 72_000.0,
                mass_bogie: 6_000.0,
                mass_wheel: 1_900.0,
                inertia_cart: 1.8e6,
                inertia_bogie: 1_800.0,
                prim_stiffness: 2.0e6,
                prim_damping: 8_000.0,
                sec_stiffness: 6.0e5,
                sec_damping: 40_000.0,
                time,
                velocity,
                start_coord,
            },
            Self::Cargo => TrainModel {
                n_carts: 10,
                cart_length: 19.74,
                bogie_distances: [-7.1, 7.1],
                wheel_distances: [-0.91, 0.91],
                mass_cart: 50_000.0,
                mass_bogie: 4_200.0,
                mass_wheel: 1_700.0,
                inertia_cart: 1.5e6,
                inertia_bogie: 1_200.0,
                prim_stiffness: 3.0e6,
                prim_damping: 10_000.0,
                sec_stiffness: 8.0e5,
                sec_damping: 45_000.0,
                time,
                velocity,
                start_coord,
            },
        }
    }
}

impl fmt::Display for TrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Load schedule of one train type, in the dashboard's wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficProfile {
    /// Trains per hour.
    #[serde(rename = "nb-per-hour")]
    pub trains_per_hour: u32,
    /// Operating hours per day.
    #[serde(rename = "nb-hours")]
    pub hours_per_day: u32,
    /// Axles per train.
    #[serde(rename = "nb-axles")]
    pub axles_per_train: u32,
}

/// Physical and kinematic parameters of one train.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainModel {
    /// Number of carts in the train set.
    pub n_carts: u32,
    /// Cart length between coupling faces [m].
    pub cart_length: f64,
    /// Bogie centre offsets from the cart centre [m].
    pub bogie_distances: [f64; 2],
    /// Wheelset offsets from the bogie centre [m].
    pub wheel_distances: [f64; 2],
    /// Cart mass [kg].
    pub mass_cart: f64,
    /// Bogie mass [kg].
    pub mass_bogie: f64,
    /// Wheelset mass [kg].
    pub mass_wheel: f64,
    /// Cart rotary inertia [kg m2].
    pub inertia_cart: f64,
    /// Bogie rotary inertia [kg m2].
    pub inertia_bogie: f64,
    /// Primary suspension stiffness [N/m].
    pub prim_stiffness: f64,
    /// Primary suspension damping [N s/m].
    pub prim_damping: f64,
    /// Secondary suspension stiffness [N/m].
    pub sec_stiffness: f64,
    /// Secondary suspension damping [N s/m].
    pub sec_damping: f64,
    /// Time vector placeholder, unset until a solver provides one.
    pub time: Option<Vec<f64>>,
    /// Velocity [m/s]; the assembler overwrites this with the fleet value.
    pub velocity: Option<f64>,
    /// Start coordinate along the track [m].
    pub start_coord: f64,
}

/// One entry of the default fleet: type, model and traffic profile.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetEntry {
    /// Train type of this entry.
    pub train_type: TrainType,
    /// Static model with the given kinematic placeholders.
    pub model: TrainModel,
    /// Static traffic profile for the type.
    pub traffic: TrafficProfile,
}

/// Builds the four default trains in fleet order.
///
/// # Examples
///
/// ```
/// use rose_input::{default_fleet, TrainType};
///
/// let fleet = default_fleet(None, None, 30.0);
/// assert_eq!(fleet.len(), 4);
/// assert_eq!(fleet[0].train_type, TrainType::Sprinter);
/// assert_eq!(fleet[3].traffic.trains_per_hour, 27);
/// ```
#[must_use]
pub fn default_fleet(
    time: Option<Vec<f64>>,
    velocity: Option<f64>,
    start_coord: f64,
) -> Vec<FleetEntry> {
    TrainType::ALL
        .iter()
        .map(|train_type| FleetEntry {
            train_type: *train_type,
            model: train_type.model(time.clone(), velocity, start_coord),
            traffic: train_type.traffic(),
        })
        .collect()
}

/// A train as it appears in the output document: the flattened model plus
/// the type label and traffic profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainRecord {
    /// Model parameters, flattened into the record.
    #[serde(flatten)]
    pub model: TrainModel,
    /// Train type label.
    #[serde(rename = "type")]
    pub train_type: TrainType,
    /// Traffic profile of the type.
    pub traffic: TrafficProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_order_and_size() {
        let fleet = default_fleet(None, None, 30.0);
        let types: Vec<TrainType> = fleet.iter().map(|e| e.train_type).collect();
        assert_eq!(
            types,
            vec![
                TrainType::Sprinter,
                TrainType::Intercity,
                TrainType::Traxx,
                TrainType::Cargo
            ]
        );
    }

    #[test]
    fn test_traffic_table() {
        assert_eq!(
            TrainType::Sprinter.traffic(),
            TrafficProfile {
                trains_per_hour: 4,
                hours_per_day: 16,
                axles_per_train: 16
            }
        );
        assert_eq!(
            TrainType::Cargo.traffic(),
            TrafficProfile {
                trains_per_hour: 27,
                hours_per_day: 1,
                axles_per_train: 40
            }
        );
    }

    #[test]
    fn test_model_passes_placeholders_through() {
        let model = TrainType::Traxx.model(Some(vec![0.0, 0.1]), Some(12.0), 30.0);
        assert_eq!(model.time, Some(vec![0.0, 0.1]));
        assert_eq!(model.velocity, Some(12.0));
        assert!((model.start_coord - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_traffic_profile_wire_names() {
        let json = serde_json::to_string(&TrainType::Sprinter.traffic()).unwrap();
        assert_eq!(json, r#"{"nb-per-hour":4,"nb-hours":16,"nb-axles":16}"#);
    }

    #[test]
    fn test_train_record_flattens_model() {
        let record = TrainRecord {
            model: TrainType::Sprinter.model(None, Some(100.0 / 3.6), 30.0),
            train_type: TrainType::Sprinter,
            traffic: TrainType::Sprinter.traffic(),
        };
        let value = serde_json::to_value(&record).unwrap();
        // Model fields sit at the top level next to type and traffic.
        assert!(value.get("mass_cart").is_some());
        assert_eq!(value["type"], "Sprinter");
        assert_eq!(value["traffic"]["nb-axles"], 16);
        assert!((value["velocity"].as_f64().unwrap() - 100.0 / 3.6).abs() < 1e-12);
        assert!(value["time"].is_null());
    }

    #[test]
    fn test_train_type_labels() {
        assert_eq!(TrainType::Sprinter.to_string(), "Sprinter");
        assert_eq!(TrainType::Cargo.label(), "Cargo");
    }
}
