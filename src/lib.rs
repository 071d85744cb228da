//! # rose-input - dashboard input assembly for railway track dynamics
//!
//! This crate assembles the single JSON input document consumed by the ROSE
//! railway-track dynamics dashboard. It merges four static data sources:
//!
//! - **SoS data**: per-segment, probability-weighted soil scenarios read
//!   from a sources-of-strength JSON file
//! - **Traffic data**: the fixed default fleet of four train types with
//!   their traffic profiles
//! - **Track info**: fixed geometry and material constants
//! - **Time integration**: the fixed two-phase stepping schedule
//!
//! The result is written once as 2-space-indented JSON; identical inputs
//! produce byte-identical output.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rose_input::{create_dash_input_json, Embankment};
//!
//! let embankment = Embankment::from_elastic("embankment", 100e6, 0.2, 2000.0, 0.05, 0.8);
//! create_dash_input_json("data_SoS/SOS.json", &embankment, "example_rose_input.json")?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assembler;
pub mod error;
pub mod sos;
pub mod time;
pub mod track;
pub mod train;

// Re-export primary types at crate root for convenience
pub use assembler::{
    create_dash_input_json, Assembler, AssemblerBuilder, DashInput, DEFAULT_PROJECT_NAME,
    TRAIN_VELOCITY,
};
pub use error::{RoseError, RoseResult, ValidationError};
pub use sos::{
    Embankment, ScenarioRecord, SegmentRecord, SegmentScenarios, SoilScenario, SosDocument,
    CONSTRUCTION_TIME_YEARS,
};
pub use time::TimeIntegration;
pub use track::{TrackGeometry, TrackInfo, TrackMaterials};
pub use train::{default_fleet, FleetEntry, TrafficProfile, TrainModel, TrainRecord, TrainType};
