//! Assembly of the dashboard input document.
//!
//! The assembler merges the restructured SoS data, the default train fleet,
//! the track constants and the time-integration schedule into one
//! [`DashInput`] document and writes it as 2-space-indented JSON. The whole
//! operation is a single pass: load, merge, write. Identical inputs produce
//! byte-identical output.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RoseError, RoseResult, ValidationError};
use crate::sos::{Embankment, SegmentRecord, SosDocument};
use crate::time::TimeIntegration;
use crate::track::{TrackGeometry, TrackInfo, TrackMaterials};
use crate::train::{default_fleet, TrainRecord};

/// Project name used when the caller does not supply one.
pub const DEFAULT_PROJECT_NAME: &str = "ROSEcalculations";

/// Uniform velocity assigned to every train in the fleet [m/s].
pub const TRAIN_VELOCITY: f64 = 100.0 / 3.6;

/// Start coordinate of every train along the track [m].
const TRAIN_START_COORD: f64 = 30.0;

/// Default per-segment sleeper counts of the track geometry.
const DEFAULT_SLEEPER_COUNTS: [u32; 1] = [140];

/// The consolidated dashboard input document.
///
/// Field order matches the wire layout: project name, soil data, traffic
/// data, track info, time integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashInput {
    /// Name of the project.
    pub project_name: String,
    /// Restructured soil data, keyed by segment name.
    pub sos_data: BTreeMap<String, SegmentRecord>,
    /// Train records keyed by contiguous integer position, "0".."3".
    pub traffic_data: BTreeMap<String, TrainRecord>,
    /// Track geometry and materials.
    pub track_info: TrackInfo,
    /// Time-integration schedule.
    pub time_integration: TimeIntegration,
}

impl DashInput {
    /// Merges the SoS document with the fixed fleet, track and time data.
    ///
    /// Every train receives the uniform [`TRAIN_VELOCITY`] and the fleet is
    /// re-keyed by integer position in fleet order.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from
    /// [`SosDocument::restructure`](crate::sos::SosDocument::restructure).
    pub fn assemble(
        sos: &SosDocument,
        embankment: &Embankment,
        project_name: impl Into<String>,
    ) -> RoseResult<Self> {
        let sos_data = sos.restructure(embankment)?;

        let mut traffic_data = BTreeMap::new();
        for (nbr, mut entry) in default_fleet(None, None, TRAIN_START_COORD)
            .into_iter()
            .enumerate()
        {
            entry.model.velocity = Some(TRAIN_VELOCITY);
            traffic_data.insert(
                nbr.to_string(),
                TrainRecord {
                    model: entry.model,
                    train_type: entry.train_type,
                    traffic: entry.traffic,
                },
            );
        }

        let track_info = TrackInfo {
            geometry: TrackGeometry::for_segments(DEFAULT_SLEEPER_COUNTS.to_vec()),
            materials: TrackMaterials::default(),
        };

        let doc = Self {
            project_name: project_name.into(),
            sos_data,
            traffic_data,
            track_info,
            time_integration: TimeIntegration::default(),
        };
        log::info!(
            "assembled dashboard input '{}' with {} segments and {} trains",
            doc.project_name,
            doc.sos_data.len(),
            doc.traffic_data.len()
        );
        Ok(doc)
    }

    /// Serializes the document as 2-space-indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RoseError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> RoseResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the document to `path` as 2-space-indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RoseError::WriteFile`] if the file cannot be created or
    /// written.
    pub fn write_json(&self, path: impl AsRef<Path>) -> RoseResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| RoseError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|source| RoseError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("wrote dashboard input to {}", path.display());
        Ok(())
    }
}

/// One configured end-to-end assembly: SoS file in, JSON document out.
#[derive(Debug, Clone)]
pub struct Assembler {
    sos_path: PathBuf,
    output_path: PathBuf,
    embankment: Embankment,
    project_name: String,
}

impl Assembler {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> AssemblerBuilder {
        AssemblerBuilder::default()
    }

    /// Runs the assembly: load, merge, write. Returns the document that was
    /// written.
    ///
    /// # Errors
    ///
    /// Any read, parse, validation or write failure aborts the run.
    pub fn run(&self) -> RoseResult<DashInput> {
        let sos = SosDocument::from_path(&self.sos_path)?;
        let doc = DashInput::assemble(&sos, &self.embankment, self.project_name.clone())?;
        doc.write_json(&self.output_path)?;
        Ok(doc)
    }
}

/// Builder for [`Assembler`].
///
/// # Example
/// ```rust,ignore
/// let assembler = Assembler::builder()
///     .sos_path("data_SoS/SOS.json")
///     .output_path("example_rose_input.json")
///     .embankment(Embankment::from_elastic("embankment", 100e6, 0.2, 2000.0, 0.05, 0.8))
///     .build()?;
/// assembler.run()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssemblerBuilder {
    sos_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    embankment: Option<Embankment>,
    project_name: Option<String>,
}

impl AssemblerBuilder {
    /// Set the path of the SoS input file (required).
    #[must_use]
    pub fn sos_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sos_path = Some(path.into());
        self
    }

    /// Set the path of the output JSON file (required).
    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Set the embankment record applied to every segment (required).
    #[must_use]
    pub fn embankment(mut self, embankment: Embankment) -> Self {
        self.embankment = Some(embankment);
        self
    }

    /// Set the project name (default: [`DEFAULT_PROJECT_NAME`]).
    #[must_use]
    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Build the assembler.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` if a required field is not
    /// set.
    pub fn build(self) -> RoseResult<Assembler> {
        let sos_path = self.sos_path.ok_or_else(|| ValidationError::MissingField {
            field: "sos_path".to_string(),
        })?;
        let output_path = self
            .output_path
            .ok_or_else(|| ValidationError::MissingField {
                field: "output_path".to_string(),
            })?;
        let embankment = self
            .embankment
            .ok_or_else(|| ValidationError::MissingField {
                field: "embankment".to_string(),
            })?;

        Ok(Assembler {
            sos_path,
            output_path,
            embankment,
            project_name: self
                .project_name
                .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
        })
    }
}

/// Creates the dashboard input JSON file from a SoS file and an embankment
/// record, using the default project name.
///
/// This is the single orchestration entry point: it reads the SoS file,
/// assembles the document and writes it to `path_output_json`.
///
/// # Errors
///
/// Any read, parse, validation or write failure aborts the call; there are
/// no retries and no partial output handling beyond what the filesystem
/// does on a failed write.
pub fn create_dash_input_json(
    path_sos_json: impl AsRef<Path>,
    embankment: &Embankment,
    path_output_json: impl AsRef<Path>,
) -> RoseResult<()> {
    Assembler::builder()
        .sos_path(path_sos_json.as_ref())
        .output_path(path_output_json.as_ref())
        .embankment(embankment.clone())
        .build()?
        .run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sos::{SegmentScenarios, SoilScenario};

    fn sample_sos() -> SosDocument {
        let mut scenarios = SegmentScenarios::new();
        scenarios.insert(
            "sc1".to_string(),
            SoilScenario {
                probability: 1.0,
                soil_layers: serde_json::json!([]),
                coordinates: vec![[0.0, 0.0]],
            },
        );
        SosDocument(BTreeMap::from([("seg1".to_string(), scenarios)]))
    }

    fn sample_embankment() -> Embankment {
        Embankment::new("embankment", 1e6, 0.2, 2000.0, 0.05, 0.8)
    }

    #[test]
    fn test_assemble_sets_uniform_velocity() {
        let doc = DashInput::assemble(&sample_sos(), &sample_embankment(), "test").unwrap();
        assert_eq!(doc.traffic_data.len(), 4);
        for record in doc.traffic_data.values() {
            assert_eq!(record.model.velocity, Some(TRAIN_VELOCITY));
            assert!(record.model.time.is_none());
        }
    }

    #[test]
    fn test_assemble_keys_trains_by_position() {
        let doc = DashInput::assemble(&sample_sos(), &sample_embankment(), "test").unwrap();
        let keys: Vec<&str> = doc.traffic_data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["0", "1", "2", "3"]);
        assert_eq!(doc.traffic_data["0"].train_type.label(), "Sprinter");
        assert_eq!(doc.traffic_data["3"].train_type.label(), "Cargo");
    }

    #[test]
    fn test_assemble_track_defaults() {
        let doc = DashInput::assemble(&sample_sos(), &sample_embankment(), "test").unwrap();
        assert_eq!(doc.track_info.geometry.n_segments, 1);
        assert_eq!(doc.track_info.geometry.n_sleepers, vec![140]);
        assert_eq!(doc.time_integration, TimeIntegration::default());
    }

    #[test]
    fn test_builder_defaults_project_name() {
        let assembler = Assembler::builder()
            .sos_path("in.json")
            .output_path("out.json")
            .embankment(sample_embankment())
            .build()
            .unwrap();
        assert_eq!(assembler.project_name, DEFAULT_PROJECT_NAME);
    }

    #[test]
    fn test_builder_rejects_missing_embankment() {
        let err = Assembler::builder()
            .sos_path("in.json")
            .output_path("out.json")
            .build()
            .unwrap_err();
        assert!(err.is_validation());
        assert!(format!("{err}").contains("embankment"));
    }

    #[test]
    fn test_to_json_string_is_indented() {
        let doc = DashInput::assemble(&sample_sos(), &sample_embankment(), "test").unwrap();
        let json = doc.to_json_string().unwrap();
        assert!(json.starts_with("{\n  \"project_name\""));
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let a = DashInput::assemble(&sample_sos(), &sample_embankment(), "test").unwrap();
        let b = DashInput::assemble(&sample_sos(), &sample_embankment(), "test").unwrap();
        assert_eq!(
            a.to_json_string().unwrap(),
            b.to_json_string().unwrap()
        );
    }
}
