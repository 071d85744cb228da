//! Sources-of-strength (SoS) soil-scenario data.
//!
//! The SoS file describes, per track segment, a set of probability-weighted
//! soil scenarios together with the site coordinates of the segment. The
//! assembler flattens this into per-segment records that also carry the
//! shared embankment parameters and the construction time.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RoseError, RoseResult, ValidationError};

/// Construction time of the track, injected into every segment record [years].
pub const CONSTRUCTION_TIME_YEARS: u32 = 50;

/// A single soil scenario within a segment.
///
/// `soil_layers` is kept opaque; the dashboard interprets the layer
/// build-up, the assembler only carries it through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilScenario {
    /// Occurrence probability of this scenario within its segment.
    pub probability: f64,
    /// Layered soil build-up, passed through untouched.
    pub soil_layers: serde_json::Value,
    /// Site coordinates of the segment, one `[x, y]` pair per point.
    pub coordinates: Vec<[f64; 2]>,
}

/// Scenarios of one segment, keyed by scenario name.
pub type SegmentScenarios = BTreeMap<String, SoilScenario>;

/// The full SoS document: segment name to scenarios.
///
/// # Examples
///
/// ```
/// use rose_input::SosDocument;
///
/// let doc: SosDocument = serde_json::from_str(
///     r#"{"seg1": {"sc1": {"probability": 1.0, "soil_layers": [], "coordinates": [[0.0, 0.0]]}}}"#,
/// ).unwrap();
/// assert_eq!(doc.segments().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SosDocument(pub BTreeMap<String, SegmentScenarios>);

impl SosDocument {
    /// Loads and parses a SoS JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RoseError::ReadFile`] if the file cannot be opened and
    /// [`RoseError::ParseJson`] if it is not valid JSON of the expected
    /// shape. Both carry the offending path.
    pub fn from_path(path: impl AsRef<Path>) -> RoseResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RoseError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let doc: Self = serde_json::from_reader(reader).map_err(|source| RoseError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "loaded SoS document from {} ({} segments)",
            path.display(),
            doc.0.len()
        );
        Ok(doc)
    }

    /// Returns the segment map.
    #[must_use]
    pub const fn segments(&self) -> &BTreeMap<String, SegmentScenarios> {
        &self.0
    }

    /// Flattens the document into per-segment output records.
    ///
    /// Each segment keeps its scenarios (probability + soil layers), gains
    /// the shared embankment record and the construction time, and carries
    /// one coordinate list. Scenarios within a segment must agree on their
    /// coordinates.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a segment without scenarios or with
    /// scenarios whose coordinate lists differ.
    pub fn restructure(
        &self,
        embankment: &Embankment,
    ) -> RoseResult<BTreeMap<String, SegmentRecord>> {
        let mut out = BTreeMap::new();
        for (segment, scenarios) in &self.0 {
            let mut iter = scenarios.iter();
            let (_, first) = iter.next().ok_or_else(|| ValidationError::EmptySegment {
                segment: segment.clone(),
            })?;
            let coordinates = &first.coordinates;
            for (scenario, data) in iter {
                if data.coordinates != *coordinates {
                    return Err(ValidationError::CoordinateMismatch {
                        segment: segment.clone(),
                        scenario: scenario.clone(),
                    }
                    .into());
                }
            }

            let flattened = scenarios
                .iter()
                .map(|(name, data)| {
                    (
                        name.clone(),
                        ScenarioRecord {
                            probability: data.probability,
                            soil_layers: data.soil_layers.clone(),
                        },
                    )
                })
                .collect();

            out.insert(
                segment.clone(),
                SegmentRecord {
                    coordinates: coordinates.clone(),
                    scenarios: flattened,
                    embankment: embankment.clone(),
                    construction_time: CONSTRUCTION_TIME_YEARS,
                },
            );
        }
        Ok(out)
    }
}

/// A scenario as it appears in the output document: coordinates stripped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// Occurrence probability of this scenario within its segment.
    pub probability: f64,
    /// Layered soil build-up, passed through untouched.
    pub soil_layers: serde_json::Value,
}

/// One segment of the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// Site coordinates shared by all scenarios of the segment.
    pub coordinates: Vec<[f64; 2]>,
    /// Flattened scenarios keyed by scenario name.
    pub scenarios: BTreeMap<String, ScenarioRecord>,
    /// Embankment parameters, identical for every segment.
    pub embankment: Embankment,
    /// Construction time of the track [years].
    pub construction_time: u32,
}

/// Wire form of the embankment record.
type EmbankmentTuple = (String, f64, f64, f64, f64, f64);

/// Embankment parameters applied uniformly to every track segment.
///
/// On the wire this is the six-element array
/// `[material, shear_modulus, poisson_ratio, density, damping_coef_1,
/// damping_coef_2]`.
///
/// # Examples
///
/// ```
/// use rose_input::Embankment;
///
/// let emb = Embankment::from_elastic("embankment", 100e6, 0.2, 2000.0, 0.05, 0.8);
/// assert!((emb.shear_modulus - 100e6 / 2.4).abs() < 1e-6);
///
/// let json = serde_json::to_string(&emb).unwrap();
/// assert!(json.starts_with("[\"embankment\""));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EmbankmentTuple", into = "EmbankmentTuple")]
pub struct Embankment {
    /// Material label, e.g. `"embankment"`.
    pub material: String,
    /// Shear modulus [N/m2].
    pub shear_modulus: f64,
    /// Poisson ratio.
    pub poisson_ratio: f64,
    /// Density [kg/m3].
    pub density: f64,
    /// First damping coefficient.
    pub damping_coef_1: f64,
    /// Second damping coefficient.
    pub damping_coef_2: f64,
}

impl Embankment {
    /// Creates an embankment record from its raw parameters.
    #[must_use]
    pub fn new(
        material: impl Into<String>,
        shear_modulus: f64,
        poisson_ratio: f64,
        density: f64,
        damping_coef_1: f64,
        damping_coef_2: f64,
    ) -> Self {
        Self {
            material: material.into(),
            shear_modulus,
            poisson_ratio,
            density,
            damping_coef_1,
            damping_coef_2,
        }
    }

    /// Creates an embankment record from a Young's modulus, deriving the
    /// shear modulus as `G = E / (2 (1 + nu))`.
    #[must_use]
    pub fn from_elastic(
        material: impl Into<String>,
        young_modulus: f64,
        poisson_ratio: f64,
        density: f64,
        damping_coef_1: f64,
        damping_coef_2: f64,
    ) -> Self {
        Self::new(
            material,
            young_modulus / (2.0 * (1.0 + poisson_ratio)),
            poisson_ratio,
            density,
            damping_coef_1,
            damping_coef_2,
        )
    }
}

impl From<EmbankmentTuple> for Embankment {
    fn from(t: EmbankmentTuple) -> Self {
        Self {
            material: t.0,
            shear_modulus: t.1,
            poisson_ratio: t.2,
            density: t.3,
            damping_coef_1: t.4,
            damping_coef_2: t.5,
        }
    }
}

impl From<Embankment> for EmbankmentTuple {
    fn from(e: Embankment) -> Self {
        (
            e.material,
            e.shear_modulus,
            e.poisson_ratio,
            e.density,
            e.damping_coef_1,
            e.damping_coef_2,
        )
    }
}
