//! Error types for the input assembler.
//!
//! All errors are strongly typed using thiserror. This enables pattern
//! matching on specific failure conditions and keeps the offending file
//! path attached to I/O and parse failures.

use std::path::PathBuf;

use thiserror::Error;

/// Validation errors raised while restructuring the SoS document or
/// building an [`Assembler`](crate::assembler::Assembler).
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Segment '{segment}' has no scenarios")]
    EmptySegment {
        segment: String,
    },

    #[error(
        "Scenario '{scenario}' in segment '{segment}' has coordinates that \
         differ from the segment's other scenarios"
    )]
    CoordinateMismatch {
        segment: String,
        scenario: String,
    },

    #[error("Required field '{field}' is missing")]
    MissingField {
        field: String,
    },
}

/// Top-level error type for the assembler.
///
/// File errors carry the path they occurred on; the bare `Json` variant
/// covers in-memory serialization only.
#[derive(Debug, Error)]
pub enum RoseError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RoseError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this error originated in file I/O.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::ReadFile { .. } | Self::WriteFile { .. })
    }

    /// Returns true if this is a JSON parse or serialization error.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::ParseJson { .. } | Self::Json(_))
    }
}

/// Result type alias for assembler operations.
pub type RoseResult<T> = Result<T, RoseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_empty_segment() {
        let err = ValidationError::EmptySegment {
            segment: "Amsterdam-Utrecht".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("Amsterdam-Utrecht"));
        assert!(msg.contains("no scenarios"));
    }

    #[test]
    fn test_validation_error_coordinate_mismatch() {
        let err = ValidationError::CoordinateMismatch {
            segment: "seg1".to_string(),
            scenario: "sc2".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("seg1"));
        assert!(msg.contains("sc2"));
    }

    #[test]
    fn test_rose_error_from_validation() {
        let err: RoseError = ValidationError::MissingField {
            field: "embankment".to_string(),
        }
        .into();
        assert!(err.is_validation());
        assert!(!err.is_io());
        assert!(format!("{err}").contains("embankment"));
    }

    #[test]
    fn test_rose_error_read_file_carries_path() {
        let err = RoseError::ReadFile {
            path: PathBuf::from("/no/such/SOS.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.is_io());
        assert!(format!("{err}").contains("/no/such/SOS.json"));
    }

    #[test]
    fn test_rose_error_parse_json() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = RoseError::ParseJson {
            path: PathBuf::from("SOS.json"),
            source: bad,
        };
        assert!(err.is_json());
        assert!(!err.is_validation());
    }
}
