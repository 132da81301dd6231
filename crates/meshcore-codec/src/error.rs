//! Codec error types.

use thiserror::Error;

/// Errors that can occur while encoding a command frame or an LPP entry.
///
/// Every error is local to a single encode call; no partially written frame
/// is ever handed back alongside one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// Command identifier has no row in the layout registry.
    #[error("unknown command kind: {0}")]
    UnknownKind(String),

    /// Argument has the wrong type, is missing, or does not fit its field.
    #[error("invalid argument for field '{field}': {reason}")]
    InvalidArgument {
        /// Name of the field being encoded.
        field: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// Sensor identifier has no row in the LPP layout registry.
    #[error("unsupported sensor kind: {0}")]
    UnsupportedSensorKind(String),

    /// Scaled LPP value does not fit the declared integer width.
    #[error("{sensor} component '{component}' out of range: scaled value {value} not in {min}..={max}")]
    ValueOutOfRange {
        /// Sensor name.
        sensor: &'static str,
        /// Component name (e.g. "latitude").
        component: &'static str,
        /// Value after scaling.
        value: f64,
        /// Smallest encodable scaled value.
        min: i64,
        /// Largest encodable scaled value.
        max: i64,
    },
}

impl CodecError {
    /// Create an invalid argument error for a field.
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        CodecError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the codec.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::invalid_argument("timestamp", "expected an integer");
        assert!(err.to_string().contains("'timestamp'"));
        assert!(err.to_string().contains("expected an integer"));

        let err = CodecError::ValueOutOfRange {
            sensor: "humidity",
            component: "value",
            value: 300.0,
            min: 0,
            max: 255,
        };
        assert!(err.to_string().contains("0..=255"));

        let err = CodecError::UnknownKind("warp_drive".into());
        assert_eq!(err.to_string(), "unknown command kind: warp_drive");
    }
}
