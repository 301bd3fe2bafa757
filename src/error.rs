//! Crate error type

use thiserror::Error;

/// Broad classification of a [`SimError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value was not the kind of thing the operation expected
    Type,
    /// A level schema or settings document could not be decoded
    Schema,
    /// Reading a document failed
    Io,
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("{field} must be a finite vector, got ({x}, {y})")]
    InvalidVector { field: &'static str, x: f32, y: f32 },

    #[error("unknown actor class `{0}`")]
    UnknownActorClass(String),

    #[error("actor for symbol `{symbol}` at ({x}, {y}) could not be built: {source}")]
    Factory {
        symbol: char,
        x: usize,
        y: usize,
        #[source]
        source: Box<SimError>,
    },

    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    #[error("malformed document: {0}")]
    Schema(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimError::InvalidVector { .. }
            | SimError::UnknownActorClass(_)
            | SimError::Factory { .. } => ErrorKind::Type,
            SimError::InvalidSetting { .. } | SimError::Schema(_) => ErrorKind::Schema,
            SimError::Io(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_error_is_type_kind() {
        let err = SimError::Factory {
            symbol: 'o',
            x: 3,
            y: 1,
            source: Box::new(SimError::InvalidVector {
                field: "pos",
                x: f32::NAN,
                y: 0.0,
            }),
        };
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().contains("`o` at (3, 1)"));
    }

    #[test]
    fn test_schema_error_kind() {
        let json_err = serde_json::from_str::<Vec<String>>("nope").unwrap_err();
        assert_eq!(SimError::from(json_err).kind(), ErrorKind::Schema);
    }
}
