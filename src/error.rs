use thiserror::Error;

/// Top-level error type for the city model builder.
#[derive(Debug, Error)]
pub enum CityError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Internal-consistency errors of the city model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{collection} index {index} is out of bounds (len {len})")]
    IndexOutOfBounds {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    #[error("coordinate sequences differ in length: x={x}, y={y}, z={z:?}")]
    LengthMismatch { x: usize, y: usize, z: Option<usize> },

    #[error("{collection} {index} holds a non-finite number")]
    NonFiniteValue {
        collection: &'static str,
        index: usize,
    },
}

/// Errors raised by builder operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid land use type: {0:?} (expected one of grass, water, building, asphalt)")]
    InvalidLandUseType(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while writing a document.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("land-use half extent must be finite and positive, got {0}")]
    InvalidHalfExtent(f64),
}

/// Convenience type alias for results using [`CityError`].
pub type Result<T> = std::result::Result<T, CityError>;
