//! Error types reported by the filter, its geometry collaborators and configuration loading.

use thiserror::Error;

/// Failure of the triangulation collaborator to produce a bearing from two ranges.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TriangulationError {
    #[error("range measurements must be finite (got {range_1}, {range_2})")]
    NonFiniteRange { range_1: f64, range_2: f64 },

    #[error("range measurements must be non-negative (got {range_1}, {range_2})")]
    NegativeRange { range_1: f64, range_2: f64 },

    #[error("landmark baseline must be positive and finite (got {0})")]
    NonPositiveBaseline(f64),

    #[error("range to landmark 1 is zero, bearing is undefined")]
    ZeroRange,

    #[error("ranges {range_1} and {range_2} do not form a triangle with baseline {baseline}")]
    TriangleInequality {
        range_1: f64,
        range_2: f64,
        baseline: f64,
    },
}

/// Reasons a measurement update was skipped.
///
/// None of these are fatal to the filter: whenever `update` returns one of them the state and
/// both covariance matrices are left exactly as they were before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum UpdateError {
    #[error("innovation covariance is singular (rank {rank}), update skipped")]
    SingularInnovationCovariance { rank: usize },

    #[error("landmark-frame position ({x}, {y}) has zero magnitude, update skipped")]
    DegenerateGeometry { x: f64, y: f64 },

    #[error("triangulation failed: {0}")]
    Triangulation(#[from] TriangulationError),
}

/// Configuration could not be read or does not describe a usable filter.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
