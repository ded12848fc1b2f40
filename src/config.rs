//! Construction-time configuration of the landmark filter.
//!
//! Everything here is fixed for the lifetime of a filter instance. A configuration can be built in
//! code, starting from `EkfConfig::default()`, or loaded from TOML:
//!
//! ```toml
//! baseline = 0.34
//! initial_state = [0.0, 0.0, 0.0, 0.0]
//! measurement_noise = [[0.5, 0.0], [0.0, 0.5]]
//!
//! [landmark_frame]
//! sensor_offset = 0.05
//! ```
//!
//! Every field may be omitted, in which case its default is used.

use crate::error::ConfigError;
use crate::geometry::LandmarkFrame;
use crate::types::{
    ControlVector, Covariance, InnovationCovariance, StateVector, Symmetric, CONTROL_DIM,
    MEASUREMENT_DIM, STATE_DIM,
};
use serde::Deserialize;
use std::path::Path;

/// Distance between the two landmarks, in meters.
pub const DEFAULT_BASELINE: f64 = 0.34;

const SYMMETRY_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EkfConfig {
    /// Initial `[x, y, heading, linear_velocity]`
    pub initial_state: [f64; STATE_DIM],
    /// Initial `[linear_velocity, angular_velocity]`, only seeds the cached velocity diagnostics
    pub initial_control: [f64; CONTROL_DIM],
    /// Diagonal value of the initial covariance
    pub initial_variance: f64,
    /// Process noise `Q`, row-major
    pub process_noise: [[f64; STATE_DIM]; STATE_DIM],
    /// Measurement noise `R`, row-major
    pub measurement_noise: [[f64; MEASUREMENT_DIM]; MEASUREMENT_DIM],
    /// Distance between the two landmarks
    pub baseline: f64,
    pub landmark_frame: LandmarkFrame,
}

impl Default for EkfConfig {
    fn default() -> Self {
        EkfConfig {
            initial_state: [0.0; STATE_DIM],
            initial_control: [0.0; CONTROL_DIM],
            initial_variance: 1.0,
            process_noise: identity_rows(),
            measurement_noise: identity_rows(),
            baseline: DEFAULT_BASELINE,
            landmark_frame: LandmarkFrame::default(),
        }
    }
}

impl EkfConfig {
    /// Parses and validates a TOML configuration.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: EkfConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Checks that the configuration describes a usable filter.
    ///
    /// All values have to be finite, the baseline positive, the initial variance non-negative and
    /// both noise matrices symmetric. The measurement noise is not required to be positive
    /// definite; an innovation covariance that ends up singular is handled by `update` itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let frame = &self.landmark_frame;
        let all_finite = self
            .initial_state
            .iter()
            .chain(self.initial_control.iter())
            .chain(self.process_noise.iter().flatten())
            .chain(self.measurement_noise.iter().flatten())
            .chain(
                [
                    self.initial_variance,
                    self.baseline,
                    frame.origin_x,
                    frame.origin_y,
                    frame.orientation,
                    frame.sensor_offset,
                ]
                .iter(),
            )
            .all(|value| value.is_finite());
        if !all_finite {
            return Err(ConfigError::Invalid(
                "all configuration values must be finite".to_string(),
            ));
        }

        if self.baseline <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "landmark baseline must be positive, got {}",
                self.baseline
            )));
        }

        if self.initial_variance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "initial variance must be non-negative, got {}",
                self.initial_variance
            )));
        }

        if !self.process_noise_matrix().is_symmetric(SYMMETRY_TOLERANCE) {
            return Err(ConfigError::Invalid(
                "process noise matrix must be symmetric".to_string(),
            ));
        }

        if !self.measurement_noise_matrix().is_symmetric(SYMMETRY_TOLERANCE) {
            return Err(ConfigError::Invalid(
                "measurement noise matrix must be symmetric".to_string(),
            ));
        }

        Ok(())
    }

    pub fn initial_state_vector(&self) -> StateVector {
        StateVector::from(self.initial_state)
    }

    pub fn initial_control_vector(&self) -> ControlVector {
        ControlVector::from(self.initial_control)
    }

    pub fn initial_covariance(&self) -> Covariance {
        Covariance::from_diagonal_element(self.initial_variance)
    }

    pub fn process_noise_matrix(&self) -> Covariance {
        Covariance::from_fn(|row, col| self.process_noise[row][col])
    }

    pub fn measurement_noise_matrix(&self) -> InnovationCovariance {
        InnovationCovariance::from_fn(|row, col| self.measurement_noise[row][col])
    }
}

fn identity_rows<const N: usize>() -> [[f64; N]; N] {
    let mut rows = [[0.0; N]; N];
    for (index, row) in rows.iter_mut().enumerate() {
        row[index] = 1.0;
    }
    rows
}
