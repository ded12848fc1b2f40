#![crate_name = "landmark_ekf"]
//! The `landmark_ekf` crate contains the state-estimation core of a mobile robot localization
//! pipeline: an extended Kalman filter which fuses wheel-odometry control input with a position
//! fix triangulated from the ranges to two landmarks a known baseline apart.
//!
//! ## Structure
//! - `filter` contains `LandmarkEkf` together with its motion and observation models,
//! - `geometry` contains the collaborators which map poses into the landmark frame and
//!   triangulate ranges, with default implementations,
//! - `types` contains the fixed-size matrix types and the linear-algebra helpers built on them,
//! - `config` and `error` contain the configuration surface and error types.
//!
//! All matrices are stack allocated, neither prediction nor update allocates.
//!
//! The crate logs through the `log` facade and never installs a logger itself.
pub mod config;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod types;

pub use config::EkfConfig;
pub use error::{ConfigError, TriangulationError, UpdateError};
pub use filter::{Filter, LandmarkEkf, OdometryTick, RangeMeasurement};
