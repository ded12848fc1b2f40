//! Geometry collaborators consumed by the measurement update.
//!
//! The filter does not know how a robot pose is expressed relative to the landmarks, nor how two
//! ranges are turned into a bearing. Both are supplied through the traits below, so that the
//! filter core can be exercised with stub implementations returning fixed values.
//!
//! The default implementations share one convention for the landmark-relative frame: landmark 1
//! sits at the origin, landmark 2 sits at `(baseline, 0)` on the positive x-axis and the robot is
//! assumed to be on the non-negative y side of the baseline.

mod frame;
mod triangulation;

pub use frame::LandmarkFrame;
pub use triangulation::LawOfCosines;

use crate::error::TriangulationError;
use crate::types::MeasurementVector;

/// Coordinate change from the robot/world frame into the landmark-relative frame.
///
/// Implementations must be deterministic and side-effect free.
pub trait FrameTransform {
    fn to_landmark_frame(&self, pose_x: f64, pose_y: f64, heading: f64) -> (f64, f64);
}

/// Resolves a position from the ranges to both landmarks and their known baseline.
pub trait Triangulation {
    /// Bearing angle implied by the triangle formed by both landmarks and the robot.
    fn gamma_angle(
        &self,
        range_1: f64,
        range_2: f64,
        baseline: f64,
    ) -> Result<f64, TriangulationError>;

    /// Cartesian landmark-frame position implied by the ranges and the bearing.
    ///
    /// Note the argument order: the range to landmark 2 comes first.
    fn cartesian_fix(&self, range_2: f64, range_1: f64, gamma: f64) -> MeasurementVector;
}
