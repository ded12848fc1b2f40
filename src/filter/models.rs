//! Motion and observation models of the landmark filter.
//!
//! The mean propagation uses the linear pair `F`/`B`, while the covariance propagation uses the
//! Jacobian of the nonlinear motion model. The observation model is linearised with respect to
//! position only; its heading and velocity columns are always zero.

use crate::error::UpdateError;
use crate::types::{ControlMatrix, ObservationJacobian, TransitionJacobian, TransitionMatrix};

/// Fixed attenuation applied to every innovation before it is weighted by the gain.
pub const INNOVATION_ATTENUATION: f64 = 5.0;

/// Constant state transition `F`. Its last row is zero, so the previous velocity is discarded.
pub fn transition_matrix() -> TransitionMatrix {
    TransitionMatrix::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 0.0,
    )
}

/// Control matrix `B` before the first prediction.
pub fn initial_control_matrix() -> ControlMatrix {
    ControlMatrix::new(
        0.0, 0.0, //
        0.0, 0.0, //
        0.0, 1.0, //
        1.0, 0.0,
    )
}

/// Control matrix `B` mapping `[linear_velocity, angular_velocity]` into a state delta.
pub fn control_matrix(heading: f64, dt: f64) -> ControlMatrix {
    let (sin_heading, cos_heading) = heading.sin_cos();
    ControlMatrix::new(
        -cos_heading * dt, 0.0, //
        sin_heading * dt, 0.0, //
        0.0, dt, //
        1.0, 0.0,
    )
}

/// Jacobian of the motion model with respect to `[x, y, heading, v]`, evaluated at `heading`.
pub fn transition_jacobian(linear_velocity: f64, heading: f64, dt: f64) -> TransitionJacobian {
    let (sin_heading, cos_heading) = heading.sin_cos();
    let velocity_x = linear_velocity * cos_heading;
    let velocity_y = linear_velocity * sin_heading;
    TransitionJacobian::new(
        1.0, 0.0, -velocity_y * dt, cos_heading * dt, //
        0.0, 1.0, velocity_x * dt, sin_heading * dt, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Distance of a landmark-frame position from the frame origin.
///
/// Fails with `DegenerateGeometry` for the origin itself, where the observation Jacobian has no
/// defined direction.
pub fn landmark_distance(x_r: f64, y_r: f64) -> Result<f64, UpdateError> {
    let magnitude = (x_r * x_r + y_r * y_r).sqrt();
    if magnitude > 0.0 {
        Ok(magnitude)
    } else {
        Err(UpdateError::DegenerateGeometry { x: x_r, y: y_r })
    }
}

/// Jacobian `J_H` of the range sensing model at landmark-frame position `(x_r, y_r)`.
pub fn observation_jacobian(
    x_r: f64,
    y_r: f64,
    gamma: f64,
) -> Result<ObservationJacobian, UpdateError> {
    let magnitude = landmark_distance(x_r, y_r)?;
    let (sin_gamma, cos_gamma) = gamma.sin_cos();
    Ok(ObservationJacobian::new(
        x_r * cos_gamma / magnitude, y_r * cos_gamma / magnitude, 0.0, 0.0, //
        x_r * sin_gamma / magnitude, y_r * sin_gamma / magnitude, 0.0, 0.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn control_matrix_at_zero_heading() {
        let b = control_matrix(0.0, 0.5);
        let expected = ControlMatrix::new(-0.5, 0.0, 0.0, 0.0, 0.0, 0.5, 1.0, 0.0);
        assert!((b - expected).norm() < 1e-15);
    }

    #[test]
    fn control_matrix_signs_at_nonzero_heading() {
        let (heading, dt) = (0.7, 0.5);
        let b = control_matrix(heading, dt);
        assert!((b[(0, 0)] + heading.cos() * dt).abs() < 1e-15);
        assert!((b[(1, 0)] - heading.sin() * dt).abs() < 1e-15);
        assert!(b[(1, 0)] > 0.0);
        assert_eq!(b[(2, 1)], dt);
        assert_eq!(b[(3, 0)], 1.0);
    }

    #[test]
    fn transition_jacobian_decomposes_velocity_at_heading() {
        let j = transition_jacobian(2.0, FRAC_PI_2, 0.1);
        assert!((j[(0, 2)] + 0.2).abs() < 1e-12);
        assert!(j[(1, 2)].abs() < 1e-12);
        assert!(j[(0, 3)].abs() < 1e-12);
        assert!((j[(1, 3)] - 0.1).abs() < 1e-12);
        assert_eq!(j[(2, 2)], 1.0);
        assert_eq!(j[(3, 3)], 1.0);
    }

    #[test]
    fn observation_jacobian_ignores_heading_and_velocity() -> Result<(), UpdateError> {
        let j = observation_jacobian(3.0, 4.0, 0.0)?;
        let expected = ObservationJacobian::new(0.6, 0.8, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!((j - expected).norm() < 1e-15);
        Ok(())
    }

    #[test]
    fn observation_jacobian_is_undefined_at_origin() {
        assert_eq!(
            observation_jacobian(0.0, 0.0, 1.0),
            Err(UpdateError::DegenerateGeometry { x: 0.0, y: 0.0 })
        );
    }
}
