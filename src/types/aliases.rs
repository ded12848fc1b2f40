use nalgebra::{SMatrix, SVector};

/// Number of components in the state vector `[x, y, heading, linear_velocity]`
pub const STATE_DIM: usize = 4;
/// Number of components in the control input `[linear_velocity, angular_velocity]`
pub const CONTROL_DIM: usize = 2;
/// Number of components in a Cartesian landmark-frame fix `[x, y]`
pub const MEASUREMENT_DIM: usize = 2;

pub type StateVector = SVector<f64, STATE_DIM>;
pub type ControlVector = SVector<f64, CONTROL_DIM>;
pub type MeasurementVector = SVector<f64, MEASUREMENT_DIM>;
pub type Covariance = SMatrix<f64, STATE_DIM, STATE_DIM>;
pub type TransitionMatrix = SMatrix<f64, STATE_DIM, STATE_DIM>;
pub type TransitionJacobian = SMatrix<f64, STATE_DIM, STATE_DIM>;
pub type ControlMatrix = SMatrix<f64, STATE_DIM, CONTROL_DIM>;
pub type ObservationJacobian = SMatrix<f64, MEASUREMENT_DIM, STATE_DIM>;
pub type InnovationCovariance = SMatrix<f64, MEASUREMENT_DIM, MEASUREMENT_DIM>;
pub type KalmanGain = SMatrix<f64, STATE_DIM, MEASUREMENT_DIM>;
