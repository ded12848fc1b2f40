//! Extended Kalman filter fusing wheel odometry with a two-landmark range fix.

use crate::config::EkfConfig;
use crate::error::{ConfigError, UpdateError};
use crate::filter::filter_traits::Filter;
use crate::filter::models::{
    control_matrix, initial_control_matrix, landmark_distance, observation_jacobian,
    transition_jacobian, transition_matrix, INNOVATION_ATTENUATION,
};
use crate::geometry::{FrameTransform, LandmarkFrame, LawOfCosines, Triangulation};
use crate::types::{
    ControlMatrix, ControlVector, Covariance, InnovationCovariance, Invertible, KalmanGain,
    MeasurementVector, QuadraticForm, StateVector, TransitionMatrix,
};
use log::{debug, warn};

/// Single odometry tick driving the prediction step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OdometryTick {
    /// Commanded `[linear_velocity, angular_velocity]`
    pub control: ControlVector,
    /// Heading the motion model is evaluated at, usually the previous filter heading
    pub heading: f64,
    /// Time elapsed since the previous prediction
    pub dt: f64,
}

/// Odometric pose paired with fresh ranges to both landmarks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMeasurement {
    pub odom_x: f64,
    pub odom_y: f64,
    /// Sensed distance to landmark 1
    pub range_1: f64,
    /// Sensed distance to landmark 2
    pub range_2: f64,
    pub heading: f64,
}

/// Extended Kalman filter over the state `[x, y, heading, linear_velocity]`.
///
/// The filter keeps two covariance matrices. `predict` derives the predicted covariance from the
/// current one, and `update` uses the predicted covariance only for the innovation covariance; the
/// Kalman gain and the posterior are computed from, and written back to, the current covariance.
/// The innovation is attenuated by the fixed factor `INNOVATION_ATTENUATION` before it is applied.
///
/// Velocity is not integrated: every prediction overwrites it with the commanded linear velocity.
///
/// The filter is generic over its two geometry collaborators, which default to `LandmarkFrame`
/// and `LawOfCosines`.
///
/// # Preconditions
///
/// `dt` passed to `predict` is expected to be positive and ranges passed to `update` are expected
/// to describe a physically valid triangle. Neither is validated by the filter itself; invalid
/// ranges are only caught if the triangulation collaborator rejects them.
///
/// The filter holds no internal synchronization, all calls on one instance must be serialized.
#[derive(Debug, Clone)]
pub struct LandmarkEkf<T = LandmarkFrame, G = LawOfCosines>
where
    T: FrameTransform,
    G: Triangulation,
{
    state: StateVector,
    covariance: Covariance,
    predicted_covariance: Covariance,
    process_noise: Covariance,
    measurement_noise: InnovationCovariance,
    transition_matrix: TransitionMatrix,
    control_matrix: ControlMatrix,
    baseline: f64,
    linear_velocity: f64,
    angular_velocity: f64,
    frame_transform: T,
    triangulation: G,
}

impl LandmarkEkf<LandmarkFrame, LawOfCosines> {
    /// Creates a filter with unit covariance, identity noise matrices, the default baseline and
    /// the default geometry collaborators.
    ///
    /// ```
    /// use landmark_ekf::filter::LandmarkEkf;
    /// use landmark_ekf::types::{ControlVector, StateVector};
    ///
    /// let mut ekf = LandmarkEkf::new(StateVector::zeros(), ControlVector::zeros());
    /// ekf.predict(&ControlVector::new(1.0, 0.0), 0.0, 1.0);
    /// assert_eq!(ekf.state()[3], 1.0);
    /// ```
    pub fn new(initial_state: StateVector, initial_control: ControlVector) -> Self {
        let config = EkfConfig {
            initial_state: initial_state.into(),
            initial_control: initial_control.into(),
            ..EkfConfig::default()
        };
        Self::from_parts(&config, LandmarkFrame::default(), LawOfCosines)
    }

    /// Creates a filter from a configuration, using `LandmarkFrame` built from the configured
    /// landmark frame and `LawOfCosines` triangulation.
    pub fn from_config(config: &EkfConfig) -> Result<Self, ConfigError> {
        Self::with_collaborators(config, config.landmark_frame, LawOfCosines)
    }
}

impl<T, G> LandmarkEkf<T, G>
where
    T: FrameTransform,
    G: Triangulation,
{
    /// Creates a filter from a configuration and explicitly given geometry collaborators.
    ///
    /// The configuration is validated first. The `landmark_frame` section of the configuration
    /// is ignored, since the frame transform is supplied directly.
    pub fn with_collaborators(
        config: &EkfConfig,
        frame_transform: T,
        triangulation: G,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, frame_transform, triangulation))
    }

    fn from_parts(config: &EkfConfig, frame_transform: T, triangulation: G) -> Self {
        let initial_control = config.initial_control_vector();
        LandmarkEkf {
            state: config.initial_state_vector(),
            covariance: config.initial_covariance(),
            predicted_covariance: config.initial_covariance(),
            process_noise: config.process_noise_matrix(),
            measurement_noise: config.measurement_noise_matrix(),
            transition_matrix: transition_matrix(),
            control_matrix: initial_control_matrix(),
            baseline: config.baseline,
            linear_velocity: initial_control[0],
            angular_velocity: initial_control[1],
            frame_transform,
            triangulation,
        }
    }

    /// Prediction step.
    ///
    /// Recomputes `B` for the given heading and time step, propagates the mean with the linear
    /// model `x = F x + B u` and propagates the covariance with the motion Jacobian,
    /// `P_predicted = J_F P J_F^T + Q`. The Jacobian is evaluated with the linear velocity of
    /// this call's control input.
    pub fn predict(&mut self, control: &ControlVector, heading: f64, dt: f64) {
        self.linear_velocity = control[0];
        self.angular_velocity = control[1];

        self.control_matrix = control_matrix(heading, dt);
        self.state = self.transition_matrix * self.state + self.control_matrix * control;

        let jacobian = transition_jacobian(self.linear_velocity, heading, dt);
        self.predicted_covariance = jacobian.quadratic_form(&self.covariance) + self.process_noise;

        debug!(
            "predicted state [{:.4}, {:.4}, {:.4}, {:.4}] (v={}, w={}, dt={})",
            self.state[0],
            self.state[1],
            self.state[2],
            self.state[3],
            self.linear_velocity,
            self.angular_velocity,
            dt
        );
    }

    /// Update step.
    ///
    /// Expresses the odometric pose in the landmark frame, triangulates a fix from both ranges and
    /// corrects the state with the attenuated difference between the two. On error nothing is
    /// modified and the error describes why the update was skipped:
    /// * `DegenerateGeometry` if the landmark-frame position is the frame origin,
    /// * `Triangulation` if the ranges could not be triangulated,
    /// * `SingularInnovationCovariance` if the innovation covariance is not invertible.
    pub fn update(
        &mut self,
        odom_x: f64,
        odom_y: f64,
        range_1: f64,
        range_2: f64,
        heading: f64,
    ) -> Result<(), UpdateError> {
        let result = self.correct(odom_x, odom_y, range_1, range_2, heading);
        match &result {
            Ok(()) => debug!(
                "updated state [{:.4}, {:.4}, {:.4}, {:.4}]",
                self.state[0], self.state[1], self.state[2], self.state[3]
            ),
            Err(err) => warn!("landmark update skipped: {}", err),
        }
        result
    }

    fn correct(
        &mut self,
        odom_x: f64,
        odom_y: f64,
        range_1: f64,
        range_2: f64,
        heading: f64,
    ) -> Result<(), UpdateError> {
        let (x_r, y_r) = self.frame_transform.to_landmark_frame(odom_x, odom_y, heading);
        landmark_distance(x_r, y_r)?;

        let gamma = self.triangulation.gamma_angle(range_1, range_2, self.baseline)?;
        let jacobian = observation_jacobian(x_r, y_r, gamma)?;

        let odometric_fix = MeasurementVector::new(x_r, y_r);
        let sensed_fix = self.triangulation.cartesian_fix(range_2, range_1, gamma);
        let innovation = (odometric_fix - sensed_fix) / INNOVATION_ATTENUATION;

        let innovation_covariance =
            jacobian.quadratic_form(&self.predicted_covariance) + self.measurement_noise;
        let innovation_covariance_inv = innovation_covariance.checked_inverse().ok_or_else(|| {
            UpdateError::SingularInnovationCovariance {
                rank: innovation_covariance.numerical_rank(),
            }
        })?;

        let cross_covariance: KalmanGain = self.covariance * jacobian.transpose();
        let kalman_gain: KalmanGain = cross_covariance * innovation_covariance_inv;

        self.state += kalman_gain * innovation;
        self.covariance -= kalman_gain * cross_covariance.transpose();
        Ok(())
    }

    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Current (post-update) covariance.
    pub fn covariance(&self) -> &Covariance {
        &self.covariance
    }

    /// Covariance produced by the most recent prediction.
    pub fn predicted_covariance(&self) -> &Covariance {
        &self.predicted_covariance
    }

    pub fn process_noise(&self) -> &Covariance {
        &self.process_noise
    }

    pub fn measurement_noise(&self) -> &InnovationCovariance {
        &self.measurement_noise
    }

    pub fn transition_matrix(&self) -> &TransitionMatrix {
        &self.transition_matrix
    }

    /// Control matrix `B` computed by the most recent prediction.
    pub fn control_matrix(&self) -> &ControlMatrix {
        &self.control_matrix
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Linear velocity of the most recent control input. Diagnostic only.
    pub fn linear_velocity(&self) -> f64 {
        self.linear_velocity
    }

    /// Angular velocity of the most recent control input. Diagnostic only.
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }
}

impl<T, G> Filter for LandmarkEkf<T, G>
where
    T: FrameTransform,
    G: Triangulation,
{
    type Control = OdometryTick;
    type Measurement = RangeMeasurement;
    type Prediction = ();
    type Update = Result<(), UpdateError>;

    fn predict(&mut self, tick: &OdometryTick) {
        LandmarkEkf::<T, G>::predict(self, &tick.control, tick.heading, tick.dt)
    }

    fn update(&mut self, measurement: &RangeMeasurement) -> Result<(), UpdateError> {
        LandmarkEkf::<T, G>::update(
            self,
            measurement.odom_x,
            measurement.odom_y,
            measurement.range_1,
            measurement.range_2,
            measurement.heading,
        )
    }
}
