//! Traits representing the filtering algorithms

/// Filtering algorithm trait
///
/// This trait indicates that implementor is a recursive filtering algorithm, which owns its belief
/// and refines it through alternating prediction and update steps. The steps may run at different
/// rates: prediction is usually driven by the control loop, while updates happen whenever a new
/// measurement arrives.
pub trait Filter {
    /// Input consumed by the prediction step
    type Control;
    /// Input consumed by the update step
    type Measurement;
    /// Result of prediction operation
    type Prediction;
    /// Result of update operation
    type Update;

    /// Propagates the belief forward using the given control input.
    fn predict(&mut self, control: &Self::Control) -> Self::Prediction;

    /// Corrects the belief using the given measurement.
    fn update(&mut self, measurement: &Self::Measurement) -> Self::Update;
}
