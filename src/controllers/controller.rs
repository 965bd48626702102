//! Defines the capabilities that are shared by the controllers.

extern crate nalgebra as na;

use na::Vector3;

/// Defines a feedback controller that computes a control output from the error between the
/// current state and the desired state.
pub trait Controller {
    /// Returns the text that identifies the controller.
    fn description(&self) -> &'static str;

    /// Returns the control output for the given errors.
    ///
    /// ## Parameters
    ///
    /// * 'position_error' - The difference between the current and the desired position.
    /// * 'velocity_error' - The difference between the current and the desired velocity.
    fn output(&self, position_error: &Vector3<f64>, velocity_error: &Vector3<f64>) -> Vector3<f64>;
}

/// Defines a controller for a double-integrator plant, i.e. a plant where the control output
/// drives the acceleration.
pub trait DoubleIntegratorController: Controller {
    /// The description of a double-integrator controller that doesn't provide its own.
    const DESCRIPTION: &'static str = "Abstract Double Integrator Controller";

    /// Returns the gain that acts on the position error.
    fn proportional_gain(&self) -> f64;

    /// Returns the gain that acts on the velocity error.
    fn derivative_gain(&self) -> f64;
}

