//! Defines the bounded double-integrator controller that treats each spatial axis independently.
//!
//! The controller applies a [BoundedAxisController] to each of the X, Y and Z axes. Because
//! the axes are decoupled all the derivative matrices and tensors are diagonal in the axis
//! index, and the Lyapunov function of the full controller is the sum of the Lyapunov functions
//! of the axes.

extern crate nalgebra as na;

use log::{debug, trace};
use na::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use super::bounded_axis::{AxisControlBundle, AxisGains, BoundedAxisController};
use super::controller::{Controller, DoubleIntegratorController};
use crate::Error;

#[cfg(test)]
#[path = "component_wise_tests.rs"]
mod component_wise_tests;

/// A rank 3 tensor where `tensor[i][(j, k)]` is the element with indices `i`, `j` and `k`.
pub type Tensor3 = [Matrix3<f64>; 3];

/// The construction-time parameters for a [ComponentWiseController].
///
/// When either of the explicit gains is missing the gains are derived from the natural frequency
/// `ωn` and the damping `ζ` as `kp = ωn^2` and `kv = 2 ζ ωn`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ControllerParameters {
    /// The natural frequency of the linearized closed loop.
    pub natural_frequency: f64,

    /// The damping ratio of the linearized closed loop.
    pub damping: f64,

    /// The gain that acts on the position error.
    pub proportional_gain: Option<f64>,

    /// The gain that acts on the velocity error.
    pub derivative_gain: Option<f64>,

    /// The scale at which the position term saturates.
    pub position_saturation: f64,

    /// The scale at which the velocity term saturates.
    pub velocity_saturation: f64,
}

impl ControllerParameters {
    /// Returns the validated gains described by the parameters.
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidConfiguration] - Returned when any of the resulting gains or saturation
    ///   scales is not a finite number larger than zero.
    pub fn gains(&self) -> Result<AxisGains, Error> {
        let (kp, kv) = match (self.proportional_gain, self.derivative_gain) {
            (Some(kp), Some(kv)) => (kp, kv),
            _ => (
                self.natural_frequency * self.natural_frequency,
                2.0 * self.damping * self.natural_frequency,
            ),
        };

        AxisGains::new(kp, kv, self.position_saturation, self.velocity_saturation)
    }
}

impl Default for ControllerParameters {
    fn default() -> Self {
        Self {
            natural_frequency: 0.5,
            damping: std::f64::consts::FRAC_1_SQRT_2,
            proportional_gain: None,
            derivative_gain: None,
            position_saturation: 1.0,
            velocity_saturation: 1.0,
        }
    }
}

/// Stores the control output of the three axes, its partial derivatives and the Lyapunov values.
///
/// Matrices and tensors are indexed first by the axis of the output, then by the axis of the
/// error. Only the diagonal elements can be non-zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComponentWiseBundle {
    /// The control output.
    pub u: Vector3<f64>,
    /// The derivative of the control output with respect to the position error.
    pub u_p: Matrix3<f64>,
    /// The derivative of the control output with respect to the velocity error.
    pub u_v: Matrix3<f64>,
    /// The second derivative of the control output with respect to the position error.
    pub u_p_p: Tensor3,
    /// The second derivative of the control output with respect to the velocity error.
    pub u_v_v: Tensor3,
    /// The mixed second derivative of the control output.
    pub u_p_v: Tensor3,
    /// The value of the Lyapunov function, summed over the axes.
    pub v: f64,
    /// The time derivative of the Lyapunov function, summed over the axes.
    pub v_dot: f64,
    /// The derivative of the Lyapunov function with respect to the position error.
    pub v_p: Vector3<f64>,
    /// The derivative of the Lyapunov function with respect to the velocity error.
    pub v_v: Vector3<f64>,
    /// The mixed second derivative of the Lyapunov function.
    pub v_v_p: Matrix3<f64>,
    /// The second derivative of the Lyapunov function with respect to the velocity error.
    pub v_v_v: Matrix3<f64>,
}

impl ComponentWiseBundle {
    fn zeros() -> Self {
        Self {
            u: Vector3::zeros(),
            u_p: Matrix3::zeros(),
            u_v: Matrix3::zeros(),
            u_p_p: [Matrix3::zeros(); 3],
            u_v_v: [Matrix3::zeros(); 3],
            u_p_v: [Matrix3::zeros(); 3],
            v: 0.0,
            v_dot: 0.0,
            v_p: Vector3::zeros(),
            v_v: Vector3::zeros(),
            v_v_p: Matrix3::zeros(),
            v_v_v: Matrix3::zeros(),
        }
    }

    fn insert_axis(&mut self, i: usize, axis: &AxisControlBundle) {
        self.u[i] = axis.u;
        self.u_p[(i, i)] = axis.u_p;
        self.u_v[(i, i)] = axis.u_v;
        self.u_p_p[i][(i, i)] = axis.u_p_p;
        self.u_v_v[i][(i, i)] = axis.u_v_v;
        self.u_p_v[i][(i, i)] = axis.u_p_v;
        self.v += axis.v;
        self.v_dot += axis.v_dot;
        self.v_p[i] = axis.v_p;
        self.v_v[i] = axis.v_v;
        self.v_v_p[(i, i)] = axis.v_v_p;
        self.v_v_v[(i, i)] = axis.v_v_v;
    }
}

/// A bounded double-integrator controller that controls the X, Y and Z axes independently with
/// the same gains.
///
/// ```
/// extern crate nalgebra as na;
/// use na::Vector3;
/// use bounded_motion_control::controllers::component_wise::{
///     ComponentWiseController, ControllerParameters,
/// };
/// use bounded_motion_control::controllers::controller::Controller;
///
/// let controller = ComponentWiseController::new(&ControllerParameters::default()).unwrap();
/// let u = controller.output(&Vector3::new(1.0, 0.0, 0.0), &Vector3::zeros());
///
/// assert!(u.x < 0.0);
/// assert_eq!(0.0, u.y);
/// assert_eq!(0.0, u.z);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentWiseController {
    axis: BoundedAxisController,
}

impl ComponentWiseController {
    /// Returns the controller that is applied to each axis.
    pub fn axis_controller(&self) -> &BoundedAxisController {
        &self.axis
    }

    /// Evaluates the control law, its partial derivatives and the Lyapunov values for all axes.
    ///
    /// ## Parameters
    ///
    /// * 'position_error' - The difference between the current and the desired position.
    /// * 'velocity_error' - The difference between the current and the desired velocity.
    pub fn evaluate(
        &self,
        position_error: &Vector3<f64>,
        velocity_error: &Vector3<f64>,
    ) -> ComponentWiseBundle {
        let mut bundle = ComponentWiseBundle::zeros();
        for i in 0..3 {
            let axis = self.axis.evaluate(position_error[i], velocity_error[i]);
            bundle.insert_axis(i, &axis);
        }

        trace!(
            "Control output {:?} with V = {} and VD = {}",
            bundle.u.as_slice(),
            bundle.v,
            bundle.v_dot
        );
        bundle
    }

    /// Creates a new [ComponentWiseController] with the given gains for all axes.
    pub fn from_gains(gains: AxisGains) -> Self {
        log_gains(&gains);
        Self {
            axis: BoundedAxisController::new(gains),
        }
    }

    /// Creates a new [ComponentWiseController] instance
    ///
    /// ## Parameters
    ///
    /// * 'parameters' - The gains and saturation scales of the controller
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidConfiguration] - Returned when any of the gains or saturation scales is not
    ///   a finite number larger than zero.
    pub fn new(parameters: &ControllerParameters) -> Result<Self, Error> {
        Ok(Self::from_gains(parameters.gains()?))
    }
}

#[cfg_attr(test, mutants::skip)] // Only produces log output
fn log_gains(gains: &AxisGains) {
    debug!(
        "Created component-wise controller with kp = {}, kv = {}, sigma_p = {}, sigma_v = {}",
        gains.proportional_gain(),
        gains.derivative_gain(),
        gains.position_saturation(),
        gains.velocity_saturation()
    );
}

impl Controller for ComponentWiseController {
    fn description(&self) -> &'static str {
        "Double-integrator bounded and component-wise controller"
    }

    fn output(&self, position_error: &Vector3<f64>, velocity_error: &Vector3<f64>) -> Vector3<f64> {
        self.evaluate(position_error, velocity_error).u
    }
}

impl DoubleIntegratorController for ComponentWiseController {
    fn derivative_gain(&self) -> f64 {
        self.axis.gains().derivative_gain()
    }

    fn proportional_gain(&self) -> f64 {
        self.axis.gains().proportional_gain()
    }
}
