//! Defines the bounded controller for a single axis of a double-integrator plant.
//!
//! For a position error `p` and a velocity error `v` the control law is
//!
//! ```text
//! u = -f(v / σv) * kp * σp * sat(p / σp) - kv * σv * sat(v / σv)
//! ```
//!
//! where `sat` is a [SaturationProfile] and `f` a [GainProfile]. Because both saturated terms are
//! bounded the control output is bounded by `kp * σp * f + kv * σv`, independent of the size of
//! the errors.
//!
//! Besides the control output the controller returns the partial derivatives of the output with
//! respect to the errors, up to second order, and a Lyapunov function `V` together with its time
//! derivative `VD` along the closed-loop flow and its partial derivatives. Outer loop controllers
//! that use this controller as their inner loop use these values to design their own control law.
//! All values are computed in closed form.

use log::{debug, warn};

use super::gain::{ConstantGain, GainProfile};
use super::saturation::{SaturationProfile, SmoothSaturation};
use crate::Error;

#[cfg(test)]
#[path = "bounded_axis_tests.rs"]
mod bounded_axis_tests;

/// Stores the gains and saturation scales of a bounded double-integrator controller.
///
/// All values are strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisGains {
    /// The gain that acts on the position error, `kp`
    proportional_gain: f64,

    /// The gain that acts on the velocity error, `kv`
    derivative_gain: f64,

    /// The scale at which the position term starts to saturate, `σp`
    position_saturation: f64,

    /// The scale at which the velocity term starts to saturate, `σv`
    velocity_saturation: f64,
}

impl AxisGains {
    /// Returns the gain that acts on the velocity error.
    pub fn derivative_gain(&self) -> f64 {
        self.derivative_gain
    }

    /// Creates a new [AxisGains] instance
    ///
    /// ## Parameters
    ///
    /// * 'proportional_gain' - The gain that acts on the position error
    /// * 'derivative_gain' - The gain that acts on the velocity error
    /// * 'position_saturation' - The scale at which the position term saturates
    /// * 'velocity_saturation' - The scale at which the velocity term saturates
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidConfiguration] - Returned when any of the values is not a finite number
    ///   larger than zero.
    pub fn new(
        proportional_gain: f64,
        derivative_gain: f64,
        position_saturation: f64,
        velocity_saturation: f64,
    ) -> Result<Self, Error> {
        check_positive("proportional_gain", proportional_gain)?;
        check_positive("derivative_gain", derivative_gain)?;
        check_positive("position_saturation", position_saturation)?;
        check_positive("velocity_saturation", velocity_saturation)?;

        Ok(Self {
            proportional_gain,
            derivative_gain,
            position_saturation,
            velocity_saturation,
        })
    }

    /// Returns the scale at which the position term saturates.
    pub fn position_saturation(&self) -> f64 {
        self.position_saturation
    }

    /// Returns the gain that acts on the position error.
    pub fn proportional_gain(&self) -> f64 {
        self.proportional_gain
    }

    /// Returns the scale at which the velocity term saturates.
    pub fn velocity_saturation(&self) -> f64 {
        self.velocity_saturation
    }
}

fn check_positive(parameter: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        warn!(
            "Rejected {} = {}, it should be finite and larger than zero",
            parameter, value
        );
        Err(Error::InvalidConfiguration { parameter, value })
    }
}

/// Stores the control output of a single axis, its partial derivatives and the Lyapunov values.
///
/// The subscripts `p` and `v` denote the partial derivative with respect to the position error
/// and the velocity error respectively.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisControlBundle {
    /// The control output.
    pub u: f64,
    /// The derivative of the control output with respect to the position error.
    pub u_p: f64,
    /// The derivative of the control output with respect to the velocity error.
    pub u_v: f64,
    /// The second derivative of the control output with respect to the position error.
    pub u_p_p: f64,
    /// The second derivative of the control output with respect to the velocity error.
    pub u_v_v: f64,
    /// The mixed second derivative of the control output.
    pub u_p_v: f64,
    /// The value of the Lyapunov function.
    pub v: f64,
    /// The time derivative of the Lyapunov function along the closed-loop flow.
    pub v_dot: f64,
    /// The derivative of the Lyapunov function with respect to the position error.
    pub v_p: f64,
    /// The derivative of the Lyapunov function with respect to the velocity error.
    pub v_v: f64,
    /// The mixed second derivative of the Lyapunov function.
    pub v_v_p: f64,
    /// The second derivative of the Lyapunov function with respect to the velocity error.
    pub v_v_v: f64,
}

/// A bounded controller for one axis of a double-integrator plant.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundedAxisController<S = SmoothSaturation, G = ConstantGain> {
    gains: AxisGains,
    saturation: S,
    gain_profile: G,
}

impl BoundedAxisController {
    /// Creates a new [BoundedAxisController] with the smooth saturation function and a constant
    /// gain shaping function.
    ///
    /// ```
    /// use bounded_motion_control::controllers::bounded_axis::{ AxisGains, BoundedAxisController };
    ///
    /// let gains = AxisGains::new(0.25, 0.5_f64.sqrt(), 1.0, 1.0).unwrap();
    /// let controller = BoundedAxisController::new(gains);
    ///
    /// let bundle = controller.evaluate(0.0, 0.0);
    /// assert_eq!(0.0, bundle.u);
    /// assert_eq!(0.0, bundle.v);
    /// ```
    pub fn new(gains: AxisGains) -> Self {
        Self::with_profiles(gains, SmoothSaturation, ConstantGain)
    }
}

impl<S, G> BoundedAxisController<S, G>
where
    S: SaturationProfile,
    G: GainProfile,
{
    /// Evaluates the control law, its partial derivatives and the Lyapunov values.
    ///
    /// ## Parameters
    ///
    /// * 'p' - The position error
    /// * 'v' - The velocity error
    pub fn evaluate(&self, p: f64, v: f64) -> AxisControlBundle {
        let kp = self.gains.proportional_gain;
        let kv = self.gains.derivative_gain;
        let sigma_p = self.gains.position_saturation;
        let sigma_v = self.gains.velocity_saturation;

        let sat_p = self.saturation.evaluate(p / sigma_p);
        let sat_v = self.saturation.evaluate(v / sigma_v);
        let gain = self.gain_profile.evaluate(v / sigma_v);

        // Saturated position term
        let h1 = kp * sigma_p * sat_p.value;
        let h1_p = kp * sat_p.first_derivative;
        let h1_p_p = kp * sat_p.second_derivative / sigma_p;

        // Saturated velocity term
        let h2 = kv * sigma_v * sat_v.value;
        let h2_v = kv * sat_v.first_derivative;
        let h2_v_v = kv * sat_v.second_derivative / sigma_v;

        let f = gain.value;
        let f_v = gain.first_derivative / sigma_v;
        let f_v_v = gain.second_derivative / (sigma_v * sigma_v);

        let u = -f * h1 - h2;
        let u_p = -f * h1_p;
        let u_p_p = -f * h1_p_p;
        let u_v = -f_v * h1 - h2_v;
        let u_v_v = -f_v_v * h1 - h2_v_v;
        let u_p_v = -f_v * h1_p;

        let beta = 1.0 / (2.0 * kp);
        let kv_squared = kv * kv;
        let sigma_v_squared = sigma_v * sigma_v;
        let h1_int = kp * sigma_p * sigma_p * sat_p.primitive;

        let lyapunov = beta * kv_squared * h1_int
            + beta * h1 * h2
            + sigma_v_squared * gain.velocity_integral
            + h1_int
            + beta * kv_squared * sigma_v_squared
                * (gain.velocity_integral - gain.saturation_integral);

        // Shared by VD and the velocity derivatives of V
        let damping_excess = kv_squared * v - h2 * h2_v;

        let lyapunov_dot = -(beta * h2_v * f * h1 * h1
            + v * h2 * (1.0 / f - beta * h1_p)
            + beta / f * h2 * damping_excess);

        let v_p = beta * kv_squared * h1 + beta * h2 * h1_p + h1;
        let v_v = beta * h1 * h2_v + v / f + beta / f * damping_excess;
        let v_v_p = beta * h1_p * h2_v;
        let v_v_v = beta * h1 * h2_v_v + 1.0 / f - v / (f * f) * f_v
            - beta / (f * f) * f_v * damping_excess
            + beta / f * (kv_squared - h2_v * h2_v - h2 * h2_v_v);

        AxisControlBundle {
            u,
            u_p,
            u_v,
            u_p_p,
            u_v_v,
            u_p_v,
            v: lyapunov,
            v_dot: lyapunov_dot,
            v_p,
            v_v,
            v_v_p,
            v_v_v,
        }
    }

    /// Returns the gains and saturation scales.
    pub fn gains(&self) -> &AxisGains {
        &self.gains
    }

    /// Returns the bound on the magnitude of the control output for a gain shaping value of `f`.
    ///
    /// The magnitude of the control output is never larger than `kp * σp * f + kv * σv`. The bound
    /// is approached as both errors grow with the same sign.
    pub fn output_bound(&self, f: f64) -> f64 {
        self.gains.proportional_gain * self.gains.position_saturation * f.abs()
            + self.gains.derivative_gain * self.gains.velocity_saturation
    }

    /// Creates a new [BoundedAxisController] with the given saturation and gain shaping functions.
    ///
    /// ## Parameters
    ///
    /// * 'gains' - The gains and saturation scales
    /// * 'saturation' - The saturation function used for both the position and velocity terms
    /// * 'gain_profile' - The velocity dependent gain shaping function
    pub fn with_profiles(gains: AxisGains, saturation: S, gain_profile: G) -> Self {
        debug!(
            "Created bounded axis controller with kp = {}, kv = {}, sigma_p = {}, sigma_v = {}",
            gains.proportional_gain,
            gains.derivative_gain,
            gains.position_saturation,
            gains.velocity_saturation
        );

        Self {
            gains,
            saturation,
            gain_profile,
        }
    }
}
