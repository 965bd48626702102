//! Defines the velocity dependent gain shaping function that scales the position term of the
//! bounded controllers.

#[cfg(test)]
#[path = "gain_tests.rs"]
mod gain_tests;

/// Stores the value of a gain shaping function together with its derivatives and the integrals
/// that appear in the Lyapunov function of the bounded controllers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GainValues {
    /// The value of the gain function `f(x)`.
    pub value: f64,

    /// The first derivative of the gain function.
    pub first_derivative: f64,

    /// The second derivative of the gain function.
    pub second_derivative: f64,

    /// The integral of `x / f(x)` from 0 to x.
    pub velocity_integral: f64,

    /// The integral of `sat(x) * Dsat(x) / f(x)` from 0 to x.
    pub saturation_integral: f64,
}

/// Defines an abstraction over gain shaping functions
pub trait GainProfile {
    /// Evaluates the gain function, its derivatives and its integrals.
    ///
    /// ## Parameters
    ///
    /// * 'x' - The normalized velocity
    fn evaluate(&self, x: f64) -> GainValues;
}

/// A gain shaping function that is one everywhere.
///
/// The integrals are computed for the smooth saturation function
/// [SmoothSaturation](super::saturation::SmoothSaturation).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConstantGain;

impl GainProfile for ConstantGain {
    fn evaluate(&self, x: f64) -> GainValues {
        let square = x * x;

        GainValues {
            value: 1.0,
            first_derivative: 0.0,
            second_derivative: 0.0,
            velocity_integral: 0.5 * square,
            // Equal to sat(x)^2 / 2
            saturation_integral: 0.5 * square / (1.0 + square),
        }
    }
}
