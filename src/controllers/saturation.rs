//! Defines the saturation function that bounds the position and velocity terms of the bounded
//! controllers.
//!
//! The argument of the saturation function is expected to be normalized, i.e. divided by the
//! saturation scale of the channel, before the function is evaluated.

#[cfg(test)]
#[path = "saturation_tests.rs"]
mod saturation_tests;

/// Stores the value of a saturation function together with its derivatives and primitive at a
/// single point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SaturationValues {
    /// The value of the saturation function.
    pub value: f64,

    /// The first derivative of the saturation function.
    pub first_derivative: f64,

    /// The second derivative of the saturation function.
    pub second_derivative: f64,

    /// The primitive of the saturation function, which is zero at zero.
    pub primitive: f64,
}

/// Defines an abstraction over saturation functions
pub trait SaturationProfile {
    /// Evaluates the saturation function, its first and second derivatives and its primitive.
    ///
    /// ## Parameters
    ///
    /// * 'x' - The normalized argument
    fn evaluate(&self, x: f64) -> SaturationValues;
}

/// The smooth saturation function `sat(x) = x / sqrt(1 + x^2)`.
///
/// The function is odd, strictly increasing and bounded by -1 and 1. It is defined for all real
/// numbers.
///
/// ```
/// use bounded_motion_control::controllers::saturation::{ SaturationProfile, SmoothSaturation };
///
/// let values = SmoothSaturation.evaluate(0.0);
/// assert_eq!(0.0, values.value);
/// assert_eq!(1.0, values.first_derivative);
/// assert_eq!(0.0, values.primitive);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SmoothSaturation;

impl SaturationProfile for SmoothSaturation {
    fn evaluate(&self, x: f64) -> SaturationValues {
        let one_plus_square = 1.0 + x * x;
        let root = one_plus_square.sqrt();

        SaturationValues {
            value: x / root,
            first_derivative: one_plus_square.powf(-1.5),
            second_derivative: -3.0 * x * one_plus_square.powf(-2.5),
            primitive: root - 1.0,
        }
    }
}
