use super::*;
use crate::controllers::saturation::{SaturationProfile, SmoothSaturation};
use float_cmp::{ApproxEq, F64Margin};

#[test]
fn test_constant_gain_value_and_derivatives() {
    for x in [-10.0, -1.0, 0.0, 0.5, 3.0] {
        let values = ConstantGain.evaluate(x);

        assert_eq!(1.0, values.value);
        assert_eq!(0.0, values.first_derivative);
        assert_eq!(0.0, values.second_derivative);
    }
}

#[test]
fn test_constant_gain_integrals_at_zero() {
    let values = ConstantGain.evaluate(0.0);

    assert_eq!(0.0, values.velocity_integral);
    assert_eq!(0.0, values.saturation_integral);
}

#[test]
fn test_constant_gain_integrals_known_values() {
    let values = ConstantGain.evaluate(2.0);

    assert_eq!(2.0, values.velocity_integral);
    assert_eq!(0.4, values.saturation_integral);
}

#[test]
fn test_constant_gain_integrals_match_their_integrands() {
    let h = 1e-5;
    let margin = F64Margin {
        ulps: 2,
        epsilon: 1e-7,
    };

    for i in -20..=20 {
        let x = 0.45 * i as f64;
        let above = ConstantGain.evaluate(x + h);
        let below = ConstantGain.evaluate(x - h);
        let gain = ConstantGain.evaluate(x).value;
        let saturation = SmoothSaturation.evaluate(x);

        let velocity_integrand = (above.velocity_integral - below.velocity_integral) / (2.0 * h);
        let saturation_integrand =
            (above.saturation_integral - below.saturation_integral) / (2.0 * h);

        assert!(velocity_integrand.approx_eq(x / gain, margin));
        assert!(saturation_integrand.approx_eq(
            saturation.value * saturation.first_derivative / gain,
            margin
        ));
    }
}

#[test]
fn test_constant_gain_saturation_integral_is_below_velocity_integral() {
    for i in -20..=20 {
        let values = ConstantGain.evaluate(0.45 * i as f64);
        assert!(values.saturation_integral <= values.velocity_integral);
    }
}
