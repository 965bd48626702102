extern crate nalgebra as na;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use na::Vector3;

use bounded_motion_control::controllers::bounded_axis::{AxisGains, BoundedAxisController};
use bounded_motion_control::controllers::component_wise::{
    ComponentWiseController, ControllerParameters,
};
use bounded_motion_control::controllers::controller::Controller;
use bounded_motion_control::controllers::saturation::{SaturationProfile, SmoothSaturation};

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets =
        smooth_saturation_evaluate,
        bounded_axis_evaluate,
        component_wise_evaluate,
        component_wise_output,
}

criterion_main!(benches);

pub fn smooth_saturation_evaluate(c: &mut Criterion) {
    c.bench_function("SmoothSaturation::evaluate", |b| {
        b.iter(|| SmoothSaturation.evaluate(black_box(1.5)))
    });
}

pub fn bounded_axis_evaluate(c: &mut Criterion) {
    let gains = AxisGains::new(0.25, 0.5_f64.sqrt(), 1.0, 1.0).unwrap();
    let controller = BoundedAxisController::new(gains);

    c.bench_function("BoundedAxisController::evaluate", |b| {
        b.iter(|| controller.evaluate(black_box(1.0), black_box(-0.5)))
    });
}

pub fn component_wise_evaluate(c: &mut Criterion) {
    let controller = ComponentWiseController::new(&ControllerParameters::default()).unwrap();
    let p = Vector3::new(1.0, -2.0, 0.5);
    let v = Vector3::new(0.3, 0.0, -1.0);

    c.bench_function("ComponentWiseController::evaluate", |b| {
        b.iter(|| controller.evaluate(black_box(&p), black_box(&v)))
    });
}

pub fn component_wise_output(c: &mut Criterion) {
    let controller = ComponentWiseController::new(&ControllerParameters::default()).unwrap();
    let p = Vector3::new(1.0, -2.0, 0.5);
    let v = Vector3::new(0.3, 0.0, -1.0);

    c.bench_function("ComponentWiseController::output", |b| {
        b.iter(|| controller.output(black_box(&p), black_box(&v)))
    });
}
