//! Defines the desired trajectory for a rigid body in 3D space.
//!
//! A trajectory consists of two parts. A [TrajectoryGenerator] which describes the shape of the
//! motion, i.e. the position, velocity, acceleration, jerk and snap of the body at a given time,
//! expressed in the frame of the path. And a [RotationOffsetTransform] which places the path in
//! the world frame by rotating it and then moving it by a fixed offset.
//!
//! The [Trajectory] type combines the two and provides the world frame motion through
//! [Trajectory::output()]. Trajectory shapes are either one of the built-in shapes created through
//! [to_trajectory_generator()], or a user provided implementation of [TrajectoryGenerator].

extern crate nalgebra as na;

use log::{debug, trace, warn};
use na::{Rotation3, SVector, Vector3};
use serde::{Deserialize, Serialize};

use crate::Error;

#[cfg(test)]
#[path = "trajectory_tests.rs"]
mod trajectory_tests;

/// The concatenated world frame motion: position, velocity, acceleration, jerk and snap, in that
/// order, each taking 3 elements.
pub type TrajectoryOutput = SVector<f64, 15>;

/// Stores the successive time derivatives of a path at a single point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionTuple {
    /// The position.
    pub position: Vector3<f64>,

    /// The velocity, i.e. the first time derivative of the position.
    pub velocity: Vector3<f64>,

    /// The acceleration, i.e. the second time derivative of the position.
    pub acceleration: Vector3<f64>,

    /// The jerk, i.e. the third time derivative of the position.
    pub jerk: Vector3<f64>,

    /// The snap, i.e. the fourth time derivative of the position.
    pub snap: Vector3<f64>,
}

impl MotionTuple {
    /// Creates a new [MotionTuple] instance
    ///
    /// ## Parameters
    ///
    /// * 'position' - The position
    /// * 'velocity' - The velocity
    /// * 'acceleration' - The acceleration
    /// * 'jerk' - The jerk
    /// * 'snap' - The snap
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        acceleration: Vector3<f64>,
        jerk: Vector3<f64>,
        snap: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            acceleration,
            jerk,
            snap,
        }
    }

    /// Creates a [MotionTuple] for a body that is at rest at the given position.
    pub fn at_rest(position: Vector3<f64>) -> Self {
        Self::new(
            position,
            Vector3::zeros(),
            Vector3::zeros(),
            Vector3::zeros(),
            Vector3::zeros(),
        )
    }

    /// Returns the motion as a single vector, ordered from position to snap.
    pub fn to_vector(&self) -> TrajectoryOutput {
        let mut result = TrajectoryOutput::zeros();
        for (index, derivative) in [
            &self.position,
            &self.velocity,
            &self.acceleration,
            &self.jerk,
            &self.snap,
        ]
        .iter()
        .enumerate()
        {
            result
                .fixed_rows_mut::<3>(3 * index)
                .copy_from(*derivative);
        }

        result
    }
}

/// The construction-time parameters for a [Trajectory].
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TrajectoryParameters {
    /// The translation of the path in the world frame.
    pub offset: [f64; 3],

    /// The roll, pitch and yaw angles, in degrees, of the path relative to the world frame.
    pub rotation: [f64; 3],
}

/// Places a motion, expressed in the frame of the path, in the world frame.
///
/// The position is rotated and then offset. All the higher derivatives are only rotated because
/// the offset is constant in time.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationOffsetTransform {
    /// The translation of the path in the world frame.
    offset: Vector3<f64>,

    /// The roll, pitch and yaw angles in degrees.
    rotation: Vector3<f64>,

    /// The rotation from the path frame to the world frame. Computed once from the Euler angles
    rotation_matrix: Rotation3<f64>,
}

impl RotationOffsetTransform {
    /// Creates a new [RotationOffsetTransform] instance
    ///
    /// The rotation is applied in the order roll (around X), pitch (around Y) and then yaw
    /// (around Z), i.e. `R = Rz(yaw) * Ry(pitch) * Rx(roll)`.
    ///
    /// ## Parameters
    ///
    /// * 'offset' - The translation of the path in the world frame
    /// * 'rotation_in_degrees' - The roll, pitch and yaw angles of the path in degrees
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidConfiguration] - Returned when any of the offset or rotation components
    ///   is not a finite number.
    pub fn new(offset: Vector3<f64>, rotation_in_degrees: Vector3<f64>) -> Result<Self, Error> {
        check_finite("offset", &offset)?;
        check_finite("rotation", &rotation_in_degrees)?;

        let rotation_matrix = Rotation3::from_euler_angles(
            rotation_in_degrees.x.to_radians(),
            rotation_in_degrees.y.to_radians(),
            rotation_in_degrees.z.to_radians(),
        );

        debug!(
            "Created rotation offset transform with offset {:?} and rotation {:?} degrees",
            offset.as_slice(),
            rotation_in_degrees.as_slice()
        );

        Ok(Self {
            offset,
            rotation: rotation_in_degrees,
            rotation_matrix,
        })
    }

    /// Creates a new [RotationOffsetTransform] from the given parameters.
    pub fn from_parameters(parameters: &TrajectoryParameters) -> Result<Self, Error> {
        Self::new(
            Vector3::from(parameters.offset),
            Vector3::from(parameters.rotation),
        )
    }

    /// Returns the transform that doesn't move or rotate the motion.
    pub fn identity() -> Self {
        Self {
            offset: Vector3::zeros(),
            rotation: Vector3::zeros(),
            rotation_matrix: Rotation3::identity(),
        }
    }

    /// Transforms the motion from the path frame to the world frame.
    pub fn apply(&self, motion: &MotionTuple) -> MotionTuple {
        let rot = &self.rotation_matrix;
        MotionTuple {
            position: rot * motion.position + self.offset,
            velocity: rot * motion.velocity,
            acceleration: rot * motion.acceleration,
            jerk: rot * motion.jerk,
            snap: rot * motion.snap,
        }
    }

    /// Transforms the motion from the world frame back to the path frame.
    pub fn inverse_apply(&self, motion: &MotionTuple) -> MotionTuple {
        let rot = self.rotation_matrix.inverse();
        MotionTuple {
            position: rot * (motion.position - self.offset),
            velocity: rot * motion.velocity,
            acceleration: rot * motion.acceleration,
            jerk: rot * motion.jerk,
            snap: rot * motion.snap,
        }
    }

    /// Returns a copy of the offset.
    pub fn offset(&self) -> Vector3<f64> {
        self.offset
    }

    /// Returns a copy of the roll, pitch and yaw angles in degrees.
    pub fn rotation(&self) -> Vector3<f64> {
        self.rotation
    }

    /// Returns the rotation from the path frame to the world frame.
    pub fn rotation_matrix(&self) -> &Rotation3<f64> {
        &self.rotation_matrix
    }
}

impl Default for RotationOffsetTransform {
    fn default() -> Self {
        Self::identity()
    }
}

fn check_finite(parameter: &'static str, values: &Vector3<f64>) -> Result<(), Error> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(value) => {
            warn!("Rejected {} with non-finite component {}", parameter, value);
            Err(Error::InvalidConfiguration {
                parameter,
                value: *value,
            })
        }
        None => Ok(()),
    }
}

/// Defines the capability of producing the shape of a desired motion.
///
/// Implementors describe the motion in the frame of the path. Placing the motion in the world
/// frame is done by the [Trajectory].
pub trait TrajectoryGenerator {
    /// Returns the text that identifies the shape of the trajectory.
    fn description(&self) -> &'static str;

    /// Returns the names of the configuration parameters for the shape of the trajectory.
    fn parameter_names(&self) -> &'static [&'static str];

    /// Returns the motion at the given time, in the frame of the path.
    ///
    /// ## Parameters
    ///
    /// * 'time' - The time in seconds.
    ///
    /// ## Errors
    ///
    /// * [Error::UnimplementedContract] - Returned when the implementor doesn't provide a motion.
    fn desired_trajectory(&self, _time: f64) -> Result<MotionTuple, Error> {
        Err(Error::UnimplementedContract {
            operation: "desired_trajectory",
            implementor: self.description().to_string(),
        })
    }
}

impl<T> TrajectoryGenerator for Box<T>
where
    T: TrajectoryGenerator + ?Sized,
{
    fn description(&self) -> &'static str {
        (**self).description()
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        (**self).parameter_names()
    }

    fn desired_trajectory(&self, time: f64) -> Result<MotionTuple, Error> {
        (**self).desired_trajectory(time)
    }
}

/// Defines the built-in trajectory shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrajectoryType {
    /// The body stays at a single point.
    Stationary {
        /// The position of the point
        position: Vector3<f64>,
    },

    /// The body moves along a straight line with a constant velocity.
    ConstantVelocity {
        /// The position at time zero
        start: Vector3<f64>,
        /// The velocity along the line
        velocity: Vector3<f64>,
    },
}

/// A trajectory where the body stays at a single point.
#[derive(Debug)]
pub(crate) struct StationaryTrajectory {
    position: Vector3<f64>,
}

impl StationaryTrajectory {
    pub fn new(position: Vector3<f64>) -> StationaryTrajectory {
        StationaryTrajectory { position }
    }
}

impl TrajectoryGenerator for StationaryTrajectory {
    fn description(&self) -> &'static str {
        "Stationary point"
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        &["position"]
    }

    fn desired_trajectory(&self, _time: f64) -> Result<MotionTuple, Error> {
        Ok(MotionTuple::at_rest(self.position))
    }
}

/// A trajectory where the body moves along a straight line with constant velocity.
#[derive(Debug)]
pub(crate) struct ConstantVelocityTrajectory {
    start: Vector3<f64>,
    velocity: Vector3<f64>,
}

impl ConstantVelocityTrajectory {
    pub fn new(start: Vector3<f64>, velocity: Vector3<f64>) -> ConstantVelocityTrajectory {
        ConstantVelocityTrajectory { start, velocity }
    }
}

impl TrajectoryGenerator for ConstantVelocityTrajectory {
    fn description(&self) -> &'static str {
        "Straight line with constant velocity"
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        &["start", "velocity"]
    }

    fn desired_trajectory(&self, time: f64) -> Result<MotionTuple, Error> {
        Ok(MotionTuple::new(
            self.start + self.velocity * time,
            self.velocity,
            Vector3::zeros(),
            Vector3::zeros(),
            Vector3::zeros(),
        ))
    }
}

/// Returns a [TrajectoryGenerator] instance for the given trajectory type.
///
/// ```
/// extern crate nalgebra as na;
/// use na::Vector3;
/// use bounded_motion_control::trajectory::{
///     to_trajectory_generator, TrajectoryGenerator, TrajectoryType,
/// };
///
/// let generator = to_trajectory_generator(TrajectoryType::ConstantVelocity {
///     start: Vector3::new(1.0, 0.0, 0.0),
///     velocity: Vector3::new(0.0, 2.0, 0.0),
/// });
///
/// let motion = generator.desired_trajectory(0.5).unwrap();
/// assert_eq!(Vector3::new(1.0, 1.0, 0.0), motion.position);
/// assert_eq!(Vector3::new(0.0, 2.0, 0.0), motion.velocity);
/// ```
pub fn to_trajectory_generator(
    trajectory_type: TrajectoryType,
) -> Box<dyn TrajectoryGenerator + Send + Sync> {
    match trajectory_type {
        TrajectoryType::Stationary { position } => Box::new(StationaryTrajectory::new(position)),
        TrajectoryType::ConstantVelocity { start, velocity } => {
            Box::new(ConstantVelocityTrajectory::new(start, velocity))
        }
    }
}

/// Defines a desired trajectory for a rigid body in the world frame.
#[derive(Debug)]
pub struct Trajectory<G> {
    /// The shape of the motion.
    generator: G,

    /// The transform that places the shape in the world frame.
    transform: RotationOffsetTransform,
}

impl<G> Trajectory<G>
where
    G: TrajectoryGenerator,
{
    /// Creates a new [Trajectory] instance
    ///
    /// ## Parameters
    ///
    /// * 'generator' - The shape of the motion
    /// * 'parameters' - The offset and rotation that place the shape in the world frame
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidConfiguration] - Returned when the offset or rotation contains a
    ///   component that is not a finite number.
    pub fn new(generator: G, parameters: &TrajectoryParameters) -> Result<Self, Error> {
        let transform = RotationOffsetTransform::from_parameters(parameters)?;
        debug!("Created trajectory: {}", generator.description());
        Ok(Self {
            generator,
            transform,
        })
    }

    /// Returns the text that identifies the shape of the trajectory.
    pub fn description(&self) -> &'static str {
        self.generator.description()
    }

    /// Returns the motion at the given time in the frame of the path, i.e. without the offset
    /// and rotation applied.
    pub fn desired_trajectory(&self, time: f64) -> Result<MotionTuple, Error> {
        self.generator.desired_trajectory(time)
    }

    /// Returns a reference to the shape of the motion.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Returns a copy of the offset of the path in the world frame.
    pub fn offset(&self) -> Vector3<f64> {
        self.transform.offset()
    }

    /// Returns the world frame position, velocity, acceleration, jerk and snap at the given time,
    /// concatenated into a single vector.
    ///
    /// ## Parameters
    ///
    /// * 'time' - The time in seconds.
    ///
    /// ## Errors
    ///
    /// * [Error::UnimplementedContract] - Returned when the generator doesn't provide a motion.
    pub fn output(&self, time: f64) -> Result<TrajectoryOutput, Error> {
        Ok(self.world_motion(time)?.to_vector())
    }

    /// Returns the names of the configuration parameters for the shape of the trajectory.
    pub fn parameter_names(&self) -> &'static [&'static str] {
        self.generator.parameter_names()
    }

    /// Returns a copy of the roll, pitch and yaw angles of the path in degrees.
    pub fn rotation(&self) -> Vector3<f64> {
        self.transform.rotation()
    }

    /// Returns the transform that places the path in the world frame.
    pub fn transform(&self) -> &RotationOffsetTransform {
        &self.transform
    }

    /// Returns the world frame motion at the given time.
    pub fn world_motion(&self, time: f64) -> Result<MotionTuple, Error> {
        let motion = self.generator.desired_trajectory(time)?;
        trace!("Desired motion at t = {}: {:?}", time, motion);
        Ok(self.transform.apply(&motion))
    }
}
