#![warn(missing_docs)]

//! Reference motion and bounded feedback control for a rigid body.
//!
//! Provides a trajectory abstraction that produces the desired position, velocity, acceleration,
//! jerk and snap of a rigid body in the world frame, and a bounded, component-wise controller for
//! a double-integrator plant that returns the control output together with its partial
//! derivatives and a Lyapunov function certifying the stability of the closed loop.

use thiserror::Error;

/// Defines the controllers for double-integrator plants
pub mod controllers;

/// Provides loading of construction-time parameters
pub mod parameters;

/// Defines the desired trajectories for a rigid body
pub mod trajectory;

/// Defines the different errors for the bounded motion control crate.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Indicates that an operation was called on an implementor that does not provide it.
    #[error("The operation {operation} is not implemented by {implementor}")]
    UnimplementedContract {
        /// The name of the operation that was called.
        operation: &'static str,
        /// The description of the implementor on which the operation was called.
        implementor: String,
    },

    /// Indicates that a construction-time parameter has a value that is not allowed.
    #[error("The parameter {parameter} has an invalid value of {value}")]
    InvalidConfiguration {
        /// The name of the parameter.
        parameter: &'static str,
        /// The value that was provided.
        value: f64,
    },

    /// Indicates that a parameter document could not be read.
    #[error("Cannot read the parameters: {message}")]
    ParameterParse {
        /// The reason why the document could not be read.
        message: String,
    },
}
