/// Defines the capabilities shared by all controllers
pub mod controller;

/// Provides the saturation function used to bound the control effort
pub mod saturation;

/// Provides the velocity dependent gain shaping function
pub mod gain;

/// Defines the bounded controller for a single axis of a double-integrator
pub mod bounded_axis;

/// Defines the bounded controller that acts on each spatial axis independently
pub mod component_wise;
