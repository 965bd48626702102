//! Loading of the construction-time parameters for trajectories and controllers.
//!
//! Parameters are stored as TOML documents, e.g.
//!
//! ```toml
//! natural_frequency = 0.5
//! damping = 0.7071
//! position_saturation = 1.0
//! velocity_saturation = 1.0
//! ```
//!
//! Loading a document only checks that it has the right shape. The values are validated when
//! the controller or trajectory is created from the parameters.

use log::warn;
use serde::de::DeserializeOwned;

use crate::Error;

#[cfg(test)]
#[path = "parameters_tests.rs"]
mod parameters_tests;

/// Reads a parameter structure from a TOML document.
///
/// ## Parameters
///
/// * 'document' - The TOML text that contains the parameters.
///
/// ## Errors
///
/// * [Error::ParameterParse] - Returned when the document is not valid TOML or doesn't match the
///   layout of the parameter structure.
///
/// ## Example
///
/// ```
/// use bounded_motion_control::controllers::component_wise::ControllerParameters;
/// use bounded_motion_control::parameters::from_toml_str;
///
/// let parameters: ControllerParameters = from_toml_str("position_saturation = 2.0").unwrap();
/// assert_eq!(2.0, parameters.position_saturation);
/// assert_eq!(1.0, parameters.velocity_saturation);
/// ```
pub fn from_toml_str<P>(document: &str) -> Result<P, Error>
where
    P: DeserializeOwned,
{
    toml::from_str(document).map_err(|e| {
        warn!("Failed to read parameter document: {}", e);
        Error::ParameterParse {
            message: e.to_string(),
        }
    })
}
