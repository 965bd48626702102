use super::*;
use crate::controllers::component_wise::ControllerParameters;
use crate::trajectory::TrajectoryParameters;

#[test]
fn test_reading_trajectory_parameters() {
    let parameters: TrajectoryParameters = from_toml_str(
        r#"
        offset = [1.0, -2.0, 3.5]
        rotation = [0.0, 0.0, 90.0]
        "#,
    )
    .unwrap();

    assert_eq!([1.0, -2.0, 3.5], parameters.offset);
    assert_eq!([0.0, 0.0, 90.0], parameters.rotation);
}

#[test]
fn test_reading_empty_document_gives_defaults() {
    let trajectory: TrajectoryParameters = from_toml_str("").unwrap();
    let controller: ControllerParameters = from_toml_str("").unwrap();

    assert_eq!(TrajectoryParameters::default(), trajectory);
    assert_eq!(ControllerParameters::default(), controller);
}

#[test]
fn test_reading_invalid_document_fails() {
    let result: Result<TrajectoryParameters, Error> = from_toml_str("offset = [1.0, 2.0");

    assert!(matches!(result, Err(Error::ParameterParse { .. })));
}

#[test]
fn test_reading_document_with_wrong_type_fails() {
    let result: Result<ControllerParameters, Error> = from_toml_str("damping = \"high\"");

    assert!(matches!(result, Err(Error::ParameterParse { .. })));
}

#[test]
fn test_reading_document_with_wrong_length_fails() {
    let result: Result<TrajectoryParameters, Error> = from_toml_str("offset = [1.0, 2.0]");

    assert!(matches!(result, Err(Error::ParameterParse { .. })));
}
