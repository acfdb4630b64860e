mod support;

use bikegeo::{Geometry, GeometryError, Parameters};
use support::scenario_params;

fn json_without(field: &str) -> String {
    let mut value = serde_json::to_value(Parameters::default()).unwrap();
    value.as_object_mut().unwrap().remove(field);
    value.to_string()
}

#[test]
fn missing_field_is_named() {
    match Parameters::from_json_str(&json_without("S_length")) {
        Err(GeometryError::MalformedParameters(message)) => {
            assert!(message.contains("S_length"), "{message}");
        },
        other => panic!("expected MalformedParameters, got {other:?}"),
    }
}

#[test]
fn mistyped_field_is_malformed() {
    let mut value = serde_json::to_value(Parameters::default()).unwrap();
    value["D_angle"] = serde_json::Value::String("steep".into());
    assert!(matches!(
        Parameters::from_json_str(&value.to_string()),
        Err(GeometryError::MalformedParameters(_))
    ));
}

#[test]
fn loads_from_file() {
    let path = std::env::temp_dir().join(format!("bikegeo-params-{}.json", std::process::id()));
    let params = scenario_params();
    std::fs::write(&path, params.to_json_string().unwrap()).unwrap();
    let loaded = Parameters::from_json_file(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded.unwrap(), params);
}

#[test]
fn missing_file_is_reported() {
    let err = Parameters::from_json_file("/nonexistent/bikegeo.json").unwrap_err();
    assert!(matches!(err, GeometryError::MalformedParameters(_)));
}

#[test]
fn negative_length_fails_before_solving() {
    let params = Parameters {
        h_length: -1.0,
        ..scenario_params()
    };
    assert_eq!(
        Geometry::compute(&params),
        Err(GeometryError::NegativeParameter {
            field: "H_length",
            value: -1.0
        })
    );
}

#[test]
fn infinite_value_fails_before_solving() {
    let params = Parameters {
        r2_size: f64::INFINITY as bikegeo::float_types::Real,
        ..scenario_params()
    };
    assert!(matches!(
        Geometry::compute(&params),
        Err(GeometryError::NonFiniteParameter { field: "R2_size", .. })
    ));
}

fn conflicting_fields(params: &Parameters) -> Vec<&'static str> {
    match Geometry::compute(params) {
        Err(GeometryError::InvalidConfiguration { fields, .. }) => fields,
        other => panic!("expected InvalidConfiguration, got {other:?}"),
    }
}

#[test]
fn chainstay_shorter_than_drop() {
    let params = Parameters {
        s_length: 1.5,
        ..scenario_params()
    };
    assert_eq!(conflicting_fields(&params), vec!["S_length", "B_drop"]);
}

#[test]
fn top_tube_cannot_reach_head_tube() {
    let params = Parameters {
        a_length: 0.5,
        ..scenario_params()
    };
    assert_eq!(conflicting_fields(&params), vec!["A_length", "H_length", "F_length"]);
}

#[test]
fn horizontal_steering_axis_never_meets_the_ground() {
    let params = Parameters {
        d_angle: 90.0,
        ..scenario_params()
    };
    let fields = conflicting_fields(&params);
    assert!(fields.contains(&"D_angle") || fields.contains(&"A_length"), "{fields:?}");
}

#[test]
fn error_message_names_the_fields() {
    let params = Parameters {
        s_length: 1.0,
        ..scenario_params()
    };
    let message = Geometry::compute(&params).unwrap_err().to_string();
    assert!(message.starts_with("(InvalidConfiguration) [S_length, B_drop]"), "{message}");
}
