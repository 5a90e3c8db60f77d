//! JSON encoding of serialized objects, checked with a standard JSON reader

use super::*;
use serde_json::json;

fn parse(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap()
}

#[test]
fn test_mapping_with_number_and_bools() {
    let mut map = Mapping::new();
    map.insert("a".to_string(), Value::from(1i32));
    map.insert(
        "b".to_string(),
        Value::Sequence(vec![Value::Bool(true), Value::Bool(false)]),
    );

    let bytes = to_json(&Value::Mapping(map)).unwrap();
    assert_eq!(parse(&bytes), json!({"a": 1, "b": [true, false]}));
}

#[test]
fn test_request_body() {
    init_tracing();
    let mapping = serialize(&sample_request()).unwrap();
    let bytes = to_json(&Value::Mapping(mapping)).unwrap();

    assert_eq!(
        parse(&bytes),
        json!({
            "DryRun": false,
            "Filter": [
                {"Name": "instance-state-name", "Value": ["running", "pending"]},
                {"Name": "tag:env", "Value": ["prod"]}
            ],
            "InstanceId": ["i-1", "i-2"],
            "MaxResults": 25,
            "Owner": {"Key": "owner", "Value": "ops \"core\""},
            "Tags": {
                "cost": {"Key": "cost"},
                "team": {"Key": "team", "Value": "infra"}
            },
            "UserData": "IyEvYmluL3NoCmVjaG8gaGk="
        })
    );
}

#[test]
fn test_control_characters_escaped() {
    let value = Value::from("line\nbreak\u{7}bell\\");
    let bytes = to_json(&value).unwrap();
    assert!(!bytes.contains(&b'\n'));
    assert_eq!(parse(&bytes), json!("line\nbreak\u{7}bell\\"));
}

#[test]
fn test_non_finite_policy() {
    let mut map = Mapping::new();
    map.insert("ratio".to_string(), Value::from(f64::INFINITY));
    let value = Value::Mapping(map);

    let err = to_json(&value).unwrap_err();
    assert_eq!(err.field(), Some("ratio"));

    let bytes = shapewire::to_json_with(&value, &shapewire::JsonOptions::lenient()).unwrap();
    assert_eq!(parse(&bytes), json!({"ratio": null}));
}
