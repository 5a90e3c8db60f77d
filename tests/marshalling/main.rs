//! Marshalling integration tests
//!
//! Exercises the full pipeline on a query-protocol style request shape:
//! typed object -> Mapping -> flat query pairs / JSON, and back.

use std::collections::BTreeMap;

use shapewire::prelude::*;

mod json;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .try_init();
}

// ============================================================================
// Shapes
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    pub key: String,
    pub value: Option<String>,
}

impl HintProvider for Tag {
    const HINTS: &'static [FieldHint] = &[
        FieldHint::new("key").wire_name("Key").required(),
        FieldHint::new("value").wire_name("Value"),
    ];
}

impl Serializable for Tag {
    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![
            ("key", Field::leaf(&self.key)),
            ("value", Field::leaf(&self.value)),
        ]
    }
}

impl Initializable for Tag {
    const RULES: &'static [FieldRule<Self>] = &[
        FieldRule::new("key", |t: &mut Tag, v: &Value| {
            t.key = coerce(v)?;
            Ok(())
        }),
        FieldRule::new("value", |t: &mut Tag, v: &Value| {
            t.value = coerce(v)?;
            Ok(())
        }),
    ];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub name: String,
    pub values: Vec<String>,
}

impl HintProvider for Filter {
    const HINTS: &'static [FieldHint] = &[
        FieldHint::new("name").wire_name("Name").required(),
        FieldHint::new("values").wire_name("Value"),
    ];
}

impl Serializable for Filter {
    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![
            ("name", Field::leaf(&self.name)),
            ("values", Field::leaf(&self.values)),
        ]
    }
}

impl Initializable for Filter {
    const RULES: &'static [FieldRule<Self>] = &[
        FieldRule::new("name", |f: &mut Filter, v: &Value| {
            f.name = coerce(v)?;
            Ok(())
        }),
        FieldRule::new("values", |f: &mut Filter, v: &Value| {
            f.values = coerce(v)?;
            Ok(())
        }),
    ];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeInstances {
    pub filters: Vec<Filter>,
    pub instance_ids: Vec<String>,
    pub max_results: Option<i32>,
    pub dry_run: Option<bool>,
    pub next_token: Option<String>,
    pub user_data: Option<Blob>,
    pub tags: BTreeMap<String, Tag>,
    pub owner: Option<Tag>,
    pub client_token: String,
}

impl HintProvider for DescribeInstances {
    const HINTS: &'static [FieldHint] = &[
        FieldHint::new("filters")
            .wire_name("Filter")
            .location(Location::Query),
        FieldHint::new("instance_ids")
            .wire_name("InstanceId")
            .location(Location::Query),
        FieldHint::new("max_results")
            .wire_name("MaxResults")
            .location(Location::Query),
        FieldHint::new("dry_run").wire_name("DryRun"),
        FieldHint::new("next_token").wire_name("NextToken"),
        FieldHint::new("user_data")
            .wire_name("UserData")
            .location(Location::Body),
        FieldHint::new("tags").wire_name("Tags"),
        FieldHint::new("owner").wire_name("Owner"),
    ];
}

impl Serializable for DescribeInstances {
    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![
            ("filters", Field::list(&self.filters)),
            ("instance_ids", Field::leaf(&self.instance_ids)),
            ("max_results", Field::leaf(&self.max_results)),
            ("dry_run", Field::leaf(&self.dry_run)),
            ("next_token", Field::leaf(&self.next_token)),
            ("user_data", Field::leaf(&self.user_data)),
            ("tags", Field::keyed(&self.tags)),
            ("owner", self.owner.as_ref().map(Field::object).into()),
            ("client_token", Field::leaf(&self.client_token)),
        ]
    }
}

impl Initializable for DescribeInstances {
    const RULES: &'static [FieldRule<Self>] = &[
        FieldRule::new("filters", |r: &mut DescribeInstances, v: &Value| {
            r.filters = nested_list(v)?;
            Ok(())
        }),
        FieldRule::new("instance_ids", |r: &mut DescribeInstances, v: &Value| {
            r.instance_ids = coerce(v)?;
            Ok(())
        }),
        FieldRule::new("max_results", |r: &mut DescribeInstances, v: &Value| {
            r.max_results = coerce(v)?;
            Ok(())
        }),
        FieldRule::new("dry_run", |r: &mut DescribeInstances, v: &Value| {
            r.dry_run = coerce(v)?;
            Ok(())
        }),
        FieldRule::new("next_token", |r: &mut DescribeInstances, v: &Value| {
            r.next_token = coerce(v)?;
            Ok(())
        }),
        FieldRule::new("user_data", |r: &mut DescribeInstances, v: &Value| {
            r.user_data = coerce(v)?;
            Ok(())
        }),
        FieldRule::new("tags", |r: &mut DescribeInstances, v: &Value| {
            r.tags = nested_map(v)?;
            Ok(())
        }),
        FieldRule::new("owner", |r: &mut DescribeInstances, v: &Value| {
            r.owner = Some(nested(v)?);
            Ok(())
        }),
    ];
}

pub fn tag(key: &str, value: Option<&str>) -> Tag {
    Tag {
        key: key.to_string(),
        value: value.map(str::to_string),
    }
}

pub fn sample_request() -> DescribeInstances {
    let mut tags = BTreeMap::new();
    tags.insert("team".to_string(), tag("team", Some("infra")));
    tags.insert("cost".to_string(), tag("cost", None));

    DescribeInstances {
        filters: vec![
            Filter {
                name: "instance-state-name".to_string(),
                values: vec!["running".to_string(), "pending".to_string()],
            },
            Filter {
                name: "tag:env".to_string(),
                values: vec!["prod".to_string()],
            },
        ],
        instance_ids: vec!["i-1".to_string(), "i-2".to_string()],
        max_results: Some(25),
        dry_run: Some(false),
        next_token: None,
        user_data: Some(Blob(b"#!/bin/sh\necho hi".to_vec())),
        tags,
        owner: Some(tag("owner", Some("ops \"core\""))),
        client_token: String::new(),
    }
}

// ============================================================================
// Serialization
// ============================================================================

mod serialization {
    use super::*;

    #[test]
    fn test_wire_names_and_shapes() {
        init_tracing();
        let mapping = serialize(&sample_request()).unwrap();

        let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "DryRun",
                "Filter",
                "InstanceId",
                "MaxResults",
                "Owner",
                "Tags",
                "UserData"
            ]
        );
        assert_eq!(mapping["MaxResults"], Value::Number(Number::I64(25)));
        assert_eq!(
            mapping["UserData"],
            Value::Bytes(b"#!/bin/sh\necho hi".to_vec())
        );
    }

    #[test]
    fn test_absent_optional_never_a_key() {
        let mapping = serialize(&sample_request()).unwrap();
        assert!(!mapping.contains_key("NextToken"));

        let cost = mapping["Tags"].as_mapping().unwrap()["cost"]
            .as_mapping()
            .unwrap();
        assert!(!cost.contains_key("Value"));
    }

    #[test]
    fn test_unhinted_field_excluded() {
        let mut request = sample_request();
        request.client_token = "token-123".to_string();
        let mapping = serialize(&request).unwrap();
        assert!(mapping
            .values()
            .all(|v| v != &Value::from("token-123")));
    }

    #[test]
    fn test_location_routing() {
        let hints = shapewire::hints_for::<DescribeInstances>();
        let flat = flatten_object(&sample_request()).unwrap();

        let query_keys: Vec<&String> = flat
            .keys()
            .filter(|k| {
                shapewire::hint_for_key(hints, k).and_then(|h| h.location)
                    == Some(Location::Query)
            })
            .collect();
        assert!(query_keys.iter().any(|k| k.as_str() == "MaxResults"));
        assert!(query_keys.iter().any(|k| k.as_str() == "InstanceId.member.2"));
        assert!(!query_keys.iter().any(|k| k.starts_with("UserData")));
    }

    #[test]
    fn test_serialize_all_batch() {
        let tags = vec![tag("a", Some("1")), tag("b", None)];
        let mappings = shapewire::serialize_all(&tags).unwrap();
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[1].len(), 1);
    }
}
