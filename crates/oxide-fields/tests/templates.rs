mod common;

use common::{numbers, submit};
use oxide_fields::fields::{pulldown_field, text_field};
use oxide_fields::schema::FormSchema;
use oxide_fields::{Component, Fields, Form, Helper, Helpers, Resolver, Section, Value};

const SETTINGS: &str = r#"{
    "action": "/settings",
    "members": [
        {"type": "section", "label": "Site", "members": [
            {"type": "text", "label": "Name", "name": "SITE_NAME", "required": true},
            {"type": "pulldown", "label": "Type", "options": [["One", "uno"], ["Two", "dos"]]}
        ]}
    ]
}"#;

#[test]
fn test_schema_matches_builder_form() {
    let from_schema = FormSchema::from_json(SETTINGS).unwrap().build().unwrap();
    let from_builder = Form::new(Fields::new().member(Section::new(
        "Site",
        Fields::new()
            .member(text_field("Name").named("SITE_NAME").required())
            .member(pulldown_field("Type", numbers())),
    )))
    .action("/settings");

    assert_eq!(from_schema.edit(), from_builder.edit());

    let values = submit(&[("site_name", "Oxide"), ("type", "Two")]);
    let mut a = from_schema;
    let mut b = from_builder;
    assert!(a.validate(&values).unwrap());
    assert!(b.validate(&values).unwrap());
    assert_eq!(a.evaluate(), b.evaluate());
    assert_eq!(a.evaluate()["TYPE"], Value::from("dos"));
}

#[test]
fn test_schema_round_trips_through_json() {
    let schema = FormSchema::from_json(SETTINGS).unwrap();
    let json = serde_json::to_string(&schema).unwrap();
    assert_eq!(FormSchema::from_json(&json).unwrap(), schema);
}

#[test]
fn test_resolver_over_form_and_helpers() {
    let mut form = FormSchema::from_json(SETTINGS).unwrap().build().unwrap();
    form.update(&submit(&[("TYPE", "uno")])).unwrap();

    let site = Helpers::new()
        .with("title", "Settings")
        .with("type", "shadowed")
        .with("year", Helper::computed(|| "2026".to_string()));
    let resolver = Resolver::new().push("form", &form).push("site", &site);

    assert_eq!(resolver.resolve("type"), Some("One".to_string()));
    assert_eq!(resolver.resolve("title"), Some("Settings".to_string()));
    assert_eq!(resolver.resolve("year"), Some("2026".to_string()));
    assert_eq!(resolver.resolve("action"), Some("/settings".to_string()));
    assert_eq!(resolver.resolve("nothing"), None);
}
