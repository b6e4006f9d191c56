//! Metadata extraction over schema descriptions parsed from YAML.

use rstest::rstest;
use traitdoc_core::{
    metadata::{extract_fields, DEFAULT_TRAIT_TAG},
    MetadataError, MetadataExtractor, SchemaSet, TypeSchema,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn schema_set(yaml: &str) -> SchemaSet {
    let types: Vec<TypeSchema> = serde_yaml::from_str(yaml).expect("parse schema yaml");
    let mut set = SchemaSet::new();
    for t in types {
        set.insert(t).expect("unique type names");
    }
    set
}

const CONTAINER: &str = r#"
- name: ContainerTrait
  comments:
    - "The Container trait can be used to configure properties of the container."
    - "+trait-id=container"
  fields:
    - name: Trait
      property: ",squash"
      type: "Base"
    - name: internal
      type: "string"
- name: Base
  fields:
    - property: a
      type: "*string"
      comments: ["First."]
    - property: b
      type: "int32"
      comments: ["Second.", "Continued."]
"#;

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn container_flatten_yields_nested_rows_only() {
    let set = schema_set(CONTAINER);
    let extractor = MetadataExtractor::new(DEFAULT_TRAIT_TAG).unwrap();
    let container = set.get("ContainerTrait").unwrap();

    let meta = extractor.extract(container, &set).expect("extract");
    assert_eq!(meta.id.as_str(), "container");
    let keys: Vec<_> = meta.fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, ["a", "b"]);
    assert!(meta.fields.iter().all(|f| !f.flatten));
    assert_eq!(meta.fields[0].type_name, "string");
    assert_eq!(meta.fields[1].description, ["Second.", "Continued."]);
}

#[test]
fn only_tagged_types_are_eligible() {
    let set = schema_set(CONTAINER);
    let extractor = MetadataExtractor::new(DEFAULT_TRAIT_TAG).unwrap();
    let eligible: Vec<_> = set
        .iter()
        .filter(|t| extractor.is_eligible(t))
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(eligible, ["ContainerTrait"]);
}

#[rstest]
#[case("direct", "- name: Loop\n  fields:\n    - property: \",squash\"\n      type: \"*Loop\"\n")]
#[case(
    "indirect",
    "- name: Loop\n  fields:\n    - property: \",squash\"\n      type: Other\n- name: Other\n  fields:\n    - flatten: true\n      property: other\n      type: Loop\n"
)]
fn flatten_cycles_are_metadata_errors(#[case] label: &str, #[case] yaml: &str) {
    let set = schema_set(yaml);
    let err = extract_fields(set.get("Loop").unwrap(), &set)
        .expect_err(&format!("[{label}] cycle must be rejected"));
    assert!(
        matches!(err, MetadataError::FlattenCycle { .. }),
        "[{label}] got: {err}"
    );
}

#[rstest]
#[case(&["+trait-id=timer"], "timer")]
#[case(&["Docs first.", "  +trait-id=pod-disruption-budget"], "pod-disruption-budget")]
#[case(&["+trait-id=jvm2 +optional"], "jvm2")]
fn trait_ids_are_extracted(#[case] comments: &[&str], #[case] expected: &str) {
    let extractor = MetadataExtractor::new(DEFAULT_TRAIT_TAG).unwrap();
    let lines: Vec<String> = comments.iter().map(|s| s.to_string()).collect();
    let id = extractor.extract_trait_id("T", &lines).expect("id");
    assert_eq!(id.as_str(), expected);
}
