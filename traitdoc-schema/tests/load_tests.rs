//! Schema loading from files and directories.
//!
//! Each test gets an isolated `TempDir` and shares no state.

use std::fs;

use rstest::rstest;
use tempfile::TempDir;
use traitdoc_schema::{load_schemas, SchemaError};

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

fn make_dir() -> TempDir {
    TempDir::new().expect("tempdir")
}

fn write(dir: &TempDir, filename: &str, content: &str) {
    fs::write(dir.path().join(filename), content).expect("write fixture");
}

const TIMER_YAML: &str = "\
types:
  - name: TimerTrait
    comments: [\"The timer trait.\", \"+trait-id=timer\"]
    fields:
      - property: period
        type: int64
";

const BASE_JSON: &str = r#"{"types": [{"name": "Base", "fields": [{"property": "a", "type": "string"}]}]}"#;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn single_file_loads_all_types() {
    let dir = make_dir();
    write(&dir, "timer.yaml", TIMER_YAML);
    let set = load_schemas(&dir.path().join("timer.yaml")).expect("load");
    assert_eq!(set.len(), 1);
    assert!(set.get("TimerTrait").is_some());
}

#[test]
fn directory_merges_files_in_name_order() {
    let dir = make_dir();
    write(&dir, "b_timer.yml", TIMER_YAML);
    write(&dir, "a_base.json", BASE_JSON);
    write(&dir, "README.md", "not a schema");

    let set = load_schemas(dir.path()).expect("load");
    let names: Vec<_> = set.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Base", "TimerTrait"]);
}

#[test]
fn duplicate_type_across_files_is_rejected() {
    let dir = make_dir();
    write(&dir, "one.yaml", TIMER_YAML);
    write(&dir, "two.yaml", TIMER_YAML);
    let err = load_schemas(dir.path()).unwrap_err();
    assert!(matches!(err, SchemaError::DuplicateType { ref name, .. } if name == "TimerTrait"));
}

#[rstest]
#[case("schema.toml", "types = []")]
#[case("schema.txt", "")]
fn unsupported_single_file(#[case] filename: &str, #[case] content: &str) {
    let dir = make_dir();
    write(&dir, filename, content);
    let err = load_schemas(&dir.path().join(filename)).unwrap_err();
    assert!(matches!(err, SchemaError::UnsupportedFormat { .. }), "got: {err}");
}

#[test]
fn missing_path_is_not_found() {
    let dir = make_dir();
    let err = load_schemas(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, SchemaError::NotFound { .. }));
}

#[test]
fn malformed_file_reports_parse_error() {
    let dir = make_dir();
    write(&dir, "bad.json", "{\"types\": [");
    let err = load_schemas(dir.path()).unwrap_err();
    assert!(matches!(err, SchemaError::ParseError { .. }), "got: {err}");
}
