//! Binary-level tests: each runs `traitdoc` inside a scratch project.

use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use predicates::str::contains;

const CONFIG: &str = "\
doc_dir: docs
trait_path: modules/traits/pages
nav_path: modules/ROOT/nav.adoc
list_path: modules/traits/pages/traits.adoc
schemas: schemas
catalog: catalog.yaml
";

const CATALOG: &str = "\
profiles:
  - name: Kubernetes
    traits: [timer, affinity]
platform_traits: [affinity]
";

const SCHEMAS: &str = "\
types:
  - name: TimerTrait
    comments: [\"The timer trait.\", \"+trait-id=timer\"]
    fields:
      - property: period
        type: int64
        comments: [\"The period.\"]
  - name: AffinityTrait
    comments: [\"+trait-id=affinity\"]
    fields:
      - property: enabled
        type: bool
";

fn traitdoc(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("traitdoc"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn project() -> TempDir {
    let tmp = TempDir::new().expect("tempdir");
    tmp.child("traitdoc.yaml").write_str(CONFIG).expect("config");
    tmp.child("catalog.yaml").write_str(CATALOG).expect("catalog");
    tmp.child("schemas/traits.yaml").write_str(SCHEMAS).expect("schemas");
    tmp
}

#[test]
fn generate_writes_pages_nav_and_list() {
    let tmp = project();
    traitdoc(tmp.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(contains("2 trait page(s)"));

    tmp.child("docs/modules/traits/pages/timer.adoc")
        .assert(contains("= Timer Trait").and(contains("| timer.period")));
    tmp.child("docs/modules/traits/pages/affinity.adoc")
        .assert(contains("*platform trait*"));
    tmp.child("docs/modules/ROOT/nav.adoc").assert(contains(
        "** xref:traits:affinity.adoc[Affinity]\n** xref:traits:timer.adoc[Timer]\n",
    ));
    tmp.child("docs/modules/traits/pages/traits.adoc")
        .assert(contains("* xref:timer.adoc[Timer]"));
}

#[test]
fn dry_run_leaves_tree_untouched() {
    let tmp = project();
    traitdoc(tmp.path())
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("[dry-run]"));
    tmp.child("docs").assert(predicate::path::missing());
}

#[test]
fn check_fails_until_generated() {
    let tmp = project();
    traitdoc(tmp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(contains("out of date"));

    traitdoc(tmp.path()).arg("generate").assert().success();
    traitdoc(tmp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(contains("up to date"));
}

#[test]
fn diff_shows_reverted_hand_edit() {
    let tmp = project();
    traitdoc(tmp.path()).arg("generate").assert().success();
    traitdoc(tmp.path())
        .arg("diff")
        .assert()
        .success()
        .stdout(contains("No differences."));

    let page = tmp.child("docs/modules/traits/pages/timer.adoc");
    let edited = std::fs::read_to_string(page.path())
        .expect("read")
        .replace("| int64", "| int32");
    page.write_str(&edited).expect("edit");

    traitdoc(tmp.path())
        .arg("diff")
        .assert()
        .success()
        .stdout(contains("--- a/modules/traits/pages/timer.adoc").and(contains("+| int64")));
}

#[test]
fn overrides_take_precedence_over_config() {
    let tmp = project();
    traitdoc(tmp.path())
        .args(["generate", "--nav-path", "nav.adoc"])
        .assert()
        .success();
    tmp.child("docs/nav.adoc").assert(contains("xref:traits:timer.adoc"));
    tmp.child("docs/modules/ROOT/nav.adoc").assert(predicate::path::missing());
}

#[test]
fn list_json_reports_profiles_and_fields() {
    let tmp = project();
    let output = traitdoc(tmp.path())
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows: serde_json::Value = serde_json::from_slice(&output).expect("json");
    assert_eq!(rows[0]["id"], "affinity");
    assert_eq!(rows[0]["platform"], true);
    assert_eq!(rows[1]["id"], "timer");
    assert_eq!(rows[1]["profiles"][0], "Kubernetes");
    assert_eq!(rows[1]["fields"][0], "period");
}

#[test]
fn list_table_names_each_trait() {
    let tmp = project();
    traitdoc(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("timer").and(contains("affinity.adoc")));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let tmp = TempDir::new().expect("tempdir");
    traitdoc(tmp.path()).arg("init").assert().success();
    tmp.child("traitdoc.yaml").assert(contains("doc_dir: docs"));

    traitdoc(tmp.path()).arg("init").assert().failure();
    traitdoc(tmp.path()).args(["init", "--force"]).assert().success();
}

#[test]
fn metadata_error_is_reported() {
    let tmp = project();
    tmp.child("schemas/broken.yaml")
        .write_str("types:\n  - name: Broken\n    comments: [\"+trait-id=\"]\n")
        .expect("schema");
    traitdoc(tmp.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(contains("generation failed"));
    tmp.child("docs").assert(predicate::path::missing());
}
