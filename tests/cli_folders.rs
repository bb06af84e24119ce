mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use support::{MockServer, Reply};
use tempfile::TempDir;

fn stockpile(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stockpile").unwrap();
    cmd.env("STOCKPILE_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_creates_one_folder_of_each_kind() {
    let home = tempfile::tempdir().unwrap();
    stockpile(&home).arg("init").assert().success();

    stockpile(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stock"))
        .stdout(predicate::str::contains("Shopping"))
        .stdout(predicate::str::contains("cart"));

    assert!(home.path().join("folders.json").exists());
}

#[test]
fn create_edit_and_delete_folder() {
    let home = tempfile::tempdir().unwrap();
    stockpile(&home).arg("init").assert().success();

    stockpile(&home)
        .args(["create", "Freezer", "--icon", "refrigerator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Folder saved: Freezer"));

    stockpile(&home)
        .args(["edit", "Freezer", "--name", "Chest Freezer", "--kind", "shopping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chest Freezer"));

    stockpile(&home)
        .args(["list", "--kind", "shopping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chest Freezer"))
        .stdout(predicate::str::contains("Stock ").not());

    stockpile(&home)
        .args(["delete", "Chest Freezer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Folder deleted"));
}

#[test]
fn last_folder_of_a_kind_is_protected() {
    let home = tempfile::tempdir().unwrap();
    stockpile(&home).arg("init").assert().success();

    stockpile(&home)
        .args(["delete", "Shopping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("last shopping folder"));

    stockpile(&home)
        .args(["edit", "Stock", "--kind", "shopping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("last stock folder"));
}

#[test]
fn unchanged_edit_and_empty_name_are_rejected() {
    let home = tempfile::tempdir().unwrap();
    stockpile(&home).arg("init").assert().success();

    stockpile(&home)
        .args(["edit", "Stock", "--name", "Stock"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to save"));

    stockpile(&home)
        .args(["create", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn lookup_requires_configuration() {
    let home = tempfile::tempdir().unwrap();
    stockpile(&home)
        .args(["lookup", "4901777300446"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lookup.base-url is not set"));
}

#[test]
fn lookup_prints_product_and_saves_image() {
    let images = MockServer::start(vec![("/img.png", Reply::Bytes("image/png", b"tea-bytes".to_vec()))]);
    let payload = format!(
        r#"{{"Items":[{{"itemName":"Sample Tea","mediumImageUrls":["{}"]}}]}}"#,
        images.url("/img.png")
    );
    let api = MockServer::start(vec![("/search", Reply::Json(payload))]);

    let home = tempfile::tempdir().unwrap();
    stockpile(&home)
        .args(["config", "lookup.base-url", api.url("/search").as_str()])
        .assert()
        .success();
    stockpile(&home)
        .args(["config", "lookup.application-id", "app-1"])
        .assert()
        .success();

    let image_path = home.path().join("tea.png");
    stockpile(&home)
        .args(["lookup", "4901777300446", "--save-image"])
        .arg(&image_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found: Sample Tea"))
        .stdout(predicate::str::contains("9 bytes downloaded"));

    assert_eq!(std::fs::read(&image_path).unwrap(), b"tea-bytes");
}

#[test]
fn config_lists_known_keys() {
    let home = tempfile::tempdir().unwrap();
    stockpile(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("lookup.timeout-secs = 8"))
        .stdout(predicate::str::contains("lookup.application-id = (unset)"));
}

#[test]
fn rejected_config_value_fails_and_keeps_defaults() {
    let home = tempfile::tempdir().unwrap();
    stockpile(&home)
        .args(["config", "lookup.timeout-secs", "zero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));

    stockpile(&home)
        .args(["config", "lookup.timeout-secs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8"));
}

#[test]
fn init_after_create_adds_missing_shopping_folder() {
    let home = tempfile::tempdir().unwrap();
    stockpile(&home)
        .args(["create", "Garage"])
        .assert()
        .success();

    stockpile(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created shopping folder: Shopping"));

    stockpile(&home)
        .args(["list", "--kind", "shopping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping"));
}
