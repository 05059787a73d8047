use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_flag() {
    cargo_bin_cmd!("restmold-gen")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate new REST model boilerplate"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_name_is_required() {
    cargo_bin_cmd!("restmold-gen")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<NAME>"));
}

// ============================================================================
// Scaffolding
// ============================================================================

#[test]
fn test_creates_model_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("api_models");

    cargo_bin_cmd!("restmold-gen")
        .arg("user")
        .arg("--dir")
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("user_model.rs created"));

    let content = fs::read_to_string(dir.join("user_model.rs")).unwrap();
    assert!(content.contains("impl RestModel for UserModel"));
    assert!(content.contains("\"/index\""));
}

#[test]
fn test_existing_file_is_reported_and_kept() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("user_model.rs");
    fs::write(&path, "// mine\n").unwrap();

    cargo_bin_cmd!("restmold-gen")
        .args(["User", "--dir"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("user_model.rs already exists"));

    assert_eq!(fs::read_to_string(path).unwrap(), "// mine\n");
}

#[test]
fn test_dry_run_prints_code() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("restmold-gen")
        .args(["order items", "--dry-run", "--namespace", "crate::remote", "--dir"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pub struct OrderItemModel;"))
        .stdout(predicate::str::contains("crate::remote::order_item_model"));

    assert!(!temp_dir.path().join("order_item_model.rs").exists());
}

#[test]
fn test_invalid_name_fails() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("restmold-gen")
        .args(["123", "--dir"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidName"));
}

#[test]
fn test_plural_name_creates_singular_model() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("restmold-gen")
        .args(["users", "--dir"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("user_model.rs created"));

    let content = fs::read_to_string(temp_dir.path().join("user_model.rs")).unwrap();
    assert!(content.contains("pub struct UserModel;"));
    assert!(!temp_dir.path().join("users_model.rs").exists());
}
