//! Integration tests for droidscaff-cli: the binary against a temporary
//! Android project, answers scripted on stdin.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BUILD_SCRIPT: &str = r#"plugins {
    id("com.android.application")
}

android {
    namespace = "com.example.demo"
    defaultConfig {
        applicationId = "com.example.demo"
        minSdk = 24
    }
}

dependencies {
    implementation("androidx.core:core-ktx:1.12.0")
}
"#;

const MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android">

    <application android:label="Demo" />

</manifest>
"#;

fn android_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let main = dir.path().join("app/src/main");
    fs::create_dir_all(&main).unwrap();
    fs::write(dir.path().join("app/build.gradle.kts"), BUILD_SCRIPT).unwrap();
    fs::write(main.join("AndroidManifest.xml"), MANIFEST).unwrap();
    dir
}

fn droidscaff(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("droidscaff").unwrap();
    cmd.current_dir(project)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(["--config", "absent-config.toml"]);
    cmd
}

fn answers(lines: &[&str]) -> String {
    let mut script = lines.join("\n");
    script.push('\n');
    script
}

fn read(project: &Path, relative: &str) -> String {
    fs::read_to_string(project.join(relative)).unwrap()
}

const PACKAGE_ROOT: &str = "app/src/main/java/com/example/demo";

#[test]
fn help_flag() {
    Command::cargo_bin("droidscaff")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scaffold"))
        .stdout(predicate::str::contains("permissions"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("droidscaff")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_color_accepts_any_conventional_value() {
    let project = TempDir::new().unwrap();

    for value in ["1", "true", "yes", "0", "false", ""] {
        Command::cargo_bin("droidscaff")
            .unwrap()
            .current_dir(project.path())
            .env("NO_COLOR", value)
            .args(["--config", "absent-config.toml", "config", "get", "dependencies.strategy"])
            .assert()
            .success()
            .stdout(predicate::str::contains("dependencies.strategy = ask"));
    }
}

#[test]
fn full_session_accepting_everything() {
    let project = android_project();
    let mut input = vec!["yes", "1", "yes"];
    input.extend(["y"; 10]);

    droidscaff(project.path())
        .arg("run")
        .arg(project.path())
        .write_stdin(answers(&input))
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted applicationId: com.example.demo"))
        .stdout(predicate::str::contains("Confirmed!"))
        .stdout(predicate::str::contains("libs.versions.toml not found. Using Method 1."))
        .stdout(predicate::str::contains("Project setup finished."));

    for sub in [
        "domain/models",
        "domain/usecases",
        "data/repository",
        "data/local",
        "data/remote",
        "presentation/ui",
        "presentation/viewmodels",
    ] {
        assert!(project.path().join(PACKAGE_ROOT).join(sub).is_dir(), "{sub}");
    }
    for layer in ["domain", "data", "presentation"] {
        let readme = read(project.path(), &format!("{PACKAGE_ROOT}/{layer}/README.md"));
        assert!(readme.starts_with("This layer"));
    }

    let manifest = read(project.path(), "app/src/main/AndroidManifest.xml");
    for permission in [
        "INTERNET",
        "ACCESS_NETWORK_STATE",
        "ACCESS_WIFI_STATE",
        "READ_EXTERNAL_STORAGE",
    ] {
        assert!(manifest.contains(&format!(
            r#"<uses-permission android:name="android.permission.{permission}"/>"#
        )));
    }
    assert!(!manifest.contains("android.permission.CAMERA"));

    let script = read(project.path(), "app/build.gradle.kts");
    assert!(script.contains(
        "dependencies {\n\t// Glide\n    implementation(\"com.github.bumptech.glide:glide:4.16.0\")\n"
    ));
    assert!(script.ends_with(
        "kotlinx-coroutines-android:1.7.3\")\n    implementation(\"androidx.core:core-ktx:1.12.0\")\n}\n"
    ));
}

#[test]
fn declining_every_dependency_leaves_script_identical() {
    let project = android_project();
    let mut input = vec!["yes", "1", "no"];
    input.extend(["no"; 10]);

    droidscaff(project.path())
        .args(["run", "."])
        .write_stdin(answers(&input))
        .assert()
        .success()
        .stdout(predicate::str::contains("Permission addition skipped."))
        .stdout(predicate::str::contains("No dependencies were added."));

    assert_eq!(read(project.path(), "app/build.gradle.kts"), BUILD_SCRIPT);
    assert_eq!(read(project.path(), "app/src/main/AndroidManifest.xml"), MANIFEST);
}

#[test]
fn path_is_prompted_when_missing() {
    let project = android_project();

    droidscaff(project.path())
        .write_stdin(answers(&[".", "no"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the path to your app folder: "))
        .stdout(predicate::str::contains("Confirmation declined."));

    assert!(!project.path().join("app/src/main/java").exists());
}

#[test]
fn missing_build_script_stops_quietly() {
    let project = TempDir::new().unwrap();
    fs::create_dir_all(project.path().join("app")).unwrap();

    droidscaff(project.path())
        .args(["run", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "build.gradle or build.gradle.kts file not found in the specified app folder.",
        ));
}

#[test]
fn missing_application_id_stops_before_scaffolding() {
    let project = android_project();
    fs::write(
        project.path().join("app/build.gradle.kts"),
        "android {\n    namespace = \"x\"\n}\n",
    )
    .unwrap();

    droidscaff(project.path())
        .args(["run", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("applicationId not found in the Gradle file."));

    assert!(!project.path().join("app/src/main/java").exists());
}

#[test]
fn invalid_tier_choice_skips_only_permissions() {
    let project = android_project();
    let mut input = vec!["yes", "7"];
    input.extend(["no"; 10]);

    droidscaff(project.path())
        .args(["run", "."])
        .write_stdin(answers(&input))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice!"))
        .stdout(predicate::str::contains("Project setup finished."));

    assert_eq!(read(project.path(), "app/src/main/AndroidManifest.xml"), MANIFEST);
    assert!(project.path().join(PACKAGE_ROOT).join("domain").is_dir());
}

#[test]
fn preselected_tier_and_skipped_dependencies() {
    let project = android_project();

    droidscaff(project.path())
        .args(["run", ".", "--tier", "beginner", "--deps", "skip"])
        .write_stdin(answers(&["yes", "yes"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency stage skipped."));

    let manifest = read(project.path(), "app/src/main/AndroidManifest.xml");
    assert!(manifest.contains("android.permission.BLUETOOTH"));
    assert!(!manifest.contains("android.permission.READ_SMS"));
    assert_eq!(read(project.path(), "app/build.gradle.kts"), BUILD_SCRIPT);
}

#[test]
fn running_permissions_twice_reports_nothing_new() {
    let project = android_project();

    droidscaff(project.path())
        .args(["permissions", ".", "--tier", "basic"])
        .write_stdin(answers(&["yes"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Added permissions:"));
    let after_first = read(project.path(), "app/src/main/AndroidManifest.xml");

    droidscaff(project.path())
        .args(["permissions", ".", "--tier", "basic"])
        .write_stdin(answers(&["yes"]))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All permissions already exist in the AndroidManifest.xml file.",
        ));
    assert_eq!(read(project.path(), "app/src/main/AndroidManifest.xml"), after_first);
}

#[test]
fn end_of_input_is_a_cancellation() {
    let project = android_project();

    droidscaff(project.path())
        .args(["run", "."])
        .write_stdin("")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Operation cancelled"));
}

#[test]
fn catalog_strategy_appends_entries() {
    let project = android_project();
    fs::create_dir_all(project.path().join("gradle")).unwrap();
    fs::write(
        project.path().join("gradle/libs.versions.toml"),
        "[versions]\nagp = \"8.2.0\"\n",
    )
    .unwrap();

    droidscaff(project.path())
        .args(["deps", ".", "--strategy", "catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependencies added using Method 2"));

    let catalog = read(project.path(), "gradle/libs.versions.toml");
    assert!(catalog.starts_with("[versions]\nagp = \"8.2.0\"\n\n[versions]\n"));
    assert!(catalog.contains("hilt-android = { module = \"com.google.dagger:hilt-android\""));
    assert_eq!(read(project.path(), "app/build.gradle.kts"), BUILD_SCRIPT);
}

#[test]
fn ask_strategy_offers_catalog_when_present() {
    let project = android_project();
    fs::create_dir_all(project.path().join("gradle")).unwrap();
    fs::write(project.path().join("gradle/libs.versions.toml"), "").unwrap();

    droidscaff(project.path())
        .args(["deps", "."])
        .write_stdin(answers(&["2"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("libs.versions.toml found."));

    assert!(read(project.path(), "gradle/libs.versions.toml").contains("[plugins]"));
}

#[test]
fn scaffold_with_explicit_package() {
    let project = android_project();

    droidscaff(project.path())
        .args(["scaffold", ".", "--package", "org.sample.notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("README created at:"));

    assert!(
        project
            .path()
            .join("app/src/main/java/org/sample/notes/presentation/viewmodels")
            .is_dir()
    );
}

#[test]
fn scaffold_rejects_bad_package() {
    let project = android_project();

    droidscaff(project.path())
        .args(["scaffold", ".", "--package", "com/../evil"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid input"));

    assert!(!project.path().join("app/src/main/java").exists());
}

#[test]
fn config_get_reports_default_strategy() {
    let project = TempDir::new().unwrap();

    droidscaff(project.path())
        .args(["config", "get", "dependencies.strategy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dependencies.strategy = ask"));
}

#[test]
fn config_file_is_honoured() {
    let project = android_project();
    fs::write(
        project.path().join("custom.toml"),
        "[dependencies]\nstrategy = \"skip\"\n",
    )
    .unwrap();

    Command::cargo_bin("droidscaff")
        .unwrap()
        .current_dir(project.path())
        .env("NO_COLOR", "1")
        .args(["--config", "custom.toml", "config", "get", "dependencies.strategy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dependencies.strategy = skip"));
}

#[test]
fn init_writes_default_config() {
    let project = TempDir::new().unwrap();
    let path = project.path().join("droidscaff.toml");

    Command::cargo_bin("droidscaff")
        .unwrap()
        .current_dir(project.path())
        .env("NO_COLOR", "1")
        .args(["--config", "droidscaff.toml", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created at"));

    assert!(fs::read_to_string(path).unwrap().contains("strategy = \"ask\""));
}

#[test]
fn shell_completions() {
    Command::cargo_bin("droidscaff")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("droidscaff"));
}
