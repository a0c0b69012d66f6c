//! Core services wired to the real adapters against a temporary project.

use std::fs;
use std::path::{Path, PathBuf};

use droidscaff_adapters::{LocalFilesystem, XmlManifestEditor};
use droidscaff_core::domain::{INLINE_DEPENDENCIES, Layer, PermissionTier, manifest_path};
use droidscaff_core::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

const BUILD_SCRIPT: &str = r#"plugins {
    id("com.android.application")
}

android {
    defaultConfig {
        applicationId = "com.example.demo"
    }
}

dependencies {
    implementation("androidx.core:core-ktx:1.12.0")
}
"#;

const MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android">
    <uses-permission android:name="android.permission.INTERNET" />
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

fn locator() -> ProjectLocator {
    ProjectLocator::new(Box::new(LocalFilesystem::new()))
}

#[test]
fn locate_and_read_application_id() {
    let project = android_project();
    let locator = locator();

    let script = locator.locate_build_script(project.path()).unwrap().unwrap();
    assert!(script.ends_with("app/build.gradle.kts"));

    let id = locator.read_application_id(&script).unwrap();
    assert_eq!(id.as_deref(), Some("com.example.demo"));
}

#[test]
fn scaffold_is_idempotent_and_leaves_siblings_alone() {
    let project = android_project();
    let package = PackageName::parse("com.example.demo").unwrap();
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    let first = service.create_layout(project.path(), &package);
    assert!(first.is_complete());
    let second = service.create_layout(project.path(), &package);
    assert!(second.is_complete());

    let readmes = service.write_readmes(project.path(), &package);
    assert_eq!(readmes.succeeded.len(), 3);

    let root = project.path().join("app/src/main/java/com/example/demo");
    let leaves = [
        "domain/models",
        "domain/usecases",
        "data/repository",
        "data/local",
        "data/remote",
        "presentation/ui",
        "presentation/viewmodels",
    ];
    for sub in leaves {
        assert!(root.join(sub).is_dir(), "{sub} missing");
    }
    for layer in Layer::ALL {
        let readme = fs::read_to_string(root.join(layer.dir_name()).join("README.md")).unwrap();
        assert_eq!(readme, layer.readme());
    }

    // Only the three layer READMEs were written.
    let files: Vec<_> = walk_files(&root);
    assert_eq!(files.len(), 3);
    let script = fs::read_to_string(project.path().join("app/build.gradle.kts")).unwrap();
    assert_eq!(script, BUILD_SCRIPT);
}

#[test]
fn permissions_added_once() {
    let project = android_project();
    let manifest = manifest_path(project.path());
    let service = ManifestService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(XmlManifestEditor::new()),
    );
    let requested: Vec<String> = PermissionTier::Basic
        .permissions()
        .iter()
        .map(|p| p.to_string())
        .collect();

    let first = service.add_permissions(&manifest, &requested).unwrap();
    assert_eq!(first.added.len(), 3);
    assert_eq!(first.already_present, vec!["android.permission.INTERNET".to_string()]);

    let after_first = fs::read_to_string(&manifest).unwrap();
    let second = service.add_permissions(&manifest, &requested).unwrap();
    assert!(!second.is_changed());
    assert_eq!(fs::read_to_string(&manifest).unwrap(), after_first);
}

#[test]
fn declining_every_dependency_keeps_build_script_identical() {
    let project = android_project();
    let script = project.path().join("app/build.gradle.kts");
    let service = DependencyService::new(Box::new(LocalFilesystem::new()));

    let injection = service.inject_inline(&script, &[]).unwrap();
    assert!(!injection.changed());
    assert_eq!(fs::read_to_string(&script).unwrap(), BUILD_SCRIPT);
}

#[test]
fn accepted_dependencies_follow_the_opening_line() {
    let project = android_project();
    let script = project.path().join("app/build.gradle.kts");
    let service = DependencyService::new(Box::new(LocalFilesystem::new()));

    let accepted: Vec<_> = INLINE_DEPENDENCIES.iter().take(2).collect();
    service.inject_inline(&script, &accepted).unwrap();

    let text = fs::read_to_string(&script).unwrap();
    let expected_block = format!(
        "dependencies {{\n{}{}    implementation(\"androidx.core:core-ktx:1.12.0\")\n}}\n",
        INLINE_DEPENDENCIES[0].text, INLINE_DEPENDENCIES[1].text
    );
    assert!(text.ends_with(&expected_block));
}

#[test]
fn version_catalog_is_appended() {
    let project = android_project();
    let catalog = project.path().join("gradle/libs.versions.toml");
    fs::create_dir_all(catalog.parent().unwrap()).unwrap();
    fs::write(&catalog, "[versions]\nkotlin = \"1.9.0\"\n").unwrap();

    DependencyService::new(Box::new(LocalFilesystem::new()))
        .append_version_catalog(&catalog)
        .unwrap();

    let text = fs::read_to_string(&catalog).unwrap();
    assert!(text.starts_with("[versions]\nkotlin = \"1.9.0\"\n\n[versions]\nglide"));
    assert!(text.ends_with("version.ref = \"hiltAndroid\" }\n"));
}

fn walk_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect()
}

#[test]
fn memory_filesystem_backs_the_same_services() {
    let fs = droidscaff_adapters::MemoryFilesystem::new()
        .with_file("/proj/app/build.gradle", "android {\n    applicationId = \"org.demo.x\"\n}\n")
        .with_file("/proj/app/src/main/AndroidManifest.xml", "<manifest/>");

    let locator = ProjectLocator::new(Box::new(fs.clone()));
    let script = locator.locate_build_script("/proj").unwrap().unwrap();
    let id = locator.read_application_id(&script).unwrap().unwrap();
    let package = PackageName::parse(&id).unwrap();

    let report = ScaffoldService::new(Box::new(fs.clone())).create_layout("/proj", &package);
    assert_eq!(report.succeeded.len(), 11);
    assert!(fs.is_dir(Path::new("/proj/app/src/main/java/org/demo/x/data/remote")));

    let manifest = locator.locate_manifest("/proj").unwrap();
    let edit = ManifestService::new(Box::new(fs.clone()), Box::new(XmlManifestEditor::new()))
        .add_permissions(&manifest, &["android.permission.CAMERA".to_string()])
        .unwrap();
    assert_eq!(edit.added.len(), 1);
    assert!(
        fs.read_file(&manifest)
            .unwrap()
            .contains(r#"<uses-permission android:name="android.permission.CAMERA"/>"#)
    );
}
