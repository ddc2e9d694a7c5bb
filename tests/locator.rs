use modgraph::core::{DescriptorLocator, ModuleId};
use std::fs;
use std::path::Path;

fn descriptor<P: AsRef<Path>>(dir: P) {
    fs::create_dir_all(dir.as_ref()).unwrap();
    fs::write(dir.as_ref().join("build.gradle.kts"), "dependencies {\n}\n").unwrap();
}

#[test]
fn locate_finds_kebab_case_descriptor() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    descriptor(root.join("account/account-domain"));

    let locator = DescriptorLocator::new(root, "build.gradle.kts");
    let found = locator
        .locate(&ModuleId::from_dot_notation("projects.account.accountDomain"))
        .unwrap();
    assert_eq!(found, root.join("account/account-domain/build.gradle.kts"));
}

#[test]
fn locate_reports_absence() {
    let dir = tempfile::TempDir::new().unwrap();
    let locator = DescriptorLocator::new(dir.path(), "build.gradle.kts");

    let module = ModuleId::new(":missing:module");
    assert!(locator.locate(&module).is_none());
    assert_eq!(
        locator.descriptor_path(&module),
        dir.path().join("missing/module/build.gradle.kts")
    );
}

#[test]
fn discover_modules_skips_root_hidden_and_build_dirs() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();

    descriptor(root);
    descriptor(root.join("app"));
    descriptor(root.join("account/account-domain"));
    descriptor(root.join("account/account-data"));
    descriptor(root.join(".gradle/cache"));
    descriptor(root.join("app/build/generated"));
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("docs/readme.md"), "# docs").unwrap();

    let locator = DescriptorLocator::new(root, "build.gradle.kts");
    let modules: Vec<String> = locator
        .discover_modules()
        .unwrap()
        .into_iter()
        .map(|m| m.to_string())
        .collect();

    assert_eq!(
        modules,
        vec![":account:account-data", ":account:account-domain", ":app"]
    );
}
