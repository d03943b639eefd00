use std::fs;

use ctlegen_cpp::{CodeGenerator, Generator};
use ctlegen_headers::HeaderChecker;
use ctlegen_manifest::Manifest;
use tempfile::TempDir;

fn generate(manifest: &Manifest) -> TempDir {
    let dir = TempDir::new().unwrap();
    Generator::new(manifest).generate(dir.path()).unwrap();
    dir
}

#[test]
fn generated_sources_pass_the_checker() {
    let manifest = Manifest::default();
    let dir = generate(&manifest);
    let checker = HeaderChecker::from_manifest(&manifest).unwrap();

    let checks = checker.scan(dir.path(), false).unwrap();
    assert_eq!(checks.len(), 7);
    for check in &checks {
        assert!(check.passed(), "{}: {:?}", check.path.display(), check.remaining);
    }
}

#[test]
fn generated_sources_pass_with_custom_settings() {
    let manifest: Manifest = r#"
[license]
project = "lib"
copyright_holder = "2031 Someone"

[output]
include_dir = "inc"
guard_prefix = "x"
"#
    .parse()
    .unwrap();
    let dir = generate(&manifest);
    let checker = HeaderChecker::from_manifest(&manifest).unwrap();

    let checks = checker.scan(dir.path(), false).unwrap();
    assert!(checks.iter().all(|c| c.passed()));
    assert!(dir.path().join("inc/status.h").is_file());
}

#[test]
fn fixing_a_stale_header_keeps_it_read_only() {
    let manifest = Manifest::default();
    let dir = generate(&manifest);
    let path = dir.path().join("ctle/prop.h");

    ctlegen_core::clear_read_only(&path).unwrap();
    let stale = fs::read_to_string(&path)
        .unwrap()
        .replacen("2024 Ulrik Lindahl", "2024 Somebody", 1);
    fs::write(&path, stale).unwrap();
    ctlegen_core::set_read_only(&path).unwrap();

    let checker = HeaderChecker::from_manifest(&manifest).unwrap();
    let checks = checker.scan(dir.path(), true).unwrap();
    let prop = checks.iter().find(|c| c.path == path).unwrap();
    assert!(prop.was_fixed());
    assert!(fs::metadata(&path).unwrap().permissions().readonly());
    assert!(checker.scan(dir.path(), false).unwrap().iter().all(|c| c.passed()));
}

#[test]
fn narrow_comment_wrap_keeps_boilerplate_lines_intact() {
    for wrap in [16, 60] {
        let manifest: Manifest = format!("[format]\ncomment_wrap = {wrap}\n").parse().unwrap();
        let dir = generate(&manifest);
        let checker = HeaderChecker::from_manifest(&manifest).unwrap();

        let checks = checker.scan(dir.path(), false).unwrap();
        assert_eq!(checks.len(), 7);
        let failed: Vec<_> = checks
            .iter()
            .filter(|c| !c.passed())
            .map(|c| c.path.display().to_string())
            .collect();
        assert!(failed.is_empty(), "comment_wrap = {wrap}: {failed:?}");
    }
}
