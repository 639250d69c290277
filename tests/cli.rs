use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn fixup_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fixup-headers"));
    cmd.arg("--root").arg(root).arg("--no-color");
    cmd
}

#[test]
fn missing_fixup_file_prints_usage() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fixup-headers"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn invalid_target_dir_fails_without_touching_files() {
    let temp = tempdir().unwrap();
    let original = "#include \"Old.hpp\"\n";
    write_file(&temp.path().join("src/a.cpp"), original);
    write_file(&temp.path().join("fixups.json"), r#"{"Old.hpp": null}"#);

    fixup_cmd(temp.path())
        .arg(temp.path().join("fixups.json"))
        .arg(temp.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid target directory"));

    assert_eq!(
        fs::read_to_string(temp.path().join("src/a.cpp")).unwrap(),
        original
    );
}

#[test]
fn malformed_fixup_file_fails_before_rewriting() {
    let temp = tempdir().unwrap();
    let original = "#include \"Old.hpp\"\n";
    write_file(&temp.path().join("src/a.cpp"), original);
    write_file(&temp.path().join("fixups.json"), "{ \"Old.hpp\": ");

    fixup_cmd(temp.path())
        .arg(temp.path().join("fixups.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse fixup file"));

    assert_eq!(
        fs::read_to_string(temp.path().join("src/a.cpp")).unwrap(),
        original
    );
}

#[test]
fn removes_include_line_entirely() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("src/a.cpp"),
        "#include <vector>\n#include \"Old/A.hpp\"\nint main() {}\n",
    );
    write_file(&temp.path().join("fixups.json"), r#"{"Old/A.hpp": null}"#);

    fixup_cmd(temp.path())
        .arg(temp.path().join("fixups.json"))
        .assert()
        .success()
        .stdout("src/a.cpp: Old/A.hpp -> (removed)\n");

    assert_eq!(
        fs::read_to_string(temp.path().join("src/a.cpp")).unwrap(),
        "#include <vector>\nint main() {}\n"
    );
}

#[test]
fn explicit_target_dir_limits_scan() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/engine/a.cpp"), "#include <Old.hpp>\n");
    write_file(&temp.path().join("src/other/b.cpp"), "#include <Old.hpp>\n");
    write_file(&temp.path().join("fixups.json"), r#"{"Old.hpp": "New.hpp"}"#);

    fixup_cmd(temp.path())
        .arg(temp.path().join("fixups.json"))
        .arg(temp.path().join("src/engine"))
        .assert()
        .success()
        .stdout("src/engine/a.cpp: Old.hpp -> New.hpp\n");

    assert_eq!(
        fs::read_to_string(temp.path().join("src/engine/a.cpp")).unwrap(),
        "#include <New.hpp>\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("src/other/b.cpp")).unwrap(),
        "#include <Old.hpp>\n"
    );
}

#[test]
fn root_from_environment() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.hpp"), "#include \"Old.hpp\"\n");
    write_file(&temp.path().join("fixups.json"), r#"{"Old.hpp": "New.hpp"}"#);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fixup-headers"));
    cmd.env("FIXUP_HEADERS_ROOT", temp.path())
        .arg(temp.path().join("fixups.json"))
        .assert()
        .success()
        .stdout("src/a.hpp: Old.hpp -> New.hpp\n");
}

#[test]
fn target_outside_root_is_rejected() {
    let root = tempdir().unwrap();
    let other = tempdir().unwrap();
    write_file(&other.path().join("a.cpp"), "#include \"Old.hpp\"\n");
    write_file(&root.path().join("fixups.json"), r#"{"Old.hpp": null}"#);

    fixup_cmd(root.path())
        .arg(root.path().join("fixups.json"))
        .arg(other.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not inside the project root"));

    assert_eq!(
        fs::read_to_string(other.path().join("a.cpp")).unwrap(),
        "#include \"Old.hpp\"\n"
    );
}

#[test]
fn quiet_suppresses_notices() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.cpp"), "#include \"Old.hpp\"\n");
    write_file(&temp.path().join("fixups.json"), r#"{"Old.hpp": null}"#);

    fixup_cmd(temp.path())
        .arg("--quiet")
        .arg(temp.path().join("fixups.json"))
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(temp.path().join("src/a.cpp")).unwrap(), "");
}

#[test]
fn verbose_reports_totals_on_stderr() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.cpp"), "#include \"Old.hpp\"\n");
    write_file(&temp.path().join("src/b.tpp"), "// empty\n");
    write_file(&temp.path().join("fixups.json"), r#"{"Old.hpp": "New.hpp"}"#);

    fixup_cmd(temp.path())
        .arg("--verbose")
        .arg(temp.path().join("fixups.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("modified: src/a.cpp"))
        .stderr(predicate::str::contains(
            "2 files scanned, 1 modified (1 replaced, 0 removed, 0 warnings)",
        ));
}

#[test]
fn unknown_format_is_rejected() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.cpp"), "");
    write_file(&temp.path().join("fixups.json"), "{}");

    fixup_cmd(temp.path())
        .arg("--format")
        .arg("xml")
        .arg(temp.path().join("fixups.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[cfg(not(feature = "parallel"))]
#[test]
fn notices_survive_a_later_failure() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.cpp"), "#include \"Old.hpp\"\n");
    fs::create_dir_all(temp.path().join("src/z")).unwrap();
    fs::write(temp.path().join("src/z/b.cpp"), [0xffu8, 0xfe, b'\n']).unwrap();
    write_file(&temp.path().join("fixups.json"), r#"{"Old.hpp": "New.hpp"}"#);

    fixup_cmd(temp.path())
        .arg(temp.path().join("fixups.json"))
        .assert()
        .failure()
        .stdout("src/a.cpp: Old.hpp -> New.hpp\n");

    assert_eq!(
        fs::read_to_string(temp.path().join("src/a.cpp")).unwrap(),
        "#include \"New.hpp\"\n"
    );
}

#[cfg(unix)]
#[test]
fn symlinked_source_is_fixed_through_the_link() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("shared/real.hpp"), "#include \"Old.hpp\"\n");
    fs::create_dir_all(temp.path().join("src")).unwrap();
    std::os::unix::fs::symlink(
        temp.path().join("shared/real.hpp"),
        temp.path().join("src/link.hpp"),
    )
    .unwrap();
    write_file(&temp.path().join("fixups.json"), r#"{"Old.hpp": "New.hpp"}"#);

    fixup_cmd(temp.path())
        .arg(temp.path().join("fixups.json"))
        .assert()
        .success()
        .stdout("src/link.hpp: Old.hpp -> New.hpp\n");

    let link = temp.path().join("src/link.hpp");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(
        fs::read_to_string(temp.path().join("shared/real.hpp")).unwrap(),
        "#include \"New.hpp\"\n"
    );
}
