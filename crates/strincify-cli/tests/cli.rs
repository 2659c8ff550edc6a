use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("strincify").unwrap();
    cmd.current_dir(cwd).env_remove("STRINCIFY_OUT_DIR");
    cmd
}

fn write_input(dir: &TempDir, contents: impl AsRef<[u8]>) -> std::path::PathBuf {
    let path = dir.path().join("strings.txt");
    fs::write(&path, contents).unwrap();
    path
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn ok_cancel_default_basename() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(&tmp, "OK\nCancel\n");

    cmd(tmp.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("Strings use 10 bytes"))
        .stdout(contains("    STRING_OK,  /**< OK */\n    STRING_CANCEL,  /**< CANCEL */\n"))
        .stdout(contains("    \"OK\",\n    \"Cancel\",\n"))
        .stdout(contains("[OK] wrote ./string_table.h"))
        .stdout(contains("[OK] wrote ./string_table.c"));

    let header = fs::read_to_string(tmp.path().join("string_table.h")).unwrap();
    assert!(header.contains(" * @file string_table.h"));
    assert!(header.contains("enum _string_table_ids\n{\n    STRING_OK,"));
    assert!(header.contains("    STRING_CANCEL,  /**< CANCEL */\n\n    STRING_NUM_IDS\n};"));

    let source = fs::read_to_string(tmp.path().join("string_table.c")).unwrap();
    assert!(source.contains("#include \"string_table.h\""));
    assert!(source.contains("/* STRING SIZE 10 BYTES */"));
    assert!(source.contains("const char* g_string_table[] = \n{\n    \"OK\",\n    \"Cancel\",\n"));
}

#[test]
fn custom_basename() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(&tmp, "AUX\nCD\n");

    cmd(tmp.path()).arg(&input).arg("ma_strings").assert().success();

    assert_eq!(file_names(tmp.path()), ["ma_strings.c", "ma_strings.h", "strings.txt"]);
    let source = fs::read_to_string(tmp.path().join("ma_strings.c")).unwrap();
    assert!(source.contains("#include \"ma_strings.h\""));
    let header = fs::read_to_string(tmp.path().join("ma_strings.h")).unwrap();
    assert!(header.contains("#ifndef SRC_STRING_TABLE_H_"));
}

#[test]
fn out_dir_option() {
    let tmp = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let input = write_input(&tmp, "BACK\n");

    cmd(tmp.path())
        .arg(&input)
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success();

    assert_eq!(file_names(out.path()), ["string_table.c", "string_table.h"]);
    assert_eq!(file_names(tmp.path()), ["strings.txt"]);
}

#[test]
fn missing_argument_is_usage_error() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Usage"));

    assert!(file_names(tmp.path()).is_empty());
}

#[test]
fn missing_input_writes_nothing() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path())
        .arg(tmp.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(contains("failed to read string list"));

    assert!(file_names(tmp.path()).is_empty());
}

#[test]
fn missing_out_dir_fails() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(&tmp, "OK\n");

    cmd(tmp.path())
        .arg(&input)
        .arg("--out-dir")
        .arg(tmp.path().join("missing"))
        .assert()
        .failure()
        .stderr(contains("failed to write"));
}

#[test]
fn rerun_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(&tmp, "RADIO\nVU-HORIZ\nTEST!*\n\n");

    cmd(tmp.path()).arg(&input).assert().success();
    let header = fs::read(tmp.path().join("string_table.h")).unwrap();
    let source = fs::read(tmp.path().join("string_table.c")).unwrap();

    cmd(tmp.path()).arg(&input).assert().success();
    assert_eq!(fs::read(tmp.path().join("string_table.h")).unwrap(), header);
    assert_eq!(fs::read(tmp.path().join("string_table.c")).unwrap(), source);
}

#[test]
fn version_flag_succeeds() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("strincify"));
}

#[test]
fn non_utf8_lines_are_copied_as_bytes() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(&tmp, b"OK\nLautst\xe4rke\n");

    let out = cmd(tmp.path()).arg(&input).assert().success().get_output().stdout.clone();
    assert!(contains_bytes(&out, b"Strings use 14 bytes"));
    assert!(contains_bytes(&out, b"    \"Lautst\xe4rke\",\n"));

    let header = fs::read(tmp.path().join("string_table.h")).unwrap();
    assert!(contains_bytes(
        &header,
        b"    STRING_LAUTST\xe4RKE,  /**< LAUTST\xe4RKE */\n"
    ));
    let source = fs::read(tmp.path().join("string_table.c")).unwrap();
    assert!(contains_bytes(&source, b"/* STRING SIZE 14 BYTES */"));
    assert!(contains_bytes(&source, b"    \"OK\",\n    \"Lautst\xe4rke\",\n"));
}

#[test]
fn failed_source_write_keeps_header() {
    let clean = TempDir::new().unwrap();
    let input = write_input(&clean, "OK\nCancel\n");
    cmd(clean.path()).arg(&input).assert().success();
    let expected_header = fs::read(clean.path().join("string_table.h")).unwrap();

    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("string_table.c")).unwrap();

    cmd(tmp.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("failed to write ./string_table.c"));

    assert_eq!(fs::read(tmp.path().join("string_table.h")).unwrap(), expected_header);
    assert!(tmp.path().join("string_table.c").is_dir());
}
