mod common;

use assert_cmd::prelude::*;
use common::{aicodeprep_cmd, create_file};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_select_all_includes_non_code_text() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.py", "x")?;
    create_file(temp.path(), "b.txt", "y")?;

    aicodeprep_cmd()
        .current_dir(temp.path())
        .arg(temp.path())
        .args(["-n", "-A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("2 files processed"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_select_all_skips_excluded_subtrees() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.py", "x")?;
    create_file(temp.path(), "build/c.py", "x")?;

    aicodeprep_cmd()
        .current_dir(temp.path())
        .arg(temp.path())
        .args(["-n", "-A", "-D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- a.py"))
        .stdout(predicate::str::contains("c.py").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_deselect_all_then_check_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "top.py", "x")?;
    create_file(temp.path(), "src/a.rs", "a")?;
    create_file(temp.path(), "src/notes.txt", "n")?;
    create_file(temp.path(), "src/deep/b.rs", "b")?;

    aicodeprep_cmd()
        .current_dir(temp.path())
        .arg(temp.path())
        .args(["-n", "-N", "--check", "src"])
        .assert()
        .success()
        .stderr(predicate::str::contains("3 files processed"));

    let output = fs::read_to_string(temp.path().join("fullcode.txt"))?;
    assert!(!output.contains("top.py"));
    assert!(output.contains("src/a.rs:"));
    assert!(output.contains("src/notes.txt:"));
    assert!(output.contains("src/deep/b.rs:"));
    temp.close()?;
    Ok(())
}

#[test]
fn test_uncheck_directory_after_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "main.py", "x")?;
    create_file(temp.path(), "tests/test_main.py", "t")?;

    aicodeprep_cmd()
        .current_dir(temp.path())
        .arg(temp.path())
        .args(["-n", "--uncheck", "tests"])
        .assert()
        .success()
        .stderr(predicate::str::contains("1 files processed"));

    let output = fs::read_to_string(temp.path().join("fullcode.txt"))?;
    assert!(output.contains("main.py:"));
    assert!(!output.contains("test_main.py"));
    temp.close()?;
    Ok(())
}

#[test]
fn test_unknown_check_path_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "main.py", "x")?;

    aicodeprep_cmd()
        .current_dir(temp.path())
        .arg(temp.path())
        .args(["-n", "--check", "nope.py"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("nope.py"));

    assert!(!temp.path().join("fullcode.txt").exists());
    temp.close()?;
    Ok(())
}

#[test]
fn test_same_path_checked_and_unchecked_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "main.py", "x")?;

    aicodeprep_cmd()
        .current_dir(temp.path())
        .arg(temp.path())
        .args(["-n", "--check", "main.py", "--uncheck", "main.py"])
        .assert()
        .failure();

    temp.close()?;
    Ok(())
}

#[test]
fn test_selection_file_replaces_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.py", "x")?;
    create_file(temp.path(), "docs/guide.txt", "read me")?;
    let selection = temp.path().join("picked.lst");
    fs::write(&selection, "# saved selection\n\ndocs\\guide.txt\nmissing.py\n")?;

    aicodeprep_cmd()
        .current_dir(temp.path())
        .arg(temp.path())
        .arg("-n")
        .arg("-s")
        .arg(&selection)
        .assert()
        .success()
        .stderr(predicate::str::contains("1 files processed"));

    let output = fs::read_to_string(temp.path().join("fullcode.txt"))?;
    assert!(output.starts_with("docs/guide.txt:\n<code>\nread me\n</code>\n\n"));
    assert!(!output.contains("a.py"));
    temp.close()?;
    Ok(())
}

#[test]
fn test_missing_selection_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.py", "x")?;

    aicodeprep_cmd()
        .current_dir(temp.path())
        .arg(temp.path())
        .arg("-n")
        .arg("-s")
        .arg(temp.path().join("nope.lst"))
        .assert()
        .failure()
        .code(1);

    temp.close()?;
    Ok(())
}
