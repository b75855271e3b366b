mod common;

use assert_cmd::prelude::*;
use common::{aicodeprep_cmd, create_file};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_dry_run_prints_tree_and_selection() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.py", "print(1)")?;
    create_file(temp.path(), "b.txt", "hello")?;
    create_file(temp.path(), "src/lib.rs", "pub fn f() {}")?;

    aicodeprep_cmd()
        .current_dir(temp.path())
        .arg(temp.path())
        .args(["-n", "-D"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("--- Dry Run: Selection tree ---\n"))
        .stdout(predicate::str::contains("├── [x] a.py\n"))
        .stdout(predicate::str::contains("├── [ ] b.txt\n"))
        .stdout(predicate::str::contains("└── [ ] src/\n"))
        .stdout(predicate::str::contains("    └── [x] lib.rs\n"))
        .stdout(predicate::str::ends_with(
            "--- Files that would be processed ---\n- a.py\n- src/lib.rs\n--- End Dry Run ---\n",
        ))
        .stdout(predicate::str::contains("print(1)").not());

    assert!(!temp.path().join("fullcode.txt").exists());
    temp.close()?;
    Ok(())
}

#[test]
fn test_dry_run_reflects_actions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.py", "x")?;
    create_file(temp.path(), "b.txt", "y")?;

    aicodeprep_cmd()
        .current_dir(temp.path())
        .arg(temp.path())
        .args(["-n", "-D", "--check", "b.txt", "--uncheck", "a.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] a.py"))
        .stdout(predicate::str::contains("[x] b.txt"))
        .stdout(predicate::str::contains("- b.txt\n--- End Dry Run ---\n"));

    temp.close()?;
    Ok(())
}
