use crate::common::command::{index_dir, run_index_show, write_index};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_fails_on_invalid_signature(index_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_index(&index_dir, ".git/index", b"PACK\0\0\0\x02\0\0\0\x01padding");

    run_index_show(index_dir.path(), &["show"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to decode index header"))
        .stderr(predicate::str::contains("invalid index signature 0x5041434b"));

    Ok(())
}
