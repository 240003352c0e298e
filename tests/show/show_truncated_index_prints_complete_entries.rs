use crate::common::command::{index_dir, run_index_show, write_index};
use crate::common::index::{EntryFixture, index_bytes};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_truncated_index_prints_complete_entries(
    index_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries = vec![
        EntryFixture::new("complete.txt".to_string(), 10),
        EntryFixture::new("cut-short.txt".to_string(), 20),
    ];
    let mut bytes = index_bytes(2, &entries, None);
    // Drop the padding (5 bytes) and the final name byte of the second entry
    bytes.truncate(bytes.len() - 6);
    write_index(&index_dir, ".git/index", &bytes);

    run_index_show(index_dir.path(), &["show"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(" complete.txt\n"))
        .stdout(predicate::str::contains("cut-short").not())
        .stderr(predicate::str::contains("Failed to decode entry 2 of 2"));

    Ok(())
}

#[rstest]
fn show_stops_when_file_ends_before_declared_count(
    index_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries = vec![EntryFixture::new("lonely.txt".to_string(), 10)];
    write_index(&index_dir, ".git/index", &index_bytes(2, &entries, Some(4)));

    run_index_show(index_dir.path(), &["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0x44495243 2 4\n"))
        .stdout(predicate::str::contains(" lonely.txt\n"))
        .stderr(predicate::str::contains("index ended before all declared entries"));

    Ok(())
}
