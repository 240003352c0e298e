use crate::common::command::{index_dir, run_index_show, write_index};
use crate::common::index::{EntryFixture, index_bytes};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_sha256_index(index_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let oid = (0u8..32).collect::<Vec<_>>();
    let oid_hex = oid.iter().map(|b| format!("{b:02x}")).collect::<String>();
    let entries = vec![
        EntryFixture::new("first".to_string(), 1).with_oid(oid.clone()),
        EntryFixture::new("second".to_string(), 2).with_oid(oid),
    ];
    write_index(&index_dir, ".git/index", &index_bytes(2, &entries, None));

    run_index_show(index_dir.path(), &["--hash", "sha256", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{oid_hex} {:>8} first\n", 1)))
        .stdout(predicate::str::contains(format!("{oid_hex} {:>8} second\n", 2)));

    Ok(())
}

#[rstest]
fn sha256_index_read_as_sha1_is_misaligned(
    index_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries = vec![EntryFixture::new("only".to_string(), 1).with_oid(vec![0xff; 32])];
    write_index(&index_dir, ".git/index", &index_bytes(2, &entries, None));

    // The flags word is read from inside the object ID, so the name length is bogus
    run_index_show(index_dir.path(), &["show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode entry 1 of 1"))
        .stderr(predicate::str::contains("truncated"));

    Ok(())
}
