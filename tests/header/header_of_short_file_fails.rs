use crate::common::command::{index_dir, run_index_show, write_index};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case::empty(b"".as_slice())]
#[case::signature_only(b"DIRC".as_slice())]
#[case::one_byte_short(b"DIRC\0\0\0\x02\0\0\0".as_slice())]
fn header_of_short_file_fails(
    index_dir: TempDir,
    #[case] bytes: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    write_index(&index_dir, "index", bytes);

    run_index_show(index_dir.path(), &["header", "index"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("needed 12 bytes"));

    Ok(())
}
