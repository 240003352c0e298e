use crate::common::command::{run_index_show, sample_repository};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_entries_from_default_index_path(
    sample_repository: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let oid = "11".repeat(20);
    let expected_output = format!(
        "#header (1-signature, 2-version, 3-entries)\n\
         0x44495243 2 3\n\
         \n\
         #entries (1-mode, 2-uid, 3-gid, 4-flags, 5-ctime, 6-mtime, 7-inode, 8-oid, 9-size, 10-name)\n\
         100644 1000 1000 0009 0.000000000 0.000000000 {:>8} {oid} {:>8} README.md\n\
         100644 1000 1000 000f 0.000000000 0.000000000 {:>8} {oid} {:>8} assets/logo.png\n\
         100644 1000 1000 000b 0.000000000 0.000000000 {:>8} {oid} {:>8} src/main.rs\n",
        0, 120, 0, 65536, 0, 2048
    );

    let actual_output = run_index_show(sample_repository.path(), &["show"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
