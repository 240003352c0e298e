use crate::common::command::{index_dir, run_index_show, write_index};
use crate::common::index::{index_bytes, with_checksum};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_index_with_no_entries(index_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    // Bytes after the header are never looked at when no entries are declared
    let mut bytes = with_checksum(index_bytes(2, &[], None));
    bytes.extend_from_slice(b"TREE\0\0\0\x06garbage");
    write_index(&index_dir, ".git/index", &bytes);

    let expected_output = "#header (1-signature, 2-version, 3-entries)\n0x44495243 2 0\n\n";
    let actual_output = run_index_show(index_dir.path(), &["show"])
        .assert()
        .success();
    let stdout = String::from_utf8(actual_output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(stdout, expected_output);

    Ok(())
}
