use crate::common::command::{index_dir, run_index_show, write_index};
use crate::common::index::{EntryFixture, index_bytes, with_checksum};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_extended_entries(index_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let entries = vec![
        EntryFixture::new("a.c".to_string(), 4),
        EntryFixture::new("skipped/in/worktree.rs".to_string(), 8).extended(0x4000),
        EntryFixture::new("z.c".to_string(), 16),
    ];
    write_index(
        &index_dir,
        ".git/index",
        &with_checksum(index_bytes(3, &entries, None)),
    );

    let actual_output = run_index_show(index_dir.path(), &["show"])
        .assert()
        .success();
    let stdout = String::from_utf8(actual_output.get_output().stdout.clone())?;
    let lines = stdout.lines().skip(4).collect::<Vec<_>>();

    pretty_assertions::assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("100644 1000 1000 0003 "));
    assert!(lines[0].ends_with(" a.c"));
    assert!(lines[1].starts_with("100644 1000 1000 4016 "));
    assert!(lines[1].ends_with(" skipped/in/worktree.rs"));
    assert!(lines[2].starts_with("100644 1000 1000 0003 "));
    assert!(lines[2].ends_with(" z.c"));

    Ok(())
}
