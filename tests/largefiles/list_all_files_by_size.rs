use crate::common::command::{run_index_show, sample_repository};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn list_all_files_by_size(sample_repository: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let oid = "11".repeat(20);
    let expected_output = format!(
        "{oid} {:>10} assets/logo.png\n{oid} {:>10} src/main.rs\n{oid} {:>10} README.md\n",
        65536, 2048, 120
    );

    let actual_output = run_index_show(sample_repository.path(), &["largefiles"])
        .assert()
        .success();
    let stdout = String::from_utf8(actual_output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(stdout, expected_output);

    Ok(())
}
