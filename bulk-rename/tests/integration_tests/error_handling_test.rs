// tests/integration_tests/error_handling_test.rs
use super::common::{read, setup_test_directory};
use anyhow::Result;
use bulk_rename::{Config, FileOutcome, RenameError, rename_tree};
use std::fs;

#[test]
fn test_unreadable_file_reported_and_run_continues() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let broken = temp_dir.path().join("lib/broken.dart");
    fs::write(&broken, [0xc3, 0x28])?;

    let report = rename_tree(&Config::with_root(temp_dir.path()));

    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.updated_count(), 3, "Other files should still be updated");

    let failure = report.failures().next().expect("Should record one failure");
    assert_eq!(failure.path(), broken);
    assert!(matches!(
        failure,
        FileOutcome::Failed {
            error: RenameError::Read { .. },
            ..
        }
    ));

    let notice = failure.notice().expect("Failures produce a notice");
    assert!(notice.starts_with(&format!("Error updating {}: ", broken.display())));

    assert_eq!(fs::read(&broken)?, [0xc3, 0x28]);
    assert_eq!(
        read(temp_dir.path(), "test/widget_test.dart")?,
        "import 'package:pets_and_vets/main.dart';\n"
    );

    Ok(())
}

#[test]
fn test_missing_root_completes_empty() {
    let report = rename_tree(&Config::with_root("/this/root/does/not/exist"));
    assert_eq!(report.total_files(), 0);
    assert!(report.notices().is_empty());
}
