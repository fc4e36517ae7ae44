// tests/integration_tests/idempotence_test.rs
use super::common::{create_test_file, read, setup_test_directory};
use anyhow::Result;
use bulk_rename::{Config, Replacement, rename_tree};

#[test]
fn test_second_run_changes_nothing() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let config = Config::with_root(temp_dir.path());

    let first = rename_tree(&config);
    assert_eq!(first.updated_count(), 3);
    let after_first = read(temp_dir.path(), "lib/a.dart")?;

    let second = rename_tree(&config);
    assert_eq!(second.updated_count(), 0, "Second run should be a fixed point");
    assert_eq!(read(temp_dir.path(), "lib/a.dart")?, after_first);

    Ok(())
}

#[test]
fn test_replacements_chain_in_order() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "lib/x.dart", "A")?;

    let mut config = Config::with_root(temp_dir.path());
    config.replacements = vec![Replacement::new("A", "B"), Replacement::new("B", "C")];

    let report = rename_tree(&config);
    assert_eq!(report.updated_count(), 1);
    assert_eq!(read(temp_dir.path(), "lib/x.dart")?, "C");

    Ok(())
}
