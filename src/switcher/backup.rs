use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::info;

use crate::error::{MockDataError, Result};
use crate::store::FixtureStore;
use crate::utils::backup_path;

/// Copy `target` to a timestamped backup next to it.
///
/// Returns the backup path, or `None` when there is no target to back up.
/// A backup taken in the same second as an earlier one overwrites it.
pub fn backup_current(
    store: &mut dyn FixtureStore,
    target: &Path,
    now: &NaiveDateTime,
    out: &mut dyn Write,
) -> Result<Option<PathBuf>> {
    if !store.exists(target) {
        writeln!(out, "No {} file found to backup.", target.display())?;
        return Ok(None);
    }

    let backup = backup_path(target, now);
    store
        .copy(target, &backup)
        .map_err(|e| MockDataError::io(&backup, e))?;
    info!("Backed up {} to {}", target.display(), backup.display());
    writeln!(out, "Backup created: {}", backup.display())?;
    Ok(Some(backup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(14, 2, 9)
            .unwrap()
    }

    #[test]
    fn test_backup_copies_target() {
        let mut store = MemoryStore::new().with_file("updated_mock_tasks.json", "{\"tasks\":[]}");
        let mut out = Vec::new();

        let backup = backup_current(&mut store, Path::new("updated_mock_tasks.json"), &now(), &mut out)
            .unwrap()
            .unwrap();

        assert_eq!(backup, PathBuf::from("updated_mock_tasks_backup_20261019_140209.json"));
        assert_eq!(store.get(&backup), Some(&b"{\"tasks\":[]}"[..]));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Backup created: updated_mock_tasks_backup_20261019_140209.json\n");
    }

    #[test]
    fn test_backup_without_target() {
        let mut store = MemoryStore::new();
        let mut out = Vec::new();

        let backup = backup_current(&mut store, Path::new("updated_mock_tasks.json"), &now(), &mut out).unwrap();

        assert!(backup.is_none());
        assert!(store.paths().is_empty());
        assert!(String::from_utf8(out).unwrap().contains("No updated_mock_tasks.json file found"));
    }

    #[test]
    fn test_same_second_backup_overwrites() {
        let mut store = MemoryStore::new().with_file("t.json", "first");
        let mut out = Vec::new();
        backup_current(&mut store, Path::new("t.json"), &now(), &mut out).unwrap();
        store.write("t.json", "second");
        backup_current(&mut store, Path::new("t.json"), &now(), &mut out).unwrap();

        assert_eq!(store.paths().len(), 2);
        assert_eq!(
            store.get(Path::new("t_backup_20261019_140209.json")),
            Some(&b"second"[..])
        );
    }
}
