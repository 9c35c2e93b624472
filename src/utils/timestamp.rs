// Backup file naming

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Timestamp format used in backup file names (second resolution).
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Backup path for `target` taken at local time `now`.
///
/// `dir/name.json` becomes `dir/name_backup_YYYYMMDD_HHMMSS.json`. Two
/// backups in the same second map to the same name.
pub fn backup_path(target: &Path, now: &NaiveDateTime) -> PathBuf {
    let stem = target
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stamp = now.format(BACKUP_TIMESTAMP_FORMAT);
    let name = match target.extension() {
        Some(ext) => format!("{}_backup_{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}_backup_{}", stem, stamp),
    };
    target.with_file_name(name)
}
