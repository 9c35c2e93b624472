use std::fs::{self, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use super::FixtureStore;

/// Fixture store backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the process working directory.
    pub fn current_dir() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl FixtureStore for DirStore {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(path))
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        match (self.resolve(a).canonicalize(), self.resolve(b).canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    fn copy(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        let from = self.resolve(from);
        let to = self.resolve(to);
        debug!("Copying {} -> {}", from.display(), to.display());

        // fs::copy carries permission bits; timestamps are set afterwards.
        fs::copy(&from, &to)?;
        let meta = fs::metadata(&from)?;
        let mut times = FileTimes::new().set_modified(meta.modified()?);
        if let Ok(accessed) = meta.accessed() {
            times = times.set_accessed(accessed);
        }
        fs::File::options().write(true).open(&to)?.set_times(times)?;
        Ok(())
    }

    fn list(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            // fs::metadata follows symlinks, so linked fixtures are listed too.
            if fs::metadata(entry.path()).map_or(false, |m| m.is_file()) {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn test_copy_preserves_bytes_and_mtime() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("a.json");
        fs::write(&src, b"{\"tasks\": []}").unwrap();
        let old = SystemTime::now() - Duration::from_secs(86_400);
        fs::File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_modified(old)
            .unwrap();

        let mut store = DirStore::new(temp_dir.path());
        store.copy(Path::new("a.json"), Path::new("b.json")).unwrap();

        let dst = temp_dir.path().join("b.json");
        assert_eq!(fs::read(&dst).unwrap(), fs::read(&src).unwrap());
        assert_eq!(
            fs::metadata(&dst).unwrap().modified().unwrap(),
            fs::metadata(&src).unwrap().modified().unwrap()
        );
    }

    #[test]
    fn test_same_file_sees_through_path_spelling() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("b.json"), "{}").unwrap();

        let store = DirStore::new(temp_dir.path());
        let absolute = temp_dir.path().join("a.json");
        assert!(store.same_file(Path::new("./a.json"), Path::new("a.json")));
        assert!(store.same_file(Path::new("a.json"), &absolute));
        assert!(!store.same_file(Path::new("a.json"), Path::new("b.json")));
        assert!(!store.same_file(Path::new("a.json"), Path::new("missing.json")));
    }

    #[cfg(unix)]
    #[test]
    fn test_list_follows_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("fixtures")).unwrap();
        fs::write(temp_dir.path().join("fixtures").join("a.json"), "{}").unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("fixtures").join("a.json"),
            temp_dir.path().join("current_mock.json"),
        )
        .unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("gone.json"),
            temp_dir.path().join("dangling_mock.json"),
        )
        .unwrap();

        let store = DirStore::new(temp_dir.path());
        assert_eq!(store.list().unwrap(), vec!["current_mock.json".to_string()]);
    }

    #[test]
    fn test_list_skips_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("x_mock.json"), "{}").unwrap();
        fs::create_dir(temp_dir.path().join("dir_mock.json")).unwrap();

        let store = DirStore::new(temp_dir.path());
        assert_eq!(store.list().unwrap(), vec!["x_mock.json".to_string()]);
        assert!(store.exists(Path::new("x_mock.json")));
        assert!(!store.exists(Path::new("missing.json")));
    }
}
