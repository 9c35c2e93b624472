use std::io;
use std::path::{Component, Path, PathBuf};

use super::FixtureStore;

/// Drop `.` components so `./a.json` and `a.json` name the same entry.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// In-memory fixture store, used to test operations without touching disk.
///
/// Files keep insertion order, which stands in for directory enumeration
/// order in `list`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: Vec<(PathBuf, Vec<u8>)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        self.write(path, bytes);
        self
    }

    pub fn write(&mut self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        let path = normalize(&path.into());
        let bytes = bytes.into();
        match self.files.iter_mut().find(|(p, _)| *p == path) {
            Some(entry) => entry.1 = bytes,
            None => self.files.push((path, bytes)),
        }
    }

    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        let path = normalize(path);
        self.files
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, bytes)| bytes.as_slice())
    }

    /// Every path currently stored, in insertion order.
    pub fn paths(&self) -> Vec<&Path> {
        self.files.iter().map(|(p, _)| p.as_path()).collect()
    }
}

impl FixtureStore for MemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.get(path).is_some()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.get(path)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        self.exists(a) && self.exists(b) && normalize(a) == normalize(b)
    }

    fn copy(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        let bytes = self.read(from)?;
        self.write(to, bytes);
        Ok(())
    }

    fn list(&self) -> io::Result<Vec<String>> {
        Ok(self
            .files
            .iter()
            .filter(|(p, _)| p.parent().map_or(true, |d| d.as_os_str().is_empty()))
            .map(|(p, _)| p.display().to_string())
            .collect())
    }
}
