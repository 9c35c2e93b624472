// Fixture file access
//
// Operations never touch std::fs directly; they go through a FixtureStore so
// they can be exercised against an in-memory store in tests.

pub mod dir;
pub mod memory;

pub use dir::DirStore;
pub use memory::MemoryStore;

use std::io;
use std::path::Path;

/// File access needed by the switcher and the validator.
///
/// Relative paths are resolved against the store's working directory.
pub trait FixtureStore {
    fn exists(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Copy `from` onto `to`, overwriting it and carrying over file metadata.
    fn copy(&mut self, from: &Path, to: &Path) -> io::Result<()>;

    /// Do both paths name the same existing file?
    fn same_file(&self, a: &Path, b: &Path) -> bool;

    /// Names of the files in the working directory, in enumeration order.
    fn list(&self) -> io::Result<Vec<String>>;
}
