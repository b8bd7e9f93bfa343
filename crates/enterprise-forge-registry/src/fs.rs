use std::path::Path;

/// Filesystem queries the registry makes before loading anything.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_file_system_checks_disk() {
        let dir = tempfile::tempdir().unwrap();
        assert!(StdFileSystem.exists(dir.path()));
        assert!(!StdFileSystem.exists(&dir.path().join("missing")));
    }
}
