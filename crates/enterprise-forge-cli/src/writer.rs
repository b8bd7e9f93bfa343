use std::fs;
use std::io;
use std::path::Path;

use enterprise_forge_codegen::ArtifactWriter;
use enterprise_forge_core::types::Enterprise;

/// Writes artifacts to disk, creating parent folders as needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsArtifactWriter;

impl ArtifactWriter for FsArtifactWriter {
    fn write(&self, path: &Path, _enterprise: &Enterprise, source: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, source)
    }
}

/// Accepts every artifact without writing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunWriter;

impl ArtifactWriter for DryRunWriter {
    fn write(&self, _path: &Path, _enterprise: &Enterprise, _source: &str) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use enterprise_forge_core::types::{Description, NameType};

    use super::*;

    fn enterprise() -> Enterprise {
        Enterprise::new("crm", NameType::new("Crm").unwrap(), Description::default())
    }

    #[test]
    fn fs_writer_creates_parent_folders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("Keys").join("CustomerKey.cs");
        FsArtifactWriter
            .write(&path, &enterprise(), "namespace Domain\n")
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "namespace Domain\n");
    }

    #[test]
    fn fs_writer_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Customer.cs");
        fs::write(&path, "old").unwrap();
        FsArtifactWriter.write(&path, &enterprise(), "new\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("Customer.cs");
        DryRunWriter.write(&path, &enterprise(), "x").unwrap();
        assert!(!path.exists());
        assert!(!dir.path().join("out").exists());
    }
}
