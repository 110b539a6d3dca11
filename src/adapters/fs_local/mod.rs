// Local filesystem adapter - File operations through tokio::fs

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::domain::errors::*;
use crate::ports::*;

/// Filesystem adapter for the local disk
#[derive(Debug, Default, Clone)]
pub struct FsLocalAdapter;

impl FsLocalAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsPort for FsLocalAdapter {
    async fn file_size(&self, file_path: &Path) -> Result<u64, DomainError> {
        let metadata = fs::metadata(file_path).await.map_err(|e| {
            DomainError::Io(format!(
                "Error getting file size for {}: {}",
                file_path.display(),
                e
            ))
        })?;
        Ok(metadata.len())
    }

    async fn is_readable(&self, file_path: &Path) -> bool {
        match fs::File::open(file_path).await {
            Ok(file) => file
                .metadata()
                .await
                .map(|metadata| metadata.is_file())
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<(), DomainError> {
        fs::rename(from, to).await.map_err(|e| {
            DomainError::Io(format!(
                "Failed to move {} to {}: {}",
                from.display(),
                to.display(),
                e
            ))
        })
    }

    async fn remove_file(&self, file_path: &Path) -> Result<(), DomainError> {
        match fs::remove_file(file_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::Io(format!(
                "Failed to delete {}: {}",
                file_path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shot.png");
        std::fs::write(&path, vec![0u8; 1234]).unwrap();

        let fs_port = FsLocalAdapter::new();
        assert_eq!(fs_port.file_size(&path).await.unwrap(), 1234);
    }

    #[tokio::test]
    async fn test_file_size_missing_is_io_error() {
        let dir = TempDir::new().unwrap();
        let fs_port = FsLocalAdapter::new();
        let result = fs_port.file_size(&dir.path().join("missing.png")).await;
        assert!(matches!(result, Err(DomainError::Io(_))));
    }

    #[tokio::test]
    async fn test_is_readable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shot.png");
        let fs_port = FsLocalAdapter::new();

        assert!(!fs_port.is_readable(&path).await);
        std::fs::write(&path, b"png").unwrap();
        assert!(fs_port.is_readable(&path).await);
        assert!(!fs_port.is_readable(dir.path()).await);
    }

    #[tokio::test]
    async fn test_rename_replaces_target() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("temp_shot.png");
        let to = dir.path().join("shot.png");
        std::fs::write(&from, b"new").unwrap();
        std::fs::write(&to, b"old contents").unwrap();

        FsLocalAdapter::new().rename(&from, &to).await.unwrap();
        assert!(!from.exists());
        assert_eq!(std::fs::read(&to).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_remove_missing_file_is_ok() {
        let dir = TempDir::new().unwrap();
        let result = FsLocalAdapter::new()
            .remove_file(&dir.path().join("never-created.png"))
            .await;
        assert!(result.is_ok());
    }
}
