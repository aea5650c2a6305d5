use crate::core::ObjectStorage;
use crate::domain::model::StoredObject;
use crate::utils::error::{PclError, Result};
use std::path::{Path, PathBuf};

/// Filesystem storage: a bucket is a directory under `base_path`, a key is a
/// relative path inside it.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn object_path(&self, bucket: &str, key: &str) -> PathBuf {
        self.base_path.join(bucket).join(key)
    }
}

impl ObjectStorage for LocalStorage {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let path = self.object_path(bucket, key);
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(PclError::SourceNotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn store(
        &self,
        bucket: &str,
        key: &str,
        data: &[u8],
        _content_type: &str,
    ) -> Result<StoredObject> {
        let path = self.object_path(bucket, key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, data).await?;

        Ok(StoredObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            location: path.display().to_string(),
        })
    }

    async fn exists(&self, bucket: &str, key: &str) -> Result<bool> {
        let path = self.object_path(bucket, key);
        Ok(tokio::fs::try_exists(&path).await? && is_file(&path).await)
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_store_then_fetch() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let stored = storage
            .store("saida", "processados/a/b.pcl", b"\x1bE", "application/vnd.hp-pcl")
            .await
            .unwrap();
        assert_eq!(stored.key, "processados/a/b.pcl");
        assert!(stored.location.ends_with("b.pcl"));

        assert!(storage.exists("saida", "processados/a/b.pcl").await.unwrap());
        assert_eq!(
            storage.fetch("saida", "processados/a/b.pcl").await.unwrap(),
            b"\x1bE".to_vec()
        );
    }

    #[tokio::test]
    async fn test_missing_object() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        assert!(!storage.exists("entrada", "nada.csv").await.unwrap());
        assert!(!storage.exists("", "").await.unwrap());
        assert!(matches!(
            storage.fetch("entrada", "nada.csv").await,
            Err(PclError::SourceNotFound { .. })
        ));
    }
}
