//! File-backed credential store.
//!
//! Persists the single session credential as `credential.json` under the
//! vitrine config directory. Writes are atomic and the file is restricted
//! to the owning user on Unix.

use std::path::PathBuf;

use async_trait::async_trait;
use vitrine_core::error::{Result, VitrineError};
use vitrine_core::session::credential_store::CredentialStore;
use vitrine_core::session::model::StoredCredential;

use crate::paths::VitrinePaths;
use crate::storage::atomic_json::AtomicJsonFile;

/// Credential store over one JSON file.
pub struct FileCredentialStore {
    file: AtomicJsonFile<StoredCredential>,
}

impl FileCredentialStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Creates a store at the platform default location
    /// (`~/.config/vitrine/credential.json`).
    pub fn at_default_location() -> Result<Self> {
        let path = VitrinePaths::credential_file()
            .map_err(|e| VitrineError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    #[cfg(unix)]
    fn restrict_permissions(&self) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(self.file.path(), permissions)?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn restrict_permissions(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Option<StoredCredential>> {
        self.file.load()
    }

    async fn save(&self, credential: &StoredCredential) -> Result<()> {
        self.file.save(credential)?;
        self.restrict_permissions()?;
        tracing::debug!(path = %self.file.path().display(), "credential persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.file.delete()?;
        tracing::debug!(path = %self.file.path().display(), "credential cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;
    use vitrine_core::session::model::{AuthToken, Role, UserProfile};

    fn credential() -> StoredCredential {
        StoredCredential {
            token: AuthToken::new("tok-123"),
            user: UserProfile {
                id: "usr-1".to_string(),
                email: "admin@vitrine.example".to_string(),
                display_name: "Admin".to_string(),
                role: Role::Admin,
            },
            stored_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("credential.json"));

        assert!(store.load().await.unwrap().is_none());

        let stored = credential();
        store.save(&stored).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_clear_removes_credential() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("credential.json"));

        store.save(&credential()).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        // Clearing an empty store is not an error.
        store.clear().await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_credential_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("credential.json");
        let store = FileCredentialStore::new(path.clone());
        store.save(&credential()).await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
