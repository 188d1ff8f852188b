//! File-backed token store.
//!
//! The persisted state is a single opaque token string at a fixed path.
//! Absence of the file means "no session to restore".

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::ports::{TokenStore, TokenStoreError};

/// Token store reading and writing one file.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Build a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store persists to.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_owned()))
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(TokenStoreError::storage(format!(
                "reading {} failed: {err}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| {
                    TokenStoreError::storage(format!(
                        "creating {} failed: {err}",
                        parent.display()
                    ))
                })?;
            }
        }
        std::fs::write(&self.path, token).map_err(|err| {
            TokenStoreError::storage(format!("writing {} failed: {err}", self.path.display()))
        })
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(TokenStoreError::storage(format!(
                "removing {} failed: {err}",
                self.path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Round-trip coverage against a temporary directory.

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> FileTokenStore {
        FileTokenStore::new(dir.path().join("state").join("token"))
    }

    #[rstest]
    fn missing_file_means_no_session() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        assert_eq!(store.load().expect("load succeeds"), None);
    }

    #[rstest]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        store.save("tok-123").expect("save succeeds");
        assert_eq!(
            store.load().expect("load succeeds").as_deref(),
            Some("tok-123")
        );
    }

    #[rstest]
    fn clear_is_idempotent() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        store.save("tok-123").expect("save succeeds");
        store.clear().expect("first clear succeeds");
        store.clear().expect("second clear succeeds");
        assert_eq!(store.load().expect("load succeeds"), None);
    }

    #[rstest]
    fn blank_file_means_no_session() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        store.save("   \n").expect("save succeeds");
        assert_eq!(store.load().expect("load succeeds"), None);
    }
}
