use std::path::{Path, PathBuf};
use tokio::fs;

const TOKEN_FILE: &str = "token";

/// Persists the session bearer token under a fixed file name in the client
/// data directory, so a restart can resume the session.
#[derive(Debug, Clone)]
pub struct TokenStore {
    base_path: PathBuf,
}

impl TokenStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self { base_path: base_path.as_ref().to_path_buf() }
    }

    fn token_path(&self) -> PathBuf { self.base_path.join(TOKEN_FILE) }

    /// Returns the stored token, or `None` when none was persisted. An
    /// empty or whitespace-only file counts as no token.
    pub async fn load(&self) -> Option<String> {
        let content = fs::read_to_string(self.token_path()).await.ok()?;
        let token = content.trim();
        if token.is_empty() { None } else { Some(String::from(token)) }
    }

    pub async fn save(&self, token: &str) -> Result<(), std::io::Error> {
        fs::create_dir_all(&self.base_path).await?;
        fs::write(self.token_path(), token).await
    }

    /// Removes the persisted token. Removing an already-absent token is not
    /// an error.
    pub async fn discard(&self) -> Result<(), std::io::Error> {
        match fs::remove_file(self.token_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_returns_none_without_a_saved_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path());
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn save_load_discard_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path());
        store.save("abc").await.unwrap();
        assert_eq!(store.load().await, Some(String::from("abc")));
        store.discard().await.unwrap();
        assert_eq!(store.load().await, None);
        store.discard().await.unwrap();
    }

    #[tokio::test]
    async fn whitespace_only_token_counts_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path());
        store.save("  \n").await.unwrap();
        assert_eq!(store.load().await, None);
    }
}
