use super::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, TokenStore};
use crate::APP_DIR_NAME;
use crate::error::TokenStoreError;

use common::{ErrorLocation, RedactedToken};
use models::CredentialPair;

use std::collections::BTreeMap;
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, info};

const TOKENS_FILE_NAME: &str = "tokens.json";
#[cfg(unix)]
const TOKENS_FILE_MODE: u32 = 0o600;

/// Persistent token store backed by a small JSON key-value file.
///
/// The file holds string entries keyed by [`ACCESS_TOKEN_KEY`] and
/// [`REFRESH_TOKEN_KEY`]; other keys are preserved untouched. A missing file
/// means unauthenticated. Writes go through a temp file and rename, and on
/// Unix the file is readable by its owner only.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

type Entries = BTreeMap<String, String>;

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    /// Store `tokens.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(TOKENS_FILE_NAME))
    }

    /// Store `tokens.json` in the platform config directory.
    #[track_caller]
    pub fn in_config_dir() -> Result<Self, TokenStoreError> {
        let dir = dirs::config_dir().ok_or_else(|| TokenStoreError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(Self::in_dir(&dir.join(APP_DIR_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, TokenStoreError> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| TokenStoreError::Read {
                location: ErrorLocation::from(Location::caller()),
                path: self.path.clone(),
                source: e,
            })?;

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&contents).map_err(|e| TokenStoreError::Parse {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), TokenStoreError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| TokenStoreError::Write {
                location: ErrorLocation::from(Location::caller()),
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| TokenStoreError::Parse {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let temp_path = self.path.with_extension("json.tmp");

        write_owner_only(&temp_path, json.as_bytes()).map_err(|e| TokenStoreError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| TokenStoreError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }

    fn read_token(&self, key: &str) -> Result<Option<RedactedToken>, TokenStoreError> {
        let mut entries = self.read_entries()?;
        Ok(entries
            .remove(key)
            .filter(|value| !value.trim().is_empty())
            .map(RedactedToken::new))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>, TokenStoreError> {
        self.write_guard.lock().map_err(|e| TokenStoreError::Lock {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })
    }
}

/// Write `contents` to `path`, readable and writable by the owner only on Unix.
fn write_owner_only(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(TOKENS_FILE_MODE);
    }

    let mut file = options.open(path)?;

    // `mode` only applies on creation; a leftover temp file keeps its old bits
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(TOKENS_FILE_MODE))?;
    }

    file.write_all(contents)?;
    file.sync_all()
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> Result<Option<RedactedToken>, TokenStoreError> {
        self.read_token(ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Result<Option<RedactedToken>, TokenStoreError> {
        self.read_token(REFRESH_TOKEN_KEY)
    }

    fn set_tokens(&self, credentials: &CredentialPair) -> Result<(), TokenStoreError> {
        let _guard = self.lock()?;
        let mut entries = self.read_entries()?;

        entries.insert(
            ACCESS_TOKEN_KEY.to_string(),
            credentials.access_token().as_str().to_string(),
        );
        if let Some(refresh) = credentials.refresh_token() {
            entries.insert(REFRESH_TOKEN_KEY.to_string(), refresh.as_str().to_string());
        }

        self.write_entries(&entries)?;
        debug!(
            "Stored credentials in {} (refresh token: {})",
            self.path.display(),
            credentials.has_refresh_token()
        );
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        let _guard = self.lock()?;
        if !self.path.exists() {
            return Ok(());
        }

        let mut entries = self.read_entries()?;
        let had_tokens = entries.remove(ACCESS_TOKEN_KEY).is_some()
            | entries.remove(REFRESH_TOKEN_KEY).is_some();

        if had_tokens {
            self.write_entries(&entries)?;
            info!("Cleared stored credentials in {}", self.path.display());
        }
        Ok(())
    }
}
