/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::TOKEN_KEY;
use crate::error::AppError;
use std::collections::HashMap;
use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Storage for the single bearer token of the current user
///
/// Implementations hold at most one token. There is no expiry or refresh:
/// the token stays until [`TokenStore::clear`] is called.
pub trait TokenStore: Send + Sync {
    /// Persists a token, replacing any previous one
    fn save(&self, token: &str) -> Result<(), AppError>;

    /// Reads the stored token, `None` when absent
    fn read(&self) -> Result<Option<String>, AppError>;

    /// Removes the stored token; clearing an empty store is not an error
    fn clear(&self) -> Result<(), AppError>;
}

/// Token store backed by a small JSON file
///
/// The file holds one object keyed by `jwt`. On unix it is created with mode
/// `0600` inside a directory created with mode `0700`.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store persisting to `path`; the file is created on first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, token: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            private_dir_builder().create(parent)?;
        }
        let entries = HashMap::from([(TOKEN_KEY, token)]);
        let mut file = private_file_options().open(&self.path)?;
        restrict_to_owner(&file)?;
        file.write_all(&serde_json::to_vec_pretty(&entries)?)?;
        debug!("Token saved to {}", self.path.display());
        Ok(())
    }

    fn read(&self) -> Result<Option<String>, AppError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut entries: HashMap<String, String> = serde_json::from_slice(&bytes)?;
        Ok(entries.remove(TOKEN_KEY).filter(|t| !t.is_empty()))
    }

    fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Token removed from {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(unix)]
fn private_dir_builder() -> DirBuilder {
    use std::os::unix::fs::DirBuilderExt;
    let mut builder = DirBuilder::new();
    builder.recursive(true).mode(0o700);
    builder
}

#[cfg(not(unix))]
fn private_dir_builder() -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    builder
}

#[cfg(unix)]
fn private_file_options() -> OpenOptions {
    use std::os::unix::fs::OpenOptionsExt;
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true).mode(0o600);
    options
}

#[cfg(not(unix))]
fn private_file_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    options
}

/// Files left by older versions keep their mode on reopen
#[cfg(unix)]
fn restrict_to_owner(file: &File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_to_owner(_file: &File) -> std::io::Result<()> {
    Ok(())
}

/// Token store living only as long as the process
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) -> Result<(), AppError> {
        let mut slot = self.token.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token.to_string());
        Ok(())
    }

    fn read(&self) -> Result<Option<String>, AppError> {
        let slot = self.token.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slot.clone())
    }

    fn clear(&self) -> Result<(), AppError> {
        let mut slot = self.token.lock().unwrap_or_else(|e| e.into_inner());
        *slot = None;
        Ok(())
    }
}
