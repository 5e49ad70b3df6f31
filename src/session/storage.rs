//! Durable storage for the bearer token: one named slot, present or absent.

use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, instrument};

/// Default slot location relative to the user's home directory.
pub const DEFAULT_TOKEN_PATH: &str = ".storefront/token";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read token slot {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write token slot {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to remove token slot {path}: {source}")]
    Remove { path: PathBuf, source: io::Error },
}

/// A single key/value slot that survives restarts.
pub trait TokenStorage {
    /// Returns the stored token, if any.
    ///
    /// # Errors
    /// Returns an error if the slot exists but cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replaces the stored token.
    ///
    /// # Errors
    /// Returns an error if the slot cannot be written.
    fn save(&mut self, token: &str) -> Result<(), StorageError>;

    /// Deletes the slot. Removing an absent slot succeeds.
    ///
    /// # Errors
    /// Returns an error if an existing slot cannot be removed.
    fn remove(&mut self) -> Result<(), StorageError>;
}

/// Token slot backed by a file.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot under `$HOME`, falling back to the working directory when `HOME` is unset.
    #[must_use]
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map_or_else(PathBuf::new, PathBuf::from)
            .join(DEFAULT_TOKEN_PATH)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStorage for FileTokenStorage {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    #[instrument(skip(self, token), fields(path = %self.path.display()))]
    fn save(&mut self, token: &str) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        write_private(&self.path, token).map_err(write_err)?;
        debug!("token slot written");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn remove(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("token slot removed");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(unix)]
fn write_private(path: &Path, contents: &str) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // `mode` only applies on creation; an older slot may be wider.
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(contents.as_bytes())
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &str) -> io::Result<()> {
    fs::write(path, contents)
}

/// In-process slot, for tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    slot: Option<String>,
}

impl MemoryTokenStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Some(token.into()),
        }
    }

    /// Current slot contents.
    #[must_use]
    pub fn peek(&self) -> Option<String> {
        self.slot.clone()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.peek())
    }

    fn save(&mut self, token: &str) -> Result<(), StorageError> {
        self.slot = Some(token.to_string());
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StorageError> {
        self.slot = None;
        Ok(())
    }
}
