use crate::api::ApiClient;
use crate::cli::commands::client::Options;
use crate::session::{FileTokenStorage, Session, SessionStore};
use anyhow::{Context, Result};
use std::{path::PathBuf, time::Duration};

/// Settings shared by every action.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub session_file: PathBuf,
    pub timeout: Duration,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            api_url: options.api_url,
            session_file: options
                .session_file
                .unwrap_or_else(FileTokenStorage::default_path),
            timeout: options.timeout,
        }
    }

    /// Restore the persisted session.
    #[must_use]
    pub fn session_store(&self) -> SessionStore<FileTokenStorage> {
        SessionStore::initialize(FileTokenStorage::new(&self.session_file))
    }

    /// API client carrying the session's bearer token, if any.
    ///
    /// # Errors
    /// Returns an error if the API URL is invalid.
    pub fn client(&self, session: &Session) -> Result<ApiClient> {
        let client = ApiClient::new(&self.api_url, self.timeout)
            .with_context(|| format!("invalid API URL: {}", self.api_url))?;
        Ok(client.with_bearer(session.token()))
    }
}
