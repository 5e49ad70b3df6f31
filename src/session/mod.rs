//! Client-side session: who the current user is, derived from the bearer token.
//!
//! The [`SessionStore`] owns both the persisted token slot and the in-memory
//! [`Session`]. The slot is the source of truth on startup; after that every
//! change goes through [`SessionStore::establish`] or [`SessionStore::clear`],
//! which keep the two in step and notify subscribers. No other component
//! mutates the session.

pub mod claims;
pub mod storage;

pub use self::claims::{decode, encode_unsigned, Claims, DecodeError, Role};
pub use self::storage::{FileTokenStorage, MemoryTokenStorage, StorageError, TokenStorage};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Where an admin lands after signing in.
pub const ADMIN_LANDING_PATH: &str = "/Admin/AdminDashboard";
/// Where everyone else lands after signing in.
pub const HOME_PATH: &str = "/";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("token could not be decoded: {0}")]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Successful login or registration payload.
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TokenResponse")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Clone, Debug)]
struct Authenticated {
    token: SecretString,
    claims: Claims,
}

/// Current authentication state. Either every identity field is present
/// (decoded from a token) or none is.
#[derive(Clone, Debug, Default)]
pub struct Session {
    current: Option<Authenticated>,
}

impl Session {
    fn authenticated(token: &str, claims: Claims) -> Self {
        Self {
            current: Some(Authenticated {
                token: SecretString::from(token.to_string()),
                claims,
            }),
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The raw bearer token, for attaching to API calls.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.current
            .as_ref()
            .map(|auth| auth.token.expose_secret())
    }

    #[must_use]
    pub fn claims(&self) -> Option<&Claims> {
        self.current.as_ref().map(|auth| &auth.claims)
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.claims().map(|claims| claims.id.as_str())
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.claims().map(|claims| claims.full_name.as_str())
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.claims().map(|claims| claims.email.as_str())
    }

    #[must_use]
    pub fn phone_number(&self) -> Option<&str> {
        self.claims().map(|claims| claims.phone_number.as_str())
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.claims().map(|claims| &claims.role)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role() == Some(&Role::Admin)
    }

    /// Post-login destination: the admin dashboard for admins, home otherwise.
    #[must_use]
    pub fn landing_path(&self) -> &'static str {
        if self.is_admin() {
            ADMIN_LANDING_PATH
        } else {
            HOME_PATH
        }
    }
}

/// Owner of the session and its persisted token slot.
pub struct SessionStore<S: TokenStorage> {
    storage: S,
    session: Session,
    notify: watch::Sender<Session>,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Rebuild the session from the persisted slot.
    ///
    /// A missing, unreadable or undecodable token yields an empty session;
    /// none of these are errors for the caller.
    #[instrument(skip(storage))]
    pub fn initialize(storage: S) -> Self {
        let session = match storage.load() {
            Ok(Some(token)) => match decode(&token) {
                Ok(claims) => {
                    info!(user_id = %claims.id, role = %claims.role, "restored session");
                    Session::authenticated(&token, claims)
                }
                Err(err) => {
                    warn!("ignoring persisted token: {err}");
                    Session::default()
                }
            },
            Ok(None) => {
                debug!("no persisted token");
                Session::default()
            }
            Err(err) => {
                warn!("could not read persisted token: {err}");
                Session::default()
            }
        };

        let (notify, _) = watch::channel(session.clone());
        Self {
            storage,
            session,
            notify,
        }
    }

    /// Adopt a freshly issued token, from either login or registration.
    ///
    /// The token is decoded before anything is written, so a rejected token
    /// leaves both the slot and the current session untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be decoded or persisted.
    #[instrument(skip(self, response))]
    pub fn establish(&mut self, response: &TokenResponse) -> Result<&Session, SessionError> {
        let claims = decode(&response.token)?;
        self.storage.save(&response.token)?;

        info!(user_id = %claims.id, role = %claims.role, "session established");
        self.replace(Session::authenticated(&response.token, claims));
        Ok(&self.session)
    }

    /// Forget the current user. Clearing an empty session is a no-op.
    ///
    /// The in-memory session is reset even if the slot cannot be removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted slot cannot be removed.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.replace(Session::default());
        self.storage.remove()?;
        debug!("session cleared");
        Ok(())
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Receive every session published by `establish` and `clear`.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.notify.subscribe()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn replace(&mut self, session: Session) {
        self.session = session;
        self.notify.send_replace(self.session.clone());
    }
}
