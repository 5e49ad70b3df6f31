//! # Storefront client
//!
//! Client core for the storefront REST backend. The backend owns all business
//! rules; this crate keeps track of who is signed in and decides where a
//! navigation may go.
//!
//! ## Layout
//!
//! - [`session`]: decodes the bearer token into a [`session::Session`] and
//!   persists it through a [`session::TokenStorage`] slot. The
//!   [`session::SessionStore`] is the only writer.
//! - [`routes`]: the static routing table and the route guard. The guard is
//!   UX-only: the API enforces authorization on every call.
//! - [`api`]: the HTTP boundary. Failures are translated into messages fit
//!   for the user.
//! - [`cli`]: the `storefront` command-line front end.

pub mod api;
pub mod cli;
pub mod routes;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
