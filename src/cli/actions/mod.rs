pub mod account;
pub mod admin;
pub mod browse;
pub mod cart;
pub mod orders;
pub mod wishlist;

// Internal "interpreter" for `Action`.
// The match lives in a separate module so `mod.rs` stays small as actions are added.
mod run;

use crate::routes::{navigate, Navigation};
use crate::session::Session;
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum Action {
    Account(account::Args),
    Browse(browse::Args),
    Cart(cart::Args),
    Wishlist(wishlist::Args),
    Orders(orders::Args),
    Admin(admin::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}

/// Run the route guard for the view behind a command; a denial becomes an
/// error naming where the storefront would have sent the user.
pub(crate) fn require_view(session: &Session, path: &str) -> Result<()> {
    match navigate(session, path) {
        Navigation::Render(_) => Ok(()),
        Navigation::Redirect(target) => {
            debug!(path, target, "command refused by route guard");
            Err(anyhow!(
                "{path} is not available for this session (redirected to {target})"
            ))
        }
        Navigation::NotFound => Err(anyhow!("no storefront view at {path}")),
    }
}

/// Customer id of the signed-in user, after the guard for `path` passed.
pub(crate) fn customer_id(session: &Session, path: &str) -> Result<String> {
    require_view(session, path)?;
    session
        .user_id()
        .map(str::to_string)
        .context("session has no user id")
}

pub(crate) fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Read a JSON document from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_json(path: &Path) -> Result<Value> {
    let raw = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}
