use crate::api::ApiError;
use crate::cli::actions::{account, admin, browse, cart, orders, wishlist, Action};
use anyhow::Result;
use reqwest::StatusCode;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
// To add a new action, add a new `Action::*` variant and a corresponding `*::execute` call here.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    let result = match action {
        // A 401 here means wrong credentials, not a stale session.
        Action::Account(args) => return account::execute(args).await,
        Action::Browse(args) => browse::execute(args).await,
        Action::Cart(args) => cart::execute(args).await,
        Action::Wishlist(args) => wishlist::execute(args).await,
        Action::Orders(args) => orders::execute(args).await,
        Action::Admin(args) => admin::execute(args).await,
    };
    result.map_err(explain_rejected_session)
}

/// The guard only sees the decoded claims; the server may still refuse the
/// token, in which case the user has to sign in again.
fn explain_rejected_session(err: anyhow::Error) -> anyhow::Error {
    let status = err.downcast_ref::<ApiError>().and_then(ApiError::status);
    if status == Some(StatusCode::UNAUTHORIZED) {
        err.context("The stored session was not accepted, run `storefront login` again")
    } else {
        err
    }
}
