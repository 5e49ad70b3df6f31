//! Route guard: decides whether a navigation renders or redirects.
//!
//! UX-only; the API re-checks authorization on every call. Denials are
//! communicated by where the user lands, never by an error.

use super::{resolve, RouteMatch};
use crate::session::{Role, Session, HOME_PATH};
use tracing::debug;

/// Login entry point for unauthenticated visitors.
pub const LOGIN_PATH: &str = "/Login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    DeniedUnauthenticated,
    DeniedForbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectTo(&'static str),
}

impl Access {
    #[must_use]
    pub const fn decision(self) -> Decision {
        match self {
            Self::Allowed => Decision::Allow,
            Self::DeniedUnauthenticated => Decision::RedirectTo(LOGIN_PATH),
            Self::DeniedForbidden => Decision::RedirectTo(HOME_PATH),
        }
    }
}

/// Evaluate access to a protected view for the current session.
#[must_use]
pub fn evaluate(session: &Session, admin_only: bool) -> Access {
    if !session.is_authenticated() {
        return Access::DeniedUnauthenticated;
    }
    if admin_only && session.role() != Some(&Role::Admin) {
        return Access::DeniedForbidden;
    }
    Access::Allowed
}

/// Outcome of a full navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(RouteMatch),
    Redirect(&'static str),
    NotFound,
}

/// Resolve `path` and apply the guard of the matched route.
#[must_use]
pub fn navigate(session: &Session, path: &str) -> Navigation {
    let Some(matched) = resolve(path) else {
        debug!(path, "no route");
        return Navigation::NotFound;
    };

    let protection = matched.route.protection;
    if protection.is_protected() {
        if let Decision::RedirectTo(target) =
            evaluate(session, protection.admin_only()).decision()
        {
            debug!(path, target, "navigation denied");
            return Navigation::Redirect(target);
        }
    }

    match matched.route.redirect {
        Some(target) => Navigation::Redirect(target),
        None => Navigation::Render(matched),
    }
}
