//! Pure access policy for protected routes.
//!
//! [`evaluate`] maps a session snapshot and a route's allowed roles to an
//! [`Access`] decision. No effects here: navigation happens in
//! [`RouteGuard`](super::RouteGuard), which reacts to decision changes.
//!
//! This gate is a UX convenience. The decision rests on locally decoded,
//! unverified claims, so it can only keep honest users off pages that
//! would greet them with backend errors; the backend authorizes every
//! actual request.

use crate::domain::{Role, RoutePaths, Session};

/// Outcome of evaluating a session against a protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Restoration has not completed. Render nothing and wait; redirecting
    /// now would bounce users with a perfectly good persisted token.
    Pending,
    /// The session may use the route.
    Granted,
    /// The session may not use the route.
    Denied(DenialReason),
}

impl Access {
    /// Whether the route's content should render.
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted)
    }

    /// Whether the decision is still waiting on restoration.
    pub fn is_pending(&self) -> bool {
        matches!(self, Access::Pending)
    }
}

/// Why a session was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// No authenticated session.
    Unauthenticated,
    /// Authenticated, but the role is not in the route's allowed set.
    RoleNotAllowed {
        /// The role the session actually holds.
        role: Role,
    },
}

impl DenialReason {
    /// The path this denial redirects to under the given route paths.
    ///
    /// Unauthenticated sessions go to login. Wrong-role sessions go to the
    /// unauthorized destination, which itself falls back to login when no
    /// dedicated page is configured.
    pub fn redirect_path<'r>(&self, routes: &'r RoutePaths) -> &'r str {
        match self {
            DenialReason::Unauthenticated => routes.login(),
            DenialReason::RoleNotAllowed { .. } => routes.unauthorized(),
        }
    }
}

/// Evaluates a session against a route's allowed roles.
///
/// An empty `required_roles` list admits any authenticated session; a
/// non-empty list admits exactly its members. Until restoration completes
/// the answer is always [`Access::Pending`], whatever the snapshot holds.
pub fn evaluate(required_roles: &[Role], session: &Session) -> Access {
    if !session.restoration_complete() {
        return Access::Pending;
    }

    let role = match session.role() {
        Some(role) => role,
        None => return Access::Denied(DenialReason::Unauthenticated),
    };

    if required_roles.is_empty() || required_roles.contains(&role) {
        Access::Granted
    } else {
        Access::Denied(DenialReason::RoleNotAllowed { role })
    }
}
