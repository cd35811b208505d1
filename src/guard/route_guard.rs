//! Effectful route enforcement.
//!
//! [`RouteGuard`] wraps the pure [`evaluate`](super::evaluate) policy for
//! one protected route: it remembers the previous decision and emits a
//! replace navigation only when a denial is newly reached. Checking an
//! unchanged session again emits nothing, so hosts can call
//! [`enforce`](RouteGuard::enforce) on every render without redirect
//! storms.

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::{NavigationRequest, Role, RoutePaths, Session};
use crate::ports::Navigator;

use super::{evaluate, Access};

/// Guards one protected route.
///
/// Construct one guard per route with that route's allowed roles. Drive it
/// either by calling [`enforce`](Self::enforce) with session snapshots or
/// by handing it a session receiver via [`watch`](Self::watch).
pub struct RouteGuard {
    required_roles: Vec<Role>,
    routes: RoutePaths,
    navigator: Arc<dyn Navigator>,
    last_access: Option<Access>,
}

impl RouteGuard {
    /// Creates a guard admitting the given roles (empty = any
    /// authenticated session).
    pub fn new(
        required_roles: Vec<Role>,
        navigator: Arc<dyn Navigator>,
        routes: RoutePaths,
    ) -> Self {
        Self {
            required_roles,
            routes,
            navigator,
            last_access: None,
        }
    }

    /// Evaluates the session without side effects or state updates.
    pub fn decision(&self, session: &Session) -> Access {
        evaluate(&self.required_roles, session)
    }

    /// Evaluates the session and redirects on a newly reached denial.
    ///
    /// Returns the decision so hosts can render (or not) accordingly. At
    /// most one navigation is emitted per decision transition; `Pending`
    /// and `Granted` never navigate.
    pub fn enforce(&mut self, session: &Session) -> Access {
        let access = evaluate(&self.required_roles, session);
        if self.last_access == Some(access) {
            return access;
        }

        if let Access::Denied(reason) = access {
            let path = reason.redirect_path(&self.routes);
            tracing::debug!(?reason, path, "access denied, redirecting");
            self.navigator.navigate(NavigationRequest::replace(path));
        }

        self.last_access = Some(access);
        access
    }

    /// Drives enforcement from a session channel until the sender drops.
    ///
    /// The current value is enforced immediately, then every subsequent
    /// replacement. Intermediate values may be skipped under load; only
    /// the latest session matters for access.
    pub async fn watch(mut self, mut sessions: watch::Receiver<Session>) {
        tracing::debug!(roles = ?self.required_roles, "route guard watching session changes");
        loop {
            let session = sessions.borrow_and_update().clone();
            self.enforce(&session);
            if sessions.changed().await.is_err() {
                tracing::debug!("session channel closed, route guard stopping");
                return;
            }
        }
    }
}

impl std::fmt::Debug for RouteGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteGuard")
            .field("required_roles", &self.required_roles)
            .field("routes", &self.routes)
            .field("last_access", &self.last_access)
            .finish_non_exhaustive()
    }
}
