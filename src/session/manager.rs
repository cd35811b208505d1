//! The session manager - single source of truth for "who is signed in".
//!
//! Owns the [`Session`] snapshot behind a watch channel. Every mutation
//! replaces the whole value, so observers can never catch a session with
//! a token but no claims, and a watch receiver from [`subscribe`] sees
//! each replacement exactly once. Mutating operations serialize through
//! one async lock; reads never block.
//!
//! The lifecycle is deliberately narrow:
//!
//! - [`restore`] runs once at startup and flips `restoration_complete`
//! - [`login`] / [`logout`] move between authenticated and not
//! - a profile fetch whose bearer is refused ends the session locally
//!
//! Nothing here re-validates tokens after restore. The backend does that
//! on every request; the manager only reacts when told no.
//!
//! [`restore`]: SessionManager::restore
//! [`login`]: SessionManager::login
//! [`logout`]: SessionManager::logout
//! [`subscribe`]: SessionManager::subscribe

use std::sync::Arc;

use tokio::sync::{watch, Mutex};

use crate::domain::{
    Claims, LoginCredentials, NavigationRequest, NewOrganization, OrganizationCreated, Profile,
    RegisteredUser, Registration, RoutePaths, Session, SessionError,
};
use crate::ports::{AuthApi, Navigator, TokenDecoder, TokenStore};

/// Fallback messages shown when a rejection carries no usable body.
const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Registration failed";
const CREATE_ORG_FALLBACK: &str = "Organization creation failed";
const PROFILE_FALLBACK: &str = "Could not load profile";

/// Owns the session and exposes the authentication operations.
pub struct SessionManager {
    api: Arc<dyn AuthApi>,
    store: Arc<dyn TokenStore>,
    decoder: Arc<dyn TokenDecoder>,
    navigator: Arc<dyn Navigator>,
    routes: RoutePaths,
    state: watch::Sender<Session>,
    /// Serializes mutating operations. Readers bypass this entirely.
    op_lock: Mutex<()>,
}

impl SessionManager {
    /// Creates a manager starting from the unrestored empty session.
    pub fn new(
        api: Arc<dyn AuthApi>,
        store: Arc<dyn TokenStore>,
        decoder: Arc<dyn TokenDecoder>,
        navigator: Arc<dyn Navigator>,
        routes: RoutePaths,
    ) -> Self {
        let (state, _) = watch::channel(Session::empty());
        Self {
            api,
            store,
            decoder,
            navigator,
            routes,
            state,
            op_lock: Mutex::new(()),
        }
    }

    /// Returns the current session snapshot without blocking.
    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Returns a receiver that observes every session replacement.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Rebuilds the session from the persisted token, then marks
    /// restoration complete.
    ///
    /// Every failure on this path recovers locally: an unreadable store
    /// or an undecodable token yields an unauthenticated session, and a
    /// rejected token is removed from storage so the next start is clean.
    /// Calling again after completion is a no-op.
    pub async fn restore(&self) {
        let _guard = self.op_lock.lock().await;

        if self.state.borrow().restoration_complete() {
            tracing::debug!("session already restored, ignoring repeat restore");
            return;
        }

        let restored = self.restore_from_store().await;
        self.state.send_replace(restored.mark_restored());
    }

    async fn restore_from_store(&self) -> Session {
        let token = match self.store.load().await {
            Ok(token) => token,
            Err(error) => {
                tracing::warn!("could not read persisted token, starting signed out: {}", error);
                return Session::empty();
            }
        };

        let token = match token {
            Some(token) => token,
            None => {
                tracing::debug!("no persisted token, starting signed out");
                return Session::empty();
            }
        };

        match self.decoder.decode(&token) {
            Ok(claims) => {
                tracing::debug!(role = %claims.role, "session restored from persisted token");
                Session::authenticated(token, claims)
            }
            Err(error) => {
                tracing::warn!("persisted token rejected ({}), discarding it", error);
                if let Err(store_error) = self.store.clear().await {
                    tracing::warn!("could not remove rejected token: {}", store_error);
                }
                Session::empty()
            }
        }
    }

    /// Authenticates against the backend and starts a session.
    ///
    /// On success the issued token is decoded, persisted, and installed
    /// atomically, and a replace navigation to the role's dashboard is
    /// emitted. The decoded token decides the role; a differing role in
    /// the response body is logged and ignored. A rejection leaves the
    /// session untouched and carries the backend's message for display.
    pub async fn login(&self, credentials: LoginCredentials) -> Result<Claims, SessionError> {
        let _guard = self.op_lock.lock().await;

        let issued = self.api.login(&credentials).await.map_err(|error| {
            tracing::debug!("login rejected: {}", error);
            SessionError::from_api(error, LOGIN_FALLBACK)
        })?;

        let claims = match self.decoder.decode(&issued.access_token) {
            Ok(claims) => claims,
            Err(error) => {
                tracing::error!("backend issued an unusable token: {}", error);
                return Err(SessionError::Unavailable(format!(
                    "issued token could not be decoded: {error}"
                )));
            }
        };

        if let Some(reported) = issued.role {
            if reported != claims.role {
                tracing::warn!(
                    token_role = %claims.role,
                    reported_role = %reported,
                    "login response role disagrees with the token, trusting the token"
                );
            }
        }

        if let Err(error) = self.store.save(&issued.access_token).await {
            tracing::warn!(
                "could not persist session token, session will not survive a reload: {}",
                error
            );
        }

        let role = claims.role;
        self.replace_session(Session::authenticated(issued.access_token, claims.clone()));
        self.navigator
            .navigate(NavigationRequest::replace(role.dashboard_path()));

        tracing::info!(role = %role, "login succeeded");
        Ok(claims)
    }

    /// Creates a user account. The session is not touched - newly
    /// registered users sign in afterwards.
    pub async fn register(&self, registration: Registration) -> Result<RegisteredUser, SessionError> {
        let _guard = self.op_lock.lock().await;

        let registered = self
            .api
            .register(&registration)
            .await
            .map_err(|error| SessionError::from_api(error, REGISTER_FALLBACK))?;

        tracing::info!(email = %registration.email, role = %registration.role, "registration submitted");
        Ok(registered)
    }

    /// Creates an organization with its first admin account. No session
    /// effect.
    pub async fn register_organization(
        &self,
        organization: NewOrganization,
    ) -> Result<OrganizationCreated, SessionError> {
        let _guard = self.op_lock.lock().await;

        let created = self
            .api
            .create_organization(&organization)
            .await
            .map_err(|error| SessionError::from_api(error, CREATE_ORG_FALLBACK))?;

        tracing::info!(org_name = %organization.org_name, "organization registration submitted");
        Ok(created)
    }

    /// Ends the session unconditionally.
    ///
    /// The backend is notified on a best-effort basis; a failure there is
    /// logged and swallowed. Local state and storage are always cleared,
    /// and a replace navigation to the login path is emitted.
    pub async fn logout(&self) {
        let _guard = self.op_lock.lock().await;

        let bearer = self.state.borrow().token().map(str::to_string);
        if let Err(error) = self.api.logout(bearer.as_deref()).await {
            tracing::warn!("logout notification failed, clearing local session anyway: {}", error);
        }

        self.clear_session_locked().await;
        self.navigator
            .navigate(NavigationRequest::replace(self.routes.login()));

        tracing::info!("logged out");
    }

    /// Fetches the signed-in user's profile.
    ///
    /// A 401/403 that survives the transport's refresh retry means the
    /// session is dead: local state and storage are cleared, a replace
    /// navigation to login is emitted, and `SessionError::Expired` is
    /// returned as a statement of fact rather than something to handle.
    pub async fn fetch_profile(&self) -> Result<Profile, SessionError> {
        let _guard = self.op_lock.lock().await;

        let bearer = match self.state.borrow().token() {
            Some(token) => token.to_string(),
            None => return Err(SessionError::NotAuthenticated),
        };

        match self.api.fetch_profile(&bearer).await {
            Ok(profile) => Ok(profile),
            Err(error) if error.is_auth_rejection() => {
                tracing::warn!("bearer token no longer accepted, ending session");
                self.clear_session_locked().await;
                self.navigator
                    .navigate(NavigationRequest::replace(self.routes.login()));
                Err(SessionError::Expired)
            }
            Err(error) => Err(SessionError::from_api(error, PROFILE_FALLBACK)),
        }
    }

    /// Clears storage and installs the empty session. Callers hold the
    /// operation lock.
    async fn clear_session_locked(&self) {
        if let Err(error) = self.store.clear().await {
            tracing::warn!("could not remove persisted token: {}", error);
        }
        self.replace_session(Session::empty());
    }

    /// Installs `next`, carrying the restoration flag forward. Restoration
    /// completes exactly once; no later replacement may undo it.
    fn replace_session(&self, next: Session) {
        let restored = self.state.borrow().restoration_complete();
        let next = if restored { next.mark_restored() } else { next };
        self.state.send_replace(next);
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("routes", &self.routes)
            .field("session", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
