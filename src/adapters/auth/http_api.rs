//! HTTP adapter for the auth backend REST API.
//!
//! This adapter implements the `AuthApi` port over reqwest. It speaks the
//! backend's JSON contract:
//!
//! 1. Every endpoint is a POST; the backend routes no other verb. The
//!    profile fetch posts an empty JSON object
//! 2. Anonymous endpoints (login, register, organization creation) POST a
//!    JSON body and report rejections verbatim
//! 3. Bearer-carrying endpoints (profile, logout) run the 401 recovery
//!    dance: one refresh against `/api/auth/refresh`, one retry with the
//!    fresh token, and the original rejection if the refresh fails
//! 4. Every error body is mined for its `message` field so the UI can
//!    show what the backend said
//!
//! The refresh call rides on the HTTP-only refresh cookie, so the client
//! is built with its cookie store enabled.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use orgboard_session::adapters::auth::{HttpApiConfig, HttpAuthApi};
//! use orgboard_session::ports::AuthApi;
//!
//! let config = HttpApiConfig::new("https://api.orgboard.example");
//! let api = HttpAuthApi::new(config);
//! let issued = api.login(&credentials).await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    ApiError, IssuedToken, LoginCredentials, NewOrganization, OrganizationCreated, Profile,
    RegisteredUser, Registration,
};
use crate::ports::{AuthApi, TokenStore};

use super::dto::{
    ApiErrorBody, CreateOrganizationRequest, LoginRequest, LoginResponse, RefreshResponse,
    RegisterRequest,
};

/// Endpoint paths, relative to the configured base URL.
const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";
const REFRESH_PATH: &str = "/api/auth/refresh";
const LOGOUT_PATH: &str = "/api/auth/logout";
const PROFILE_PATH: &str = "/api/users/me";
const CREATE_ORG_PATH: &str = "/api/org/create";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the HTTP auth adapter.
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// Base URL of the auth backend (e.g., "https://api.orgboard.example").
    pub base_url: String,

    /// Per-request timeout. Defaults to 10 seconds if not specified.
    pub timeout: Option<Duration>,
}

impl HttpApiConfig {
    /// Create a new configuration with required fields.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Set a custom per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Join an endpoint path onto the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Production implementation of `AuthApi` over HTTP.
pub struct HttpAuthApi {
    config: HttpApiConfig,
    http_client: reqwest::Client,
    token_store: Option<Arc<dyn TokenStore>>,
}

impl HttpAuthApi {
    /// Create a new HTTP auth adapter.
    pub fn new(config: HttpApiConfig) -> Self {
        let timeout = config.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
            token_store: None,
        }
    }

    /// Persist tokens obtained through the 401 refresh dance into `store`,
    /// so a refreshed session survives a reload. Without this, refreshed
    /// tokens live only for the retried request.
    pub fn with_token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    /// Send one request. Transport failures map to `ApiError::Network`;
    /// the response comes back regardless of status.
    async fn send(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = self
            .http_client
            .request(method, self.config.url(path))
            .header("x-request-id", Uuid::new_v4().to_string());
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request.send().await.map_err(|e| {
            tracing::error!("auth backend unreachable at {}: {}", path, e);
            ApiError::Network(e.to_string())
        })
    }

    /// POST to an anonymous endpoint and parse the success body.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, None, Some(body)).await?;
        let response = Self::into_success(response).await?;
        Self::parse_body(response).await
    }

    /// Send a bearer-carrying request, running the 401 recovery dance.
    /// The same `body` goes out on the retry.
    ///
    /// On a 401, the original rejection is captured first (reading the
    /// error body consumes the response), then one refresh is attempted.
    /// A fresh token retries the request once; a failed refresh surfaces
    /// the captured rejection.
    async fn authorized<B>(
        &self,
        method: Method,
        path: &str,
        bearer: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let response = self
            .send(method.clone(), path, Some(bearer), body)
            .await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        let original = Self::rejection(response).await;
        match self.refresh_access_token().await {
            Ok(fresh) => {
                tracing::debug!("access token refreshed, retrying {}", path);
                self.send(method, path, Some(&fresh), body).await
            }
            Err(refresh_error) => {
                tracing::warn!(
                    "token refresh failed ({}), surfacing original rejection for {}",
                    refresh_error,
                    path
                );
                Err(original)
            }
        }
    }

    /// Exchange the refresh cookie for a fresh access token.
    ///
    /// Never recurses into the recovery dance: a 401 here means the
    /// refresh credential itself is gone.
    async fn refresh_access_token(&self) -> Result<String, ApiError> {
        let response = self.send(Method::POST, REFRESH_PATH, None, None::<&()>).await?;
        let response = Self::into_success(response).await?;
        let body: RefreshResponse = Self::parse_body(response).await?;

        if let Some(store) = &self.token_store {
            if let Err(error) = store.save(&body.access_token).await {
                tracing::warn!("failed to persist refreshed token: {}", error);
            }
        }

        Ok(body.access_token)
    }

    /// Pass successful responses through; turn the rest into rejections.
    async fn into_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::rejection(response).await)
        }
    }

    /// Build an `ApiError::Rejected` from a non-success response, mining
    /// the JSON body for its `message` field.
    async fn rejection(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        match message {
            Some(message) => ApiError::rejected(status, message),
            None => ApiError::rejected_without_message(status),
        }
    }

    /// Parse a success body, mapping parse failures to `InvalidResponse`.
    async fn parse_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            tracing::error!("failed to parse auth backend response: {}", e);
            ApiError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedToken, ApiError> {
        tracing::debug!(email = %credentials.email, "logging in");
        let response: LoginResponse = self
            .post_json(LOGIN_PATH, &LoginRequest::from_credentials(credentials))
            .await?;
        let role = response.parsed_role();
        Ok(IssuedToken {
            access_token: response.access_token,
            role,
        })
    }

    async fn register(&self, registration: &Registration) -> Result<RegisteredUser, ApiError> {
        tracing::debug!(email = %registration.email, role = %registration.role, "registering user");
        self.post_json(
            REGISTER_PATH,
            &RegisterRequest::from_registration(registration),
        )
        .await
    }

    async fn create_organization(
        &self,
        organization: &NewOrganization,
    ) -> Result<OrganizationCreated, ApiError> {
        tracing::debug!(org_name = %organization.org_name, "creating organization");
        self.post_json(
            CREATE_ORG_PATH,
            &CreateOrganizationRequest::from_organization(organization),
        )
        .await
    }

    async fn logout(&self, bearer: Option<&str>) -> Result<(), ApiError> {
        tracing::debug!("notifying backend of logout");
        let response = match bearer {
            Some(token) => {
                self.authorized(Method::POST, LOGOUT_PATH, token, None::<&()>)
                    .await?
            }
            None => self.send(Method::POST, LOGOUT_PATH, None, None::<&()>).await?,
        };
        Self::into_success(response).await?;
        Ok(())
    }

    async fn fetch_profile(&self, bearer: &str) -> Result<Profile, ApiError> {
        let body = serde_json::json!({});
        let response = self
            .authorized(Method::POST, PROFILE_PATH, bearer, Some(&body))
            .await?;
        let response = Self::into_success(response).await?;
        Self::parse_body(response).await
    }
}

impl std::fmt::Debug for HttpAuthApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAuthApi")
            .field("base_url", &self.config.base_url)
            .field("persists_refreshed_tokens", &self.token_store.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn config_joins_paths_onto_base_url() {
        let config = HttpApiConfig::new("https://api.example.com");
        assert_eq!(
            config.url(LOGIN_PATH),
            "https://api.example.com/api/auth/login"
        );
    }

    #[test]
    fn config_handles_trailing_slash() {
        let config = HttpApiConfig::new("https://api.example.com/");
        assert_eq!(
            config.url(PROFILE_PATH),
            "https://api.example.com/api/users/me"
        );
    }

    #[test]
    fn config_with_custom_timeout() {
        let config =
            HttpApiConfig::new("https://api.example.com").with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Type Safety Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn http_auth_api_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpAuthApi>();
    }

    #[test]
    fn debug_output_omits_internals() {
        let api = HttpAuthApi::new(HttpApiConfig::new("https://api.example.com"));
        let debug = format!("{api:?}");
        assert!(debug.contains("api.example.com"));
        assert!(debug.contains("persists_refreshed_tokens: false"));
    }
}
