//! Backend client bootstrap.
//!
//! One [`BackendClient`] is built per process from a [`BackendConfig`] and
//! published through [`init_backend`]. Everything else reads it through
//! [`backend`]. The only state that changes after construction is the
//! current session.

use std::path::Path;
use std::sync::{Arc, OnceLock};
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use reqwest::{Method, RequestBuilder, StatusCode, Url};

use crate::config::{AuthOptions, BackendConfig};
use crate::error::{BackendError, CoreResult};
use crate::session::{Session, SessionStore, TokenResponse};

/// Refresh this long before the access token expires
pub const REFRESH_MARGIN_SECS: i64 = 60;

/// How often the auto-refresh loop checks the session
pub const REFRESH_TICK_SECS: u64 = 30;

static BACKEND: OnceLock<Arc<BackendClient>> = OnceLock::new();

/// Build the process-wide client. Fails if it already exists.
pub fn init_backend(
    config: BackendConfig,
    data_dir: impl AsRef<Path>,
) -> CoreResult<Arc<BackendClient>> {
    if BACKEND.get().is_some() {
        return Err(BackendError::AlreadyInitialized);
    }
    let client = Arc::new(BackendClient::new(config, data_dir)?);
    BACKEND
        .set(client.clone())
        .map_err(|_| BackendError::AlreadyInitialized)?;
    tracing::info!(url = %client.config().url, "Backend client initialized");
    Ok(client)
}

/// The process-wide client, if [`init_backend`] has run
pub fn backend() -> Option<Arc<BackendClient>> {
    BACKEND.get().cloned()
}

/// Handle to the hosted backend (REST + auth endpoints)
pub struct BackendClient {
    http: reqwest::Client,
    config: BackendConfig,
    store: Option<SessionStore>,
    session: RwLock<Option<Session>>,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("url", &self.config.url)
            .field("auth", &self.config.auth)
            .field("logged_in", &self.is_logged_in())
            .finish_non_exhaustive()
    }
}

impl BackendClient {
    /// Build a client.
    ///
    /// With `persist_session` on, a session saved under `data_dir` by an
    /// earlier run is picked up. An unreadable session file is logged and
    /// ignored.
    pub fn new(config: BackendConfig, data_dir: impl AsRef<Path>) -> CoreResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(StdDuration::from_secs(config.request_timeout_secs))
            .connect_timeout(StdDuration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;

        let store = config
            .auth
            .persist_session
            .then(|| SessionStore::new(data_dir));

        let session = match &store {
            Some(store) => match store.load() {
                Ok(session) => {
                    if session.is_some() {
                        tracing::debug!(path = ?store.path(), "Restored persisted session");
                    }
                    session
                }
                Err(e) => {
                    tracing::warn!(path = ?store.path(), "Ignoring unreadable session: {}", e);
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            http,
            config,
            store,
            session: RwLock::new(session),
        })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub fn auth_options(&self) -> AuthOptions {
        self.config.auth
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    /// Signed in with a session that is still valid or can be refreshed
    pub fn is_logged_in(&self) -> bool {
        self.session
            .read()
            .as_ref()
            .is_some_and(|s| self.is_live(s, Utc::now()))
    }

    fn is_live(&self, session: &Session, now: DateTime<Utc>) -> bool {
        !session.is_expired(now)
            || (self.config.auth.auto_refresh_token && session.refresh_token.is_some())
    }

    /// Absolute URL for a path relative to the project root
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.url, path.trim_start_matches('/'))
    }

    /// Start a request carrying the API key and bearer token.
    ///
    /// The bearer is the session's access token while it is unexpired,
    /// otherwise the anon key.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let now = Utc::now();
        let bearer = self
            .session
            .read()
            .as_ref()
            .filter(|s| !s.is_expired(now))
            .map(|s| s.access_token.clone())
            .unwrap_or_else(|| self.config.anon_key.clone());

        self.http
            .request(method, self.endpoint(path))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(bearer)
    }

    /// `GET rest/v1/{table}`
    pub fn rest(&self, table: &str) -> RequestBuilder {
        self.request(Method::GET, &format!("rest/v1/{}", table.trim_matches('/')))
    }

    /// Replace the current session, writing it to disk when persisting
    pub fn set_session(&self, session: Session) -> CoreResult<()> {
        let mut slot = self.session.write();
        if let Some(store) = &self.store {
            store.save(&session)?;
        }
        *slot = Some(session);
        Ok(())
    }

    /// Take a session from a callback URL.
    ///
    /// Returns `Ok(None)` when `detect_session_in_url` is off or the URL
    /// carries no access token.
    pub fn recover_session_from_url(&self, url: &Url) -> CoreResult<Option<Session>> {
        if !self.config.auth.detect_session_in_url {
            tracing::debug!("Session detection in URL disabled, skipping");
            return Ok(None);
        }
        match Session::from_url(url, Utc::now()) {
            Some(session) => {
                self.set_session(session.clone())?;
                tracing::info!("Recovered session from callback URL");
                Ok(Some(session))
            }
            None => {
                tracing::debug!("Callback URL carries no session");
                Ok(None)
            }
        }
    }

    /// True when auto refresh is on and the session is about to expire
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        if !self.config.auth.auto_refresh_token {
            return false;
        }
        self.session.read().as_ref().is_some_and(|s| {
            s.refresh_token.is_some() && s.expires_within(Duration::seconds(REFRESH_MARGIN_SECS), now)
        })
    }

    /// Exchange the refresh token for a new session.
    ///
    /// The result is only installed if the session still holds the refresh
    /// token that was sent; a sign-out or a newer session during the
    /// request wins and [`BackendError::SessionChanged`] is returned. A
    /// rejected token (400 or 401) ends the session.
    pub async fn refresh_session(&self) -> CoreResult<Session> {
        let refresh_token = self
            .session
            .read()
            .as_ref()
            .and_then(|s| s.refresh_token.clone())
            .ok_or(BackendError::NotSignedIn)?;

        let response = self
            .http
            .post(self.endpoint("auth/v1/token"))
            .query(&[("grant_type", "refresh_token")])
            .header("apikey", &self.config.anon_key)
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            if matches!(status, StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED) {
                self.end_rejected_session(&refresh_token);
            }
            return Err(BackendError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        let session = token.into_session(Some(refresh_token.clone()), Utc::now());

        let mut slot = self.session.write();
        if !holds_refresh_token(slot.as_ref(), &refresh_token) {
            tracing::debug!("Session changed during refresh, dropping new tokens");
            return Err(BackendError::SessionChanged);
        }
        if let Some(store) = &self.store {
            store.save(&session)?;
        }
        *slot = Some(session.clone());
        drop(slot);

        tracing::debug!(expires_at = ?session.expires_at, "Session refreshed");
        Ok(session)
    }

    /// Drop the session after the backend refused its refresh token,
    /// unless it has been replaced meanwhile
    fn end_rejected_session(&self, refresh_token: &str) {
        let mut slot = self.session.write();
        if !holds_refresh_token(slot.as_ref(), refresh_token) {
            return;
        }
        *slot = None;
        if let Some(store) = &self.store {
            if let Err(e) = store.clear() {
                tracing::warn!(path = ?store.path(), "Failed to remove session file: {}", e);
            }
        }
        drop(slot);
        tracing::warn!("Refresh token rejected, signed out");
    }

    /// Keep the session fresh until the task is dropped.
    ///
    /// Every tick refreshes the session if [`needs_refresh`] says so, then
    /// hands the current [`is_logged_in`] state to `on_tick`. Failed
    /// refreshes are logged and retried on the next tick.
    ///
    /// [`needs_refresh`]: BackendClient::needs_refresh
    /// [`is_logged_in`]: BackendClient::is_logged_in
    pub async fn run_auto_refresh(&self, mut on_tick: impl FnMut(bool)) {
        let mut ticker = tokio::time::interval(StdDuration::from_secs(REFRESH_TICK_SECS));
        loop {
            ticker.tick().await;
            if self.needs_refresh(Utc::now()) {
                match self.refresh_session().await {
                    Ok(_) | Err(BackendError::SessionChanged) => {}
                    Err(e) => tracing::warn!("Session refresh failed: {}", e),
                }
            }
            on_tick(self.is_logged_in());
        }
    }

    /// Drop the session in memory and on disk
    pub fn sign_out(&self) -> CoreResult<()> {
        let mut slot = self.session.write();
        *slot = None;
        if let Some(store) = &self.store {
            store.clear()?;
        }
        drop(slot);
        tracing::info!("Signed out");
        Ok(())
    }
}

fn holds_refresh_token(session: Option<&Session>, refresh_token: &str) -> bool {
    session.and_then(|s| s.refresh_token.as_deref()) == Some(refresh_token)
}
