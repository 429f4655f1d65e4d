//! Auth session: parsing from callback URLs and token responses, and the
//! on-disk copy used when sessions persist between launches.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, TimeZone, Utc};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// File name of the persisted session inside the data directory
pub const SESSION_FILE: &str = "session.json";

/// An authenticated session against the backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    /// Read a session from a callback URL.
    ///
    /// The auth redirect puts its parameters in the fragment
    /// (`#access_token=...&refresh_token=...&expires_in=3600`); the query
    /// string is checked when the fragment has no access token.
    pub fn from_url(url: &Url, now: DateTime<Utc>) -> Option<Self> {
        if let Some(fragment) = url.fragment() {
            let mut scratch = url.clone();
            scratch.set_query(Some(fragment));
            if let Some(session) = Self::from_pairs(scratch.query_pairs(), now) {
                return Some(session);
            }
        }
        Self::from_pairs(url.query_pairs(), now)
    }

    fn from_pairs<'a, I>(pairs: I, now: DateTime<Utc>) -> Option<Self>
    where
        I: Iterator<Item = (std::borrow::Cow<'a, str>, std::borrow::Cow<'a, str>)>,
    {
        let mut access_token = None;
        let mut refresh_token = None;
        let mut token_type = None;
        let mut expires_in = None;
        let mut expires_at = None;

        for (key, value) in pairs {
            match key.as_ref() {
                "access_token" => access_token = Some(value.into_owned()),
                "refresh_token" => refresh_token = Some(value.into_owned()),
                "token_type" => token_type = Some(value.into_owned()),
                "expires_in" => expires_in = value.parse::<i64>().ok(),
                "expires_at" => expires_at = value.parse::<i64>().ok(),
                _ => {}
            }
        }

        let access_token = access_token.filter(|t| !t.is_empty())?;
        Some(Self {
            access_token,
            refresh_token: refresh_token.filter(|t| !t.is_empty()),
            token_type: token_type.unwrap_or_else(default_token_type),
            expires_at: resolve_expiry(expires_at, expires_in, now),
        })
    }

    /// True once the access token's expiry has passed
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// True if the session expires within `margin` of `now`.
    /// Sessions without an expiry never do.
    pub fn expires_within(&self, margin: Duration, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(at) => at - now <= margin,
            None => false,
        }
    }
}

/// Body of the token endpoint's response
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl TokenResponse {
    /// Convert to a session, keeping `previous_refresh` when the response
    /// does not rotate the refresh token
    pub fn into_session(self, previous_refresh: Option<String>, now: DateTime<Utc>) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token.or(previous_refresh),
            token_type: self.token_type.unwrap_or_else(default_token_type),
            expires_at: resolve_expiry(self.expires_at, self.expires_in, now),
        }
    }
}

fn resolve_expiry(
    expires_at: Option<i64>,
    expires_in: Option<i64>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    expires_at
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .or_else(|| {
            expires_in
                .and_then(Duration::try_seconds)
                .and_then(|delta| now.checked_add_signed(delta))
        })
}

/// JSON copy of the current session inside a data directory
#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session, `None` if there is none yet
    pub fn load(&self) -> CoreResult<Option<Session>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the session. On unix the file is readable by its owner only.
    pub fn save(&self, session: &Session) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(session)?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;

        // mode() only applies on creation; tighten a file left by older runs
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }

        file.write_all(&bytes)?;
        file.sync_all()?;
        Ok(())
    }

    /// Remove the stored session; missing file is fine
    pub fn clear(&self) -> CoreResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_fragment_session() {
        let url = Url::parse(
            "autovalue://auth/callback#access_token=abc&refresh_token=def&expires_in=3600&token_type=bearer",
        )
        .unwrap();
        let session = Session::from_url(&url, now()).unwrap();
        assert_eq!(session.access_token, "abc");
        assert_eq!(session.refresh_token.as_deref(), Some("def"));
        assert_eq!(session.token_type, "bearer");
        assert_eq!(session.expires_at, Some(now() + Duration::seconds(3600)));
    }

    #[test]
    fn expires_at_wins_over_expires_in() {
        let url = Url::parse(
            "https://app.example/cb#access_token=abc&expires_at=1700000000&expires_in=10",
        )
        .unwrap();
        let session = Session::from_url(&url, now()).unwrap();
        assert_eq!(session.expires_at, Utc.timestamp_opt(1_700_000_000, 0).single());
    }

    #[test]
    fn falls_back_to_query() {
        let url = Url::parse("https://app.example/cb?access_token=q1&foo=bar").unwrap();
        let session = Session::from_url(&url, now()).unwrap();
        assert_eq!(session.access_token, "q1");
        assert_eq!(session.refresh_token, None);
        assert_eq!(session.expires_at, None);
    }

    #[test]
    fn no_access_token_means_no_session() {
        let url = Url::parse("https://app.example/cb#error=access_denied").unwrap();
        assert!(Session::from_url(&url, now()).is_none());

        let url = Url::parse("https://app.example/cb#access_token=").unwrap();
        assert!(Session::from_url(&url, now()).is_none());
    }

    #[test]
    fn percent_encoded_values_are_decoded() {
        let url = Url::parse("https://app.example/cb#access_token=a%2Bb%3D").unwrap();
        let session = Session::from_url(&url, now()).unwrap();
        assert_eq!(session.access_token, "a+b=");
    }

    #[test]
    fn expiry_margin() {
        let session = Session {
            access_token: "t".into(),
            refresh_token: None,
            token_type: "bearer".into(),
            expires_at: Some(now() + Duration::seconds(30)),
        };
        assert!(session.expires_within(Duration::seconds(60), now()));
        assert!(!session.expires_within(Duration::seconds(10), now()));

        let forever = Session {
            expires_at: None,
            ..session
        };
        assert!(!forever.expires_within(Duration::seconds(60), now()));
        assert!(!forever.is_expired(now()));
    }

    #[test]
    fn expired_at_and_after_expiry() {
        let session = Session {
            access_token: "t".into(),
            refresh_token: None,
            token_type: "bearer".into(),
            expires_at: Some(now()),
        };
        assert!(session.is_expired(now()));
        assert!(session.is_expired(now() + Duration::seconds(1)));
        assert!(!session.is_expired(now() - Duration::seconds(1)));
    }

    #[test]
    fn token_response_keeps_previous_refresh_token() {
        let body = r#"{"access_token":"new","token_type":"bearer","expires_in":60}"#;
        let response: TokenResponse = serde_json::from_str(body).unwrap();
        let session = response.into_session(Some("old-refresh".into()), now());
        assert_eq!(session.access_token, "new");
        assert_eq!(session.refresh_token.as_deref(), Some("old-refresh"));
        assert_eq!(session.expires_at, Some(now() + Duration::seconds(60)));
    }

    #[test]
    fn store_roundtrip_and_clear() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("nested"));
        assert!(store.load().unwrap().is_none());

        let session = Session {
            access_token: "t".into(),
            refresh_token: Some("r".into()),
            token_type: "bearer".into(),
            expires_at: Some(now()),
        };
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn store_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        std::fs::write(store.path(), b"{}").unwrap();
        std::fs::set_permissions(store.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

        let session = Session {
            access_token: "t".into(),
            refresh_token: Some("r".into()),
            token_type: "bearer".into(),
            expires_at: None,
        };
        store.save(&session).unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[test]
    fn corrupt_store_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        std::fs::write(store.path(), b"{not json").unwrap();
        assert!(store.load().is_err());
    }
}
