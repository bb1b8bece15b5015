//! Client-side credential storage
//!
//! The session holds the two values every request depends on: the bearer
//! `access_token` and the `current_user` record captured at login. Clients
//! receive a [`CredentialStore`] at construction instead of reaching for
//! ambient storage, so tests can swap in an in-memory store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{Config, write_private};
use crate::error::{ConfigError, Result};

/// Persisted session state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user: Option<CurrentUser>,
}

/// The signed-in user, as far as the token tells us
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Token expiry, when the token carries an `exp` claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl CurrentUser {
    /// Read the user claims out of a JWT access token.
    ///
    /// Returns `None` for opaque (non-JWT) tokens. The signature is not
    /// checked; the backend does that on every request.
    pub fn from_token(token: &str) -> Option<Self> {
        use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

        #[derive(Deserialize)]
        struct Claims {
            sub: Option<serde_json::Value>,
            email: Option<String>,
            #[serde(alias = "full_name")]
            name: Option<String>,
            role: Option<String>,
            exp: Option<i64>,
        }

        let mut parts = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };

        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        let claims: Claims = serde_json::from_slice(&bytes).ok()?;

        Some(Self {
            id: claims.sub.map(|sub| match sub {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            }),
            email: claims.email,
            name: claims.name,
            role: claims.role,
            expires_at: claims.exp.and_then(|exp| DateTime::from_timestamp(exp, 0)),
        })
    }

    /// Whether the token's `exp` claim is in the past
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| exp <= Utc::now())
    }
}

/// Source of request credentials.
///
/// `clear` must be idempotent: several in-flight requests may hit an auth
/// failure at the same time and each of them clears the store.
pub trait CredentialStore: Send + Sync {
    /// Bearer token for the next request
    fn access_token(&self) -> Result<Option<String>>;

    /// User record captured at login
    fn current_user(&self) -> Result<Option<CurrentUser>>;

    /// Replace the stored session
    fn store(&self, session: &Session) -> Result<()>;

    /// Forget both the token and the user record
    fn clear(&self) -> Result<()>;
}

/// Session persisted as YAML next to the config file
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Use the session file at `path`, or `~/.fleetop/session.yaml`
    pub fn at(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => Config::home_dir()?.join("session.yaml"),
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load the session; a missing file is an empty session
    pub fn load(&self) -> Result<Session> {
        if !self.path.exists() {
            return Ok(Session::default());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let session = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(session)
    }
}

impl CredentialStore for SessionFile {
    fn access_token(&self) -> Result<Option<String>> {
        Ok(self
            .load()?
            .access_token
            .filter(|token| !token.trim().is_empty()))
    }

    fn current_user(&self) -> Result<Option<CurrentUser>> {
        Ok(self.load()?.current_user)
    }

    fn store(&self, session: &Session) -> Result<()> {
        let contents =
            serde_yaml::to_string(session).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        write_private(&self.path, &contents)
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("Removed session file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory credential store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySession {
    session: std::sync::Mutex<Session>,
    clears: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl MemorySession {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        let session = Session {
            access_token: Some(token.to_string()),
            current_user: Some(CurrentUser {
                email: Some("dispatcher@example.com".to_string()),
                role: Some("dispatcher".to_string()),
                ..Default::default()
            }),
        };
        *store.session.lock().unwrap() = session;
        store
    }

    /// Number of times `clear` was called
    pub fn clear_count(&self) -> usize {
        self.clears.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl CredentialStore for MemorySession {
    fn access_token(&self) -> Result<Option<String>> {
        Ok(self.session.lock().unwrap().access_token.clone())
    }

    fn current_user(&self) -> Result<Option<CurrentUser>> {
        Ok(self.session.lock().unwrap().current_user.clone())
    }

    fn store(&self, session: &Session) -> Result<()> {
        *self.session.lock().unwrap() = session.clone();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.clears.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        *self.session.lock().unwrap() = Session::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
    use tempfile::TempDir;

    fn jwt(claims: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn test_current_user_from_jwt() {
        let token = jwt(serde_json::json!({
            "sub": 42,
            "email": "ops@example.com",
            "role": "admin",
            "full_name": "Ops Lead",
            "exp": 4_102_444_800i64
        }));

        let user = CurrentUser::from_token(&token).unwrap();
        assert_eq!(user.id.as_deref(), Some("42"));
        assert_eq!(user.email.as_deref(), Some("ops@example.com"));
        assert_eq!(user.name.as_deref(), Some("Ops Lead"));
        assert_eq!(user.role.as_deref(), Some("admin"));
        assert!(!user.is_expired());
    }

    #[test]
    fn test_current_user_expired_token() {
        let token = jwt(serde_json::json!({ "sub": "u-1", "exp": 1_000 }));
        let user = CurrentUser::from_token(&token).unwrap();
        assert!(user.is_expired());
    }

    #[test]
    fn test_opaque_token_has_no_claims() {
        assert!(CurrentUser::from_token("not-a-jwt").is_none());
        assert!(CurrentUser::from_token("a.b.c.d").is_none());
    }

    #[test]
    fn test_session_file_store_and_clear() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.yaml");
        let store = SessionFile::at(path.to_str()).unwrap();

        assert!(store.access_token().unwrap().is_none());

        store
            .store(&Session {
                access_token: Some("tok-123".to_string()),
                current_user: Some(CurrentUser {
                    email: Some("driver@example.com".to_string()),
                    ..Default::default()
                }),
            })
            .unwrap();

        assert_eq!(store.access_token().unwrap().as_deref(), Some("tok-123"));
        assert_eq!(
            store.current_user().unwrap().and_then(|u| u.email).as_deref(),
            Some("driver@example.com")
        );

        store.clear().unwrap();
        assert!(store.access_token().unwrap().is_none());
        assert!(store.current_user().unwrap().is_none());

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_blank_token_counts_as_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.yaml");
        std::fs::write(&path, "access_token: \"  \"\n").unwrap();

        let store = SessionFile::at(path.to_str()).unwrap();
        assert!(store.access_token().unwrap().is_none());
    }
}
