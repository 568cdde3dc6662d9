//! Client credentials and the API key they are exchanged for.

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Environment variable holding the client ID.
pub const CLIENT_ID_ENV: &str = "PLUGGY_CLIENT_ID";

/// Environment variable holding the client secret.
pub const CLIENT_SECRET_ENV: &str = "PLUGGY_CLIENT_SECRET";

/// Client ID and secret issued by the Pluggy dashboard.
///
/// The secret is kept in a [`SecretString`] and never shows up in
/// `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: SecretString,
}

impl Credentials {
    /// Create credentials from an ID and secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }

    /// Read credentials from `PLUGGY_CLIENT_ID` and `PLUGGY_CLIENT_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let client_id = read_env(CLIENT_ID_ENV)?;
        let client_secret = read_env(CLIENT_SECRET_ENV)?;
        Ok(Self::new(client_id, client_secret))
    }

    /// The client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }
}

fn read_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{} must be set", name))),
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Short-lived key returned by `POST /auth`, sent as `X-API-KEY`.
///
/// The key is used verbatim for the lifetime of the client and is never
/// refreshed.
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Wrap an existing API key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::from(key.into()))
    }

    /// Reveal the key, e.g. to persist it between runs.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}
