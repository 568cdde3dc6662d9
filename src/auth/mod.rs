//! Authentication for the Pluggy API.
//!
//! The API uses a single client-credentials exchange: `POST /auth` with
//! `{clientId, clientSecret}` answers `{apiKey}`, and that key is sent as
//! the `X-API-KEY` header on every later request.
//!
//! ```no_run
//! use pluggy_rs::{ClientConfig, Credentials, PluggyClient};
//!
//! # async fn example() -> pluggy_rs::Result<()> {
//! let credentials = Credentials::new("your-client-id", "your-client-secret");
//! let client = PluggyClient::authenticate_with_config(credentials, ClientConfig::default()).await?;
//! println!("{:?}", client.api_key());
//! # Ok(())
//! # }
//! ```

mod credentials;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::HttpTransport;
use crate::{Error, Result};

pub use credentials::{ApiKey, Credentials, CLIENT_ID_ENV, CLIENT_SECRET_ENV};

const AUTH_PATH: &str = "/auth";

/// Exchanges client credentials for an API key.
///
/// Every call performs one round trip; nothing is cached.
pub(crate) struct Authenticator<'a> {
    transport: &'a HttpTransport,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    api_key: String,
}

impl<'a> Authenticator<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Request a new API key.
    ///
    /// Transport failures (e.g. `Unauthorized` for bad credentials) are
    /// returned unchanged. A response without a non-empty `apiKey` is a
    /// [`Error::SchemaValidation`].
    pub(crate) async fn create_api_key(&self, credentials: &Credentials) -> Result<ApiKey> {
        let request = AuthRequest {
            client_id: credentials.client_id(),
            client_secret: credentials.client_secret(),
        };

        let body = self
            .transport
            .request(Method::POST, AUTH_PATH, None::<&()>, Some(&request), None)
            .await?;
        let response: AuthResponse = crate::client::decode(&Method::POST, AUTH_PATH, &body)?;

        if response.api_key.is_empty() {
            return Err(Error::schema(
                format!("POST {}", AUTH_PATH),
                serde::de::Error::custom("apiKey must not be empty"),
            ));
        }

        Ok(ApiKey::new(response.api_key))
    }
}
