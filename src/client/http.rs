//! HTTP transport and client facade for the Pluggy API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};

use crate::api::{
    AccountsService, BenefitsService, BillsService, CategoriesService, ConsentsService,
    IdentityService, InvestmentsService, ItemsService, LoansService, TransactionsService,
    WebhooksService,
};
use crate::auth::{ApiKey, Authenticator, Credentials};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::paginated::{Page, PageRequest, PagedQuery};

/// Header carrying the API key on every authenticated request.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// The main client for interacting with the Pluggy API.
///
/// A `PluggyClient` only exists once authentication has succeeded, so
/// every service it hands out is already bound to a valid API key. The
/// key is never refreshed; when it expires, authenticate again.
///
/// # Example
///
/// ```no_run
/// use pluggy_rs::{PluggyClient, ItemId, api::AccountsQuery};
///
/// # async fn example() -> pluggy_rs::Result<()> {
/// let client = PluggyClient::authenticate("client-id", "client-secret").await?;
///
/// let query = AccountsQuery::new(ItemId::new("item-id"));
/// let accounts = client.accounts().list_all(&query, 50).await?;
/// for account in accounts {
///     println!("{} {:?}", account.id, account.balance);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PluggyClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: HttpTransport,
    pub(crate) api_key: ApiKey,
    pub(crate) config: ClientConfig,
}

impl PluggyClient {
    /// Authenticate against the production API with default configuration.
    pub async fn authenticate(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::authenticate_with_config(
            Credentials::new(client_id, client_secret),
            ClientConfig::default(),
        )
        .await
    }

    /// Authenticate with explicit credentials and configuration.
    ///
    /// Performs exactly one `POST /auth`. Any failure (bad credentials,
    /// unreachable host, malformed response) is returned unchanged and no
    /// client is built.
    pub async fn authenticate_with_config(
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        let api_key = Authenticator::new(&transport)
            .create_api_key(&credentials)
            .await?;

        tracing::info!(client_id = credentials.client_id(), "authenticated");

        Ok(Self::from_parts(transport, api_key, config))
    }

    /// Create a client around an API key obtained elsewhere.
    pub fn with_api_key(api_key: ApiKey, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::from_parts(transport, api_key, config))
    }

    fn from_parts(transport: HttpTransport, api_key: ApiKey, config: ClientConfig) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                api_key,
                config,
            }),
        }
    }

    /// Get the items service.
    pub fn items(&self) -> ItemsService {
        ItemsService::new(self.inner.clone())
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the transactions service.
    pub fn transactions(&self) -> TransactionsService {
        TransactionsService::new(self.inner.clone())
    }

    /// Get the investments service.
    pub fn investments(&self) -> InvestmentsService {
        InvestmentsService::new(self.inner.clone())
    }

    /// Get the loans service.
    pub fn loans(&self) -> LoansService {
        LoansService::new(self.inner.clone())
    }

    /// Get the benefits service.
    pub fn benefits(&self) -> BenefitsService {
        BenefitsService::new(self.inner.clone())
    }

    /// Get the credit card bills service.
    pub fn bills(&self) -> BillsService {
        BillsService::new(self.inner.clone())
    }

    /// Get the categories service.
    pub fn categories(&self) -> CategoriesService {
        CategoriesService::new(self.inner.clone())
    }

    /// Get the consents service.
    pub fn consents(&self) -> ConsentsService {
        ConsentsService::new(self.inner.clone())
    }

    /// Get the identity service.
    pub fn identity(&self) -> IdentityService {
        IdentityService::new(self.inner.clone())
    }

    /// Get the webhooks service.
    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(self.inner.clone())
    }

    /// The API key this client sends.
    pub fn api_key(&self) -> &ApiKey {
        &self.inner.api_key
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl std::fmt::Debug for PluggyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluggyClient")
            .field("config", &self.inner.config)
            .field("api_key", &self.inner.api_key)
            .finish()
    }
}

/// Issues single HTTP calls against the base URL and classifies failures.
#[derive(Debug)]
pub(crate) struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.parsed_base_url()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Perform one request and return the raw body of a 2xx response.
    ///
    /// `query` is serialized as-is, so callers drop absent parameters with
    /// `skip_serializing_if`. Non-2xx responses become the matching
    /// [`Error`] kind; no request is ever retried.
    ///
    /// A query or body that cannot be encoded is [`Error::InvalidInput`]
    /// and nothing is sent. [`Error::Network`] only covers requests that
    /// got no response; a body lost after the status line arrived is
    /// [`Error::ResponseBody`].
    pub(crate) async fn request<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
        api_key: Option<&ApiKey>,
    ) -> Result<String>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let mut request = self
            .http
            .request(method.clone(), &url)
            .headers(build_headers(api_key)?);

        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                Error::InvalidInput(format!("{method} {path}: {e}"))
            } else {
                Error::Network(e)
            }
        })?;
        let status = response.status();
        let text = response.text().await.map_err(|source| Error::ResponseBody {
            context: format!("{method} {path}"),
            status: status.as_u16(),
            source,
        })?;

        tracing::debug!(%method, path, status = status.as_u16(), "request completed");

        if status.is_success() {
            Ok(text)
        } else {
            tracing::warn!(%method, path, status = status.as_u16(), "API returned an error");
            Err(Error::from_status(status, &text))
        }
    }
}

fn build_headers(api_key: Option<&ApiKey>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(api_key) = api_key {
        let mut value = HeaderValue::from_str(api_key.expose())
            .map_err(|_| Error::InvalidInput("API key is not a valid header value".to_string()))?;
        value.set_sensitive(true);
        headers.insert(API_KEY_HEADER, value);
    }

    Ok(headers)
}

/// Decode a success body into its typed record.
pub(crate) fn decode<T: DeserializeOwned>(method: &Method, path: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::schema(format!("{} {}", method, path), e))
}

impl ClientInner {
    async fn call<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let text = self
            .transport
            .request(method.clone(), path, query, body, Some(&self.api_key))
            .await?;
        decode(&method, path, &text)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call(Method::GET, path, None::<&()>, None::<&()>).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.call(Method::GET, path, Some(query), None::<&()>).await
    }

    /// Fetch one page of a list endpoint.
    pub(crate) async fn get_page<T, Q>(
        &self,
        path: &str,
        filters: &Q,
        page: PageRequest,
    ) -> Result<Page<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query = PagedQuery {
            filters,
            page: page.page,
            page_size: page.page_size,
        };
        self.get_with_query(path, &query).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::POST, path, None::<&()>, Some(body)).await
    }

    /// Make a PATCH request.
    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::PATCH, path, None::<&()>, Some(body)).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call(Method::DELETE, path, None::<&()>, None::<&()>).await
    }
}
