//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    AccountSid, Address, ApiFault, AuthToken, MessageBody, MessageFilter, MessageListPage,
    MessageRecord, MessageSid, SendMessage, ValidationError,
};
use crate::transport::{self, API_FORMAT, TransportError};

const DEFAULT_BASE_URL: &str = "https://api.twilio.com/2010-04-01";

const ENV_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
const ENV_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";

const STATUS_OK: u16 = 200;
const STATUS_CREATED: u16 = 201;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

/// Authenticated HTTP requester. Implementations sign every request.
trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    credentials: Credentials,
}

impl ReqwestTransport {
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .basic_auth(
                self.credentials.account_sid.as_str(),
                Some(self.credentials.auth_token.as_str()),
            )
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .authorize(self.client.post(url))
                .form(&params)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let mut request = self.authorize(self.client.get(url));
            if !query.is_empty() {
                request = request.query(&query);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Twilio account credentials, sent as HTTP basic auth on every request.
pub struct Credentials {
    pub account_sid: AccountSid,
    pub auth_token: AuthToken,
}

impl Credentials {
    /// Validate both parts and build [`Credentials`].
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            account_sid: AccountSid::new(account_sid)?,
            auth_token: AuthToken::new(auth_token)?,
        })
    }

    /// Read `TWILIO_ACCOUNT_SID` and `TWILIO_AUTH_TOKEN` from the environment.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        let account_sid = lookup(ENV_ACCOUNT_SID).ok_or(ValidationError::MissingEnv {
            var: ENV_ACCOUNT_SID,
        })?;
        let auth_token = lookup(ENV_AUTH_TOKEN).ok_or(ValidationError::MissingEnv {
            var: ENV_AUTH_TOKEN,
        })?;
        Self::new(account_sid, auth_token)
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TwilioClient`].
///
/// A provider fault ([`TwilioError::Api`]) and a response this crate could not
/// understand ([`TwilioError::Parse`]) are always reported separately.
pub enum TwilioError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Twilio answered with an unexpected status and a structured error body.
    #[error("API error (HTTP {status}): {fault}")]
    Api { status: u16, fault: ApiFault },

    /// Response body did not match the shape expected for its status.
    #[error("parse error (HTTP {status}): {source}")]
    Parse {
        status: u16,
        #[source]
        source: BoxError,
    },

    /// A page URI returned by Twilio could not be resolved against the base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl TwilioError {
    /// The provider fault, if this error is one.
    pub fn api_fault(&self) -> Option<&ApiFault> {
        match self {
            Self::Api { fault, .. } => Some(fault),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TwilioClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct TwilioClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TwilioClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (default `https://api.twilio.com/2010-04-01`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TwilioClient`].
    pub fn build(self) -> Result<TwilioClient, TwilioError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TwilioError::Transport(Box::new(err)))?;

        Ok(TwilioClient {
            account_sid: self.credentials.account_sid.clone(),
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport {
                client,
                credentials: self.credentials,
            }),
        })
    }
}

#[derive(Clone)]
/// High-level client for Twilio's SMS Messages resource.
///
/// Every call issues exactly one HTTP request. The client only holds read-only
/// configuration, so clones can be used concurrently.
pub struct TwilioClient {
    account_sid: AccountSid,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl TwilioClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`TwilioClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            account_sid: credentials.account_sid.clone(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                credentials,
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> TwilioClientBuilder {
        TwilioClientBuilder::new(credentials)
    }

    /// Send an SMS message.
    ///
    /// Succeeds on HTTP `201 Created` with the queued [`MessageRecord`].
    ///
    /// Errors:
    /// - [`TwilioError::Transport`] when the request could not be completed,
    /// - [`TwilioError::Api`] for any other status with a Twilio error body,
    /// - [`TwilioError::Parse`] when the body matches neither shape.
    #[tracing::instrument(skip_all)]
    pub async fn send_message(&self, request: SendMessage) -> Result<MessageRecord, TwilioError> {
        let endpoint =
            transport::message_list_endpoint(&self.base_url, &self.account_sid, API_FORMAT);
        let params = transport::encode_send_message_form(&request);

        tracing::debug!(%endpoint, params = params.len(), "sending message");
        let response = self
            .http
            .post_form(&endpoint, params)
            .await
            .map_err(TwilioError::Transport)?;

        resolve(response, STATUS_CREATED, transport::decode_message_json_response)
    }

    /// Send an SMS message without a status callback or application routing.
    pub async fn send_simple(
        &self,
        from: Address,
        to: Address,
        body: MessageBody,
    ) -> Result<MessageRecord, TwilioError> {
        self.send_message(SendMessage::simple(from, to, body)).await
    }

    /// Fetch a single message by its sid. Succeeds on HTTP `200 OK`.
    #[tracing::instrument(skip_all, fields(sid = %sid))]
    pub async fn get_message(&self, sid: &MessageSid) -> Result<MessageRecord, TwilioError> {
        let endpoint =
            transport::message_endpoint(&self.base_url, &self.account_sid, sid, API_FORMAT);
        self.fetch(&endpoint, Vec::new(), transport::decode_message_json_response)
            .await
    }

    /// List messages, narrowed by `filter`. An empty filter returns Twilio's
    /// default (most recent) page.
    #[tracing::instrument(skip_all, fields(filters = filter.iter().count()))]
    pub async fn list_messages(
        &self,
        filter: &MessageFilter,
    ) -> Result<MessageListPage, TwilioError> {
        let endpoint =
            transport::message_list_endpoint(&self.base_url, &self.account_sid, API_FORMAT);
        let query = transport::encode_message_filter_query(filter);
        self.fetch(&endpoint, query, transport::decode_message_list_json_response)
            .await
    }

    /// Fetch the page after `page`, or `None` when it is the last one.
    pub async fn next_page(
        &self,
        page: &MessageListPage,
    ) -> Result<Option<MessageListPage>, TwilioError> {
        self.follow_page_uri(page.next_page_uri.as_deref()).await
    }

    /// Fetch the page before `page`, or `None` when it is the first one.
    pub async fn previous_page(
        &self,
        page: &MessageListPage,
    ) -> Result<Option<MessageListPage>, TwilioError> {
        self.follow_page_uri(page.previous_page_uri.as_deref()).await
    }

    async fn follow_page_uri(
        &self,
        uri: Option<&str>,
    ) -> Result<Option<MessageListPage>, TwilioError> {
        let Some(uri) = uri else {
            return Ok(None);
        };
        let endpoint = transport::resolve_page_uri(&self.base_url, uri)?;
        self.fetch(&endpoint, Vec::new(), transport::decode_message_list_json_response)
            .await
            .map(Some)
    }

    async fn fetch<T>(
        &self,
        endpoint: &str,
        query: Vec<(String, String)>,
        decode: impl FnOnce(&str) -> Result<T, TransportError>,
    ) -> Result<T, TwilioError> {
        tracing::debug!(%endpoint, params = query.len(), "fetching");
        let response = self
            .http
            .get(endpoint, query)
            .await
            .map_err(TwilioError::Transport)?;

        resolve(response, STATUS_OK, decode)
    }
}

/// Map one HTTP response into exactly one of: decoded record, provider fault,
/// or parse failure. Only `expected` counts as success.
fn resolve<T>(
    response: HttpResponse,
    expected: u16,
    decode: impl FnOnce(&str) -> Result<T, TransportError>,
) -> Result<T, TwilioError> {
    let status = response.status;
    tracing::debug!(status, "received response");

    if status == expected {
        return decode(&response.body).map_err(|err| TwilioError::Parse {
            status,
            source: Box::new(err),
        });
    }

    let fault = transport::decode_api_fault_json_response(&response.body, status).map_err(
        |err| TwilioError::Parse {
            status,
            source: Box::new(err),
        },
    )?;
    tracing::warn!(status, code = ?fault.code, message = %fault.message, "twilio returned an error");
    Err(TwilioError::Api { status, fault })
}
