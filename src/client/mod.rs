//! Client layer: resolves the transport, runs the request pipeline, and exposes
//! the StackVerify operations.

mod http;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::domain::{
    ApiError, ApiKey, BaseUrl, CampaignId, CreateEmailCampaign, DEFAULT_BASE_URL, DomainId,
    MessageId, Mode, ResponseBody, SendSms, ValidationError,
};
use crate::transport::{
    CAMPAIGNS_PATH, SEND_SMS_PATH, decode_api_error, decode_response_body, domain_status_path,
    encode_create_campaign_json, encode_send_sms_json, sms_status_path, start_campaign_path,
};

pub use self::http::{BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport};

/// Environment variable read by [`StackVerifyClientBuilder::from_env`] for the API key.
pub const API_KEY_ENV: &str = "STACKVERIFY_API_KEY";
/// Environment variable read by [`StackVerifyClientBuilder::from_env`] for the base URL.
pub const BASE_URL_ENV: &str = "STACKVERIFY_BASE_URL";

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`StackVerifyClient`].
///
/// Every variant except [`StackVerifyError::Parse`] comes out of a client call;
/// `Parse` is only produced when a caller deserializes a [`ResponseBody`].
pub enum StackVerifyError {
    /// A required field is missing or malformed. Raised before any network call.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// No HTTP transport could be constructed for this client.
    #[error(
        "no usable HTTP transport ({reason}); enable a TLS backend for reqwest or inject a transport with StackVerifyClientBuilder::transport"
    )]
    TransportUnavailable { reason: String },

    /// The request never produced an HTTP response (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// StackVerify answered with a non-2xx status.
    #[error("API error ({}): {}", .0.status, .0.message)]
    Api(ApiError),

    /// JSON (de)serialization failed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl StackVerifyError {
    /// The API error details, if the server rejected the request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Per-call options for [`StackVerifyClient::request`].
///
/// `headers` are applied over the client defaults, except `Authorization`, which
/// the client always sets last.
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

#[derive(Clone)]
/// Builder for [`StackVerifyClient`].
///
/// Use this to point at another API root, tune the default transport, or inject
/// your own [`HttpTransport`].
pub struct StackVerifyClientBuilder {
    api_key: String,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl fmt::Debug for StackVerifyClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackVerifyClientBuilder")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

impl StackVerifyClientBuilder {
    /// Create a builder with the default base URL and reqwest transport.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Read [`API_KEY_ENV`] and, when set, [`BASE_URL_ENV`].
    ///
    /// A missing API key is reported by [`StackVerifyClientBuilder::build`].
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        let base_url = std::env::var(BASE_URL_ENV).ok();
        Self {
            base_url,
            ..Self::new(api_key)
        }
    }

    /// Override the API root (default: `https://api.stackverify.site/api`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout applied to each whole request. Ignored with a custom transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header. Ignored with a custom transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Send requests through `transport` instead of reqwest.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Validate the configuration and resolve the transport.
    pub fn build(self) -> Result<StackVerifyClient, StackVerifyError> {
        let api_key = ApiKey::new(self.api_key)?;
        let base_url = BaseUrl::new(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        let authorization = bearer_header(&api_key)?;

        let (timeout, user_agent) = (self.timeout, self.user_agent);
        let http = resolve_transport(self.transport, || {
            self::http::ReqwestTransport::new(timeout, user_agent)
                .map(|transport| Arc::new(transport) as Arc<dyn HttpTransport>)
        })?;

        debug!(base_url = base_url.as_str(), mode = %api_key.mode(), "StackVerify client ready");

        Ok(StackVerifyClient {
            mode: api_key.mode(),
            base_url,
            authorization,
            http,
        })
    }
}

/// An injected transport wins; otherwise the default one is constructed, and a
/// failure there means the client has no way to reach the network.
fn resolve_transport<E: fmt::Display>(
    injected: Option<Arc<dyn HttpTransport>>,
    default: impl FnOnce() -> Result<Arc<dyn HttpTransport>, E>,
) -> Result<Arc<dyn HttpTransport>, StackVerifyError> {
    match injected {
        Some(transport) => Ok(transport),
        None => default().map_err(|err| StackVerifyError::TransportUnavailable {
            reason: err.to_string(),
        }),
    }
}

fn bearer_header(api_key: &ApiKey) -> Result<HeaderValue, ValidationError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key.as_str()))
        .map_err(|_| ValidationError::InvalidHeaderValue {
            field: ApiKey::FIELD,
        })?;
    value.set_sensitive(true);
    Ok(value)
}

#[derive(Clone)]
/// High-level StackVerify client.
///
/// Configuration is fixed at construction; clones share the same transport and
/// can issue calls concurrently. Every call performs exactly one HTTP request and
/// never retries.
pub struct StackVerifyClient {
    mode: Mode,
    base_url: BaseUrl,
    authorization: HeaderValue,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for StackVerifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackVerifyClient")
            .field("mode", &self.mode)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl StackVerifyClient {
    /// Create a client with the default base URL and transport.
    ///
    /// Fails with [`StackVerifyError::InvalidArgument`] for a blank key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, StackVerifyError> {
        StackVerifyClientBuilder::new(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: impl Into<String>) -> StackVerifyClientBuilder {
        StackVerifyClientBuilder::new(api_key)
    }

    /// `Test` for `sk_test_` keys, `Live` otherwise.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Effective API root, without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Call an arbitrary endpoint below the base URL.
    ///
    /// Errors:
    /// - [`StackVerifyError::InvalidArgument`] if `path` does not form a valid URL,
    /// - [`StackVerifyError::Transport`] if no response was received,
    /// - [`StackVerifyError::Api`] for non-2xx responses.
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ResponseBody, StackVerifyError> {
        let url = self
            .base_url
            .join_path(path)
            .map_err(|err| ValidationError::InvalidUrl {
                field: "path",
                input: path.to_owned(),
                reason: err.to_string(),
            })?;
        self.execute(url, options).await
    }

    /// Send an SMS to one or more recipients (`POST v1/sms/send`).
    ///
    /// Fails with [`StackVerifyError::InvalidArgument`] when recipients are empty,
    /// when neither body nor template id is set, or when the sender id is blank.
    pub async fn send_sms(&self, request: SendSms) -> Result<ResponseBody, StackVerifyError> {
        request.validate()?;
        let body = encode_send_sms_json(&request)?;
        let url = self.base_url.join_segments(&SEND_SMS_PATH);
        self.execute(url, RequestOptions::new(Method::POST).json(body))
            .await
    }

    /// Delivery status of a sent message (`GET v1/sms/status/{messageId}`).
    pub async fn get_sms_status(
        &self,
        message_id: impl Into<String>,
    ) -> Result<ResponseBody, StackVerifyError> {
        let message_id = MessageId::new(message_id)?;
        let url = self.base_url.join_segments(&sms_status_path(&message_id));
        self.execute(url, RequestOptions::default()).await
    }

    /// Verification status of a sending domain (`GET domains/{domainId}`).
    pub async fn get_domain_status(
        &self,
        domain_id: impl Into<String>,
    ) -> Result<ResponseBody, StackVerifyError> {
        let domain_id = DomainId::new(domain_id)?;
        let url = self.base_url.join_segments(&domain_status_path(&domain_id));
        self.execute(url, RequestOptions::default()).await
    }

    /// Create an email campaign (`POST campaigns`).
    ///
    /// Fails with [`StackVerifyError::InvalidArgument`] naming the first missing
    /// of `name`, `subject`, `contact_list_id`, `sending_domain_id`.
    pub async fn create_email_campaign(
        &self,
        request: CreateEmailCampaign,
    ) -> Result<ResponseBody, StackVerifyError> {
        request.validate()?;
        let body = encode_create_campaign_json(&request)?;
        let url = self.base_url.join_segments(&CAMPAIGNS_PATH);
        self.execute(url, RequestOptions::new(Method::POST).json(body))
            .await
    }

    /// Start sending a campaign (`POST campaigns/{campaignId}/start`).
    pub async fn start_campaign(
        &self,
        campaign_id: impl Into<String>,
    ) -> Result<ResponseBody, StackVerifyError> {
        let campaign_id = CampaignId::new(campaign_id)?;
        let url = self.base_url.join_segments(&start_campaign_path(&campaign_id));
        self.execute(url, RequestOptions::new(Method::POST)).await
    }

    async fn execute(
        &self,
        url: Url,
        options: RequestOptions,
    ) -> Result<ResponseBody, StackVerifyError> {
        let RequestOptions {
            method,
            body,
            headers: overrides,
        } = options;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.extend(overrides);
        headers.insert(AUTHORIZATION, self.authorization.clone());

        let body = body.map(|value| serde_json::to_string(&value)).transpose()?;

        debug!(method = %method, url = %url, "sending StackVerify request");
        let response = self
            .http
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await
            .map_err(StackVerifyError::Transport)?;

        let status = response.status;
        let body = decode_response_body(response.body);
        if !(200..=299).contains(&status) {
            let err = decode_api_error(status, body);
            debug!(status, code = ?err.code, "StackVerify API error");
            return Err(StackVerifyError::Api(err));
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use serde_json::json;

    use crate::domain::{Recipient, SendSms};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<HttpRequest>,
        response: Option<HttpResponse>,
    }

    impl FakeTransport {
        fn new(status: u16, body: impl Into<String>) -> Self {
            Self::with_response(Some(HttpResponse {
                status,
                body: body.into(),
            }))
        }

        fn failing() -> Self {
            Self::with_response(None)
        }

        fn with_response(response: Option<HttpResponse>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response,
                })),
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.state.lock().unwrap().requests.clone()
        }

        fn only_request(&self) -> HttpRequest {
            let requests = self.requests();
            assert_eq!(requests.len(), 1, "expected exactly one request");
            requests.into_iter().next().unwrap()
        }
    }

    impl HttpTransport for FakeTransport {
        fn send<'a>(
            &'a self,
            request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move {
                let response = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(request);
                    state.response.clone()
                };
                response.ok_or_else(|| {
                    io::Error::new(io::ErrorKind::ConnectionRefused, "refused").into()
                })
            })
        }
    }

    fn make_client(api_key: &str, transport: FakeTransport) -> StackVerifyClient {
        StackVerifyClient::builder(api_key)
            .base_url("https://example.invalid/api/")
            .transport(transport)
            .build()
            .unwrap()
    }

    fn recipients() -> Vec<Recipient> {
        vec![Recipient::new("+15550001111").unwrap()]
    }

    fn request_json(request: &HttpRequest) -> Value {
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
    }

    fn assert_invalid_argument(err: StackVerifyError, field: &str) {
        match err {
            StackVerifyError::InvalidArgument(inner) => assert_eq!(inner.field(), field),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn build_rejects_blank_api_key() {
        let err = StackVerifyClient::builder("  ")
            .transport(FakeTransport::new(200, ""))
            .build()
            .unwrap_err();
        assert_invalid_argument(err, "api_key");
    }

    #[test]
    fn build_rejects_api_key_unusable_as_header() {
        let err = StackVerifyClient::builder("sk_live_\nbad")
            .transport(FakeTransport::new(200, ""))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            StackVerifyError::InvalidArgument(ValidationError::InvalidHeaderValue { .. })
        ));
    }

    #[test]
    fn mode_follows_key_prefix() {
        let client = make_client("sk_test_123", FakeTransport::new(200, ""));
        assert_eq!(client.mode(), Mode::Test);

        let client = make_client("sk_live_123", FakeTransport::new(200, ""));
        assert_eq!(client.mode(), Mode::Live);
    }

    #[test]
    fn base_url_defaults_and_strips_trailing_slashes() {
        let client = StackVerifyClient::builder("sk_live_1")
            .transport(FakeTransport::new(200, ""))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.stackverify.site/api");

        let client = StackVerifyClient::builder("sk_live_1")
            .base_url("https://x/api///")
            .transport(FakeTransport::new(200, ""))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://x/api");
    }

    #[test]
    fn default_transport_is_resolved_at_build() {
        let client = StackVerifyClient::builder("sk_live_1")
            .timeout(Duration::from_secs(5))
            .user_agent("stackverify-tests")
            .build()
            .unwrap();
        assert_eq!(client.mode(), Mode::Live);
    }

    #[test]
    fn failing_default_transport_is_transport_unavailable() {
        let err = resolve_transport(None, || Err("no TLS backend")).err().unwrap();
        assert!(matches!(
            &err,
            StackVerifyError::TransportUnavailable { reason } if reason == "no TLS backend"
        ));
        let message = err.to_string();
        assert!(message.contains("no TLS backend"));
        assert!(message.contains("StackVerifyClientBuilder::transport"));
    }

    #[test]
    fn injected_transport_skips_default_construction() {
        let injected: Arc<dyn HttpTransport> = Arc::new(FakeTransport::new(200, ""));
        let resolved = resolve_transport(Some(injected.clone()), || -> Result<_, &str> {
            panic!("default transport must not be built")
        })
        .unwrap();
        assert!(Arc::ptr_eq(&resolved, &injected));
    }

    #[tokio::test]
    async fn send_sms_posts_json_with_bearer_auth() {
        let transport = FakeTransport::new(200, r#"{"id":"msg_1","status":"queued"}"#);
        let client = make_client("sk_test_abc", transport.clone());

        let response = client
            .send_sms(SendSms::text(recipients(), "ACME", "hello"))
            .await
            .unwrap();
        assert_eq!(
            response,
            ResponseBody::Json(json!({"id": "msg_1", "status": "queued"}))
        );

        let request = transport.only_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/api/v1/sms/send"
        );
        assert_eq!(request.headers[AUTHORIZATION], "Bearer sk_test_abc");
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
        assert_eq!(
            request_json(&request),
            json!({
                "recipients": ["+15550001111"],
                "body": "hello",
                "sender_id": "ACME",
            })
        );
    }

    #[tokio::test]
    async fn send_sms_validation_happens_before_network() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client("sk_test_abc", transport.clone());

        let err = client
            .send_sms(SendSms::text(Vec::new(), "X", "hi"))
            .await
            .unwrap_err();
        assert_invalid_argument(err, "recipients");

        let no_content = SendSms {
            recipients: recipients(),
            sender_id: "X".to_owned(),
            ..Default::default()
        };
        let err = client.send_sms(no_content).await.unwrap_err();
        assert_invalid_argument(err, "body");

        let err = client
            .send_sms(SendSms::text(recipients(), "", "hi"))
            .await
            .unwrap_err();
        assert_invalid_argument(err, "sender_id");

        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn id_operations_reject_blank_ids_without_network() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client("sk_test_abc", transport.clone());

        assert_invalid_argument(client.get_sms_status("").await.unwrap_err(), "messageId");
        assert_invalid_argument(
            client.get_domain_status(" ").await.unwrap_err(),
            "domainId",
        );
        assert_invalid_argument(client.start_campaign("").await.unwrap_err(), "campaignId");

        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn get_sms_status_issues_single_get() {
        let transport = FakeTransport::new(200, r#"{"status":"delivered"}"#);
        let client = make_client("sk_live_abc", transport.clone());

        client.get_sms_status("msg_123").await.unwrap();

        let request = transport.only_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/api/v1/sms/status/msg_123"
        );
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn get_sms_status_escapes_reserved_characters() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client("sk_live_abc", transport.clone());

        client.get_sms_status("msg/1?x=#2&y+z").await.unwrap();

        let request = transport.only_request();
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/api/v1/sms/status/msg%2F1%3Fx%3D%232%26y%2Bz"
        );
    }

    #[tokio::test]
    async fn get_sms_status_sends_id_untrimmed() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client("sk_live_abc", transport.clone());

        client.get_sms_status(" msg_1 ").await.unwrap();

        let request = transport.only_request();
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/api/v1/sms/status/%20msg_1%20"
        );
    }

    #[tokio::test]
    async fn get_domain_status_uses_domains_endpoint() {
        let transport = FakeTransport::new(200, r#"{"verified":true}"#);
        let client = make_client("sk_live_abc", transport.clone());

        let body = client.get_domain_status("dom_7").await.unwrap();
        assert_eq!(body.as_json(), Some(&json!({"verified": true})));

        let request = transport.only_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.as_str(), "https://example.invalid/api/domains/dom_7");
    }

    #[tokio::test]
    async fn create_email_campaign_posts_defaults() {
        let transport = FakeTransport::new(201, r#"{"id":"cmp_1"}"#);
        let client = make_client("sk_live_abc", transport.clone());

        let campaign = CreateEmailCampaign::new("Launch", "Hello", "cl_1", "sd_1");
        client.create_email_campaign(campaign).await.unwrap();

        let request = transport.only_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.as_str(), "https://example.invalid/api/campaigns");
        let body = request_json(&request);
        assert_eq!(body["channel"], "email");
        assert_eq!(body["status"], "draft");
        assert_eq!(body["scheduled_at"], Value::Null);
    }

    #[tokio::test]
    async fn create_email_campaign_cites_missing_sending_domain() {
        let transport = FakeTransport::new(201, "{}");
        let client = make_client("sk_live_abc", transport.clone());

        let campaign = CreateEmailCampaign::new("Launch", "Hello", "cl_1", "")
            .html_body("<p>hi</p>")
            .text_body("hi");
        let err = client.create_email_campaign(campaign).await.unwrap_err();
        assert_invalid_argument(err, "sending_domain_id");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn start_campaign_posts_without_body() {
        let transport = FakeTransport::new(200, "");
        let client = make_client("sk_live_abc", transport.clone());

        let body = client.start_campaign("cmp 9").await.unwrap();
        assert_eq!(body, ResponseBody::Empty);

        let request = transport.only_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/api/campaigns/cmp%209/start"
        );
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn non_success_status_maps_to_api_error() {
        let transport = FakeTransport::new(
            422,
            r#"{"message":"bad sender","error":"invalid_sender","retry_after":30}"#,
        );
        let client = make_client("sk_live_abc", transport);

        let err = client
            .send_sms(SendSms::text(recipients(), "X", "hi"))
            .await
            .unwrap_err();
        let api = err.api_error().expect("api error");
        assert_eq!(api.status, 422);
        assert_eq!(api.code.as_deref(), Some("invalid_sender"));
        assert_eq!(api.retry_after, Some(json!(30)));
        assert_eq!(api.message, "bad sender");
        assert_eq!(err.to_string(), "API error (422): bad sender");
    }

    #[tokio::test]
    async fn non_json_error_body_uses_generic_message() {
        let transport = FakeTransport::new(503, "Service Unavailable");
        let client = make_client("sk_live_abc", transport);

        let err = client.get_sms_status("msg_1").await.unwrap_err();
        let api = err.api_error().expect("api error");
        assert_eq!(api.message, "StackVerify API error (503)");
        assert_eq!(api.code, None);
        assert_eq!(
            api.response,
            Some(ResponseBody::Text("Service Unavailable".to_owned()))
        );
    }

    #[tokio::test]
    async fn unparseable_success_body_falls_back_to_text() {
        let transport = FakeTransport::new(200, "OK");
        let client = make_client("sk_live_abc", transport);

        let body = client.get_domain_status("dom_1").await.unwrap();
        assert_eq!(body, ResponseBody::Text("OK".to_owned()));
    }

    #[tokio::test]
    async fn transport_failure_maps_to_transport_error() {
        let client = make_client("sk_live_abc", FakeTransport::failing());

        let err = client.get_sms_status("msg_1").await.unwrap_err();
        assert!(matches!(err, StackVerifyError::Transport(_)));
    }

    #[tokio::test]
    async fn request_merges_headers_but_keeps_authorization() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client("sk_live_abc", transport.clone());

        let options = RequestOptions::new(Method::POST)
            .json(json!({"ping": true}))
            .header(AUTHORIZATION, HeaderValue::from_static("Bearer stolen"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/vnd.api+json"))
            .header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("req-1"),
            );
        client.request("//v2/ping", options).await.unwrap();

        let request = transport.only_request();
        assert_eq!(request.url.as_str(), "https://example.invalid/api/v2/ping");
        assert_eq!(request.headers[AUTHORIZATION], "Bearer sk_live_abc");
        assert_eq!(request.headers.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(request.headers[CONTENT_TYPE], "application/vnd.api+json");
        assert_eq!(request.headers["x-request-id"], "req-1");
        assert_eq!(request_json(&request), json!({"ping": true}));
    }

    #[tokio::test]
    async fn request_defaults_to_get() {
        let transport = FakeTransport::new(200, "[1,2]");
        let client = make_client("sk_live_abc", transport.clone());

        let body = client
            .request("/v1/anything", RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(body.into_json(), json!([1, 2]));
        assert_eq!(transport.only_request().method, Method::GET);
    }

    #[tokio::test]
    async fn clones_share_transport_and_run_concurrently() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client("sk_live_abc", transport.clone());
        let other = client.clone();

        let (a, b) = tokio::join!(
            client.get_sms_status("msg_1"),
            other.get_domain_status("dom_1")
        );
        a.unwrap();
        b.unwrap();
        assert_eq!(transport.requests().len(), 2);
    }
}
