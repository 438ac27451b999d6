//
//  opsmngr-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Ops Manager API
//!
//! This module provides the shared client every resource service goes
//! through. It resolves paths against the base URL, attaches the
//! content-negotiation and `User-Agent` headers, executes requests through
//! the injected [`HttpTransport`], and decodes or streams the response.
//!
//! ## Features
//!
//! - Immutable configuration built once with [`ClientBuilder`]
//! - JSON, gzip and plain-text request builders
//! - Cancellation through [`Context`]
//! - Optional raw body capture
//! - Request-completed and response-processed callbacks
//! - Typed errors for non-2xx responses

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

use super::common::{error_from_response, ApiError};
use super::context::Context;
use super::request::{Accept, Request};
use super::response::Response;
use super::transport::{HttpTransport, RawResponse, ReqwestTransport};

/// Callback invoked with the request and raw response before the body is interpreted.
pub type RequestCompletedHook = Arc<dyn Fn(&Request, &RawResponse) + Send + Sync>;

/// Callback invoked with the wrapped response on every exit once a response exists.
pub type ResponseProcessedHook = Arc<dyn Fn(&Response) + Send + Sync>;

/// Where a response body goes once the status check has passed.
///
/// The caller picks the destination explicitly instead of the client
/// guessing from the target's type.
pub enum Sink<'a, T> {
    /// Ignore the body.
    Discard,
    /// Decode the body as JSON into the target. An empty body leaves it untouched.
    Json(&'a mut T),
    /// Copy the body verbatim, e.g. a gzip archive or plain text.
    Writer(&'a mut (dyn Write + Send)),
}

/// The contract resource services depend on: build a request, execute it.
///
/// [`Client`] is the production implementation; tests can substitute their
/// own.
#[async_trait]
pub trait RequestDoer: Send + Sync {
    /// Builds a JSON request, encoding `body` when present.
    fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Request, ApiError>
    where
        B: Serialize + ?Sized;

    /// Builds a bodiless request accepting `application/gzip`.
    fn new_gzip_request(&self, method: Method, path: &str) -> Result<Request, ApiError>;

    /// Builds a bodiless request accepting `text/plain`.
    fn new_plain_request(&self, method: Method, path: &str) -> Result<Request, ApiError>;

    /// Executes `request` and routes the body into `sink`.
    async fn do_request<T>(&self, ctx: &Context, request: Request, sink: Sink<'_, T>) -> Result<Response, ApiError>
    where
        T: DeserializeOwned + Send;

    /// Executes `request`, ignoring the body.
    async fn send(&self, ctx: &Context, request: Request) -> Result<Response, ApiError> {
        self.do_request::<()>(ctx, request, Sink::Discard).await
    }

    /// Executes `request` and decodes the body into a fresh `T`.
    ///
    /// An empty body yields `T::default()`.
    async fn send_json<T>(&self, ctx: &Context, request: Request) -> Result<(T, Response), ApiError>
    where
        T: DeserializeOwned + Default + Send,
    {
        let mut value = T::default();
        let response = self.do_request(ctx, request, Sink::Json(&mut value)).await?;
        Ok((value, response))
    }

    /// Executes `request` and copies the body into `writer`.
    async fn send_to_writer(
        &self,
        ctx: &Context,
        request: Request,
        writer: &mut (dyn Write + Send),
    ) -> Result<Response, ApiError> {
        self.do_request::<()>(ctx, request, Sink::Writer(writer)).await
    }
}

/// Builder for [`Client`].
///
/// # Example
///
/// ```rust,no_run
/// use opsmngr::api::Client;
///
/// let client = Client::builder()
///     .base_url("https://opsmanager.example.com:8080")
///     .append_user_agent("my-tool/1.0")
///     .raw_capture(true)
///     .build()?;
/// # Ok::<(), opsmngr::api::ApiError>(())
/// ```
#[derive(Clone)]
pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    raw_capture: bool,
    transport: Option<Arc<dyn HttpTransport>>,
    on_request_completed: Option<RequestCompletedHook>,
    on_response_processed: Option<ResponseProcessedHook>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_BASE_URL.to_string(),
            user_agent: crate::default_user_agent(),
            raw_capture: false,
            transport: None,
            on_request_completed: None,
            on_response_processed: None,
        }
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL. A trailing `/` is added if missing.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replaces the `User-Agent` value. An empty string disables the header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Appends a product token to the current `User-Agent` value.
    pub fn append_user_agent(mut self, product: &str) -> Self {
        if self.user_agent.is_empty() {
            self.user_agent = product.to_string();
        } else {
            self.user_agent = format!("{} {}", self.user_agent, product);
        }
        self
    }

    /// Keeps every response body in [`Response::raw`].
    pub fn raw_capture(mut self, enabled: bool) -> Self {
        self.raw_capture = enabled;
        self
    }

    /// Replaces the default reqwest transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn on_request_completed<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Request, &RawResponse) + Send + Sync + 'static,
    {
        self.on_request_completed = Some(Arc::new(hook));
        self
    }

    pub fn on_response_processed<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Response) + Send + Sync + 'static,
    {
        self.on_response_processed = Some(Arc::new(hook));
        self
    }

    /// Validates the configuration and produces an immutable [`Client`].
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidUrl`] if the base URL cannot be parsed
    /// - [`ApiError::Config`] if the base URL cannot carry paths or the
    ///   user agent is not a valid header value
    pub fn build(self) -> Result<Client, ApiError> {
        let mut base_url = Url::parse(&self.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "base URL {} cannot be used to resolve paths",
                self.base_url
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let user_agent = if self.user_agent.is_empty() {
            None
        } else {
            Some(HeaderValue::from_str(&self.user_agent).map_err(|e| {
                ApiError::Config(format!("invalid user agent {:?}: {}", self.user_agent, e))
            })?)
        };

        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(ReqwestTransport::new()));

        Ok(Client {
            base_url,
            user_agent,
            raw_capture: self.raw_capture,
            transport,
            on_request_completed: self.on_request_completed,
            on_response_processed: self.on_response_processed,
        })
    }
}

/// The shared HTTP client for the Ops Manager API.
///
/// Configuration is fixed at [`ClientBuilder::build`]; the client is cheap to
/// clone and safe to use from many tasks at once.
#[derive(Clone)]
pub struct Client {
    base_url: Url,
    user_agent: Option<HeaderValue>,
    raw_capture: bool,
    transport: Arc<dyn HttpTransport>,
    on_request_completed: Option<RequestCompletedHook>,
    on_response_processed: Option<ResponseProcessedHook>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("raw_capture", &self.raw_capture)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the base URL. Its path always ends with `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_ref().and_then(|v| v.to_str().ok())
    }

    pub fn raw_capture(&self) -> bool {
        self.raw_capture
    }

    fn build(&self, method: Method, path: &str, accept: Accept) -> Result<Request, ApiError> {
        let url = self.base_url.join(path)?;
        Ok(Request::new(method, url, accept, self.user_agent.as_ref()))
    }

    fn process_body<T>(&self, method: &Method, raw: &RawResponse, sink: Sink<'_, T>) -> Result<(), ApiError>
    where
        T: DeserializeOwned,
    {
        if !raw.status.is_success() {
            return Err(error_from_response(method, raw));
        }

        match sink {
            Sink::Discard => Ok(()),
            Sink::Writer(writer) => {
                writer.write_all(&raw.body)?;
                Ok(())
            }
            Sink::Json(target) => {
                if raw.body.iter().all(u8::is_ascii_whitespace) {
                    return Ok(());
                }
                *target = serde_json::from_slice(&raw.body).map_err(ApiError::Decode)?;
                Ok(())
            }
        }
    }
}

#[async_trait]
impl RequestDoer for Client {
    fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Request, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build(method, path, Accept::Json)?;
        match body {
            Some(body) => request.with_json_body(body),
            None => Ok(request),
        }
    }

    fn new_gzip_request(&self, method: Method, path: &str) -> Result<Request, ApiError> {
        self.build(method, path, Accept::Gzip)
    }

    fn new_plain_request(&self, method: Method, path: &str) -> Result<Request, ApiError> {
        self.build(method, path, Accept::PlainText)
    }

    async fn do_request<T>(&self, ctx: &Context, request: Request, sink: Sink<'_, T>) -> Result<Response, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        if let Some(err) = ctx.err() {
            return Err(err.into());
        }

        let method = request.method.clone();
        let sent = self.on_request_completed.as_ref().map(|_| request.clone());
        debug!(%method, url = %request.url, "dispatching request");

        let outcome = tokio::select! {
            biased;
            reason = ctx.done() => return Err(reason.into()),
            result = self.transport.execute(request) => result,
        };

        let raw = match outcome {
            Ok(raw) => raw,
            Err(err) => {
                // The transport usually fails because the context was done.
                if let Some(reason) = ctx.err() {
                    return Err(reason.into());
                }
                return Err(err.into());
            }
        };
        debug!(status = %raw.status, bytes = raw.body.len(), "response received");

        if let (Some(hook), Some(sent)) = (&self.on_request_completed, &sent) {
            hook(sent, &raw);
        }

        let mut response = Response::from_raw(&raw);
        if self.raw_capture {
            trace!(bytes = raw.body.len(), "captured raw response body");
            response.raw = Some(raw.body.clone());
        }

        let result = self.process_body(&method, &raw, sink);
        if let Some(hook) = &self.on_response_processed {
            hook(&response);
        }
        result.map(|()| response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use reqwest::StatusCode;
    use serde::Deserialize;

    use super::*;
    use crate::api::context::ContextError;
    use crate::api::transport::test::{raw_response, MockTransport};
    use crate::api::transport::TransportError;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Project {
        #[serde(default)]
        id: String,
        #[serde(default)]
        name: String,
    }

    fn client_with(transport: MockTransport) -> Client {
        Client::builder()
            .base_url("https://opsmanager.example.com:8080/api/public/v1.0")
            .transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = Client::builder()
            .base_url("https://opsmanager.example.com/api/public/v1.0")
            .build()
            .unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://opsmanager.example.com/api/public/v1.0/"
        );

        let request = client
            .new_request::<()>(Method::GET, "groups/1", None)
            .unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://opsmanager.example.com/api/public/v1.0/groups/1"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Client::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));

        let err = Client::builder().base_url("mailto:ops@example.com").build().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_user_agent_handling() {
        let client = Client::builder().build().unwrap();
        assert_eq!(client.user_agent(), Some(crate::default_user_agent().as_str()));

        let client = Client::builder().append_user_agent("mongocli/1.0").build().unwrap();
        assert_eq!(
            client.user_agent().unwrap(),
            format!("{} mongocli/1.0", crate::default_user_agent())
        );

        let client = Client::builder().user_agent("").build().unwrap();
        let request = client.new_gzip_request(Method::GET, "x").unwrap();
        assert!(request.header("user-agent").is_none());

        let err = Client::builder().user_agent("bad\nagent").build().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_request_builders_set_accept() {
        let client = Client::builder().build().unwrap();

        let json = client.new_request(Method::POST, "groups", Some(&serde_json::json!({"name": "a"}))).unwrap();
        assert_eq!(json.header("accept"), Some("application/json"));
        assert_eq!(json.header("content-type"), Some("application/json"));

        let bare = client.new_request::<()>(Method::GET, "groups", None).unwrap();
        assert!(bare.header("content-type").is_none());
        assert!(bare.body.is_none());

        let gzip = client.new_gzip_request(Method::GET, "groups/1/diagnostics").unwrap();
        assert_eq!(gzip.header("accept"), Some("application/gzip"));

        let plain = client.new_plain_request(Method::GET, "api/private/unauth/version").unwrap();
        assert_eq!(plain.header("accept"), Some("text/plain"));
    }

    #[test]
    fn test_invalid_relative_path() {
        let client = Client::builder().build().unwrap();
        let err = client.new_request::<()>(Method::GET, "http://[::1", None).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_decode_json() {
        let mut transport = MockTransport::new();
        transport.should_respond(200, r#"{"id":"1","name":"ProjectA"}"#);
        let client = client_with(transport);

        let request = client.new_request::<()>(Method::GET, "groups/1", None).unwrap();
        let (project, response) = client
            .send_json::<Project>(&Context::background(), request)
            .await
            .unwrap();
        assert_eq!(project.name, "ProjectA");
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.raw.is_none());
    }

    #[tokio::test]
    async fn test_empty_body_is_not_an_error() {
        let mut transport = MockTransport::new();
        transport.should_respond(200, "");
        let client = client_with(transport);

        let request = client.new_request::<()>(Method::GET, "groups/1", None).unwrap();
        let mut project = Project::default();
        client
            .do_request(&Context::background(), request, Sink::Json(&mut project))
            .await
            .unwrap();
        assert_eq!(project, Project::default());
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let mut transport = MockTransport::new();
        transport.should_respond(200, "{not json");
        let client = client_with(transport);

        let request = client.new_request::<()>(Method::GET, "groups/1", None).unwrap();
        let err = client
            .send_json::<Project>(&Context::background(), request)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_writer_sink_copies_bytes() {
        let mut transport = MockTransport::new();
        transport.should_respond(200, "\u{1f}\u{8b}archive-bytes");
        let client = client_with(transport);

        let request = client.new_gzip_request(Method::GET, "groups/1/diagnostics").unwrap();
        let mut out: Vec<u8> = Vec::new();
        client
            .send_to_writer(&Context::background(), request, &mut out)
            .await
            .unwrap();
        assert_eq!(out, "\u{1f}\u{8b}archive-bytes".as_bytes());
    }

    #[tokio::test]
    async fn test_error_status_short_circuits_decode() {
        let mut transport = MockTransport::new();
        transport.should_respond(
            404,
            r#"{"detail":"No group","error":404,"errorCode":"GROUP_NOT_FOUND","parameters":[],"reason":"Not Found"}"#,
        );
        let client = client_with(transport);

        let request = client.new_request::<()>(Method::GET, "groups/1", None).unwrap();
        let mut out: Vec<u8> = Vec::new();
        let err = client
            .send_to_writer(&Context::background(), request, &mut out)
            .await
            .unwrap_err();

        let envelope = err.as_error_response().unwrap();
        assert!(envelope.is_not_found());
        assert_eq!(envelope.error_code, "GROUP_NOT_FOUND");
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_raw_capture_keeps_body_and_still_decodes() {
        let mut transport = MockTransport::new();
        transport.should_respond(200, r#"{"id":"1","name":"ProjectA"}"#);
        let client = Client::builder()
            .transport(Arc::new(transport))
            .raw_capture(true)
            .build()
            .unwrap();

        let request = client.new_request::<()>(Method::GET, "groups/1", None).unwrap();
        let (project, response) = client
            .send_json::<Project>(&Context::background(), request)
            .await
            .unwrap();
        assert_eq!(project.id, "1");
        assert_eq!(response.raw.as_deref(), Some(br#"{"id":"1","name":"ProjectA"}"#.as_slice()));
    }

    #[tokio::test]
    async fn test_canceled_context_skips_transport() {
        let mut transport = MockTransport::new();
        transport.should_not_be_called();
        let client = client_with(transport);

        let ctx = Context::background();
        ctx.cancel();
        let request = client.new_request::<()>(Method::GET, "groups", None).unwrap();
        let err = client.send(&ctx, request).await.unwrap_err();
        assert!(matches!(err, ApiError::Context(ContextError::Canceled)));
    }

    #[tokio::test]
    async fn test_context_error_wins_over_transport_error() {
        let ctx = Context::background();
        let token = ctx.cancellation_token().clone();

        let mut transport = MockTransport::new();
        transport.expect_execute().once().return_once(move |_| {
            token.cancel();
            Err(TransportError::Other("connection reset".to_string()))
        });
        let client = client_with(transport);

        let request = client.new_request::<()>(Method::GET, "groups", None).unwrap();
        let err = client.send(&ctx, request).await.unwrap_err();
        assert!(matches!(err, ApiError::Context(ContextError::Canceled)));
    }

    #[tokio::test]
    async fn test_transport_error_surfaces_when_context_live() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .once()
            .return_once(|_| Err(TransportError::Other("connection refused".to_string())));
        let client = client_with(transport);

        let request = client.new_request::<()>(Method::GET, "groups", None).unwrap();
        let err = client.send(&Context::background(), request).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    struct SlowTransport;

    #[async_trait]
    impl HttpTransport for SlowTransport {
        async fn execute(&self, request: Request) -> Result<RawResponse, TransportError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(raw_response(request.url, 200, Vec::new()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_aborts_in_flight_call() {
        let client = Client::builder()
            .transport(Arc::new(SlowTransport))
            .build()
            .unwrap();

        let ctx = Context::with_timeout(Duration::from_secs(1));
        let request = client.new_request::<()>(Method::GET, "groups", None).unwrap();
        let err = client.send(&ctx, request).await.unwrap_err();
        assert!(matches!(err, ApiError::Context(ContextError::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn test_callbacks_run_on_success_and_error() {
        let completed = Arc::new(AtomicUsize::new(0));
        let processed = Arc::new(AtomicUsize::new(0));

        let mut transport = MockTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_execute()
            .once()
            .in_sequence(&mut seq)
            .returning(|request| Ok(raw_response(request.url, 200, b"{}".to_vec())));
        transport
            .expect_execute()
            .once()
            .in_sequence(&mut seq)
            .returning(|request| Ok(raw_response(request.url, 500, b"boom".to_vec())));

        let c = Arc::clone(&completed);
        let p = Arc::clone(&processed);
        let client = Client::builder()
            .transport(Arc::new(transport))
            .on_request_completed(move |request, raw| {
                assert_eq!(request.method, Method::GET);
                assert!(!raw.body.is_empty());
                c.fetch_add(1, Ordering::SeqCst);
            })
            .on_response_processed(move |_| {
                p.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        let ctx = Context::background();
        let request = client.new_request::<()>(Method::GET, "groups", None).unwrap();
        client.send(&ctx, request).await.unwrap();

        let request = client.new_request::<()>(Method::GET, "groups", None).unwrap();
        assert!(client.send(&ctx, request).await.is_err());

        assert_eq!(completed.load(Ordering::SeqCst), 2);
        assert_eq!(processed.load(Ordering::SeqCst), 2);
    }
}
