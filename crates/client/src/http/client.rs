//! The shared HTTP client every API call goes through.
//!
//! Outgoing, it attaches the session token as a `token` header. Incoming, it
//! unwraps the envelope of 2xx responses and classifies everything else,
//! clearing the session on 401. Failures are logged here and nowhere else.

use std::future::Future;
use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, instrument, warn};
use url::Url;

use super::envelope::{Envelope, SuccessCodes, unwrap_envelope};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::SessionStore;

/// Header the session token is sent in.
pub const TOKEN_HEADER: &str = "token";

/// Default request content type.
const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Per-call additions merged over the client defaults.
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    query: Vec<(String, String)>,
    headers: HeaderMap,
}

impl RequestOptions {
    /// No additions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Append a query parameter when `value` is present.
    #[must_use]
    pub fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Set a header, replacing a default (or the session token) of the same name.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Query parameters added so far.
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}

/// Request body.
#[derive(Debug)]
pub enum Payload {
    Empty,
    Json(serde_json::Value),
    Multipart(Form),
}

impl Payload {
    /// Serialize `body` as a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, ApiError> {
        serde_json::to_value(body)
            .map(Self::Json)
            .map_err(ApiError::Encode)
    }
}

/// A successful response: its headers and the unwrapped envelope.
#[derive(Debug)]
pub struct Reply<T> {
    pub headers: HeaderMap,
    pub envelope: Envelope<T>,
}

/// HTTP client for the marketplace API.
///
/// Cloning is cheap; clones share the connection pool and session.
#[derive(Clone, Debug)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

#[derive(Debug)]
struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    success_codes: SuccessCodes,
}

impl ApiClient {
    /// Create a client from configuration, sharing `session`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` if the base URL cannot be resolved,
    /// or `ApiError::Setup` if the HTTP client fails to build.
    pub fn new(config: &ClientConfig, session: SessionStore) -> Result<Self, ApiError> {
        let base_url = config
            .base_url()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ApiError::Setup)?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: base_url.as_str().trim_end_matches('/').to_owned(),
                session,
                success_codes: config.success_codes.clone(),
            }),
        })
    }

    /// The session this client reads tokens from.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Base URL all paths are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    // =========================================================================
    // Verbs
    // =========================================================================

    /// `GET path`, query parameters from `options`.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError` for any failure.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Envelope<T>, ApiError> {
        self.envelope(Method::GET, path, Payload::Empty, options).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError` for any failure.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<Envelope<T>, ApiError> {
        self.envelope(Method::POST, path, Payload::json(body)?, options)
            .await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError` for any failure.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<Envelope<T>, ApiError> {
        self.envelope(Method::PUT, path, Payload::json(body)?, options)
            .await
    }

    /// `PATCH path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError` for any failure.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<Envelope<T>, ApiError> {
        self.envelope(Method::PATCH, path, Payload::json(body)?, options)
            .await
    }

    /// `DELETE path`, query parameters from `options`.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError` for any failure.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Envelope<T>, ApiError> {
        self.envelope(Method::DELETE, path, Payload::Empty, options)
            .await
    }

    /// `POST path` with a multipart form body.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError` for any failure.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
        options: RequestOptions,
    ) -> Result<Envelope<T>, ApiError> {
        self.envelope(Method::POST, path, Payload::Multipart(form), options)
            .await
    }

    async fn envelope<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
        options: RequestOptions,
    ) -> Result<Envelope<T>, ApiError> {
        self.request(method, path, payload, options)
            .await
            .map(|reply| reply.envelope)
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    /// Send one request through the full pipeline.
    ///
    /// Use this over the verb helpers when the response headers matter.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError` for any failure.
    #[instrument(skip(self, payload, options), fields(method = %method))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
        options: RequestOptions,
    ) -> Result<Reply<T>, ApiError> {
        let url = self.endpoint(path, &options.query)?;

        let mut request = self.inner.http.request(method, url);
        request = self.attach_session(request)?;
        request = request.headers(options.headers);
        request = match payload {
            Payload::Empty => request,
            Payload::Json(body) => request.json(&body),
            Payload::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await.map_err(|e| {
            error!(error = %e, timeout = e.is_timeout(), "Network error, check your connection");
            ApiError::Network(e)
        })?;

        self.interpret(response).await
    }

    /// Join `path` onto the base URL and append `query`.
    fn endpoint(&self, path: &str, query: &[(String, String)]) -> Result<Url, ApiError> {
        let path = path.trim_start_matches('/');
        let raw = format!("{}/{path}", self.inner.base_url);
        let mut url = Url::parse(&raw).map_err(|e| {
            error!(url = %raw, error = %e, "Invalid request URL");
            ApiError::InvalidRequest(format!("{raw}: {e}"))
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Outgoing step: attach the session token when one is stored.
    fn attach_session(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = match self.inner.session.token() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to read session token, sending without it");
                None
            }
        };

        let Some(token) = token else {
            return Ok(request);
        };

        let mut value = HeaderValue::from_str(token.expose_secret()).map_err(|_| {
            error!("Stored session token is not a valid header value");
            ApiError::InvalidRequest("session token is not a valid header value".to_owned())
        })?;
        value.set_sensitive(true);

        Ok(request.header(TOKEN_HEADER, value))
    }

    /// Incoming step: unwrap the envelope or classify the failure.
    async fn interpret<T: DeserializeOwned>(&self, response: Response) -> Result<Reply<T>, ApiError> {
        let status = response.status();
        let headers = response.headers().clone();

        // The status alone settles the session; the body may still fail to arrive.
        if status == StatusCode::UNAUTHORIZED {
            match self.inner.session.expire() {
                Ok(()) => debug!("Session token cleared after 401"),
                Err(e) => warn!(error = %e, "Failed to clear session token after 401"),
            }
        }

        let body = response.text().await.map_err(|e| {
            error!(status = %status, error = %e, "Network error while reading response body");
            ApiError::Network(e)
        })?;

        if !status.is_success() {
            let err = ApiError::from_status(status, body);
            error!(
                status = status.as_u16(),
                kind = ?err.kind(),
                body = %truncate(err_body(&err)),
                "{err}"
            );
            return Err(err);
        }

        let raw: Envelope<serde_json::Value> = serde_json::from_str(&body).map_err(|e| {
            error!(
                error = %e,
                body = %truncate(&body),
                "Failed to parse response envelope"
            );
            ApiError::Decode(e)
        })?;

        let envelope = unwrap_envelope(raw, &self.inner.success_codes).inspect_err(|e| {
            if matches!(e, ApiError::Decode(_)) {
                error!(error = %e, "Response payload did not match the expected type");
            }
        })?;

        Ok(Reply { headers, envelope })
    }
}

/// Race `call` against `token`.
///
/// On cancellation `call` is dropped before its response is interpreted, so
/// none of the incoming side effects (such as clearing the session on 401)
/// happen for it.
///
/// # Errors
///
/// Returns `ApiError::Cancelled` if `token` fires first, otherwise whatever
/// `call` returns.
pub async fn cancellable<T, F>(token: &CancellationToken, call: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    tokio::select! {
        biased;
        () = token.cancelled() => {
            debug!("API call cancelled");
            Err(ApiError::Cancelled)
        }
        result = call => result,
    }
}

fn err_body(err: &ApiError) -> &str {
    match err {
        ApiError::Unauthenticated { body }
        | ApiError::Forbidden { body }
        | ApiError::NotFound { body }
        | ApiError::Server { body }
        | ApiError::Connection { body, .. } => body,
        _ => "",
    }
}

fn truncate(s: &str) -> String {
    s.chars().take(500).collect()
}
