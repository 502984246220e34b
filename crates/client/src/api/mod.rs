//! Typed catalog of marketplace API operations.
//!
//! Every method builds exactly one request through the shared
//! [`ApiClient`], unwraps the envelope payload and hands errors back
//! unchanged. Nothing here retries or caches.
//!
//! Methods are grouped by domain, one `impl BookmarketApi` block per file:
//!
//! - [`products`] - detail, recommendations, category lists, search
//! - [`cart`] - cart lines
//! - [`account`] - login, registration, profile, image upload
//! - [`orders`] - checkout, payment, purchase history
//! - [`used_books`] - seller-side listings
//! - [`favorites`] - saved books
//! - [`address`] - address book

pub mod account;
pub mod address;
pub mod cart;
pub mod favorites;
pub mod orders;
pub mod products;
pub mod used_books;

use std::borrow::Cow;

use serde::de::IgnoredAny;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{ApiClient, Envelope};
use crate::session::SessionStore;

/// Client for the marketplace API.
///
/// Cloning is cheap; clones share the underlying [`ApiClient`].
#[derive(Debug, Clone)]
pub struct BookmarketApi {
    http: ApiClient,
}

impl BookmarketApi {
    /// Wrap an existing HTTP client.
    #[must_use]
    pub const fn new(http: ApiClient) -> Self {
        Self { http }
    }

    /// Build the HTTP client from configuration and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig, session: SessionStore) -> Result<Self, ApiError> {
        ApiClient::new(config, session).map(Self::new)
    }

    /// The underlying HTTP client.
    #[must_use]
    pub const fn http(&self) -> &ApiClient {
        &self.http
    }

    /// The session the client reads its token from.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        self.http.session()
    }
}

/// Percent-encode a free-text path segment.
fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Discard the payload of an operation that only reports success.
#[allow(clippy::needless_pass_by_value)]
fn done(_: Envelope<IgnoredAny>) {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    //! Mock server plumbing shared by the catalog tests.

    use serde_json::{Value, json};
    use url::Url;
    use wiremock::MockServer;

    use super::BookmarketApi;
    use crate::config::ClientConfig;
    use crate::session::SessionStore;

    /// A catalog client pointed at a fresh mock server.
    pub async fn api() -> (MockServer, BookmarketApi) {
        api_accepting("200,0").await
    }

    /// Like [`api`], accepting only `codes` as success.
    pub async fn api_accepting(codes: &str) -> (MockServer, BookmarketApi) {
        let server = MockServer::start().await;
        let mut config = ClientConfig::new(Url::parse(&server.uri()).unwrap());
        config.success_codes = codes.parse().unwrap();
        let api = BookmarketApi::from_config(&config, SessionStore::in_memory()).unwrap();
        (server, api)
    }

    /// A successful envelope around `data`.
    pub fn ok(data: Value) -> Value {
        json!({ "code": 200, "data": data, "msg": "" })
    }

    /// A minimal product as the backend sends it.
    pub fn product(id: u64, title: &str) -> Value {
        json!({
            "ubId": id,
            "title": title,
            "price": 12.5,
            "cover": format!("/img/{id}.jpg"),
            "stock": 3
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_encodes_free_text() {
        assert_eq!(segment("harry potter"), "harry%20potter");
        assert_eq!(segment("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(segment("plain"), "plain");
    }
}
