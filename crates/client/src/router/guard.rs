//! Login gate for navigation.
//!
//! [`evaluate`] is a pure function of the matched route chain and whether a
//! session exists, so it can be tested without a router or storage.

use core::fmt;

use url::form_urlencoded;

use super::routes::RouteRecord;

/// Path unauthenticated visitors are sent to.
pub const LOGIN_REDIRECT_PATH: &str = "/";

/// Query parameter that tells the root page to open a prompt.
pub const OPEN_AUTH_PARAM: &str = "openAuth";

/// Value of [`OPEN_AUTH_PARAM`] that selects the login prompt.
pub const OPEN_AUTH_LOGIN: &str = "login";

/// Query parameter carrying the originally requested full path.
pub const REDIRECT_PARAM: &str = "redirect";

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Enter the requested route.
    Allowed,
    /// Go to this location instead.
    Redirected(Location),
}

impl Decision {
    /// Whether navigation proceeds to the requested route.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// A path plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
}

impl Location {
    /// The login detour for an attempt to reach `full_path`.
    #[must_use]
    pub fn login(full_path: &str) -> Self {
        Self {
            path: LOGIN_REDIRECT_PATH.to_owned(),
            query: vec![
                (OPEN_AUTH_PARAM.to_owned(), OPEN_AUTH_LOGIN.to_owned()),
                (REDIRECT_PARAM.to_owned(), full_path.to_owned()),
            ],
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Value of query parameter `key`, decoded.
    #[must_use]
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

/// Whether any record in the chain, ancestors included, requires login.
#[must_use]
pub fn requires_auth(chain: &[&RouteRecord]) -> bool {
    chain.iter().any(|record| record.requires_auth())
}

/// Decide whether navigation to `full_path`, matched as `chain`, may
/// proceed.
///
/// `full_path` is carried verbatim (query and fragment included) in the
/// redirect so the original destination can be resumed after login.
#[must_use]
pub fn evaluate(chain: &[&RouteRecord], full_path: &str, session_present: bool) -> Decision {
    if !requires_auth(chain) || session_present {
        return Decision::Allowed;
    }
    Decision::Redirected(Location::login(full_path))
}

/// Where to continue after logging in, given the location the guard
/// redirected to.
///
/// Only same-site paths are returned: the target must start with a single
/// `/`.
#[must_use]
pub fn resume_path(location: &str) -> Option<String> {
    let (_, query) = location.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == REDIRECT_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|target| target.starts_with('/') && !target.starts_with("//"))
}
