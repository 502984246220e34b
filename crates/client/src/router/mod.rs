//! Client-side navigation guard.
//!
//! Routes marked [`RouteRecord::guarded`] are unreachable without a session.
//! An anonymous visitor is sent to `/?openAuth=login&redirect=<target>` so
//! the front end can open the login prompt and resume afterwards (see
//! [`resume_path`]).
//!
//! The check is local: a token is trusted until an API call comes back 401,
//! which clears it, so the next navigation redirects.

mod guard;
mod routes;

pub use guard::{
    Decision, LOGIN_REDIRECT_PATH, Location, OPEN_AUTH_LOGIN, OPEN_AUTH_PARAM, REDIRECT_PARAM,
    evaluate, requires_auth, resume_path,
};
pub use routes::{RouteMatch, RouteRecord, RouteTable};

use tracing::debug;

use crate::session::SessionStore;

/// Route table plus the session it is gated on.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    session: SessionStore,
}

impl Router {
    #[must_use]
    pub const fn new(table: RouteTable, session: SessionStore) -> Self {
        Self { table, session }
    }

    /// Router over the marketplace's own pages.
    #[must_use]
    pub fn application(session: SessionStore) -> Self {
        Self::new(RouteTable::application(), session)
    }

    #[must_use]
    pub const fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Evaluate a navigation to `full_path`.
    ///
    /// Paths that match no route carry no requirement and are allowed.
    #[must_use]
    pub fn navigate(&self, full_path: &str) -> Decision {
        let chain = self
            .table
            .resolve(full_path)
            .map(|matched| matched.chain)
            .unwrap_or_default();

        let decision = evaluate(&chain, full_path, self.session.is_authenticated());
        if let Decision::Redirected(location) = &decision {
            debug!(target = %full_path, redirect = %location, "Login required, redirecting");
        }
        decision
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_application_table_guards() {
        let router = Router::application(SessionStore::in_memory());
        for path in ["/", "/product-detail/3"] {
            assert!(router.navigate(path).is_allowed(), "{path}");
        }
        for path in ["/orders", "/orderDetails?id=4", "/usedBook/orders", "/profile"] {
            assert!(!router.navigate(path).is_allowed(), "{path}");
        }
    }

    #[test]
    fn test_unmatched_path_is_allowed() {
        let router = Router::application(SessionStore::in_memory());
        assert_eq!(router.navigate("/no/such/page"), Decision::Allowed);
    }

    #[test]
    fn test_follows_session_changes() {
        let session = SessionStore::in_memory();
        let router = Router::application(session.clone());
        assert!(!router.navigate("/profile").is_allowed());

        session.set_token("t").unwrap();
        assert!(router.navigate("/profile").is_allowed());

        session.expire().unwrap();
        let Decision::Redirected(location) = router.navigate("/profile") else {
            panic!("expected redirect after expiry");
        };
        assert_eq!(location.query(REDIRECT_PARAM), Some("/profile"));
    }
}
