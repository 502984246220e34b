//! `navigate`: evaluate the navigation guard for a path.

use bookmarket_client::Router;
use bookmarket_client::router::Decision;
use serde_json::{Value, json};

pub fn run(router: &Router, path: &str) -> Value {
    match router.navigate(path) {
        Decision::Allowed => json!({ "decision": "allowed", "path": path }),
        Decision::Redirected(location) => json!({
            "decision": "redirected",
            "path": path,
            "location": location.to_string(),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;

    #[tokio::test]
    async fn test_guarded_page_without_session() {
        let (_server, ctx) = context().await;
        let output = run(&ctx.router, "/profile");
        assert_eq!(output["decision"], "redirected");
        assert_eq!(output["location"], "/?openAuth=login&redirect=%2Fprofile");
    }

    #[tokio::test]
    async fn test_guarded_page_with_session() {
        let (_server, ctx) = context().await;
        ctx.api.session().set_token("t").unwrap();
        assert_eq!(run(&ctx.router, "/profile")["decision"], "allowed");
    }
}
