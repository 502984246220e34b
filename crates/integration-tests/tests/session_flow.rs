//! Token handling across the whole client: header injection, login, and
//! forced logout on 401.

#![allow(clippy::unwrap_used)]

use bookmarket_client::SessionState;
use bookmarket_client::error::ErrorKind;
use bookmarket_core::{LoginRequest, Telephone};
use bookmarket_integration_tests::{TestContext, success};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn cart_body() -> serde_json::Value {
    json!({ "total": 0, "items": [] })
}

#[tokio::test]
async fn test_token_header_follows_session() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/cart/"))
        .respond_with(success(cart_body()))
        .mount(&ctx.server)
        .await;

    ctx.api.get_cart().await.unwrap();
    ctx.session.set_token("tok-1").unwrap();
    ctx.api.get_cart().await.unwrap();
    ctx.session.clear().unwrap();
    ctx.api.get_cart().await.unwrap();

    let requests = ctx.server.received_requests().await.unwrap();
    let tokens: Vec<_> = requests
        .iter()
        .map(|r| r.headers.get("token").map(|v| v.to_str().unwrap().to_owned()))
        .collect();
    assert_eq!(tokens, [None, Some("tok-1".to_owned()), None]);
}

#[tokio::test]
async fn test_login_then_cart_carries_token() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/api/accounts/login"))
        .and(body_json(json!({ "telephone": "1234567890", "password": "x" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "code": 200, "data": true, "msg": "" })),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cart/"))
        .and(header("token", "issued-after-login"))
        .respond_with(success(cart_body()))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let request = LoginRequest {
        telephone: Telephone::parse("1234567890").unwrap(),
        password: SecretString::from("x"),
    };
    assert!(ctx.api.login(&request).await.unwrap());

    // The caller stores the token it obtained for this login
    ctx.session.set_token("issued-after-login").unwrap();
    let cart = ctx.api.get_cart().await.unwrap();
    assert!(cart.items.is_empty());
}

#[tokio::test]
async fn test_unauthorized_clears_persisted_token() {
    let ctx = TestContext::new().await;
    ctx.session.set_token("stale").unwrap();
    Mock::given(method("GET"))
        .and(path("/api/orders/my"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&ctx.server)
        .await;

    let mut changes = ctx.session.subscribe();
    let err = ctx.api.get_my_orders(None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    assert!(err.is_unauthenticated());
    assert!(ctx.session.token().unwrap().is_none());
    assert!(ctx.reopen_session().token().unwrap().is_none());

    changes.changed().await.unwrap();
    assert_eq!(*changes.borrow(), SessionState::Expired);

    // Later navigation to a guarded page redirects
    assert!(!ctx.router.navigate("/orders").is_allowed());
}

#[tokio::test]
async fn test_session_survives_restart() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/api/accounts/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("token", "from-header")
                .set_body_json(json!({ "code": 0, "data": true })),
        )
        .mount(&ctx.server)
        .await;

    let request = LoginRequest {
        telephone: Telephone::parse("1234567890").unwrap(),
        password: SecretString::from("x"),
    };
    assert!(ctx.api.login_and_store(&request).await.unwrap());

    let reopened = ctx.reopen_session();
    assert_eq!(reopened.state(), SessionState::Authenticated);
    assert_eq!(reopened.token().unwrap().unwrap().expose_secret(), "from-header");
}
