//! Navigation guard wired to a real session.

#![allow(clippy::unwrap_used)]

use bookmarket_client::router::{
    Decision, OPEN_AUTH_PARAM, REDIRECT_PARAM, RouteRecord, RouteTable, Router, resume_path,
};
use bookmarket_integration_tests::TestContext;

#[tokio::test]
async fn test_redirect_then_resume_after_login() {
    let ctx = TestContext::new().await;
    let target = "/usedBook/orders?status=CHECKING";

    let Decision::Redirected(location) = ctx.router.navigate(target) else {
        panic!("expected redirect");
    };
    assert_eq!(location.path(), "/");
    assert_eq!(location.query(OPEN_AUTH_PARAM), Some("login"));
    assert_eq!(location.query(REDIRECT_PARAM), Some(target));

    ctx.session.set_token("t").unwrap();
    let resumed = resume_path(&location.to_string()).unwrap();
    assert_eq!(resumed, target);
    assert_eq!(ctx.router.navigate(&resumed), Decision::Allowed);
}

#[tokio::test]
async fn test_public_pages_never_redirect() {
    let ctx = TestContext::new().await;
    for path in ["/", "/product-detail/12", "/unknown"] {
        assert_eq!(ctx.router.navigate(path), Decision::Allowed, "{path}");
    }
}

#[test]
fn test_custom_table_inherits_guard() {
    let session = bookmarket_client::SessionStore::in_memory();
    let router = Router::new(
        RouteTable::new(vec![
            RouteRecord::new("/shop").child(RouteRecord::new("checkout").guarded()),
            RouteRecord::new("/me").guarded().child(RouteRecord::new(":section")),
        ]),
        session,
    );

    assert!(router.navigate("/shop").is_allowed());
    assert!(!router.navigate("/shop/checkout").is_allowed());
    assert!(!router.navigate("/me/favorites").is_allowed());
}
