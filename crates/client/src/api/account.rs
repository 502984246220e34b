//! Authentication and account management.
//!
//! [`BookmarketApi::login`] only reports whether the credentials were
//! accepted; storing the issued token is the caller's job, either directly
//! through [`SessionStore::set_token`](crate::session::SessionStore::set_token)
//! or by using [`BookmarketApi::login_and_store`], which picks the token up
//! from the `token` response header.

use std::path::Path;

use bookmarket_core::{
    LoginRequest, RegisterRequest, UpdateUserInfoRequest, UploadImageData, UserDetail,
};
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument, warn};

use super::{BookmarketApi, done};
use crate::error::ApiError;
use crate::http::{Payload, RequestOptions, TOKEN_HEADER};

/// Multipart field the image is sent in.
const UPLOAD_FIELD: &str = "file";

impl BookmarketApi {
    /// Check credentials.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails or the server rejects the login.
    #[instrument(skip(self, request), fields(telephone = %request.telephone))]
    pub async fn login(&self, request: &LoginRequest) -> Result<bool, ApiError> {
        self.http
            .post("/accounts/login", request, RequestOptions::new())
            .await?
            .into_data()
    }

    /// Log in and, on success, store the token the server issued.
    ///
    /// Returns `false` without touching the session when the server answers
    /// `data: false`. A successful login without a `token` header leaves
    /// the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails or the token cannot be stored.
    #[instrument(skip(self, request), fields(telephone = %request.telephone))]
    pub async fn login_and_store(&self, request: &LoginRequest) -> Result<bool, ApiError> {
        let reply = self
            .http
            .request::<bool>(
                Method::POST,
                "/accounts/login",
                Payload::json(request)?,
                RequestOptions::new(),
            )
            .await?;

        let accepted = reply.envelope.into_data()?;
        if !accepted {
            return Ok(false);
        }

        match reply
            .headers
            .get(TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            Some(token) if !token.trim().is_empty() => {
                self.session().set_token(token)?;
                debug!("Stored session token from login response");
            }
            _ => warn!("Login succeeded but the response carried no token header"),
        }

        Ok(true)
    }

    /// Forget the stored session. Purely local; the server is not contacted.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Storage` if the session cannot be cleared.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.session().clear()?;
        Ok(())
    }

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails or the telephone is taken.
    #[instrument(skip(self, request), fields(telephone = %request.telephone))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<bool, ApiError> {
        self.http
            .post("/accounts", request, RequestOptions::new())
            .await?
            .into_data()
    }

    /// Upload an image held in memory.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadImageData, ApiError> {
        let mut part = Part::bytes(bytes).file_name(file_name.to_owned());
        if let Some(mime) = image_mime(file_name) {
            part = part
                .mime_str(mime)
                .map_err(|e| {
                    warn!(error = %e, "Invalid upload content type");
                    ApiError::InvalidRequest(e.to_string())
                })?;
        }

        self.http
            .post_multipart(
                "/img",
                Form::new().part(UPLOAD_FIELD, part),
                RequestOptions::new(),
            )
            .await?
            .into_data()
    }

    /// Upload an image from disk.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` if the file cannot be read, or
    /// `ApiError` if the call fails.
    pub async fn upload_image_file(&self, path: &Path) -> Result<UploadImageData, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| {
                warn!(path = %path.display(), error = %e, "Failed to read upload file");
                ApiError::InvalidRequest(format!("{}: {e}", path.display()))
            })?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload");
        self.upload_image(file_name, bytes).await
    }

    /// Profile of the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthenticated` without a valid session, or
    /// `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn get_current_user(&self) -> Result<UserDetail, ApiError> {
        self.http
            .get("/accounts", RequestOptions::new())
            .await?
            .into_data()
    }

    /// Update the logged-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails. The server requires `username`
    /// and rejects the update without it.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn update_user_info(&self, request: &UpdateUserInfoRequest) -> Result<(), ApiError> {
        self.http
            .put("/accounts", request, RequestOptions::new())
            .await
            .map(done)
    }
}

/// Content type for common image extensions.
fn image_mime(file_name: &str) -> Option<&'static str> {
    let ext = Path::new(file_name).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bookmarket_core::{Telephone, UserId};
    use secrecy::{ExposeSecret, SecretString};
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string_contains, header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::*;
    use crate::api::test_support::{api, ok};

    fn credentials() -> LoginRequest {
        LoginRequest {
            telephone: Telephone::parse("1234567890").unwrap(),
            password: SecretString::from("x"),
        }
    }

    #[tokio::test]
    async fn test_login_sends_credentials() {
        let (server, api) = api().await;
        Mock::given(method("POST"))
            .and(path("/api/accounts/login"))
            .and(body_json(json!({ "telephone": "1234567890", "password": "x" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!(true))))
            .expect(1)
            .mount(&server)
            .await;

        assert!(api.login(&credentials()).await.unwrap());
        // Plain login leaves token handling to the caller
        assert!(!api.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_login_and_store_keeps_header_token() {
        let (server, api) = api().await;
        Mock::given(method("POST"))
            .and(path("/api/accounts/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("token", "issued-token")
                    .set_body_json(ok(json!(true))),
            )
            .mount(&server)
            .await;

        assert!(api.login_and_store(&credentials()).await.unwrap());
        let token = api.session().token().unwrap().unwrap();
        assert_eq!(token.expose_secret(), "issued-token");
    }

    #[tokio::test]
    async fn test_login_and_store_rejected_login() {
        let (server, api) = api().await;
        Mock::given(method("POST"))
            .and(path("/api/accounts/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("token", "should-not-be-kept")
                    .set_body_json(ok(json!(false))),
            )
            .mount(&server)
            .await;

        assert!(!api.login_and_store(&credentials()).await.unwrap());
        assert!(!api.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (_server, api) = api().await;
        api.session().set_token("t").unwrap();
        api.logout().unwrap();
        assert!(!api.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_get_current_user() {
        let (server, api) = api().await;
        api.session().set_token("t-user").unwrap();
        Mock::given(method("GET"))
            .and(path("/api/accounts"))
            .and(header("token", "t-user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
                "id": 11,
                "username": "reader",
                "telephone": "1234567890"
            }))))
            .mount(&server)
            .await;

        let user = api.get_current_user().await.unwrap();
        assert_eq!(user.id, UserId::new(11));
        assert_eq!(user.username, "reader");
    }

    #[tokio::test]
    async fn test_update_user_info_blank_username_is_rejected_by_server() {
        let (server, api) = api().await;
        Mock::given(method("PUT"))
            .and(path("/api/accounts"))
            .and(body_json(json!({ "username": "" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 400,
                "data": null,
                "msg": "username is required"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = api
            .update_user_info(&UpdateUserInfoRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Application { .. }));
        assert_eq!(err.to_string(), "username is required");
    }

    #[tokio::test]
    async fn test_update_user_info() {
        let (server, api) = api().await;
        Mock::given(method("PUT"))
            .and(path("/api/accounts"))
            .and(body_json(json!({ "username": "reader", "location": "Shanghai" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!("updated"))))
            .expect(1)
            .mount(&server)
            .await;

        let request = UpdateUserInfoRequest {
            username: "reader".to_owned(),
            location: Some("Shanghai".to_owned()),
            ..UpdateUserInfoRequest::default()
        };
        api.update_user_info(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_upload_image_multipart_field() {
        let (server, api) = api().await;
        Mock::given(method("POST"))
            .and(path("/api/img"))
            .and(body_string_contains("name=\"file\""))
            .and(body_string_contains("filename=\"avatar.png\""))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(ok(json!({ "url": "/img/avatar.png" }))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let uploaded = api
            .upload_image("avatar.png", b"fake png bytes".to_vec())
            .await
            .unwrap();
        assert_eq!(uploaded.url, "/img/avatar.png");
    }

    #[tokio::test]
    async fn test_upload_missing_file() {
        let (_server, api) = api().await;
        let dir = tempfile::tempdir().unwrap();
        let err = api
            .upload_image_file(&dir.path().join("absent.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime("a.JPG"), Some("image/jpeg"));
        assert_eq!(image_mime("a.webp"), Some("image/webp"));
        assert_eq!(image_mime("a.txt"), None);
        assert_eq!(image_mime("noext"), None);
    }
}
