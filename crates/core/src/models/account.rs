//! Account, login and registration records.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::types::{Telephone, UserId};

/// Body of `POST /accounts/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub telephone: Telephone,
    #[serde(with = "secret")]
    pub password: SecretString,
}

/// Body of `POST /accounts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub telephone: Telephone,
    #[serde(with = "secret")]
    pub password: SecretString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Body of `PUT /accounts`. Only `username` is required; unset fields are
/// left unchanged by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserInfoRequest {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "secret::optional")]
    pub password: Option<SecretString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<Telephone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Profile of the logged-in user, from `GET /accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    pub id: UserId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Stored as entered; not re-validated when read back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Result of `POST /img`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadImageData {
    /// Public URL of the stored image.
    pub url: String,
}

/// Passwords stay wrapped until the request body is written.
mod secret {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SecretString, D::Error> {
        String::deserialize(deserializer).map(SecretString::from)
    }

    pub mod optional {
        use super::{Deserialize, Deserializer, ExposeSecret, SecretString, Serializer};

        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(
            secret: &Option<SecretString>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match secret {
                Some(secret) => serializer.serialize_some(secret.expose_secret()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<SecretString>, D::Error> {
            Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_login_request_debug_redacts_password() {
        let req = LoginRequest {
            telephone: Telephone::parse("1234567890").unwrap(),
            password: SecretString::from("hunter2"),
        };
        let debug = format!("{req:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_update_user_info_debug_redacts_password() {
        let req = UpdateUserInfoRequest {
            username: "reader".to_owned(),
            password: Some(SecretString::from("hunter2")),
            ..UpdateUserInfoRequest::default()
        };
        assert!(!format!("{req:?}").contains("hunter2"));
    }

    #[test]
    fn test_login_request_reads_password_back() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"telephone":"1234567890","password":"pw"}"#).unwrap();
        assert_eq!(req.password.expose_secret(), "pw");
    }

    #[test]
    fn test_login_request_wire_format() {
        let req = LoginRequest {
            telephone: Telephone::parse("1234567890").unwrap(),
            password: SecretString::from("x"),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"telephone": "1234567890", "password": "x"})
        );
    }

    #[test]
    fn test_update_user_info_only_sends_set_fields() {
        let req = UpdateUserInfoRequest {
            username: "reader".to_owned(),
            location: Some("Hangzhou".to_owned()),
            ..UpdateUserInfoRequest::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"username": "reader", "location": "Hangzhou"})
        );

        let with_password = UpdateUserInfoRequest {
            password: Some(SecretString::from("new")),
            ..req
        };
        assert_eq!(
            serde_json::to_value(&with_password).unwrap()["password"],
            "new"
        );
    }
}
