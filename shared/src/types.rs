use serde::{Deserialize, Serialize};

// ============================================================================
// Domain Types
// ============================================================================

/// Account profile returned by the backend after a successful sign-in.
/// Field names match the backend's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub picture: String,
}

impl User {
    /// "First Last", trimmed; falls back to the email address when both
    /// name parts are empty.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string();
        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }
}

/// Client-side session state. Both tokens present means logged in; the
/// profile is optional because the stored copy may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: Option<User>,
}

// ============================================================================
// API Request Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub id_token: String,
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access: String,
    pub refresh: String,
    pub user: User,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Session {
            access_token: resp.access,
            refresh_token: resp.refresh,
            user: Some(resp.user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_user() -> User {
        User {
            id: 7,
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            picture: "https://example.com/ada.png".to_string(),
        }
    }

    #[test]
    fn display_name_joins_first_and_last() {
        assert_eq!(sample_user().display_name(), "Ada Lovelace");
    }

    #[test]
    fn display_name_falls_back_to_email_when_names_empty() {
        let user = User {
            first_name: String::new(),
            last_name: String::new(),
            ..sample_user()
        };
        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn display_name_has_no_trailing_space_for_single_name() {
        let user = User {
            last_name: String::new(),
            ..sample_user()
        };
        assert_eq!(user.display_name(), "Ada");
    }

    #[test]
    fn auth_request_serializes_id_token_field() {
        let body = serde_json::to_value(AuthRequest {
            id_token: "tok".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "id_token": "tok" }));
    }

    #[test]
    fn auth_response_parses_backend_wire_format() {
        let resp: AuthResponse = serde_json::from_str(
            r#"{
                "access": "a",
                "refresh": "r",
                "user": {
                    "id": 7,
                    "email": "ada@example.com",
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "picture": "https://example.com/ada.png"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(resp.access, "a");
        assert_eq!(resp.refresh, "r");
        assert_eq!(resp.user, sample_user());
    }

    #[test]
    fn auth_response_converts_into_complete_session() {
        let session: Session = AuthResponse {
            access: "a".to_string(),
            refresh: "r".to_string(),
            user: sample_user(),
        }
        .into();
        assert_eq!(session.access_token, "a");
        assert_eq!(session.refresh_token, "r");
        assert_eq!(session.user, Some(sample_user()));
    }
}
