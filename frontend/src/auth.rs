use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use shared::{AuthRequest, AuthResponse, Session, User};
use thiserror::Error;

const AUTH_ENDPOINT: &str = "http://localhost:8000/api/user/auth/google/";

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USER_INFO_KEY: &str = "user_info";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("auth endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Sends the widget credential to the backend and returns the session it
/// grants. Nothing is written to storage here.
pub async fn exchange_credential(id_token: String) -> Result<Session, AuthError> {
    let resp = Request::post(AUTH_ENDPOINT)
        .json(&AuthRequest { id_token })?
        .send()
        .await?;

    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::Rejected {
            status: resp.status(),
            body,
        });
    }

    let granted: AuthResponse = resp.json().await?;
    Ok(granted.into())
}

/// A session is restored only when both tokens are present. The stored
/// profile is best-effort; a missing or undecodable entry is dropped.
pub fn load_session() -> Option<Session> {
    let access_token: String = LocalStorage::get(ACCESS_TOKEN_KEY).ok()?;
    let refresh_token: String = LocalStorage::get(REFRESH_TOKEN_KEY).ok()?;
    let user: Option<User> = LocalStorage::get(USER_INFO_KEY).ok();
    Some(Session {
        access_token,
        refresh_token,
        user,
    })
}

pub fn store_session(session: &Session) {
    let _ = LocalStorage::set(ACCESS_TOKEN_KEY, &session.access_token);
    let _ = LocalStorage::set(REFRESH_TOKEN_KEY, &session.refresh_token);
    if let Some(user) = &session.user {
        let _ = LocalStorage::set(USER_INFO_KEY, user);
    }
}

pub fn clear_session() {
    LocalStorage::delete(ACCESS_TOKEN_KEY);
    LocalStorage::delete(REFRESH_TOKEN_KEY);
    LocalStorage::delete(USER_INFO_KEY);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_session() -> Session {
        Session {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            user: Some(User {
                id: 7,
                email: "ada@example.com".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                picture: String::new(),
            }),
        }
    }

    #[wasm_bindgen_test]
    fn load_requires_both_tokens() {
        clear_session();
        let _ = LocalStorage::set(ACCESS_TOKEN_KEY, "a");
        assert!(load_session().is_none());
    }

    #[wasm_bindgen_test]
    fn store_then_load_restores_the_session() {
        clear_session();
        let session = sample_session();
        store_session(&session);
        assert_eq!(load_session(), Some(session));
    }

    #[wasm_bindgen_test]
    fn load_survives_missing_profile_entry() {
        clear_session();
        let session = Session {
            user: None,
            ..sample_session()
        };
        store_session(&session);
        assert_eq!(load_session().unwrap().user, None);
    }

    #[wasm_bindgen_test]
    fn clear_removes_every_key() {
        store_session(&sample_session());
        clear_session();
        assert!(load_session().is_none());
        assert!(LocalStorage::get::<User>(USER_INFO_KEY).is_err());
    }
}
