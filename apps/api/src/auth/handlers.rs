use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::auth::guard::Actor;
use crate::auth::service;
use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::models::account::{Account, AuthResponse, LoginRequest, RegisterRequest};
use crate::state::AppState;

/// POST /auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let session = service::register(state.accounts.as_ref(), &state.tokens, req).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// POST /auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    Ok(Json(
        service::login(state.accounts.as_ref(), &state.tokens, req).await?,
    ))
}

/// GET /auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Account>, AppError> {
    Ok(Json(
        service::current_account(state.accounts.as_ref(), actor.account_id).await?,
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::test_support::TestApp;

    fn jane() -> serde_json::Value {
        json!({ "email": "jane@example.com", "password": "secret123", "name": "Jane" })
    }

    #[tokio::test]
    async fn test_register_returns_user_and_token() {
        let app = TestApp::new();
        let (status, body) = app
            .send(Method::POST, "/auth/register", None, Some(jane()))
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["email"], "jane@example.com");
        assert_eq!(body["user"]["name"], "Jane");
        assert!(body["user"].get("passwordHash").is_none());
        assert!(body["user"].get("password_hash").is_none());
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_register_twice_is_conflict() {
        let app = TestApp::new();
        app.send(Method::POST, "/auth/register", None, Some(jane()))
            .await;
        let (status, body) = app
            .send(Method::POST, "/auth/register", None, Some(jane()))
            .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");
        assert_eq!(app.accounts.len().await, 1);
    }

    #[tokio::test]
    async fn test_register_validation() {
        let app = TestApp::new();
        for body in [
            json!({ "email": "nope", "password": "secret123", "name": "Jane" }),
            json!({ "email": "jane@example.com", "password": "123", "name": "Jane" }),
            json!({ "email": "jane@example.com", "password": "secret123", "name": "" }),
            json!({ "email": "jane@example.com", "password": "secret123" }),
        ] {
            let (status, _) = app
                .send(Method::POST, "/auth/register", None, Some(body))
                .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
        assert_eq!(app.accounts.len().await, 0);
    }

    #[tokio::test]
    async fn test_login_and_me() {
        let app = TestApp::new();
        app.send(Method::POST, "/auth/register", None, Some(jane()))
            .await;

        let (status, body) = app
            .send(
                Method::POST,
                "/auth/login",
                None,
                Some(json!({ "email": "jane@example.com", "password": "secret123" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap().to_string();

        let (status, me) = app.send(Method::GET, "/auth/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me, body["user"]);
    }

    #[tokio::test]
    async fn test_login_wrong_password_issues_no_token() {
        let app = TestApp::new();
        app.send(Method::POST, "/auth/register", None, Some(jane()))
            .await;

        let (status, body) = app
            .send(
                Method::POST,
                "/auth/login",
                None,
                Some(json!({ "email": "jane@example.com", "password": "wrong-one" })),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.get("token").is_none());
        assert_eq!(body["error"]["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_me_requires_token() {
        let app = TestApp::new();
        let (status, _) = app.send(Method::GET, "/auth/me", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
