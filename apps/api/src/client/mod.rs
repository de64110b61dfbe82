//! Typed request layer for the Job Board API.
//!
//! Session state is explicit: [`ApiClient::register`] and [`ApiClient::login`]
//! return a [`Session`], and every privileged call takes one. Logging out is
//! dropping the `Session`; the server keeps no session to revoke.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::models::account::{Account, AuthResponse, LoginRequest, RegisterRequest};
use crate::models::job::{
    CreateJobInput, GenerateDescriptionResponse, Job, UpdateJobInput,
};

pub mod display;
pub mod form;

/// Titles shorter than this are not sent to the description generator.
pub const MIN_GENERATE_TITLE_LEN: usize = 3;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}, {code}): {message}")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
    },

    #[error("{0}")]
    Validation(String),
}

/// An authenticated session: the bearer token plus the account it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Account,
}

impl From<AuthResponse> for Session {
    fn from(auth: AuthResponse) -> Self {
        Session {
            token: auth.token,
            user: auth.user,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: Method, path: &str, session: Option<&Session>) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{path}", self.base_url));
        match session {
            Some(session) => builder.bearer_auth(&session.token),
            None => builder,
        }
    }

    pub async fn register(&self, credentials: &RegisterRequest) -> Result<Session, ClientError> {
        let auth: AuthResponse = decode(
            self.request(Method::POST, "/auth/register", None)
                .json(credentials)
                .send()
                .await?,
        )
        .await?;
        Ok(auth.into())
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, ClientError> {
        let auth: AuthResponse = decode(
            self.request(Method::POST, "/auth/login", None)
                .json(credentials)
                .send()
                .await?,
        )
        .await?;
        Ok(auth.into())
    }

    pub async fn me(&self, session: &Session) -> Result<Account, ClientError> {
        decode(
            self.request(Method::GET, "/auth/me", Some(session))
                .send()
                .await?,
        )
        .await
    }

    pub async fn list_jobs(&self) -> Result<Vec<Job>, ClientError> {
        decode(self.request(Method::GET, "/jobs", None).send().await?).await
    }

    pub async fn get_job(&self, id: i64) -> Result<Job, ClientError> {
        decode(
            self.request(Method::GET, &format!("/jobs/{id}"), None)
                .send()
                .await?,
        )
        .await
    }

    /// Fails with `ClientError::Validation`, sending nothing, when the form
    /// rules in [`form`] are not met.
    pub async fn create_job(
        &self,
        session: &Session,
        job: &CreateJobInput,
    ) -> Result<Job, ClientError> {
        form::check_new_job(job).map_err(ClientError::Validation)?;
        decode(
            self.request(Method::POST, "/jobs", Some(session))
                .json(job)
                .send()
                .await?,
        )
        .await
    }

    pub async fn update_job(
        &self,
        session: &Session,
        id: i64,
        changes: &UpdateJobInput,
    ) -> Result<Job, ClientError> {
        form::check_changes(changes).map_err(ClientError::Validation)?;
        decode(
            self.request(Method::PUT, &format!("/jobs/{id}"), Some(session))
                .json(changes)
                .send()
                .await?,
        )
        .await
    }

    pub async fn delete_job(&self, session: &Session, id: i64) -> Result<(), ClientError> {
        let response = self
            .request(Method::DELETE, &format!("/jobs/{id}"), Some(session))
            .send()
            .await?;
        check(response).await.map(|_| ())
    }

    /// Short titles are rejected locally and never reach the server.
    pub async fn generate_description(
        &self,
        session: &Session,
        title: &str,
    ) -> Result<String, ClientError> {
        let title = title.trim();
        if title.chars().count() < MIN_GENERATE_TITLE_LEN {
            return Err(ClientError::Validation(format!(
                "Please enter a job title with at least {MIN_GENERATE_TITLE_LEN} characters"
            )));
        }

        let generated: GenerateDescriptionResponse = decode(
            self.request(Method::POST, "/jobs/generate-description", Some(session))
                .json(&serde_json::json!({ "title": title }))
                .send()
                .await?,
        )
        .await?;
        Ok(generated.description)
    }
}

/// Turns a non-2xx response into `ClientError::Api`, reading the error envelope.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await?;
    let (code, message) = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => (envelope.error.code, envelope.error.message),
        Err(_) => ("UNKNOWN".to_string(), body),
    };
    Err(ClientError::Api {
        status,
        code,
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    Ok(check(response).await?.json::<T>().await?)
}
