// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use reqwest::{RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use super::session::Session;
use crate::config::Config;
use crate::error::ApiError;

/// JSON client for the carbon backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_http(base_url, http, session))
    }

    pub fn from_config(config: &Config, session: Session) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let http = builder.build()?;
        Ok(Self::with_http(config.api_base.as_str(), http, session))
    }

    fn with_http(base_url: impl Into<String>, http: reqwest::Client, session: Session) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.get(self.url(path)), true).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.http.post(self.url(path)).json(body), true).await
    }

    /// POST for login and signup. A 401 here means wrong credentials, not an
    /// expired token, so the current session is left alone.
    pub(super) async fn post_credentials<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.http.post(self.url(path)).json(body), false).await
    }

    /// The session is cleared on 401 only when `expire_on_401` is set and a
    /// bearer token went out with the request.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, expire_on_401: bool) -> Result<T, ApiError> {
        let token = self.session.token();
        let sent_token = token.is_some();
        let request = match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("Backend responded {} ({} bytes)", status, text.len());

        if !status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(Value::Null);
            let message = error_message(&body, status);
            if status == StatusCode::UNAUTHORIZED {
                if expire_on_401 && sent_token {
                    self.session.handle_unauthorized();
                }
                return Err(ApiError::Unauthorized(message));
            }
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Body `error`, then body `message`, then the status reason phrase
pub fn error_message(body: &Value, status: StatusCode) -> String {
    ["error", "message"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string())
}
