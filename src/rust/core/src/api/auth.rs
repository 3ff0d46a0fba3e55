// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::client::ApiClient;
use super::session::User;
use crate::error::ApiError;

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub city: &'a str,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl ApiClient {
    /// `POST /api/auth/login`; stores the token on success. Wrong credentials
    /// leave any existing session in place.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let auth: AuthResponse = self
            .post_credentials("/api/auth/login", &LoginRequest { email, password })
            .await?;
        Ok(self.accept(auth))
    }

    /// `POST /api/auth/signup`; stores the token on success
    pub async fn signup(&self, request: &SignupRequest<'_>) -> Result<User, ApiError> {
        let auth: AuthResponse = self.post_credentials("/api/auth/signup", request).await?;
        Ok(self.accept(auth))
    }

    /// `GET /api/auth/me`
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json("/api/auth/me").await
    }

    /// Load the user for a stored token. Any failure drops the token.
    pub async fn restore_session(&self) -> Option<User> {
        if !self.session().needs_user() {
            return self.session().user();
        }
        match self.me().await {
            Ok(user) => {
                self.session().set_user(user.clone());
                Some(user)
            }
            Err(e) => {
                warn!("Could not restore session: {}", e);
                self.session().logout();
                None
            }
        }
    }

    pub fn logout(&self) {
        self.session().logout();
    }

    fn accept(&self, auth: AuthResponse) -> User {
        info!("Signed in as {}", auth.user.email);
        self.session().set_auth(auth.token, auth.user.clone());
        auth.user
    }
}
