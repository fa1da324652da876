//! Account registration and login bindings.

use crate::client::{ApiRequest, Client};
use crate::error::Result;
use plotline_core::{AuthSession, Credentials};

/// Bindings for the account endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a Client,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create an account and receive a session for it.
    pub async fn register(&self, credentials: &Credentials) -> Result<AuthSession> {
        self.client
            .send_json(ApiRequest::post("/api/auth/register").json(credentials)?)
            .await
    }

    /// Exchange credentials for a session.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
        self.client
            .send_json(ApiRequest::post("/api/auth/login").json(credentials)?)
            .await
    }
}
