//! Client for the same-origin `/login` endpoint.
//!
//! The endpoint answers either with JSON (`{"error": ...}` plus a status) or,
//! in the older HTML flow, with a redirect. Both are mapped onto
//! `LoginOutcome`.

use anyhow::{Context, Result};
use reqwest::{header::CONTENT_TYPE, Client};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::domain::auth::{LoginForm, LoginOutcome, LoginReply};
use crate::error::ClientResult;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    login_url: Url,
}

impl AuthClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        let login_url = Url::parse(base_url)
            .and_then(|base| base.join("/login"))
            .context("Invalid auth base URL")?;

        Ok(Self { client, login_url })
    }

    pub fn login_url(&self) -> &Url {
        &self.login_url
    }

    /// Post credentials form-encoded.
    ///
    /// Transport failures are errors; every answer from the server is an
    /// outcome.
    #[instrument(skip_all)]
    pub async fn login(&self, form: &LoginForm) -> ClientResult<LoginOutcome> {
        let response = self
            .client
            .post(self.login_url.clone())
            .form(form)
            .send()
            .await?;

        let status = response.status();
        let redirected = response.url() != &self.login_url;
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);

        debug!(status = %status, redirected, is_json, "Login response");

        if is_json {
            let reply = match response.json::<LoginReply>().await {
                Ok(reply) => reply,
                Err(e) => {
                    warn!(error = %e, "Unreadable login response");
                    return Ok(LoginOutcome::Rejected(LOGIN_FAILED_MESSAGE.to_string()));
                }
            };

            if status.is_success() {
                return Ok(LoginOutcome::Reload);
            }
            let message = reply
                .error
                .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string());
            return Ok(LoginOutcome::Rejected(message));
        }

        if redirected {
            return Ok(LoginOutcome::Redirect(response.url().to_string()));
        }

        Ok(LoginOutcome::Rejected(INVALID_CREDENTIALS_MESSAGE.to_string()))
    }
}
