//! RSO API client.

use reqwest::{Client, Response, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use crate::{
    AUTH_BASE_URL, Account, GrantType, RsoConfig, RsoError, RsoResult, Scope, TokenResponse,
    TokenSet, UserInfo,
};

/// RSO client.
///
/// Holds the immutable configuration and a pooled HTTP client built with the
/// configuration's effective timeout. Cheap to clone and safe to share across
/// tasks; no state is carried between calls.
#[derive(Debug, Clone)]
pub struct RsoClient {
    config: RsoConfig,
    http: Client,
    auth_base_url: String,
    account_base_url: Option<String>,
}

impl RsoClient {
    /// Create a new client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns a system error when the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: RsoConfig) -> RsoResult<Self> {
        let http = Client::builder()
            .timeout(config.effective_timeout())
            .build()
            .map_err(RsoError::http)?;

        Ok(Self {
            config,
            http,
            auth_base_url: AUTH_BASE_URL.into(),
            account_base_url: None,
        })
    }

    /// Override the authorization server base URL (for testing).
    #[must_use]
    pub fn with_auth_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.auth_base_url = base_url.into();
        self
    }

    /// Override the account API base URL (for testing).
    #[must_use]
    pub fn with_account_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.account_base_url = Some(base_url.into());
        self
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &RsoConfig {
        &self.config
    }

    /// Build the login URL the user should be sent to.
    ///
    /// The `state` value is echoed back on the redirect and should be checked
    /// by the caller.
    ///
    /// # Errors
    ///
    /// Returns a system error when the base URL cannot be parsed.
    pub fn authorize_url(&self, scopes: &[Scope], state: &str) -> RsoResult<String> {
        let mut url =
            Url::parse(&format!("{}/authorize", self.auth_base_url)).map_err(RsoError::http)?;

        {
            let mut params = url.query_pairs_mut();
            params.append_pair("response_type", "code");
            params.append_pair("client_id", &self.config.client_id);
            params.append_pair("redirect_uri", &self.config.redirect_uri);
            params.append_pair("state", state);

            if !scopes.is_empty() {
                let joined = scopes
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                params.append_pair("scope", &joined);
            }
        }

        Ok(url.to_string())
    }

    /// Exchange an authorization code for tokens.
    ///
    /// # Errors
    ///
    /// Returns a provider error for non-200 responses and a system error for
    /// transport, body-read or decode failures.
    #[instrument(skip(self, code))]
    pub async fn exchange_code(&self, code: &str) -> RsoResult<TokenSet> {
        let params = [
            ("grant_type", GrantType::AuthorizationCode.as_str()),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        self.token_request(&params).await
    }

    /// Obtain a fresh token set from a refresh token.
    ///
    /// The refresh grant sends only `grant_type` and `refresh_token`; the
    /// redirect URI is not part of this grant.
    ///
    /// # Errors
    ///
    /// Same error contract as [`RsoClient::exchange_code`].
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh_token(&self, refresh_token: &str) -> RsoResult<TokenSet> {
        let params = [
            ("grant_type", GrantType::RefreshToken.as_str()),
            ("refresh_token", refresh_token),
        ];

        self.token_request(&params).await
    }

    /// Fetch subject and session identifiers for an access token.
    ///
    /// # Errors
    ///
    /// Same error contract as [`RsoClient::exchange_code`].
    #[instrument(skip(self, access_token))]
    pub async fn user_info(&self, access_token: &str) -> RsoResult<UserInfo> {
        let url = format!("{}/userinfo", self.auth_base_url);
        self.bearer_get(&url, access_token).await
    }

    /// Fetch account identity from the shard-local account API.
    ///
    /// # Errors
    ///
    /// Same error contract as [`RsoClient::exchange_code`].
    #[instrument(skip(self, access_token))]
    pub async fn account(&self, access_token: &str) -> RsoResult<Account> {
        let base = self
            .account_base_url
            .clone()
            .unwrap_or_else(|| self.config.shard.account_host());
        let url = format!("{base}/riot/account/v1/accounts/me");

        self.bearer_get(&url, access_token).await
    }

    /// Make a token request with HTTP Basic credentials.
    async fn token_request(&self, params: &[(&str, &str)]) -> RsoResult<TokenSet> {
        let url = format!("{}/token", self.auth_base_url);
        debug!(url, "requesting tokens");

        let response = self
            .http
            .post(&url)
            .header(
                "Authorization",
                format!("Basic {}", self.config.basic_auth_value()),
            )
            .form(params)
            .send()
            .await
            .map_err(RsoError::http)?;

        let response: TokenResponse = handle_response(response).await?;
        Ok(TokenSet::from_response(response))
    }

    /// Make a GET request bearing an access token.
    async fn bearer_get<R>(&self, url: &str, access_token: &str) -> RsoResult<R>
    where
        R: serde::de::DeserializeOwned,
    {
        debug!(url, "requesting resource");

        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(RsoError::http)?;

        handle_response(response).await
    }
}

/// Drain a response and branch on its status.
///
/// The body is fully read on every path so the pooled connection can be
/// reused.
async fn handle_response<R>(response: Response) -> RsoResult<R>
where
    R: serde::de::DeserializeOwned,
{
    let status = response.status();
    let bytes = response.bytes().await.map_err(RsoError::io)?;

    if status == StatusCode::OK {
        serde_json::from_slice(&bytes).map_err(RsoError::json)
    } else {
        Err(RsoError::from_response(status.as_u16(), &bytes))
    }
}
