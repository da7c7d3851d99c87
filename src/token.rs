//! Token endpoint response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::TokenType;

/// Token endpoint response body.
///
/// Field names match the provider JSON exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Granted data scope.
    pub scope: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
    /// Method of authorization the tokens provide.
    pub token_type: TokenType,
    /// Issued for obtaining new access tokens once this one expires.
    pub refresh_token: String,
    /// Signed identity token; opaque to this library, never decoded.
    pub id_token: String,
    /// Identifier of the existing session for the subject.
    pub sub_sid: String,
    /// Access token presented as a Bearer credential to resource endpoints.
    pub access_token: String,
}

/// Tokens from a successful exchange or refresh, stamped with the time the
/// response was received.
#[derive(Debug, Clone, Serialize)]
pub struct TokenSet {
    scope: String,
    expires_in: u64,
    token_type: TokenType,
    refresh_token: String,
    id_token: String,
    sub_sid: String,
    access_token: String,
    captured_at: DateTime<Utc>,
}

impl TokenSet {
    /// Build a token set from a response, stamping the capture time.
    #[must_use]
    pub fn from_response(response: TokenResponse) -> Self {
        Self {
            scope: response.scope,
            expires_in: response.expires_in,
            token_type: response.token_type,
            refresh_token: response.refresh_token,
            id_token: response.id_token,
            sub_sid: response.sub_sid,
            access_token: response.access_token,
            captured_at: Utc::now(),
        }
    }

    /// Granted data scope.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Access token lifetime in seconds.
    #[must_use]
    pub const fn expires_in(&self) -> u64 {
        self.expires_in
    }

    /// Method of authorization the tokens provide.
    #[must_use]
    pub const fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Refresh token for obtaining a new access token.
    #[must_use]
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Signed identity token, passed through undecoded.
    #[must_use]
    pub fn id_token(&self) -> &str {
        &self.id_token
    }

    /// Identifier of the existing session for the subject.
    #[must_use]
    pub fn sub_sid(&self) -> &str {
        &self.sub_sid
    }

    /// Access token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// When the token response was received.
    #[must_use]
    pub const fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Instant at which the access token stops being valid.
    ///
    /// Saturates at the maximum representable instant for lifetimes too
    /// large to add to the capture time.
    #[must_use]
    pub fn valid_until(&self) -> DateTime<Utc> {
        i64::try_from(self.expires_in)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .and_then(|lifetime| self.captured_at.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Whether the access token has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.valid_until()
    }

    /// Authorization header value for resource requests.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(expires_in: u64) -> TokenResponse {
        TokenResponse {
            scope: "openid".to_string(),
            expires_in,
            token_type: TokenType::Bearer,
            refresh_token: "r1".to_string(),
            id_token: "idt".to_string(),
            sub_sid: "s1".to_string(),
            access_token: "a1".to_string(),
        }
    }

    #[test]
    fn test_from_response_copies_fields() {
        let tokens = TokenSet::from_response(mock_response(600));

        assert_eq!(tokens.scope(), "openid");
        assert_eq!(tokens.expires_in(), 600);
        assert_eq!(tokens.token_type(), TokenType::Bearer);
        assert_eq!(tokens.refresh_token(), "r1");
        assert_eq!(tokens.id_token(), "idt");
        assert_eq!(tokens.sub_sid(), "s1");
        assert_eq!(tokens.access_token(), "a1");
    }

    #[test]
    fn test_valid_until_adds_lifetime() {
        let tokens = TokenSet::from_response(mock_response(600));
        assert_eq!(
            tokens.valid_until(),
            tokens.captured_at() + chrono::Duration::seconds(600)
        );
        assert!(!tokens.is_expired());
    }

    #[test]
    fn test_valid_until_saturates_on_huge_lifetime() {
        let tokens = TokenSet::from_response(mock_response(u64::MAX));
        assert_eq!(tokens.valid_until(), DateTime::<Utc>::MAX_UTC);
        assert!(!tokens.is_expired());
    }

    #[test]
    fn test_zero_lifetime_is_expired() {
        let tokens = TokenSet::from_response(mock_response(0));
        assert!(tokens.is_expired());
    }

    #[test]
    fn test_authorization_header() {
        let tokens = TokenSet::from_response(mock_response(600));
        assert_eq!(tokens.authorization_header(), "Bearer a1");
    }

    #[test]
    fn test_response_deserializes_provider_json() {
        let body = r#"{"scope":"openid","expires_in":600,"token_type":"Bearer","refresh_token":"r1","id_token":"idt","sub_sid":"s1","access_token":"a1"}"#;
        let response: TokenResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.scope, "openid");
        assert_eq!(response.expires_in, 600);
        assert_eq!(response.token_type, TokenType::Bearer);
        assert_eq!(response.access_token, "a1");
    }
}
