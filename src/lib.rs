//! Riot Sign-On (RSO) OAuth2 client.
//!
//! This crate wraps the RSO authorization flow and its two downstream
//! resource endpoints:
//!
//! - **Token exchange**: `authorization_code` grant against the token endpoint
//! - **Token refresh**: `refresh_token` grant against the same endpoint
//! - **User info**: subject and session identifiers for an access token
//! - **Account lookup**: account identity from the shard-local account API
//!
//! Each operation is a single request/response round trip. The library does
//! not store tokens, schedule refreshes, or retry failed calls; the caller
//! owns that orchestration.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rso_client::{RsoClient, RsoConfig, Shard};
//!
//! let config = RsoConfig::new("CLIENT_ID", "CLIENT_SECRET", "https://example.com/callback")
//!     .with_shard(Shard::Europe);
//! let client = RsoClient::new(config)?;
//!
//! // Code is obtained on the client side after the user logs in.
//! let tokens = client.exchange_code(&code).await?;
//! let account = client.account(tokens.access_token()).await?;
//! println!("{}#{}", account.game_name, account.tag_line);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod client;
mod config;
mod error;
mod shard;
mod token;
mod types;

pub use client::*;
pub use config::*;
pub use error::*;
pub use shard::*;
pub use token::*;
pub use types::*;

use std::time::Duration;

/// Default request timeout applied when the configured timeout is zero.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URL of the RSO authorization server.
pub const AUTH_BASE_URL: &str = "https://auth.riotgames.com";

/// OAuth grant types accepted by the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    /// Authorization code grant (initial user authorization).
    AuthorizationCode,
    /// Refresh token grant.
    RefreshToken,
}

impl GrantType {
    /// Wire value sent in the `grant_type` form field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization_code",
            Self::RefreshToken => "refresh_token",
        }
    }
}

impl std::fmt::Display for GrantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested data scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Grants the authorization flow itself.
    OpenId,
    /// Grants LoL & LoR info, such as the active LoL region.
    Cpid,
    /// Allows refresh tokens to retrieve new access tokens that can reach
    /// the user-info endpoint.
    OfflineAccess,
    /// Account identity data.
    Account,
    /// Email of the account.
    Email,
    /// Profile data.
    Profile,
}

impl Scope {
    /// Wire value sent in the `scope` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenId => "openid",
            Self::Cpid => "cpid",
            Self::OfflineAccess => "offline_access",
            Self::Account => "account",
            Self::Email => "email",
            Self::Profile => "profile",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method of authorization the issued tokens provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TokenType {
    /// The entire token is presented as-is in an Authorization header.
    Bearer,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer => f.write_str("Bearer"),
        }
    }
}
