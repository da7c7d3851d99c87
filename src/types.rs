//! Resource endpoint payloads.

use serde::{Deserialize, Serialize};

/// User-info endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    /// Subject (player) identifier.
    pub sub: String,
    /// Token identifier.
    pub jti: String,
    /// Active client platform id; only present when the `cpid` scope was
    /// granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpid: Option<String>,
}

/// Account endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Persistent unique account id.
    pub puuid: String,
    /// In-game display name.
    #[serde(rename = "gameName")]
    pub game_name: String,
    /// Display tag shown after the name.
    #[serde(rename = "tagLine")]
    pub tag_line: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_optional_cpid() {
        let with: UserInfo = serde_json::from_str(r#"{"sub":"u1","jti":"t1","cpid":"EUW1"}"#).unwrap();
        assert_eq!(with.cpid.as_deref(), Some("EUW1"));

        let without: UserInfo = serde_json::from_str(r#"{"sub":"u1","jti":"t1"}"#).unwrap();
        assert!(without.cpid.is_none());
    }

    #[test]
    fn test_account_field_renames() {
        let account: Account =
            serde_json::from_str(r#"{"puuid":"P1","gameName":"Name","tagLine":"EUW"}"#).unwrap();
        assert_eq!(account.puuid, "P1");
        assert_eq!(account.game_name, "Name");
        assert_eq!(account.tag_line, "EUW");
    }
}
