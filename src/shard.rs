//! Regional shard selection for the account API.

use std::fmt;

/// Provider-side data-center grouping that serves account-data requests.
///
/// Unknown shard names fall back to the default rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shard {
    /// Americas shard.
    Americas,
    /// Europe shard.
    #[default]
    Europe,
}

impl Shard {
    /// Parse a shard name, falling back to the default for unknown values.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "americas" => Self::Americas,
            "europe" => Self::Europe,
            _ => Self::default(),
        }
    }

    /// Literal host prefix for this shard.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Europe => "europe",
        }
    }

    /// Base URL of the account API served by this shard.
    #[must_use]
    pub fn account_host(self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }
}

impl fmt::Display for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_host_per_shard() {
        assert_eq!(
            Shard::Americas.account_host(),
            "https://americas.api.riotgames.com"
        );
        assert_eq!(
            Shard::Europe.account_host(),
            "https://europe.api.riotgames.com"
        );
    }

    #[test]
    fn test_parse_known_shards() {
        assert_eq!(Shard::parse("americas"), Shard::Americas);
        assert_eq!(Shard::parse("europe"), Shard::Europe);
    }

    #[test]
    fn test_parse_unknown_falls_back_to_default() {
        assert_eq!(Shard::parse("atlantis"), Shard::default());
        assert_eq!(Shard::parse(""), Shard::default());
    }
}
