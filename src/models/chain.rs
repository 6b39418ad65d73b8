use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Priority given to chains outside the supported set
pub const UNSUPPORTED_PRIORITY: i32 = -99;

/// Blockchain a balance lives on
///
/// Anything a balance source reports that is not one of the supported
/// chains is kept verbatim in `Other` so it can still be displayed in logs,
/// but it always ranks at [`UNSUPPORTED_PRIORITY`]. Build unknown chains
/// with [`Chain::other`] or `From<&str>` rather than the variant directly,
/// so a supported name never ends up in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Chain {
    Osmosis,
    Ethereum,
    Arbitrum,
    Zilliqa,
    Neo,
    Other(String),
}

impl Chain {
    /// Chain from a name, normalizing supported names to their variant
    pub fn other(name: impl AsRef<str>) -> Self {
        Chain::from(name.as_ref())
    }

    /// Display priority, higher sorts first
    pub fn priority(&self) -> i32 {
        match self {
            Chain::Osmosis => 100,
            Chain::Ethereum => 50,
            Chain::Arbitrum => 30,
            Chain::Zilliqa => 20,
            Chain::Neo => 20,
            Chain::Other(_) => UNSUPPORTED_PRIORITY,
        }
    }

    /// Whether this chain is one the wallet page knows how to show
    pub fn is_supported(&self) -> bool {
        !matches!(self, Chain::Other(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Chain::Osmosis => "Osmosis",
            Chain::Ethereum => "Ethereum",
            Chain::Arbitrum => "Arbitrum",
            Chain::Zilliqa => "Zilliqa",
            Chain::Neo => "Neo",
            Chain::Other(name) => name,
        }
    }
}

impl From<&str> for Chain {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "osmosis" => Chain::Osmosis,
            "ethereum" => Chain::Ethereum,
            "arbitrum" => Chain::Arbitrum,
            "zilliqa" => Chain::Zilliqa,
            "neo" => Chain::Neo,
            _ => Chain::Other(s.trim().to_string()),
        }
    }
}

impl FromStr for Chain {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Chain::from(s))
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Chain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Chain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Chain::from(raw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_chains_have_documented_priorities() {
        assert_eq!(Chain::Osmosis.priority(), 100);
        assert_eq!(Chain::Ethereum.priority(), 50);
        assert_eq!(Chain::Arbitrum.priority(), 30);
        assert_eq!(Chain::Zilliqa.priority(), 20);
        assert_eq!(Chain::Neo.priority(), 20);
    }

    #[test]
    fn unknown_chain_is_unsupported() {
        let chain = Chain::from("Solana");
        assert_eq!(chain, Chain::Other("Solana".to_string()));
        assert_eq!(chain.priority(), UNSUPPORTED_PRIORITY);
        assert!(!chain.is_supported());
    }

    #[test]
    fn other_normalizes_supported_names() {
        assert_eq!(Chain::other("Osmosis"), Chain::Osmosis);
        assert_eq!(Chain::other("Osmosis").priority(), 100);
        assert_eq!(Chain::other("Cosmos"), Chain::Other("Cosmos".to_string()));
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(" osmosis ".parse::<Chain>().unwrap(), Chain::Osmosis);
        assert_eq!(Chain::from("NEO"), Chain::Neo);
        assert_eq!(Chain::Neo.to_string(), "Neo");
    }

    #[test]
    fn serde_uses_chain_name() {
        let json = serde_json::to_string(&Chain::Arbitrum).unwrap();
        assert_eq!(json, "\"Arbitrum\"");
        let back: Chain = serde_json::from_str("\"zilliqa\"").unwrap();
        assert_eq!(back, Chain::Zilliqa);
        let other: Chain = serde_json::from_str("\"Cosmos\"").unwrap();
        assert_eq!(other.priority(), UNSUPPORTED_PRIORITY);
    }
}
