use serde::{Deserialize, Serialize};

/// Contribution token accepted by the savings protocol
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedToken {
    #[default]
    Usdc,
    Eth,
    Strk,
    Usdt,
    Dai,
    Wbtc,
}

impl SupportedToken {
    /// Catalog in display order
    pub const CATALOG: [SupportedToken; 6] = [
        SupportedToken::Usdc,
        SupportedToken::Eth,
        SupportedToken::Strk,
        SupportedToken::Usdt,
        SupportedToken::Dai,
        SupportedToken::Wbtc,
    ];

    /// Look up a token by its catalog key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::CATALOG.into_iter().find(|token| token.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            SupportedToken::Usdc => "usdc",
            SupportedToken::Eth => "eth",
            SupportedToken::Strk => "strk",
            SupportedToken::Usdt => "usdt",
            SupportedToken::Dai => "dai",
            SupportedToken::Wbtc => "wbtc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SupportedToken::Usdc => "USDC",
            SupportedToken::Eth => "ETH",
            SupportedToken::Strk => "STRK",
            SupportedToken::Usdt => "USDT",
            SupportedToken::Dai => "DAI",
            SupportedToken::Wbtc => "WBTC",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SupportedToken::Usdc => "💵",
            SupportedToken::Eth => "⟠",
            SupportedToken::Strk => "🔺",
            SupportedToken::Usdt => "₮",
            SupportedToken::Dai => "◈",
            SupportedToken::Wbtc => "₿",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_keys_unique() {
        let keys: HashSet<_> = SupportedToken::CATALOG.iter().map(|t| t.key()).collect();
        assert_eq!(keys.len(), SupportedToken::CATALOG.len());
    }

    #[test]
    fn test_catalog_order() {
        let labels: Vec<_> = SupportedToken::CATALOG.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["USDC", "ETH", "STRK", "USDT", "DAI", "WBTC"]);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(SupportedToken::from_key("wbtc"), Some(SupportedToken::Wbtc));
        assert_eq!(SupportedToken::from_key("doge"), None);
        assert_eq!(SupportedToken::default(), SupportedToken::Usdc);
    }
}
