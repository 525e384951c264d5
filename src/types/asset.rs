use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};

/// The fixed set of assets the bot reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Btc,
    Eth,
    Link,
}

impl Asset {
    pub const ALL: [Asset; 3] = [Asset::Btc, Asset::Eth, Asset::Link];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Eth => "ETH",
            Self::Link => "LINK",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Asset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "btc" => Ok(Self::Btc),
            "eth" => Ok(Self::Eth),
            "link" => Ok(Self::Link),
            other => Err(anyhow!("unknown asset: {other}")),
        }
    }
}
