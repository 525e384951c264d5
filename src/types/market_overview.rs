use serde::Deserialize;

/// Global crypto market aggregate stats, passed through to the formatter.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketOverview {
    pub btc_dominance: f64,
    pub eth_dominance: f64,
    pub quote: OverviewBucket,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverviewBucket {
    #[serde(rename = "USD")]
    pub usd: OverviewUsd,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverviewUsd {
    pub total_market_cap: f64,
    pub total_volume_24h: f64,
}
