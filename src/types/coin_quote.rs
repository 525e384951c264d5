use serde::Deserialize;

/// Single-asset quote as returned by the market-data provider. Consumed
/// read-only by the formatter; optional fields render as "N/A" there.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinQuote {
    pub name: String,
    pub symbol: String,
    pub total_supply: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub quote: QuoteBucket,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteBucket {
    #[serde(rename = "USD")]
    pub usd: UsdQuote,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsdQuote {
    pub price: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub percent_change_24h: f64,
    pub fully_diluted_market_cap: Option<f64>,
}
