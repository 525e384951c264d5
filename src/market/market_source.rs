use async_trait::async_trait;

use crate::types::coin_quote::CoinQuote;
use crate::types::market_overview::MarketOverview;

/// Upstream market-data provider.
///
/// Implementations log fetch failures and return `None`; callers degrade to
/// a valid "not found" message instead of propagating errors.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn market_overview(&self) -> Option<MarketOverview>;

    /// Fetches a single-asset quote. `symbol` is case-insensitive and
    /// normalized to uppercase before hitting the provider.
    async fn coin_quote(&self, symbol: &str) -> Option<CoinQuote>;
}
