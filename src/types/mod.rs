pub mod asset;
pub mod chat;
pub mod coin_quote;
pub mod market_overview;
