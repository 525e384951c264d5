pub mod market_source;
