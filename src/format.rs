use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::clock::clock_report;
use crate::types::coin_quote::CoinQuote;
use crate::types::market_overview::MarketOverview;

const COIN_NOT_FOUND: &str = "❌ Coin data not found.";

/// Composes the full reply for one asset: coin block, optional market
/// overview, UTC timestamp, then the session-clock report.
///
/// A missing coin short-circuits to the fixed not-found message with nothing
/// appended.
pub fn coin_message(
    coin: Option<&CoinQuote>,
    overview: Option<&MarketOverview>,
    now: DateTime<Utc>,
) -> String {
    let Some(coin) = coin else {
        return COIN_NOT_FOUND.to_string();
    };

    let usd = &coin.quote.usd;
    let change_24h = usd.percent_change_24h;
    let trend = if change_24h >= 0.0 { "📈" } else { "📉" };
    let sign = if change_24h >= 0.0 { "+" } else { "" };
    let vol_mkt_cap = usd.volume_24h / usd.market_cap * 100.0;

    let mut msg = String::new();
    let _ = writeln!(msg, "🔹 {} ({})", coin.name, coin.symbol);
    let _ = writeln!(msg, "💰 Price: ${:.2}", usd.price);
    let _ = writeln!(msg, "📊 Market Cap: ${}", group_thousands(usd.market_cap));
    let _ = writeln!(msg, "🔁 Volume 24h: ${}", group_thousands(usd.volume_24h));
    let _ = writeln!(
        msg,
        "📈 FDV: ${}",
        na_or_grouped(usd.fully_diluted_market_cap)
    );
    let _ = writeln!(msg, "⚡ Vol/Mkt Cap (24h): {vol_mkt_cap:.2}%");
    let _ = writeln!(msg, "🏦 Total Supply: {}", na_or_grouped(coin.total_supply));
    let _ = writeln!(
        msg,
        "🔄 Circulating Supply: {}",
        na_or_grouped(coin.circulating_supply)
    );
    let _ = writeln!(msg, "{trend} {sign}{change_24h:.2}% {trend}\n");

    if let Some(market) = overview {
        let _ = writeln!(msg, "💹 Crypto Market Overview");
        let _ = writeln!(
            msg,
            "📊 Market Cap: ${}",
            group_thousands(market.quote.usd.total_market_cap)
        );
        let _ = writeln!(
            msg,
            "🔁 24h Volume: ${}",
            group_thousands(market.quote.usd.total_volume_24h)
        );
        let _ = writeln!(msg, "💪 BTC Dominance: {}%", market.btc_dominance);
        let _ = writeln!(msg, "💪 ETH Dominance: {}%", market.eth_dominance);
    }

    let _ = writeln!(msg, "🕒 Date/Time: {}\n", now.format("%Y-%m-%d %H:%M:%S UTC"));
    msg.push_str(&clock_report::render(now));

    msg
}

fn na_or_grouped(value: Option<f64>) -> String {
    match value {
        Some(value) => group_thousands(value),
        None => "N/A".to_string(),
    }
}

/// Comma-grouped rendering with at most three fraction digits, trailing
/// zeros trimmed.
fn group_thousands(value: f64) -> String {
    let rendered = format!("{value:.3}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');

    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered, None),
    };

    let (sign, digits) = match integer.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
