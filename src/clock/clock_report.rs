use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::clock::market_session::{FOREX_SESSIONS, MarketSession, STOCK_SESSIONS};
use crate::clock::session_clock::compute_all_statuses;

/// Renders the full market-session report: stock sessions first, a blank
/// line, then forex sessions, in table order.
pub fn render(now: DateTime<Utc>) -> String {
    let mut report = String::from("📈 MarketClock (UTC):\n\n");

    report.push_str("💹 World Stock Market Hours\n");
    report.push_str(&render_sessions(&STOCK_SESSIONS, now));
    report.push('\n');
    report.push_str("💹 Forex Market Hours\n");
    report.push_str(&render_sessions(&FOREX_SESSIONS, now));

    report
}

fn render_sessions(sessions: &[MarketSession], now: DateTime<Utc>) -> String {
    let mut lines = String::new();

    for status in compute_all_statuses(sessions, now) {
        if status.is_open {
            let _ = writeln!(
                lines,
                "🟢 {} - Open ({}h {}m left)",
                status.session.name, status.hours_remaining, status.minutes_remaining
            );
        } else {
            let _ = writeln!(
                lines,
                "🔴 {} - Closed ({}h {}m left to open)",
                status.session.name, status.hours_remaining, status.minutes_remaining
            );
        }
    }

    lines
}
