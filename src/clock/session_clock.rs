use chrono::{DateTime, Timelike, Utc};

use crate::clock::market_session::MarketSession;

/// Open/closed state of one session at a given instant, with the time until
/// the next transition. Computed fresh per query, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStatus {
    pub session: MarketSession,
    pub is_open: bool,
    pub hours_remaining: u32,
    pub minutes_remaining: u32,
}

/// Computes the status of `session` at `now`.
///
/// The local clock reading is reduced to a fractional hour (seconds ignored)
/// and compared against the session's half-open [open, close) interval.
/// Remaining time is truncated, never rounded: 1h59.9m reports as 1h 59m.
pub fn compute_status(session: &MarketSession, now: DateTime<Utc>) -> SessionStatus {
    let local = now.with_timezone(&session.timezone);
    let current_hour = f64::from(local.hour()) + f64::from(local.minute()) / 60.0;

    let is_open = session.open_hour <= current_hour && current_hour < session.close_hour;

    let remaining = if is_open {
        session.close_hour - current_hour
    } else if current_hour < session.open_hour {
        session.open_hour - current_hour
    } else {
        // Past close: next open is tomorrow, wrapping past midnight.
        session.open_hour + 24.0 - current_hour
    };

    let hours_remaining = remaining.floor();
    let minutes_remaining = ((remaining - hours_remaining) * 60.0).floor();

    SessionStatus {
        session: *session,
        is_open,
        hours_remaining: hours_remaining as u32,
        minutes_remaining: minutes_remaining as u32,
    }
}

/// Computes statuses for all `sessions` at the same instant, preserving
/// input order.
pub fn compute_all_statuses(sessions: &[MarketSession], now: DateTime<Utc>) -> Vec<SessionStatus> {
    sessions
        .iter()
        .map(|session| compute_status(session, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::Tz;

    use super::*;
    use crate::clock::market_session::{FOREX_SESSIONS, STOCK_SESSIONS};

    const LONDON: Tz = chrono_tz::Europe::London;

    fn nine_to_five() -> MarketSession {
        MarketSession {
            name: "London",
            timezone: LONDON,
            open_hour: 9.0,
            close_hour: 17.0,
        }
    }

    // A winter instant so London local time equals UTC.
    fn at_local(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
        LONDON
            .with_ymd_and_hms(2024, 1, 15, hour, minute, second)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn open_at_opening_bell_with_full_session_remaining() {
        let status = compute_status(&nine_to_five(), at_local(9, 0, 0));
        assert!(status.is_open);
        assert_eq!(status.hours_remaining, 8);
        assert_eq!(status.minutes_remaining, 0);
    }

    #[test]
    fn open_late_in_session() {
        let status = compute_status(&nine_to_five(), at_local(16, 30, 0));
        assert!(status.is_open);
        assert_eq!(status.hours_remaining, 0);
        assert_eq!(status.minutes_remaining, 30);
    }

    #[test]
    fn closed_exactly_at_close_wraps_to_next_open() {
        let status = compute_status(&nine_to_five(), at_local(17, 0, 0));
        assert!(!status.is_open);
        assert_eq!(status.hours_remaining, 16);
        assert_eq!(status.minutes_remaining, 0);
    }

    #[test]
    fn closed_before_open_counts_down_to_today() {
        let status = compute_status(&nine_to_five(), at_local(3, 15, 0));
        assert!(!status.is_open);
        assert_eq!(status.hours_remaining, 5);
        assert_eq!(status.minutes_remaining, 45);
    }

    #[test]
    fn seconds_are_ignored() {
        let status = compute_status(&nine_to_five(), at_local(16, 30, 59));
        assert!(status.is_open);
        assert_eq!(status.minutes_remaining, 30);
    }

    #[test]
    fn remaining_time_truncates_instead_of_rounding() {
        let session = MarketSession {
            close_hour: 16.99,
            ..nine_to_five()
        };

        let status = compute_status(&session, at_local(15, 0, 0));
        assert!(status.is_open);
        assert_eq!(status.hours_remaining, 1);
        assert_eq!(status.minutes_remaining, 59);
    }

    #[test]
    fn every_minute_of_the_day_is_consistent() {
        let session = nine_to_five();
        let open_minute = 9 * 60;
        let close_minute = 17 * 60;

        // Fractional-hour arithmetic truncates, so the reported total may
        // sit one minute below the exact integer countdown, never above it.
        let assert_close = |total: u32, exact: u32| {
            assert!(
                total == exact || total + 1 == exact,
                "total {total} vs exact {exact}"
            );
        };

        for minute_of_day in 0..(24 * 60) {
            let now = at_local(minute_of_day / 60, minute_of_day % 60, 0);
            let status = compute_status(&session, now);
            let total = status.hours_remaining * 60 + status.minutes_remaining;

            assert!(status.minutes_remaining < 60);

            if (open_minute..close_minute).contains(&minute_of_day) {
                assert!(status.is_open);
                assert_close(total, close_minute - minute_of_day);
            } else if minute_of_day < open_minute {
                assert!(!status.is_open);
                assert_close(total, open_minute - minute_of_day);
            } else {
                assert!(!status.is_open);
                assert_close(total, open_minute + 24 * 60 - minute_of_day);
                assert!(total > 0 && total < 24 * 60);
            }
        }
    }

    #[test]
    fn batch_preserves_order_and_is_idempotent() {
        let now = at_local(12, 0, 0);

        let first = compute_all_statuses(&STOCK_SESSIONS, now);
        let second = compute_all_statuses(&STOCK_SESSIONS, now);
        assert_eq!(first, second);

        let names: Vec<&str> = first.iter().map(|s| s.session.name).collect();
        assert_eq!(names, ["Tokyo", "London", "NY", "ASX"]);

        let forex: Vec<&str> = compute_all_statuses(&FOREX_SESSIONS, now)
            .iter()
            .map(|s| s.session.name)
            .collect();
        assert_eq!(forex, ["Tokyo", "London", "NY", "Sydney"]);
    }

    #[test]
    fn converts_into_each_sessions_local_zone() {
        // 12:00 UTC in mid-January: Tokyo is 21:00 (closed), NY is 07:00
        // (pre-open).
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

        let tokyo = compute_status(&STOCK_SESSIONS[0], now);
        assert!(!tokyo.is_open);
        assert_eq!(tokyo.hours_remaining, 12);

        let new_york = compute_status(&STOCK_SESSIONS[2], now);
        assert!(!new_york.is_open);
        assert_eq!(new_york.hours_remaining, 2);
        assert_eq!(new_york.minutes_remaining, 0);
    }
}
