use chrono_tz::Tz;

/// A trading venue with a fixed daily local open/close hour pair.
///
/// Hours are fractional local hours in [0, 24] with `open_hour < close_hour`;
/// overnight-wrapping sessions are not supported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSession {
    pub name: &'static str,
    pub timezone: Tz,
    pub open_hour: f64,
    pub close_hour: f64,
}

pub const STOCK_SESSIONS: [MarketSession; 4] = [
    MarketSession {
        name: "Tokyo",
        timezone: chrono_tz::Asia::Tokyo,
        open_hour: 9.0,
        close_hour: 15.0,
    },
    MarketSession {
        name: "London",
        timezone: chrono_tz::Europe::London,
        open_hour: 9.0,
        close_hour: 17.0,
    },
    MarketSession {
        name: "NY",
        timezone: chrono_tz::America::New_York,
        open_hour: 9.0,
        close_hour: 17.0,
    },
    MarketSession {
        name: "ASX",
        timezone: chrono_tz::Australia::Sydney,
        open_hour: 10.0,
        close_hour: 16.0,
    },
];

pub const FOREX_SESSIONS: [MarketSession; 4] = [
    MarketSession {
        name: "Tokyo",
        timezone: chrono_tz::Asia::Tokyo,
        open_hour: 9.0,
        close_hour: 18.0,
    },
    MarketSession {
        name: "London",
        timezone: chrono_tz::Europe::London,
        open_hour: 8.0,
        close_hour: 17.0,
    },
    MarketSession {
        name: "NY",
        timezone: chrono_tz::America::New_York,
        open_hour: 8.0,
        close_hour: 17.0,
    },
    MarketSession {
        name: "Sydney",
        timezone: chrono_tz::Australia::Sydney,
        open_hour: 7.0,
        close_hour: 16.0,
    },
];
