pub mod clock_report;
pub mod market_session;
pub mod session_clock;
