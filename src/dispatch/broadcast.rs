use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::dispatch::dispatcher::Dispatcher;

/// Spawns the recurring broadcast task. The first round fires one full
/// `period` after startup; the returned handle is aborted at shutdown.
pub fn spawn(dispatcher: Arc<Dispatcher>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // interval yields its first tick immediately; consume it so the
        // first broadcast waits a full period.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let outcomes = dispatcher.broadcast_tick().await;
            if outcomes.is_empty() {
                debug!("broadcast round skipped, no active chats");
                continue;
            }

            let delivered = outcomes.iter().filter(|o| o.is_delivered()).count();
            info!(
                delivered,
                failed = outcomes.len() - delivered,
                "broadcast round complete"
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::Result;
    use async_trait::async_trait;

    use super::*;
    use crate::dispatch::registry::ChatRegistry;
    use crate::dispatch::transport::ChatTransport;
    use crate::market::market_source::MarketDataSource;
    use crate::types::chat::ChatId;
    use crate::types::coin_quote::CoinQuote;
    use crate::types::market_overview::MarketOverview;

    struct NoData;

    #[async_trait]
    impl MarketDataSource for NoData {
        async fn market_overview(&self) -> Option<MarketOverview> {
            None
        }

        async fn coin_quote(&self, _symbol: &str) -> Option<CoinQuote> {
            None
        }
    }

    struct CountingTransport {
        sends: Mutex<usize>,
    }

    impl CountingTransport {
        fn new() -> Self {
            Self {
                sends: Mutex::new(0),
            }
        }

        fn count(&self) -> usize {
            *self.sends.lock().expect("send counter poisoned")
        }
    }

    #[async_trait]
    impl ChatTransport for CountingTransport {
        async fn send_message(&self, _chat_id: ChatId, _text: &str) -> Result<()> {
            *self.sends.lock().expect("send counter poisoned") += 1;
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period_and_stops_on_abort() {
        let transport = Arc::new(CountingTransport::new());
        let registry = Arc::new(ChatRegistry::new());
        registry.insert(ChatId::new(1));

        let dispatcher = Arc::new(Dispatcher::new(
            Arc::new(NoData),
            transport.clone(),
            registry,
        ));

        let handle = spawn(dispatcher, Duration::from_secs(3600));

        // Nothing before the first full period elapses.
        tokio::time::sleep(Duration::from_secs(1800)).await;
        assert_eq!(transport.count(), 0);

        tokio::time::sleep(Duration::from_secs(1801)).await;
        assert_eq!(transport.count(), 1);

        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert_eq!(transport.count(), 2);

        handle.abort();
        tokio::time::sleep(Duration::from_secs(7200)).await;
        assert_eq!(transport.count(), 2);
    }
}
