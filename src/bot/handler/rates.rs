use std::sync::Arc;

use async_trait::async_trait;

use crate::bot::{api::RatesSource, processor::rate_lines, BotError};

use super::{
    constants::RATES_BASE_CURRENCY,
    utils::{CommandHandler, Incoming, Reply},
};

/* Naira rate command.
 * Fetches live USD rates and replies once per currency.
 * Nothing is cached, every call goes to the rates source.
 */
pub struct NairaRateHandler {
    source: Arc<dyn RatesSource>,
}

impl NairaRateHandler {
    pub fn new(source: Arc<dyn RatesSource>) -> NairaRateHandler {
        NairaRateHandler { source }
    }
}

#[async_trait]
impl CommandHandler for NairaRateHandler {
    async fn handle(&self, incoming: &Incoming) -> Result<Vec<Reply>, BotError> {
        let rates = match self.source.latest(RATES_BASE_CURRENCY).await {
            Ok(rates) => rates,
            Err(err) => {
                log::error!(
                    "Naira Rate - Chat {} failed to fetch rates: {}",
                    incoming.chat_id,
                    err
                );
                return Err(err.into());
            }
        };

        log::info!("Exchange rates for {} on {}", rates.base, rates.date);
        for (currency, value) in &rates.values {
            log::info!("{}: {}", currency, value);
        }

        Ok(rate_lines(&rates).into_iter().map(Reply::plain).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use teloxide::types::ChatId;

    use crate::bot::api::{ApiError, LiveRates};

    use super::*;

    struct MockRates {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RatesSource for MockRates {
        async fn latest(&self, base: &str) -> Result<LiveRates, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut values = BTreeMap::new();
            values.insert("NGN".to_string(), 1500.125);
            values.insert("EUR".to_string(), 0.92);
            Ok(LiveRates {
                base: base.to_string(),
                date: "2024-01-01".to_string(),
                values,
            })
        }
    }

    struct EmptyRates;

    #[async_trait]
    impl RatesSource for EmptyRates {
        async fn latest(&self, _base: &str) -> Result<LiveRates, ApiError> {
            Err(ApiError::EmptyFeed)
        }
    }

    fn incoming() -> Incoming {
        Incoming {
            chat_id: ChatId(7),
            first_name: "Ada".to_string(),
            text: "/get_naira_rate".to_string(),
        }
    }

    #[tokio::test]
    async fn test_one_reply_per_currency() {
        let handler = NairaRateHandler::new(Arc::new(MockRates {
            calls: AtomicUsize::new(0),
        }));
        let replies = handler.handle(&incoming()).await.unwrap();

        assert_eq!(
            replies,
            vec![Reply::plain("EUR0.92"), Reply::plain("NGN1500.13")]
        );
    }

    #[tokio::test]
    async fn test_fetches_every_time() {
        let source = Arc::new(MockRates {
            calls: AtomicUsize::new(0),
        });
        let handler = NairaRateHandler::new(source.clone());
        handler.handle(&incoming()).await.unwrap();
        handler.handle(&incoming()).await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let handler = NairaRateHandler::new(Arc::new(EmptyRates));
        let result = handler.handle(&incoming()).await;
        assert!(matches!(result, Err(BotError::ApiError(ApiError::EmptyFeed))));
    }
}
