//! Network client with built-in retry and error handling

use super::error_handler::ErrorHandler;
use super::request_timer::{RequestTimer, RequestTimerConfig};
use crate::api::FoodApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::list_fetching;
use crate::events::{EventSender, EventType, Operation};
use crate::food::Food;
use crate::logging::LogLevel;
use std::time::Duration;
use tokio::time::sleep;

/// Network client with built-in retry and request timing
pub struct NetworkClient {
    error_handler: ErrorHandler,
    request_timer: RequestTimer,
    max_attempts: u32,
}

impl NetworkClient {
    pub fn new(request_timer: RequestTimer, max_attempts: u32) -> Self {
        Self {
            error_handler: ErrorHandler::new(),
            request_timer,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Client tuned for the initial collection load.
    pub fn for_list_fetching() -> Self {
        let timer_config = RequestTimerConfig::new(
            list_fetching::retry_delay(),
            list_fetching::max_server_retry(),
        );
        Self::new(RequestTimer::new(timer_config), list_fetching::MAX_ATTEMPTS)
    }

    /// Fetch the collection, retrying transient failures.
    ///
    /// Returns the last error once the attempts run out or the error is not retryable.
    pub async fn fetch_foods(
        &mut self,
        api: &dyn FoodApi,
        events: &EventSender,
    ) -> Result<Vec<Food>, ApiError> {
        let mut attempts = 0;

        loop {
            // Wait out any retry delay from the previous attempt
            let wait_time = self.request_timer.time_until_next();
            if wait_time > Duration::ZERO {
                events
                    .send(
                        Operation::Load,
                        format!("Retrying in {}s...", wait_time.as_secs().max(1)),
                        EventType::Waiting,
                        LogLevel::Info,
                    )
                    .await;
                sleep(wait_time).await;
            }

            match api.list_foods().await {
                Ok(foods) => {
                    self.request_timer.record_success();
                    return Ok(foods);
                }
                Err(e) => {
                    attempts += 1;

                    let server_retry_delay = e.get_retry_after_seconds().map(Duration::from_secs);
                    self.request_timer.record_failure(server_retry_delay);

                    if attempts >= self.max_attempts || !self.error_handler.should_retry(&e) {
                        return Err(e);
                    }

                    events
                        .send(
                            Operation::Load,
                            format!(
                                "Load attempt {}/{} failed: {}",
                                attempts, self.max_attempts, e
                            ),
                            EventType::Error,
                            self.error_handler.classify_error(&e),
                        )
                        .await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockFoodApi;
    use crate::events::Event;
    use crate::food::FoodId;
    use tokio::sync::mpsc;

    fn fast_client(max_attempts: u32) -> NetworkClient {
        let config = RequestTimerConfig::new(
            Duration::from_millis(5),
            Duration::from_millis(5),
        );
        NetworkClient::new(RequestTimer::new(config), max_attempts)
    }

    fn unavailable() -> ApiError {
        ApiError::Http {
            status: 503,
            message: "down".to_string(),
            retry_after: None,
        }
    }

    fn food(id: u64) -> Food {
        Food {
            id: FoodId(id),
            name: format!("food {}", id),
            image: String::new(),
            price: "1".to_string(),
            description: String::new(),
            available: true,
        }
    }

    #[tokio::test]
    // Transient failures are retried until the load succeeds.
    async fn test_fetch_retries_server_errors() {
        let mut calls = 0;
        let mut api = MockFoodApi::new();
        api.expect_list_foods().times(3).returning(move || {
            calls += 1;
            if calls < 3 {
                Err(unavailable())
            } else {
                Ok(vec![food(1), food(2)])
            }
        });
        let (tx, mut rx) = mpsc::channel::<Event>(16);

        let foods = fast_client(3)
            .fetch_foods(&api, &EventSender::new(tx))
            .await
            .unwrap();

        assert_eq!(foods.len(), 2);
        let mut failures = 0;
        while let Ok(event) = rx.try_recv() {
            if event.event_type == EventType::Error {
                failures += 1;
            }
        }
        assert_eq!(failures, 2);
    }

    #[tokio::test]
    // The load gives up once the attempts run out.
    async fn test_fetch_surfaces_error_after_max_attempts() {
        let mut api = MockFoodApi::new();
        api.expect_list_foods()
            .times(2)
            .returning(|| Err(unavailable()));
        let (tx, _rx) = mpsc::channel::<Event>(16);

        let err = fast_client(2)
            .fetch_foods(&api, &EventSender::new(tx))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    // Client errors are not retried.
    async fn test_fetch_does_not_retry_client_errors() {
        let mut api = MockFoodApi::new();
        api.expect_list_foods().times(1).returning(|| {
            Err(ApiError::Http {
                status: 403,
                message: "forbidden".to_string(),
                retry_after: None,
            })
        });
        let (tx, _rx) = mpsc::channel::<Event>(16);

        let err = fast_client(5)
            .fetch_foods(&api, &EventSender::new(tx))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(403));
    }
}
