use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use super::error::ClientResult;
use super::http::{QuizClient, QuizRow};

/// Results are buffered here until the consumer applies them.
const RESULT_BUFFER: usize = 16;

/// Fetches the quiz list on a fixed interval.
///
/// Each tick spawns its own request, so a slow response never delays the
/// next tick and overlapping requests are allowed. Results arrive on the
/// channel in completion order.
pub struct QuizPoller {
    client: Arc<QuizClient>,
    interval: Duration,
}

impl QuizPoller {
    pub fn new(client: QuizClient, interval: Duration) -> Self {
        Self {
            client: Arc::new(client),
            interval,
        }
    }

    /// Starts polling; the first fetch happens immediately.
    ///
    /// The loop stops once the returned receiver is dropped.
    pub fn spawn(self) -> (JoinHandle<()>, mpsc::Receiver<ClientResult<Vec<QuizRow>>>) {
        let (tx, rx) = mpsc::channel(RESULT_BUFFER);

        let handle = tokio::spawn(async move {
            let mut ticker = interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if tx.is_closed() {
                    tracing::debug!("quiz poller stopped");
                    break;
                }

                let client = self.client.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = client.list_quizzes().await;
                    // Receiver gone means the poller is shutting down
                    let _ = tx.send(result).await;
                });
            }
        });

        (handle, rx)
    }
}
