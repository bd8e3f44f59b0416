//! Watch command handler
//!
//! Polls the quiz list of a running server and prints it as a table.

use std::time::Duration;

use crate::client::{QuizBoard, QuizClient, QuizPoller};
use crate::config::settings::ClientConfig;
use crate::error::{AppError, AppResult};
use crate::server::shutdown_signal;

/// Handler for the watch command
pub struct WatchCommandHandler {
    config: ClientConfig,
}

impl WatchCommandHandler {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Polls until Ctrl+C or SIGTERM.
    ///
    /// The table is reprinted whenever a fetch returns a different list.
    pub async fn execute(self) -> AppResult<()> {
        let client = QuizClient::new(&self.config).map_err(|e| AppError::Configuration {
            key: "client.base_url".to_string(),
            source: e.into(),
        })?;

        tracing::info!(
            url = %client.quizzes_url(),
            interval_ms = self.config.poll_interval_ms,
            "Watching quizzes"
        );

        let poller = QuizPoller::new(client, Duration::from_millis(self.config.poll_interval_ms));
        let (handle, mut results) = poller.spawn();

        let mut board = QuizBoard::new();
        print!("{}", board.render());

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                result = results.recv() => match result {
                    Some(result) => {
                        if board.apply(result) {
                            print!("{}", board.render());
                        }
                    }
                    None => break,
                },
            }
        }

        drop(results);
        handle.abort();
        tracing::info!("Stopped watching quizzes");
        Ok(())
    }
}
