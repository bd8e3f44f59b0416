use std::time::Duration;

use serde::Deserialize;

use super::error::{ClientError, ClientResult};
use crate::config::ClientConfig;

/// One quiz as listed by the server, reduced to what the table shows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Deserialize)]
struct QuizListBody {
    quizzes: Vec<QuizRow>,
}

/// HTTP client for the quiz list endpoint.
#[derive(Debug, Clone)]
pub struct QuizClient {
    http: reqwest::Client,
    quizzes_url: String,
}

impl QuizClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base = config.base_url.trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "must start with http:// or https://".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            quizzes_url: format!("{}/quizzes", base),
        })
    }

    pub fn quizzes_url(&self) -> &str {
        &self.quizzes_url
    }

    /// Fetches the most recent quizzes, newest first.
    pub async fn list_quizzes(&self) -> ClientResult<Vec<QuizRow>> {
        let response = self.http.get(&self.quizzes_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: QuizListBody = response.json().await?;
        Ok(body.quizzes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use jiff::Timestamp;
    use tokio::net::TcpListener;

    use crate::client::test_support::spawn_server;
    use crate::models::NewQuiz;
    use crate::state::AppState;
    use crate::store::MemoryStore;

    fn config(base_url: &str) -> ClientConfig {
        ClientConfig {
            base_url: base_url.to_string(),
            request_timeout_ms: 2_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_rejects_non_http_url() {
        assert!(matches!(
            QuizClient::new(&config("ftp://example.com")),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_quizzes_url_joins_base() {
        let client = QuizClient::new(&config("http://localhost:3000/api/")).unwrap();
        assert_eq!(client.quizzes_url(), "http://localhost:3000/api/quizzes");
    }

    #[tokio::test]
    async fn test_list_quizzes_against_running_server() {
        let state = AppState::new(Arc::new(MemoryStore::new()));
        for (i, name) in ["Older", "Newer"].into_iter().enumerate() {
            state
                .repositories
                .quizzes
                .create(NewQuiz {
                    name: name.to_string(),
                    description: (i == 1).then(|| "fresh".to_string()),
                    active: i == 1,
                    created_on: Timestamp::from_second(1_700_000_000 + i as i64).unwrap(),
                })
                .await
                .unwrap();
        }
        let base_url = spawn_server(state).await;

        let quizzes = QuizClient::new(&config(&base_url))
            .unwrap()
            .list_quizzes()
            .await
            .unwrap();

        let names: Vec<&str> = quizzes.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, vec!["Newer", "Older"]);
        assert_eq!(quizzes[0].description.as_deref(), Some("fresh"));
        assert!(quizzes[0].active);
        assert_eq!(quizzes[1].description, None);
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let base_url = spawn_server(AppState::new(Arc::new(MemoryStore::new()))).await;
        let client = QuizClient::new(&config(&format!("{}/missing", base_url))).unwrap();

        match client.list_quizzes().await {
            Err(ClientError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert!(body.contains("NOT_FOUND"));
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = QuizClient::new(&config(&format!("http://{}/api", addr))).unwrap();
        assert!(matches!(
            client.list_quizzes().await,
            Err(ClientError::Request(_))
        ));
    }
}
