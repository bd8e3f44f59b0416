//! Polling client for the quiz list.
//!
//! - `http` - Typed wrapper over `GET {base_url}/quizzes`
//! - `poller` - Fixed-interval fetch loop feeding a channel
//! - `board` - Latest-list state and terminal table rendering

mod board;
mod error;
mod http;
mod poller;

pub use board::QuizBoard;
pub use error::{ClientError, ClientResult};
pub use http::{QuizClient, QuizRow};
pub use poller::QuizPoller;
