//! Middleware components for request processing.
//!
//! Layer order, outermost first: request ID, request logging, async handler
//! wrapper, global error normalization.

mod async_handler;
mod error_handler;
mod logging;
mod request_id;

pub use async_handler::async_handler;
pub use error_handler::{error_to_code, error_to_status_code, global_error_handler};
pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
