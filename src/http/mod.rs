//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign request id)
//!     → extract.rs (deserialize + validate input, 422 on failure)
//!     → handlers (catalog logic)
//!     → response.rs (errors rendered as JSON `detail`)
//! ```

pub mod extract;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::{ApiError, FieldError};
pub use server::{AppState, HttpServer};
