//! Request hardening.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits.rs (reject bodies over the configured size)
//!     → handler
//!     → headers.rs (add security headers to the response)
//! ```

pub mod headers;
pub mod limits;
