//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every request:
//!     → request id assigned (http::request)
//!     → TraceLayer span carrying method, uri and request id
//!     → metrics.rs middleware (counter + latency histogram)
//!
//! Consumers:
//!     → stdout logs (pretty or JSON, see logging.rs)
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;
