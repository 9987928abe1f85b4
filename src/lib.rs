//! Write-throughput benchmark for columnar storage.
//!
//! The library surface is the write driver; the binary in `main.rs` wires it
//! to the Parquet sink and the command line.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ WriteDriver  │ ──► │ RowGenerator │ ──► │   RowSink    │
//! │ (this crate) │     │  (index i)   │     │  (Parquet)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        N iterations, strictly sequential, one record in flight
//! ```

pub mod driver;

// Re-exports for convenience
pub use driver::{WriteDriver, WriteMetrics};
