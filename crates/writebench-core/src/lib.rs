//! Core types for the writebench write benchmark.
//!
//! This crate provides the foundational types shared by the generator, the
//! sinks, and the write driver:
//!
//! - [`StudentRecord`] - The fixed six-field record every component works with
//! - [`RecordSchema`] - Ordered, immutable description of the record shape
//! - [`RowSink`] - The contract a destination must satisfy
//! - [`SinkError`] - The complete error taxonomy for sink operations
//!
//! # Architecture
//!
//! ```text
//! writebench-core (this crate)
//!    │
//!    ├─── writebench-generator     (derives StudentRecords from the index)
//!    │
//!    ├─── writebench-sink-parquet  (implements RowSink over ArrowWriter)
//!    │
//!    └─── writebench               (drives generation and submission)
//! ```

pub mod record;
pub mod schema;
pub mod sink;

// Re-exports for convenience
pub use record::StudentRecord;
pub use schema::{FieldDefinition, FieldType, RecordSchema};
pub use sink::{RowSink, SinkError};
