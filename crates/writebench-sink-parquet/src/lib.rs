//! Parquet row sink for the writebench write benchmark.
//!
//! This crate adapts the `parquet` crate's [`ArrowWriter`] to the
//! `writebench_core::RowSink` contract. Submitted records are buffered and
//! cut into Arrow record batches; the page encoding, compression, row-group
//! layout, and footer all belong to the `parquet` crate.
//!
//! [`ArrowWriter`]: parquet::arrow::ArrowWriter
//!
//! # Example
//!
//! ```ignore
//! use writebench_core::{RecordSchema, RowSink};
//! use writebench_sink_parquet::ParquetSink;
//!
//! let schema = RecordSchema::student();
//! let mut sink = ParquetSink::create("/tmp/students.parquet", &schema)?;
//! sink.submit(&record)?;
//! sink.finalize()?;
//! ```

mod sink;

pub use sink::{CompressionCodec, ParquetSink, ParquetSinkOptions, DEFAULT_BATCH_SIZE};
