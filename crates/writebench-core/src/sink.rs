//! The row sink contract consumed by the write driver.

use crate::record::StudentRecord;

/// Errors a row sink can surface.
///
/// This is the complete taxonomy: a sink either cannot reach its destination
/// ([`SinkError::Io`]) or cannot encode a record against the declared schema
/// ([`SinkError::Encoding`]). Neither is retried; any failure aborts the run
/// and leaves the output in an unspecified state.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The destination could not be opened, written, or finalized.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// A submitted record could not be encoded against the schema.
    #[error("encoding failure: {0}")]
    Encoding(String),
}

/// Destination for generated records.
///
/// Opening is the implementing type's constructor: it binds the output path
/// and the schema, and is the only way to obtain a sink. `finalize` consumes
/// the sink, so no record can be submitted after the trailing metadata is
/// written. A sink dropped without `finalize` releases its file handle but
/// leaves the destination in an unspecified state.
pub trait RowSink {
    /// Encode one record into the destination.
    ///
    /// The sink may buffer internally; `submit` returning does not imply the
    /// record is durable until [`RowSink::finalize`] succeeds.
    fn submit(&mut self, record: &StudentRecord) -> Result<(), SinkError>;

    /// Flush buffered data, write trailing metadata, and release the file
    /// handle.
    fn finalize(self) -> Result<(), SinkError>;
}
