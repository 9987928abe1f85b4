//! Parquet encoding of submitted records.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, ZstdLevel};
use parquet::errors::ParquetError;
use parquet::file::properties::WriterProperties;
use tracing::debug;
use writebench_core::{FieldType, RecordSchema, RowSink, SinkError, StudentRecord};

/// Rows buffered per record batch when no override is given.
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// Compression codec applied to data pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionCodec {
    /// No compression
    None,
    /// Snappy
    #[default]
    Snappy,
    /// Zstd at the crate's default level
    Zstd,
}

impl CompressionCodec {
    fn to_parquet(self) -> Compression {
        match self {
            CompressionCodec::None => Compression::UNCOMPRESSED,
            CompressionCodec::Snappy => Compression::SNAPPY,
            CompressionCodec::Zstd => Compression::ZSTD(ZstdLevel::default()),
        }
    }
}

/// Tuning options for the Parquet sink.
#[derive(Debug, Clone)]
pub struct ParquetSinkOptions {
    /// Rows buffered before a record batch is cut; also the row-group cap
    pub batch_size: usize,

    /// Data page compression
    pub compression: CompressionCodec,
}

impl Default for ParquetSinkOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            compression: CompressionCodec::default(),
        }
    }
}

/// Row sink that encodes records into a single Parquet file.
///
/// Records are buffered until `batch_size` rows are pending, then written as
/// one Arrow record batch. Dropping the sink without finalizing releases the
/// file handle but leaves the file without a footer.
pub struct ParquetSink {
    writer: ArrowWriter<File>,
    schema: SchemaRef,
    buffer: Vec<StudentRecord>,
    batch_size: usize,
}

impl ParquetSink {
    /// Open a sink with default options.
    pub fn create<P: AsRef<Path>>(path: P, schema: &RecordSchema) -> Result<Self, SinkError> {
        Self::with_options(path, schema, ParquetSinkOptions::default())
    }

    /// Open a sink bound to `path` and `schema`.
    ///
    /// Creates (or truncates) the output file. Nothing is durable until
    /// [`RowSink::finalize`] succeeds.
    pub fn with_options<P: AsRef<Path>>(
        path: P,
        schema: &RecordSchema,
        options: ParquetSinkOptions,
    ) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let batch_size = options.batch_size.max(1);

        let file = File::create(path)?;
        let schema = Arc::new(to_arrow_schema(schema));
        let props = WriterProperties::builder()
            .set_compression(options.compression.to_parquet())
            .set_max_row_group_size(batch_size)
            .build();
        let writer =
            ArrowWriter::try_new(file, schema.clone(), Some(props)).map_err(parquet_error)?;

        debug!(
            "opened parquet sink at {} (batch_size={}, compression={:?})",
            path.display(),
            batch_size,
            options.compression
        );

        Ok(Self {
            writer,
            schema,
            buffer: Vec::with_capacity(batch_size),
            batch_size,
        })
    }

    /// Encode the buffered rows as one record batch and hand it to the writer.
    fn flush_batch(&mut self) -> Result<(), SinkError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let names: ArrayRef = Arc::new(StringArray::from_iter_values(
            self.buffer.iter().map(|r| r.name.as_str()),
        ));
        let ages: ArrayRef = Arc::new(Int32Array::from_iter_values(
            self.buffer.iter().map(|r| r.age),
        ));
        let ids: ArrayRef = Arc::new(Int64Array::from_iter_values(
            self.buffer.iter().map(|r| r.id),
        ));
        let weights: ArrayRef = Arc::new(Float64Array::from_iter_values(
            self.buffer.iter().map(|r| r.weight),
        ));
        let sexes: ArrayRef = Arc::new(BooleanArray::from_iter(
            self.buffer.iter().map(|r| Some(r.sex)),
        ));
        let schools: ArrayRef = Arc::new(StringArray::from_iter_values(
            self.buffer.iter().map(|r| r.school.as_str()),
        ));

        let batch = RecordBatch::try_new(
            self.schema.clone(),
            vec![names, ages, ids, weights, sexes, schools],
        )
        .map_err(arrow_error)?;

        self.writer.write(&batch).map_err(parquet_error)?;
        self.buffer.clear();
        Ok(())
    }
}

impl RowSink for ParquetSink {
    fn submit(&mut self, record: &StudentRecord) -> Result<(), SinkError> {
        self.buffer.push(record.clone());
        if self.buffer.len() >= self.batch_size {
            self.flush_batch()?;
        }
        Ok(())
    }

    fn finalize(mut self) -> Result<(), SinkError> {
        self.flush_batch()?;
        self.writer.close().map_err(parquet_error)?;
        Ok(())
    }
}

/// Map the record schema onto an Arrow schema.
fn to_arrow_schema(schema: &RecordSchema) -> Schema {
    let fields: Vec<Field> = schema
        .fields()
        .iter()
        .map(|f| Field::new(f.name, to_arrow_type(f.field_type), f.nullable))
        .collect();
    Schema::new(fields)
}

fn to_arrow_type(field_type: FieldType) -> DataType {
    match field_type {
        FieldType::Utf8 => DataType::Utf8,
        FieldType::Int32 => DataType::Int32,
        FieldType::Int64 => DataType::Int64,
        FieldType::Float64 => DataType::Float64,
        FieldType::Boolean => DataType::Boolean,
    }
}

fn parquet_error(err: ParquetError) -> SinkError {
    match err {
        ParquetError::External(source) => match source.downcast::<std::io::Error>() {
            Ok(io) => SinkError::Io(*io),
            Err(other) => SinkError::Encoding(other.to_string()),
        },
        other => SinkError::Encoding(other.to_string()),
    }
}

fn arrow_error(err: ArrowError) -> SinkError {
    match err {
        ArrowError::IoError(_, io) => SinkError::Io(io),
        other => SinkError::Encoding(other.to_string()),
    }
}
