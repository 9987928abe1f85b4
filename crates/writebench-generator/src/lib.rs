//! Deterministic row generator for the writebench write benchmark.
//!
//! Every record is a pure function of its generation index, so two runs with
//! the same record count produce bit-for-bit identical output. There is no
//! seed and no RNG: the index is the sole source of variation.
//!
//! # Example
//!
//! ```rust
//! use writebench_generator::RowGenerator;
//!
//! let mut generator = RowGenerator::new();
//! let record = generator.next_record();
//! assert_eq!(record.id, 0);
//! assert_eq!(record.age, 18);
//! ```

pub mod generator;

// Re-exports for convenience
pub use generator::{record_at, RowGenerator, RowIterator, SCHOOL_NAME, STUDENT_NAME};
