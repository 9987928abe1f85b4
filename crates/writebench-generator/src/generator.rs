//! Row derivation and the sequential generator.

use writebench_core::StudentRecord;

/// Name carried by every generated record.
pub const STUDENT_NAME: &str = "StudentName";

/// School carried by every generated record.
pub const SCHOOL_NAME: &str = "PKU";

/// Derive the record for a generation index.
///
/// Pure function of `index` with a total input domain. The weight applies the
/// modulo to the integer index before the float conversion, so it is always a
/// whole number.
pub fn record_at(index: u64) -> StudentRecord {
    StudentRecord {
        name: STUDENT_NAME.to_string(),
        age: 18 + (index % 10) as i32,
        id: index as i64,
        weight: (60 + index % 10) as f64,
        sex: index % 2 == 0,
        school: SCHOOL_NAME.to_string(),
    }
}

/// Generator that walks the index space sequentially.
///
/// The index starts at 0, advances by one per record, and is never shared:
/// each driver run owns its own generator.
#[derive(Debug, Default)]
pub struct RowGenerator {
    /// Index the next record is derived from
    index: u64,
}

impl RowGenerator {
    /// Create a generator starting at index 0.
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Set the starting index for row generation.
    ///
    /// Useful for resuming generation from a specific point; derivation is
    /// index-pure, so no other state needs restoring.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Index the next call to [`RowGenerator::next_record`] will use.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the record at the current index and advance.
    pub fn next_record(&mut self) -> StudentRecord {
        let record = record_at(self.index);
        self.index += 1;
        record
    }

    /// Bounded iterator over the next `count` records.
    pub fn rows(&mut self, count: u64) -> RowIterator<'_> {
        RowIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates a fixed number of rows.
pub struct RowIterator<'a> {
    generator: &'a mut RowGenerator,
    remaining: u64,
}

impl Iterator for RowIterator<'_> {
    type Item = StudentRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowIterator<'_> {}
