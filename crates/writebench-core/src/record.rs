//! The record type written by the benchmark.

/// One synthetic student row.
///
/// Every field is always present; the schema carries no nullable columns.
/// Records are created by the generator, handed to a sink, and dropped —
/// nothing retains a record after its submission call returns.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    /// Student name
    pub name: String,
    /// Age in years
    pub age: i32,
    /// Unique record id, 64-bit so counts past 2^31 stay exact
    pub id: i64,
    /// Weight in kilograms
    pub weight: f64,
    /// true for even indices, false for odd
    pub sex: bool,
    /// School name
    pub school: String,
}
