//! Schema definition shared by the row generator and the row sinks.
//!
//! The schema is a plain immutable value: build it once per run (see
//! [`RecordSchema::student`]) and pass it by reference to whichever sink
//! encodes the records. Sinks own the mapping from these types onto their
//! format's native schema representation.

/// Field types representable in the record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 text
    Utf8,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit floating point
    Float64,
    /// Boolean
    Boolean,
}

/// A single field in the record schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Field name as written to the output file
    pub name: &'static str,

    /// Field type
    pub field_type: FieldType,

    /// Whether the field may be absent
    pub nullable: bool,
}

impl FieldDefinition {
    /// Create a new required (non-nullable) field definition.
    pub fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            nullable: false,
        }
    }
}

/// Ordered, immutable description of the record shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    fields: Vec<FieldDefinition>,
}

impl RecordSchema {
    /// The fixed six-field student schema.
    ///
    /// Field order matches [`crate::StudentRecord`] and is the column order
    /// of the output file.
    pub fn student() -> Self {
        Self {
            fields: vec![
                FieldDefinition::required("name", FieldType::Utf8),
                FieldDefinition::required("age", FieldType::Int32),
                FieldDefinition::required("id", FieldType::Int64),
                FieldDefinition::required("weight", FieldType::Float64),
                FieldDefinition::required("sex", FieldType::Boolean),
                FieldDefinition::required("school", FieldType::Utf8),
            ],
        }
    }

    /// Fields in column order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Field names in column order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }
}
