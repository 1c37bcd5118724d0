use std::sync::Arc;

use crate::data_type::DataType;
use crate::value::Value;
use bitvec::prelude::*;

/// Physical storage for column data.
/// Each variant wraps a collection of a specific type to ensure contiguous memory
/// allocation (columnar storage).
#[derive(Debug, Clone)]
pub enum ColumnData {
    /// Vector of 64-bit integers.
    Int(Vec<i64>),
    /// Vector of reference-counted strings.
    Text(Vec<Arc<str>>),
}

/// Represents a column within a table.
/// It combines metadata (name, type) with actual data and a nullability tracker.
#[derive(Debug, Clone)]
pub struct Column {
    /// The name of the column.
    pub name: String,
    /// The declared data type of the column.
    pub data_type: DataType,
    /// The actual values stored in the column.
    pub data: ColumnData,
    /// A bitmap where a `true` bit indicates that the value at that index is `NULL`.
    pub null_bitmap: BitVec,
}

impl Column {
    /// Creates a new, empty column with the specified name and data type.
    pub fn new(name: String, data_type: DataType) -> Self {
        let data = match data_type {
            DataType::Int => ColumnData::Int(vec![]),
            DataType::Varchar => ColumnData::Text(vec![]),
        };
        Self {
            name,
            data_type,
            data,
            null_bitmap: bitvec!(),
        }
    }

    /// Appends a value to the end of the column, coercing it to the column type first.
    ///
    /// Pushing never fails: a value of the other type is converted with
    /// [Value::coerce], and a `Null` pushes a placeholder to keep the data
    /// vector aligned with the `null_bitmap`.
    ///
    /// # Example
    /// ```
    /// # use linedb::column::Column;
    /// # use linedb::{DataType, Value};
    /// let mut col = Column::new("age".into(), DataType::Int);
    /// col.push(&Value::from("30"));
    /// col.push(&Value::Null);
    ///
    /// assert_eq!(col.len(), 2);
    /// assert_eq!(col.get(0), Some(Value::Int(30)));
    /// assert!(col.get(1).unwrap().is_null());
    /// ```
    pub fn push(&mut self, value: &Value) {
        let value = value.coerce(self.data_type);
        self.null_bitmap.push(value.is_null());

        match (&mut self.data, value) {
            (ColumnData::Int(col), Value::Int(v)) => col.push(v),
            (ColumnData::Text(col), Value::Text(v)) => col.push(v),
            // Placeholders for NULL
            (ColumnData::Int(col), _) => col.push(0),
            (ColumnData::Text(col), _) => col.push(Arc::from("")),
        }
    }

    /// Returns the number of rows currently stored in the column.
    pub fn len(&self) -> usize {
        self.null_bitmap.len()
    }

    /// Returns true if there is no row in the column, else false.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retrieves the value at the specified row index.
    ///
    /// Returns `None` if the index is out of bounds and `Some(Value::Null)`
    /// if the `null_bitmap` marks the slot as null.
    pub fn get(&self, row_idx: usize) -> Option<Value> {
        if row_idx >= self.len() {
            return None;
        }
        if self.null_bitmap[row_idx] {
            return Some(Value::Null);
        }
        match &self.data {
            ColumnData::Int(col) => Some(Value::Int(col[row_idx])),
            ColumnData::Text(col) => Some(Value::Text(Arc::clone(&col[row_idx]))),
        }
    }

    /// Returns `true` if the value at `row_idx` loosely equals the raw predicate text.
    /// Out-of-bounds indexes never match.
    pub fn matches(&self, row_idx: usize, raw: &str) -> bool {
        self.get(row_idx).is_some_and(|v| v.loosely_equals(raw))
    }
}
