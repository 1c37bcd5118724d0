use indexmap::IndexMap;
use log::debug;

use crate::column::Column;
use crate::data_type::DataType;
use crate::error::{DbError, Result};
use crate::name::{validate_column_name, validate_name};
use crate::value::Value;

/// Column definition in the schema
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
}

/// Ordered column definitions of a table, fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub columns: Vec<ColumnDef>,
}

/// One retrieved row: every schema column, in schema order.
pub type Row = IndexMap<String, Value>;

/// The single `column = value` filter supported by [Table::select].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: String,
    /// Raw predicate text, compared with [Value::loosely_equals].
    pub value: String,
}

impl Predicate {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// A named, append-only row store with a fixed schema.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    schema: Schema,
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Creates a table from `(column name, type token)` pairs in declaration order.
    ///
    /// Checks run in this order and the first violation is returned:
    /// table name, at least one column, every column name, every type.
    /// A column declared twice keeps its first position and its last type.
    ///
    /// # Example
    /// ```
    /// # use linedb::{DataType, Table};
    /// let table = Table::new("users", [("id", "int"), ("name", "varchar")]).unwrap();
    /// assert_eq!(table.column_definitions()[1].data_type, DataType::Varchar);
    ///
    /// assert!(Table::new("users", [("price", "double")]).is_err());
    /// ```
    pub fn new<I, N, T>(name: impl Into<String>, column_defs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: AsRef<str>,
    {
        let name = name.into();
        validate_name(&name)?;

        let mut declared: IndexMap<String, String> = IndexMap::new();
        for (column, data_type) in column_defs {
            declared.insert(column.into(), data_type.as_ref().to_string());
        }
        if declared.is_empty() {
            return Err(DbError::NoColumns);
        }

        for column in declared.keys() {
            validate_column_name(column)?;
        }

        let columns = declared
            .into_iter()
            .map(|(name, data_type)| {
                Ok(ColumnDef {
                    name,
                    data_type: data_type.parse()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let schema = Schema { columns };
        let columns = schema
            .columns
            .iter()
            .map(|column| Column::new(column.name.clone(), column.data_type))
            .collect();

        Ok(Self {
            name,
            schema,
            columns,
            row_count: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The validated schema, in declaration order.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn column_definitions(&self) -> &[ColumnDef] {
        &self.schema.columns
    }

    /// Number of rows inserted so far.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Appends a row.
    ///
    /// Each schema column takes the supplied value coerced to its type, or
    /// `NULL` when `data` has no entry for it. Keys that are not schema columns
    /// are ignored.
    pub fn insert(&mut self, data: &IndexMap<String, Value>) {
        for column in &mut self.columns {
            match data.get(&column.name) {
                Some(value) => column.push(value),
                None => column.push(&Value::Null),
            }
        }
        self.row_count += 1;
        debug!("table {}: row {} inserted", self.name, self.row_count);
    }

    /// Pivots the cells at `row_idx` into a [Row], `None` past the last row.
    pub fn get_row(&self, row_idx: usize) -> Option<Row> {
        if self.row_count <= row_idx {
            return None;
        }
        self.columns
            .iter()
            .map(|col| col.get(row_idx).map(|value| (col.name.clone(), value)))
            .collect()
    }

    /// Storage of the column called `name`.
    pub fn get_col(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.name == name)
    }

    /// Returns the rows matching `predicate` (all rows when `None`) in insertion order.
    ///
    /// A predicate on a column the table does not have matches nothing.
    pub fn select(&self, predicate: Option<&Predicate>) -> Vec<Row> {
        let filter = predicate.map(|p| (self.get_col(&p.column), p.value.as_str()));

        let rows: Vec<Row> = (0..self.row_count)
            .filter(|&i| match filter {
                None => true,
                Some((Some(column), raw)) => column.matches(i, raw),
                Some((None, _)) => false,
            })
            .filter_map(|i| self.get_row(i))
            .collect();

        debug!(
            "table {}: {} of {} rows selected",
            self.name,
            rows.len(),
            self.row_count
        );
        rows
    }
}
