use indexmap::IndexMap;
use log::info;

use crate::error::{DbError, Result};
use crate::name::validate_name;
use crate::table::Table;

/// A named collection of tables.
#[derive(Debug, Clone)]
pub struct Database {
    name: String,
    /// Tables by name, in creation order.
    tables: IndexMap<String, Table>,
}

impl Database {
    /// Creates a new, empty database.
    ///
    /// # Errors
    /// Returns [DbError::InvalidName] if the name breaks the identifier rule.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            tables: IndexMap::new(),
        })
    }

    /// The database's validated name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a table to the database.
    ///
    /// # Errors
    /// Returns [DbError::DuplicateTable] if a table with the same name already
    /// exists; the database is left untouched.
    pub fn add_table(&mut self, table: Table) -> Result<()> {
        if self.tables.contains_key(table.name()) {
            return Err(DbError::DuplicateTable(table.name().to_string()));
        }
        info!("database {}: table {} created", self.name, table.name());
        self.tables.insert(table.name().to_string(), table);
        Ok(())
    }

    /// Retrieves a reference to a table by name.
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Retrieves a mutable reference to a table by name.
    pub fn get_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }

    /// Returns the table names in creation order.
    pub fn list_tables(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }
}
