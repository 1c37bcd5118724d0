use indexmap::IndexMap;
use log::info;

use crate::database::Database;
use crate::error::{DbError, Result};

/// Top-level registry of databases, owned by a session.
#[derive(Debug, Default, Clone)]
pub struct DataStore {
    databases: IndexMap<String, Database>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a database.
    ///
    /// # Errors
    /// Returns [DbError::DuplicateDatabase] if the name is already taken.
    pub fn add_database(&mut self, database: Database) -> Result<()> {
        if self.databases.contains_key(database.name()) {
            return Err(DbError::DuplicateDatabase(database.name().to_string()));
        }
        info!("database {} created", database.name());
        self.databases.insert(database.name().to_string(), database);
        Ok(())
    }

    pub fn get_database(&self, name: &str) -> Option<&Database> {
        self.databases.get(name)
    }

    pub fn get_database_mut(&mut self, name: &str) -> Option<&mut Database> {
        self.databases.get_mut(name)
    }

    /// Returns the database names in creation order.
    pub fn list_databases(&self) -> Vec<&str> {
        self.databases.keys().map(String::as_str).collect()
    }
}
