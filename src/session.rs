//! Command dispatch for one interactive session.
//!
//! A [Session] owns its [DataStore] and the name of the active database, and
//! turns each command line into a one-line (or, for selects, multi-line)
//! textual response.

use log::{debug, info};

use crate::ast::Command;
use crate::database::Database;
use crate::error::{DbError, Result};
use crate::parser::{parse_command, parse_create_table, parse_insert, parse_select};
use crate::store::DataStore;
use crate::table::Row;
use crate::value::Value;

#[derive(Debug, Default)]
pub struct Session {
    store: DataStore,
    /// Name of the database selected with `use database`.
    active_database: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session on top of an existing store.
    pub fn with_store(store: DataStore) -> Self {
        Self {
            store,
            active_database: None,
        }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn active_database(&self) -> Option<&str> {
        self.active_database.as_deref()
    }

    /// Runs one command line and returns the text to show to the user.
    ///
    /// Errors are rendered as their message. `quit` is left to the caller and
    /// answered here as an unknown command.
    ///
    /// # Example
    /// ```
    /// use linedb::Session;
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.process_command("list databases"), "No databases");
    /// assert_eq!(session.process_command("create database shop"), "Database shop created");
    /// assert_eq!(session.process_command("use database shop"), "Active database: shop");
    /// ```
    pub fn process_command(&mut self, line: &str) -> String {
        self.respond(parse_command(line))
    }

    /// Runs an already classified command, rendering a failure as its message.
    pub fn respond(&mut self, command: Command) -> String {
        match self.execute(command) {
            Ok(response) => response,
            Err(err) => {
                debug!("command failed: {err}");
                err.to_string()
            }
        }
    }

    /// Runs an already classified command.
    ///
    /// # Errors
    /// Any [DbError] raised while parsing the command or applying it. A failed
    /// command leaves the store unchanged.
    pub fn execute(&mut self, command: Command) -> Result<String> {
        match command {
            Command::CreateDatabase(name) => {
                let database = Database::new(name)?;
                let response = format!("Database {} created", database.name());
                self.store.add_database(database)?;
                Ok(response)
            }
            Command::ListDatabases => {
                let names = self.store.list_databases();
                if names.is_empty() {
                    Ok("No databases".to_string())
                } else {
                    Ok(names.join(", "))
                }
            }
            Command::UseDatabase(name) => {
                if self.store.get_database(&name).is_none() {
                    return Err(DbError::UnknownDatabase(name));
                }
                info!("active database switched to {name}");
                let response = format!("Active database: {name}");
                self.active_database = Some(name);
                Ok(response)
            }
            Command::ListTables => {
                let database = self.active()?;
                let names = database.list_tables();
                if names.is_empty() {
                    Ok(format!("No tables in database {}", database.name()))
                } else {
                    Ok(names.join(", "))
                }
            }
            Command::CreateTable(rest) => {
                let database = self.active_mut()?;
                let table = parse_create_table(&rest)?;
                let response = format!("Table {} created", table.name());
                database.add_table(table)?;
                Ok(response)
            }
            Command::Select(rest) => {
                let database = self.active()?;
                let query = parse_select(&rest)?;
                let table = database
                    .get_table(&query.table)
                    .ok_or(DbError::TableNotFound(query.table.clone()))?;
                Ok(render_rows(&table.select(query.predicate.as_ref())))
            }
            Command::Insert(line) => {
                let database = self.active_mut()?;
                let query = parse_insert(&line)?;
                let table = database
                    .get_table_mut(&query.table)
                    .ok_or(DbError::TableNotFound(query.table.clone()))?;
                table.insert(&query.values);
                Ok(format!("1 row inserted into {}", query.table))
            }
            Command::Quit | Command::Unknown => Err(DbError::UnknownCommand),
        }
    }

    fn active(&self) -> Result<&Database> {
        self.active_database
            .as_deref()
            .and_then(|name| self.store.get_database(name))
            .ok_or(DbError::NoActiveDatabase)
    }

    fn active_mut(&mut self) -> Result<&mut Database> {
        self.active_database
            .as_deref()
            .and_then(|name| self.store.get_database_mut(name))
            .ok_or(DbError::NoActiveDatabase)
    }
}

/// Renders selected rows: a header of column names, then one line per row.
/// Text is single-quoted, `NULL` is bare.
pub fn render_rows(rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return "No rows".to_string();
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(first.keys().map(String::as_str).collect::<Vec<_>>().join(", "));
    for row in rows {
        let cells: Vec<String> = row.values().map(render_value).collect();
        lines.push(cells.join(", "));
    }
    lines.join("\n")
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Text(s) => format!("'{s}'"),
        other => other.to_string(),
    }
}
