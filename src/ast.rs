use indexmap::IndexMap;

use crate::table::Predicate;
use crate::value::Value;

/// One command line, classified by its leading keywords.
///
/// Payloads are the raw remainder of the line, handed to the matching
/// `parse_*` function of [crate::parser].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create database <name>`
    CreateDatabase(String),
    /// `list databases`
    ListDatabases,
    /// `use database <name>`
    UseDatabase(String),
    /// `list tables`
    ListTables,
    /// `create table <name> (<col> <type>, ...)`, without the leading keywords.
    CreateTable(String),
    /// `select * from <table> [where <col> = <value>]`, without the leading keywords.
    Select(String),
    /// `insert into <table> (<cols>) values (<vals>)`, the whole line.
    Insert(String),
    Quit,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    pub table: String,
    pub predicate: Option<Predicate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertQuery {
    pub table: String,
    /// Raw text values by column, in command order.
    pub values: IndexMap<String, Value>,
}
