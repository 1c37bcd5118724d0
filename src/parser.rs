use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use crate::ast::{Command, InsertQuery, SelectQuery};
use crate::error::{DbError, ParseError, Result};
use crate::table::{Predicate, Table};
use crate::tokenizer::FieldTokenizer;
use crate::value::Value;

static PAREN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)\)").expect("valid regex"));
static WHERE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bwhere\b").expect("valid regex"));
static INSERT_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^insert\s+into\s+.+\(.+\)\s*values\s*\(.+\)$").expect("valid regex")
});
static INSERT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^insert\s+into\s+").expect("valid regex"));
static INSERT_COLUMNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\((.+)\)\s*values\b").expect("valid regex"));
static INSERT_VALUES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bvalues\s*\((.+)\)$").expect("valid regex"));

/// Strips `keyword` from the start of `line`, ignoring ASCII case.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    head.eq_ignore_ascii_case(keyword)
        .then(|| &line[keyword.len()..])
}

/// Classifies a command line by its leading keywords.
///
/// Keywords are case-insensitive; names and values keep their case.
///
/// # Example
/// ```
/// # use linedb::{ast::Command, parser::parse_command};
/// assert_eq!(parse_command("USE DATABASE Shop"), Command::UseDatabase("Shop".into()));
/// assert_eq!(parse_command("drop table x"), Command::Unknown);
/// ```
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();

    let command = if line.eq_ignore_ascii_case("quit") {
        Command::Quit
    } else if line.eq_ignore_ascii_case("list databases") {
        Command::ListDatabases
    } else if line.eq_ignore_ascii_case("list tables") {
        Command::ListTables
    } else if let Some(rest) = strip_keyword(line, "create database ") {
        Command::CreateDatabase(rest.trim().to_string())
    } else if let Some(rest) = strip_keyword(line, "use database ") {
        Command::UseDatabase(rest.trim().to_string())
    } else if let Some(rest) = strip_keyword(line, "create table ") {
        Command::CreateTable(rest.to_string())
    } else if let Some(rest) = strip_keyword(line, "select * from ") {
        Command::Select(rest.to_string())
    } else if strip_keyword(line, "insert into ").is_some() {
        Command::Insert(line.to_string())
    } else {
        Command::Unknown
    };

    debug!("parsed {line:?} as {command:?}");
    command
}

/// Parses `<name> (<col> <type>, ...)` into a new, empty [Table].
///
/// A leading `create table ` is tolerated. Each column clause is split on its
/// last whitespace run, so everything before it is the column name.
///
/// # Errors
/// - [ParseError::CreateTable] if more than one parenthesized group is present.
/// - [DbError::MissingDataType] if a column clause has no type token.
/// - Any error of [Table::new] (name, empty definition, unsupported type).
pub fn parse_create_table(command: &str) -> Result<Table> {
    let rest = strip_keyword(command.trim_start(), "create table ").unwrap_or(command);

    let name = rest.split('(').next().unwrap_or_default().trim();

    let groups: Vec<&str> = PAREN_GROUP
        .captures_iter(rest)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    if groups.len() > 1 {
        return Err(ParseError::CreateTable.into());
    }

    let mut column_defs = Vec::new();
    if let Some(block) = groups.first() {
        for clause in block.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            let (column, data_type) = clause
                .rsplit_once(char::is_whitespace)
                .unwrap_or((clause, ""));
            let (column, data_type) = (column.trim(), data_type.trim());

            if data_type.is_empty() {
                return Err(DbError::MissingDataType(column.to_string()));
            }
            column_defs.push((column, data_type));
        }
    }

    Table::new(name, column_defs)
}

/// Parses `<table> [where <col> = <value>]`.
///
/// A leading `select * from ` is tolerated. Spaces and single quotes are
/// trimmed from both ends of the predicate value.
///
/// # Errors
/// Returns [ParseError::Select] when the table name is missing, or when a
/// `where` clause lacks a column or a value on either side of `=`.
pub fn parse_select(command: &str) -> Result<SelectQuery> {
    let rest = strip_keyword(command.trim_start(), "select * from ").unwrap_or(command);

    let (table, where_clause) = match WHERE_KEYWORD.find(rest) {
        Some(m) => (&rest[..m.start()], Some(&rest[m.end()..])),
        None => (rest, None),
    };

    let table = table.trim();
    if table.is_empty() {
        return Err(ParseError::Select.into());
    }

    let predicate = match where_clause {
        None => None,
        Some(clause) => {
            let (column, value) = clause.split_once('=').unwrap_or((clause, ""));
            let column = column.trim();
            let value = value.trim_matches(|c: char| c.is_whitespace() || c == '\'');

            if column.is_empty() || value.is_empty() {
                return Err(ParseError::Select.into());
            }
            Some(Predicate::new(column, value))
        }
    };

    Ok(SelectQuery {
        table: table.to_string(),
        predicate,
    })
}

/// Parses a full `insert into <table> (<cols>) values (<vals>)` line.
///
/// Both lists are split on commas outside single quotes; values lose their
/// enclosing quotes. A column listed twice keeps its first position and its
/// last value.
///
/// # Errors
/// - [ParseError::Insert] if the line does not have the expected shape.
/// - [ParseError::ColumnCountMismatch] if the lists differ in length.
pub fn parse_insert(command: &str) -> Result<InsertQuery> {
    let command = command.trim();
    if !INSERT_SYNTAX.is_match(command) {
        return Err(ParseError::Insert.into());
    }

    let rest = match INSERT_PREFIX.find(command) {
        Some(m) => &command[m.end()..],
        None => return Err(ParseError::Insert.into()),
    };

    let table = rest.split('(').next().unwrap_or_default().trim();
    if table.is_empty() {
        return Err(ParseError::Insert.into());
    }

    let columns_block = INSERT_COLUMNS
        .captures(rest)
        .and_then(|caps| caps.get(1))
        .ok_or(ParseError::Insert)?;
    let values_block = INSERT_VALUES
        .captures(rest)
        .and_then(|caps| caps.get(1))
        .ok_or(ParseError::Insert)?;

    let columns = FieldTokenizer::new(columns_block.as_str()).tokenize();
    let values = FieldTokenizer::new(values_block.as_str()).tokenize();

    if columns.len() != values.len() {
        return Err(ParseError::ColumnCountMismatch.into());
    }

    let values: IndexMap<String, Value> = columns
        .into_iter()
        .zip(values.into_iter().map(Value::from))
        .collect();

    Ok(InsertQuery {
        table: table.to_string(),
        values,
    })
}
