pub mod ast;
pub mod column;
pub mod data_type;
pub mod database;
pub mod error;
pub mod name;
pub mod parser;
pub mod session;
pub mod shell;
pub mod store;
pub mod table;
pub mod tokenizer;
pub mod value;

pub use data_type::DataType;
pub use database::Database;
pub use error::{DbError, ParseError, Result};
pub use session::Session;
pub use shell::{Shell, ShellConfig};
pub use store::DataStore;
pub use table::{ColumnDef, Predicate, Row, Schema, Table};
pub use value::Value;
