pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;

pub use ast::{DEFAULT_SECTION, Document, Section, Value};
pub use config::JiniConfig;
pub use error::JiniError;
