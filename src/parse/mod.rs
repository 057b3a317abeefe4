mod error;
mod lexer;
mod parser;

pub use error::InvalidNotation;
pub use parser::{Parser, DEFAULT_MAX};
