pub mod ast;
pub mod lexer;
pub mod matcher;
pub mod parser;

pub use ast::{ClassItem, Part, Pattern, Segment};
pub use lexer::tokenize;
pub use parser::parse;
