pub mod error;
pub mod parser;
pub mod spec;

pub use error::SyntaxError;
pub use parser::parse;
pub use spec::{Entry, FilterSpec};
