pub mod handlers;
pub mod parser;
