pub mod ast;
pub mod check;
pub mod query_loader;
pub mod setup;
