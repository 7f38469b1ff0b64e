pub mod console;
pub mod errors;
pub mod repl;
pub mod sql;

pub use sql::{compile, CompileResult};
