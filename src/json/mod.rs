//! Self-contained text-format codec.
//!
//! The schedule, template, and ledger documents all go through this codec.
//! It is deliberately strict on whole-document structure: the tolerant
//! field-level handling lives in the loaders built on top of it, never here.

pub mod parser;
pub mod value;
pub mod writer;

pub use parser::{ParseError, parse};
pub use value::{Object, Value};
pub use writer::to_text;
