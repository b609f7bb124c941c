//! Tree diagram parsing
//!
//! Turns diagram text back into an ordered list of [`ParsedEntry`] records,
//! parents before children, ready to be materialized on disk.

mod entry;
mod parser;
mod path;

pub use entry::{EntryKind, ParsedEntry};
pub use parser::{DiagramParser, parse};
