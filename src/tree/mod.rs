//! Directory tree rendering
//!
//! `TreeRenderer` walks a directory with an explicit work stack and produces
//! [`TreeLine`]s: 4-space indentation per level, `├── `/`└── ` connectors, and
//! a trailing `/` on directories.

mod config;
mod filter;
mod line;
mod renderer;

pub use config::{Depth, RenderConfig};
pub use filter::NameFilter;
pub use line::{BRANCH, INDENT, LAST_BRANCH, TreeLine};
pub use renderer::{TreeRenderer, dir_name, root_line};
