//! Recreates a directory layout from a textual tree diagram.
//!
//! Each line's nesting depth is inferred from the box-drawing connectors
//! in front of its name, and a stack of open directories turns that flat
//! sequence of lines back into parent/child relationships.

mod layout;
mod line;
mod stack;

pub use layout::{LayoutError, LayoutSummary, TreeInterpreter};
pub use line::IndentMode;
