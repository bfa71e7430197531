mod tree_source;

pub use tree_source::{SourceReadError, TreeSource};
