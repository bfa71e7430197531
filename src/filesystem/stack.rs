use std::path::{Path, PathBuf};

use tracing::trace;

use crate::ext::BestEffortPathExt;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    path: PathBuf,
    indent: usize,
}

/// Chain of directories that are currently open while walking a diagram.
///
/// Levels strictly increase from the bottom open frame to the top. The root
/// sits below every open frame and is never popped, so there is always a
/// directory to resolve against.
#[derive(Debug, Clone)]
pub struct DirectoryStack {
    root: PathBuf,
    open: Vec<Frame>,
}

impl DirectoryStack {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            open: Vec::new(),
        }
    }

    /// Closes every open directory at `indent` or deeper. A line on the same
    /// level as the top frame is its sibling, not its child.
    pub fn unwind_to(&mut self, indent: usize) {
        while self.open.last().is_some_and(|top| top.indent >= indent) {
            if let Some(closed) = self.open.pop() {
                trace!(
                    "Closed directory {} (indent {})",
                    closed.path.best_effort_path_display(),
                    closed.indent
                );
            }
        }
    }

    pub fn push(&mut self, path: PathBuf, indent: usize) {
        trace!(
            "Opened directory {} (indent {})",
            path.best_effort_path_display(),
            indent
        );
        self.open.push(Frame { path, indent });
    }

    /// Directory new entries are created in.
    pub fn current(&self) -> &Path {
        self.open
            .last()
            .map_or(self.root.as_path(), |top| top.path.as_path())
    }

    /// Number of open directories, not counting the root.
    pub fn depth(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_root() {
        let stack = DirectoryStack::new("out");
        assert_eq!(stack.current(), Path::new("out"));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn push_moves_current_into_new_directory() {
        let mut stack = DirectoryStack::new("out");
        stack.push(PathBuf::from("out/project"), 0);
        assert_eq!(stack.current(), Path::new("out/project"));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn same_level_closes_previous_sibling() {
        let mut stack = DirectoryStack::new("out");
        stack.push(PathBuf::from("out/project"), 0);
        stack.push(PathBuf::from("out/project/src"), 2);

        stack.unwind_to(2);

        assert_eq!(stack.current(), Path::new("out/project"));
    }

    #[test]
    fn deeper_level_keeps_parent_open() {
        let mut stack = DirectoryStack::new("out");
        stack.push(PathBuf::from("out/project"), 0);

        stack.unwind_to(2);

        assert_eq!(stack.current(), Path::new("out/project"));
    }

    #[test]
    fn shallower_level_closes_several_directories() {
        let mut stack = DirectoryStack::new("out");
        stack.push(PathBuf::from("out/a"), 0);
        stack.push(PathBuf::from("out/a/b"), 2);
        stack.push(PathBuf::from("out/a/b/c"), 4);

        stack.unwind_to(2);

        assert_eq!(stack.current(), Path::new("out/a"));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn unwinding_without_open_directories_stays_at_root() {
        let mut stack = DirectoryStack::new("out");

        stack.unwind_to(0);

        assert_eq!(stack.current(), Path::new("out"));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn root_is_never_popped() {
        let mut stack = DirectoryStack::new("out");
        stack.push(PathBuf::from("out/a"), 3);
        stack.push(PathBuf::from("out/a/b"), 7);

        stack.unwind_to(0);
        stack.unwind_to(0);

        assert_eq!(stack.current(), Path::new("out"));
        assert_eq!(stack.depth(), 0);
    }
}
