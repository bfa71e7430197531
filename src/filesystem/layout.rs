use std::fs::{self, File};
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::ext::BestEffortPathExt;
use crate::filesystem::line::{EntryKind, IndentMode, TreeLine, tree_lines};
use crate::filesystem::stack::DirectoryStack;

/// Counts of the entries materialised by one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutSummary {
    pub directories: usize,
    pub files: usize,
}

/// Turns a tree diagram into directories and empty files below `root`.
#[derive(Debug, Clone)]
pub struct TreeInterpreter {
    root: PathBuf,
    indent_mode: IndentMode,
    strip_comments: bool,
}

impl Default for TreeInterpreter {
    fn default() -> Self {
        Self::new(".")
    }
}

impl TreeInterpreter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            indent_mode: IndentMode::default(),
            strip_comments: false,
        }
    }

    pub fn with_indent_mode(mut self, indent_mode: IndentMode) -> Self {
        self.indent_mode = indent_mode;
        self
    }

    pub fn with_comment_stripping(mut self, strip_comments: bool) -> Self {
        self.strip_comments = strip_comments;
        self
    }

    /// Creates every entry of `tree` in input order.
    ///
    /// The first failing filesystem call aborts the run. Entries created
    /// before it are left in place.
    pub fn create_from_tree(&self, tree: &str) -> Result<LayoutSummary, LayoutError> {
        let mut root_ready = false;
        let mut stack = DirectoryStack::new(&self.root);
        let mut summary = LayoutSummary::default();

        for raw in tree_lines(tree, self.strip_comments) {
            let Some(line) = TreeLine::parse(raw, self.indent_mode) else {
                debug!("Skipping line without a name: {:?}", raw);
                continue;
            };
            debug!(
                "Processing line {:?} (name: {:?}, indent: {}, kind: {})",
                raw, line.name, line.indent, line.kind
            );

            stack.unwind_to(line.indent);
            let path = stack.current().join(&line.name);
            debug!("Resolved {} at depth {}", line.name, stack.depth());

            if !root_ready {
                self.ensure_root()?;
                root_ready = true;
            }

            match line.kind {
                EntryKind::Directory => {
                    create_directory(&path)?;
                    stack.push(path, line.indent);
                    summary.directories += 1;
                }
                EntryKind::File => {
                    create_empty_file(&path)?;
                    summary.files += 1;
                }
            }
        }

        info!(
            "Created {} directories and {} files under {}",
            summary.directories,
            summary.files,
            self.root.best_effort_path_display()
        );
        Ok(summary)
    }

    /// Root is only touched once an entry is about to be created under it.
    fn ensure_root(&self) -> Result<(), LayoutError> {
        fs::create_dir_all(&self.root).context(RootSnafu {
            path: self.root.clone(),
        })
    }
}

fn create_directory(path: &Path) -> Result<(), LayoutError> {
    fs::create_dir_all(path).context(CreateDirectorySnafu {
        path: path.to_path_buf(),
    })?;
    debug!("Created directory: {}", path.display());
    Ok(())
}

/// Truncates any existing file; the handle is closed before returning.
fn create_empty_file(path: &Path) -> Result<(), LayoutError> {
    File::create(path).context(CreateFileSnafu {
        path: path.to_path_buf(),
    })?;
    debug!("Created file: {}", path.display());
    Ok(())
}

#[derive(Debug, Snafu)]
pub enum LayoutError {
    #[snafu(display("Failed to prepare root directory {}", path.best_effort_path_display()))]
    RootError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create directory {}", path.best_effort_path_display()))]
    CreateDirectoryError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create file {}", path.best_effort_path_display()))]
    CreateFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}
