use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use snafu::prelude::*;
use tracing::debug;

use crate::ext::BestEffortPathExt;

const STDIN_MARKER: &str = "-";

/// Where the tree diagram is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TreeSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl TreeSource {
    /// Reads the whole diagram before any of it is interpreted.
    pub fn read(&self) -> Result<String, SourceReadError> {
        match self {
            TreeSource::Stdin => Self::read_stdin(),
            TreeSource::File(path) => Self::read_file(path),
        }
    }

    fn read_stdin() -> Result<String, SourceReadError> {
        debug!("Reading tree from standard input");
        let mut contents = String::new();
        let n = io::stdin()
            .read_to_string(&mut contents)
            .context(StdinSnafu)?;
        debug!("Successfully read standard input: {n} bytes");
        Ok(contents)
    }

    fn read_file(path: &Path) -> Result<String, SourceReadError> {
        debug!("Reading tree from {}", path.best_effort_path_display());
        let contents = fs::read_to_string(path).context(FileReadSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        debug!("Successfully read tree file: {} bytes", contents.len());
        Ok(contents)
    }
}

impl From<Option<PathBuf>> for TreeSource {
    fn from(input: Option<PathBuf>) -> Self {
        match input {
            Some(path) if path.as_os_str() != STDIN_MARKER => TreeSource::File(path),
            _ => TreeSource::Stdin,
        }
    }
}

#[derive(Debug, Snafu)]
pub enum SourceReadError {
    #[snafu(display("Failed to read the tree from standard input"))]
    StdinError { source: io::Error },
    #[snafu(display("Failed to read the tree file: {}", file_path))]
    FileReadError {
        file_path: String,
        source: io::Error,
    },
}
