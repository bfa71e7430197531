use std::path::PathBuf;

use crate::cli::Cli;
use crate::filesystem::IndentMode;
use crate::source::TreeSource;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub source: TreeSource,
    pub root: PathBuf,
    pub indent_mode: IndentMode,
    pub strip_comments: bool,
    pub print_summary: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            source: cli.input.into(),
            root: cli.root,
            indent_mode: cli.indent_mode,
            strip_comments: cli.strip_comments,
            print_summary: !cli.log_level.is_silent(),
        }
    }
}
