use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;
use crate::filesystem::IndentMode;

/// Create the directories and empty files drawn in a tree diagram.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// File holding the tree diagram; standard input when omitted or `-`
    pub input: Option<PathBuf>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Directory the tree is created under
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// How nesting depth is inferred from each line
    #[clap(long, default_value = "compat", value_enum)]
    pub indent_mode: IndentMode,

    /// Ignore everything after a `#` on each line
    #[clap(long)]
    pub strip_comments: bool,
}
