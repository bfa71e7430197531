use std::path::Path;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::cli::output;
use crate::ext::BestEffortPathExt;
use crate::filesystem::{LayoutError, LayoutSummary, TreeInterpreter};
use crate::source::SourceReadError;

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let tree = app_config.source.read().context(SourceSnafu)?;

        let summary = TreeInterpreter::new(&app_config.root)
            .with_indent_mode(app_config.indent_mode)
            .with_comment_stripping(app_config.strip_comments)
            .create_from_tree(&tree)
            .context(LayoutSnafu)?;

        if app_config.print_summary {
            output::configure_colors();
            output::success(&summary_line(&summary, &app_config.root));
        }

        Ok(())
    }
}

fn summary_line(summary: &LayoutSummary, root: &Path) -> String {
    format!(
        "Created {} directories and {} files under {}",
        summary.directories,
        summary.files,
        root.best_effort_path_display()
    )
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while reading the tree"))]
    SourceError { source: SourceReadError },
    #[snafu(display("Critical failure encountered while creating the layout"))]
    LayoutError { source: LayoutError },
}
