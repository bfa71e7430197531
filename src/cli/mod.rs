#[allow(clippy::module_inception)]
mod cli;
pub mod output;

pub use cli::Cli;
