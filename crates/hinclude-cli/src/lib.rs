// crates/hinclude-cli/src/lib.rs
pub mod config;
pub mod options;
pub mod pipeline;

pub use config::{ConfigError, HincludeConfig};
pub use options::{Args, Options};
pub use pipeline::{run_pipeline, CliError};
