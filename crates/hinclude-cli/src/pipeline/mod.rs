// crates/hinclude-cli/src/pipeline/mod.rs
use hinclude_core::{IncludeError, Preprocessor};
use log::{info, warn};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

use crate::config::ConfigError;
use crate::options::Options;


#[derive(Error, Debug)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Expansion diagnostics, printed verbatim.
    #[error(transparent)]
    Include(#[from] IncludeError),
}

pub fn is_stdio_path(path: &Path) -> bool {
    path.to_str() == Some("-")
}

pub fn run_pipeline(options: &Options) -> Result<(), CliError> {
    let preprocessor =
        Preprocessor::with_config(options.search_path.clone(), options.expand.clone());
    info!(
        "expanding {} with search path {:?}, depth limit {}",
        options.input.display(),
        preprocessor.search_path().dirs(),
        preprocessor.config().max_depth
    );

    if is_stdio_path(&options.output) {
        if preprocessor.config().staged_output {
            warn!("staged output has no effect when writing to standard output");
        }
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        preprocessor.expand_to(&options.input, &mut handle)?;
        handle
            .flush()
            .map_err(|source| IncludeError::Output { source })?;
    } else {
        preprocessor.process(&options.input, &options.output)?;
    }
    Ok(())
}
