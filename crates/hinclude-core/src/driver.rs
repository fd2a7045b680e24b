// src/driver.rs
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::expander::{open_source, Expander};
use crate::search_path::SearchPath;
use crate::IncludeError;

#[derive(Debug, Clone)]
pub struct ExpandConfig {
    /// Maximum include nesting, counting the top-level file.
    pub max_depth: usize,
    /// Write to a temporary file and move it over the output only on success.
    pub staged_output: bool,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        ExpandConfig {
            max_depth: 200,
            staged_output: false,
        }
    }
}

/// High-level API: open input/output, expand, report.
pub struct Preprocessor {
    search_path: SearchPath,
    config: ExpandConfig,
}

impl Preprocessor {
    pub fn new(search_path: SearchPath) -> Self {
        Self::with_config(search_path, ExpandConfig::default())
    }

    pub fn with_config(search_path: SearchPath, config: ExpandConfig) -> Self {
        Self {
            search_path,
            config,
        }
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    pub fn config(&self) -> &ExpandConfig {
        &self.config
    }

    /// Expand `input` into an arbitrary writer.
    pub fn expand_to<W: Write>(&self, input: &Path, out: &mut W) -> Result<(), IncludeError> {
        let source = open_input(input)?;
        self.expand_opened(input, source, out)
    }

    /// Expand `input` into a string.
    pub fn expand_to_string(&self, input: &Path) -> Result<String, IncludeError> {
        let mut buf = Vec::new();
        self.expand_to(input, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Expand `input` into the file at `output`, truncating it.
    ///
    /// Unless `staged_output` is set, a failure leaves `output` holding
    /// everything expanded before the failing directive.
    pub fn process(&self, input: &Path, output: &Path) -> Result<(), IncludeError> {
        let source = open_input(input)?;
        let result = if self.config.staged_output {
            self.process_staged(input, source, output)
        } else {
            self.process_direct(input, source, output)
        };
        result?;
        info!("expanded {} into {}", input.display(), output.display());
        Ok(())
    }

    fn process_direct(&self, input: &Path, source: File, output: &Path) -> Result<(), IncludeError> {
        let file = File::create(output).map_err(|e| unwritable(output, e))?;
        let mut writer = BufWriter::new(file);
        let result = self.expand_opened(input, source, &mut writer);
        // flush the partial splice too
        let flushed = writer
            .flush()
            .map_err(|source| IncludeError::Output { source });
        result.and(flushed)
    }

    fn process_staged(&self, input: &Path, source: File, output: &Path) -> Result<(), IncludeError> {
        let dir = match output.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let staging = NamedTempFile::new_in(dir).map_err(|e| unwritable(output, e))?;
        debug!("staging {} at {}", output.display(), staging.path().display());

        let mut writer = BufWriter::new(staging);
        self.expand_opened(input, source, &mut writer)?;
        let staging = writer
            .into_inner()
            .map_err(|e| IncludeError::Output { source: e.into_error() })?;
        staging
            .persist(output)
            .map_err(|e| unwritable(output, e.error))?;
        Ok(())
    }

    fn expand_opened<W: Write>(
        &self,
        input: &Path,
        source: File,
        out: &mut W,
    ) -> Result<(), IncludeError> {
        let mut expander = Expander::new(&self.search_path, out, self.config.max_depth);
        expander.expand_root(input, source)
    }
}

/// Flatten `input` into `output`, searching `include_dirs` in order.
///
/// Prints the diagnostic of a failed run to stdout and returns `false`.
pub fn preprocess<P: AsRef<Path>>(input: &Path, output: &Path, include_dirs: &[P]) -> bool {
    let search_path: SearchPath = include_dirs
        .iter()
        .map(|d| d.as_ref().to_path_buf())
        .collect();
    match Preprocessor::new(search_path).process(input, output) {
        Ok(()) => true,
        Err(e) => {
            println!("{}", e);
            false
        }
    }
}

fn open_input(path: &Path) -> Result<File, IncludeError> {
    open_source(path).map_err(|source| IncludeError::UnreadableInput {
        path: path.to_path_buf(),
        source,
    })
}

fn unwritable(path: &Path, source: std::io::Error) -> IncludeError {
    IncludeError::UnwritableOutput {
        path: PathBuf::from(path),
        source,
    }
}
