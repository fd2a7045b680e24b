// src/expander.rs
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::directive::Directive;
use crate::resolver::resolve;
use crate::search_path::SearchPath;
use crate::{IncludeError, SourceLocation};

/// Depth-first include expansion into a shared output sink.
///
/// Every plain line is written as soon as it is read, so whatever precedes a
/// failing directive has already reached `out` when the error comes back.
pub struct Expander<'a, W: Write> {
    search_path: &'a SearchPath,
    out: &'a mut W,
    max_depth: usize,
    /// Canonical paths of the files currently being expanded, outermost first.
    open_files: Vec<PathBuf>,
}

impl<'a, W: Write> Expander<'a, W> {
    pub fn new(search_path: &'a SearchPath, out: &'a mut W, max_depth: usize) -> Self {
        Self {
            search_path,
            out,
            max_depth,
            open_files: Vec::new(),
        }
    }

    /// Expand a top-level file the caller has already opened.
    pub fn expand_root(&mut self, file: &Path, input: File) -> Result<(), IncludeError> {
        self.enter(file, input)
    }

    /// Open and expand `file`, resolved from the directive at `referrer`.
    pub fn expand_file(
        &mut self,
        file: &Path,
        referrer: &SourceLocation,
    ) -> Result<(), IncludeError> {
        let input = open_source(file).map_err(|source| {
            warn!("{}: cannot open {}: {}", referrer, file.display(), source);
            IncludeError::UnreadableInclude {
                name: basename(file),
                location: referrer.clone(),
                source,
            }
        })?;
        self.enter(file, input)
    }

    fn enter(&mut self, file: &Path, input: File) -> Result<(), IncludeError> {
        self.open_files.push(canonical(file));
        let result = self.expand_lines(file, BufReader::new(input));
        self.open_files.pop();
        result
    }

    fn expand_lines<R: BufRead>(
        &mut self,
        file: &Path,
        mut reader: R,
    ) -> Result<(), IncludeError> {
        debug!("expanding {}", file.display());
        let including_dir = file.parent().unwrap_or_else(|| Path::new(""));
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| IncludeError::Read {
                    path: file.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;
            let line = strip_terminator(&buf);

            let directive = Directive::classify(line);
            let Some(name) = directive.include_name() else {
                self.write_line(line)?;
                continue;
            };

            let location = SourceLocation::new(file, line_no);
            let resolved = resolve(&directive, including_dir, self.search_path).ok_or_else(|| {
                IncludeError::UnresolvedInclude {
                    name: name.to_string(),
                    location: location.clone(),
                }
            })?;
            self.check_nesting(name, &resolved, &location)?;

            debug!("{}: {} -> {}", location, name, resolved.display());
            self.expand_file(&resolved, &location)?;
        }

        debug!("finished {}", file.display());
        Ok(())
    }

    fn write_line(&mut self, line: &[u8]) -> Result<(), IncludeError> {
        self.out
            .write_all(line)
            .and_then(|()| self.out.write_all(b"\n"))
            .map_err(|source| IncludeError::Output { source })
    }

    fn check_nesting(
        &self,
        name: &str,
        resolved: &Path,
        location: &SourceLocation,
    ) -> Result<(), IncludeError> {
        if self.open_files.len() >= self.max_depth {
            return Err(IncludeError::DepthLimit {
                name: name.to_string(),
                location: location.clone(),
                limit: self.max_depth,
            });
        }
        if self.open_files.contains(&canonical(resolved)) {
            return Err(IncludeError::CyclicInclude {
                name: name.to_string(),
                location: location.clone(),
            });
        }
        Ok(())
    }
}

/// Open a file for line reading. Directories open fine on some platforms
/// but cannot be read, so they are rejected here.
pub(crate) fn open_source(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::IsADirectory,
            "is a directory",
        ));
    }
    Ok(file)
}

/// Drop a trailing `\n` or `\r\n`. Everything else is kept byte for byte.
fn strip_terminator(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => line,
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
