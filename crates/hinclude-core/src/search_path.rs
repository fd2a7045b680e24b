// src/search_path.rs
use std::path::PathBuf;

/// Returns the default path separator based on the platform
pub fn default_pathsep() -> &'static str {
    if cfg!(windows) { ";" } else { ":" }
}

/// Ordered list of include directories. Fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a separator-joined list, e.g. `inc1:inc2`. Empty entries are dropped.
    pub fn parse(list: &str, pathsep: &str) -> Self {
        Self::new(list.split(pathsep).filter(|s| !s.is_empty()))
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// First `dir/name` that exists, in search order.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        self.dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.exists())
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for SearchPath {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}
