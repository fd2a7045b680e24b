// src/resolver.rs
use std::path::{Path, PathBuf};

use crate::directive::Directive;
use crate::search_path::SearchPath;

/// Map a directive to the file it names.
///
/// `Local` tries `including_dir/name` before the search path, `Global`
/// consults the search path only. No side effects: reporting a miss is up
/// to the caller, which knows the line it came from.
pub fn resolve(
    directive: &Directive<'_>,
    including_dir: &Path,
    search_path: &SearchPath,
) -> Option<PathBuf> {
    match directive {
        Directive::Local(name) => {
            let candidate = including_dir.join(&**name);
            if candidate.exists() {
                Some(candidate)
            } else {
                search_path.find(name)
            }
        }
        Directive::Global(name) => search_path.find(name),
        Directive::PlainText(_) => None,
    }
}
