// src/directive.rs
use lazy_static::lazy_static;
use regex::bytes::Regex;
use std::borrow::Cow;

lazy_static! {
    // A directive must occupy the whole line:
    //   #include "name"
    //   #  include <name>
    // Lines are raw bytes, so the name classes match any byte.
    static ref LOCAL_RE: Regex = Regex::new(r#"^\s*#\s*include\s*"((?-u:[^"])*)"\s*$"#)
        .expect("Invalid local include pattern");
    static ref GLOBAL_RE: Regex = Regex::new(r"^\s*#\s*include\s*<((?-u:[^>])*)>\s*$")
        .expect("Invalid global include pattern");
}

/// A single source line, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `#include "name"`: searched next to the including file first.
    Local(Cow<'a, str>),
    /// `#include <name>`: searched in the search path only.
    Global(Cow<'a, str>),
    PlainText(&'a [u8]),
}

impl<'a> Directive<'a> {
    /// Classify one line, without its terminator. Plain text keeps its bytes
    /// untouched; names that are not UTF-8 are decoded lossily.
    pub fn classify(line: &'a [u8]) -> Self {
        if let Some(caps) = LOCAL_RE.captures(line) {
            return Directive::Local(capture_name(caps.get(1).map_or(&[][..], |m| m.as_bytes())));
        }
        if let Some(caps) = GLOBAL_RE.captures(line) {
            return Directive::Global(capture_name(caps.get(1).map_or(&[][..], |m| m.as_bytes())));
        }
        Directive::PlainText(line)
    }

    /// The raw name between the delimiters, `None` for plain text.
    pub fn include_name(&self) -> Option<&str> {
        match self {
            Directive::Local(name) | Directive::Global(name) => Some(name.as_ref()),
            Directive::PlainText(_) => None,
        }
    }
}

fn capture_name(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
