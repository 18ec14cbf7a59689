//! Per-request dashboard entries and filename → title derivation.
//!
//! Entries are built fresh for every page render and dropped afterwards.
//! Both shapes serialise straight into the page template context.

use serde::Serialize;

/// A pre-rendered chart fragment, embedded verbatim into the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEntry {
    /// Display title derived from the fragment's filename
    pub name: String,
    /// Raw HTML of the fragment
    pub content: String,
}

impl GraphEntry {
    pub fn new(file: &str, content: String) -> Self {
        Self { name: display_title(file), content }
    }
}

/// A static image referenced by filename; its bytes are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    pub file: String,
    pub name: String,
}

impl ImageEntry {
    pub fn new(file: &str) -> Self {
        Self { file: file.to_string(), name: display_title(file) }
    }
}

/// Extensions the dashboard serves; only these are dropped from titles.
const KNOWN_EXTENSIONS: [&str; 2] = [".html", ".jpg"];

/// Turn a filename into a human-readable title.
///
/// Drops a trailing `.html`/`.jpg` (any case), maps `_` to a space and
/// title-cases the rest: a cased letter is title-cased when it follows an
/// uncased character, lower-cased otherwise.
pub fn display_title(filename: &str) -> String {
    let stem = strip_known_extension(filename);

    let mut title = String::with_capacity(stem.len());
    let mut prev_is_cased = false;
    for ch in stem.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        let is_cased = ch.is_lowercase() || ch.is_uppercase();
        if !is_cased {
            title.push(ch);
        } else if prev_is_cased {
            title.extend(ch.to_lowercase());
        } else {
            let mut upper = ch.to_uppercase();
            title.extend(upper.next());
            title.extend(upper.flat_map(char::to_lowercase));
        }
        prev_is_cased = is_cased;
    }
    title
}

fn strip_known_extension(filename: &str) -> &str {
    for ext in KNOWN_EXTENSIONS {
        let Some(split) = filename.len().checked_sub(ext.len()) else { continue };
        match filename.get(split..) {
            Some(tail) if tail.eq_ignore_ascii_case(ext) => return &filename[..split],
            _ => {}
        }
    }
    filename
}
