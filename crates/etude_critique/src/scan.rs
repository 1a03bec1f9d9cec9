//! Heuristic tag scanning shared by the template passes.
//!
//! These scanners operate on the raw source text, not an AST. Tags inside
//! string-valued attributes or inside `<script>`/`<style>` bodies are not
//! treated specially, so a stray `<` in a JavaScript string can produce a
//! false positive. That is accepted behavior.

use once_cell::sync::Lazy;
use regex::Regex;

static SELF_CLOSING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([A-Za-z][A-Za-z0-9-]*)([^>]*)/>").unwrap());
static OPEN_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([A-Za-z][A-Za-z0-9-]*)([^>]*)>").unwrap());
static CLOSE_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</([A-Za-z][A-Za-z0-9-]*)\s*>").unwrap());

/// An opening (or self-closing) tag found in the raw source.
#[derive(Debug, Clone, Copy)]
pub struct Tag<'a> {
    /// Tag name, without brackets
    pub name: &'a str,
    /// Byte offset of the `<`
    pub offset: usize,
    /// Length of the full tag text
    pub len: usize,
    /// Raw attribute text between the name and the closing `>`
    pub body: &'a str,
    /// Whether the tag closed itself (`<img />`)
    pub self_closing: bool,
}

impl Tag<'_> {
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Whether the tag carries an attribute with exactly this name.
    pub fn has_attr(&self, name: &str) -> bool {
        attr_names(self.body).any(|a| a == name)
    }

    /// Whether the tag carries an attribute whose name starts with `prefix`.
    pub fn has_attr_with_prefix(&self, prefix: &str) -> bool {
        attr_names(self.body).any(|a| a.starts_with(prefix))
    }
}

/// A closing tag found in the raw source.
#[derive(Debug, Clone, Copy)]
pub struct CloseTag<'a> {
    pub name: &'a str,
    pub offset: usize,
    pub len: usize,
}

impl CloseTag<'_> {
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Scan all opening tags in document order.
///
/// Self-closing tags are scanned first so their offsets can be marked; the
/// general open-tag pattern also matches them, and the flag keeps the two
/// populations apart.
pub fn open_tags(source: &str) -> Vec<Tag<'_>> {
    let self_closing: Vec<usize> = SELF_CLOSING_RE
        .find_iter(source)
        .map(|m| m.start())
        .collect();

    OPEN_TAG_RE
        .captures_iter(source)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            let name = caps.get(1)?;
            let body = caps.get(2)?;
            let body_text = body.as_str();
            Some(Tag {
                name: name.as_str(),
                offset: m.start(),
                len: m.len(),
                body: body_text.strip_suffix('/').unwrap_or(body_text),
                self_closing: self_closing.binary_search(&m.start()).is_ok(),
            })
        })
        .collect()
}

/// Scan all closing tags in document order.
pub fn close_tags(source: &str) -> Vec<CloseTag<'_>> {
    CLOSE_TAG_RE
        .captures_iter(source)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            Some(CloseTag {
                name: caps.get(1)?.as_str(),
                offset: m.start(),
                len: m.len(),
            })
        })
        .collect()
}

/// Iterate the attribute names in a raw tag body.
///
/// Quoted values are skipped so that directive expressions never leak into
/// the names (`v-if="a < b"` yields just `v-if`).
pub fn attr_names(body: &str) -> impl Iterator<Item = &str> {
    AttrNames { rest: body }
}

struct AttrNames<'a> {
    rest: &'a str,
}

impl<'a> Iterator for AttrNames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.rest.as_bytes();
        let mut i = 0;

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() {
            self.rest = "";
            return None;
        }

        let name_start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'=' {
            i += 1;
        }
        let name = &self.rest[name_start..i];

        // Skip an attribute value, quoted or bare.
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let quote = bytes[i];
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                i = (i + 1).min(bytes.len());
            } else {
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
            }
        }

        self.rest = &self.rest[i..];
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}
