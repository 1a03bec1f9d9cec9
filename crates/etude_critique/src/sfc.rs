//! Single-file component sectioning.
//!
//! Splits an SFC source string into its `template`, `script` and `style`
//! substrings by regex extraction. This is deliberately heuristic: no
//! schema is enforced and any section may be absent.

use once_cell::sync::Lazy;
use regex::Regex;

static TEMPLATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<template[^>]*>(.*?)</template>").unwrap());
static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<script[^>]*>(.*?)</script>").unwrap());
static STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<style[^>]*>(.*?)</style>").unwrap());

/// A section of an SFC: its content and the byte offset of that content
/// in the full source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub content: &'a str,
    pub offset: usize,
}

/// The informally extracted sections of a single-file component.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sections<'a> {
    pub template: Option<Section<'a>>,
    pub script: Option<Section<'a>>,
    pub style: Option<Section<'a>>,
}

fn first_match<'a>(re: &Regex, source: &'a str) -> Option<Section<'a>> {
    re.captures(source).and_then(|caps| {
        caps.get(1).map(|m| Section {
            content: m.as_str(),
            offset: m.start(),
        })
    })
}

/// Extract the first `template`, `script` and `style` blocks of `source`.
pub fn sections(source: &str) -> Sections<'_> {
    Sections {
        template: first_match(&TEMPLATE_RE, source),
        script: first_match(&SCRIPT_RE, source),
        style: first_match(&STYLE_RE, source),
    }
}

/// Extract only the first `<script>` block.
#[inline]
pub fn script_section(source: &str) -> Option<Section<'_>> {
    first_match(&SCRIPT_RE, source)
}
