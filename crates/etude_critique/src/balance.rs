//! Tag-balance pass.
//!
//! Matches opening and closing tags over the raw source text with a stack.
//! A closing tag that does not match the stack top is reported and does
//! NOT consume the open entry; every entry still open at end of input is
//! reported as unclosed. With badly mis-nested input the non-consuming
//! mismatch can cascade into further reports; that mirrors the source
//! system and is kept as-is.

use crate::context::LintContext;
use crate::scan::{close_tags, open_tags};

pub const RULE_NAME: &str = "template/tag-balance";

/// An open tag pending a matching close.
#[derive(Debug, Clone, Copy)]
struct OpenEntry<'a> {
    name: &'a str,
    offset: usize,
    len: usize,
}

/// Run the tag-balance pass over `source`, reporting through `ctx`.
pub fn check(ctx: &mut LintContext<'_>) {
    ctx.current_rule = RULE_NAME;

    let opens = open_tags(ctx.source);
    let closes = close_tags(ctx.source);

    let mut stack: Vec<OpenEntry<'_>> = Vec::new();
    let mut open_iter = opens
        .iter()
        .filter(|t| !t.self_closing)
        .copied()
        .peekable();
    let mut close_iter = closes.iter().copied().peekable();

    loop {
        // Next event in document order, opens before closes on a tie
        // (a tie cannot happen for well-formed tags, but keep it total).
        let take_open = match (open_iter.peek(), close_iter.peek()) {
            (Some(open), Some(close)) => open.offset < close.offset,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        if take_open {
            if let Some(tag) = open_iter.next() {
                stack.push(OpenEntry {
                    name: tag.name,
                    offset: tag.offset,
                    len: tag.len,
                });
            }
        } else if let Some(close) = close_iter.next() {
            match stack.last() {
                Some(top) if top.name == close.name => {
                    stack.pop();
                }
                _ => {
                    ctx.error(
                        format!(
                            "Closing tag </{}> has no matching opening tag",
                            close.name
                        ),
                        close.offset,
                        close.end(),
                    );
                }
            }
        } else {
            break;
        }
    }

    for entry in stack {
        ctx.error(
            format!("Tag <{}> is never closed", entry.name),
            entry.offset,
            entry.offset + entry.len,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;

    fn run(source: &str) -> Vec<(String, usize)> {
        let mut ctx = LintContext::new(source);
        check(&mut ctx);
        ctx.into_diagnostics()
            .into_iter()
            .map(|d| {
                assert_eq!(d.severity, Severity::Error);
                (d.message.to_string(), d.start as usize)
            })
            .collect()
    }

    #[test]
    fn test_well_formed_is_clean() {
        assert!(run("<div><span>hi</span></div>").is_empty());
        assert!(run("<div></div><span></span>").is_empty());
        assert!(run("<ul><li>a</li><li>b</li></ul>").is_empty());
    }

    #[test]
    fn test_empty_source_is_clean() {
        assert!(run("").is_empty());
        assert!(run("no tags at all").is_empty());
    }

    #[test]
    fn test_self_closing_never_on_stack() {
        assert!(run("<div><img /><br/></div>").is_empty());
    }

    #[test]
    fn test_unclosed_tag_reported() {
        let diags = run("<div>");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].0, "Tag <div> is never closed");
        assert_eq!(diags[0].1, 0);
    }

    #[test]
    fn test_stray_close_reported() {
        let diags = run("</div>");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].0, "Closing tag </div> has no matching opening tag");
    }

    #[test]
    fn test_mismatched_close_does_not_pop() {
        // </div> mismatches the <span> on top and consumes nothing, so the
        // pass then cascades: both <div> and <span> surface as unclosed.
        let source = "<div><span></div>";
        let diags = run(source);

        let mismatches: Vec<_> = diags
            .iter()
            .filter(|(m, _)| m.contains("no matching opening tag"))
            .collect();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].0, "Closing tag </div> has no matching opening tag");
        assert_eq!(mismatches[0].1, source.find("</div>").unwrap());

        assert!(diags.iter().any(|(m, _)| m == "Tag <span> is never closed"));
        assert!(diags.iter().any(|(m, _)| m == "Tag <div> is never closed"));
        assert_eq!(diags.len(), 3);
    }

    #[test]
    fn test_mismatch_cascades_to_later_closes() {
        // The un-popped <span> keeps mismatching subsequent closes.
        let diags = run("<div><span></div></div>");
        let mismatches = diags
            .iter()
            .filter(|(m, _)| m.contains("no matching opening tag"))
            .count();
        assert_eq!(mismatches, 2);
    }
}
