//! script/no-console-log
//!
//! Flag `console.log` calls left in component code.

use memchr::memmem;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{ScriptLintResult, ScriptRule, ScriptRuleMeta};
use crate::diagnostic::{LintDiagnostic, Severity};

static META: ScriptRuleMeta = ScriptRuleMeta {
    name: "script/no-console-log",
    description: "Flag `console.log` calls in component code",
    default_severity: Severity::Warning,
};

static CONSOLE_LOG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"console\.log\s*\(").unwrap());

/// Flag console.log calls
pub struct NoConsoleLog;

impl ScriptRule for NoConsoleLog {
    fn meta(&self) -> &'static ScriptRuleMeta {
        &META
    }

    fn check(&self, source: &str, offset: usize, result: &mut ScriptLintResult) {
        // Early bailout for the common clean case.
        if memmem::find(source.as_bytes(), b"console.log").is_none() {
            return;
        }

        for m in CONSOLE_LOG_RE.find_iter(source) {
            result.add_diagnostic(LintDiagnostic::warn(
                META.name,
                "`console.log` left in component code; remove it or route through a debug helper",
                (offset + m.start()) as u32,
                (offset + m.end()) as u32,
            ));
        }
    }
}
