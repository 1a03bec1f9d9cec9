//! script/no-assignment-in-condition
//!
//! Flag a single `=` inside an `if (...)` condition as a probable intended
//! equality comparison.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ScriptLintResult, ScriptRule, ScriptRuleMeta};
use crate::diagnostic::{LintDiagnostic, Severity};

static META: ScriptRuleMeta = ScriptRuleMeta {
    name: "script/no-assignment-in-condition",
    description: "Flag `=` inside a conditional expression",
    default_severity: Severity::Warning,
};

static IF_CONDITION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"if\s*\(([^)]*)\)").unwrap());

/// Whether `cond` contains a bare assignment `=` (not part of a
/// comparison, negation, or arrow).
fn has_bare_assignment(cond: &str) -> bool {
    let bytes = cond.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'=' {
            continue;
        }
        let prev = if i > 0 { bytes[i - 1] } else { 0 };
        let next = bytes.get(i + 1).copied().unwrap_or(0);
        if matches!(prev, b'=' | b'!' | b'<' | b'>') {
            continue;
        }
        if matches!(next, b'=' | b'>') {
            continue;
        }
        return true;
    }
    false
}

/// Flag probable assignment-for-comparison in conditions
pub struct NoAssignmentInCondition;

impl ScriptRule for NoAssignmentInCondition {
    fn meta(&self) -> &'static ScriptRuleMeta {
        &META
    }

    fn check(&self, source: &str, offset: usize, result: &mut ScriptLintResult) {
        for caps in IF_CONDITION_RE.captures_iter(source) {
            let (Some(whole), Some(cond)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if has_bare_assignment(cond.as_str()) {
                result.add_diagnostic(LintDiagnostic::warn(
                    META.name,
                    "Assignment inside a condition; did you mean `===`?",
                    (offset + whole.start()) as u32,
                    (offset + whole.end()) as u32,
                ));
            }
        }
    }
}
