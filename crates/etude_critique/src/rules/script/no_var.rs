//! script/no-var
//!
//! Flag `var` declarations; recommend block-scoped alternatives.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ScriptLintResult, ScriptRule, ScriptRuleMeta};
use crate::diagnostic::{LintDiagnostic, Severity};

static META: ScriptRuleMeta = ScriptRuleMeta {
    name: "script/no-var",
    description: "Flag `var` declarations",
    default_severity: Severity::Warning,
};

static VAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bvar\s+[A-Za-z_$]").unwrap());

/// Flag var declarations
pub struct NoVar;

impl ScriptRule for NoVar {
    fn meta(&self) -> &'static ScriptRuleMeta {
        &META
    }

    fn check(&self, source: &str, offset: usize, result: &mut ScriptLintResult) {
        for m in VAR_RE.find_iter(source) {
            // Point at the keyword only.
            let start = offset + m.start();
            result.add_diagnostic(LintDiagnostic::warn(
                META.name,
                "`var` is function-scoped; prefer `let` or `const`",
                start as u32,
                (start + 3) as u32,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> ScriptLintResult {
        let mut result = ScriptLintResult::default();
        NoVar.check(source, 0, &mut result);
        result
    }

    #[test]
    fn test_declaration_flagged() {
        let result = run("var count = 0");
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.diagnostics[0].start, 0);
        assert_eq!(result.diagnostics[0].end, 3);
    }

    #[test]
    fn test_word_boundary_respected() {
        assert_eq!(run("const variant = 1").warning_count, 0);
        assert_eq!(run("toolbar.show()").warning_count, 0);
    }

    #[test]
    fn test_let_and_const_are_fine() {
        assert_eq!(run("let a = 1\nconst b = 2").warning_count, 0);
    }

    #[test]
    fn test_multiple_declarations_each_flagged() {
        assert_eq!(run("var a = 1\nvar b = 2").warning_count, 2);
    }
}
