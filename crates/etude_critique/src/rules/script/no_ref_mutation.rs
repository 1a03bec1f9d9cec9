//! script/no-ref-mutation
//!
//! Flag direct mutation through a `$refs` child handle.
//!
//! Writing into a child component through `this.$refs.child.someState = x`
//! bypasses the child's own data flow; emit an event or bind a prop
//! instead.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ScriptLintResult, ScriptRule, ScriptRuleMeta};
use crate::diagnostic::{LintDiagnostic, Severity};

static META: ScriptRuleMeta = ScriptRuleMeta {
    name: "script/no-ref-mutation",
    description: "Flag assignment through a `$refs` child handle",
    default_severity: Severity::Warning,
};

// A `$refs.<path> =` assignment; `=[^=]` keeps comparisons out.
static REF_MUTATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$refs\.[A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)+\s*=[^=]").unwrap()
});

/// Flag assignment through $refs
pub struct NoRefMutation;

impl ScriptRule for NoRefMutation {
    fn meta(&self) -> &'static ScriptRuleMeta {
        &META
    }

    fn check(&self, source: &str, offset: usize, result: &mut ScriptLintResult) {
        for m in REF_MUTATION_RE.find_iter(source) {
            result.add_diagnostic(LintDiagnostic::warn(
                META.name,
                "Direct mutation through a `$refs` handle; emit an event or bind a prop instead",
                (offset + m.start()) as u32,
                (offset + m.end()) as u32,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> ScriptLintResult {
        let mut result = ScriptLintResult::default();
        NoRefMutation.check(source, 0, &mut result);
        result
    }

    #[test]
    fn test_child_state_assignment_flagged() {
        let result = run("this.$refs.child.count = 5");
        assert_eq!(result.warning_count, 1);
    }

    #[test]
    fn test_deep_path_flagged() {
        let result = run("this.$refs.form.model.name = 'x'");
        assert_eq!(result.warning_count, 1);
    }

    #[test]
    fn test_comparison_not_flagged() {
        assert_eq!(run("if (this.$refs.child.count === 5) {}").warning_count, 0);
    }

    #[test]
    fn test_read_not_flagged() {
        assert_eq!(run("const n = this.$refs.child.count").warning_count, 0);
    }

    #[test]
    fn test_plain_ref_call_not_flagged() {
        assert_eq!(run("this.$refs.input.focus()").warning_count, 0);
    }
}
