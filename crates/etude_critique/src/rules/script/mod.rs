//! Script-quality rules.
//!
//! These rules check the JavaScript in the first `<script>` block of an
//! SFC. They are naive textual checks, run against the script substring
//! only, with match offsets translated back into whole-document positions
//! by the caller-supplied `offset`.

mod no_assignment_in_condition;
mod no_console_log;
mod no_ref_mutation;
mod no_var;

pub use no_assignment_in_condition::NoAssignmentInCondition;
pub use no_console_log::NoConsoleLog;
pub use no_ref_mutation::NoRefMutation;
pub use no_var::NoVar;

use crate::diagnostic::{LintDiagnostic, Severity};

/// Metadata for a script-level rule
pub struct ScriptRuleMeta {
    /// Rule name (e.g., "script/no-console-log")
    pub name: &'static str,
    /// Rule description
    pub description: &'static str,
    /// Severity the rule reports with
    pub default_severity: Severity,
}

/// Result of linting a script block
#[derive(Debug, Default)]
pub struct ScriptLintResult {
    pub diagnostics: Vec<LintDiagnostic>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl ScriptLintResult {
    pub fn add_diagnostic(&mut self, diagnostic: LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count > 0
    }
}

/// Trait for script-level lint rules
pub trait ScriptRule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static ScriptRuleMeta;

    /// Check the script content
    ///
    /// * `source` - The script block content
    /// * `offset` - The offset of the script block in the original file
    /// * `result` - Accumulator for diagnostics
    fn check(&self, source: &str, offset: usize, result: &mut ScriptLintResult);
}

/// Linter for script blocks
pub struct ScriptLinter {
    rules: Vec<Box<dyn ScriptRule>>,
}

impl ScriptLinter {
    /// Create a new script linter with no rules
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a script linter with the built-in rules, in their fixed order
    pub fn with_recommended() -> Self {
        Self {
            rules: vec![
                Box::new(NoConsoleLog),
                Box::new(NoVar),
                Box::new(NoRefMutation),
                Box::new(NoAssignmentInCondition),
            ],
        }
    }

    /// Add a rule to the linter
    pub fn add_rule(&mut self, rule: Box<dyn ScriptRule>) {
        self.rules.push(rule);
    }

    /// Lint a script block, translating offsets by `offset`
    pub fn lint(&self, source: &str, offset: usize) -> ScriptLintResult {
        let mut result = ScriptLintResult::default();
        for rule in &self.rules {
            rule.check(source, offset, &mut result);
        }
        result
    }
}

impl Default for ScriptLinter {
    fn default() -> Self {
        Self::with_recommended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_script_is_clean() {
        let linter = ScriptLinter::with_recommended();
        let result = linter.lint("", 0);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_rules_run_in_registration_order() {
        let linter = ScriptLinter::with_recommended();
        let result = linter.lint("var a = 1\nconsole.log(a)\n", 0);
        assert_eq!(result.warning_count, 2);
        // no-console-log is registered first, so it reports first even
        // though `var` appears earlier in the text.
        assert_eq!(result.diagnostics[0].rule_name, "script/no-console-log");
        assert_eq!(result.diagnostics[1].rule_name, "script/no-var");
    }

    #[test]
    fn test_offsets_are_translated() {
        let linter = ScriptLinter::with_recommended();
        let result = linter.lint("console.log(1)", 100);
        assert_eq!(result.diagnostics[0].start, 100);
    }
}
