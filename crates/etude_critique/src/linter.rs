//! Main linter entry point.

use crate::balance;
use crate::context::LintContext;
use crate::diagnostic::{LintSummary, Marker};
use crate::rule::RuleRegistry;
use crate::rules::script::ScriptLinter;
use crate::scan::open_tags;
use crate::sfc::script_section;

/// Lint result for a single file
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Filename that was linted
    pub filename: String,
    /// Positioned markers, in pass order
    pub markers: Vec<Marker>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
}

impl LintResult {
    /// Check if there are any errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if there are any markers
    #[inline]
    pub fn has_markers(&self) -> bool {
        !self.markers.is_empty()
    }
}

/// The validator: three fixed passes over one source document.
///
/// 1. Tag balance over the raw text.
/// 2. Directive patterns over the raw tag list.
/// 3. Script quality over the first `<script>` block, if any.
///
/// All passes are pure and total; no input can make them fail, only emit
/// zero or many markers. Each run's output wholesale-replaces the last.
pub struct Linter {
    registry: RuleRegistry,
    script: ScriptLinter,
}

impl Linter {
    /// Create a linter with the recommended rules
    #[inline]
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_recommended(),
            script: ScriptLinter::with_recommended(),
        }
    }

    /// Create a linter with a custom directive-rule registry.
    ///
    /// The script pass is left empty; rule isolation is the point here.
    #[inline]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            script: ScriptLinter::new(),
        }
    }

    /// Create a linter with a custom script linter and no directive rules.
    #[inline]
    pub fn with_script_linter(script: ScriptLinter) -> Self {
        Self {
            registry: RuleRegistry::new(),
            script,
        }
    }

    /// Validate one source document, producing a fresh marker list.
    ///
    /// Pass order is fixed (balance, directives, script); within a pass,
    /// markers come in match order.
    pub fn validate(&self, source: &str) -> Vec<Marker> {
        let mut ctx = LintContext::new(source);

        balance::check(&mut ctx);

        let tags = open_tags(source);
        for rule in self.registry.rules() {
            ctx.current_rule = rule.meta().name;
            for tag in &tags {
                rule.check_tag(&mut ctx, tag);
            }
        }

        let mut diagnostics = ctx.into_diagnostics();

        if let Some(script) = script_section(source) {
            let script_result = self.script.lint(script.content, script.offset);
            diagnostics.extend(script_result.diagnostics);
        }

        diagnostics
            .into_iter()
            .map(|d| d.into_marker(source))
            .collect()
    }

    /// Validate and wrap with counts for one named file.
    pub fn lint_file(&self, source: &str, filename: &str) -> LintResult {
        let markers = self.validate(source);
        let error_count = markers.iter().filter(|m| m.is_error()).count();
        let warning_count = markers.len() - error_count;
        LintResult {
            filename: filename.to_string(),
            markers,
            error_count,
            warning_count,
        }
    }

    /// Lint multiple files and aggregate results
    pub fn lint_files(&self, files: &[(String, String)]) -> (Vec<LintResult>, LintSummary) {
        let mut results = Vec::with_capacity(files.len());
        let mut summary = LintSummary::default();

        for (filename, source) in files {
            let result = self.lint_file(source, filename);
            summary.error_count += result.error_count;
            summary.warning_count += result.warning_count;
            results.push(result);
        }

        summary.file_count = files.len();
        (results, summary)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;

    #[test]
    fn test_empty_source_is_clean() {
        let linter = Linter::new();
        assert!(linter.validate("").is_empty());
    }

    #[test]
    fn test_clean_component_is_clean() {
        let linter = Linter::new();
        let source = "<template>\n  <ul>\n    <li v-for=\"item in items\" :key=\"item.id\">{{ item }}</li>\n  </ul>\n</template>\n\n<script>\nexport default {\n  data() {\n    return { items: [] }\n  }\n}\n</script>\n";
        assert!(linter.validate(source).is_empty());
    }

    #[test]
    fn test_pass_order_balance_then_directives_then_script() {
        let linter = Linter::new();
        // One finding per pass: a stray </span>, a key-less v-for, a var.
        let source = "<template>\n<p>a</p></span>\n<li v-for=\"i in xs\">{{ i }}</li>\n</template>\n\n<script>\nvar a = 1\n</script>\n";
        let markers = linter.validate(source);
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].rule, "template/tag-balance");
        assert_eq!(markers[1].rule, "template/require-v-for-key");
        assert_eq!(markers[2].rule, "script/no-var");
    }

    #[test]
    fn test_no_script_block_no_script_findings() {
        let linter = Linter::new();
        let markers = linter.validate("<template><div>var x = console.log</div></template>");
        assert!(markers.iter().all(|m| !m.rule.starts_with("script/")));
    }

    #[test]
    fn test_script_positions_map_into_document() {
        let linter = Linter::new();
        let source = "<template>\n  <p>ok</p>\n</template>\n<script>\nconsole.log(1)\n</script>\n";
        let markers = linter.validate(source);
        assert_eq!(markers.len(), 1);
        // console.log sits on line 5 of the full document, column 1.
        assert_eq!(markers[0].line, 5);
        assert_eq!(markers[0].column, 1);
        assert_eq!(markers[0].severity, Severity::Warning);
    }

    #[test]
    fn test_each_run_is_fresh() {
        let linter = Linter::new();
        let dirty = "<div>";
        let clean = "<div></div>";
        assert_eq!(linter.validate(dirty).len(), 1);
        assert!(linter.validate(clean).is_empty());
        assert_eq!(linter.validate(dirty).len(), 1);
    }

    #[test]
    fn test_lint_files_batch() {
        let linter = Linter::new();
        let files = vec![
            ("a.vue".to_string(), "<div></div>".to_string()),
            ("b.vue".to_string(), "<div>".to_string()),
        ];
        let (results, summary) = linter.lint_files(&files);
        assert_eq!(results.len(), 2);
        assert_eq!(summary.file_count, 2);
        assert_eq!(summary.error_count, 1);
        assert!(!results[0].has_errors());
        assert!(results[1].has_errors());
    }
}
