//! Lint context for pass execution.

use compact_str::CompactString;

use crate::diagnostic::{LintDiagnostic, Severity};

/// Collects diagnostics while the passes run over one source document.
pub struct LintContext<'a> {
    /// Source code being linted
    pub source: &'a str,
    /// Current rule name (set before a rule's check methods run)
    pub current_rule: &'static str,
    diagnostics: Vec<LintDiagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl<'a> LintContext<'a> {
    const INITIAL_DIAGNOSTICS_CAPACITY: usize = 16;

    #[inline]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            current_rule: "",
            diagnostics: Vec::with_capacity(Self::INITIAL_DIAGNOSTICS_CAPACITY),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Report a lint diagnostic
    #[inline]
    pub fn report(&mut self, diagnostic: LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    /// Report an error for the current rule at a byte span
    #[inline]
    pub fn error(&mut self, message: impl Into<CompactString>, start: usize, end: usize) {
        self.report(LintDiagnostic::error(
            self.current_rule,
            message,
            start as u32,
            end as u32,
        ));
    }

    /// Report a warning for the current rule at a byte span
    #[inline]
    pub fn warn(&mut self, message: impl Into<CompactString>, start: usize, end: usize) {
        self.report(LintDiagnostic::warn(
            self.current_rule,
            message,
            start as u32,
            end as u32,
        ));
    }

    #[inline]
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    #[inline]
    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}
