//! Diagnostic types for the etude_critique linter.
//!
//! Uses `CompactString` for efficient small string storage.

use compact_str::CompactString;
use serde::Serialize;

use crate::position::position;

/// Lint diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A lint diagnostic as collected by the passes.
///
/// Holds raw byte offsets into the source; line/column conversion happens
/// once at the `validate` boundary when diagnostics become [`Marker`]s.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// Rule that triggered this diagnostic
    pub rule_name: &'static str,
    /// Severity level
    pub severity: Severity,
    /// Primary message (CompactString for efficiency)
    pub message: CompactString,
    /// Start byte offset in source
    pub start: u32,
    /// End byte offset in source
    pub end: u32,
}

impl LintDiagnostic {
    /// Create a new error diagnostic
    #[inline]
    pub fn error(
        rule_name: &'static str,
        message: impl Into<CompactString>,
        start: u32,
        end: u32,
    ) -> Self {
        Self {
            rule_name,
            severity: Severity::Error,
            message: message.into(),
            start,
            end,
        }
    }

    /// Create a new warning diagnostic
    #[inline]
    pub fn warn(
        rule_name: &'static str,
        message: impl Into<CompactString>,
        start: u32,
        end: u32,
    ) -> Self {
        Self {
            rule_name,
            severity: Severity::Warning,
            message: message.into(),
            start,
            end,
        }
    }

    /// Resolve this diagnostic into a positioned marker against `source`.
    pub fn into_marker(self, source: &str) -> Marker {
        let start = position(source, self.start as usize);
        let end = position(source, self.end as usize);
        Marker {
            severity: self.severity,
            line: start.line,
            column: start.column,
            end_line: end.line,
            end_column: end.column,
            message: self.message,
            rule: self.rule_name,
        }
    }
}

/// A positioned annotation surfaced to the editor host.
///
/// Lines and columns are 1-indexed. Markers are derived and transient:
/// every validation run produces a fresh set that wholesale-replaces the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub severity: Severity,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub message: CompactString,
    pub rule: &'static str,
}

impl Marker {
    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Summary of lint results across files
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintSummary {
    pub error_count: usize,
    pub warning_count: usize,
    pub file_count: usize,
}

impl LintSummary {
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}
