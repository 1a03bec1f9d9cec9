//! Output formatters for lint results.

use serde::Serialize;

use crate::diagnostic::Severity;
use crate::linter::LintResult;

/// Output format for lint results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Line-oriented terminal output
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// Format lint results according to the specified format
pub fn format_results(results: &[LintResult], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_text(results),
        OutputFormat::Json => format_json(results),
    }
}

/// JSON output structure for a single file
#[derive(Debug, Serialize)]
pub struct JsonFileResult {
    pub file: String,
    pub messages: Vec<JsonMessage>,
    #[serde(rename = "errorCount")]
    pub error_count: usize,
    #[serde(rename = "warningCount")]
    pub warning_count: usize,
}

/// JSON output structure for a single message
#[derive(Debug, Serialize)]
pub struct JsonMessage {
    #[serde(rename = "ruleId")]
    pub rule_id: &'static str,
    pub severity: Severity,
    pub message: String,
    pub line: u32,
    pub column: u32,
    #[serde(rename = "endLine")]
    pub end_line: u32,
    #[serde(rename = "endColumn")]
    pub end_column: u32,
}

fn format_json(results: &[LintResult]) -> String {
    let json_results: Vec<JsonFileResult> = results
        .iter()
        .map(|r| JsonFileResult {
            file: r.filename.clone(),
            messages: r
                .markers
                .iter()
                .map(|m| JsonMessage {
                    rule_id: m.rule,
                    severity: m.severity,
                    message: m.message.to_string(),
                    line: m.line,
                    column: m.column,
                    end_line: m.end_line,
                    end_column: m.end_column,
                })
                .collect(),
            error_count: r.error_count,
            warning_count: r.warning_count,
        })
        .collect();

    serde_json::to_string_pretty(&json_results).unwrap_or_else(|_| "[]".to_string())
}

fn format_text(results: &[LintResult]) -> String {
    let mut output = String::new();

    for result in results {
        for marker in &result.markers {
            let severity = match marker.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            output.push_str(&format!(
                "{}:{}:{}: {} {} [{}]\n",
                result.filename, marker.line, marker.column, severity, marker.message, marker.rule,
            ));
        }
    }

    output
}

/// Format a summary line
pub fn format_summary(error_count: usize, warning_count: usize, file_count: usize) -> String {
    let mut parts = Vec::new();

    if error_count > 0 {
        parts.push(format!(
            "{} error{}",
            error_count,
            if error_count == 1 { "" } else { "s" }
        ));
    }

    if warning_count > 0 {
        parts.push(format!(
            "{} warning{}",
            warning_count,
            if warning_count == 1 { "" } else { "s" }
        ));
    }

    if parts.is_empty() {
        format!("No problems found in {} file(s)", file_count)
    } else {
        format!(
            "{} in {} file{}",
            parts.join(", "),
            file_count,
            if file_count == 1 { "" } else { "s" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;

    #[test]
    fn test_text_output_lines() {
        let linter = Linter::new();
        let result = linter.lint_file("<div>", "a.vue");
        let text = format_results(std::slice::from_ref(&result), OutputFormat::Text);
        assert!(text.starts_with("a.vue:1:1: error"));
        assert!(text.contains("[template/tag-balance]"));
    }

    #[test]
    fn test_json_output_shape() {
        let linter = Linter::new();
        let result = linter.lint_file("<div>", "a.vue");
        let json = format_results(std::slice::from_ref(&result), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["file"], "a.vue");
        assert_eq!(parsed[0]["errorCount"], 1);
        assert_eq!(parsed[0]["messages"][0]["severity"], "error");
        assert_eq!(parsed[0]["messages"][0]["line"], 1);
    }

    #[test]
    fn test_summary_wording() {
        assert_eq!(format_summary(0, 0, 2), "No problems found in 2 file(s)");
        assert_eq!(format_summary(1, 2, 1), "1 error, 2 warnings in 1 file");
    }
}
