//! # etude_critique
//!
//! Critique - The heuristic quality checker for Étude.
//! Linter for Vue.js single-file components.
//!
//! ## Name Origin
//!
//! A **critique** is the detailed review an atelier master gives a study
//! piece. `etude_critique` looks over a learner's component and points out
//! what needs work, without pretending to be a compiler: every check is a
//! deliberate, regex-level heuristic.
//!
//! ## Passes
//!
//! Validation runs three fixed passes and concatenates their markers:
//!
//! 1. **Tag balance** - stack matching of opening/closing tags over the
//!    raw text; mismatched closes are reported without consuming the open
//!    entry.
//! 2. **Directive patterns** - per-tag anti-pattern rules:
//!    - `template/require-v-for-key` - loops should bind a stable key
//!    - `template/no-v-else-with-v-if` - use `v-else-if` instead
//!    - `template/no-v-model-with-v-for` - scoping hazard
//!    - `template/no-v-if-with-v-for` - prefer a computed property
//! 3. **Script quality** - naive checks inside the first `<script>` block:
//!    - `script/no-console-log`
//!    - `script/no-var`
//!    - `script/no-ref-mutation`
//!    - `script/no-assignment-in-condition`
//!
//! ## Usage
//!
//! ```rust
//! use etude_critique::Linter;
//!
//! let linter = Linter::new();
//! let markers = linter.validate(r#"<div v-for="item in items">{{ item }}</div>"#);
//! assert!(!markers.is_empty());
//! ```

mod balance;
mod context;
mod diagnostic;
mod linter;
pub mod output;
mod position;
mod rule;
pub mod rules;
pub mod scan;
pub mod sfc;

pub use context::LintContext;
pub use diagnostic::{LintDiagnostic, LintSummary, Marker, Severity};
pub use linter::{LintResult, Linter};
pub use output::{format_results, format_summary, OutputFormat};
pub use position::{position, Position};
pub use rule::{RuleMeta, RuleRegistry, TemplateRule};

/// Validate a single-file component with the recommended rules.
///
/// This is a convenience function for simple use cases.
/// For more control, use `Linter::new()` directly.
pub fn validate(source: &str) -> Vec<Marker> {
    Linter::new().validate(source)
}
