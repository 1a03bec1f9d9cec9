//! Rule trait and registry for the directive-pattern pass.

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::scan::Tag;

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "template/require-v-for-key")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Severity the rule reports with
    pub default_severity: Severity,
}

/// A directive-pattern rule.
///
/// Rules are independent of each other; each is run over every tag of the
/// document and may fire any number of times.
pub trait TemplateRule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// Inspect one tag and report through the context
    fn check_tag(&self, ctx: &mut LintContext<'_>, tag: &Tag<'_>);
}

/// Registry holding the enabled directive rules, in execution order.
pub struct RuleRegistry {
    rules: Vec<Box<dyn TemplateRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn TemplateRule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn TemplateRule>] {
        &self.rules
    }

    /// Create registry with the built-in rules, in their fixed order.
    pub fn with_recommended() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::rules::template::RequireVForKey));
        registry.register(Box::new(crate::rules::template::NoVElseWithVIf));
        registry.register(Box::new(crate::rules::template::NoVModelWithVFor));
        registry.register(Box::new(crate::rules::template::NoVIfWithVFor));
        registry
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_recommended()
    }
}
