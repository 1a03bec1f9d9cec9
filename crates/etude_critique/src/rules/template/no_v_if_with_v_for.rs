//! template/no-v-if-with-v-for
//!
//! Disallow `v-if` on the same element as `v-for`.
//!
//! ## Examples
//!
//! ### Invalid
//! ```vue
//! <li v-for="item in items" v-if="item.active">{{ item }}</li>
//! ```
//!
//! ### Valid
//! ```vue
//! <li v-for="item in activeItems" :key="item.id">{{ item }}</li>
//! ```

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{RuleMeta, TemplateRule};
use crate::scan::Tag;

static META: RuleMeta = RuleMeta {
    name: "template/no-v-if-with-v-for",
    description: "Disallow `v-if` on the same element as `v-for`",
    default_severity: Severity::Warning,
};

/// Disallow v-if together with v-for on one element
pub struct NoVIfWithVFor;

impl TemplateRule for NoVIfWithVFor {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_tag(&self, ctx: &mut LintContext<'_>, tag: &Tag<'_>) {
        if tag.has_attr("v-for") && tag.has_attr("v-if") {
            ctx.warn(
                "Avoid `v-if` with `v-for` on the same element; prefer filtering via a computed property",
                tag.offset,
                tag.end(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;
    use crate::rule::RuleRegistry;

    fn create_linter() -> Linter {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(NoVIfWithVFor));
        Linter::with_registry(registry)
    }

    #[test]
    fn test_same_element_warns() {
        let linter = create_linter();
        let markers = linter
            .validate(r#"<li v-for="item in items" v-if="item.active" :key="item.id">x</li>"#);
        assert_eq!(markers.len(), 1);
        assert!(markers[0].message.contains("computed property"));
    }

    #[test]
    fn test_nested_element_is_fine() {
        let linter = create_linter();
        let markers = linter.validate(
            r#"<template v-for="item in items" :key="item.id"><li v-if="item.active">x</li></template>"#,
        );
        assert!(markers.is_empty());
    }

    #[test]
    fn test_v_else_if_not_confused() {
        let linter = create_linter();
        assert!(linter
            .validate(r#"<li v-for="i in xs" v-else-if="c" :key="i">x</li>"#)
            .is_empty());
    }
}
