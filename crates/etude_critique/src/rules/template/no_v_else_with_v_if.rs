//! template/no-v-else-with-v-if
//!
//! Disallow `v-else` and `v-if` on the same element.
//!
//! The pair almost always means `v-else-if` was intended; as written, the
//! `v-if` silently shadows the `v-else` branch.
//!
//! ## Examples
//!
//! ### Invalid
//! ```vue
//! <div v-else v-if="cond">...</div>
//! ```
//!
//! ### Valid
//! ```vue
//! <div v-else-if="cond">...</div>
//! ```

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{RuleMeta, TemplateRule};
use crate::scan::Tag;

static META: RuleMeta = RuleMeta {
    name: "template/no-v-else-with-v-if",
    description: "Disallow `v-else` and `v-if` on one element; use `v-else-if`",
    default_severity: Severity::Warning,
};

/// Disallow co-located v-else and v-if
pub struct NoVElseWithVIf;

impl TemplateRule for NoVElseWithVIf {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_tag(&self, ctx: &mut LintContext<'_>, tag: &Tag<'_>) {
        if tag.has_attr("v-else") && tag.has_attr("v-if") {
            ctx.warn(
                "`v-else` and `v-if` on the same element; use `v-else-if` instead",
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
        registry.register(Box::new(NoVElseWithVIf));
        Linter::with_registry(registry)
    }

    #[test]
    fn test_colocated_pair_warns() {
        let linter = create_linter();
        let markers = linter.validate(r#"<div v-else v-if="cond">x</div>"#);
        assert_eq!(markers.len(), 1);
        assert!(markers[0].message.contains("v-else-if"));
    }

    #[test]
    fn test_order_does_not_matter() {
        let linter = create_linter();
        let markers = linter.validate(r#"<div v-if="cond" v-else>x</div>"#);
        assert_eq!(markers.len(), 1);
    }

    #[test]
    fn test_v_else_if_is_not_the_pair() {
        let linter = create_linter();
        assert!(linter.validate(r#"<div v-else-if="cond">x</div>"#).is_empty());
    }

    #[test]
    fn test_separate_elements_are_fine() {
        let linter = create_linter();
        let markers =
            linter.validate(r#"<div v-if="cond">a</div><div v-else>b</div>"#);
        assert!(markers.is_empty());
    }
}
