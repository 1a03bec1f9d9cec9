//! template/require-v-for-key
//!
//! Loops should bind a stable key.
//!
//! Without a `:key`, list diffing falls back to in-place patching, which
//! reorders state in surprising ways when the list changes.
//!
//! ## Examples
//!
//! ### Invalid
//! ```vue
//! <li v-for="item in items">{{ item }}</li>
//! ```
//!
//! ### Valid
//! ```vue
//! <li v-for="item in items" :key="item.id">{{ item }}</li>
//! ```

use super::has_key_binding;
use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{RuleMeta, TemplateRule};
use crate::scan::Tag;

static META: RuleMeta = RuleMeta {
    name: "template/require-v-for-key",
    description: "Loops should bind a stable key",
    default_severity: Severity::Warning,
};

/// Require a key binding on tags that use v-for
pub struct RequireVForKey;

impl TemplateRule for RequireVForKey {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_tag(&self, ctx: &mut LintContext<'_>, tag: &Tag<'_>) {
        if !tag.has_attr("v-for") {
            return;
        }

        if !has_key_binding(tag) {
            ctx.warn(
                format!(
                    "Loops should bind a stable key. Element: <{}>",
                    tag.name
                ),
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
        registry.register(Box::new(RequireVForKey));
        Linter::with_registry(registry)
    }

    #[test]
    fn test_v_for_without_key_warns_once() {
        let linter = create_linter();
        let markers = linter.validate(r#"<ul><li v-for="item in items">{{ item }}</li></ul>"#);
        assert_eq!(markers.len(), 1);
        assert!(markers[0].message.contains("stable key"));
    }

    #[test]
    fn test_key_binding_suppresses() {
        let linter = create_linter();
        let markers =
            linter.validate(r#"<ul><li v-for="item in items" :key="item.id">{{ item }}</li></ul>"#);
        assert!(markers.is_empty());
    }

    #[test]
    fn test_longform_and_static_key_accepted() {
        let linter = create_linter();
        assert!(linter
            .validate(r#"<li v-for="i in list" v-bind:key="i">{{ i }}</li>"#)
            .is_empty());
        assert!(linter
            .validate(r#"<li v-for="i in list" key="static">{{ i }}</li>"#)
            .is_empty());
    }

    #[test]
    fn test_fires_per_offending_tag() {
        let linter = create_linter();
        let markers = linter.validate(
            r#"<div><li v-for="a in xs">{{ a }}</li><li v-for="b in ys">{{ b }}</li></div>"#,
        );
        assert_eq!(markers.len(), 2);
    }

    #[test]
    fn test_self_closing_component_checked() {
        let linter = create_linter();
        let markers = linter.validate(r#"<row v-for="r in rows" />"#);
        assert_eq!(markers.len(), 1);
    }
}
