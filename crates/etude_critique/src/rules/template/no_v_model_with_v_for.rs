//! template/no-v-model-with-v-for
//!
//! Warn when `v-model` and `v-for` sit on the same construct.
//!
//! Every iteration binds through the same model expression, so edits in one
//! row can write through to unexpected state unless the binding goes via
//! the iteration item.
//!
//! ## Examples
//!
//! ### Invalid
//! ```vue
//! <input v-for="f in fields" v-model="value" :key="f.id" />
//! ```
//!
//! ### Valid
//! ```vue
//! <input v-for="f in fields" v-model="f.value" :key="f.id" />
//! ```
//! (The checker is textual; it flags the combination itself.)

use super::has_v_model;
use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{RuleMeta, TemplateRule};
use crate::scan::Tag;

static META: RuleMeta = RuleMeta {
    name: "template/no-v-model-with-v-for",
    description: "Warn about `v-model` combined with `v-for`",
    default_severity: Severity::Warning,
};

/// Warn about v-model combined with v-for
pub struct NoVModelWithVFor;

impl TemplateRule for NoVModelWithVFor {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_tag(&self, ctx: &mut LintContext<'_>, tag: &Tag<'_>) {
        if tag.has_attr("v-for") && has_v_model(tag) {
            ctx.warn(
                "`v-model` combined with `v-for` is a scoping hazard; make sure the model binds through the iteration item",
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
        registry.register(Box::new(NoVModelWithVFor));
        Linter::with_registry(registry)
    }

    #[test]
    fn test_combination_warns() {
        let linter = create_linter();
        let markers =
            linter.validate(r#"<input v-for="f in fields" v-model="value" :key="f.id" />"#);
        assert_eq!(markers.len(), 1);
        assert!(markers[0].message.contains("scoping hazard"));
    }

    #[test]
    fn test_modifier_form_detected() {
        let linter = create_linter();
        let markers =
            linter.validate(r#"<input v-for="f in fields" v-model.lazy="value" :key="f.id" />"#);
        assert_eq!(markers.len(), 1);
    }

    #[test]
    fn test_v_model_alone_is_fine() {
        let linter = create_linter();
        assert!(linter.validate(r#"<input v-model="name" />"#).is_empty());
    }

    #[test]
    fn test_v_for_alone_is_fine() {
        let linter = create_linter();
        assert!(linter
            .validate(r#"<li v-for="i in list" :key="i">{{ i }}</li>"#)
            .is_empty());
    }
}
