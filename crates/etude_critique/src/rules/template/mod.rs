//! Directive-pattern rules.
//!
//! Each rule scans the raw tag list of the whole document and emits one
//! Warning per offending tag, at the tag's start offset.

mod no_v_else_with_v_if;
mod no_v_if_with_v_for;
mod no_v_model_with_v_for;
mod require_v_for_key;

pub use no_v_else_with_v_if::NoVElseWithVIf;
pub use no_v_if_with_v_for::NoVIfWithVFor;
pub use no_v_model_with_v_for::NoVModelWithVFor;
pub use require_v_for_key::RequireVForKey;

use crate::scan::Tag;

/// Whether the tag binds a key, in any of the accepted spellings.
pub(crate) fn has_key_binding(tag: &Tag<'_>) -> bool {
    tag.has_attr("key") || tag.has_attr(":key") || tag.has_attr("v-bind:key")
}

/// Whether the tag carries a `v-model`, with or without argument/modifiers.
pub(crate) fn has_v_model(tag: &Tag<'_>) -> bool {
    tag.has_attr("v-model")
        || tag.has_attr_with_prefix("v-model.")
        || tag.has_attr_with_prefix("v-model:")
}
