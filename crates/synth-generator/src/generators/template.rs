//! Token template expander.
//!
//! Every `{{fieldType}}` token is replaced by one freshly generated value of
//! that built-in type. Repeated tokens draw independently. Tokens naming an
//! unknown type or a custom kind are left as written; all other text is copied
//! verbatim.
//!
//! ```text
//! ORDER-{{integer}} for {{firstName}}   ->   ORDER-4821 for Priya
//! ```

use super::generate_value_with;
use synth_core::{FieldType, RandomSource};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Expand a template, drawing from `rng`.
pub fn expand_template<R: RandomSource>(template: &str, rng: &mut R) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            // No closing braces: the remainder is plain text.
            out.push_str(&rest[start..]);
            return out;
        };

        let token = &after_open[..end];
        match resolve_token(token) {
            Some(field_type) => {
                let value = generate_value_with(field_type, None, rng);
                out.push_str(&value.to_display_string());
            }
            None => {
                out.push_str(OPEN);
                out.push_str(token);
                out.push_str(CLOSE);
            }
        }
        rest = &after_open[end + CLOSE.len()..];
    }

    out.push_str(rest);
    out
}

/// A token resolves when it names a built-in (non-custom) field type.
fn resolve_token(token: &str) -> Option<FieldType> {
    FieldType::from_name(token.trim()).filter(|t| !t.is_custom())
}
