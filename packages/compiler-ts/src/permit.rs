use crate::error::EmitResult;
use crate::filter::render_filter;
use crate::naming::to_pascal_case;
use crate::options::EmitOptions;
use crate::property::{indent, render_container};
use permit_schema::{Base, MutatePermit};

/// Suffix of the type a permit's `extend` reference points at
pub const EXTEND_TYPE_SUFFIX: &str = "ExtendType";

/// Emit the body lines of a permit's type, in the order filter, effect, extend.
///
/// Absent facets contribute nothing. The lines are meant to be placed inside
/// a surrounding type declaration by the caller.
#[tracing::instrument(level = "debug", skip_all, fields(base = %base.name))]
pub fn emit_permit(
    base: &Base,
    permit: &MutatePermit,
    options: &EmitOptions,
) -> EmitResult<Vec<String>> {
    let mut lines = Vec::new();

    if let Some(filter) = permit.filter() {
        lines.extend(render_filter(base, filter, options.filter_optional)?);
    }

    if let Some(effect) = permit.effect() {
        lines.push("effect: {".to_string());
        lines.extend(indent(render_container(base, effect)?));
        lines.push("}".to_string());
    }

    if let Some(extend) = permit.extend() {
        lines.push(format!("extend: {}", extend_type_name(extend)));
    }

    tracing::debug!(lines = lines.len(), "emitted permit");
    Ok(lines)
}

/// Type identifier generated for an extended schema
pub fn extend_type_name(schema: &str) -> String {
    format!("{}{}", to_pascal_case(schema), EXTEND_TYPE_SUFFIX)
}
