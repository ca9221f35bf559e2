use crate::error::{EmitError, EmitResult};
use crate::property::{indent, render_container};
use permit_schema::{Base, FilterSpec, PropertyContainer};

/// Render the `filter` field of a permit.
///
/// A single shape becomes an inline object; a list of shapes becomes a
/// union with one `| { ... }` branch per shape, in input order.
pub fn render_filter(base: &Base, filter: &FilterSpec, optional: bool) -> EmitResult<Vec<String>> {
    let marker = if optional { "?" } else { "" };

    match filter {
        FilterSpec::Shape(shape) => {
            let mut lines = vec![format!("filter{}: {{", marker)];
            lines.extend(indent(render_container(base, shape)?));
            lines.push("}".to_string());
            Ok(lines)
        }
        FilterSpec::Union(shapes) => {
            if shapes.is_empty() {
                return Err(EmitError::EmptyFilterUnion);
            }

            let mut lines = vec![format!("filter{}:", marker)];
            for shape in shapes {
                lines.extend(indent(render_union_branch(base, shape)?));
            }
            Ok(lines)
        }
    }
}

fn render_union_branch(base: &Base, shape: &PropertyContainer) -> EmitResult<Vec<String>> {
    let mut lines = vec!["| {".to_string()];
    lines.extend(indent(render_container(base, shape)?));
    lines.push("}".to_string());
    Ok(lines)
}
