use crate::error::{EmitError, EmitResult};
use permit_schema::{Base, Property, PropertyContainer, PropertyKind};

/// One level of nesting
pub const INDENT: &str = "  ";

/// Prefix every line with one indentation unit
pub fn indent(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| format!("{}{}", INDENT, line))
        .collect()
}

/// Render one named field as TypeScript property lines.
///
/// Scalars produce a single line. Objects produce an opening line, the
/// nested fields one level deeper, and a closing line. The optional marker
/// always attaches to the name, the `Array<...>` wrapper to the value.
pub fn render_property(base: &Base, name: &str, property: &Property) -> EmitResult<Vec<String>> {
    let optional = if property.optional { "?" } else { "" };
    let (list_open, list_close) = if property.list {
        ("Array<", ">")
    } else {
        ("", "")
    };

    let scalar = |expression: &str| {
        vec![format!(
            "{}{}: {}{}{}",
            name, optional, list_open, expression, list_close
        )]
    };

    let lines = match &property.kind {
        PropertyKind::Timestamp => scalar("Date"),
        PropertyKind::Text | PropertyKind::Uuid => scalar("string"),
        PropertyKind::Integer | PropertyKind::Decimal => scalar("number"),
        PropertyKind::Boolean => scalar("boolean"),
        PropertyKind::Json => scalar("object"),
        PropertyKind::Object => {
            let mut lines = vec![format!("{}{}: {}{{", name, optional, list_open)];
            if let Some(fields) = &property.property {
                lines.extend(indent(render_container(base, fields)?));
            }
            lines.push(format!("}}{}", list_close));
            lines
        }
        PropertyKind::Unknown(tag) => return Err(EmitError::InvalidPropertyType(tag.clone())),
    };

    Ok(lines)
}

/// Render every field of a container in iteration order, unindented
pub fn render_container(base: &Base, container: &PropertyContainer) -> EmitResult<Vec<String>> {
    let mut lines = Vec::new();
    for (name, property) in container {
        lines.extend(render_property(base, name, property)?);
    }
    Ok(lines)
}
