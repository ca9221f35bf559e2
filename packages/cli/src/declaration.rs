use anyhow::{Context, Result};
use permit_compiler_ts::{emit_permit, indent, to_pascal_case, EmitOptions};
use permit_schema::PermitDocument;

/// Suffix of the type declared for each permit
pub const PERMIT_TYPE_SUFFIX: &str = "MutatePermitType";

/// Wrap emitted permit lines in an exported type declaration
pub fn render_declaration(name: &str, lines: Vec<String>) -> String {
    let mut declaration = vec![format!(
        "export type {}{} = {{",
        to_pascal_case(name),
        PERMIT_TYPE_SUFFIX
    )];
    declaration.extend(indent(lines));
    declaration.push("}".to_string());
    declaration.join("\n")
}

/// Emit every permit of a document as a declaration, separated by blank lines
pub fn render_document(document: &PermitDocument, options: &EmitOptions) -> Result<String> {
    let mut declarations = Vec::new();
    for (name, permit) in &document.permit {
        let lines = emit_permit(&document.base, permit, options)
            .with_context(|| format!("Failed to emit permit '{}'", name))?;
        declarations.push(render_declaration(name, lines));
    }
    Ok(finish(declarations))
}

/// Emit the raw body lines of every permit, separated by blank lines.
///
/// Permits that emit no lines are left out.
pub fn render_lines(document: &PermitDocument, options: &EmitOptions) -> Result<String> {
    let mut blocks = Vec::new();
    for (name, permit) in &document.permit {
        let lines = emit_permit(&document.base, permit, options)
            .with_context(|| format!("Failed to emit permit '{}'", name))?;
        if !lines.is_empty() {
            blocks.push(lines.join("\n"));
        }
    }
    Ok(finish(blocks))
}

fn finish(blocks: Vec<String>) -> String {
    if blocks.is_empty() {
        String::new()
    } else {
        blocks.join("\n\n") + "\n"
    }
}
