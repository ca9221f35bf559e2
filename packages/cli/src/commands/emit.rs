use crate::config::Config;
use crate::declaration::{render_document, render_lines};
use anyhow::Result;
use clap::Args;
use permit_schema::load_document;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Permit document to emit
    pub file: PathBuf,

    /// Declare `filter` as optional (overrides config)
    #[arg(long, conflicts_with = "filter_required")]
    pub filter_optional: bool,

    /// Declare `filter` as required (overrides config)
    #[arg(long)]
    pub filter_required: bool,

    /// Print only the emitted lines, without type declarations
    #[arg(long)]
    pub lines: bool,
}

pub fn emit(args: EmitArgs, cwd: &str) -> Result<()> {
    print!("{}", emit_output(&args, cwd)?);
    Ok(())
}

fn emit_output(args: &EmitArgs, cwd: &str) -> Result<String> {
    let config = Config::load(cwd)?;
    let options = config.emit_options(args.filter_optional, args.filter_required);

    let path = PathBuf::from(cwd).join(&args.file);
    let document = load_document(&path)?;

    if args.lines {
        render_lines(&document, &options)
    } else {
        render_document(&document, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG_NAME;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const DOCUMENT: &str = r#"{
        "permit": {
            "update-user": {
                "filter": { "id": { "type": "uuid" } },
                "extend": "user"
            }
        }
    }"#;

    fn args(lines: bool, filter_optional: bool, filter_required: bool) -> EmitArgs {
        EmitArgs {
            file: PathBuf::from("user.permit.json"),
            filter_optional,
            filter_required,
            lines,
        }
    }

    fn project(config: Option<&str>) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("user.permit.json"), DOCUMENT).unwrap();
        if let Some(config) = config {
            fs::write(dir.path().join(DEFAULT_CONFIG_NAME), config).unwrap();
        }
        dir
    }

    #[test]
    fn test_emit_declarations() {
        let dir = project(None);
        let output = emit_output(&args(false, false, false), dir.path().to_str().unwrap()).unwrap();

        assert_eq!(
            output,
            "export type UpdateUserMutatePermitType = {\n  filter: {\n    id: string\n  }\n  extend: UserExtendType\n}\n"
        );
    }

    #[test]
    fn test_emit_lines() {
        let dir = project(None);
        let output = emit_output(&args(true, false, false), dir.path().to_str().unwrap()).unwrap();

        assert_eq!(output, "filter: {\n  id: string\n}\nextend: UserExtendType\n");
    }

    #[test]
    fn test_emit_uses_config_filter_optional() {
        let dir = project(Some(r#"{ "filterOptional": true }"#));
        let output = emit_output(&args(true, false, false), dir.path().to_str().unwrap()).unwrap();

        assert!(output.starts_with("filter?: {\n"), "{}", output);
    }

    #[test]
    fn test_emit_filter_required_overrides_config() {
        let dir = project(Some(r#"{ "filterOptional": true }"#));
        let output = emit_output(&args(true, false, true), dir.path().to_str().unwrap()).unwrap();

        assert!(output.starts_with("filter: {\n"), "{}", output);
    }

    #[test]
    fn test_emit_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = emit_output(&args(false, false, false), dir.path().to_str().unwrap());
        assert!(result.is_err());
    }
}
