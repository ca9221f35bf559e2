use crate::error::{SchemaError, SchemaResult};
use crate::types::PermitDocument;
use std::path::Path;

/// Parse a permit document from JSON source.
///
/// `serde_json` caps JSON nesting at 128 levels. Each nested `object`
/// property takes two of them, so documents nesting properties deeper than
/// about 60 levels are rejected with a recursion limit error.
pub fn parse_document(source: &str) -> SchemaResult<PermitDocument> {
    let document: PermitDocument = serde_json::from_str(source)?;
    tracing::trace!(
        base = %document.base.name,
        permits = document.permit.len(),
        "parsed permit document"
    );
    Ok(document)
}

/// Read and parse a permit document from disk
pub fn load_document(path: &Path) -> SchemaResult<PermitDocument> {
    let source = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FilterSpec, PropertyKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_document() {
        let source = r#"{
            "base": { "name": "account" },
            "permit": {
                "update-profile": {
                    "filter": { "id": { "type": "uuid" } },
                    "effect": {
                        "name": { "type": "text" },
                        "tags": { "type": "text", "list": true, "optional": true }
                    },
                    "extend": "user-profile"
                },
                "archive": {
                    "filter": [
                        { "id": { "type": "uuid" } },
                        { "slug": { "type": "text" } }
                    ]
                }
            }
        }"#;

        let document = parse_document(source).expect("Failed to parse");
        assert_eq!(document.base.name, "account");

        let names: Vec<&str> = document.permit.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["update-profile", "archive"]);

        let update = &document.permit["update-profile"];
        assert!(matches!(update.filter, Some(FilterSpec::Shape(_))));
        let effect = update.effect.as_ref().unwrap();
        assert_eq!(effect["tags"].kind, PropertyKind::Text);
        assert!(effect["tags"].list);
        assert_eq!(update.extend(), Some("user-profile"));

        let archive = &document.permit["archive"];
        assert!(matches!(archive.filter, Some(FilterSpec::Union(ref shapes)) if shapes.len() == 2));
        assert!(archive.effect.is_none());
    }

    #[test]
    fn test_parse_document_defaults() {
        let document = parse_document("{}").expect("Failed to parse");
        assert_eq!(document.base.name, "");
        assert!(document.permit.is_empty());
    }

    #[test]
    fn test_parse_document_rejects_malformed_json() {
        let result = parse_document(r#"{ "permit": [ }"#);
        assert!(matches!(result, Err(SchemaError::Json(_))));
    }

    fn nested_document(depth: usize) -> String {
        let mut property = r#"{"type":"text"}"#.to_string();
        for _ in 0..depth {
            property = format!(r#"{{"type":"object","property":{{"p":{}}}}}"#, property);
        }
        format!(r#"{{"permit":{{"a":{{"effect":{{"p":{}}}}}}}}}"#, property)
    }

    #[test]
    fn test_nesting_depth_limit() {
        let document = parse_document(&nested_document(40)).expect("Failed to parse");
        let mut property = &document.permit["a"].effect.as_ref().unwrap()["p"];
        let mut depth = 0;
        while let Some(fields) = &property.property {
            property = &fields["p"];
            depth += 1;
        }
        assert_eq!(depth, 40);
        assert_eq!(property.kind, PropertyKind::Text);

        match parse_document(&nested_document(70)) {
            Err(SchemaError::Json(error)) => {
                assert!(error.to_string().contains("recursion limit"), "{}", error)
            }
            other => panic!("Expected recursion limit error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_document() {
        let path = Path::new("/definitely/not/here.permit.json");
        match load_document(path) {
            Err(SchemaError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected IO error, got {:?}", other),
        }
    }
}
