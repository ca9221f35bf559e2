use permit_compiler_ts::{emit_permit, to_pascal_case, EmitOptions};
use permit_schema::parse_document;

fn main() {
    let source = r#"{
        "base": { "name": "blog" },
        "permit": {
            "publish-post": {
                "filter": [
                    { "id": { "type": "uuid" } },
                    { "slug": { "type": "text" } }
                ],
                "effect": {
                    "publishedAt": { "type": "timestamp" },
                    "tags": { "type": "text", "list": true, "optional": true },
                    "author": {
                        "type": "object",
                        "property": {
                            "id": { "type": "uuid" },
                            "displayName": { "type": "text", "optional": true }
                        }
                    }
                },
                "extend": "post"
            }
        }
    }"#;

    let document = parse_document(source).expect("Failed to parse permit document");

    for (name, permit) in &document.permit {
        let lines = emit_permit(&document.base, permit, &EmitOptions::default())
            .expect("Failed to emit permit");

        println!("export type {}MutatePermitType = {{", to_pascal_case(name));
        for line in lines {
            println!("  {}", line);
        }
        println!("}}");
    }
}
