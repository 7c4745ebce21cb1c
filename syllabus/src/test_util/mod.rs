use serde_json::json;

use crate::input;

pub const ALGEBRA_ID: &str = "algebra";

pub const ALGEBRA_METADATA: &str = "# Algebra\n## Core == core\nIntro text\n";

pub fn algebra_content() -> String {
    json!([{
        "variant_key": { "core": ["chapters.description"] },
        "chapters": [{
            "name": "Numbers",
            "chapters": [{ "name": "Integers", "description": "About integers" }],
        }],
    }])
    .to_string()
}

pub fn algebra_input() -> input::Buffer {
    input::Buffer::new()
        .with_metadata(ALGEBRA_ID, ALGEBRA_METADATA)
        .with_content(ALGEBRA_ID, algebra_content())
}

/// Two variants sharing one chapter, one of them with topics split across two path specs.
pub const PHYSICS_ID: &str = "9702";

pub const PHYSICS_METADATA: &str = r#"# Physics

## AS Level == AS-level-paper-1,2
Papers 1 and 2.

## A Level == A-level-paper-1,2,3,4
All four papers.
"#;

pub fn physics_content() -> String {
    json!([
        {
            "variant_key": {
                "AS Level": ["description", "topics.description"],
                "A Level": ["description", "topics.description", "topics.subtopics.description,examples"],
            },
            "chapters": [{
                "name": "Kinematics",
                "number": 2,
                "description": "Motion in a straight line.",
                "topics": [
                    {
                        "name": "Equations of motion",
                        "number": "2.1",
                        "description": "Derive the suvat equations.",
                        "subtopics": [
                            { "name": "Projectiles", "description": "Horizontal launch.", "examples": "A ball rolling off a table." },
                        ],
                    },
                    { "name": "Graphs", "number": "2.2" },
                ],
            }],
        },
        {
            "variant_key": { "A Level": ["description"] },
            "chapters": [{ "name": "Fields", "description": "Gravitational fields." }],
        },
    ])
    .to_string()
}

pub fn physics_input() -> input::Buffer {
    input::Buffer::new()
        .with_metadata(PHYSICS_ID, PHYSICS_METADATA)
        .with_content(PHYSICS_ID, physics_content())
}
