//! Field table for authored member data: key, legacy alias, expected
//! primitive kind. The validator reads fields through it and the CLI renders
//! it as a JSON Schema.

use serde_json::{json, Map, Value};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    NameLocal,
    NameAlt,
    Degree,
    Department,
    GraduationYear,
    Image,
}

/// Primitive kind a field must hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Integer,
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
        }
    }

    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub key: &'static str,
    pub alias: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub description: &'static str,
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: Field::NameLocal,
        key: "nameLocal",
        alias: "zh",
        kind: FieldKind::String,
        required: false,
        description: "Name of a member in the primary script.",
    },
    FieldSpec {
        field: Field::NameAlt,
        key: "nameAlt",
        alias: "en",
        kind: FieldKind::String,
        required: false,
        description: "Name of a member in the secondary script.",
    },
    FieldSpec {
        field: Field::Degree,
        key: "degreeCode",
        alias: "deg",
        kind: FieldKind::Integer,
        required: true,
        description: "Degree of a member, as an index into the degree labels.",
    },
    FieldSpec {
        field: Field::Department,
        key: "departmentCode",
        alias: "dept",
        kind: FieldKind::Integer,
        required: true,
        description: "Department of a member, as an index into the department labels.",
    },
    FieldSpec {
        field: Field::GraduationYear,
        key: "graduationYear",
        alias: "year",
        kind: FieldKind::Integer,
        required: false,
        description: "Year of graduation.",
    },
    FieldSpec {
        field: Field::Image,
        key: "imageRef",
        alias: "image",
        kind: FieldKind::String,
        required: false,
        description: "Identifier of the member's photo.",
    },
];

impl Field {
    pub fn spec(&self) -> &'static FieldSpec {
        match self {
            Field::NameLocal => &FIELDS[0],
            Field::NameAlt => &FIELDS[1],
            Field::Degree => &FIELDS[2],
            Field::Department => &FIELDS[3],
            Field::GraduationYear => &FIELDS[4],
            Field::Image => &FIELDS[5],
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.spec().kind
    }

    /// Short name used in error messages.
    pub fn as_str(&self) -> &str {
        match self {
            Field::NameLocal => "nameLocal",
            Field::NameAlt => "nameAlt",
            Field::Degree => "degree",
            Field::Department => "department",
            Field::GraduationYear => "year",
            Field::Image => "image",
        }
    }

    /// Value of this field in `record`, treating JSON `null` as absent.
    /// The long key wins over the legacy alias when both are set.
    pub fn get<'a>(&self, record: &'a Map<String, Value>) -> Option<&'a Value> {
        let spec = self.spec();
        record
            .get(spec.key)
            .or_else(|| record.get(spec.alias))
            .filter(|v| !v.is_null())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON Schema (draft 2020-12) describing a list of member records.
///
/// Every field may be spelled with its key or its legacy alias, so each
/// property appears under both names and every "required" rule accepts
/// either spelling.
pub fn json_schema() -> Value {
    let mut properties = Map::new();
    for spec in FIELDS {
        properties.insert(
            spec.key.to_string(),
            json!({
                "description": spec.description,
                "type": spec.kind.as_str()
            }),
        );
        properties.insert(
            spec.alias.to_string(),
            json!({
                "description": format!("Alias of `{}`.", spec.key),
                "type": spec.kind.as_str()
            }),
        );
    }

    let either = |specs: &[&FieldSpec]| -> Value {
        let branches: Vec<Value> = specs
            .iter()
            .flat_map(|s| [s.key, s.alias])
            .map(|name| json!({ "required": [name] }))
            .collect();
        json!({ "anyOf": branches })
    };
    let mut rules: Vec<Value> = FIELDS
        .iter()
        .filter(|s| s.required)
        .map(|s| either(&[s]))
        .collect();
    rules.push(either(&[Field::NameLocal.spec(), Field::NameAlt.spec()]));

    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "description": "An array of members data.",
        "type": "array",
        "items": {
            "description": "Member data.",
            "type": "object",
            "properties": properties,
            "allOf": rules
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_table_matches_fields() {
        for spec in FIELDS {
            assert_eq!(spec.field.spec().key, spec.key);
        }
    }

    #[test]
    fn test_get_prefers_key_and_skips_null() {
        let rec = json!({"deg": 1, "degreeCode": 0, "year": null});
        let obj = rec.as_object().unwrap();
        assert_eq!(Field::Degree.get(obj), Some(&json!(0)));
        assert_eq!(Field::GraduationYear.get(obj), None);
        assert_eq!(Field::Image.get(obj), None);
    }

    #[test]
    fn test_kind_matches() {
        assert!(FieldKind::Integer.matches(&json!(3)));
        assert!(!FieldKind::Integer.matches(&json!(3.5)));
        assert!(!FieldKind::Integer.matches(&json!("3")));
        assert!(FieldKind::String.matches(&json!("x")));
    }

    /// Structural check of one record against the generated item schema:
    /// property types plus the `allOf`/`anyOf` required rules.
    fn satisfies(item_schema: &Value, record: &Value) -> bool {
        let Some(obj) = record.as_object() else {
            return false;
        };
        let types_ok = obj.iter().all(|(name, value)| {
            match item_schema["properties"][name.as_str()]["type"].as_str() {
                Some("string") => FieldKind::String.matches(value),
                Some("integer") => FieldKind::Integer.matches(value),
                _ => true,
            }
        });
        let rules_ok = item_schema["allOf"].as_array().unwrap().iter().all(|rule| {
            rule["anyOf"].as_array().unwrap().iter().any(|branch| {
                branch["required"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .all(|name| obj.contains_key(name.as_str().unwrap()))
            })
        });
        types_ok && rules_ok
    }

    #[test]
    fn test_json_schema_lists_keys_and_aliases() {
        let schema = json_schema();
        assert_eq!(schema["type"], "array");
        for spec in FIELDS {
            let props = &schema["items"]["properties"];
            assert_eq!(props[spec.key]["type"], spec.kind.as_str());
            assert_eq!(props[spec.alias]["type"], spec.kind.as_str());
        }
        assert_eq!(schema["items"]["allOf"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_builtin_members_satisfy_json_schema() {
        let schema = json_schema();
        let members = crate::dataset::builtin::raw_members();
        for member in members.as_array().unwrap() {
            assert!(satisfies(&schema["items"], member), "{}", member);
        }
    }

    #[test]
    fn test_json_schema_rules() {
        let items = &json_schema()["items"];
        assert!(satisfies(items, &json!({"en": "Tim Niven", "deg": 0, "dept": 0})));
        assert!(satisfies(
            items,
            &json!({"nameLocal": "陳比恩", "degreeCode": 1, "departmentCode": 1})
        ));
        assert!(!satisfies(items, &json!({"deg": 0, "dept": 0})));
        assert!(!satisfies(items, &json!({"en": "X", "dept": 0})));
        assert!(!satisfies(items, &json!({"en": "X", "deg": "0", "dept": 0})));
    }
}
