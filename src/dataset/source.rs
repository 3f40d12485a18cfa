use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fs, path::Path};
use tracing::info;

use super::Dataset;
use crate::asset::AssetResolver;
use crate::category::CategoryTable;
use crate::validate::{ValidationContext, ValidationError};

/// A member dataset as stored on disk:
///
/// ```yaml
/// deg: [phd, master]
/// dept: [CSIE, IMI, AIMP]
/// members:
///   - { en: Tim Niven, deg: 0, dept: 0 }
/// ```
///
/// `members` is kept untyped so a malformed list is reported by validation
/// rather than by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDocument {
    #[serde(flatten)]
    pub categories: CategoryTable,
    pub members: Value,
}

impl DatasetDocument {
    pub fn validate(&self, assets: &dyn AssetResolver) -> Result<Dataset, ValidationError> {
        let ctx = ValidationContext::new(&self.categories, assets);
        Dataset::from_value(&self.members, &ctx)
    }
}

/// Read a dataset document; YAML for `.yaml`/`.yml`, JSON otherwise.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<DatasetDocument> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading dataset document {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let doc: DatasetDocument = if is_yaml {
        serde_yaml::from_str(&text).with_context(|| format!("parsing YAML {}", path.display()))?
    } else {
        serde_json::from_str(&text).with_context(|| format!("parsing JSON {}", path.display()))?
    };

    info!(
        path = %path.display(),
        degrees = doc.categories.deg.len(),
        departments = doc.categories.dept.len(),
        "loaded dataset document"
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{StaticAssets, PLACEHOLDER};
    use crate::validate::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, body: &str) -> NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_load_yaml_document() {
        let f = write_temp(
            ".yaml",
            "deg: [phd, master]\n\
             dept: [CSIE, IMI, AIMP]\n\
             members:\n\
             \x20 - { en: Tim Niven, deg: 0, dept: 0 }\n\
             \x20 - { zh: 陳比恩, deg: 1, dept: 1, year: 2019 }\n",
        );
        let doc = load_document(f.path()).unwrap();
        assert_eq!(doc.categories.dept.len(), 3);

        let ds = doc.validate(&StaticAssets::default()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.members()[1].graduation_year, Some(2019));
        assert_eq!(
            ds.members()[0].image_ref.as_ref().map(|h| h.as_str()),
            Some(PLACEHOLDER)
        );
    }

    #[test]
    fn test_load_json_document() {
        let f = write_temp(
            ".json",
            r#"{"degree":["phd"],"department":["CSIE"],
                "members":[{"nameAlt":"Iris Wu","degreeCode":0,"departmentCode":0}]}"#,
        );
        let ds = load_document(f.path())
            .unwrap()
            .validate(&StaticAssets::default())
            .unwrap();
        assert_eq!(ds.members()[0].display_name(), "Iris Wu");
    }

    #[test]
    fn test_members_not_a_list_is_shape_error() {
        let f = write_temp(
            ".json",
            r#"{"deg":["phd"],"dept":["CSIE"],"members":{"en":"X","deg":0,"dept":0}}"#,
        );
        let doc = load_document(f.path()).unwrap();
        let err = doc.validate(&StaticAssets::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_unreadable_document() {
        let f = write_temp(".json", "{ not json");
        let err = load_document(f.path()).unwrap_err();
        assert!(err.to_string().starts_with("parsing JSON"));

        assert!(load_document("/definitely/not/here.yaml").is_err());
    }
}
