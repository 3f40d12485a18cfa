// src/dataset/builtin.rs

use serde_json::{json, Value};

use super::Dataset;
use crate::asset::{StaticAssets, PLACEHOLDER};
use crate::category;
use crate::validate::{ValidationContext, ValidationError};

/// The organization's members, as authored. Order is display order.
pub fn raw_members() -> Value {
    json!([
        {
            "zh": "寒山",
            "en": "Tim Niven",
            "dept": 0,
            "deg": 0,
            "image": PLACEHOLDER
        },
        {
            "zh": "周子軒",
            "en": "Tzu Hsuan Chou",
            "dept": 0,
            "deg": 0
        },
        {
            "zh": "吳貞頤",
            "en": "Iris Wu",
            "dept": 0,
            "deg": 1
        },
        {
            "zh": "陳比恩",
            "en": "Daniel Chen",
            "dept": 1,
            "deg": 1
        },
        {
            "zh": "陳冠友",
            "en": "Guan Yo Chen",
            "dept": 2,
            "deg": 1
        },
        {
            "zh": "黃獻德",
            "en": "Ton Ton Huang",
            "dept": 0,
            "deg": 0,
            "year": 2019
        },
        {
            "zh": "葉修宏",
            "en": "Hsu Hong Yeh",
            "dept": 0,
            "deg": 1,
            "year": 2018
        }
    ])
}

/// Images shipped with the built-in members.
pub fn assets() -> StaticAssets {
    StaticAssets::new(PLACEHOLDER)
}

/// Validate the built-in members against the built-in categories.
pub fn load() -> Result<Dataset, ValidationError> {
    let categories = category::builtin();
    let assets = assets();
    let ctx = ValidationContext::new(&categories, &assets);
    Dataset::from_value(&raw_members(), &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_builtin_validates() {
        let ds = load().unwrap();
        assert_eq!(ds.len(), 7);
        assert!(ds.members().iter().all(|m| m.image_ref.is_some()));
        assert_eq!(ds.members()[0].display_name(), "寒山");
        assert_eq!(ds.members()[5].graduation_year, Some(2019));
    }

    #[test]
    fn test_builtin_counts() {
        let ds = load().unwrap();
        assert_eq!(
            ds.count_by(Category::Degree),
            vec![("phd", 3), ("master", 4)]
        );
        assert_eq!(
            ds.count_by(Category::Department),
            vec![("CSIE", 5), ("IMI", 1), ("AIMP", 1)]
        );
    }
}
