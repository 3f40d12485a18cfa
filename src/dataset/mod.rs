pub mod builtin;
pub mod global;
pub mod source;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::category::{Category, CategoryTable};
use crate::member::{ImageHandle, MemberRecord};
use crate::validate::{validate, validate_value, ValidationContext, ValidationError};

/// A validated member list together with the categories it was checked
/// against. Only obtainable through validation and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    members: Vec<MemberRecord>,
    categories: CategoryTable,
}

/// A member with its category codes resolved to labels.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MemberEntry<'a> {
    #[serde(flatten)]
    pub record: &'a MemberRecord,
    pub degree: &'a str,
    pub department: &'a str,
}

impl MemberEntry<'_> {
    pub fn image(&self) -> Option<&ImageHandle> {
        self.record.image_ref.as_ref()
    }
}

impl Dataset {
    /// Validate authored member data (a JSON list of objects).
    pub fn from_value(raw: &Value, ctx: &ValidationContext<'_>) -> Result<Self, ValidationError> {
        let members = validate_value(raw, ctx)?;
        Ok(Self::finish(members, ctx))
    }

    /// Validate typed records, filling in placeholder images.
    pub fn from_records(
        mut members: Vec<MemberRecord>,
        ctx: &ValidationContext<'_>,
    ) -> Result<Self, ValidationError> {
        validate(&mut members, ctx)?;
        Ok(Self::finish(members, ctx))
    }

    fn finish(members: Vec<MemberRecord>, ctx: &ValidationContext<'_>) -> Self {
        info!(members = members.len(), "member data validated");
        Self {
            members,
            categories: ctx.categories.clone(),
        }
    }

    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in authored order, with degree and department labels.
    pub fn entries(&self) -> impl Iterator<Item = MemberEntry<'_>> {
        self.members.iter().map(move |record| MemberEntry {
            record,
            degree: self
                .categories
                .label(Category::Degree, record.degree_code)
                .unwrap_or_default(),
            department: self
                .categories
                .label(Category::Department, record.department_code)
                .unwrap_or_default(),
        })
    }

    /// Number of members per label of `category`, in label order.
    pub fn count_by(&self, category: Category) -> Vec<(&str, usize)> {
        self.categories
            .labels(category)
            .iter()
            .enumerate()
            .map(|(code, label)| {
                let n = self
                    .members
                    .iter()
                    .filter(|m| {
                        let c = match category {
                            Category::Degree => m.degree_code,
                            Category::Department => m.department_code,
                        };
                        c == code as i64
                    })
                    .count();
                (label.as_str(), n)
            })
            .collect()
    }
}
