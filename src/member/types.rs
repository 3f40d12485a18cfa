// src/member/types.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of an image asset, handed to the asset resolver as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageHandle(String);

impl ImageHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One member of the organization.
///
/// Accepts both the long field names and the short keys the data was first
/// authored with (`zh`, `en`, `deg`, `dept`, `year`, `image`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    #[serde(default, alias = "zh", skip_serializing_if = "Option::is_none")]
    pub name_local: Option<String>,
    #[serde(default, alias = "en", skip_serializing_if = "Option::is_none")]
    pub name_alt: Option<String>,
    #[serde(alias = "deg")]
    pub degree_code: i64,
    #[serde(alias = "dept")]
    pub department_code: i64,
    #[serde(default, alias = "year", skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    #[serde(default, alias = "image", skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<ImageHandle>,
}

impl MemberRecord {
    pub fn new(degree_code: i64, department_code: i64) -> Self {
        Self {
            name_local: None,
            name_alt: None,
            degree_code,
            department_code,
            graduation_year: None,
            image_ref: None,
        }
    }

    pub fn with_name_local(mut self, name: impl Into<String>) -> Self {
        self.name_local = Some(name.into());
        self
    }

    pub fn with_name_alt(mut self, name: impl Into<String>) -> Self {
        self.name_alt = Some(name.into());
        self
    }

    pub fn with_graduation_year(mut self, year: i32) -> Self {
        self.graduation_year = Some(year);
        self
    }

    pub fn with_image(mut self, image: ImageHandle) -> Self {
        self.image_ref = Some(image);
        self
    }

    /// Name to show: the local-script name if filled, else the alternate one.
    pub fn display_name(&self) -> &str {
        [&self.name_local, &self.name_alt]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|n| !n.is_empty())
            .unwrap_or_default()
    }
}
