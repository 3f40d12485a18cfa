// src/category/table.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which label list a category code indexes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Degree,
    Department,
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Degree => "degree",
            Category::Department => "department",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A code that does not index its label list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{category} code {code} is out of range for {len} labels")]
pub struct OutOfRange {
    pub category: Category,
    pub code: i64,
    pub len: usize,
}

/// Fixed, ordered label lists for degrees and departments.
///
/// Codes are positions in these lists, so entries are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    #[serde(alias = "degree")]
    pub deg: Vec<String>,
    #[serde(alias = "department")]
    pub dept: Vec<String>,
}

impl CategoryTable {
    pub fn new<D, P>(deg: D, dept: P) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            deg: deg.into_iter().map(Into::into).collect(),
            dept: dept.into_iter().map(Into::into).collect(),
        }
    }

    pub fn labels(&self, category: Category) -> &[String] {
        match category {
            Category::Degree => &self.deg,
            Category::Department => &self.dept,
        }
    }

    pub fn len(&self, category: Category) -> usize {
        self.labels(category).len()
    }

    /// Resolve `code` to its label, or `OutOfRange` unless `0 <= code < len`.
    pub fn lookup(&self, category: Category, code: i64) -> Result<&str, OutOfRange> {
        let labels = self.labels(category);
        usize::try_from(code)
            .ok()
            .and_then(|idx| labels.get(idx))
            .map(String::as_str)
            .ok_or(OutOfRange {
                category,
                code,
                len: labels.len(),
            })
    }

    pub fn label(&self, category: Category, code: i64) -> Option<&str> {
        self.lookup(category, code).ok()
    }
}

/// The organization's categories.
pub fn builtin() -> CategoryTable {
    CategoryTable::new(
        [
            "phd",    // 0
            "master", // 1
        ],
        [
            "CSIE", // 0: Computer Science and Information Engineering
            "IMI",  // 1: Institute of Medical Informatics
            "AIMP", // 2: Artificial Intelligence Technology Master Program
        ],
    )
}
