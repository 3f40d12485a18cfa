// src/asset/manifest.rs

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::warn;

use super::{AssetResolver, PLACEHOLDER};
use crate::member::ImageHandle;

/// Relative, forward-slash path to an image file.
static IMAGE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[\w\-][\w\-.]*(?:/[\w\-.]+)*\.(?:jpe?g|png|webp|gif|svg)$").unwrap()
});

pub fn is_image_id(id: &str) -> bool {
    IMAGE_ID.is_match(id) && !id.split('/').any(|seg| seg == "..")
}

/// An in-memory manifest of importable images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAssets {
    placeholder: ImageHandle,
    known: BTreeSet<String>,
}

impl StaticAssets {
    /// Manifest containing only `placeholder`.
    pub fn new(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        let mut known = BTreeSet::new();
        known.insert(placeholder.clone());
        Self {
            placeholder: ImageHandle::new(placeholder),
            known,
        }
    }

    /// Register `id`. Identifiers that do not look like an image path are
    /// skipped with a warning.
    pub fn with(mut self, id: impl Into<String>) -> Self {
        self.insert(id);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if !is_image_id(&id) {
            warn!("asset manifest: skipping `{}`, not an image path", id);
            return false;
        }
        self.known.insert(id)
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl Default for StaticAssets {
    fn default() -> Self {
        Self::new(PLACEHOLDER)
    }
}

impl AssetResolver for StaticAssets {
    fn recognizes(&self, id: &str) -> bool {
        self.known.contains(id)
    }

    fn placeholder(&self) -> ImageHandle {
        self.placeholder.clone()
    }
}
