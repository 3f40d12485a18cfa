pub mod dir;
pub mod manifest;

use crate::member::ImageHandle;

pub use manifest::StaticAssets;

/// Identifier of the image shown for members without a photo.
pub const PLACEHOLDER: &str = "member/placeholder.jpg";

/// Decides which image identifiers can be imported, and which one stands in
/// for a member without a photo.
pub trait AssetResolver {
    fn recognizes(&self, id: &str) -> bool;

    fn placeholder(&self) -> ImageHandle;
}
