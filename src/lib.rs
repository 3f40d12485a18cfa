pub mod asset;
pub mod category;
pub mod dataset;
pub mod member;
pub mod validate;

pub use asset::{AssetResolver, StaticAssets};
pub use category::{Category, CategoryTable};
pub use dataset::Dataset;
pub use member::{ImageHandle, MemberRecord};
pub use validate::{validate, validate_value, ErrorKind, ValidationContext, ValidationError};
