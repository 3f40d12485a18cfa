pub mod fields;
pub mod types;

pub use fields::{json_schema, Field, FieldKind, FieldSpec, FIELDS};
pub use types::{ImageHandle, MemberRecord};
