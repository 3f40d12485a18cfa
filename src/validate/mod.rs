//! One-shot validation of the member list.
//!
//! Members are checked in order and the first violation aborts the whole
//! pass. For each member the rules run as: names, degree, department,
//! graduation year, image. A member without an image gets the placeholder.

mod checks;
pub mod error;
pub mod years;

use serde_json::{Map, Value};
use tracing::debug;

use crate::asset::AssetResolver;
use crate::category::{Category, CategoryTable};
use crate::member::{Field, ImageHandle, MemberRecord};
use checks::{check_code, check_image, check_names, check_year};
use error::type_name;

pub use error::{ErrorKind, ValidationError};
pub use years::{YearRange, FIRST_YEAR};

/// Everything a validation pass checks members against.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    pub categories: &'a CategoryTable,
    pub assets: &'a dyn AssetResolver,
    pub years: YearRange,
}

impl<'a> ValidationContext<'a> {
    /// Context accepting graduation years up to the current year.
    pub fn new(categories: &'a CategoryTable, assets: &'a dyn AssetResolver) -> Self {
        Self {
            categories,
            assets,
            years: YearRange::until_now(),
        }
    }

    pub fn with_years(mut self, years: YearRange) -> Self {
        self.years = years;
        self
    }
}

/// Validate typed records in place, filling in the placeholder image where
/// none is set. Running it again on its own output changes nothing.
pub fn validate(
    records: &mut [MemberRecord],
    ctx: &ValidationContext<'_>,
) -> Result<(), ValidationError> {
    for (index, rec) in records.iter_mut().enumerate() {
        check_names(index, rec.name_local.as_deref(), rec.name_alt.as_deref())?;
        check_code(index, Category::Degree, Some(rec.degree_code), ctx.categories)?;
        check_code(
            index,
            Category::Department,
            Some(rec.department_code),
            ctx.categories,
        )?;
        if let Some(year) = rec.graduation_year {
            check_year(index, Some(year.into()), ctx.years)?;
        }
        if let Some(id) = rec
            .image_ref
            .as_ref()
            .map(ImageHandle::as_str)
            .filter(|id| !id.is_empty())
        {
            check_image(index, id, ctx.assets)?;
        } else {
            rec.image_ref = Some(ctx.assets.placeholder());
        }
        debug!(index, name = rec.display_name(), "member ok");
    }
    Ok(())
}

/// Validate authored, untyped member data and convert it to records.
///
/// On top of the rules `validate` enforces, this checks that `raw` is a list
/// of objects and that every field holds the expected primitive type.
pub fn validate_value(
    raw: &Value,
    ctx: &ValidationContext<'_>,
) -> Result<Vec<MemberRecord>, ValidationError> {
    let items = raw.as_array().ok_or(ValidationError::NotAList {
        found: type_name(raw),
    })?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let obj = item.as_object().ok_or(ValidationError::NotARecord {
            index,
            found: type_name(item),
        })?;
        let rec = record_from_object(index, obj, ctx)?;
        debug!(index, name = rec.display_name(), "member ok");
        records.push(rec);
    }
    Ok(records)
}

fn record_from_object(
    index: usize,
    obj: &Map<String, Value>,
    ctx: &ValidationContext<'_>,
) -> Result<MemberRecord, ValidationError> {
    let name_local = string_field(index, obj, Field::NameLocal)?;
    let name_alt = string_field(index, obj, Field::NameAlt)?;
    check_names(index, name_local, name_alt)?;

    let degree_code = check_code(
        index,
        Category::Degree,
        Field::Degree.get(obj).and_then(Value::as_i64),
        ctx.categories,
    )?;
    let department_code = check_code(
        index,
        Category::Department,
        Field::Department.get(obj).and_then(Value::as_i64),
        ctx.categories,
    )?;

    let graduation_year = match Field::GraduationYear.get(obj) {
        Some(v) => Some(check_year(index, v.as_i64(), ctx.years)?),
        None => None,
    };

    let image_ref = match Field::Image.get(obj) {
        Some(Value::String(id)) if !id.is_empty() => {
            check_image(index, id, ctx.assets)?;
            ImageHandle::new(id.as_str())
        }
        Some(Value::String(_)) | None => ctx.assets.placeholder(),
        Some(other) => {
            return Err(ValidationError::ImageNotImported {
                index,
                image: other.to_string(),
            })
        }
    };

    Ok(MemberRecord {
        name_local: name_local.map(str::to_string),
        name_alt: name_alt.map(str::to_string),
        degree_code,
        department_code,
        graduation_year,
        image_ref: Some(image_ref),
    })
}

fn string_field<'v>(
    index: usize,
    obj: &'v Map<String, Value>,
    field: Field,
) -> Result<Option<&'v str>, ValidationError> {
    match field.get(obj) {
        None => Ok(None),
        Some(v) if field.kind().matches(v) => Ok(v.as_str()),
        Some(_) => Err(ValidationError::WrongType { index, field }),
    }
}
