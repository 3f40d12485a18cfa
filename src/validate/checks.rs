// Per-field rules shared by the typed and the untyped validation paths.

use super::{ValidationError, YearRange};
use crate::asset::AssetResolver;
use crate::category::{Category, CategoryTable};
use crate::member::Field;

pub(crate) fn check_names(
    index: usize,
    local: Option<&str>,
    alt: Option<&str>,
) -> Result<(), ValidationError> {
    let filled = [local, alt].into_iter().flatten().any(|n| !n.is_empty());
    if !filled {
        return Err(ValidationError::MissingName { index });
    }
    Ok(())
}

/// `code` is `None` when the field is missing or not an integer; that is
/// reported the same way as an out-of-range code.
pub(crate) fn check_code(
    index: usize,
    category: Category,
    code: Option<i64>,
    table: &CategoryTable,
) -> Result<i64, ValidationError> {
    let field = match category {
        Category::Degree => Field::Degree,
        Category::Department => Field::Department,
    };
    code.filter(|c| table.lookup(category, *c).is_ok())
        .ok_or(ValidationError::OutOfRange {
            index,
            field,
            min: 0,
            max: table.len(category) as i64 - 1,
        })
}

/// `year` is `None` when the field is present but not an integer.
pub(crate) fn check_year(
    index: usize,
    year: Option<i64>,
    years: YearRange,
) -> Result<i32, ValidationError> {
    year.filter(|y| years.contains(*y))
        .and_then(|y| i32::try_from(y).ok())
        .ok_or(ValidationError::OutOfRange {
            index,
            field: Field::GraduationYear,
            min: years.first as i64,
            max: years.last as i64,
        })
}

/// A supplied image must be importable; the placeholder always is.
pub(crate) fn check_image(
    index: usize,
    id: &str,
    assets: &dyn AssetResolver,
) -> Result<(), ValidationError> {
    if id == assets.placeholder().as_str() || assets.recognizes(id) {
        return Ok(());
    }
    Err(ValidationError::ImageNotImported {
        index,
        image: id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{StaticAssets, PLACEHOLDER};
    use crate::category;

    #[test]
    fn test_check_names() {
        assert!(check_names(0, Some("寒山"), None).is_ok());
        assert!(check_names(0, None, Some("Tim Niven")).is_ok());
        assert!(check_names(0, Some(""), Some("Tim Niven")).is_ok());
        assert_eq!(
            check_names(4, Some(""), None),
            Err(ValidationError::MissingName { index: 4 })
        );
        assert_eq!(
            check_names(4, None, None),
            Err(ValidationError::MissingName { index: 4 })
        );
    }

    #[test]
    fn test_check_code_bounds() {
        let table = category::builtin();
        assert_eq!(check_code(0, Category::Degree, Some(1), &table), Ok(1));
        assert_eq!(check_code(0, Category::Department, Some(2), &table), Ok(2));

        let err = check_code(2, Category::Degree, Some(2), &table).unwrap_err();
        assert_eq!(err.to_string(), "member #2: degree must be within [0, 1]");
        let err = check_code(2, Category::Department, None, &table).unwrap_err();
        assert_eq!(err.to_string(), "member #2: department must be within [0, 2]");
        assert!(check_code(0, Category::Degree, Some(-1), &table).is_err());
    }

    #[test]
    fn test_check_year_bounds() {
        let years = YearRange::until(2024);
        assert_eq!(check_year(0, Some(1990), years), Ok(1990));
        assert_eq!(check_year(0, Some(2024), years), Ok(2024));
        assert!(check_year(0, Some(1989), years).is_err());
        assert!(check_year(0, Some(2025), years).is_err());
        assert!(check_year(0, Some(i64::MAX), years).is_err());

        let err = check_year(1, None, years).unwrap_err();
        assert_eq!(err.to_string(), "member #1: year must be within [1990, 2024]");
    }

    #[test]
    fn test_check_image() {
        let assets = StaticAssets::default().with("member/iris-wu.jpg");
        assert!(check_image(0, PLACEHOLDER, &assets).is_ok());
        assert!(check_image(0, "member/iris-wu.jpg", &assets).is_ok());
        assert_eq!(
            check_image(3, "member/unknown.jpg", &assets),
            Err(ValidationError::ImageNotImported {
                index: 3,
                image: "member/unknown.jpg".to_string(),
            })
        );
    }
}
