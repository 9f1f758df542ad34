/*
[INPUT]:  Request descriptor fields before dispatch
[OUTPUT]: Field-level validation failures
[POS]:    Data layer - client-side request validation
[UPDATE]: When adding new constraint kinds
*/

use std::fmt;

use thiserror::Error;

/// A request descriptor failed a client-side constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field `{field}` {kind}")]
pub struct ValidationError {
    pub field: &'static str,
    pub kind: ValidationErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Required value is missing or blank
    Required,
    /// Value is not in the documented set
    NotOneOf {
        value: String,
        allowed: &'static [&'static str],
    },
    /// Numeric value outside documented bounds
    OutOfRange {
        value: i64,
        min: Option<i64>,
        max: Option<i64>,
    },
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::Required => write!(f, "is required"),
            ValidationErrorKind::NotOneOf { value, allowed } => {
                write!(f, "must be one of [{}], got `{}`", allowed.join(", "), value)
            }
            ValidationErrorKind::OutOfRange { value, min, max } => match (min, max) {
                (Some(min), Some(max)) => write!(f, "must be within {min}..={max}, got {value}"),
                (Some(min), None) => write!(f, "must be at least {min}, got {value}"),
                (None, Some(max)) => write!(f, "must be at most {max}, got {value}"),
                (None, None) => write!(f, "is out of range: {value}"),
            },
        }
    }
}

impl ValidationError {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::Required,
        }
    }

    pub fn not_one_of(
        field: &'static str,
        value: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::NotOneOf {
                value: value.into(),
                allowed,
            },
        }
    }

    pub fn out_of_range(field: &'static str, value: i64, min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::OutOfRange { value, min, max },
        }
    }
}

/// Pre-flight check run by every facade method before dispatch.
///
/// Implementations may fill documented defaults into unset optional fields,
/// which is why validation takes `&mut self`.
pub trait Validate {
    fn validate(&mut self) -> Result<(), ValidationError>;
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Non-empty list whose entries are all non-blank
pub(crate) fn require_items<T: AsRef<str>>(
    field: &'static str,
    values: &[T],
) -> Result<(), ValidationError> {
    if values.is_empty() || values.iter().any(|value| value.as_ref().trim().is_empty()) {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

pub(crate) fn require_timestamp(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Checks an optional numeric value against inclusive bounds.
pub(crate) fn check_range(
    field: &'static str,
    value: Option<u32>,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };
    let value = i64::from(value);
    let below = min.is_some_and(|min| value < min);
    let above = max.is_some_and(|max| value > max);
    if below || above {
        return Err(ValidationError::out_of_range(field, value, min, max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_blank() {
        assert_eq!(require_text("id", "  "), Err(ValidationError::required("id")));
        assert!(require_text("id", "bitcoin").is_ok());
    }

    #[test]
    fn test_require_items() {
        assert!(require_items("ids", &["bitcoin"]).is_ok());
        assert!(require_items::<&str>("ids", &[]).is_err());
        assert!(require_items("ids", &["bitcoin", " "]).is_err());
    }

    #[test]
    fn test_check_range_bounds() {
        assert!(check_range("per_page", None, Some(1), Some(250)).is_ok());
        assert!(check_range("per_page", Some(1), Some(1), Some(250)).is_ok());
        assert!(check_range("per_page", Some(250), Some(1), Some(250)).is_ok());

        let err = check_range("per_page", Some(251), Some(1), Some(250)).unwrap_err();
        assert_eq!(err.field, "per_page");
        assert_eq!(
            err.kind,
            ValidationErrorKind::OutOfRange {
                value: 251,
                min: Some(1),
                max: Some(250)
            }
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::not_one_of("order", "sideways", &["asc", "desc"]);
        assert_eq!(
            err.to_string(),
            "field `order` must be one of [asc, desc], got `sideways`"
        );

        let err = ValidationError::out_of_range("page", 0, Some(1), None);
        assert_eq!(err.to_string(), "field `page` must be at least 1, got 0");
    }
}
