//! Validation of configuration values

pub use crate::error::ValidationError;

/// A table of `config.toml` that checks its own values
///
/// Errors name fields by their dotted path from the file root.
pub trait ConfigSection: Default {
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}

/// Common validators for config values
pub struct Validator;

impl Validator {
    /// Validates that a numeric value is within a range
    pub fn in_range<T>(value: T, min: T, max: T, field: &str) -> Result<(), ValidationError>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            Err(ValidationError::with_value(
                field,
                format!("must be between {} and {}", min, max),
                value,
            ))
        } else {
            Ok(())
        }
    }

    /// Validates that a string is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(ValidationError::new(field, "must not be empty"))
        } else {
            Ok(())
        }
    }

    /// Validates that a string is an absolute http(s) URL or a root-relative path
    pub fn url_or_path(value: &str, field: &str) -> Result<(), ValidationError> {
        let ok = value.starts_with('/')
            || value.starts_with("http://")
            || value.starts_with("https://");
        if ok {
            Ok(())
        } else {
            Err(ValidationError::with_value(
                field,
                "must be an http(s) URL or start with '/'",
                value,
            ))
        }
    }

    /// Validates that a string contains no whitespace
    pub fn no_whitespace(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.chars().any(char::is_whitespace) {
            Err(ValidationError::with_value(
                field,
                "must not contain whitespace",
                value,
            ))
        } else {
            Ok(())
        }
    }

    /// Collects multiple validation results into a single result
    pub fn collect_errors(
        results: Vec<Result<(), ValidationError>>,
    ) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = results.into_iter().filter_map(|r| r.err()).collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range() {
        assert!(Validator::in_range(2, 1, 8, "test").is_ok());
        assert!(Validator::in_range(0, 1, 8, "test").is_err());
        assert!(Validator::in_range(9, 1, 8, "test").is_err());
    }

    #[test]
    fn test_not_empty() {
        assert!(Validator::not_empty("home", "test").is_ok());
        assert!(Validator::not_empty("", "test").is_err());
        assert!(Validator::not_empty("   ", "test").is_err());
    }

    #[test]
    fn test_url_or_path() {
        assert!(Validator::url_or_path("/viewer", "test").is_ok());
        assert!(Validator::url_or_path("https://example.org/viewer", "test").is_ok());
        assert!(Validator::url_or_path("viewer", "test").is_err());
        assert!(Validator::url_or_path("ftp://example.org", "test").is_err());
    }

    #[test]
    fn test_no_whitespace() {
        assert!(Validator::no_whitespace("DC", "test").is_ok());
        assert!(Validator::no_whitespace("D C", "test").is_err());
    }

    #[test]
    fn test_collect_errors_some_err() {
        let results = vec![
            Ok(()),
            Err(ValidationError::new("field1", "error1")),
            Ok(()),
            Err(ValidationError::new("field2", "error2")),
        ];
        let result = Validator::collect_errors(results);
        assert_eq!(result.unwrap_err().len(), 2);
    }
}
