//! Collecting every failure instead of stopping at the first.
//!
//! Composers short-circuit: a property check returns as soon as something
//! below it fails. [`collect`] runs a set of independent checks and keeps all
//! of their failures in a [`ValidationResult`].

use stillwater::Validation;

use crate::error::{PropertyErrors, ValidationError};
use crate::ValidationResult;

/// Runs independent checks and accumulates every failure in order.
///
/// # Example
///
/// ```rust
/// use pathcheck::{collect, property_with, ValidationError};
///
/// let result = collect([
///     property_with("Name", || Err(ValidationError::leaf("required"))),
///     property_with("Age", || Ok(())),
///     property_with("Email", || Err(ValidationError::leaf("invalid"))),
/// ]);
///
/// let errors = result.into_result().unwrap_err();
/// assert_eq!(errors.count(), 2);
/// assert_eq!(errors.first().to_string(), "Name: required");
/// ```
pub fn collect<I>(checks: I) -> ValidationResult<()>
where
    I: IntoIterator<Item = Result<(), ValidationError>>,
{
    let failures: Vec<ValidationError> = checks.into_iter().filter_map(Result::err).collect();
    match PropertyErrors::from_failures(failures) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{property, v, Validate};

    struct Positive(i64);

    impl Validate for Positive {
        fn validate(&self) -> Result<(), ValidationError> {
            if self.0 <= 0 {
                return Err(crate::invalid!("non-positive", self.0).into());
            }
            Ok(())
        }
    }

    #[test]
    fn test_all_pass() {
        let result = collect([v(&Positive(1)), v(&Positive(2))]);
        assert!(result.is_success());
    }

    #[test]
    fn test_no_checks() {
        assert!(collect(Vec::new()).is_success());
    }

    #[test]
    fn test_keeps_every_failure() {
        let result = collect([
            property("A", &Positive(-1)),
            property("B", &Positive(5)),
            property("C", &Positive(0)),
        ]);

        let errors = result.into_result().unwrap_err();
        let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["A: Invalid non-positive: -1", "C: Invalid non-positive: 0"]
        );
    }
}
