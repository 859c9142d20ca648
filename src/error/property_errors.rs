//! Accumulated validation failures.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::error::ValidationError;
use crate::path::FieldPath;

/// Every failure from a set of independent checks, in the order they ran.
///
/// Built by [`collect`](crate::collect) or from a single failure with
/// [`ValidationError::into_errors`]. Backed by a `NonEmptyVec`, so a failed
/// [`ValidationResult`](crate::ValidationResult) always holds at least one
/// failure. Collections merge with `Semigroup::combine`:
///
/// ```rust
/// use pathcheck::{property_with, ValidationError};
/// use stillwater::prelude::*;
///
/// let name = property_with("Name", || Err(ValidationError::leaf("required")));
/// let email = property_with("Email", || Err(ValidationError::leaf("invalid")));
///
/// let combined = name.unwrap_err().into_errors().combine(email.unwrap_err().into_errors());
/// assert_eq!(combined.to_string(), "Name: required\nEmail: invalid");
/// ```
#[derive(Debug, Clone)]
pub struct PropertyErrors(NonEmptyVec<ValidationError>);

impl PropertyErrors {
    /// Returns `None` when there is nothing to report.
    pub(crate) fn from_failures(failures: Vec<ValidationError>) -> Option<Self> {
        NonEmptyVec::from_vec(failures).map(Self)
    }

    /// The number of failures, at least one.
    pub fn count(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// The failure from the earliest check.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Failures whose resolved path equals `path`.
    ///
    /// Unlabelled leaf failures live at the root path.
    pub fn at_path(&self, path: &FieldPath) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| &e.path() == path).collect()
    }
}

impl ValidationError {
    /// Starts an accumulated collection from this failure.
    pub fn into_errors(self) -> PropertyErrors {
        PropertyErrors(NonEmptyVec::singleton(self))
    }
}

impl Semigroup for PropertyErrors {
    fn combine(self, other: Self) -> Self {
        PropertyErrors(self.0.combine(other.0))
    }
}

// one rendered path per line
impl Display for PropertyErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for PropertyErrors {}

impl IntoIterator for PropertyErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}
