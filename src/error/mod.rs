//! Error types for validation failures.
//!
//! This module provides [`ValidationError`], the error every check returns,
//! [`PropertyError`] for failures labelled with a property path,
//! [`InvalidValue`] for generic "invalid value" leaves, and
//! [`PropertyErrors`] for accumulating several failures.

mod invalid;
mod property_error;
mod property_errors;

pub use invalid::{InvalidToken, InvalidValue};
pub use property_error::{BoxError, PropertyError, ValidationError};
pub use property_errors::PropertyErrors;
