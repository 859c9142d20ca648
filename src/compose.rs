//! Property and index composers.
//!
//! Hand-written [`Validate`] impls call these on their fields and elements.
//! Each composer runs a check and, if it fails, wraps the failure in exactly
//! one [`PropertyError`] layer naming the field or element.
//!
//! # Example
//!
//! ```rust
//! use pathcheck::{elements, property, property_with, v, Validate, ValidationError};
//!
//! struct Qux(i32);
//!
//! impl Validate for Qux {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         if self.0 == 0 {
//!             return Err("qux".into());
//!         }
//!         Ok(())
//!     }
//! }
//!
//! struct Bar {
//!     baz: Qux,
//! }
//!
//! impl Validate for Bar {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         property("Baz", &self.baz)
//!     }
//! }
//!
//! struct Foo {
//!     bars: Vec<Bar>,
//! }
//!
//! impl Validate for Foo {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         property_with("Bars", || elements(&self.bars))
//!     }
//! }
//!
//! let foo = Foo {
//!     bars: vec![Bar { baz: Qux(1) }, Bar { baz: Qux(0) }],
//! };
//! assert_eq!(v(&foo).unwrap_err().to_string(), "Bars[1].Baz: qux");
//! ```

use std::fmt::Display;

use tracing::trace;

use crate::error::{PropertyError, ValidationError};
use crate::path::IndexKey;
use crate::validation::{v, Validate};

/// Validates a property value, labelling any failure with `name`.
///
/// Shorthand for `property_with(name, || v(value))`.
pub fn property<T: Validate + ?Sized>(name: &str, value: &T) -> Result<(), ValidationError> {
    property_with(name, || v(value))
}

/// Runs an arbitrary check, labelling any failure with `name`.
///
/// Use this when a property needs more than a single dispatch, such as a
/// loop over a collection. A failure is always wrapped in one new layer, even
/// if it already carries a path.
pub fn property_with<N, F>(name: N, validate: F) -> Result<(), ValidationError>
where
    N: Display,
    F: FnOnce() -> Result<(), ValidationError>,
{
    validate().map_err(|err| {
        let property = name.to_string();
        trace!(property = %property, "property failed validation");
        PropertyError::field(property, err).into()
    })
}

/// Validates a collection element, labelling any failure with `key`.
///
/// Shorthand for `index_with(key, || v(value))`.
pub fn index<K, T>(key: K, value: &T) -> Result<(), ValidationError>
where
    K: Into<IndexKey>,
    T: Validate + ?Sized,
{
    index_with(key, || v(value))
}

/// Runs an arbitrary per-element check, labelling any failure with `key`.
///
/// The resulting layer has an empty property name, so it renders fused to
/// the enclosing property: `Bars[1]` rather than `Bars.[1]`.
pub fn index_with<K, F>(key: K, validate: F) -> Result<(), ValidationError>
where
    K: Into<IndexKey>,
    F: FnOnce() -> Result<(), ValidationError>,
{
    validate().map_err(|err| {
        let key = key.into();
        trace!(index = %key, "element failed validation");
        PropertyError::element(key, err).into()
    })
}

/// Validates every element in order, stopping at the first failure.
///
/// Elements are labelled with their position.
pub fn elements<I>(items: I) -> Result<(), ValidationError>
where
    I: IntoIterator,
    I::Item: Validate,
{
    for (i, item) in items.into_iter().enumerate() {
        index(i, &item)?;
    }
    Ok(())
}
