//! # Pathcheck
//!
//! Hand-written validation for nested data, with failures reported as a
//! dotted/bracketed path to the field that failed (e.g. `Bars[1].Baz: qux`).
//!
//! ## Overview
//!
//! There is no schema engine and no rule set. Types implement [`Validate`]
//! by hand; this crate supplies the dispatch and error-composition pieces:
//!
//! - [`v`]: calls a value's [`Validate`] impl
//! - [`property`], [`property_with`]: label a failure with a field name
//! - [`index`], [`index_with`], [`elements`]: label a failure with an element key
//! - [`PropertyError`]: the labelled error chain and its path rendering
//! - [`invalid!`]: a generic "invalid value" leaf error
//! - [`collect`]: run independent checks and keep every failure
//!
//! ## Example
//!
//! ```rust
//! use pathcheck::{index_with, property, property_with, v, Validate, ValidationError};
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
//!         property_with("Bars", || {
//!             for (i, bar) in self.bars.iter().enumerate() {
//!                 index_with(i, || v(bar))?;
//!             }
//!             Ok(())
//!         })
//!     }
//! }
//!
//! let foo = Foo {
//!     bars: vec![Bar { baz: Qux(1) }, Bar { baz: Qux(0) }],
//! };
//!
//! let err = v(&foo).unwrap_err();
//! assert_eq!(err.to_string(), "Bars[1].Baz: qux");
//! assert_eq!(err.originating_error().to_string(), "qux");
//! ```

pub mod accumulate;
pub mod compose;
pub mod error;
pub mod path;
pub mod validation;

pub use accumulate::collect;
pub use compose::{elements, index, index_with, property, property_with};
pub use error::{BoxError, InvalidValue, PropertyError, PropertyErrors, ValidationError};
pub use path::{FieldPath, IndexKey, PathSegment};
pub use validation::{v, Validate};

/// Type alias for accumulated validation results using PropertyErrors
pub type ValidationResult<T> = stillwater::Validation<T, PropertyErrors>;
