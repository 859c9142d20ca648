//! The `Validate` capability and its dispatcher.
//!
//! Types opt in by implementing [`Validate`]. The default method body accepts
//! every value, so primitives, strings and collections are vacuously valid,
//! while composite types override it with hand-written checks.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::error::ValidationError;

/// The capability that validatable types implement.
///
/// # Example
///
/// ```rust
/// use pathcheck::{v, Validate, ValidationError};
///
/// struct Port(u16);
///
/// impl Validate for Port {
///     fn validate(&self) -> Result<(), ValidationError> {
///         if self.0 == 0 {
///             return Err("port must be non-zero".into());
///         }
///         Ok(())
///     }
/// }
///
/// assert!(v(&Port(8080)).is_ok());
/// assert_eq!(v(&Port(0)).unwrap_err().to_string(), "port must be non-zero");
/// ```
pub trait Validate {
    /// Checks this value, returning the first failure found.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Validates `value`, returning exactly what its [`Validate`] impl returns.
pub fn v<T: Validate + ?Sized>(value: &T) -> Result<(), ValidationError> {
    value.validate()
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for &mut T {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Rc<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Arc<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}

macro_rules! vacuously_valid {
    ($($t:ty),* $(,)?) => {
        $(impl Validate for $t {})*
    };
}

vacuously_valid!(
    (), bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, f32, f64,
);

// element checks are explicit, see `index` and `elements`
impl<T> Validate for [T] {}
impl<T, const N: usize> Validate for [T; N] {}
impl<T> Validate for Vec<T> {}
impl<T> Validate for VecDeque<T> {}
impl<T> Validate for HashSet<T> {}
impl<T> Validate for BTreeSet<T> {}
impl<K, V> Validate for HashMap<K, V> {}
impl<K, V> Validate for BTreeMap<K, V> {}
