//! Path-labelled validation errors.
//!
//! A failing check produces a [`ValidationError`]. Each property or index
//! layer that sees the failure wraps it in exactly one [`PropertyError`],
//! so the error returned from the root value is a chain running from the
//! outermost property down to the leaf cause.

use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Arc;

use crate::error::InvalidValue;
use crate::path::{FieldPath, IndexKey, PathSegment};

/// A boxed leaf error, as accepted by [`ValidationError::leaf`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// The error returned by a failing [`Validate`](crate::Validate) check.
///
/// Either a [`PropertyError`] carrying path context, or a leaf cause that the
/// library treats as opaque.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    /// A failure wrapped with a property name and/or index.
    #[error(transparent)]
    Property(#[from] PropertyError),
    /// A generic invalid-value failure built with [`invalid!`](crate::invalid).
    #[error(transparent)]
    Invalid(#[from] InvalidValue),
    /// Any other domain error.
    #[error("{0}")]
    Leaf(Arc<dyn Error + Send + Sync + 'static>),
}

impl ValidationError {
    /// Wraps a domain error (or a plain message) as a leaf failure.
    ///
    /// A boxed `ValidationError`, `PropertyError` or `InvalidValue` is
    /// recovered as its own variant, so a path never hides inside a leaf.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pathcheck::ValidationError;
    ///
    /// let err = ValidationError::leaf("qux");
    /// assert_eq!(err.to_string(), "qux");
    /// ```
    pub fn leaf(error: impl Into<BoxError>) -> Self {
        Self::from(error.into())
    }

    /// Returns the path context if this is a [`PropertyError`].
    pub fn as_property(&self) -> Option<&PropertyError> {
        match self {
            ValidationError::Property(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the leaf cause, unwrapping any property layers.
    pub fn originating_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        match self {
            ValidationError::Property(err) => err.originating_error(),
            ValidationError::Invalid(err) => err,
            ValidationError::Leaf(err) => err.as_ref(),
        }
    }

    /// Returns the fully resolved path of this failure.
    ///
    /// Leaf errors have not been labelled yet, so their path is the root.
    pub fn path(&self) -> FieldPath {
        match self {
            ValidationError::Property(err) => err.path(),
            _ => FieldPath::root(),
        }
    }
}

impl From<BoxError> for ValidationError {
    fn from(error: BoxError) -> Self {
        let error = match error.downcast::<ValidationError>() {
            Ok(err) => return *err,
            Err(error) => error,
        };
        let error = match error.downcast::<PropertyError>() {
            Ok(err) => return ValidationError::Property(*err),
            Err(error) => error,
        };
        match error.downcast::<InvalidValue>() {
            Ok(err) => ValidationError::Invalid(*err),
            Err(error) => ValidationError::Leaf(Arc::from(error)),
        }
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        ValidationError::leaf(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        ValidationError::leaf(message)
    }
}

/// A validation failure of a (possibly nested) property or collection element.
///
/// `PropertyError` is immutable: it is created once when a property or index
/// check fails and returned up the call stack. Its `Display` output is the
/// dotted/bracketed path followed by the leaf message.
///
/// # Example
///
/// ```rust
/// use pathcheck::{index_with, property, property_with, Validate, ValidationError};
///
/// struct Qux(i32);
///
/// impl Validate for Qux {
///     fn validate(&self) -> Result<(), ValidationError> {
///         if self.0 == 0 {
///             return Err("qux".into());
///         }
///         Ok(())
///     }
/// }
///
/// let err = property_with("Bars", || index_with(1usize, || property("Baz", &Qux(0))))
///     .unwrap_err();
///
/// assert_eq!(err.to_string(), "Bars[1].Baz: qux");
/// ```
#[derive(Debug, Clone)]
pub struct PropertyError {
    property: String,
    index: Option<IndexKey>,
    inner: Box<ValidationError>,
}

impl PropertyError {
    /// Creates a layer labelled with a property name.
    pub fn field(property: impl Into<String>, inner: ValidationError) -> Self {
        Self {
            property: property.into(),
            index: None,
            inner: Box::new(inner),
        }
    }

    /// Creates a layer labelled with a collection index and no property name.
    pub fn element(index: impl Into<IndexKey>, inner: ValidationError) -> Self {
        Self {
            property: String::new(),
            index: Some(index.into()),
            inner: Box::new(inner),
        }
    }

    /// The raw property name of this layer (empty for index-only layers).
    pub fn name(&self) -> &str {
        &self.property
    }

    /// The index key of this layer, if any.
    pub fn index(&self) -> Option<&IndexKey> {
        self.index.as_ref()
    }

    /// The wrapped error.
    pub fn inner(&self) -> &ValidationError {
        &self.inner
    }

    fn prefix(&self) -> String {
        match &self.index {
            Some(index) => format!("{}[{}]", self.property, index),
            None => self.property.clone(),
        }
    }

    /// Returns the leaf cause, never another `PropertyError`.
    pub fn originating_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        match self.inner.as_ref() {
            ValidationError::Property(inner) => inner.originating_error(),
            ValidationError::Invalid(err) => err,
            ValidationError::Leaf(err) => err.as_ref(),
        }
    }

    /// The name of the invalid property.
    ///
    /// This looks at most one layer deep: when the wrapped error is another
    /// `PropertyError`, its name is appended after a `.`, and deeper layers are
    /// ignored. Use [`path`](Self::path) for the complete location.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pathcheck::{property_with, ValidationError};
    ///
    /// let err = property_with("A", || {
    ///     property_with("B", || property_with("C", || Err(ValidationError::leaf("bad"))))
    /// })
    /// .unwrap_err();
    ///
    /// let prop = err.as_property().unwrap();
    /// assert_eq!(prop.property(), "A.B");
    /// assert_eq!(prop.path().to_string(), "A.B.C");
    /// ```
    pub fn property(&self) -> String {
        let prefix = self.prefix();
        match self.inner.as_ref() {
            ValidationError::Property(inner) => format!("{}.{}", prefix, inner.property),
            _ => prefix,
        }
    }

    /// Returns the complete path from this layer down to the leaf.
    pub fn path(&self) -> FieldPath {
        let mut path = FieldPath::root();
        let mut node = self;
        loop {
            if !node.property.is_empty() {
                path.push(PathSegment::Field(node.property.clone()));
            }
            if let Some(index) = &node.index {
                path.push(PathSegment::Index(index.clone()));
            }
            match node.inner.as_ref() {
                ValidationError::Property(inner) => node = inner,
                _ => return path,
            }
        }
    }
}

impl Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix())?;
        match self.inner.as_ref() {
            // index-only layers fuse with the preceding name: `Bars[1]`
            ValidationError::Property(inner) if inner.property.is_empty() => {
                write!(f, "{}", inner)
            }
            ValidationError::Property(inner) => write!(f, ".{}", inner),
            leaf => write!(f, ": {}", leaf),
        }
    }
}

impl Error for PropertyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
    assert_send::<PropertyError>();
    assert_sync::<PropertyError>();
    assert_send::<crate::error::PropertyErrors>();
    assert_sync::<crate::error::PropertyErrors>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(msg: &str) -> ValidationError {
        ValidationError::leaf(msg.to_string())
    }

    #[test]
    fn test_single_property() {
        let err = PropertyError::field("Baz", leaf("qux"));
        assert_eq!(err.to_string(), "Baz: qux");
        assert_eq!(err.property(), "Baz");
        assert_eq!(err.path().to_string(), "Baz");
    }

    #[test]
    fn test_nested_properties_use_dot() {
        let err = PropertyError::field("A", PropertyError::field("B", leaf("bad")).into());
        assert_eq!(err.to_string(), "A.B: bad");
    }

    #[test]
    fn test_index_fuses_with_property() {
        let err = PropertyError::field(
            "Bars",
            PropertyError::element(1usize, PropertyError::field("Baz", leaf("qux")).into()).into(),
        );
        assert_eq!(err.to_string(), "Bars[1].Baz: qux");
        assert_eq!(err.path().to_string(), "Bars[1].Baz");
    }

    #[test]
    fn test_index_only_leaf() {
        let err = PropertyError::element(3usize, leaf("empty"));
        assert_eq!(err.to_string(), "[3]: empty");
        assert_eq!(err.property(), "[3]");
    }

    #[test]
    fn test_string_index_is_quoted() {
        let err = PropertyError::field(
            "Homes",
            PropertyError::element("work", leaf("missing street")).into(),
        );
        assert_eq!(err.to_string(), r#"Homes["work"]: missing street"#);
    }

    #[test]
    fn test_empty_name_keeps_separator() {
        let err = PropertyError::field("", leaf("bad"));
        assert_eq!(err.to_string(), ": bad");
        assert!(err.path().is_root());
    }

    #[test]
    fn test_property_peeks_one_level() {
        let err = PropertyError::field(
            "A",
            PropertyError::field("B", PropertyError::field("C", leaf("x")).into()).into(),
        );
        assert_eq!(err.property(), "A.B");
        assert_eq!(err.to_string(), "A.B.C: x");
    }

    #[test]
    fn test_property_before_index_only_layer() {
        let err = PropertyError::field(
            "Bars",
            PropertyError::element(0usize, leaf("x")).into(),
        );
        assert_eq!(err.property(), "Bars.");
        assert_eq!(err.path().to_string(), "Bars[0]");
    }

    #[test]
    fn test_originating_error_skips_layers() {
        let err = PropertyError::field(
            "A",
            PropertyError::element(2usize, PropertyError::field("B", leaf("root cause")).into())
                .into(),
        );
        let origin = err.originating_error();
        assert_eq!(origin.to_string(), "root cause");
        assert!(origin.downcast_ref::<PropertyError>().is_none());
    }

    #[test]
    fn test_source_chain() {
        let err = PropertyError::field("A", leaf("bad"));
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("bad"));
    }

    #[test]
    fn test_rendering_is_pure() {
        let err = PropertyError::field("A", PropertyError::element(1usize, leaf("x")).into());
        assert_eq!(err.to_string(), err.to_string());
        assert_eq!(err.property(), err.property());
    }

    #[test]
    fn test_leaf_recovers_typed_errors() {
        let chain = PropertyError::field("B", leaf("x"));

        let err = ValidationError::leaf(chain.clone());
        assert_eq!(err.as_property().map(|p| p.name()), Some("B"));

        let boxed: BoxError = Box::new(ValidationError::from(chain));
        assert!(ValidationError::from(boxed).as_property().is_some());

        let err = ValidationError::leaf(InvalidValue::Bare);
        assert!(matches!(err, ValidationError::Invalid(InvalidValue::Bare)));
    }

    #[test]
    fn test_leaf_path_is_root() {
        assert!(leaf("x").path().is_root());
        assert!(leaf("x").as_property().is_none());
    }
}
