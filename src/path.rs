//! Property path representation for locating failures in nested values.
//!
//! This module provides [`FieldPath`], [`PathSegment`] and [`IndexKey`] for
//! building and rendering paths such as `Bars[1].Baz`.

use std::fmt::{self, Debug, Display};

/// A key identifying one element of a collection-valued property.
///
/// Integer keys render as plain decimals (`[1]`), string keys render quoted
/// (`["home"]`), and any other value is captured through its `Debug` output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndexKey {
    /// A position in a sequence.
    Position(usize),
    /// A signed integer key.
    Signed(i64),
    /// An unsigned integer key.
    Unsigned(u64),
    /// A string key, typically from a map.
    Key(String),
    /// Any other key, pre-rendered with its `Debug` representation.
    Other(String),
}

impl IndexKey {
    /// Captures an arbitrary key through its `Debug` representation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pathcheck::IndexKey;
    ///
    /// let key = IndexKey::debug(&(2, 'x'));
    /// assert_eq!(key.to_string(), "(2, 'x')");
    /// ```
    pub fn debug(key: &impl Debug) -> Self {
        IndexKey::Other(format!("{:?}", key))
    }
}

impl Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKey::Position(i) => write!(f, "{}", i),
            IndexKey::Signed(i) => write!(f, "{}", i),
            IndexKey::Unsigned(i) => write!(f, "{}", i),
            IndexKey::Key(key) => write!(f, "{:?}", key),
            IndexKey::Other(rendered) => f.write_str(rendered),
        }
    }
}

macro_rules! integer_index_key {
    ($variant:ident($repr:ty): $($t:ty),*) => {
        $(
            impl From<$t> for IndexKey {
                fn from(i: $t) -> Self {
                    IndexKey::$variant(<$repr>::from(i))
                }
            }

            impl From<&$t> for IndexKey {
                fn from(i: &$t) -> Self {
                    IndexKey::from(*i)
                }
            }
        )*
    };
}

integer_index_key!(Position(usize): usize);
integer_index_key!(Signed(i64): i8, i16, i32, i64);
integer_index_key!(Unsigned(u64): u8, u16, u32, u64);

// wider than 64 bits, or platform-sized: keep the value when it fits
macro_rules! wide_index_key {
    ($($t:ty => $variant:ident($repr:ty)),*) => {
        $(
            impl From<$t> for IndexKey {
                fn from(i: $t) -> Self {
                    <$repr>::try_from(i)
                        .map(IndexKey::$variant)
                        .unwrap_or_else(|_| IndexKey::Other(i.to_string()))
                }
            }

            impl From<&$t> for IndexKey {
                fn from(i: &$t) -> Self {
                    IndexKey::from(*i)
                }
            }
        )*
    };
}

wide_index_key!(i128 => Signed(i64), u128 => Unsigned(u64), isize => Signed(i64));

impl From<&str> for IndexKey {
    fn from(key: &str) -> Self {
        IndexKey::Key(key.to_string())
    }
}

impl From<String> for IndexKey {
    fn from(key: String) -> Self {
        IndexKey::Key(key)
    }
}

impl From<&String> for IndexKey {
    fn from(key: &String) -> Self {
        IndexKey::Key(key.clone())
    }
}

impl From<char> for IndexKey {
    fn from(key: char) -> Self {
        IndexKey::Other(format!("{:?}", key))
    }
}

/// A segment of a property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named property (e.g., `Bars`, `Baz`)
    Field(String),
    /// A collection element (e.g., `[0]`, `["home"]`)
    Index(IndexKey),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(key: impl Into<IndexKey>) -> Self {
        PathSegment::Index(key.into())
    }
}

/// A fully resolved path to a nested property.
///
/// `FieldPath` is what [`PropertyError::path`](crate::PropertyError::path)
/// produces. Fields are joined with `.` and indices are appended in brackets
/// with no separator.
///
/// # Example
///
/// ```rust
/// use pathcheck::FieldPath;
///
/// let path = FieldPath::root()
///     .push_field("Bars")
///     .push_index(1usize)
///     .push_field("Baz");
///
/// assert_eq!(path.to_string(), "Bars[1].Baz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates an empty path representing the value being validated.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, key: impl Into<IndexKey>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(key.into()));
        Self { segments }
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Returns true if this path has no segments.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(key) => write!(f, "[{}]", key)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let path = FieldPath::root();
        assert!(path.is_root());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_leading_index() {
        let path = FieldPath::root().push_index(0usize).push_field("Baz");
        assert_eq!(path.to_string(), "[0].Baz");
    }

    #[test]
    fn test_string_key_is_quoted() {
        let path = FieldPath::from_field("Addresses").push_index("home");
        assert_eq!(path.to_string(), r#"Addresses["home"]"#);
    }

    #[test]
    fn test_signed_key() {
        let path = FieldPath::from_field("Offsets").push_index(-3i32);
        assert_eq!(path.to_string(), "Offsets[-3]");
    }

    #[test]
    fn test_consecutive_indices() {
        let path = FieldPath::from_field("Grid")
            .push_index(2usize)
            .push_index(5usize);
        assert_eq!(path.to_string(), "Grid[2][5]");
    }

    #[test]
    fn test_path_immutability() {
        let base = FieldPath::from_field("Bars");
        let a = base.push_index(0usize);
        let b = base.push_index(1usize);

        assert_eq!(base.to_string(), "Bars");
        assert_eq!(a.to_string(), "Bars[0]");
        assert_eq!(b.to_string(), "Bars[1]");
    }

    #[test]
    fn test_last_segment() {
        let path = FieldPath::from_field("Bars").push_index(4usize);
        assert_eq!(path.last(), Some(&PathSegment::Index(IndexKey::Position(4))));
        assert_eq!(FieldPath::root().last(), None);
    }

    #[test]
    fn test_integer_keys() {
        assert_eq!(IndexKey::from(7u64), IndexKey::Unsigned(7));
        assert_eq!(IndexKey::from(&3usize), IndexKey::Position(3));
        assert_eq!(IndexKey::from(&-2i32), IndexKey::Signed(-2));
        assert_eq!(IndexKey::from(-9isize), IndexKey::Signed(-9));
        assert_eq!(IndexKey::from(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(IndexKey::from(i128::MIN).to_string(), i128::MIN.to_string());
    }

    #[test]
    fn test_debug_key() {
        assert_eq!(IndexKey::debug(&Some(1)).to_string(), "Some(1)");
        assert_eq!(IndexKey::from('k').to_string(), "'k'");
    }
}
