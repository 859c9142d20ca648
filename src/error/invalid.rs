//! Generic "invalid value" leaf errors.

use std::fmt::{Debug, Display};

/// An error describing an invalid value.
///
/// Usually built with the [`invalid!`](crate::invalid) macro:
///
/// ```rust
/// use pathcheck::invalid;
///
/// assert_eq!(invalid!().to_string(), "Invalid");
/// assert_eq!(invalid!("foo").to_string(), r#"Invalid: "foo""#);
/// assert_eq!(invalid!("foo", "bar").to_string(), r#"Invalid foo: "bar""#);
/// assert_eq!(invalid!("foo", "bar", "baz").to_string(), r#"Invalid foo bar: "baz""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidValue {
    /// No detail was given.
    #[error("Invalid")]
    Bare,
    /// Only the offending value was given.
    #[error("Invalid: {value}")]
    Value {
        /// `Debug` rendering of the value.
        value: String,
    },
    /// A description followed by the offending value.
    #[error("Invalid {description}: {value}")]
    Described {
        /// Space-joined description words.
        description: String,
        /// `Debug` rendering of the value.
        value: String,
    },
}

impl InvalidValue {
    /// Creates an error naming only the offending value.
    pub fn value(value: &impl Debug) -> Self {
        InvalidValue::Value {
            value: format!("{:?}", value),
        }
    }

    /// Creates an error with a description and the offending value.
    pub fn described(description: impl Display, value: &impl Debug) -> Self {
        InvalidValue::Described {
            description: description.to_string(),
            value: format!("{:?}", value),
        }
    }

    /// Builds the error from macro tokens: every token but the last is a
    /// description word, the last is the offending value.
    pub fn from_tokens(tokens: Vec<InvalidToken>) -> Self {
        let mut tokens = tokens;
        let Some(last) = tokens.pop() else {
            return InvalidValue::Bare;
        };
        if tokens.is_empty() {
            return InvalidValue::Value { value: last.debug };
        }
        let description = tokens
            .into_iter()
            .map(|token| token.display)
            .collect::<Vec<_>>()
            .join(" ");
        InvalidValue::Described {
            description,
            value: last.debug,
        }
    }
}

/// One argument of [`invalid!`](crate::invalid), rendered both ways.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct InvalidToken {
    display: String,
    debug: String,
}

impl InvalidToken {
    pub fn new<T: Display + Debug + ?Sized>(token: &T) -> Self {
        Self {
            display: token.to_string(),
            debug: format!("{:?}", token),
        }
    }
}

/// Builds an [`InvalidValue`] from any number of tokens.
///
/// With no tokens the message is `Invalid`. With one token it is
/// `Invalid: <token:?>`. With more, the leading tokens are space-joined with
/// `Display` and the last one is shown with `Debug`. Every token must
/// implement both; use [`InvalidValue::described`] for values that only
/// implement `Debug`.
#[macro_export]
macro_rules! invalid {
    () => {
        $crate::InvalidValue::Bare
    };
    ($($token:expr),+ $(,)?) => {
        $crate::InvalidValue::from_tokens(::std::vec![
            $($crate::error::InvalidToken::new(&$token)),+
        ])
    };
}
