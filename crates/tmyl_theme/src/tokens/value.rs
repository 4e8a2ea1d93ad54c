//! Token values and token maps

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Ordered mapping of token name to value.
///
/// Insertion order is significant: declaration emission walks the map in
/// stored order, and merges append new keys at the end.
pub type TokenMap = IndexMap<String, TokenValue>;

/// A single node of the token tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Text(String),
    List(Vec<TokenValue>),
    Map(TokenMap),
}

impl TokenValue {
    /// Borrow the nested map, if this node is one
    pub fn as_map(&self) -> Option<&TokenMap> {
        match self {
            TokenValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut TokenMap> {
        match self {
            TokenValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this node is a leaf (anything but a nested map)
    pub fn is_leaf(&self) -> bool {
        !matches!(self, TokenValue::Map(_))
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{n}"),
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            TokenValue::Map(map) => {
                // Maps are flattened by the emitter; this only shows up in debugging output.
                write!(f, "{{{} tokens}}", map.len())
            }
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Text(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Number(value)
    }
}

impl From<i32> for TokenValue {
    fn from(value: i32) -> Self {
        TokenValue::Number(value.into())
    }
}

impl From<u32> for TokenValue {
    fn from(value: u32) -> Self {
        TokenValue::Number(value.into())
    }
}

impl From<TokenMap> for TokenValue {
    fn from(value: TokenMap) -> Self {
        TokenValue::Map(value)
    }
}

impl<T: Into<TokenValue>> From<Vec<T>> for TokenValue {
    fn from(values: Vec<T>) -> Self {
        TokenValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Build a [`TokenMap`] literal, nesting with braces.
///
/// ```
/// use tmyl_theme::token_map;
///
/// let partial = token_map! {
///     "colors" => { "primary" => "#ff0000" },
///     "zIndex" => { "modal" => 1050, "behind" => -1 },
/// };
/// assert_eq!(partial.len(), 2);
/// ```
///
/// Values are single token trees (literals, `{ .. }`, `[ .. ]`) or a negated
/// literal; wrap any other expression in parentheses.
#[macro_export]
macro_rules! token_map {
    () => {
        $crate::TokenMap::new()
    };
    ($($body:tt)+) => {{
        let mut map = $crate::TokenMap::new();
        $crate::__token_entries!(map; $($body)+);
        map
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __token_entries {
    ($map:ident;) => {};
    ($map:ident; $key:expr => - $value:literal $(, $($rest:tt)*)?) => {
        $map.insert(::std::string::String::from($key), $crate::TokenValue::from(-$value));
        $( $crate::__token_entries!($map; $($rest)*); )?
    };
    ($map:ident; $key:expr => $value:tt $(, $($rest:tt)*)?) => {
        $map.insert(::std::string::String::from($key), $crate::token_value!($value));
        $( $crate::__token_entries!($map; $($rest)*); )?
    };
}

/// Build a single [`TokenValue`]; see [`token_map!`].
#[macro_export]
macro_rules! token_value {
    ({ $($inner:tt)* }) => {
        $crate::TokenValue::Map($crate::token_map!($($inner)*))
    };
    ([ $($item:expr),* $(,)? ]) => {
        $crate::TokenValue::List(::std::vec![$($crate::TokenValue::from($item)),*])
    };
    ($value:expr) => {
        $crate::TokenValue::from($value)
    };
}
