//! Items that can be shown as dropdown options.
//!
//! Options are either scalars (strings, numbers) or keyed records. Scalars
//! are searched by their stringified value, keyed records by one field.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// Trait for values that can be listed in a dropdown.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, PartialEq)]
/// struct Country {
///     code: String,
///     name: String,
/// }
///
/// impl OptionItem for Country {
///     fn label(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.name)
///     }
///
///     fn field(&self, key: &str) -> Option<Cow<'_, str>> {
///         match key {
///             "code" => Some(Cow::Borrowed(&self.code)),
///             "label" | "name" => Some(Cow::Borrowed(&self.name)),
///             _ => None,
///         }
///     }
///
///     fn is_keyed(&self) -> bool {
///         true
///     }
/// }
/// ```
pub trait OptionItem: Clone + PartialEq {
    /// Text used when no formatter is configured.
    fn label(&self) -> Cow<'_, str>;

    /// Value of a named field, for keyed options.
    fn field(&self, _key: &str) -> Option<Cow<'_, str>> {
        None
    }

    /// Whether the search filter should look at `field` instead of `label`.
    fn is_keyed(&self) -> bool {
        false
    }

    /// Text the search filter matches against.
    fn search_text(&self, key: &str) -> Option<Cow<'_, str>> {
        if self.is_keyed() {
            self.field(key)
        } else {
            Some(self.label())
        }
    }
}

impl OptionItem for String {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl OptionItem for &str {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }
}

macro_rules! impl_scalar_option {
    ($($ty:ty),*) => {
        $(
            impl OptionItem for $ty {
                fn label(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_scalar_option!(i32, i64, u32, u64, usize, f32, f64, bool, char);

impl OptionItem for BTreeMap<String, String> {
    fn label(&self) -> Cow<'_, str> {
        self.get(crate::config::DEFAULT_SEARCH_KEY)
            .map(|s| Cow::Borrowed(s.as_str()))
            .unwrap_or_else(|| Cow::Owned(format!("{:?}", self)))
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|s| Cow::Borrowed(s.as_str()))
    }

    fn is_keyed(&self) -> bool {
        true
    }
}

impl OptionItem for HashMap<String, String> {
    fn label(&self) -> Cow<'_, str> {
        self.get(crate::config::DEFAULT_SEARCH_KEY)
            .map(|s| Cow::Borrowed(s.as_str()))
            .unwrap_or_else(|| Cow::Owned(format!("{:?}", self)))
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|s| Cow::Borrowed(s.as_str()))
    }

    fn is_keyed(&self) -> bool {
        true
    }
}

/// JSON values, as loaded from option files.
///
/// Strings label as themselves (no quotes), objects as their `label` field
/// when it is a string, anything else as compact JSON.
impl OptionItem for Value {
    fn label(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Object(map) => match map.get(crate::config::DEFAULT_SEARCH_KEY) {
                Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
                _ => Cow::Owned(self.to_string()),
            },
            other => Cow::Owned(other.to_string()),
        }
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        // Non-string fields never match.
        match self.get(key)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            _ => None,
        }
    }

    fn is_keyed(&self) -> bool {
        self.is_object()
    }
}
