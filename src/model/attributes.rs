//! Attribute lists and values

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value of a single attribute
///
/// Plain values are emitted inside double quotes; HTML values are emitted
/// between angle brackets with their contents untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "AttrValueRepr", into = "AttrValueRepr")]
pub enum AttrValue {
    Plain(String),
    Html(String),
}

impl AttrValue {
    pub fn as_str(&self) -> &str {
        match self {
            AttrValue::Plain(s) | AttrValue::Html(s) => s,
        }
    }

    pub fn is_html(&self) -> bool {
        matches!(self, AttrValue::Html(_))
    }
}

/// Mark a value as raw HTML-like markup
pub fn html(markup: impl Into<String>) -> AttrValue {
    AttrValue::Html(markup.into())
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Plain(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Plain(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Plain(value.clone())
    }
}

macro_rules! plain_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    AttrValue::Plain(value.to_string())
                }
            }
        )*
    };
}

plain_from_display!(bool, i32, i64, u32, u64, usize, f32, f64);

// Description files may carry numbers and booleans; they all become plain
// strings in the model.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AttrValueRepr {
    Html { html: String },
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl From<AttrValueRepr> for AttrValue {
    fn from(repr: AttrValueRepr) -> Self {
        match repr {
            AttrValueRepr::Html { html } => AttrValue::Html(html),
            AttrValueRepr::Text(s) => AttrValue::Plain(s),
            AttrValueRepr::Integer(i) => AttrValue::Plain(i.to_string()),
            AttrValueRepr::Float(f) => AttrValue::Plain(f.to_string()),
            AttrValueRepr::Bool(b) => AttrValue::Plain(b.to_string()),
        }
    }
}

impl From<AttrValue> for AttrValueRepr {
    fn from(value: AttrValue) -> Self {
        match value {
            AttrValue::Plain(s) => AttrValueRepr::Text(s),
            AttrValue::Html(html) => AttrValueRepr::Html { html },
        }
    }
}

/// A `[key=value;...]` group attached to a statement
///
/// Keys are unique; setting a key twice keeps the last value. Entries are
/// emitted in key order so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeList(BTreeMap<String, AttrValue>);

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeList
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = AttributeList::new();
        for (key, value) in iter {
            list.set(key, value);
        }
        list
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for AttributeList
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Build an [`AttributeList`](crate::model::AttributeList) from
/// `key => value` pairs
///
/// ```
/// use dotweave::{attrs, html};
///
/// let list = attrs! { "shape" => "box", "label" => html("<b>hi</b>") };
/// assert_eq!(list.len(), 2);
/// assert!(attrs! {}.is_empty());
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::model::AttributeList::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut list = $crate::model::AttributeList::new();
        $(
            list.set($key, $value);
        )+
        list
    }};
}
