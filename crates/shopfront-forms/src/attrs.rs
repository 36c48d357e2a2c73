//! HTML attribute maps for widgets.
//!
//! [`Attrs`] is an ordered map of attribute name to [`AttrValue`]. Ordering
//! by name keeps rendered markup deterministic.

use std::collections::BTreeMap;

use serde::Serialize;

/// The value of a single HTML attribute.
///
/// `Bool(true)` renders as a bare attribute (`disabled`), `Bool(false)` is
/// left out entirely, and text renders as `name="value"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// A textual value.
    Text(String),
    /// A boolean (flag) attribute.
    Bool(bool),
}

impl AttrValue {
    /// Returns the textual value, if this is a text attribute.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bool(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// An ordered set of HTML attributes.
///
/// # Examples
///
/// ```
/// use shopfront_forms::Attrs;
///
/// let attrs = Attrs::new()
///     .with("id", "id_when")
///     .with("required", true)
///     .with("hidden", false);
/// assert_eq!(attrs.flatten(), r#" id="id_when" required"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attrs(BTreeMap<String, AttrValue>);

impl Attrs {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts an attribute, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Inserts an attribute only if it is not present yet.
    pub fn set_default(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.entry(name.into()).or_insert_with(|| value.into());
    }

    /// Returns an attribute value.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// Returns a text attribute value.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_text)
    }

    /// Removes an attribute.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.0.remove(name)
    }

    /// Returns `true` if the attribute is present.
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Copies every attribute of `other` into `self`, overwriting duplicates.
    pub fn extend(&mut self, other: &Self) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    /// Returns a new set with `other` layered over `self`.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.extend(other);
        merged
    }

    /// Iterates over attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.0.iter()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the attributes for inclusion in a tag, each with a leading
    /// space and every value escaped the way template autoescaping does.
    pub fn flatten(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| match value {
                AttrValue::Text(text) => format!(r#" {name}="{}""#, tera::escape_html(text)),
                AttrValue::Bool(true) => format!(" {name}"),
                AttrValue::Bool(false) => String::new(),
            })
            .collect()
    }

    /// Converts the attributes into a JSON object for template contexts.
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .0
            .iter()
            .map(|(name, value)| {
                let value = match value {
                    AttrValue::Text(text) => serde_json::Value::String(text.clone()),
                    AttrValue::Bool(set) => serde_json::Value::Bool(*set),
                };
                (name.clone(), value)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
