//! A dictionary that can hold multiple values per key.
//!
//! Submitted form data may repeat a field name; [`MultiValueDict`] keeps every
//! value while [`get`](MultiValueDict::get) answers with the last one.

use std::borrow::Borrow;
use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

/// A dictionary that maps keys to lists of values.
///
/// # Examples
///
/// ```
/// use shopfront_core::utils::MultiValueDict;
///
/// let mut d: MultiValueDict<String, String> = MultiValueDict::new();
/// d.append("tag".to_string(), "red".to_string());
/// d.append("tag".to_string(), "blue".to_string());
///
/// assert_eq!(d.get("tag").map(String::as_str), Some("blue"));
/// assert_eq!(d.get_list("tag").map(<[String]>::len), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct MultiValueDict<K: Eq + Hash, V> {
    inner: HashMap<K, Vec<V>>,
}

impl<K: Eq + Hash, V> Default for MultiValueDict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> MultiValueDict<K, V> {
    /// Creates an empty `MultiValueDict`.
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Returns the **last** value for the key, or `None` if absent or empty.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key).and_then(|v| v.last())
    }

    /// Returns all values for the key, or `None` if the key is absent.
    pub fn get_list<Q>(&self, key: &Q) -> Option<&[V]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key).map(Vec::as_slice)
    }

    /// Sets the value for a key, replacing any existing values.
    pub fn set(&mut self, key: K, value: V) {
        self.inner.insert(key, vec![value]);
    }

    /// Appends a value to the list for the given key.
    pub fn append(&mut self, key: K, value: V) {
        self.inner.entry(key).or_default().push(value);
    }

    /// Removes a key and returns its values.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Vec<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(key)
    }

    /// Returns `true` if the dictionary contains the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> hash_map::Keys<'_, K, Vec<V>> {
        self.inner.keys()
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the dictionary contains no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over (key, value-list) pairs.
    pub fn iter(&self) -> hash_map::Iter<'_, K, Vec<V>> {
        self.inner.iter()
    }
}

impl<'a, K: Eq + Hash, V> IntoIterator for &'a MultiValueDict<K, V> {
    type Item = (&'a K, &'a Vec<V>);
    type IntoIter = hash_map::Iter<'a, K, Vec<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> MultiValueDict<String, String> {
        MultiValueDict::new()
    }

    #[test]
    fn test_new_is_empty() {
        let d = dict();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
    }

    #[test]
    fn test_append_and_get_returns_last() {
        let mut d = dict();
        d.append("color".into(), "red".into());
        d.append("color".into(), "blue".into());

        assert_eq!(d.get("color").map(String::as_str), Some("blue"));
        assert_eq!(
            d.get_list("color"),
            Some(&["red".to_string(), "blue".to_string()][..])
        );
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn test_set_replaces_existing() {
        let mut d = dict();
        d.append("k".into(), "a".into());
        d.append("k".into(), "b".into());
        d.set("k".into(), "c".into());
        assert_eq!(d.get_list("k"), Some(&["c".to_string()][..]));
    }

    #[test]
    fn test_missing_key() {
        let d = dict();
        assert_eq!(d.get("missing"), None);
        assert_eq!(d.get_list("missing"), None);
        assert!(!d.contains_key("missing"));
    }

    #[test]
    fn test_remove() {
        let mut d = dict();
        d.set("k".into(), "v".into());
        assert_eq!(d.remove("k"), Some(vec!["v".to_string()]));
        assert!(d.is_empty());
    }

    #[test]
    fn test_iter() {
        let mut d = dict();
        d.append("a".into(), "1".into());
        d.append("a".into(), "2".into());
        d.append("b".into(), "3".into());

        let items: HashMap<_, _> = d.iter().map(|(k, v)| (k.clone(), v.len())).collect();
        assert_eq!(items.get("a"), Some(&2));
        assert_eq!(items.get("b"), Some(&1));
    }
}
