use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One value in a request parameter tree.
///
/// UniSender methods accept arbitrarily nested parameter structures
/// (`contacts[0][email]=...`). [`ParamValue::Bytes`] carries text in a legacy
/// source encoding; it is normalized to UTF-8 [`ParamValue::Text`] before the
/// request body is serialized.
pub enum ParamValue {
    /// UTF-8 text, sent as-is.
    Text(String),
    /// Raw bytes in the client's configured source encoding.
    Bytes(Vec<u8>),
    /// Nested string-keyed mapping.
    Map(BTreeMap<String, ParamValue>),
    /// Nested sequence.
    List(Vec<ParamValue>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for ParamValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<bool> for ParamValue {
    // http_build_query serializes booleans as 1/0.
    fn from(value: bool) -> Self {
        Self::Text(if value { "1" } else { "0" }.to_owned())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Params> for ParamValue {
    fn from(value: Params) -> Self {
        Self::Map(value.0)
    }
}

impl From<Vec<ParamValue>> for ParamValue {
    fn from(value: Vec<ParamValue>) -> Self {
        Self::List(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Request parameter tree passed to [`crate::UnisenderClient::call`].
///
/// Keys are kept in sorted order so serialized bodies are deterministic.
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, consuming and returning the map for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a parameter in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Whether the key maps to a non-empty value.
    ///
    /// Matches the official PHP client's `empty()` check: a missing key, an
    /// empty string, and `"0"` all count as empty.
    pub fn has_non_empty(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(ParamValue::Text(text)) => !text.is_empty() && text != "0",
            Some(ParamValue::Bytes(bytes)) => !bytes.is_empty(),
            Some(ParamValue::Map(map)) => !map.is_empty(),
            Some(ParamValue::List(list)) => !list.is_empty(),
            None => false,
        }
    }

    /// Number of top-level parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over top-level entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    pub(crate) fn into_inner(self) -> BTreeMap<String, ParamValue> {
        self.0
    }

    pub(crate) fn from_inner(inner: BTreeMap<String, ParamValue>) -> Self {
        Self(inner)
    }
}

impl FromIterator<(String, ParamValue)> for Params {
    fn from_iter<T: IntoIterator<Item = (String, ParamValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_impls_cover_scalars() {
        assert_eq!(ParamValue::from("a"), ParamValue::Text("a".to_owned()));
        assert_eq!(ParamValue::from(42_i64), ParamValue::Text("42".to_owned()));
        assert_eq!(ParamValue::from(true), ParamValue::Text("1".to_owned()));
        assert_eq!(ParamValue::from(false), ParamValue::Text("0".to_owned()));
        assert_eq!(
            ParamValue::from(vec![0xE9_u8]),
            ParamValue::Bytes(vec![0xE9])
        );
    }

    #[test]
    fn set_chains_and_keeps_sorted_order() {
        let params = Params::new().set("b", "2").set("a", "1");
        let keys: Vec<_> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn has_non_empty_mirrors_php_empty() {
        let params = Params::new()
            .set("filled", "value")
            .set("blank", "")
            .set("zero", "0");
        assert!(params.has_non_empty("filled"));
        assert!(!params.has_non_empty("blank"));
        assert!(!params.has_non_empty("zero"));
        assert!(!params.has_non_empty("missing"));
    }

    #[test]
    fn nested_params_convert_to_map_value() {
        let nested = Params::new().set("email", "a@b.c");
        let params = Params::new().set("contact", nested);
        assert!(matches!(params.get("contact"), Some(ParamValue::Map(_))));
    }
}
