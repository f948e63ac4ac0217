use crate::domain::{ParamValue, Params};

/// Flatten a parameter tree into `http_build_query`-style bracketed pairs.
///
/// A map value under `contacts` becomes `contacts[email]`, a sequence element
/// becomes `contacts[0]`, at any depth. Leaves that are still raw bytes at
/// this point are decoded lossily; the recode pass runs first in the normal
/// pipeline, so this branch only matters for the default UTF-8 configuration.
pub fn flatten(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params.iter() {
        flatten_value(key, value, &mut pairs);
    }
    pairs
}

fn flatten_value(key: &str, value: &ParamValue, pairs: &mut Vec<(String, String)>) {
    match value {
        ParamValue::Text(text) => pairs.push((key.to_owned(), text.clone())),
        ParamValue::Bytes(bytes) => pairs.push((
            key.to_owned(),
            String::from_utf8_lossy(bytes).into_owned(),
        )),
        ParamValue::Map(map) => {
            for (sub_key, sub_value) in map {
                flatten_value(&format!("{key}[{sub_key}]"), sub_value, pairs);
            }
        }
        ParamValue::List(list) => {
            for (index, sub_value) in list.iter().enumerate() {
                flatten_value(&format!("{key}[{index}]"), sub_value, pairs);
            }
        }
    }
}

/// Serialize key/value pairs as an `application/x-www-form-urlencoded` body.
pub fn serialize(pairs: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Parse a form-urlencoded body back into pairs. Test helper for asserting
/// on request bodies.
#[cfg(test)]
pub fn deserialize(body: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect()
}
