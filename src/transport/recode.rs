use std::collections::BTreeMap;

use encoding_rs::Encoding;

use crate::domain::{ParamValue, Params};

/// Normalize every byte-scalar leaf of a parameter tree to UTF-8 text.
///
/// `source` names the encoding the caller's byte values are in. The transform
/// is pure: it consumes the tree and returns a new one with every
/// [`ParamValue::Bytes`] leaf decoded, at any nesting depth. Text leaves are
/// already UTF-8 and pass through untouched. Bytes that do not map to a
/// character in the source encoding are dropped, never surfaced as an error.
pub fn normalize_to_utf8(source: &'static Encoding, params: Params) -> Params {
    Params::from_inner(
        params
            .into_inner()
            .into_iter()
            .map(|(key, value)| (key, normalize_value(source, value)))
            .collect(),
    )
}

fn normalize_value(source: &'static Encoding, value: ParamValue) -> ParamValue {
    match value {
        ParamValue::Text(text) => ParamValue::Text(text),
        ParamValue::Bytes(bytes) => ParamValue::Text(decode_dropping_unmappable(source, &bytes)),
        ParamValue::Map(map) => ParamValue::Map(
            map.into_iter()
                .map(|(key, sub)| (key, normalize_value(source, sub)))
                .collect::<BTreeMap<_, _>>(),
        ),
        ParamValue::List(list) => ParamValue::List(
            list.into_iter()
                .map(|sub| normalize_value(source, sub))
                .collect(),
        ),
    }
}

fn decode_dropping_unmappable(source: &'static Encoding, bytes: &[u8]) -> String {
    let (decoded, _, had_errors) = source.decode(bytes);
    if had_errors {
        // encoding_rs substitutes U+FFFD for malformed input; strip those to
        // match iconv's //IGNORE contract.
        decoded.chars().filter(|ch| *ch != '\u{FFFD}').collect()
    } else {
        decoded.into_owned()
    }
}
