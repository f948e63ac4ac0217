//! Transport layer: wire-format details (form encoding, charset
//! normalization, request compression). No HTTP here.

mod compress;
mod form;
mod recode;

pub use compress::bzip2_compress;
#[cfg(test)]
pub use form::deserialize as deserialize_form;
pub use form::{flatten, serialize as serialize_form};
pub use recode::normalize_to_utf8;
