use std::io::{self, Write};

use bzip2::Compression;
use bzip2::write::BzEncoder;

/// Compress a serialized form body with bzip2, per the remote API's
/// `request_compression=bzip2` contract.
pub fn bzip2_compress(input: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = BzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(input)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use bzip2::read::BzDecoder;

    use super::*;

    #[test]
    fn compressed_body_decompresses_to_the_input() {
        let body = b"email=a%40b.c&list_ids=1%2C2";
        let compressed = bzip2_compress(body).unwrap();
        assert_ne!(compressed.as_slice(), body.as_slice());
        assert!(compressed.starts_with(b"BZh"));

        let mut decoded = Vec::new();
        BzDecoder::new(compressed.as_slice())
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded.as_slice(), body.as_slice());
    }

    #[test]
    fn empty_body_is_still_a_valid_stream() {
        let compressed = bzip2_compress(b"").unwrap();
        let mut decoded = Vec::new();
        BzDecoder::new(compressed.as_slice())
            .read_to_end(&mut decoded)
            .unwrap();
        assert!(decoded.is_empty());
    }
}
