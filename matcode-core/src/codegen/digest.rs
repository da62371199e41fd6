//! Hash suffix of generated codes.

use matcode_types::{DigestAlgorithm, RowIndex, HASH_SUFFIX_LEN};
use md5::Md5;
use sha2::{Digest, Sha256};

/// Fields feeding the hash suffix.
#[derive(Debug, Clone, Copy)]
pub struct DigestInput<'a> {
    /// Display name.
    pub name: &'a str,
    /// Original description.
    pub description: &'a str,
    /// Category label.
    pub label: &'a str,
    /// Row position.
    pub row: RowIndex,
}

impl DigestInput<'_> {
    /// `name|description|label|row`, the exact bytes that get hashed.
    pub fn message(&self) -> String {
        format!("{}|{}|{}|{}", self.name, self.description, self.label, self.row)
    }
}

/// First [`HASH_SUFFIX_LEN`] uppercase hex digits of `algorithm(message)`.
pub fn hash_suffix(algorithm: DigestAlgorithm, message: &str) -> String {
    let bytes = message.as_bytes();
    match algorithm {
        DigestAlgorithm::Md5 => hex_prefix(&Md5::digest(bytes)),
        DigestAlgorithm::Sha256 => hex_prefix(&Sha256::digest(bytes)),
    }
}

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

fn hex_prefix(digest: &[u8]) -> String {
    digest
        .iter()
        .flat_map(|&byte| [byte >> 4, byte & 0x0f])
        .take(HASH_SUFFIX_LEN)
        .map(|nibble| char::from(HEX_UPPER[usize::from(nibble)]))
        .collect()
}
