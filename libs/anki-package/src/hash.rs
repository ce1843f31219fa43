//! Note guids and field checksums.

use sha1::Sha1;
use sha2::{Digest, Sha256};

const BASE91_TABLE: &[u8; 91] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&()*+,-./:;<=>?@[]^_`{|}~";

/// Stable guid derived from a note's field values.
///
/// Identical fields give identical guids, so re-importing a regenerated
/// package updates existing notes instead of duplicating them.
pub fn guid_for<S: AsRef<str>>(values: &[S]) -> String {
    let joined = values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("__");
    let digest = Sha256::digest(joined.as_bytes());

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    base91(u64::from_be_bytes(prefix))
}

fn base91(mut value: u64) -> String {
    if value == 0 {
        return (BASE91_TABLE[0] as char).to_string();
    }
    let mut reversed = Vec::new();
    while value > 0 {
        reversed.push(BASE91_TABLE[(value % 91) as usize]);
        value /= 91;
    }
    reversed.iter().rev().map(|&b| b as char).collect()
}

/// Checksum of the sort field used by Anki's duplicate detection.
pub fn field_checksum(field: &str) -> i64 {
    let digest = Sha1::digest(strip_html(field).as_bytes());
    i64::from(u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]))
}

/// Remove HTML tags and decode the handful of entities Anki normalises.
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;

    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}
