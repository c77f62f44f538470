//! Content-derived inventor identifiers.

use patnet_core::constants::{INVENTOR_ID_HEX_LEN, INVENTOR_ID_PREFIX};

/// `inv_` + the first 16 hex chars of a BLAKE3 hash over the class's sorted
/// (patent id, raw name) keys. Independent of key order.
pub fn inventor_id<'a>(keys: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut keys: Vec<(&str, &str)> = keys.into_iter().collect();
    keys.sort_unstable();
    keys.dedup();

    let mut hasher = blake3::Hasher::new();
    for (patent_id, raw_name) in keys {
        hasher.update(patent_id.as_bytes());
        hasher.update(&[0x1f]);
        hasher.update(raw_name.as_bytes());
        hasher.update(&[0x1e]);
    }
    let hex = hasher.finalize().to_hex();
    format!("{INVENTOR_ID_PREFIX}{}", &hex.as_str()[..INVENTOR_ID_HEX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_shape() {
        let id = inventor_id([("P1", "Ann Lee")]);
        assert!(id.starts_with("inv_"));
        assert_eq!(id.len(), 4 + 16);
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn order_independent() {
        let a = inventor_id([("P1", "Ann Lee"), ("P2", "A. Lee")]);
        let b = inventor_id([("P2", "A. Lee"), ("P1", "Ann Lee")]);
        assert_eq!(a, b);
    }

    #[test]
    fn field_boundaries_matter() {
        assert_ne!(inventor_id([("P1", "2Ann")]), inventor_id([("P12", "Ann")]));
        assert_ne!(
            inventor_id([("P1", "Ann Lee")]),
            inventor_id([("P1", "Ann Lee"), ("P2", "Ann Lee")])
        );
    }
}
