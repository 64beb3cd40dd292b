//! Encoders for canonical tree nodes and paths.

use fixcommit_field::{CanonicalEntry, CanonicalValue, FieldPath};

use crate::{
    writer::{write_header, MAJOR_ARRAY, MAJOR_MAP, MAJOR_TEXT, MAJOR_UNSIGNED},
    EncodingError,
};

/// Encode one canonical mapping level.
///
/// Keys are emitted in ascending numeric order — `CanonicalEntry` iterates
/// that way by construction, so the bytes cannot depend on how the source
/// message ordered its fields.
pub fn encode_entry(entry: &CanonicalEntry) -> Result<Vec<u8>, EncodingError> {
    let mut out = Vec::new();
    encode_entry_into(&mut out, entry)?;
    Ok(out)
}

/// Encode a single canonical value (scalar or group).
pub fn encode_value(value: &CanonicalValue) -> Result<Vec<u8>, EncodingError> {
    let mut out = Vec::new();
    encode_value_into(&mut out, value)?;
    Ok(out)
}

/// Encode a path as an array of unsigned integers, in the given order.
///
/// Path elements are unsigned and the output is bounded, so this cannot
/// fail. The result is also the canonical leaf sort key: byte-lexicographic
/// comparison over it is the leaf order of the commitment tree.
pub fn encode_path(path: &FieldPath) -> Vec<u8> {
    let mut out = Vec::new();
    write_header(&mut out, MAJOR_ARRAY, path.len() as u64);
    for element in path.elements() {
        write_header(&mut out, MAJOR_UNSIGNED, *element);
    }
    out
}

fn encode_entry_into(out: &mut Vec<u8>, entry: &CanonicalEntry) -> Result<(), EncodingError> {
    write_header(out, MAJOR_MAP, entry.len() as u64);
    for (tag, value) in entry {
        write_header(out, MAJOR_UNSIGNED, *tag);
        encode_value_into(out, value)?;
    }
    Ok(())
}

fn encode_value_into(out: &mut Vec<u8>, value: &CanonicalValue) -> Result<(), EncodingError> {
    match value {
        CanonicalValue::Scalar(bytes) => {
            // Text strings must hold valid UTF-8; the parser boundary
            // promises text, so anything else is a hard error here.
            std::str::from_utf8(bytes)?;
            write_header(out, MAJOR_TEXT, bytes.len() as u64);
            out.extend_from_slice(bytes);
        }
        CanonicalValue::Group(entries) => {
            write_header(out, MAJOR_ARRAY, entries.len() as u64);
            for entry in entries {
                encode_entry_into(out, entry)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use fixcommit_field::{FieldMap, FieldValue};

    use super::*;

    fn canonicalize(fields: Vec<(u64, FieldValue)>) -> CanonicalEntry {
        FieldMap::from(fields)
            .canonicalize()
            .expect("fixture should canonicalize")
    }

    #[test]
    fn test_encode_path_top_level_field() {
        let path = FieldPath::from(vec![15]);
        assert_eq!(encode_path(&path), vec![0x81, 0x0F]);
    }

    #[test]
    fn test_encode_path_group_member() {
        let path = FieldPath::from(vec![454, 1, 456]);
        assert_eq!(
            encode_path(&path),
            vec![0x83, 0x19, 0x01, 0xC6, 0x01, 0x19, 0x01, 0xC8]
        );
    }

    #[test]
    fn test_encode_empty_path() {
        assert_eq!(encode_path(&FieldPath::new()), vec![0x80]);
    }

    #[test]
    fn test_short_path_sorts_before_longer_group_paths() {
        // [15] must order before every [454, ...] path.
        let top = encode_path(&FieldPath::from(vec![15]));
        let nested = encode_path(&FieldPath::from(vec![454, 0, 455]));
        assert!(top < nested);
    }

    #[test]
    fn test_encode_scalar_exact_bytes() {
        let value = CanonicalValue::Scalar(b"150.00".to_vec());
        assert_eq!(encode_value(&value).unwrap(), b"\x66150.00".to_vec());
    }

    #[test]
    fn test_encode_rejects_non_utf8_scalar() {
        let value = CanonicalValue::Scalar(vec![0xFF, 0xFE]);
        assert_matches!(encode_value(&value), Err(EncodingError::InvalidText(_)));
    }

    #[test]
    fn test_encode_empty_group_is_present_empty_array() {
        let entry = canonicalize(vec![(454, FieldValue::group(Vec::new()))]);
        // map(1), key 454, array(0)
        assert_eq!(
            encode_entry(&entry).unwrap(),
            vec![0xA1, 0x19, 0x01, 0xC6, 0x80]
        );
    }

    #[test]
    fn test_encode_entry_orders_keys_ascending() {
        // Authored 454 before 15; canonical bytes must start with key 15.
        let entry = canonicalize(vec![
            (454, FieldValue::group(Vec::new())),
            (15, FieldValue::scalar("USD")),
        ]);
        let bytes = encode_entry(&entry).unwrap();
        assert_eq!(bytes[0], 0xA2);
        assert_eq!(bytes[1], 0x0F);
    }

    #[test]
    fn test_logically_equal_trees_encode_identically() {
        let a = canonicalize(vec![
            (15, FieldValue::scalar("USD")),
            (55, FieldValue::scalar("EURUSD")),
        ]);
        let b = canonicalize(vec![
            (55, FieldValue::scalar("EURUSD")),
            (15, FieldValue::scalar("USD")),
        ]);
        assert_eq!(encode_entry(&a).unwrap(), encode_entry(&b).unwrap());
    }

    #[test]
    fn test_encode_full_scenario_tree() {
        let entry = canonicalize(vec![
            (15, FieldValue::scalar("USD")),
            (
                454,
                FieldValue::group(vec![
                    FieldMap::from(vec![
                        (455, FieldValue::scalar("91282CEZ7")),
                        (456, FieldValue::scalar("1")),
                    ]),
                    FieldMap::from(vec![
                        (455, FieldValue::scalar("US91282CEZ76")),
                        (456, FieldValue::scalar("4")),
                    ]),
                ]),
            ),
        ]);
        let expected = hex::decode(concat!(
            "a2",                       // map(2)
            "0f",                       // key 15
            "63555344",                 // "USD"
            "1901c6",                   // key 454
            "82",                       // array(2)
            "a2",                       // entry 0: map(2)
            "1901c7",                   // key 455
            "69393132383243455a37",     // "91282CEZ7"
            "1901c8",                   // key 456
            "6131",                     // "1"
            "a2",                       // entry 1: map(2)
            "1901c7",                   // key 455
            "6c5553393132383243455a3736", // "US91282CEZ76"
            "1901c8",                   // key 456
            "6134",                     // "4"
        ))
        .unwrap();
        assert_eq!(encode_entry(&entry).unwrap(), expected);
    }
}
