//! LocalStorage Persistence
//!
//! Reads and writes the full item snapshot as a JSON array under a single
//! well-known key. Every write is a full replacement of the prior value.

use crate::models::SavedItem;

/// Storage key holding the serialized item list
pub const STORAGE_KEY: &str = "quicklistItems";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Encode a snapshot as the stored JSON array
pub fn encode_snapshot(items: &[SavedItem]) -> Result<String, String> {
    serde_json::to_string(items).map_err(|e| e.to_string())
}

/// Decode a stored value; a malformed value decodes to None
pub fn decode_snapshot(raw: &str) -> Option<Vec<SavedItem>> {
    serde_json::from_str(raw).ok()
}

/// Read the persisted snapshot. Missing and corrupt values are both treated
/// as absent so initialization never fails on bad storage contents.
pub fn load() -> Option<Vec<SavedItem>> {
    let storage = local_storage()?;
    let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;

    let snapshot = decode_snapshot(&raw);
    if snapshot.is_none() {
        web_sys::console::warn_1(
            &format!("[STORAGE] Ignoring corrupt snapshot under '{}'", STORAGE_KEY).into(),
        );
    }
    snapshot
}

/// Overwrite the persisted snapshot with the given list
pub fn save(items: &[SavedItem]) {
    let Some(storage) = local_storage() else {
        return;
    };

    match encode_snapshot(items) {
        Ok(json) => {
            if storage.set_item(STORAGE_KEY, &json).is_err() {
                web_sys::console::error_1(&"[STORAGE] Failed to write snapshot".into());
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[STORAGE] Failed to encode snapshot: {}", e).into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_snapshot() {
        let raw = r#"[{"text":"Milk","completed":true},{"text":"Eggs","completed":false}]"#;

        let snapshot = decode_snapshot(raw).unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].text, "Milk");
        assert!(snapshot[0].completed);
        assert_eq!(snapshot[1].text, "Eggs");
        assert!(!snapshot[1].completed);
    }

    #[test]
    fn test_decode_corrupt_snapshot_is_absent() {
        assert_eq!(decode_snapshot("not json"), None);
        assert_eq!(decode_snapshot(r#"{"text":"Milk"}"#), None);
        assert_eq!(decode_snapshot(r#"[{"text":"Milk"}]"#), None);
    }

    #[test]
    fn test_encode_snapshot_format() {
        let items = vec![SavedItem {
            text: "Milk & Honey <1L>".to_string(),
            completed: false,
        }];

        let json = encode_snapshot(&items).unwrap();

        // Stored text is the text as entered; escaping is a render-time concern
        assert_eq!(json, r#"[{"text":"Milk & Honey <1L>","completed":false}]"#);
    }

    #[test]
    fn test_empty_list_encodes_to_empty_array() {
        assert_eq!(encode_snapshot(&[]).unwrap(), "[]");
    }
}
