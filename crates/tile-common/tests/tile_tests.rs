//! Tests for TileCoord addressing: hierarchy, TMS flip and quadkeys.

use tile_common::{TileCoord, TileError, MAX_QUADKEY_LEN};

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn test_cache_key() {
    assert_eq!(TileCoord::new(5, 10, 12).cache_key(), "5/10/12");
}

#[test]
fn test_parent_of_root_is_none() {
    assert_eq!(TileCoord::new(0, 0, 0).parent(), None);
}

#[test]
fn test_children_roundtrip_to_parent() {
    let tile = TileCoord::new(4, 7, 9);
    for child in tile.children().unwrap() {
        assert_eq!(child.z, 5);
        assert_eq!(child.parent(), Some(tile));
    }
}

#[test]
fn test_child_quadkeys_extend_parent() {
    let tile = TileCoord::new(3, 3, 5);
    let keys: Vec<String> = tile
        .children()
        .unwrap()
        .iter()
        .map(TileCoord::quadkey)
        .collect();
    assert_eq!(keys, vec!["2130", "2131", "2132", "2133"]);
}

// ============================================================================
// TMS flip
// ============================================================================

#[test]
fn test_flip_y_at_zoom_one() {
    assert_eq!(TileCoord::new(1, 0, 0).flip_y(), Some(TileCoord::new(1, 0, 1)));
    assert_eq!(TileCoord::new(1, 1, 1).flip_y(), Some(TileCoord::new(1, 1, 0)));
}

#[test]
fn test_flip_y_is_involution() {
    for y in 0..16 {
        let tile = TileCoord::new(4, 3, y);
        assert_eq!(tile.flip_y().and_then(|t| t.flip_y()), Some(tile));
    }
}

// ============================================================================
// Quadkeys
// ============================================================================

#[test]
fn test_quadkey_roundtrip_across_zooms() {
    for z in 1..=12 {
        let n = 1u32 << z;
        for (x, y) in [(0, 0), (n - 1, 0), (0, n - 1), (n - 1, n - 1), (n / 3, n / 2)] {
            let tile = TileCoord::new(z, x, y);
            let key = tile.quadkey();
            assert_eq!(key.len(), z as usize);
            assert_eq!(TileCoord::from_quadkey(&key).unwrap(), tile);
        }
    }
}

#[test]
fn test_quadkey_too_long() {
    let key = "0".repeat(MAX_QUADKEY_LEN + 1);
    assert_eq!(
        TileCoord::from_quadkey(&key),
        Err(TileError::QuadkeyTooLong(MAX_QUADKEY_LEN + 1))
    );
}

#[test]
fn test_quadkey_max_length_decodes() {
    let key = "3".repeat(MAX_QUADKEY_LEN);
    let tile = TileCoord::from_quadkey(&key).unwrap();
    assert_eq!(tile.z, MAX_QUADKEY_LEN as u32);
    assert_eq!(tile.x, (1u32 << MAX_QUADKEY_LEN) - 1);
    assert_eq!(tile.y, tile.x);
}

#[test]
fn test_quadkey_error_message() {
    let err = TileCoord::from_quadkey("12a").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid quadkey digit 'a' at position 2, expected 0-3"
    );
}

// ============================================================================
// Signed index conversion
// ============================================================================

#[test]
fn test_from_index_at_zoom_zero() {
    assert_eq!(TileCoord::from_index(0, 0, 0), Some(TileCoord::new(0, 0, 0)));
    assert_eq!(TileCoord::from_index(1, 0, 0), None);
    assert_eq!(TileCoord::from_index(-1, -1, 0), None);
}

#[test]
fn test_from_index_caps_zoom_at_quadkey_length() {
    let deepest = MAX_QUADKEY_LEN as u32;
    assert_eq!(
        TileCoord::from_index(0, 0, deepest),
        Some(TileCoord::new(deepest, 0, 0))
    );
    assert_eq!(TileCoord::from_index(0, 0, deepest + 1), None);
    assert_eq!(TileCoord::from_index(12, 34, 33), None);
    assert_eq!(TileCoord::from_index(305, 1018921, 40), None);
}

// ============================================================================
// Zoom levels deeper than a u32 row
// ============================================================================

#[test]
fn test_flip_y_at_zoom_32() {
    let tile = TileCoord::new(32, 0, u32::MAX);
    assert_eq!(tile.flip_y(), Some(TileCoord::new(32, 0, 0)));
}

#[test]
fn test_flip_y_without_u32_row_is_none() {
    // 2^40 - 1 - 1018921 does not fit a u32
    assert_eq!(TileCoord::new(40, 305, 1018921).flip_y(), None);
    assert_eq!(TileCoord::new(64, 0, 0).flip_y(), None);
    // Row outside [0, 2^z)
    assert_eq!(TileCoord::new(2, 0, 4).flip_y(), None);
}

#[test]
fn test_quadkey_above_zoom_32_pads_with_zeros() {
    let key = TileCoord::new(40, 305, 1018921).quadkey();
    assert_eq!(key.len(), 40);
    assert!(key.starts_with("00000000"));
    assert_eq!(&key[8..], TileCoord::new(32, 305, 1018921).quadkey());
}

#[test]
fn test_children_overflow_is_none() {
    assert_eq!(TileCoord::new(32, 1 << 31, 0).children(), None);
    assert_eq!(TileCoord::new(u32::MAX, 0, 0).children(), None);
    assert!(TileCoord::new(31, (1 << 31) - 1, 0).children().is_some());
}

#[test]
fn test_serializes_as_json_object() {
    let tile = TileCoord::new(7, 20, 44);
    let json = serde_json::to_string(&tile).unwrap();
    assert_eq!(json, r#"{"z":7,"x":20,"y":44}"#);
}
