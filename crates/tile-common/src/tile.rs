//! XYZ tile addressing for the Web Mercator quad-tree.
//!
//! Row 0 is the northernmost row (XYZ / Google scheme). `flip_y` converts
//! to and from the TMS scheme, where row 0 is at the south.

use serde::{Deserialize, Serialize};

use crate::{TileError, TileResult};

/// Longest quadkey we decode. One digit per zoom level, and `2^z` must
/// still fit a `u32` tile index.
pub const MAX_QUADKEY_LEN: usize = 31;

/// A non-negative tile coordinate (z/x/y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    /// Zoom level
    pub z: u32,
    /// Column (x)
    pub x: u32,
    /// Row (y), 0 at north
    pub y: u32,
}

impl TileCoord {
    pub fn new(z: u32, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }

    /// Build from signed tile indices, as produced by the projection math.
    ///
    /// Returns `None` when either index falls outside `[0, 2^z)`, or when
    /// `z` is deeper than a quadkey can address (`MAX_QUADKEY_LEN`). The
    /// ceil-minus-one indexing rule yields `-1` for pixels on the western
    /// or northern world edge, which has no tile address.
    pub fn from_index(x: i64, y: i64, z: u32) -> Option<TileCoord> {
        if z > MAX_QUADKEY_LEN as u32 {
            return None;
        }
        let n = 1i64 << z;
        if !(0..n).contains(&x) || !(0..n).contains(&y) {
            return None;
        }
        Some(TileCoord {
            z,
            x: u32::try_from(x).ok()?,
            y: u32::try_from(y).ok()?,
        })
    }

    /// Generate a cache key string.
    pub fn cache_key(&self) -> String {
        format!("{}/{}/{}", self.z, self.x, self.y)
    }

    /// Get the parent tile (zoom - 1).
    pub fn parent(&self) -> Option<TileCoord> {
        if self.z == 0 {
            return None;
        }
        Some(TileCoord {
            z: self.z - 1,
            x: self.x / 2,
            y: self.y / 2,
        })
    }

    /// Get the four children tiles (zoom + 1), in quadkey digit order.
    ///
    /// `None` when a child index or the zoom would not fit a `u32`.
    pub fn children(&self) -> Option<[TileCoord; 4]> {
        let x = self.x.checked_mul(2)?;
        let y = self.y.checked_mul(2)?;
        let z = self.z.checked_add(1)?;
        Some([
            TileCoord { z, x, y },
            TileCoord { z, x: x + 1, y },
            TileCoord { z, x, y: y + 1 },
            TileCoord {
                z,
                x: x + 1,
                y: y + 1,
            },
        ])
    }

    /// Swap between XYZ and TMS row numbering. The mapping is its own inverse.
    ///
    /// `None` when the row is outside `[0, 2^z)` or the flipped row does not
    /// fit a `u32`.
    pub fn flip_y(&self) -> Option<TileCoord> {
        let n = 1u64.checked_shl(self.z)?;
        let flipped = (n - 1).checked_sub(u64::from(self.y))?;
        Some(TileCoord {
            z: self.z,
            x: self.x,
            y: u32::try_from(flipped).ok()?,
        })
    }

    /// Encode as a quadkey: one base-4 digit per zoom level, most
    /// significant level first. Zoom 0 encodes to an empty string.
    pub fn quadkey(&self) -> String {
        let bit = |value: u32, level: u32| {
            u64::from(value).checked_shr(level - 1).unwrap_or(0) & 1 == 1
        };
        (1..=self.z)
            .rev()
            .map(|level| {
                let mut digit = b'0';
                if bit(self.x, level) {
                    digit += 1;
                }
                if bit(self.y, level) {
                    digit += 2;
                }
                digit as char
            })
            .collect()
    }

    /// Decode a quadkey. The zoom level is the key length.
    pub fn from_quadkey(quadkey: &str) -> TileResult<TileCoord> {
        let z = quadkey.chars().count();
        if z > MAX_QUADKEY_LEN {
            return Err(TileError::QuadkeyTooLong(z));
        }

        let mut x = 0u32;
        let mut y = 0u32;
        for (position, digit) in quadkey.chars().enumerate() {
            x <<= 1;
            y <<= 1;
            match digit {
                '0' => {}
                '1' => x |= 1,
                '2' => y |= 1,
                '3' => {
                    x |= 1;
                    y |= 1;
                }
                _ => return Err(TileError::InvalidQuadkeyDigit { digit, position }),
            }
        }

        Ok(TileCoord { z: z as u32, x, y })
    }
}
