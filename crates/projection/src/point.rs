//! Value types for the four coordinate spaces.
//!
//! Each space gets its own struct so a meters pair can't be handed to a
//! function expecting pixels.

use serde::{Deserialize, Serialize};

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Web Mercator (EPSG:3857) position in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Meters {
    pub x: f64,
    pub y: f64,
}

impl Meters {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fractional pixel position in the whole-world raster at some zoom.
/// Y grows downward from the northern edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pixels {
    pub x: f64,
    pub y: f64,
}

impl Pixels {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round both components toward negative infinity.
    pub fn floor(&self) -> PixelIndex {
        PixelIndex {
            x: self.x.floor() as i64,
            y: self.y.floor() as i64,
        }
    }
}

/// Integral pixel position: a floored world pixel, or a pixel offset
/// inside a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelIndex {
    pub x: i64,
    pub y: i64,
}

/// Signed tile index at some zoom.
///
/// Signed because the default indexing rule maps pixel 0 to tile -1.
/// Use [`tile_common::TileCoord::from_index`] to get an addressable tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileIndex {
    pub x: i64,
    pub y: i64,
}

impl TileIndex {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// A tile together with the pixel offset inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileAndPixel {
    pub tile: TileIndex,
    /// Offset within the tile, each component in `[0, tile_size)`.
    pub pixel: PixelIndex,
}
