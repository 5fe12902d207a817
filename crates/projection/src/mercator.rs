//! Spherical Web Mercator (EPSG:3857) projection.
//!
//! Converts between the four coordinate spaces of a web map tile pyramid:
//!
//! ```text
//! LatLon <-> Meters <-> Pixels(zoom) <-> Tile(zoom)
//! ```
//!
//! Meters are the pivot: every geographic to pixel or tile conversion goes
//! through [`Projection::lat_lon_to_meters`] first.
//!
//! The sphere has radius 6378137 m (the WGS84 semi-major axis). Nothing is
//! range-checked. Latitudes at or beyond the poles produce infinite or NaN
//! meters, and those values flow through every composed conversion.
//!
//! # Tile indexing
//!
//! Tile indices default to `ceil(pixel / tile_size) - 1`, which differs
//! from the usual `floor(pixel / tile_size)` exactly on tile edges: pixel 0
//! lands in tile -1 and pixel 256 (with 256px tiles) in tile 0. Consumers
//! of this crate depend on those boundaries, so the rule is the default.
//! [`TileIndexing::Floor`] gives the conventional slippy-map indices.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tile_common::BoundingBox;
use tracing::debug;

use crate::point::{LatLon, Meters, PixelIndex, Pixels, TileAndPixel, TileIndex};

/// Sphere radius in meters.
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Number of zoom levels searched by [`Projection::zoom_for_pixel_size`].
pub const MAX_ZOOM_LEVEL: u32 = 32;

/// Rule mapping a pixel coordinate to a tile index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TileIndexing {
    /// `ceil(pixel / tile_size) - 1`
    #[default]
    CeilMinusOne,
    /// `floor(pixel / tile_size)`
    Floor,
}

impl TileIndexing {
    #[inline]
    fn index(self, pixel: f64, tile_size: f64) -> i64 {
        match self {
            TileIndexing::CeilMinusOne => ((pixel / tile_size).ceil() - 1.0) as i64,
            TileIndexing::Floor => (pixel / tile_size).floor() as i64,
        }
    }
}

impl fmt::Display for TileIndexing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TileIndexing::CeilMinusOne => "ceil-minus-one",
            TileIndexing::Floor => "floor",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tile indexing '{0}', expected 'ceil-minus-one' or 'floor'")]
pub struct ParseTileIndexingError(String);

impl FromStr for TileIndexing {
    type Err = ParseTileIndexingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ceil-minus-one" | "ceil" => Ok(TileIndexing::CeilMinusOne),
            "floor" => Ok(TileIndexing::Floor),
            _ => Err(ParseTileIndexingError(s.to_string())),
        }
    }
}

/// Web Mercator projection for a fixed tile size.
///
/// Holds no mutable state; every method is a pure function of its
/// arguments and the values fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    tile_size: u32,
    /// Half the equatorial circumference in meters
    max_extent: f64,
    /// Meters per pixel at zoom 0
    initial_resolution: f64,
    indexing: TileIndexing,
}

impl Projection {
    /// Create a projection for `tile_size` pixel tiles.
    ///
    /// The tile size is not checked. Zero makes every resolution infinite,
    /// and the conversions then return infinities and NaNs.
    pub fn new(tile_size: u32) -> Self {
        let max_extent = PI * EARTH_RADIUS;
        let initial_resolution = 2.0 * max_extent / tile_size as f64;

        debug!(
            tile_size,
            max_extent,
            initial_resolution,
            "Created Web Mercator projection"
        );

        Self {
            tile_size,
            max_extent,
            initial_resolution,
            indexing: TileIndexing::default(),
        }
    }

    /// Select the pixel to tile indexing rule.
    pub fn with_tile_indexing(mut self, indexing: TileIndexing) -> Self {
        self.indexing = indexing;
        self
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn max_extent(&self) -> f64 {
        self.max_extent
    }

    pub fn initial_resolution(&self) -> f64 {
        self.initial_resolution
    }

    pub fn tile_indexing(&self) -> TileIndexing {
        self.indexing
    }

    // ------------------------------------------------------------------
    // LatLon <-> Meters
    // ------------------------------------------------------------------

    /// Convert geographic degrees to Web Mercator meters.
    pub fn lat_lon_to_meters(&self, lat: f64, lon: f64) -> Meters {
        let mx = lon * self.max_extent / 180.0;
        let my = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0);
        let my = my * self.max_extent / 180.0;
        Meters::new(mx, my)
    }

    /// Convert Web Mercator meters to geographic degrees.
    pub fn meters_to_lat_lon(&self, mx: f64, my: f64) -> LatLon {
        let lon = mx / self.max_extent * 180.0;
        let lat = my / self.max_extent * 180.0;
        let lat = 180.0 / PI * (2.0 * (lat * PI / 180.0).exp().atan() - PI / 2.0);
        LatLon::new(lat, lon)
    }

    // ------------------------------------------------------------------
    // Meters <-> Pixels
    // ------------------------------------------------------------------

    /// Meters per pixel at `zoom`. Halves with every zoom level.
    #[inline]
    pub fn resolution(&self, zoom: u32) -> f64 {
        self.initial_resolution / 2f64.powi(zoom as i32)
    }

    /// Convert world pixels at `zoom` to meters. Pixel Y grows southward,
    /// meters Y grows northward.
    pub fn pixels_to_meters(&self, px: f64, py: f64, zoom: u32) -> Meters {
        let res = self.resolution(zoom);
        Meters::new(px * res - self.max_extent, self.max_extent - py * res)
    }

    /// Convert meters to world pixels at `zoom`.
    pub fn meters_to_pixels(&self, mx: f64, my: f64, zoom: u32) -> Pixels {
        let res = self.resolution(zoom);
        Pixels::new((mx + self.max_extent) / res, (self.max_extent - my) / res)
    }

    pub fn pixels_to_lat_lon(&self, px: f64, py: f64, zoom: u32) -> LatLon {
        let meters = self.pixels_to_meters(px, py, zoom);
        self.meters_to_lat_lon(meters.x, meters.y)
    }

    pub fn lat_lon_to_pixels(&self, lat: f64, lon: f64, zoom: u32) -> Pixels {
        let meters = self.lat_lon_to_meters(lat, lon);
        self.meters_to_pixels(meters.x, meters.y, zoom)
    }

    /// [`Self::lat_lon_to_pixels`] floored toward negative infinity.
    pub fn lat_lon_to_pixels_floor(&self, lat: f64, lon: f64, zoom: u32) -> PixelIndex {
        self.lat_lon_to_pixels(lat, lon, zoom).floor()
    }

    // ------------------------------------------------------------------
    // Pixels -> Tile
    // ------------------------------------------------------------------

    /// Tile containing a world pixel, using the configured [`TileIndexing`].
    ///
    /// With the default rule `(0.0, 0.0)` maps to tile `(-1, -1)`.
    pub fn pixels_to_tile(&self, px: f64, py: f64) -> TileIndex {
        let tile_size = self.tile_size as f64;
        TileIndex::new(
            self.indexing.index(px, tile_size),
            self.indexing.index(py, tile_size),
        )
    }

    pub fn meters_to_tile(&self, mx: f64, my: f64, zoom: u32) -> TileIndex {
        let pixels = self.meters_to_pixels(mx, my, zoom);
        self.pixels_to_tile(pixels.x, pixels.y)
    }

    pub fn lat_lon_to_tile(&self, lat: f64, lon: f64, zoom: u32) -> TileIndex {
        let meters = self.lat_lon_to_meters(lat, lon);
        self.meters_to_tile(meters.x, meters.y, zoom)
    }

    /// Tile index plus the pixel offset within that tile.
    ///
    /// The offset is `floor(pixel)` reduced modulo the tile size with a
    /// Euclidean remainder, so it stays in `[0, tile_size)` even for
    /// negative world pixels.
    pub fn lat_lon_to_tile_and_pixel(&self, lat: f64, lon: f64, zoom: u32) -> TileAndPixel {
        let meters = self.lat_lon_to_meters(lat, lon);
        let tile = self.meters_to_tile(meters.x, meters.y, zoom);
        let pixels = self.meters_to_pixels(meters.x, meters.y, zoom);

        let tile_size = self.tile_size as f64;
        let pixel = PixelIndex {
            x: pixels.x.floor().rem_euclid(tile_size) as i64,
            y: pixels.y.floor().rem_euclid(tile_size) as i64,
        };

        TileAndPixel { tile, pixel }
    }

    // ------------------------------------------------------------------
    // Tile geometry
    // ------------------------------------------------------------------

    /// Tiles per axis at `zoom`.
    pub fn tile_count(&self, zoom: u32) -> u64 {
        2u64.saturating_pow(zoom)
    }

    /// Extent of a tile in meters.
    ///
    /// Covers the pixel square `[x * tile_size, (x + 1) * tile_size]` by
    /// `[y * tile_size, (y + 1) * tile_size]`.
    pub fn tile_bounds(&self, tile: TileIndex, zoom: u32) -> BoundingBox {
        let tile_size = self.tile_size as f64;
        let south_west = self.pixels_to_meters(
            tile.x as f64 * tile_size,
            (tile.y as f64 + 1.0) * tile_size,
            zoom,
        );
        let north_east = self.pixels_to_meters(
            (tile.x as f64 + 1.0) * tile_size,
            tile.y as f64 * tile_size,
            zoom,
        );
        BoundingBox::new(south_west.x, south_west.y, north_east.x, north_east.y)
    }

    /// Extent of a tile in degrees (x = longitude, y = latitude).
    pub fn tile_lat_lon_bounds(&self, tile: TileIndex, zoom: u32) -> BoundingBox {
        let bounds = self.tile_bounds(tile, zoom);
        let south_west = self.meters_to_lat_lon(bounds.min_x, bounds.min_y);
        let north_east = self.meters_to_lat_lon(bounds.max_x, bounds.max_y);
        BoundingBox::new(south_west.lon, south_west.lat, north_east.lon, north_east.lat)
    }

    /// Tile index range covering a geographic extent (x = lon, y = lat).
    ///
    /// Returns the north-west and south-east corner tiles. Both are
    /// inclusive when the extent lies inside the world.
    pub fn tile_range(&self, bbox: &BoundingBox, zoom: u32) -> (TileIndex, TileIndex) {
        let north_west = self.lat_lon_to_tile(bbox.max_y, bbox.min_x, zoom);
        let south_east = self.lat_lon_to_tile(bbox.min_y, bbox.max_x, zoom);
        (north_west, south_east)
    }

    /// Deepest zoom whose resolution is not finer than `pixel_size`
    /// meters per pixel.
    pub fn zoom_for_pixel_size(&self, pixel_size: f64) -> u32 {
        (0..MAX_ZOOM_LEVEL)
            .find(|&zoom| pixel_size > self.resolution(zoom))
            .map(|zoom| zoom.saturating_sub(1))
            .unwrap_or(MAX_ZOOM_LEVEL - 1)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SIZE)
    }
}
