//! Web Mercator (EPSG:3857) coordinate transforms for tiled maps.
//!
//! Converts between geographic degrees, projected meters, world pixels
//! and tile indices, for any tile size.
//!
//! ```
//! use projection::{Projection, TileIndex};
//!
//! let proj = Projection::default();
//! let pixels = proj.lat_lon_to_pixels(0.0, 0.0, 0);
//! assert!((pixels.x - 128.0).abs() < 1e-6);
//!
//! // Tile edges belong to the tile on their north-west side.
//! assert_eq!(proj.pixels_to_tile(256.0, 256.0), TileIndex::new(0, 0));
//! ```

pub mod mercator;
pub mod point;

pub use mercator::{
    ParseTileIndexingError, Projection, TileIndexing, DEFAULT_TILE_SIZE, EARTH_RADIUS,
    MAX_ZOOM_LEVEL,
};
pub use point::{LatLon, Meters, PixelIndex, Pixels, TileAndPixel, TileIndex};
pub use tile_common::{BoundingBox, TileCoord};
