//! Subcommands and their JSON output.
//!
//! Non-finite results (for example the meters of a pole) serialize as
//! `null`, since JSON has no NaN or infinity.

use anyhow::{Context, Result};
use clap::Subcommand;
use projection::{Projection, TileIndex};
use serde_json::{json, Value};
use tile_common::{BoundingBox, TileCoord, MAX_QUADKEY_LEN};
use tracing::debug;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Geographic degrees to Web Mercator meters
    ToMeters {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Web Mercator meters to geographic degrees
    ToLatLon {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },

    /// Geographic degrees to world pixels at a zoom level
    ToPixels {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long)]
        zoom: u32,
        /// Floor the pixel coordinates toward negative infinity
        #[arg(long)]
        floor: bool,
    },

    /// World pixels to geographic degrees
    PixelsToLatLon {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long)]
        zoom: u32,
    },

    /// Web Mercator meters to world pixels
    MetersToPixels {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long)]
        zoom: u32,
    },

    /// World pixels to Web Mercator meters
    PixelsToMeters {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long)]
        zoom: u32,
    },

    /// Web Mercator meters to a tile index
    MetersToTile {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long)]
        zoom: u32,
    },

    /// World pixels to a tile index
    PixelsToTile {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },

    /// Tile and in-tile pixel for a geographic position
    Tile {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long)]
        zoom: u32,
    },

    /// Meters and lat/lon extent of a tile
    TileBounds {
        #[arg(long, allow_negative_numbers = true)]
        x: i64,
        #[arg(long, allow_negative_numbers = true)]
        y: i64,
        #[arg(long)]
        zoom: u32,
    },

    /// Decode a quadkey into its tile, extent, parent and children
    Quadkey {
        #[arg(long)]
        key: String,
    },

    /// Meters per pixel at a zoom level
    Resolution {
        #[arg(long)]
        zoom: u32,
    },

    /// Deepest zoom level not finer than a pixel size in meters
    ZoomFor {
        #[arg(long)]
        pixel_size: f64,
    },

    /// Tile range covering a lon/lat extent
    TilesInBbox {
        /// minlon,minlat,maxlon,maxlat
        #[arg(long, allow_hyphen_values = true)]
        bbox: BoundingBox,
        #[arg(long)]
        zoom: u32,
    },
}

/// Execute one subcommand against `projection`.
pub fn run(projection: &Projection, command: &Command) -> Result<Value> {
    debug!(?command, "Running conversion");

    let output = match *command {
        Command::ToMeters { lat, lon } => {
            json!({ "meters": projection.lat_lon_to_meters(lat, lon) })
        }
        Command::ToLatLon { x, y } => {
            json!({ "lat_lon": projection.meters_to_lat_lon(x, y) })
        }
        Command::ToPixels {
            lat,
            lon,
            zoom,
            floor,
        } => {
            let pixels = if floor {
                json!(projection.lat_lon_to_pixels_floor(lat, lon, zoom))
            } else {
                json!(projection.lat_lon_to_pixels(lat, lon, zoom))
            };
            json!({ "zoom": zoom, "pixels": pixels })
        }
        Command::PixelsToLatLon { x, y, zoom } => {
            json!({ "lat_lon": projection.pixels_to_lat_lon(x, y, zoom) })
        }
        Command::MetersToPixels { x, y, zoom } => {
            json!({ "zoom": zoom, "pixels": projection.meters_to_pixels(x, y, zoom) })
        }
        Command::PixelsToMeters { x, y, zoom } => {
            json!({ "meters": projection.pixels_to_meters(x, y, zoom) })
        }
        Command::MetersToTile { x, y, zoom } => {
            json!({ "zoom": zoom, "tile": projection.meters_to_tile(x, y, zoom) })
        }
        Command::PixelsToTile { x, y } => {
            json!({ "tile": projection.pixels_to_tile(x, y) })
        }
        Command::Tile { lat, lon, zoom } => {
            let result = projection.lat_lon_to_tile_and_pixel(lat, lon, zoom);
            let address = TileCoord::from_index(result.tile.x, result.tile.y, zoom);
            if address.is_none() {
                debug!(tile = ?result.tile, zoom, "Tile index has no XYZ address");
            }
            json!({
                "zoom": zoom,
                "tile": result.tile,
                "pixel": result.pixel,
                "address": address.map(|t| t.cache_key()),
                "quadkey": address.map(|t| t.quadkey()),
                "tms": address.and_then(|t| t.flip_y()),
            })
        }
        Command::TileBounds { x, y, zoom } => {
            let tile = TileIndex::new(x, y);
            json!({
                "zoom": zoom,
                "tile": tile,
                "meters": projection.tile_bounds(tile, zoom),
                "lat_lon": projection.tile_lat_lon_bounds(tile, zoom),
            })
        }
        Command::Quadkey { ref key } => {
            let coord = TileCoord::from_quadkey(key)
                .with_context(|| format!("Failed to decode quadkey '{}'", key))?;
            let tile = TileIndex::new(coord.x as i64, coord.y as i64);
            let children = coord
                .children()
                .filter(|_| coord.z < MAX_QUADKEY_LEN as u32)
                .map(|children| children.map(|child| child.quadkey()));
            json!({
                "tile": coord,
                "meters": projection.tile_bounds(tile, coord.z),
                "lat_lon": projection.tile_lat_lon_bounds(tile, coord.z),
                "parent": coord.parent().map(|parent| parent.quadkey()),
                "children": children,
            })
        }
        Command::Resolution { zoom } => {
            json!({
                "zoom": zoom,
                "resolution": projection.resolution(zoom),
                "tiles_per_axis": projection.tile_count(zoom),
            })
        }
        Command::ZoomFor { pixel_size } => {
            json!({ "zoom": projection.zoom_for_pixel_size(pixel_size) })
        }
        Command::TilesInBbox { bbox, zoom } => {
            let (north_west, south_east) = projection.tile_range(&bbox, zoom);
            let columns = south_east.x.saturating_sub(north_west.x).saturating_add(1).max(0);
            let rows = south_east.y.saturating_sub(north_west.y).saturating_add(1).max(0);
            json!({
                "zoom": zoom,
                "north_west": north_west,
                "south_east": south_east,
                "count": columns.saturating_mul(rows),
            })
        }
    };

    Ok(output)
}
