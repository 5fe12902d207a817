//! Common types shared by the Web Mercator tiling crates.

pub mod bbox;
pub mod error;
pub mod tile;

pub use bbox::BoundingBox;
pub use error::{TileError, TileResult};
pub use tile::{TileCoord, MAX_QUADKEY_LEN};
