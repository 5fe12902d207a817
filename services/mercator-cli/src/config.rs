//! Command-line and environment configuration.
//!
//! Settings come from flags, then environment variables (a `.env` file is
//! loaded first), then defaults:
//!
//! - `MERCATOR_TILE_SIZE` (default 256)
//! - `MERCATOR_TILE_INDEXING`: `ceil-minus-one` (default) or `floor`
//! - `LOG_LEVEL` (default `warn`), overridden by `RUST_LOG` when set

use clap::Parser;
use projection::{Projection, TileIndexing, DEFAULT_TILE_SIZE};
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands::Command;

#[derive(Parser, Debug)]
#[command(name = "mercator")]
#[command(about = "Convert between lat/lon, Web Mercator meters, pixels and tiles")]
pub struct Args {
    /// Tile edge length in pixels
    #[arg(long, global = true, env = "MERCATOR_TILE_SIZE", default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Pixel to tile rule: ceil-minus-one or floor
    #[arg(
        long,
        global = true,
        env = "MERCATOR_TILE_INDEXING",
        default_value = "ceil-minus-one"
    )]
    pub tile_indexing: TileIndexing,

    /// Log level
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Pretty-print the JSON result
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Build the projection described by these settings.
    pub fn projection(&self) -> Projection {
        Projection::new(self.tile_size).with_tile_indexing(self.tile_indexing)
    }

    /// Install the global tracing subscriber, writing to stderr.
    pub fn init_tracing(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let builder = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true);

        if self.log_json {
            builder.json().init();
        } else {
            builder.init();
        }
    }
}
