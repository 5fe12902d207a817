//! `mercator` command-line tool.
//!
//! Examples:
//!   mercator tile --lat 40.7128 --lon -74.0060 --zoom 16
//!   mercator --tile-size 512 resolution --zoom 3
//!   mercator quadkey --key 0231

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use mercator_cli::{run, Args};

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    args.init_tracing();

    let projection = args.projection();
    debug!(
        tile_size = projection.tile_size(),
        tile_indexing = %projection.tile_indexing(),
        "Configured projection"
    );

    let output = run(&projection, &args.command)?;
    let text = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", text);

    Ok(())
}
