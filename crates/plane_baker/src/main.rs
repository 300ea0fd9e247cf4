//! LOD plane baker.
//!
//! Builds a quadtree for the configured targets, meshes every leaf with edge
//! stitching and writes the result as a Wavefront OBJ.
//!
//! Logging goes through `tracing`; set `RUST_LOG=lod_plane=debug` for build
//! details.

mod config;
mod obj;

use anyhow::{Context, Result};
use clap::Parser;
use lod_plane::NeighborMode;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use config::BakeConfig;

/// LOD plane mesh baker.
#[derive(Parser, Debug)]
#[command(name = "bake_plane")]
#[command(about = "Bakes distance-driven LOD plane meshes into OBJ")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: PathBuf,

	/// Output OBJ path (default: `output` from the config, relative to it).
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Classify neighbors across parent boundaries.
	#[arg(long)]
	geometric: bool,
}

fn main() -> Result<()> {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
		.with_target(false)
		.init();

	tracing::info!("Loading config from: {}", args.config.display());
	let mut config = BakeConfig::load(&args.config)?;
	if args.geometric {
		config.plane.neighbor_mode = NeighborMode::Geometric;
	}

	let output = args.output.unwrap_or_else(|| {
		args.config
			.parent()
			.unwrap_or(Path::new("."))
			.join(&config.output)
	});

	let targets = config.targets();
	let plane = config
		.plane
		.generate(&targets)
		.context("Plane generation failed")?;

	let stats = plane.tree.stats();
	println!(
		"Built {} branches ({} leaves, max depth {}) for {} targets",
		stats.branch_count,
		stats.leaf_count,
		stats.max_depth,
		targets.len()
	);
	println!(
		"Meshed {} vertices, {} triangles in {} us ({:?} neighbors)",
		plane.vertex_count(),
		plane.triangle_count(),
		plane.mesh_time_us(),
		config.plane.neighbor_mode
	);

	obj::write_obj_file(&output, &plane)?;
	println!("Done! Output written to: {}", output.display());

	Ok(())
}
