//! Configuration parsing for plane baking.

use anyhow::{Context, Result};
use glam::Vec2;
use lod_plane::PlaneConfig;
use serde::Deserialize;
use std::path::Path;

/// Root configuration for one bake.
#[derive(Debug, Deserialize)]
pub struct BakeConfig {
	/// OBJ output path, relative to the config file.
	#[serde(default = "default_output")]
	pub output: String,
	/// Target points driving refinement, as [x, y].
	pub targets: Vec<[f32; 2]>,
	/// Region, LOD and mesh settings.
	#[serde(default)]
	pub plane: PlaneConfig,
}

fn default_output() -> String {
	"plane.obj".to_string()
}

impl BakeConfig {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		let config: BakeConfig =
			toml::from_str(&content).with_context(|| "Failed to parse config TOML")?;

		if config.targets.is_empty() {
			anyhow::bail!("Config must have at least one target");
		}
		if let Some(i) = config.targets.iter().position(|t| !Vec2::from_array(*t).is_finite()) {
			anyhow::bail!("Target {} is not a finite point", i);
		}
		config.plane.validate().context("Invalid [plane] section")?;

		Ok(config)
	}

	pub fn targets(&self) -> Vec<Vec2> {
		self.targets.iter().copied().map(Vec2::from_array).collect()
	}
}
