//! Wavefront OBJ export.
//!
//! One object per leaf, named after its branch index. Positions only; face
//! indices are 1-based and global across objects.

use anyhow::{Context, Result};
use lod_plane::GeneratedPlane;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write every leaf mesh of `plane` as OBJ text.
pub fn write_obj<W: Write>(out: &mut W, plane: &GeneratedPlane) -> std::io::Result<()> {
	writeln!(
		out,
		"# {} leaves, {} vertices, {} triangles",
		plane.leaves.len(),
		plane.vertex_count(),
		plane.triangle_count()
	)?;

	let mut base = 1u64;
	for leaf in &plane.leaves {
		writeln!(out, "o leaf_{}", leaf.branch)?;
		for p in &leaf.mesh.positions {
			writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
		}
		for [a, b, c] in leaf.mesh.triangles() {
			writeln!(
				out,
				"f {} {} {}",
				base + a as u64,
				base + b as u64,
				base + c as u64
			)?;
		}
		base += leaf.mesh.vertex_count() as u64;
	}
	Ok(())
}

/// Write `plane` to `path`, creating parent directories as needed.
pub fn write_obj_file(path: &Path, plane: &GeneratedPlane) -> Result<()> {
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent)
			.with_context(|| format!("Failed to create output dir: {}", parent.display()))?;
	}

	let file =
		File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;
	let mut out = BufWriter::new(file);
	write_obj(&mut out, plane).with_context(|| format!("Failed to write: {}", path.display()))?;
	out.flush()
		.with_context(|| format!("Failed to write: {}", path.display()))?;
	Ok(())
}
