//! `convex_hull <input.off> <output.off>`: reads a point cloud, computes
//! its convex hull, writes the resulting mesh back out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Compute the 3D convex hull of a point cloud.
#[derive(Debug, Parser)]
struct Args {
    /// OFF file containing the input points.
    input: PathBuf,
    /// OFF file the resulting hull mesh is written to.
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = Args::parse();

    let points = convex_hull3d::mesh_io::read_off(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    tracing::info!(count = points.len(), "read input points");

    let dcel = convex_hull3d::hull::convex_hull(&points).context("computing convex hull")?;
    tracing::info!(
        vertices = dcel.vertex_count(),
        faces = dcel.face_count(),
        "computed hull"
    );

    convex_hull3d::mesh_io::write_off(&args.output, &dcel)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(path = %args.output.display(), "wrote hull");

    Ok(())
}
