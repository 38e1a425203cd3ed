//! # convex_hull3d
//!
//! Randomized incremental construction of the 3D convex hull of a point
//! set (the Clarkson-Shor algorithm), represented as a doubly-connected
//! edge list.
//!
//! The entry points are [`hull::convex_hull`] and
//! [`hull::convex_hull_with_rng`]; both return a [`dcel::Dcel`], the
//! triangulated boundary mesh.
//!
//! ## References
//!
//! - K. Clarkson and P. Shor. 1989. Applications of random sampling in
//!   computational geometry, II.
//! - K. Mulmuley. 1993. Computational Geometry: An Introduction Through
//!   Randomized Algorithms.

#![warn(missing_docs, clippy::all)]

pub mod conflict_graph;
pub mod dcel;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod mesh_io;
mod utils;

pub use dcel::Dcel;
pub use error::HullError;
pub use hull::{convex_hull, convex_hull_with_rng};

#[cfg(test)]
mod tests;
