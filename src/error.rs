//! Error taxonomy for the hull core, in the style of the reference crate's
//! own `ErrorKind`: a small, `Clone`-able enum with a hand-written
//! `Display` and `std::error::Error` impl, no `thiserror`.

use std::error::Error;
use std::fmt;

/// Why the input point set cannot seed a tetrahedron.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateSeed {
    /// Fewer than four points were supplied.
    TooFewPoints,
    /// Every point in the set is coplanar with every other.
    AllCoplanar,
}

/// The error type returned by this crate's hull construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HullError {
    /// The input point set cannot produce a hull at all.
    InvalidInput(DegenerateSeed),
    /// A break of one of the DCEL or conflict-graph invariants was
    /// detected. This always indicates an implementation bug, not a
    /// property of the input.
    InvariantViolation(&'static str),
    /// An ambient-layer I/O failure (OFF parsing, file access). Not part
    /// of the core's own error taxonomy; surfaced by `mesh_io`.
    Io(String),
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InvalidInput(DegenerateSeed::TooFewPoints) => {
                write!(f, "invalid input: fewer than four points")
            }
            HullError::InvalidInput(DegenerateSeed::AllCoplanar) => {
                write!(f, "invalid input: all points are coplanar")
            }
            HullError::InvariantViolation(msg) => {
                write!(f, "hull invariant violated: {msg}")
            }
            HullError::Io(msg) => write!(f, "mesh I/O error: {msg}"),
        }
    }
}

impl Error for HullError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_distinct() {
        let a = HullError::InvalidInput(DegenerateSeed::TooFewPoints).to_string();
        let b = HullError::InvalidInput(DegenerateSeed::AllCoplanar).to_string();
        let c = HullError::InvariantViolation("h1").to_string();
        let d = HullError::Io("truncated file".into()).to_string();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(c, d);
        assert!(c.contains("h1"));
    }
}
