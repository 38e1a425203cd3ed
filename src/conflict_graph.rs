//! The conflict graph: a bipartite structure between points not yet
//! inserted into the hull (kept as a stack, consumed top-down) and the
//! faces of the current hull they see. See `SPEC_FULL.md` §4.4.
//!
//! Points are only ever removed by popping the stack's top. Faces are
//! registered once per `Dcel::add_face` call and, once visible to an
//! inserted point, detached and abandoned rather than reused; the driver
//! never recycles a `FaceId`'s conflict list onto new geometry. Because of
//! this, ids handed out by [`ConflictGraph::add_point`] and
//! [`ConflictGraph::add_face`] stay valid for the whole run; the structure
//! is simply dropped once the driver loop empties it, with no compaction
//! pass of its own.

use crate::dcel::FaceId;
use crate::geometry::Point;
use crate::utils::{insert_sorted_unique, remove_sorted};

/// Id of a point waiting to be inserted into the hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub usize);

struct PointNode {
    coord: Point,
    /// C2: sorted, duplicate-free.
    conflict_faces: Vec<FaceId>,
}

struct FaceNode {
    /// C2: sorted, duplicate-free.
    conflict_points: Vec<PointId>,
}

/// The bipartite conflict structure. Indexed by [`PointId`] and [`FaceId`]
/// respectively; a face's index in `faces` is numerically its [`FaceId`],
/// matching the DCEL's own face numbering (callers are expected to call
/// [`ConflictGraph::add_face`] in lockstep with `Dcel::add_face`).
#[derive(Default)]
pub struct ConflictGraph {
    points: Vec<PointNode>,
    faces: Vec<FaceNode>,
}

impl ConflictGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new point onto the stack. The returned id is the new top
    /// until another point is pushed on top of it.
    pub fn add_point(&mut self, coord: Point) -> PointId {
        self.points.push(PointNode {
            coord,
            conflict_faces: Vec::new(),
        });
        PointId(self.points.len() - 1)
    }

    /// Registers a new face with an empty conflict list. Must be called
    /// once per `Dcel::add_face`, in the same order, so that the returned
    /// id equals the corresponding `FaceId`.
    pub fn add_face(&mut self) -> FaceId {
        self.faces.push(FaceNode {
            conflict_points: Vec::new(),
        });
        FaceId(self.faces.len() - 1)
    }

    /// C1: records that `p` sees `f`, in both directions.
    pub fn add_conflict(&mut self, p: PointId, f: FaceId) {
        insert_sorted_unique(&mut self.points[p.0].conflict_faces, f);
        insert_sorted_unique(&mut self.faces[f.0].conflict_points, p);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point at the top of the stack: the next one the driver loop
    /// will consume.
    pub fn next_point(&self) -> (PointId, Point) {
        let id = PointId(self.points.len() - 1);
        (id, self.points[id.0].coord)
    }

    /// Faces the top-of-stack point currently conflicts with.
    pub fn next_conflict_faces(&self) -> &[FaceId] {
        &self.points[self.points.len() - 1].conflict_faces
    }

    pub fn next_point_has_no_conflicts(&self) -> bool {
        self.next_conflict_faces().is_empty()
    }

    pub fn point_coord(&self, p: PointId) -> Point {
        self.points[p.0].coord
    }

    /// Read-only view of the points that currently see `f`, without
    /// detaching anything. Callers that need to both read and clear a
    /// face's list should read first, then call
    /// [`ConflictGraph::detach_face`].
    pub fn face_conflict_points(&self, f: FaceId) -> &[PointId] {
        &self.faces[f.0].conflict_points
    }

    /// Severs every point<->face edge touching `f`, returning the points
    /// that used to see it. Leaves `f`'s own slot present but empty; the
    /// driver calls this once per visible face before deleting it.
    pub fn detach_face(&mut self, f: FaceId) -> Vec<PointId> {
        let points = std::mem::take(&mut self.faces[f.0].conflict_points);
        for &p in &points {
            remove_sorted(&mut self.points[p.0].conflict_faces, f);
        }
        points
    }

    /// Pops the top-of-stack point. Its `conflict_faces` list is expected
    /// to already be empty (every face it conflicted with should have been
    /// visited via [`ConflictGraph::detach_face`] during the splice that
    /// consumed it); any stragglers are cleaned up defensively.
    pub fn pop_next_point(&mut self) -> PointId {
        let node = self
            .points
            .pop()
            .expect("pop_next_point called on an empty conflict graph");
        let id = PointId(self.points.len());
        for f in node.conflict_faces {
            remove_sorted(&mut self.faces[f.0].conflict_points, id);
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn p(x: f64) -> Point {
        Point::new(x, 0.0, 0.0)
    }

    #[test]
    fn add_conflict_is_symmetric() {
        let mut cg = ConflictGraph::new();
        let pt = cg.add_point(p(1.0));
        let f0 = cg.add_face();
        let f1 = cg.add_face();
        cg.add_conflict(pt, f0);
        cg.add_conflict(pt, f1);
        assert_eq!(cg.next_conflict_faces(), &[f0, f1]);
        assert_eq!(cg.face_conflict_points(f0), &[pt]);
        assert_eq!(cg.face_conflict_points(f1), &[pt]);
    }

    #[test]
    fn detach_face_removes_both_directions() {
        let mut cg = ConflictGraph::new();
        let a = cg.add_point(p(1.0));
        let b = cg.add_point(p(2.0));
        let f = cg.add_face();
        cg.add_conflict(a, f);
        cg.add_conflict(b, f);
        let seen = cg.detach_face(f);
        assert_eq!(seen, vec![a, b]);
        assert!(cg.face_conflict_points(f).is_empty());
        assert!(cg.next_conflict_faces().is_empty());
    }

    #[test]
    fn pop_next_point_cleans_up_remaining_edges_and_shrinks_stack() {
        let mut cg = ConflictGraph::new();
        let a = cg.add_point(p(1.0));
        let top = cg.add_point(p(2.0));
        let f = cg.add_face();
        cg.add_conflict(a, f);
        cg.add_conflict(top, f);
        let popped = cg.pop_next_point();
        assert_eq!(popped, top);
        assert!(!cg.is_empty());
        assert_eq!(cg.next_point().0, a);
        // `top`'s edge to `f` must be gone even though it was never
        // explicitly detached before the pop.
        assert_eq!(cg.face_conflict_points(f), &[a]);
    }
}
