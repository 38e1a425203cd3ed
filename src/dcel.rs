//! The doubly-connected edge list: the boundary-mesh representation of the
//! evolving (and, at the end, final) polytope. Three dense, index-addressed
//! collections (`vertices`, `half_edges`, `faces`) with no owning
//! references between records — only integer ids cross-reference them.
//!
//! Deletion during a run is deferred: [`Dcel::compact`] is the only place
//! ids are ever renumbered, and it produces a fresh `Dcel` rather than
//! mutating this one in place. See `SPEC_FULL.md` §4.2.

use crate::error::HullError;
use crate::geometry::Point;
use crate::utils::count_le;

/// Id of a vertex, stable until [`Dcel::compact`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// Id of a half-edge, stable until [`Dcel::compact`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// Id of a face, stable until [`Dcel::compact`] is called. Also used,
/// numerically, to index the conflict graph's `FaceNode` array (see
/// `conflict_graph`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId(pub usize);

#[derive(Debug, Clone)]
pub struct Vertex {
    pub coord: Point,
    /// V1: if set, the referenced half-edge originates at this vertex.
    pub incident_edge: Option<EdgeId>,
}

#[derive(Debug, Clone)]
pub struct HalfEdge {
    pub from: VertexId,
    pub to: VertexId,
    /// Unset only between `add_half_edge` and the setter call that follows
    /// it during construction; reading it unset past that point is an
    /// [`HullError::InvariantViolation`].
    pub twin: Option<EdgeId>,
    pub next: Option<EdgeId>,
    pub prev: Option<EdgeId>,
    pub face: Option<FaceId>,
}

#[derive(Debug, Clone)]
pub struct Face {
    /// F1: the cycle starting here has exactly three half-edges, each
    /// pointing back to this face.
    pub inner_edge: EdgeId,
}

/// The mesh. Owns every vertex, half-edge, and face record; all
/// cross-references are ids into these three vectors.
#[derive(Debug, Clone, Default)]
pub struct Dcel {
    vertices: Vec<Vertex>,
    half_edges: Vec<HalfEdge>,
    faces: Vec<Face>,
}

impl Dcel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.half_edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    pub fn half_edge(&self, id: EdgeId) -> &HalfEdge {
        &self.half_edges[id.0]
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.0]
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.faces.len()).map(FaceId)
    }

    pub fn add_vertex(&mut self, coord: Point) -> VertexId {
        self.vertices.push(Vertex {
            coord,
            incident_edge: None,
        });
        VertexId(self.vertices.len() - 1)
    }

    pub fn add_half_edge(&mut self, from: VertexId, to: VertexId) -> EdgeId {
        self.half_edges.push(HalfEdge {
            from,
            to,
            twin: None,
            next: None,
            prev: None,
            face: None,
        });
        EdgeId(self.half_edges.len() - 1)
    }

    pub fn add_face(&mut self, inner_edge: EdgeId) -> FaceId {
        self.faces.push(Face { inner_edge });
        FaceId(self.faces.len() - 1)
    }

    pub fn set_twin(&mut self, e: EdgeId, twin: EdgeId) {
        self.half_edges[e.0].twin = Some(twin);
    }

    pub fn set_next(&mut self, e: EdgeId, next: EdgeId) {
        self.half_edges[e.0].next = Some(next);
    }

    pub fn set_prev(&mut self, e: EdgeId, prev: EdgeId) {
        self.half_edges[e.0].prev = Some(prev);
    }

    pub fn set_face(&mut self, e: EdgeId, face: FaceId) {
        self.half_edges[e.0].face = Some(face);
    }

    pub fn set_vertex_incident(&mut self, v: VertexId, e: EdgeId) {
        self.vertices[v.0].incident_edge = Some(e);
    }

    pub fn twin(&self, e: EdgeId) -> EdgeId {
        self.half_edges[e.0]
            .twin
            .expect("half-edge twin read before it was linked")
    }

    pub fn next(&self, e: EdgeId) -> EdgeId {
        self.half_edges[e.0]
            .next
            .expect("half-edge next read before it was linked")
    }

    pub fn prev(&self, e: EdgeId) -> EdgeId {
        self.half_edges[e.0]
            .prev
            .expect("half-edge prev read before it was linked")
    }

    pub fn edge_face(&self, e: EdgeId) -> FaceId {
        self.half_edges[e.0]
            .face
            .expect("half-edge face read before it was linked")
    }

    /// Canonical triangle vertex order for `f`: `innerEdge -> innerEdge.next
    /// -> innerEdge.next.next`, taking the `from` vertex of each.
    pub fn face_triangle_vertices(&self, f: FaceId) -> (VertexId, VertexId, VertexId) {
        let e1 = self.faces[f.0].inner_edge;
        let e2 = self.next(e1);
        let e3 = self.next(e2);
        (
            self.half_edges[e1.0].from,
            self.half_edges[e2.0].from,
            self.half_edges[e3.0].from,
        )
    }

    /// Convenience combining [`Dcel::face_triangle_vertices`] with the
    /// coordinate lookup every caller of it immediately performs.
    pub fn face_triangle_points(&self, f: FaceId) -> (Point, Point, Point) {
        let (v1, v2, v3) = self.face_triangle_vertices(f);
        (
            self.vertices[v1.0].coord,
            self.vertices[v2.0].coord,
            self.vertices[v3.0].coord,
        )
    }

    /// Produces a fresh, renumbered `Dcel` containing only the records not
    /// named in the three (sorted, duplicate-free) deletion sets. Every
    /// surviving id `r` is remapped to `r - (count of deleted ids <= r)`.
    pub fn compact(
        &self,
        deleted_faces: &[FaceId],
        deleted_edges: &[EdgeId],
        deleted_vertices: &[VertexId],
    ) -> Dcel {
        debug_assert!(deleted_vertices.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(deleted_edges.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(deleted_faces.windows(2).all(|w| w[0] < w[1]));

        let remap_vertex = |old: VertexId| VertexId(old.0 - count_le(deleted_vertices, old));
        let remap_edge = |old: EdgeId| EdgeId(old.0 - count_le(deleted_edges, old));
        let remap_face = |old: FaceId| FaceId(old.0 - count_le(deleted_faces, old));

        let mut vertices = Vec::with_capacity(self.vertices.len() - deleted_vertices.len());
        for (i, v) in self.vertices.iter().enumerate() {
            if deleted_vertices.binary_search(&VertexId(i)).is_ok() {
                continue;
            }
            vertices.push(Vertex {
                coord: v.coord,
                incident_edge: v.incident_edge.map(remap_edge),
            });
        }

        let mut half_edges = Vec::with_capacity(self.half_edges.len() - deleted_edges.len());
        for (i, h) in self.half_edges.iter().enumerate() {
            if deleted_edges.binary_search(&EdgeId(i)).is_ok() {
                continue;
            }
            half_edges.push(HalfEdge {
                from: remap_vertex(h.from),
                to: remap_vertex(h.to),
                twin: h.twin.map(remap_edge),
                next: h.next.map(remap_edge),
                prev: h.prev.map(remap_edge),
                face: h.face.map(remap_face),
            });
        }

        let mut faces = Vec::with_capacity(self.faces.len() - deleted_faces.len());
        for (i, f) in self.faces.iter().enumerate() {
            if deleted_faces.binary_search(&FaceId(i)).is_ok() {
                continue;
            }
            faces.push(Face {
                inner_edge: remap_edge(f.inner_edge),
            });
        }

        Dcel {
            vertices,
            half_edges,
            faces,
        }
    }

    /// Checks H1-H5 and F1 across every face. Used by tests and, in debug
    /// builds, by the hull driver after compaction; a failure here always
    /// indicates an implementation bug, never a property of the input.
    pub fn validate(&self) -> Result<(), HullError> {
        for f in self.face_ids() {
            let e1 = self.faces[f.0].inner_edge;
            let e2 = self.next(e1);
            let e3 = self.next(e2);
            let e4 = self.next(e3);
            if e4 != e1 {
                return Err(HullError::InvariantViolation(
                    "H3: face cycle does not close after three edges",
                ));
            }
            if self.prev(e2) != e1 || self.prev(e3) != e2 || self.prev(e1) != e3 {
                return Err(HullError::InvariantViolation(
                    "H2: next/prev are not mutual inverses",
                ));
            }
            if self.edge_face(e1) != f || self.edge_face(e2) != f || self.edge_face(e3) != f {
                return Err(HullError::InvariantViolation(
                    "H5: face cycle edges do not share a face",
                ));
            }
            if self.half_edges[e2.0].from != self.half_edges[e1.0].to
                || self.half_edges[e3.0].from != self.half_edges[e2.0].to
                || self.half_edges[e1.0].from != self.half_edges[e3.0].to
            {
                return Err(HullError::InvariantViolation(
                    "H4: consecutive edges do not chain from.to",
                ));
            }
            for e in [e1, e2, e3] {
                let t = self.twin(e);
                if self.twin(t) != e {
                    return Err(HullError::InvariantViolation("H1: twin is not involutive"));
                }
                if self.half_edges[t.0].from != self.half_edges[e.0].to
                    || self.half_edges[t.0].to != self.half_edges[e.0].from
                {
                    return Err(HullError::InvariantViolation(
                        "H1: twin endpoints do not reverse this edge's",
                    ));
                }
            }
        }
        for v in self.vertex_ids() {
            if let Some(e) = self.vertices[v.0].incident_edge {
                if self.half_edges[e.0].from != v {
                    return Err(HullError::InvariantViolation(
                        "V1: incident edge does not originate at its vertex",
                    ));
                }
            }
        }
        Ok(())
    }
}
