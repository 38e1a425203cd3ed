//! The randomized incremental driver: seeds a tetrahedron, then consumes
//! the conflict graph's point stack one point at a time, each time
//! removing the faces that point sees, walking the horizon of that
//! visible region, and fanning new triangles from the point to the
//! horizon. See `SPEC_FULL.md` §4.5-§4.7.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::conflict_graph::{ConflictGraph, PointId};
use crate::dcel::{Dcel, EdgeId, FaceId, VertexId};
use crate::error::{DegenerateSeed, HullError};
use crate::geometry::{orient, sees, Orientation, Point};
use crate::utils::insert_sorted_unique;

/// Builds the seed tetrahedron on `a, b, c, e` (in any order, as long as
/// they are not all coplanar), wiring up all 12 half-edges and 4 faces so
/// that [`Dcel::validate`] holds. Returns the four face ids in the order
/// they were created: the base face `(a, b, c)` first, the three side
/// faces after.
pub fn seed_tetrahedron(
    dcel: &mut Dcel,
    mut a: Point,
    mut b: Point,
    c: Point,
    e: Point,
) -> Result<[FaceId; 4], HullError> {
    match orient(a, b, c, e) {
        Orientation::Zero => {
            return Err(HullError::InvalidInput(DegenerateSeed::AllCoplanar));
        }
        Orientation::Positive => std::mem::swap(&mut a, &mut b),
        Orientation::Negative => {}
    }
    // Past this point orient(a, b, c, e) == Negative: e lies on the inward
    // side of the base face, so omitting each vertex in turn and winding
    // the remaining three this way keeps every face's outward normal
    // consistent with `geometry::sees`.
    let va = dcel.add_vertex(a);
    let vb = dcel.add_vertex(b);
    let vc = dcel.add_vertex(c);
    let ve = dcel.add_vertex(e);

    let mut edge_of: HashMap<(VertexId, VertexId), EdgeId> = HashMap::new();
    let f0 = add_seed_face(dcel, &mut edge_of, [va, vb, vc]);
    let f1 = add_seed_face(dcel, &mut edge_of, [vb, va, ve]);
    let f2 = add_seed_face(dcel, &mut edge_of, [va, vc, ve]);
    let f3 = add_seed_face(dcel, &mut edge_of, [vc, vb, ve]);

    let edges: Vec<(VertexId, VertexId, EdgeId)> = edge_of
        .iter()
        .map(|(&(from, to), &edge)| (from, to, edge))
        .collect();
    for (from, to, edge) in edges {
        let twin = edge_of[&(to, from)];
        dcel.set_twin(edge, twin);
    }

    Ok([f0, f1, f2, f3])
}

fn add_seed_face(
    dcel: &mut Dcel,
    edge_of: &mut HashMap<(VertexId, VertexId), EdgeId>,
    verts: [VertexId; 3],
) -> FaceId {
    let mut edges = [EdgeId(0); 3];
    for i in 0..3 {
        let from = verts[i];
        let to = verts[(i + 1) % 3];
        let edge = dcel.add_half_edge(from, to);
        edges[i] = edge;
        edge_of.insert((from, to), edge);
        dcel.set_vertex_incident(from, edge);
    }
    for i in 0..3 {
        dcel.set_next(edges[i], edges[(i + 1) % 3]);
        dcel.set_prev(edges[i], edges[(i + 2) % 3]);
    }
    let face = dcel.add_face(edges[0]);
    for e in edges {
        dcel.set_face(e, face);
    }
    face
}

/// Walks the boundary of a visible-face region and returns the ordered
/// cycle of boundary half-edges, each belonging to the *surviving* face on
/// the far side of the horizon. `visible` must be sorted.
fn extract_horizon(dcel: &Dcel, visible: &[FaceId]) -> Vec<EdgeId> {
    let mut horizon = Vec::new();
    for &f in visible {
        let inner = dcel.face(f).inner_edge;
        let e2 = dcel.next(inner);
        let e3 = dcel.next(e2);
        for e in [inner, e2, e3] {
            let t = dcel.twin(e);
            if visible.binary_search(&dcel.edge_face(t)).is_err() {
                horizon.push(t);
            }
        }
    }

    let by_from: HashMap<VertexId, EdgeId> = horizon
        .iter()
        .map(|&e| (dcel.half_edge(e).from, e))
        .collect();

    let mut ordered = Vec::with_capacity(horizon.len());
    let mut cur = horizon[0];
    for _ in 0..horizon.len() {
        ordered.push(cur);
        let to = dcel.half_edge(cur).to;
        cur = by_from[&to];
    }
    ordered
}

/// Builds the convex hull of `points`, seeding the permutation from the
/// thread-local RNG.
pub fn convex_hull(points: &[Point]) -> Result<Dcel, HullError> {
    let mut rng = rand::rng();
    convex_hull_with_rng(points, &mut rng)
}

/// Builds the convex hull of `points` using the caller-supplied RNG for
/// the initial random permutation, making the construction reproducible
/// given a seeded RNG.
pub fn convex_hull_with_rng(points: &[Point], rng: &mut impl Rng) -> Result<Dcel, HullError> {
    if points.len() < 4 {
        return Err(HullError::InvalidInput(DegenerateSeed::TooFewPoints));
    }

    let mut order: Vec<Point> = points.to_vec();
    order.shuffle(rng);

    let p0 = order[0];
    let p1 = order[1];
    let p2 = order[2];
    let mut seed_idx = 3;
    while seed_idx < order.len() && orient(p0, p1, p2, order[seed_idx]) == Orientation::Zero {
        seed_idx += 1;
    }
    if seed_idx == order.len() {
        return Err(HullError::InvalidInput(DegenerateSeed::AllCoplanar));
    }
    let p3 = order[seed_idx];

    let remaining: Vec<Point> = order
        .iter()
        .enumerate()
        .skip(3)
        .filter(|&(i, _)| i != seed_idx)
        .map(|(_, &pt)| pt)
        .collect();

    let mut dcel = Dcel::new();
    let mut cg = ConflictGraph::new();
    let seed_faces = seed_tetrahedron(&mut dcel, p0, p1, p2, p3)?;
    for _ in 0..4 {
        cg.add_face();
    }

    for &pt in remaining.iter().rev() {
        let pid = cg.add_point(pt);
        for &f in &seed_faces {
            let (v1, v2, v3) = dcel.face_triangle_points(f);
            if sees(v1, v2, v3, pt) {
                cg.add_conflict(pid, f);
            }
        }
    }

    let mut deleted_faces: Vec<FaceId> = Vec::new();
    let mut deleted_edges: Vec<EdgeId> = Vec::new();
    let mut deleted_vertices: Vec<VertexId> = Vec::new();

    while !cg.is_empty() {
        if cg.next_point_has_no_conflicts() {
            cg.pop_next_point();
            continue;
        }

        let (pid, p) = cg.next_point();
        let visible: Vec<FaceId> = cg.next_conflict_faces().to_vec();
        let horizon = extract_horizon(&dcel, &visible);
        if horizon.is_empty() {
            return Err(HullError::InvariantViolation(
                "horizon extraction produced no boundary edges",
            ));
        }

        // Candidates for each new face spanning horizon edge h are drawn
        // from both faces meeting at h: the visible face about to be
        // deleted, and the surviving face on the far side. A point can
        // currently conflict with only the surviving face and still see
        // the new triangle that replaces h's visible side.
        let mut candidates: Vec<Vec<PointId>> = Vec::with_capacity(horizon.len());
        for &h in &horizon {
            let visible_face = dcel.edge_face(dcel.twin(h));
            let surviving_face = dcel.edge_face(h);
            let mut c: Vec<PointId> = Vec::new();
            for &q in cg.face_conflict_points(visible_face) {
                insert_sorted_unique(&mut c, q);
            }
            for &q in cg.face_conflict_points(surviving_face) {
                insert_sorted_unique(&mut c, q);
            }
            c.retain(|&q| q != pid);
            candidates.push(c);
        }

        let horizon_vertices: Vec<VertexId> = {
            let mut vs = Vec::with_capacity(horizon.len());
            for &h in &horizon {
                insert_sorted_unique(&mut vs, dcel.half_edge(h).from);
                insert_sorted_unique(&mut vs, dcel.half_edge(h).to);
            }
            vs
        };

        for &f in &visible {
            cg.detach_face(f);
            let inner = dcel.face(f).inner_edge;
            let e2 = dcel.next(inner);
            let e3 = dcel.next(e2);
            insert_sorted_unique(&mut deleted_faces, f);
            insert_sorted_unique(&mut deleted_edges, inner);
            insert_sorted_unique(&mut deleted_edges, e2);
            insert_sorted_unique(&mut deleted_edges, e3);

            // A visible-face vertex not on the horizon has every incident
            // face inside the visible region (the visible region is always
            // a topological disk), so it is left with no faces at all once
            // this splice finishes and must be deleted too.
            let (v1, v2, v3) = dcel.face_triangle_vertices(f);
            for v in [v1, v2, v3] {
                if horizon_vertices.binary_search(&v).is_err() {
                    insert_sorted_unique(&mut deleted_vertices, v);
                }
            }
        }

        let new_vertex = dcel.add_vertex(p);
        let k = horizon.len();
        let mut e2s = Vec::with_capacity(k);
        let mut e3s = Vec::with_capacity(k);
        let mut new_faces = Vec::with_capacity(k);

        for &t in &horizon {
            let a = dcel.half_edge(t).from;
            let b = dcel.half_edge(t).to;

            let e1 = dcel.add_half_edge(b, a);
            dcel.set_twin(e1, t);
            dcel.set_twin(t, e1);
            let e2 = dcel.add_half_edge(a, new_vertex);
            let e3 = dcel.add_half_edge(new_vertex, b);
            dcel.set_next(e1, e2);
            dcel.set_prev(e2, e1);
            dcel.set_next(e2, e3);
            dcel.set_prev(e3, e2);
            dcel.set_next(e3, e1);
            dcel.set_prev(e1, e3);

            let face = dcel.add_face(e1);
            dcel.set_face(e1, face);
            dcel.set_face(e2, face);
            dcel.set_face(e3, face);
            dcel.set_vertex_incident(a, e2);
            dcel.set_vertex_incident(b, e1);

            let cg_face = cg.add_face();
            debug_assert_eq!(cg_face, face, "conflict graph face ids drifted from the DCEL's");

            e2s.push(e2);
            e3s.push(e3);
            new_faces.push(face);
        }
        dcel.set_vertex_incident(new_vertex, e2s[0]);

        for i in 0..k {
            let j = (i + 1) % k;
            dcel.set_twin(e3s[i], e2s[j]);
            dcel.set_twin(e2s[j], e3s[i]);
        }

        for i in 0..k {
            let face = new_faces[i];
            let (v1, v2, v3) = dcel.face_triangle_points(face);
            for &q in &candidates[i] {
                let qc = cg.point_coord(q);
                if sees(v1, v2, v3, qc) {
                    cg.add_conflict(q, face);
                }
            }
        }

        cg.pop_next_point();
    }

    let compacted = dcel.compact(&deleted_faces, &deleted_edges, &deleted_vertices);
    debug_assert!(
        compacted.validate().is_ok(),
        "hull construction produced an invalid DCEL"
    );
    Ok(compacted)
}
