//! The three-valued orientation predicate and the "sees" visibility test
//! that every other module in this crate reduces to.

use glam::DVec3;

/// A point in space. Identity is positional; points carry no id of their
/// own, the collections that hold them (conflict graph, DCEL) assign ids.
pub type Point = DVec3;

/// Sign of a 3D orientation determinant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Negative,
    Zero,
    Positive,
}

trait ToRobust {
    fn to_robust(self) -> robust::Coord3D<f64>;
}

impl ToRobust for Point {
    fn to_robust(self) -> robust::Coord3D<f64> {
        robust::Coord3D {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

/// Sign of the determinant of the matrix whose rows are `(a, 1), (b, 1),
/// (c, 1), (d, 1)`. Positive exactly when `d` lies on the side of the plane
/// `a, b, c` reached by a right-hand turn from `a` to `b` to `c`, i.e.
/// exactly when `sees` should report visibility.
pub fn orient(a: Point, b: Point, c: Point, d: Point) -> Orientation {
    // `robust::orient3d` uses the opposite sign convention from the
    // determinant this predicate is specified against, so it is negated
    // here once, centrally, rather than at every call site.
    let det = -robust::orient3d(a.to_robust(), b.to_robust(), c.to_robust(), d.to_robust());
    if det > 0.0 {
        Orientation::Positive
    } else if det < 0.0 {
        Orientation::Negative
    } else {
        Orientation::Zero
    }
}

/// Whether `p` lies strictly on the outward side of the triangle `(v1, v2,
/// v3)`, with `v1 -> v2 -> v3` the counterclockwise cycle of the face as
/// seen from outside the hull.
pub fn sees(v1: Point, v2: Point, v3: Point, p: Point) -> bool {
    orient(v1, v2, v3, p) == Orientation::Positive
}

/// Signed area-weighted normal of a counterclockwise triangle, used only
/// by tests to sanity-check orientation.
#[cfg(test)]
pub(crate) fn triangle_normal(a: Point, b: Point, c: Point) -> Point {
    (b - a).cross(c - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sees_outward_not_inward() {
        let v1 = Point::new(1.0, 0.0, 0.0);
        let v2 = Point::new(0.0, 1.0, 0.0);
        let v3 = Point::new(0.0, 0.0, 1.0);
        let outside = Point::new(10.0, 10.0, 10.0);
        let inside = Point::new(0.0, 0.0, 0.0);
        let coplanar = Point::new(0.5, 0.5, 0.0);

        assert!(sees(v1, v2, v3, outside));
        assert!(!sees(v1, v2, v3, inside));
        assert_eq!(orient(v1, v2, v3, coplanar), Orientation::Zero);
    }

    #[test]
    fn orient_is_antisymmetric_under_swap() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let c = Point::new(0.0, 1.0, 0.0);
        let d = Point::new(0.0, 0.0, 1.0);

        assert_eq!(orient(a, b, c, d), Orientation::Positive);
        assert_eq!(orient(b, a, c, d), Orientation::Negative);
    }

    #[test]
    fn triangle_normal_points_outward_for_ccw_winding() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let c = Point::new(0.0, 1.0, 0.0);
        assert_eq!(triangle_normal(a, b, c), Point::new(0.0, 0.0, 1.0));
    }
}
