use super::*;
use geometry::Point;

fn euler_characteristic(dcel: &Dcel) -> i64 {
    let v = dcel.vertex_count() as i64;
    let e = (dcel.edge_count() / 2) as i64;
    let f = dcel.face_count() as i64;
    v - e + f
}

#[test]
fn empty_input_is_too_few_points() {
    let result = convex_hull(&[]);
    assert_eq!(
        result,
        Err(HullError::InvalidInput(error::DegenerateSeed::TooFewPoints))
    );
}

#[test]
fn four_coincident_points_are_coplanar() {
    let points = vec![Point::splat(1.0); 4];
    assert_eq!(
        convex_hull(&points),
        Err(HullError::InvalidInput(error::DegenerateSeed::AllCoplanar))
    );
}

#[test]
fn four_collinear_points_are_coplanar() {
    let points = (0..4)
        .map(|i| Point::new(i as f64, 0.0, 0.0))
        .collect::<Vec<_>>();
    assert_eq!(
        convex_hull(&points),
        Err(HullError::InvalidInput(error::DegenerateSeed::AllCoplanar))
    );
}

#[test]
fn six_points_on_a_shared_plane_are_coplanar() {
    let points = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.5, 0.5, 0.0),
        Point::new(2.0, 2.0, 0.0),
    ];
    assert_eq!(
        convex_hull(&points),
        Err(HullError::InvalidInput(error::DegenerateSeed::AllCoplanar))
    );
}

#[test]
fn octahedron_hull_matches_known_combinatorics() {
    let points = vec![
        Point::new(1.0, 0.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, -1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
    ];
    let dcel = convex_hull(&points).unwrap();
    assert_eq!(dcel.vertex_count(), 6);
    assert_eq!(dcel.face_count(), 8);
    assert_eq!(dcel.edge_count(), 24);
    dcel.validate().unwrap();
    assert_eq!(euler_characteristic(&dcel), 2);
}

#[test]
fn asymmetric_bipyramid_satisfies_eulers_formula() {
    let points = vec![
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, -1.0, 0.0),
        Point::new(0.0, 0.0, 3.0),
        Point::new(0.0, 0.0, -0.5),
    ];
    let dcel = convex_hull(&points).unwrap();
    assert_eq!(dcel.vertex_count(), 6);
    dcel.validate().unwrap();
    assert_eq!(euler_characteristic(&dcel), 2);
}

#[test]
fn points_on_a_sphere_all_become_hull_vertices() {
    // A deterministic golden-angle spiral over the unit sphere; generic
    // enough that no four points land on a common plane.
    let n = 60;
    let golden_angle = std::f64::consts::PI * (3.0 - 5.0f64.sqrt());
    let points: Vec<Point> = (0..n)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f64) / (n as f64 - 1.0);
            let radius = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f64;
            Point::new(theta.cos() * radius, y, theta.sin() * radius)
        })
        .collect();

    let dcel = convex_hull(&points).unwrap();
    assert_eq!(dcel.vertex_count(), n);
    dcel.validate().unwrap();
    assert_eq!(euler_characteristic(&dcel), 2);

    for f in dcel.face_ids() {
        let (v1, v2, v3) = dcel.face_triangle_points(f);
        for &p in &points {
            assert!(!geometry::sees(v1, v2, v3, p));
        }
    }
}

#[test]
fn convex_hull_with_rng_is_reproducible_for_a_fixed_seed() {
    let points: Vec<Point> = (0..30)
        .map(|i| {
            let t = i as f64;
            Point::new((t * 0.37).sin(), (t * 0.71).cos(), (t * 1.13).sin())
        })
        .collect();

    let mut rng_a = rand::rngs::mock::StepRng::new(42, 7);
    let mut rng_b = rand::rngs::mock::StepRng::new(42, 7);
    let a = convex_hull_with_rng(&points, &mut rng_a).unwrap();
    let b = convex_hull_with_rng(&points, &mut rng_b).unwrap();
    assert_eq!(a.vertex_count(), b.vertex_count());
    assert_eq!(a.face_count(), b.face_count());
}
