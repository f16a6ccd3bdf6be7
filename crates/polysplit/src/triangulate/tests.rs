use super::*;
use crate::geom2::rand::{draw_star_polygon, RadialCfg, ReplayToken, VertexCount};
use crate::geom2::{area, orientation, point_in_polygon, triangle_area, GeomCfg, Orientation};
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn square() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ]
}

fn pentagon() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![2.0, -1.0],
        vector![4.0, 0.0],
        vector![3.0, 3.0],
        vector![1.0, 3.0],
    ]
}

/// Rectangle body with a spike on the left; the spike tip (vertex 0) sees
/// only its two neighbours.
fn hidden_tip() -> Vec<Vector2<f64>> {
    vec![
        vector![-10.0, 0.0],
        vector![0.0, -1.0],
        vector![0.0, -10.0],
        vector![2.0, -10.0],
        vector![2.0, 10.0],
        vector![0.0, 10.0],
        vector![0.0, 1.0],
    ]
}

/// Self-intersecting five-pointed star (every second vertex of a pentagon).
fn pentagram() -> Vec<Vector2<f64>> {
    (0..5)
        .map(|k| {
            let j = (2 * k) % 5;
            let th = std::f64::consts::FRAC_PI_2 + 2.0 * std::f64::consts::PI * (j as f64) / 5.0;
            vector![th.cos(), th.sin()]
        })
        .collect()
}

fn triangles_area(points: &[Vector2<f64>], tris: &[Triangle]) -> f64 {
    tris.iter()
        .map(|t| {
            let [a, b, c] = t.indices();
            triangle_area(points[a], points[b], points[c])
        })
        .sum()
}

/// Shared structural checks: count, index validity, area partition.
fn check_partition(points: &[Vector2<f64>], tris: &[Triangle]) {
    let n = points.len();
    assert_eq!(tris.len(), n - 2);
    for t in tris {
        let [a, b, c] = t.indices();
        assert!(a < n && b < n && c < n, "{t:?}");
        assert!(a != b && b != c && a != c, "{t:?}");
    }
    let poly_area = area(points);
    let sum = triangles_area(points, tris);
    assert!(
        (sum - poly_area).abs() <= 1e-9 * poly_area.max(1.0),
        "sum={sum} area={poly_area}"
    );
}

/// Number of triangles whose interior strictly contains `p`.
fn strict_cover_count(points: &[Vector2<f64>], tris: &[Triangle], p: Vector2<f64>) -> usize {
    let cfg = GeomCfg::with_eps(1e-9);
    tris.iter()
        .filter(|t| {
            let [a, b, c] = t.indices();
            let (a, b, c) = (points[a], points[b], points[c]);
            let o = [
                orientation(a, b, p, cfg),
                orientation(b, c, p, cfg),
                orientation(c, a, p, cfg),
            ];
            o.iter().all(|&x| x == Orientation::CounterClockwise)
                || o.iter().all(|&x| x == Orientation::Clockwise)
        })
        .count()
}

#[test]
fn square_scenario() {
    let sq = square();
    let tris = triangulate(&sq).unwrap();
    check_partition(&sq, &tris);
    assert!((triangles_area(&sq, &tris) - 16.0).abs() < 1e-12);
}

#[test]
fn pentagon_scenario() {
    let pent = pentagon();
    let tris = triangulate(&pent).unwrap();
    assert_eq!(tris.len(), 3);
    check_partition(&pent, &tris);
    assert!((triangles_area(&pent, &tris) - 11.0).abs() < 1e-12);
}

#[test]
fn single_triangle_passthrough() {
    let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
    assert_eq!(triangulate(&pts).unwrap(), vec![Triangle::new(0, 1, 2)]);
}

#[test]
fn quad_picks_separating_diagonal() {
    // dart with the reflex vertex at 1: diagonal 0-2 lies outside
    let dart = vec![
        vector![0.0, 0.0],
        vector![2.0, 1.0],
        vector![4.0, 0.0],
        vector![2.0, 4.0],
    ];
    let tris = triangulate(&dart).unwrap();
    assert_eq!(tris, vec![Triangle::new(1, 2, 3), Triangle::new(3, 0, 1)]);
    check_partition(&dart, &tris);

    // convex quad: diagonal 0-2 separates 1 and 3
    let tris = triangulate(&square()).unwrap();
    assert_eq!(tris, vec![Triangle::new(0, 1, 2), Triangle::new(2, 3, 0)]);
}

#[test]
fn anchor_retry_recovers_hidden_tip() {
    let pts = hidden_tip();
    let tris = triangulate(&pts).unwrap();
    check_partition(&pts, &tris);
    assert!((triangles_area(&pts, &tris) - 50.0).abs() < 1e-9);
}

#[test]
fn without_retry_hidden_tip_fails_with_section() {
    let pts = hidden_tip();
    let cfg = TriangulateCfg {
        retry: AnchorRetry { max_rotations: 0 },
        ..TriangulateCfg::default()
    };
    let err = triangulate_with(&pts, cfg).unwrap_err();
    assert_eq!(
        err,
        TriangulateError::NoDiagonal {
            section: (0..7).collect(),
            rotations: 0,
        }
    );
}

#[test]
fn self_intersecting_star_is_reported() {
    let err = triangulate(&pentagram()).unwrap_err();
    assert!(err.to_string().contains("[0, 1, 2, 3, 4]"), "{err}");
    match err {
        TriangulateError::NoDiagonal { section, rotations } => {
            assert_eq!(section, vec![0, 1, 2, 3, 4]);
            assert_eq!(rotations, 1);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn input_contract_violations() {
    let two = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
    assert_eq!(
        triangulate(&two).unwrap_err(),
        TriangulateError::TooFewVertices {
            section: vec![0, 1]
        }
    );
    let nan = vec![
        vector![0.0, 0.0],
        vector![1.0, f64::NAN],
        vector![0.0, 1.0],
    ];
    assert_eq!(
        triangulate(&nan).unwrap_err(),
        TriangulateError::NonFiniteVertex { index: 1 }
    );
    let mut out = Vec::new();
    let err = fill_triangles(&square(), &[0, 1, 9], TriangulateCfg::default(), &mut out);
    assert_eq!(err, Err(TriangulateError::IndexOutOfRange { index: 9, len: 4 }));
    assert!(out.is_empty());
}

#[test]
fn failed_fill_leaves_output_untouched() {
    let mut out = vec![Triangle::new(7, 8, 9)];
    let pts = pentagram();
    let section: Vec<usize> = (0..5).collect();
    assert!(fill_triangles(&pts, &section, TriangulateCfg::default(), &mut out).is_err());
    assert_eq!(out, vec![Triangle::new(7, 8, 9)]);
}

#[test]
fn fill_appends_for_sub_sections() {
    // triangulate only the left half of the square's index ring
    let pts = square();
    let mut out = vec![Triangle::new(0, 1, 2)];
    fill_triangles(&pts, &[2, 3, 0], TriangulateCfg::default(), &mut out).unwrap();
    assert_eq!(out, vec![Triangle::new(0, 1, 2), Triangle::new(2, 3, 0)]);
}

#[test]
fn output_is_deterministic() {
    let pts = draw_star_polygon(RadialCfg::default(), ReplayToken { seed: 5, index: 2 });
    assert_eq!(triangulate(&pts).unwrap(), triangulate(&pts).unwrap());
}

#[test]
fn flat_index_buffer() {
    let tris = vec![Triangle::new(0, 1, 2), Triangle::new(2, 3, 0)];
    assert_eq!(flatten_indices(&tris), vec![0, 1, 2, 2, 3, 0]);
}

#[test]
fn independent_runs_on_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TriangulateError>();
    assert_send_sync::<TriangulateCfg>();

    let polys: Vec<Vec<Vector2<f64>>> = (0..4)
        .map(|index| draw_star_polygon(RadialCfg::default(), ReplayToken { seed: 9, index }))
        .collect();
    let results: Vec<Vec<Triangle>> = std::thread::scope(|s| {
        let handles: Vec<_> = polys
            .iter()
            .map(|p| s.spawn(move || triangulate(p).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for (p, tris) in polys.iter().zip(&results) {
        check_partition(p, tris);
    }
}

proptest! {
    #[test]
    fn star_polygons_partition(seed in 0u64..10_000, index in 0u64..4, reverse in any::<bool>()) {
        let rcfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 3, max: 40 },
            ..RadialCfg::default()
        };
        let mut pts = draw_star_polygon(rcfg, ReplayToken { seed, index });
        if reverse {
            pts.reverse();
        }
        let tris = triangulate(&pts).unwrap();
        check_partition(&pts, &tris);

        let cfg = GeomCfg::default();
        for t in &tris {
            let [a, b, c] = t.indices();
            let centroid = (pts[a] + pts[b] + pts[c]) / 3.0;
            prop_assert!(point_in_polygon(&pts, centroid, cfg));
        }
        // sampled interior points are covered by at most one triangle interior
        for i in 0..15 {
            for j in 0..15 {
                let q = vector![-1.6 + 0.21 * i as f64, -1.6 + 0.21 * j as f64];
                prop_assert!(strict_cover_count(&pts, &tris, q) <= 1);
            }
        }
    }
}
