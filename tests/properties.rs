//! Property tests over randomly generated inputs.

use planum::hull::{convex_hull, hull_area, point_in_convex_hull, HullMethod};
use planum::predicates::{intersection_point, orientation, segments_intersect, Orientation};
use planum::raster::{fill_polygon, CanvasBounds, FillStrategy, Pixel, Raster};
use planum::triangulation::delaunay_triangulation;
use planum::{point_in_polygon, Point2, Polygon, Segment2};
use proptest::prelude::*;

/// Points on a small integer lattice, so duplicates and collinear runs are
/// common and all arithmetic is exact.
fn lattice_points(max_len: usize) -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec((0i32..40, 0i32..40), 0..max_len).prop_map(|coords| {
        coords
            .into_iter()
            .map(|(x, y)| Point2::new(f64::from(x), f64::from(y)))
            .collect()
    })
}

fn scattered_points(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), min_len..max_len)
        .prop_map(|coords| coords.into_iter().map(|(x, y)| Point2::new(x, y)).collect())
}

proptest! {
    #[test]
    fn graham_and_jarvis_agree(points in lattice_points(40)) {
        let graham = convex_hull(&points, HullMethod::GrahamScan);
        let jarvis = convex_hull(&points, HullMethod::JarvisMarch);
        prop_assert_eq!(graham, jarvis);
    }

    #[test]
    fn hull_encloses_every_point(points in lattice_points(40)) {
        let hull = convex_hull(&points, HullMethod::GrahamScan);
        prop_assume!(!hull.is_degenerate());

        let v = hull.vertices();
        for i in 0..v.len() {
            let turn = orientation(v[i], v[(i + 1) % v.len()], v[(i + 2) % v.len()]);
            prop_assert_eq!(turn, Orientation::CounterClockwise);
        }
        for &p in &points {
            prop_assert!(point_in_convex_hull(v, p));
        }
    }

    #[test]
    fn point_in_polygon_ignores_rotation(
        polygon in lattice_points(9),
        px in 0i32..40,
        py in 0i32..40,
        shift in 0usize..9,
    ) {
        prop_assume!(polygon.len() >= 3);
        let p = Point2::new(f64::from(px), f64::from(py));
        let mut rotated = polygon.clone();
        rotated.rotate_left(shift % polygon.len());
        prop_assert_eq!(point_in_polygon(p, &polygon), point_in_polygon(p, &rotated));
    }

    #[test]
    fn intersection_point_lies_on_both_segments(
        coords in prop::array::uniform8(-50i32..50),
    ) {
        let [ax, ay, bx, by, cx, cy, dx, dy] = coords.map(f64::from);
        let (a, b) = (Point2::new(ax, ay), Point2::new(bx, by));
        let (c, d) = (Point2::new(cx, cy), Point2::new(dx, dy));
        prop_assume!(segments_intersect(a, b, c, d));

        let p = intersection_point(a, b, c, d).unwrap();
        let tol = 1e-9;
        for (s, e) in [(a, b), (c, d)] {
            prop_assert!(p.x >= s.x.min(e.x) - tol && p.x <= s.x.max(e.x) + tol);
            prop_assert!(p.y >= s.y.min(e.y) - tol && p.y <= s.y.max(e.y) + tol);
        }
    }

    #[test]
    fn scanline_fills_match_membership(vertices in lattice_points(9)) {
        prop_assume!(vertices.len() >= 3);
        let polygon = Polygon::new(vertices.clone());
        let bounds = CanvasBounds::default();

        let ordered = fill_polygon(&polygon, bounds, FillStrategy::OrderedEdges);
        let active = fill_polygon(&polygon, bounds, FillStrategy::ActiveEdges);
        prop_assert_eq!(&ordered, &active);

        let expected: Raster = (0..40)
            .flat_map(|y| (0..40).map(move |x| Pixel::new(x, y)))
            .filter(|p| point_in_polygon(Point2::new(f64::from(p.x), f64::from(p.y)), &vertices))
            .collect();
        prop_assert_eq!(ordered, Ok(expected));
    }

    #[test]
    fn delaunay_is_ccw_and_empty_circle(points in scattered_points(3, 30)) {
        let mesh = delaunay_triangulation(&points);
        prop_assume!(mesh.is_ok());
        let mesh = mesh.unwrap();

        prop_assert!(!mesh.triangles.is_empty());
        for t in &mesh.triangles {
            prop_assert_eq!(t.orientation(), Orientation::CounterClockwise);
        }
        prop_assert!(mesh.covers_hull());
        prop_assert!(mesh.is_delaunay());
        prop_assert_eq!(delaunay_triangulation(&points), Ok(mesh));
    }

    #[test]
    fn delaunay_tiles_lattice_hull(points in lattice_points(30)) {
        let mesh = delaunay_triangulation(&points);
        prop_assume!(mesh.is_ok());
        let mesh = mesh.unwrap();

        // Euler: every triangulation of n points with h on the hull boundary
        // has 2n - 2 - h triangles
        let hull = convex_hull(&mesh.points, HullMethod::GrahamScan);
        let v = hull.vertices();
        let on_boundary = mesh
            .points
            .iter()
            .filter(|&&p| {
                (0..v.len()).any(|i| Segment2::new(v[i], v[(i + 1) % v.len()]).contains_point(p))
            })
            .count();
        prop_assert_eq!(mesh.len(), 2 * mesh.points.len() - 2 - on_boundary);

        let area: f64 = mesh.triangles.iter().map(|t| t.area()).sum();
        prop_assert_eq!(area, hull_area(v));
        prop_assert!(mesh.is_delaunay());
    }
}
