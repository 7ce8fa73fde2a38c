#[cfg(test)]
mod tests {
    use super::super::delaunay::{triangulate, SUPER_TRIANGLE};
    use super::super::geometry::{circumcircle, in_circumcircle, Center, Point, EPSILON};
    use super::super::triangle::Triangle;
    use super::super::utils::{edge_usage, is_planar, validate_delaunay};

    fn scattered_points() -> Vec<Point> {
        vec![
            Point::new(100, 100),
            Point::new(300, 120),
            Point::new(200, 300),
            Point::new(450, 420),
            Point::new(620, 80),
            Point::new(50, 600),
            Point::new(380, 650),
            Point::new(701, 333),
        ]
    }

    fn relative_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
    }

    // ------------------------------------------------------------------------
    // 外接圆谓词
    // ------------------------------------------------------------------------

    #[test]
    fn test_circumcenter_equidistant() {
        let (a, b, c) = (Point::new(0, 0), Point::new(10, 0), Point::new(5, 10));
        let circle = circumcircle(a, b, c).expect("非退化三角形应有外接圆");

        assert!(relative_eq(circle.center.x, 5.0));
        assert!(relative_eq(circle.center.y, 3.75));
        for vertex in [a, b, c] {
            assert!(relative_eq(
                circle.center.distance_squared(vertex),
                circle.radius_squared
            ));
        }
    }

    #[test]
    fn test_circumcenter_second_edge_horizontal() {
        // (b, c) 水平，走另一条特殊分支
        let (a, b, c) = (Point::new(0, 10), Point::new(10, 0), Point::new(20, 0));
        let circle = circumcircle(a, b, c).unwrap();

        assert_eq!(circle.center, Center::new(15.0, 15.0));
        assert_eq!(circle.radius_squared, 250.0);
    }

    #[test]
    fn test_circumcenter_general_position() {
        let triangles = [
            (Point::new(0, 0), Point::new(4, 2), Point::new(1, 7)),
            (Point::new(-1000, -1000), Point::new(500, 3000), Point::new(37, 411)),
            (Point::new(3, 9), Point::new(250, 13), Point::new(120, -40)),
        ];

        for (a, b, c) in triangles {
            let circle = circumcircle(a, b, c).unwrap();
            for vertex in [a, b, c] {
                assert!(
                    relative_eq(circle.center.distance_squared(vertex), circle.radius_squared),
                    "外心到 {:?} 的距离不等于半径",
                    vertex
                );
            }
        }
    }

    #[test]
    fn test_containment_boundary() {
        let circle = circumcircle(Point::new(0, 0), Point::new(10, 0), Point::new(5, 10)).unwrap();
        let radius = circle.radius_squared.sqrt();
        let center = circle.center;

        // 圆上的点算作在内
        for (dx, dy) in [(0.0, 1.0), (0.0, -1.0), (1.0, 0.0), (-1.0, 0.0)] {
            let on_circle = Center::new(center.x + dx * radius, center.y + dy * radius);
            assert!(circle.contains(on_circle));
        }
        for vertex in [Point::new(0, 0), Point::new(10, 0), Point::new(5, 10)] {
            assert!(circle.contains(vertex));
        }

        assert!(circle.contains(Point::new(5, 5)));
        assert!(!circle.contains(Point::new(1000, 1000)));
        assert!(!circle.contains(Point::new(5, 11)));
    }

    #[test]
    fn test_degenerate_horizontal_fails_closed() {
        let (a, b, c) = (Point::new(0, 0), Point::new(10, 0), Point::new(20, 0));
        assert!(circumcircle(a, b, c).is_none());
        assert!(!in_circumcircle(Point::new(10, 0), a, b, c));
        assert!(!Triangle::new(a, b, c).contains_in_circumcircle(Point::new(5, 0)));
    }

    #[test]
    fn test_degenerate_collinear_fails_closed() {
        let diagonal = (Point::new(0, 0), Point::new(10, 10), Point::new(20, 20));
        let vertical = (Point::new(0, 0), Point::new(0, 10), Point::new(0, 20));

        for (a, b, c) in [diagonal, vertical] {
            assert!(circumcircle(a, b, c).is_none());
            assert!(!in_circumcircle(Point::new(1, 1), a, b, c));
        }
    }

    // ------------------------------------------------------------------------
    // 三角剖分
    // ------------------------------------------------------------------------

    #[test]
    fn test_empty_points() {
        assert_eq!(triangulate(&[]), vec![SUPER_TRIANGLE]);
    }

    #[test]
    fn test_single_point() {
        let point = Point::new(360, 360);
        let triangles = triangulate(&[point]);

        assert_eq!(triangles.len(), 3);
        assert!(triangles.iter().all(|t| t.has_vertex(point)));
        assert!(is_planar(&triangles));
    }

    #[test]
    fn test_super_triangle_corners_kept() {
        let triangles = triangulate(&scattered_points());
        for corner in SUPER_TRIANGLE.points() {
            assert!(
                triangles.iter().any(|t| t.has_vertex(corner)),
                "超级三角形角点 {:?} 不应被移除",
                corner
            );
        }
    }

    #[test]
    fn test_triangle_count_matches_euler() {
        // n 个内部点加 3 个超级角点，凸包为 3 个点：2(n + 3) - 2 - 3 = 2n + 1
        let points = scattered_points();
        let triangles = triangulate(&points);

        assert_eq!(triangles.len(), 2 * points.len() + 1);
        for &point in &points {
            assert!(triangles.iter().any(|t| t.has_vertex(point)));
        }
    }

    #[test]
    fn test_planarity() {
        let triangles = triangulate(&scattered_points());
        let usage = edge_usage(&triangles);

        assert!(is_planar(&triangles));
        // 只有超级三角形的三条边是外边界
        assert_eq!(usage.values().filter(|&&count| count == 1).count(), 3);
    }

    #[test]
    fn test_delaunay_property() {
        let triangles = triangulate(&scattered_points());
        assert!(validate_delaunay(&triangles));
    }

    #[test]
    fn test_deterministic_for_any_input_order() {
        let points = scattered_points();
        let mut reversed = points.clone();
        reversed.reverse();
        let mut rotated = points.clone();
        rotated.rotate_left(3);

        let expected = triangulate(&points);
        assert_eq!(triangulate(&reversed), expected);
        assert_eq!(triangulate(&rotated), expected);
        assert_eq!(triangulate(&points), expected);
    }

    #[test]
    fn test_duplicate_points_collapsed() {
        let with_duplicates = vec![
            Point::new(100, 100),
            Point::new(200, 150),
            Point::new(100, 100),
            Point::new(150, 300),
            Point::new(200, 150),
        ];
        let unique = vec![
            Point::new(100, 100),
            Point::new(200, 150),
            Point::new(150, 300),
        ];

        assert_eq!(triangulate(&with_duplicates), triangulate(&unique));
    }

    #[test]
    fn test_adjacent_pixels_are_distinct() {
        let points = vec![Point::new(100, 100), Point::new(101, 100)];
        let triangles = triangulate(&points);

        assert_eq!(triangles.len(), 5);
        assert!(is_planar(&triangles));
    }

    #[test]
    fn test_grid_points_stay_connected() {
        // 网格点大量共圆，包含边界的外接圆判定保证结果仍是完整剖分
        let mut points = Vec::new();
        for i in 0..3 {
            for j in 0..3 {
                points.push(Point::new(200 + i * 100, 200 + j * 100));
            }
        }

        let triangles = triangulate(&points);

        assert!(is_planar(&triangles));
        assert_eq!(triangles.len(), 2 * points.len() + 1);
        for &point in &points {
            assert!(triangles.iter().any(|t| t.has_vertex(point)));
        }
    }

    #[test]
    fn test_collinear_points() {
        let points = vec![
            Point::new(100, 100),
            Point::new(200, 100),
            Point::new(300, 100),
            Point::new(400, 100),
        ];

        let triangles = triangulate(&points);

        assert!(is_planar(&triangles));
        assert_eq!(triangles.len(), 2 * points.len() + 1);
        assert!(triangles.iter().all(|t| t.circumcircle().is_some()));
    }

    // ------------------------------------------------------------------------
    // 三角形邻接
    // ------------------------------------------------------------------------

    #[test]
    fn test_adjacency_symmetric() {
        let a = Triangle::new(Point::new(0, 0), Point::new(10, 0), Point::new(5, 10));
        // 共享边 (10,0)-(5,10)，顶点顺序不同
        let b = Triangle::new(Point::new(5, 10), Point::new(15, 10), Point::new(10, 0));
        let far = Triangle::new(Point::new(50, 50), Point::new(60, 50), Point::new(55, 60));
        // 只共享一个顶点
        let corner = Triangle::new(Point::new(0, 0), Point::new(-10, 0), Point::new(-5, -10));

        assert!(a.is_adjacent(&b));
        assert!(b.is_adjacent(&a));
        assert!(!a.is_adjacent(&far));
        assert!(!a.is_adjacent(&corner));
        // 同一个三角形共享三条边，不算相邻
        assert_eq!(a.shared_edge_count(&a), 3);
        assert!(!a.is_adjacent(&a));
    }

    #[test]
    fn test_contains_point_is_strict() {
        let t = Triangle::new(Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
        let reversed = Triangle::new(Point::new(0, 10), Point::new(10, 0), Point::new(0, 0));

        assert!(t.contains_point(Point::new(2, 2)));
        assert!(reversed.contains_point(Point::new(2, 2)));
        assert!(!t.contains_point(Point::new(5, 0)));
        assert!(!t.contains_point(Point::new(0, 0)));
        assert!(!t.contains_point(Point::new(8, 8)));
        assert!(SUPER_TRIANGLE.contains_point(Point::new(360, 360)));
        assert!(!SUPER_TRIANGLE.contains_point(Point::new(1500, 900)));
    }
}
