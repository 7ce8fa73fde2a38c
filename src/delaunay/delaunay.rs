use crate::delaunay::geometry::{Edge, Point};
use crate::delaunay::triangle::Triangle;
use std::collections::HashMap;
use std::time::Instant;

/// 固定的超级三角形，远大于任何合理的窗口坐标范围
///
/// 它的三个角点永远不会从结果中移除。
pub const SUPER_TRIANGLE: Triangle = Triangle::new(
    Point::new(-1000, -1000),
    Point::new(500, 3000),
    Point::new(1500, -1000),
);

/// 执行 Delaunay 三角剖分（Bowyer-Watson，完整重建）
///
/// 点集先按 `x` 升序、`y` 升序排序并去除完全相同的点，
/// 然后从超级三角形开始逐点插入。返回的三角形列表包含与超级三角形
/// 角点相连的三角形。
pub fn triangulate(points: &[Point]) -> Vec<Triangle> {
    let start_time = Instant::now();

    let mut sorted = points.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut triangles = vec![SUPER_TRIANGLE];

    for &point in &sorted {
        insert_point(&mut triangles, point);
    }

    log::debug!(
        "Triangulated {} points into {} triangles in {:.2?}",
        sorted.len(),
        triangles.len(),
        start_time.elapsed()
    );

    triangles
}

/// 插入单个点
///
/// 外接圆包含该点的三角形为"坏三角形"，整体移出后留下一个空腔，
/// 再用空腔边界的每条边与该点连成新三角形。
fn insert_point(triangles: &mut Vec<Triangle>, point: Point) {
    let (bad_triangles, good_triangles): (Vec<Triangle>, Vec<Triangle>) = triangles
        .drain(..)
        .partition(|triangle| triangle.contains_in_circumcircle(point));
    *triangles = good_triangles;

    let boundary = cavity_boundary(&bad_triangles);
    if boundary.is_empty() {
        log::warn!(
            "Point ({}, {}) produced an empty cavity boundary ({} bad triangles)",
            point.x,
            point.y,
            bad_triangles.len()
        );
    }

    triangles.extend(
        boundary
            .into_iter()
            .map(|edge| Triangle::new(edge.a, edge.b, point)),
    );
}

/// 提取坏三角形并集的多边形边界
///
/// 平面三角剖分中，内部边会被两个坏三角形各记录一次，出现多次的边整体丢弃；
/// 只出现一次的边按首次记录的顺序和方向保留。
fn cavity_boundary(bad_triangles: &[Triangle]) -> Vec<Edge> {
    let edges: Vec<Edge> = bad_triangles
        .iter()
        .flat_map(|triangle| triangle.edges())
        .collect();

    let mut occurrences: HashMap<Edge, usize> = HashMap::with_capacity(edges.len());
    for edge in &edges {
        *occurrences.entry(*edge).or_default() += 1;
    }

    edges
        .into_iter()
        .filter(|edge| occurrences.get(edge) == Some(&1))
        .collect()
}
