//! Delaunay 三角剖分工具函数模块
//!
//! 提供验证和辅助计算功能。

use crate::delaunay::geometry::Edge;
use crate::delaunay::triangle::Triangle;
use std::collections::HashMap;

// ============================================================================
// 公开 API
// ============================================================================

/// 统计每条边被多少个三角形使用
pub fn edge_usage(triangles: &[Triangle]) -> HashMap<Edge, usize> {
    let mut usage: HashMap<Edge, usize> = HashMap::new();
    for triangle in triangles {
        for edge in triangle.edges() {
            *usage.entry(edge).or_default() += 1;
        }
    }
    usage
}

/// 验证平面性：每条边最多被两个三角形使用
pub fn is_planar(triangles: &[Triangle]) -> bool {
    edge_usage(triangles).values().all(|&count| count <= 2)
}

/// 验证三角剖分结果是否满足 Delaunay 性质
///
/// Delaunay 性质：任意三角形的外接圆内不包含其他顶点。
/// 这里的外接圆判定与剖分时相同，是包含边界的，
/// 因此严格测试时应避免共圆的输入。
///
/// # 返回值
/// - `true`: 满足 Delaunay 性质
/// - `false`: 存在某个顶点落在非自身三角形的外接圆内
///
/// # 示例
/// ```ignore
/// let triangles = triangulate(&points);
/// assert!(validate_delaunay(&triangles));
/// ```
pub fn validate_delaunay(triangles: &[Triangle]) -> bool {
    let mut vertices: Vec<_> = triangles.iter().flat_map(|t| t.points()).collect();
    vertices.sort_unstable();
    vertices.dedup();

    triangles.iter().all(|triangle| {
        vertices
            .iter()
            .filter(|&&point| !triangle.has_vertex(point))
            .all(|&point| !triangle.contains_in_circumcircle(point))
    })
}
