//! Voronoi 图生成模块
//!
//! 基于 Delaunay 三角剖分生成 Voronoi 图。
//! Voronoi 图是 Delaunay 图的对偶图，每个 Delaunay 三角形的外心
//! 成为 Voronoi 图的顶点，共享边的三角形外心之间形成 Voronoi 边。
//!
//! 由于三角剖分保留了超级三角形，生成的图是有界的，不会出现无穷射线。
//!
//! # 边的重复
//! 顶点对按有序对 `(i, j)` 遍历，每对相邻三角形会被 `(i, j)` 和 `(j, i)`
//! 各检测一次，因此 [`VoronoiDiagram::edges`] 中每条 Voronoi 边出现两次，
//! 方向相反。绘制时重复线段不影响结果；需要去重时使用
//! [`VoronoiDiagram::unique_edges`]。
//!
//! # 使用示例
//! ```
//! use awesome_voronoi::delaunay::{triangulate, voronoi::VoronoiDiagram, Point};
//!
//! let points = vec![Point::new(100, 100), Point::new(300, 120), Point::new(200, 300)];
//! let triangles = triangulate(&points);
//! let voronoi = VoronoiDiagram::build(&triangles);
//!
//! assert_eq!(voronoi.vertex_count(), triangles.len());
//! assert_eq!(voronoi.edge_count(), 2 * voronoi.unique_edges().count());
//! ```

use crate::delaunay::geometry::Center;
use crate::delaunay::triangle::Triangle;
use std::time::Instant;

// ============================================================================
// 公开类型定义
// ============================================================================

/// Voronoi 顶点：一个三角形的外心
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiVertex {
    /// 外心坐标
    pub center: Center,
    /// 生成该顶点的三角形
    pub triangle: Triangle,
}

/// Voronoi 边：连接两个相邻三角形的外心
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiEdge {
    pub start: Center,
    pub end: Center,
    /// 起点在 vertices 数组中的索引
    pub start_idx: usize,
    /// 终点在 vertices 数组中的索引
    pub end_idx: usize,
}

/// Voronoi 图
///
/// 每次重建都重新计算，与之前的结果不共享任何数据。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoronoiDiagram {
    /// 与输入三角形一一对应的顶点
    pub vertices: Vec<VoronoiVertex>,
    /// 所有 Voronoi 边（每对相邻三角形两条，方向相反）
    pub edges: Vec<VoronoiEdge>,
}

impl VoronoiDiagram {
    /// 创建一个空的 Voronoi 图
    pub fn new() -> Self {
        Self::default()
    }

    /// 从三角形列表构建 Voronoi 图
    ///
    /// # 算法流程
    /// 1. 计算每个三角形的外心作为 Voronoi 顶点（退化三角形取重心）
    /// 2. 遍历所有有序顶点对 `(i, j)`，`i != j`
    /// 3. 源三角形恰好共享一条边时，连接两个外心形成 Voronoi 边
    ///
    /// 复杂度为 O(n²)，n 为三角形数量。
    pub fn build(triangles: &[Triangle]) -> Self {
        let start_time = Instant::now();

        let vertices: Vec<VoronoiVertex> = triangles
            .iter()
            .map(|&triangle| VoronoiVertex {
                center: voronoi_center(&triangle),
                triangle,
            })
            .collect();

        let mut edges = Vec::new();
        for (i, first) in vertices.iter().enumerate() {
            for (j, second) in vertices.iter().enumerate() {
                if i != j && first.triangle.is_adjacent(&second.triangle) {
                    edges.push(VoronoiEdge {
                        start: first.center,
                        end: second.center,
                        start_idx: i,
                        end_idx: j,
                    });
                }
            }
        }

        log::debug!(
            "Voronoi diagram: {} vertices, {} edges in {:.2?}",
            vertices.len(),
            edges.len(),
            start_time.elapsed()
        );

        Self { vertices, edges }
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边的数量（包含重复方向）
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 去重后的边：每对相邻三角形只保留 `start_idx < end_idx` 的那一条
    pub fn unique_edges(&self) -> impl Iterator<Item = &VoronoiEdge> + '_ {
        self.edges
            .iter()
            .filter(|edge| edge.start_idx < edge.end_idx)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

// ============================================================================
// 内部实现
// ============================================================================

/// 三角形的 Voronoi 顶点位置
///
/// 外接圆退化时回退到重心，保证顶点与三角形一一对应。
fn voronoi_center(triangle: &Triangle) -> Center {
    match triangle.circumcircle() {
        Some(circle) => circle.center,
        None => {
            log::warn!(
                "Degenerate triangle {:?}, using centroid as Voronoi vertex",
                triangle
            );
            triangle.centroid()
        }
    }
}
