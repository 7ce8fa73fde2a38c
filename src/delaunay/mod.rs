//! Delaunay 三角剖分与 Voronoi 图模块
//!
//! 本模块提供交互绘制所需的核心几何算法：
//! - **几何谓词**: 外接圆计算与点在圆内判定
//! - **Delaunay 三角剖分**: Bowyer-Watson 算法，每次完整重建
//! - **Voronoi 图**: Delaunay 的对偶图
//!
//! # 架构概览
//!
//! ```text
//! 输入点集 (Vec<Point>)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │   triangulate()  │  ── 排序、超级三角形、逐点插入
//! └────────┬─────────┘
//!          │
//!          ▼
//!   三角形列表 (Vec<Triangle>)
//!          │
//!          ▼
//! ┌──────────────────────────┐
//! │  VoronoiDiagram::build() │  ── 外心 + 相邻三角形对
//! └────────────┬─────────────┘
//!              │
//!              ▼
//!   VoronoiDiagram
//! ```
//!
//! # 使用示例
//!
//! ```
//! use awesome_voronoi::delaunay::{triangulate, voronoi::VoronoiDiagram, Point};
//!
//! let points = vec![
//!     Point::new(100, 100),
//!     Point::new(400, 120),
//!     Point::new(250, 380),
//! ];
//!
//! let triangles = triangulate(&points);
//! let voronoi = VoronoiDiagram::build(&triangles);
//!
//! assert_eq!(voronoi.vertex_count(), triangles.len());
//! ```
//!
//! # 模块结构
//!
//! - `geometry`: 点、边与外接圆谓词
//! - `delaunay`: 三角剖分算法实现
//! - `triangle`: 三角形数据结构
//! - `voronoi`: Voronoi 图生成
//! - `utils`: 验证工具

mod delaunay;
mod geometry;
mod triangle;
mod utils;

#[cfg(test)]
mod tests;

// ============================================================================
// 公开 API
// ============================================================================

/// Delaunay 三角剖分函数与固定超级三角形
pub use delaunay::{triangulate, SUPER_TRIANGLE};

/// 几何基础类型与外接圆谓词
pub use geometry::{circumcircle, in_circumcircle, Center, Circumcircle, Edge, Point, EPSILON};

/// 三角形数据结构
pub use triangle::Triangle;

/// 验证函数
pub use utils::{edge_usage, is_planar, validate_delaunay};

/// Voronoi 图模块
pub mod voronoi;
