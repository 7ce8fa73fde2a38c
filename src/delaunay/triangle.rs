use crate::delaunay::geometry::{circumcircle, Center, Circumcircle, Edge, Point};

/// 三角形结构，按固定字段顺序存储三个顶点
///
/// 邻接判断时视为无序顶点集合；重建之间不保留任何身份。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    /// 创建新的三角形
    pub const fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }

    pub fn points(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// 三条边：`(p1, p2)`, `(p2, p3)`, `(p3, p1)`
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.p1, self.p2),
            Edge::new(self.p2, self.p3),
            Edge::new(self.p3, self.p1),
        ]
    }

    /// 判断点是否为三角形的顶点之一
    pub fn has_vertex(&self, point: Point) -> bool {
        self.p1 == point || self.p2 == point || self.p3 == point
    }

    /// 外接圆，退化三角形返回 `None`
    pub fn circumcircle(&self) -> Option<Circumcircle> {
        circumcircle(self.p1, self.p2, self.p3)
    }

    /// 判断一个点是否在三角形的外接圆内
    pub fn contains_in_circumcircle(&self, point: Point) -> bool {
        self.circumcircle().is_some_and(|circle| circle.contains(point))
    }

    /// 检查点是否严格位于三角形内部（落在边上不算）
    pub fn contains_point(&self, point: Point) -> bool {
        // 整数叉积，i64 不会溢出
        let side = |a: Point, b: Point| {
            (b.x as i64 - a.x as i64) * (point.y as i64 - a.y as i64)
                - (b.y as i64 - a.y as i64) * (point.x as i64 - a.x as i64)
        };
        let sides = [
            side(self.p1, self.p2),
            side(self.p2, self.p3),
            side(self.p3, self.p1),
        ];

        sides.iter().all(|&s| s > 0) || sides.iter().all(|&s| s < 0)
    }

    pub fn centroid(&self) -> Center {
        let [a, b, c] = self.points().map(Center::from);
        Center::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }

    /// 与另一个三角形共有的边数
    ///
    /// 两侧的三条边两两比较（共九对），边相等不考虑方向。
    pub fn shared_edge_count(&self, other: &Triangle) -> usize {
        let others = other.edges();
        self.edges()
            .into_iter()
            .filter(|edge| others.contains(edge))
            .count()
    }

    /// 两个三角形恰好共享一条边时才算相邻
    pub fn is_adjacent(&self, other: &Triangle) -> bool {
        self.shared_edge_count(other) == 1
    }
}
