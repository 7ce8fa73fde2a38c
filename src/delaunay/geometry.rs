//! 几何谓词模块
//!
//! 提供整数像素点、外接圆计算以及点是否落在外接圆内的判定。
//! 所有浮点运算使用 `f64`，容差固定为 [`EPSILON`]。

use std::hash::{Hash, Hasher};

/// 外接圆计算与包含判定使用的固定容差
pub const EPSILON: f64 = 1e-4;

// ============================================================================
// 基础类型
// ============================================================================

/// 整数像素坐标点
///
/// 相等比较是精确的，没有任何容差。
/// 排序先按 `x` 升序，再按 `y` 升序（字段声明顺序即比较顺序）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn as_f64(self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// 浮点坐标，用于外心（Voronoi 顶点）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Center {
    pub x: f64,
    pub y: f64,
}

impl Center {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 到另一点的距离平方
    pub fn distance_squared(self, other: impl Into<Center>) -> f64 {
        let other = other.into();
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Point> for Center {
    fn from(point: Point) -> Self {
        Self::new(point.x as f64, point.y as f64)
    }
}

/// 无向边
///
/// 保留构造时的端点顺序（重新三角化时需要沿用原方向），
/// 但相等比较与哈希都忽略方向：`(a, b) == (b, a)`。
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub a: Point,
    pub b: Point,
}

impl Edge {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// 端点按 `Point` 排序后的规范形式
    fn normalized(&self) -> (Point, Point) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

// ============================================================================
// 外接圆
// ============================================================================

/// 三角形的外接圆
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle {
    /// 外心
    pub center: Center,
    /// 半径的平方（外心到第二个顶点的距离平方）
    pub radius_squared: f64,
}

impl Circumcircle {
    /// 判断点是否在外接圆内
    ///
    /// 判定是包含边界的：`距离² - 半径² <= EPSILON`，
    /// 恰好落在圆上的点（共圆配置）也算作"在内"。
    pub fn contains(&self, query: impl Into<Center>) -> bool {
        self.center.distance_squared(query) - self.radius_squared <= EPSILON
    }
}

/// 计算三点 `a`, `b`, `c` 的外接圆
///
/// 外心取 `(a, b)` 与 `(b, c)` 两条中垂线的交点。
/// 两条边都接近水平（纵向差都小于 `EPSILON`）时视为退化，返回 `None`。
/// 只有一条边接近水平时，该边的中垂线是竖直线，外心横坐标直接取该边中点。
/// 其余情况下用纵向差较大的那条边的中垂线回代求纵坐标，以减少抵消误差。
///
/// 三点共线但不水平时斜率相同导致除零，结果非有限，同样返回 `None`。
pub fn circumcircle(a: Point, b: Point, c: Point) -> Option<Circumcircle> {
    let (x1, y1) = a.as_f64();
    let (x2, y2) = b.as_f64();
    let (x3, y3) = c.as_f64();

    let dy12 = (y1 - y2).abs();
    let dy23 = (y2 - y3).abs();

    if dy12 < EPSILON && dy23 < EPSILON {
        return None;
    }

    let center = if dy12 < EPSILON {
        let m2 = -(x3 - x2) / (y3 - y2);
        let mx2 = (x2 + x3) / 2.0;
        let my2 = (y2 + y3) / 2.0;
        let xc = (x2 + x1) / 2.0;
        Center::new(xc, m2 * (xc - mx2) + my2)
    } else if dy23 < EPSILON {
        let m1 = -(x2 - x1) / (y2 - y1);
        let mx1 = (x1 + x2) / 2.0;
        let my1 = (y1 + y2) / 2.0;
        let xc = (x3 + x2) / 2.0;
        Center::new(xc, m1 * (xc - mx1) + my1)
    } else {
        let m1 = -(x2 - x1) / (y2 - y1);
        let m2 = -(x3 - x2) / (y3 - y2);
        let mx1 = (x1 + x2) / 2.0;
        let mx2 = (x2 + x3) / 2.0;
        let my1 = (y1 + y2) / 2.0;
        let my2 = (y2 + y3) / 2.0;
        let xc = (m1 * mx1 - m2 * mx2 + my2 - my1) / (m1 - m2);
        let yc = if dy12 > dy23 {
            m1 * (xc - mx1) + my1
        } else {
            m2 * (xc - mx2) + my2
        };
        Center::new(xc, yc)
    };

    if !center.is_finite() {
        return None;
    }

    Some(Circumcircle {
        center,
        radius_squared: center.distance_squared(b),
    })
}

/// 判断 `query` 是否落在三角形 `(a, b, c)` 的外接圆内
///
/// 退化三角形一律返回 `false`：调用方应理解为"该三角形无需为此点细分"。
pub fn in_circumcircle(query: Point, a: Point, b: Point, c: Point) -> bool {
    circumcircle(a, b, c).is_some_and(|circle| circle.contains(query))
}
