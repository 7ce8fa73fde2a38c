//! 场景状态容器
//!
//! 保存点集以及最近一次计算出的三角形与 Voronoi 图。
//! 只能通过"添加点"和"重置"两个操作修改；每次成功添加都会完整重建
//! 三角剖分和 Voronoi 图，重建在返回前全部完成，渲染端不会看到半更新的状态。

use crate::delaunay::{triangulate, voronoi::VoronoiDiagram, Point, Triangle};

/// 场景边长（像素），也是画布的最大尺寸
///
/// 整个 `0..=SCENE_SIZE` 正方形都落在 [`crate::delaunay::SUPER_TRIANGLE`] 内部。
pub const SCENE_SIZE: i32 = 720;

/// 已解析为整数坐标的输入动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// 在 (x, y) 添加一个点
    AddPoint(Point),
    /// 清空场景，并把 (x, y) 记为焦点
    Reset(Point),
}

/// 应用一个输入动作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// 新点已加入并触发重建
    Inserted,
    /// 坐标完全相同的点已存在，场景未改变
    Duplicate,
    /// 点落在场景范围之外，场景未改变
    OutOfBounds,
    /// 场景已清空
    Cleared,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    focus: Point,
    points: Vec<Point>,
    triangles: Vec<Triangle>,
    voronoi: VoronoiDiagram,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// 应用一个输入动作
    pub fn apply(&mut self, action: InputAction) -> ActionOutcome {
        match action {
            InputAction::AddPoint(point) => {
                if !Self::in_bounds(point) {
                    self.focus.y = 0;
                    log::debug!("Ignoring out-of-bounds point ({}, {})", point.x, point.y);
                    ActionOutcome::OutOfBounds
                } else if self.add_point(point) {
                    ActionOutcome::Inserted
                } else {
                    ActionOutcome::Duplicate
                }
            }
            InputAction::Reset(focus) => {
                self.reset(focus);
                ActionOutcome::Cleared
            }
        }
    }

    /// 添加一个点并重建；坐标完全相同的点已存在或超出场景范围时返回 `false`
    ///
    /// 没有邻近容差：相差一个像素的点视为不同的点。
    /// 无论是否接受，每次添加都会把焦点的 y 坐标归零。
    pub fn add_point(&mut self, point: Point) -> bool {
        self.focus.y = 0;

        if !Self::in_bounds(point) {
            return false;
        }
        if self.contains(point) {
            log::debug!("Ignoring duplicate point ({}, {})", point.x, point.y);
            return false;
        }

        self.points.push(point);
        self.rebuild();
        true
    }

    /// 清空点、三角形和 Voronoi 图，并记录焦点
    pub fn reset(&mut self, focus: Point) {
        log::info!(
            "Resetting scene with {} points at ({}, {})",
            self.points.len(),
            focus.x,
            focus.y
        );
        self.focus = focus;
        self.points.clear();
        self.triangles.clear();
        self.voronoi = VoronoiDiagram::new();
    }

    fn rebuild(&mut self) {
        self.triangles = triangulate(&self.points);
        self.voronoi = VoronoiDiagram::build(&self.triangles);
    }

    /// 点是否位于 `0..=SCENE_SIZE` 正方形内
    pub fn in_bounds(point: Point) -> bool {
        (0..=SCENE_SIZE).contains(&point.x) && (0..=SCENE_SIZE).contains(&point.y)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// 按添加顺序排列的点
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn voronoi(&self) -> &VoronoiDiagram {
        &self.voronoi
    }

    /// 最近一次重置动作的坐标
    pub fn focus(&self) -> Point {
        self.focus
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
