use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2};
use serde::{Deserialize, Serialize};

use crate::delaunay::{Center, Point};
use crate::scene::Scene;

/// 可绘制的图层
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Triangles,
    VoronoiEdges,
    VoronoiVertices,
    Points,
}

/// 图层按照从底到顶的顺序排列
pub const LAYER_ORDER: [LayerKind; 4] = [
    LayerKind::Triangles,
    LayerKind::VoronoiEdges,
    LayerKind::VoronoiVertices,
    LayerKind::Points,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerVisibility {
    pub triangles: bool,
    pub voronoi_edges: bool,
    pub voronoi_vertices: bool,
    pub points: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        // 默认不绘制三角剖分
        Self {
            triangles: false,
            voronoi_edges: true,
            voronoi_vertices: true,
            points: true,
        }
    }
}

impl LayerVisibility {
    pub fn is_visible(&self, kind: LayerKind) -> bool {
        match kind {
            LayerKind::Triangles => self.triangles,
            LayerKind::VoronoiEdges => self.voronoi_edges,
            LayerKind::VoronoiVertices => self.voronoi_vertices,
            LayerKind::Points => self.points,
        }
    }

    pub fn toggle_mut(&mut self, kind: LayerKind) -> &mut bool {
        match kind {
            LayerKind::Triangles => &mut self.triangles,
            LayerKind::VoronoiEdges => &mut self.voronoi_edges,
            LayerKind::VoronoiVertices => &mut self.voronoi_vertices,
            LayerKind::Points => &mut self.points,
        }
    }
}

/// 显示配置，通过 eframe 存储持久化
///
/// 颜色以 RGB 三元组保存。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub layer_visibility: LayerVisibility,
    /// 点和 Voronoi 顶点的半径（像素）
    pub point_radius: f32,
    pub line_width: f32,
    pub point_color: [u8; 3],
    pub voronoi_color: [u8; 3],
    pub triangle_color: [u8; 3],
    pub background_color: [u8; 3],
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            layer_visibility: LayerVisibility::default(),
            point_radius: 3.0,
            line_width: 1.0,
            point_color: [240, 240, 23],
            voronoi_color: [240, 240, 0],
            triangle_color: [0, 240, 160],
            background_color: [0, 0, 0],
        }
    }
}

impl RenderSettings {
    pub fn color(&self, kind: LayerKind) -> Color32 {
        let [r, g, b] = match kind {
            LayerKind::Triangles => self.triangle_color,
            LayerKind::VoronoiEdges | LayerKind::VoronoiVertices => self.voronoi_color,
            LayerKind::Points => self.point_color,
        };
        Color32::from_rgb(r, g, b)
    }

    pub fn background(&self) -> Color32 {
        let [r, g, b] = self.background_color;
        Color32::from_rgb(r, g, b)
    }

    fn stroke(&self, kind: LayerKind) -> Stroke {
        Stroke::new(self.line_width, self.color(kind))
    }
}

/// 交给绘制端的纯几何列表（场景坐标）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderData {
    pub points: Vec<Pos2>,
    pub triangles: Vec<[Pos2; 3]>,
    pub voronoi_vertices: Vec<Pos2>,
    pub voronoi_segments: Vec<[Pos2; 2]>,
}

impl RenderData {
    /// 从场景的当前状态生成绘制数据
    ///
    /// Voronoi 线段保留重复方向，重复绘制同一线段不影响画面。
    pub fn from_scene(scene: &Scene) -> Self {
        let voronoi = scene.voronoi();
        Self {
            points: scene.points().iter().map(|&p| point_to_pos2(p)).collect(),
            triangles: scene
                .triangles()
                .iter()
                .map(|t| t.points().map(point_to_pos2))
                .collect(),
            voronoi_vertices: voronoi
                .vertices
                .iter()
                .map(|v| center_to_pos2(v.center))
                .collect(),
            voronoi_segments: voronoi
                .edges
                .iter()
                .map(|e| [center_to_pos2(e.start), center_to_pos2(e.end)])
                .collect(),
        }
    }
}

pub fn point_to_pos2(point: Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

pub fn center_to_pos2(center: Center) -> Pos2 {
    Pos2::new(center.x as f32, center.y as f32)
}

/// 在 `rect` 内绘制场景，场景坐标原点对应 `rect.min`
pub fn paint_scene(painter: &Painter, rect: Rect, data: &RenderData, settings: &RenderSettings) {
    painter.rect_filled(rect, 0.0, settings.background());

    let offset = rect.min.to_vec2();
    for kind in LAYER_ORDER {
        if settings.layer_visibility.is_visible(kind) {
            paint_layer(painter, offset, kind, data, settings);
        }
    }
}

fn paint_layer(
    painter: &Painter,
    offset: Vec2,
    kind: LayerKind,
    data: &RenderData,
    settings: &RenderSettings,
) {
    match kind {
        LayerKind::Triangles => {
            let stroke = settings.stroke(kind);
            for triangle in &data.triangles {
                let outline = triangle.iter().map(|&p| p + offset).collect();
                painter.add(Shape::closed_line(outline, stroke));
            }
        }
        LayerKind::VoronoiEdges => {
            let stroke = settings.stroke(kind);
            for [start, end] in &data.voronoi_segments {
                painter.line_segment([*start + offset, *end + offset], stroke);
            }
        }
        LayerKind::VoronoiVertices => {
            for &vertex in &data.voronoi_vertices {
                painter.circle_filled(vertex + offset, settings.point_radius, settings.color(kind));
            }
        }
        LayerKind::Points => {
            for &point in &data.points {
                painter.circle_filled(point + offset, settings.point_radius, settings.color(kind));
            }
        }
    }
}
