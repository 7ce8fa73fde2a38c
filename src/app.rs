use std::time::Duration;

use egui::{Align, Layout};
use rand::Rng;

use crate::delaunay::Point;
use crate::rendering::{LayerKind, RenderSettings, LAYER_ORDER};
use crate::scene::{InputAction, Scene, SCENE_SIZE};
use crate::ui::canvas::Canvas;

/// 默认帧间隔：30 FPS
pub const FRAME_INTERVAL: Duration = Duration::from_millis(1000 / 30);

/// "Scatter" 按钮一次添加的随机点数
const SCATTER_COUNT: usize = 20;

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VoronoiApp {
    settings: RenderSettings,
    scatter_count: usize,

    #[serde(skip)]
    scene: Scene,
    #[serde(skip)]
    canvas: Canvas,
}

impl Default for VoronoiApp {
    fn default() -> Self {
        Self {
            settings: RenderSettings::default(),
            scatter_count: SCATTER_COUNT,
            scene: Scene::new(),
            canvas: Canvas::new(),
        }
    }
}

impl VoronoiApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            if let Some(app) = eframe::get_value::<VoronoiApp>(storage, eframe::APP_KEY) {
                return app;
            }
        }
        Default::default()
    }

    fn reset(&mut self) {
        self.canvas.queue(InputAction::Reset(self.scene.focus()));
    }

    /// 在上一帧画布范围内随机撒点，走正常的添加流程
    fn scatter(&mut self) {
        let size = self.canvas.size();
        let (width, height) = (
            (size.x.max(1.0) as i32).min(SCENE_SIZE),
            (size.y.max(1.0) as i32).min(SCENE_SIZE),
        );
        let mut rng = rand::rng();
        for _ in 0..self.scatter_count {
            let point = Point::new(rng.random_range(0..width), rng.random_range(0..height));
            self.canvas.queue(InputAction::AddPoint(point));
        }
        log::info!("Scattering {} random points", self.scatter_count);
    }

    fn layer_label(kind: LayerKind) -> &'static str {
        match kind {
            LayerKind::Triangles => "Delaunay triangles",
            LayerKind::VoronoiEdges => "Voronoi edges",
            LayerKind::VoronoiVertices => "Voronoi vertices",
            LayerKind::Points => "Points",
        }
    }
}

impl eframe::App for VoronoiApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Awesome Voronoi");
            ui.label("Left click adds a point, right click resets.");
        });

        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Scene");
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    self.reset();
                }
                if ui.button("Scatter").clicked() {
                    self.scatter();
                }
                ui.add(egui::DragValue::new(&mut self.scatter_count).range(1..=200));
            });

            ui.separator();
            ui.heading("Layers");
            ui.with_layout(Layout::top_down(Align::LEFT), |ui| {
                for kind in LAYER_ORDER.into_iter().rev() {
                    ui.checkbox(
                        self.settings.layer_visibility.toggle_mut(kind),
                        Self::layer_label(kind),
                    );
                }
            });
            ui.add(
                egui::Slider::new(&mut self.settings.point_radius, 1.0..=8.0).text("Point radius"),
            );
            ui.add(egui::Slider::new(&mut self.settings.line_width, 0.5..=4.0).text("Line width"));

            ui.separator();
            let voronoi = self.scene.voronoi();
            ui.label(format!("Points: {}", self.scene.points().len()));
            ui.label(format!("Triangles: {}", self.scene.triangles().len()));
            ui.label(format!("Voronoi vertices: {}", voronoi.vertex_count()));
            ui.label(format!(
                "Voronoi edges: {} ({} unique)",
                voronoi.edge_count(),
                voronoi.unique_edges().count()
            ));
            let focus = self.scene.focus();
            ui.label(format!("Focus: ({}, {})", focus.x, focus.y));
        });

        if ctx.input(|i| {
            i.key_pressed(egui::Key::R) && i.modifiers.matches_logically(egui::Modifiers::CTRL)
        }) {
            self.reset();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                ui.add(self.canvas.widget(&mut self.scene, &self.settings));
            });

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}
