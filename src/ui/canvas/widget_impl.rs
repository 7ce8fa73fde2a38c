use egui::Widget;

use crate::rendering::paint_scene;
use crate::scene::SCENE_SIZE;

use super::canvas::CanvasWidget;

impl Widget for CanvasWidget<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        // 画布不超过场景范围
        let desired_size = ui.available_size().min(egui::Vec2::splat(SCENE_SIZE as f32));
        let (screen_rect, canvas_response) =
            ui.allocate_exact_size(desired_size, egui::Sense::click());
        self.canvas.size = screen_rect.size();

        // 1. 收集点击
        self.canvas.input_state_manager.update(ui, screen_rect);

        // 2. 同步重建，绘制端不会看到半更新的场景
        self.canvas.process_actions(self.scene);
        self.canvas.refresh_render_data(self.scene);

        // 3. 图层按照从底到顶的顺序渲染
        let painter = ui.painter_at(screen_rect);
        paint_scene(&painter, screen_rect, &self.canvas.render_data, self.settings);

        canvas_response
    }
}
