use egui::Vec2;

use crate::rendering::{RenderData, RenderSettings};
use crate::scene::{ActionOutcome, InputAction, Scene};

use super::input::state_manager::InputStateManager;

/// 绘制区域的持久状态
///
/// 缓存最近一次重建后的绘制数据，只有场景变化时才重新生成。
pub struct Canvas {
    pub input_state_manager: InputStateManager,
    pub(super) render_data: RenderData,
    pub(super) render_dirty: bool,
    pub(super) size: Vec2,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            input_state_manager: InputStateManager::new(),
            render_data: RenderData::default(),
            render_dirty: true,
            size: Vec2::ZERO,
        }
    }

    /// 上一帧画布的尺寸
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// 排队一个动作，在下一次绘制画布前处理
    pub fn queue(&mut self, action: InputAction) {
        self.input_state_manager.push(action);
    }

    /// 依次应用所有待处理动作，每个动作各自完成重建
    pub fn process_actions(&mut self, scene: &mut Scene) {
        for action in self.input_state_manager.drain() {
            match scene.apply(action) {
                ActionOutcome::Inserted | ActionOutcome::Cleared => self.render_dirty = true,
                ActionOutcome::Duplicate | ActionOutcome::OutOfBounds => {}
            }
        }
    }

    pub(super) fn refresh_render_data(&mut self, scene: &Scene) {
        if self.render_dirty {
            self.render_data = RenderData::from_scene(scene);
            self.render_dirty = false;
        }
    }

    /// 构造本帧的画布控件
    pub fn widget<'a>(
        &'a mut self,
        scene: &'a mut Scene,
        settings: &'a RenderSettings,
    ) -> CanvasWidget<'a> {
        CanvasWidget {
            canvas: self,
            scene,
            settings,
        }
    }
}

/// 单帧画布控件：输入 → 重建 → 绘制
pub struct CanvasWidget<'a> {
    pub(super) canvas: &'a mut Canvas,
    pub(super) scene: &'a mut Scene,
    pub(super) settings: &'a RenderSettings,
}
