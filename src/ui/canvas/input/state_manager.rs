use std::collections::VecDeque;

use egui::{Event, PointerButton, Pos2, Rect};

use crate::delaunay::Point;
use crate::scene::{InputAction, Scene};

/// 输入状态管理器，把画布上的鼠标点击翻译成场景动作
///
/// 左键松开添加点，右键松开重置场景。一帧内的多次点击按到达顺序排队，
/// 每个动作各自触发一次完整重建。
#[derive(Debug, Default)]
pub struct InputStateManager {
    pending: VecDeque<InputAction>,
}

impl InputStateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 收集本帧落在画布内的点击
    pub fn update(&mut self, ui: &egui::Ui, canvas_rect: Rect) {
        ui.input(|i| {
            for event in &i.events {
                if let Event::PointerButton {
                    pos,
                    button,
                    pressed: false,
                    ..
                } = event
                {
                    if let Some(action) = click_action(canvas_rect, *pos, *button) {
                        self.push(action);
                    }
                }
            }
        });
    }

    /// 追加一个动作（按钮、快捷键等非画布来源）
    pub fn push(&mut self, action: InputAction) {
        self.pending.push_back(action);
    }

    /// 按到达顺序取出所有待处理动作
    pub fn drain(&mut self) -> impl Iterator<Item = InputAction> + '_ {
        self.pending.drain(..)
    }
}

/// 把一次按钮松开翻译为动作
///
/// 画布外、场景范围外的点击以及其他按钮被忽略。
pub fn click_action(canvas_rect: Rect, pos: Pos2, button: PointerButton) -> Option<InputAction> {
    if !canvas_rect.contains(pos) {
        return None;
    }

    let point = screen_to_scene(canvas_rect, pos);
    if !Scene::in_bounds(point) {
        return None;
    }
    match button {
        PointerButton::Primary => Some(InputAction::AddPoint(point)),
        PointerButton::Secondary => Some(InputAction::Reset(point)),
        _ => None,
    }
}

/// 将屏幕坐标转换为场景像素坐标（画布左上角为原点）
pub fn screen_to_scene(canvas_rect: Rect, pos: Pos2) -> Point {
    let local = pos - canvas_rect.min;
    Point::new(local.x.round() as i32, local.y.round() as i32)
}
