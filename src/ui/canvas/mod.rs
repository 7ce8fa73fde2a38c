pub mod canvas;
pub mod input;
mod widget_impl;

pub use canvas::Canvas;
