#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod delaunay;
pub mod rendering;
pub mod scene;
mod ui;
pub use app::{VoronoiApp, FRAME_INTERVAL};
