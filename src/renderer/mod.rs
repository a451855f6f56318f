//! Rendering module
//!
//! The scene paints through the `Surface` trait; the browser backend is Canvas 2D.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod draw_list;
pub mod palette;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::CanvasSurface;
pub use draw_list::{DrawCmd, DrawList};
pub use scene::{Drawable, Frame, draw_scene};
pub use surface::{Paint, Surface};
