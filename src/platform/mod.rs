//! Platform abstraction layer
//!
//! Browser-facing helpers that don't need a DOM to test:
//! - Input events → movement commands
//! - Responsive canvas sizing

pub mod canvas;
pub mod input;

pub use canvas::fit_canvas;
pub use input::InputMapper;
