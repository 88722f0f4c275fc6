//! Point-by-point software rasterizer
//!
//! Features:
//! - 3x3 homogeneous matrices for 2D affine transforms
//! - Edge-function inside test (orientation agnostic, inclusive edges)
//! - Bounding-box triangle fill clipped to the canvas
//! - Bresenham outlines

mod math;
mod types;
mod render;

pub use math::*;
pub use types::*;
pub use render::*;

/// Canvas dimensions
pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 600;
