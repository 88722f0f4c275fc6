//! Core rendering functions
//! Point-by-point triangle fill and line outlines

use super::math::Point;
use super::types::{Color, Triangle};

/// Framebuffer for software rendering
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    #[cfg(test)]
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            let p = &self.pixels[idx..idx + 4];
            Some(Color { r: p[0], g: p[1], b: p[2], a: p[3] })
        } else {
            None
        }
    }

    /// Draw a line from (x0, y0) to (x1, y1) using Bresenham's algorithm.
    /// The segment is clipped to the canvas first, so the cost is bounded by
    /// the canvas size no matter how far off-screen the endpoints are.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let Some((x0, y0, x1, y1)) = clip_segment(x0, y0, x1, y1, self.width, self.height) else {
            return;
        };
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            if x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64 {
                self.set_pixel(x as usize, y as usize, color);
            }

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill every pixel of `tri` that passes the inside test
    pub fn fill_triangle(&mut self, tri: &Triangle, color: Color) {
        let [v0, v1, v2] = tri.points;
        let Some((min, max)) = clip_bounds(tri, self.width, self.height) else {
            return;
        };
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                if is_inside(Point::new(x, y), v0, v1, v2) {
                    self.set_pixel(x as usize, y as usize, color);
                }
            }
        }
    }

    /// Draw the three edges in cyclic order
    pub fn draw_outline(&mut self, tri: &Triangle, color: Color) {
        for (a, b) in tri.edges() {
            self.draw_line(a.x, a.y, b.x, b.y, color);
        }
    }
}

/// Signed area proxy: which side of the line a->b the point c lies on
pub fn edge_function(a: Point, b: Point, c: Point) -> f64 {
    (c.x as f64 - a.x as f64) * (b.y as f64 - a.y as f64)
        - (c.y as f64 - a.y as f64) * (b.x as f64 - a.x as f64)
}

/// True when all three edge values share a sign. Zero counts as either sign,
/// so edges are inside and winding order does not matter.
pub fn is_inside(p: Point, v0: Point, v1: Point, v2: Point) -> bool {
    let w0 = edge_function(v0, v1, p);
    let w1 = edge_function(v1, v2, p);
    let w2 = edge_function(v2, v0, p);
    let has_neg = w0 < 0.0 || w1 < 0.0 || w2 < 0.0;
    let has_pos = w0 > 0.0 || w1 > 0.0 || w2 > 0.0;
    !(has_neg && has_pos)
}

/// Liang-Barsky clip of a segment against `[0, width) x [0, height)`.
/// Segments already on the canvas come back unchanged; None when it misses.
pub fn clip_segment(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: usize,
    height: usize,
) -> Option<(i64, i64, i64, i64)> {
    if width == 0 || height == 0 {
        return None;
    }
    let max_x = (width - 1) as f64;
    let max_y = (height - 1) as f64;
    let on_canvas = |x: i32, y: i32| x >= 0 && y >= 0 && x as f64 <= max_x && y as f64 <= max_y;
    if on_canvas(x0, y0) && on_canvas(x1, y1) {
        return Some((x0 as i64, y0 as i64, x1 as i64, y1 as i64));
    }

    let (fx0, fy0) = (x0 as f64, y0 as f64);
    let dx = x1 as f64 - fx0;
    let dy = y1 as f64 - fy0;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [(-dx, fx0), (dx, max_x - fx0), (-dy, fy0), (dy, max_y - fy0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let snap = |v: f64, max: f64| v.round().clamp(0.0, max) as i64;
    Some((
        snap(fx0 + t0 * dx, max_x),
        snap(fy0 + t0 * dy, max_y),
        snap(fx0 + t1 * dx, max_x),
        snap(fy0 + t1 * dy, max_y),
    ))
}

/// Bounding box of `tri` clamped to `[0, width) x [0, height)`, inclusive.
/// None when the box lies entirely off the canvas.
pub fn clip_bounds(tri: &Triangle, width: usize, height: usize) -> Option<(Point, Point)> {
    if width == 0 || height == 0 {
        return None;
    }
    let (min, max) = tri.bounds();
    let max_x = (width - 1).min(i32::MAX as usize) as i32;
    let max_y = (height - 1).min(i32::MAX as usize) as i32;
    let lo = Point::new(min.x.max(0), min.y.max(0));
    let hi = Point::new(max.x.min(max_x), max.y.min(max_y));
    if lo.x > hi.x || lo.y > hi.y {
        None
    } else {
        Some((lo, hi))
    }
}
