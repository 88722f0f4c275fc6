//! Core types for the rasterizer

use super::math::{Mat3, Point};
use serde::{Serialize, Deserialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const SKY: Color = Color { r: 100, g: 200, b: 255, a: 255 };

    /// Convert to [u8; 4] for framebuffer
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Three vertices. Order only matters for outline edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub points: [Point; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { points: [a, b, c] }
    }

    /// Mean of the vertices, truncated toward zero
    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.points;
        Point {
            x: ((a.x as i64 + b.x as i64 + c.x as i64) / 3) as i32,
            y: ((a.y as i64 + b.y as i64 + c.y as i64) / 3) as i32,
        }
    }

    pub fn transformed(&self, m: &Mat3) -> Triangle {
        Triangle {
            points: self.points.map(|p| m.apply(p)),
        }
    }

    /// Edges in cyclic order: 0->1, 1->2, 2->0
    pub fn edges(&self) -> [(Point, Point); 3] {
        let [a, b, c] = self.points;
        [(a, b), (b, c), (c, a)]
    }

    /// Axis-aligned bounds as (min, max), inclusive
    pub fn bounds(&self) -> (Point, Point) {
        let [a, b, c] = self.points;
        (
            Point::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            Point::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        )
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new(Point::new(500, 200), Point::new(400, 400), Point::new(200, 400))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_truncates() {
        assert_eq!(Triangle::default().centroid(), Point::new(366, 333));
        let t = Triangle::new(Point::new(-1, -1), Point::new(-1, 0), Point::new(0, 0));
        // -2 / 3 truncates toward zero
        assert_eq!(t.centroid(), Point::new(0, 0));
    }

    #[test]
    fn test_edges_are_cyclic() {
        let t = Triangle::default();
        let e = t.edges();
        assert_eq!(e[0].1, e[1].0);
        assert_eq!(e[1].1, e[2].0);
        assert_eq!(e[2].1, e[0].0);
    }

    #[test]
    fn test_bounds() {
        let (min, max) = Triangle::default().bounds();
        assert_eq!(min, Point::new(200, 200));
        assert_eq!(max, Point::new(500, 400));
    }

    #[test]
    fn test_color_bytes() {
        assert_eq!(Color::SKY.to_bytes(), [100, 200, 255, 255]);
    }
}
