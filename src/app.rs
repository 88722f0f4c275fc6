//! Application state
//!
//! Owns the base triangle, the keyboard-driven transform parameters and the
//! Running/Stopped state of the frame loop. Nothing here touches the window.

use crate::rasterizer::{Mat3, Point, Triangle};

/// Pixels moved per arrow key press
pub const MOVE_STEP: i32 = 5;
/// Degrees turned per Q/E press
pub const ANGLE_STEP: f64 = 5.0;
pub const SCALE_DOWN: f64 = 0.9;
pub const SCALE_UP: f64 = 1.1;

/// A single discrete input effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    Move { dx: i32, dy: i32 },
    Rotate(f64),
    Scale(f64),
}

/// Transform parameters, mutated only through [`TransformState::apply`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Degrees, unbounded
    pub angle: f64,
    pub scale: f64,
    pub dx: i32,
    pub dy: i32,
}

impl TransformState {
    pub fn new() -> Self {
        Self { angle: 0.0, scale: 1.0, dx: 0, dy: 0 }
    }

    /// Apply a transform action. `Quit` is not a transform and is ignored here.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Move { dx, dy } => {
                self.dx = self.dx.saturating_add(dx);
                self.dy = self.dy.saturating_add(dy);
            }
            Action::Rotate(deg) => self.angle += deg,
            Action::Scale(factor) => {
                // keep the last usable value once f64 underflows or overflows
                let next = self.scale * factor;
                if next.is_finite() && next > 0.0 {
                    self.scale = next;
                }
            }
            Action::Quit => {}
        }
    }

    /// Scale and rotate about `pivot`, then offset by (dx, dy)
    pub fn matrix(&self, pivot: Point) -> Mat3 {
        Mat3::product([
            Mat3::translate(self.dx, self.dy),
            Mat3::translate(pivot.x, pivot.y),
            Mat3::rotate(self.angle, Point::ORIGIN),
            Mat3::scale(self.scale),
            Mat3::translate(-pivot.x, -pivot.y),
        ])
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame loop state. There is no way back from `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    Running,
    Stopped,
}

/// Everything the frame loop owns besides window resources
pub struct AppState {
    pub frame: FrameState,
    pub transform: TransformState,
    /// Never mutated; only the derived transform changes
    base: Triangle,
}

impl AppState {
    pub fn new(base: Triangle) -> Self {
        Self {
            frame: FrameState::Running,
            transform: TransformState::new(),
            base,
        }
    }

    #[cfg(test)]
    pub fn base(&self) -> &Triangle {
        &self.base
    }

    pub fn is_running(&self) -> bool {
        self.frame == FrameState::Running
    }

    /// Handle one input action
    pub fn handle(&mut self, action: Action) {
        if !self.is_running() {
            return;
        }
        match action {
            Action::Quit => {
                log::info!("Stop requested");
                self.frame = FrameState::Stopped;
            }
            other => {
                self.transform.apply(other);
                log::debug!("{:?} -> {:?}", other, self.transform);
            }
        }
    }

    /// Composed matrix for this frame, pivoting on the base centroid
    pub fn frame_matrix(&self) -> Mat3 {
        self.transform.matrix(self.base.centroid())
    }

    /// Base triangle mapped through the current transform
    pub fn transformed_triangle(&self) -> Triangle {
        self.base.transformed(&self.frame_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1
    }

    #[test]
    fn test_initial_state_is_identity() {
        let app = AppState::new(Triangle::default());
        assert!(app.is_running());
        assert_eq!(app.transformed_triangle(), Triangle::default());
    }

    #[test]
    fn test_half_turn_mirrors_through_centroid() {
        let mut app = AppState::new(Triangle::default());
        for _ in 0..36 {
            app.handle(Action::Rotate(ANGLE_STEP));
        }
        assert_eq!(app.transform.angle, 180.0);
        let c = app.base().centroid();
        assert_eq!(c, Point::new(366, 333));
        let out = app.transformed_triangle();
        for (v, t) in app.base().points.iter().zip(out.points.iter()) {
            assert!(close(*t, Point::new(2 * c.x - v.x, 2 * c.y - v.y)));
        }
    }

    #[test]
    fn test_offset_applied_after_scale() {
        let mut app = AppState::new(Triangle::default());
        app.handle(Action::Scale(2.0));
        app.handle(Action::Move { dx: 10, dy: -20 });
        let c = app.base().centroid();
        let out = app.transformed_triangle();
        for (v, t) in app.base().points.iter().zip(out.points.iter()) {
            let expected = Point::new(c.x + 2 * (v.x - c.x) + 10, c.y + 2 * (v.y - c.y) - 20);
            assert_eq!(*t, expected);
        }
    }

    #[test]
    fn test_scale_shrinks_toward_but_never_reaches_zero() {
        let mut s = TransformState::new();
        let mut prev = s.scale;
        for _ in 0..1000 {
            s.apply(Action::Scale(SCALE_DOWN));
            assert!(s.scale > 0.0);
            assert!(s.scale < prev);
            prev = s.scale;
        }
        for _ in 0..20_000 {
            s.apply(Action::Scale(SCALE_DOWN));
        }
        assert!(s.scale > 0.0);
    }

    #[test]
    fn test_scale_up_strictly_increases() {
        let mut s = TransformState::new();
        let mut prev = s.scale;
        for _ in 0..500 {
            s.apply(Action::Scale(SCALE_UP));
            assert!(s.scale > prev);
            prev = s.scale;
        }
    }

    #[test]
    fn test_angle_is_unbounded() {
        let mut s = TransformState::new();
        for _ in 0..200 {
            s.apply(Action::Rotate(-ANGLE_STEP));
        }
        assert_eq!(s.angle, -1000.0);
    }

    #[test]
    fn test_quit_is_terminal() {
        let mut app = AppState::new(Triangle::default());
        app.handle(Action::Quit);
        assert_eq!(app.frame, FrameState::Stopped);
        app.handle(Action::Move { dx: MOVE_STEP, dy: 0 });
        assert_eq!(app.transform, TransformState::new());
        app.handle(Action::Quit);
        assert_eq!(app.frame, FrameState::Stopped);
    }

    #[test]
    fn test_large_scale_frame_stays_cheap() {
        use crate::rasterizer::{Color, Framebuffer, HEIGHT, WIDTH};

        let mut app = AppState::new(Triangle::default());
        for _ in 0..160 {
            app.handle(Action::Scale(SCALE_UP));
        }
        let tri = app.transformed_triangle();
        assert!(tri.points.iter().any(|p| p.x.abs() > 100_000_000));

        let mut fb = Framebuffer::new(WIDTH, HEIGHT);
        let start = std::time::Instant::now();
        fb.fill_triangle(&tri, Color::SKY);
        fb.draw_outline(&tri, Color::WHITE);
        assert!(start.elapsed() < std::time::Duration::from_secs(2));
    }

    #[test]
    fn test_base_triangle_never_changes() {
        let mut app = AppState::new(Triangle::default());
        app.handle(Action::Rotate(45.0));
        app.handle(Action::Scale(SCALE_UP));
        app.handle(Action::Move { dx: -MOVE_STEP, dy: MOVE_STEP });
        let _ = app.transformed_triangle();
        assert_eq!(*app.base(), Triangle::default());
    }
}
