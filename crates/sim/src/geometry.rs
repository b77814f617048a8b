//! Screen-space geometry shared by the entities.
//!
//! Coordinates follow the usual raster convention: `x` grows to the right,
//! `y` grows downward, so "up the hill" means decreasing `y`.

/// Inclination of the hill, in degrees.
pub const HILL_ANGLE_DEG: f64 = 33.69;

/// A point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A straight incline at a fixed angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slope {
    angle_deg: f64,
}

impl Slope {
    pub const fn new(angle_deg: f64) -> Self {
        Self { angle_deg }
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    /// Horizontal and vertical extent of `distance` travelled along the slope.
    ///
    /// Both components are non-negative; callers pick the direction.
    pub fn step(&self, distance: f64) -> (f64, f64) {
        let radians = self.angle_deg.to_radians();
        (distance * radians.cos(), distance * radians.sin())
    }

    /// Moves `from` uphill (right and up on screen) by `distance`.
    pub fn ascend(&self, from: Position, distance: f64) -> Position {
        let (dx, dy) = self.step(distance);
        from.offset(dx, -dy)
    }

    /// Moves `from` downhill (left and down on screen) by `distance`.
    pub fn descend(&self, from: Position, distance: f64) -> Position {
        let (dx, dy) = self.step(distance);
        from.offset(-dx, dy)
    }
}

impl Default for Slope {
    fn default() -> Self {
        Self::new(HILL_ANGLE_DEG)
    }
}
