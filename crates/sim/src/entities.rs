//! Simulation entities: the hill, the boulder and Sisyphus himself.
//!
//! Entities only know how to move along the slope. Deciding *when* to move
//! is the behavior tree's job (see [`crate::nodes`]).

use crate::geometry::{HILL_ANGLE_DEG, Position, Slope};

/// Thickness of the hill polygon, in pixels.
const HILL_THICKNESS: f64 = 100.0;

/// The static incline everything happens on.
#[derive(Debug, Clone, PartialEq)]
pub struct Hill {
    pub base_x: f64,
    pub base_y: f64,
    pub length: f64,
    pub angle_deg: f64,
}

impl Hill {
    pub fn slope(&self) -> Slope {
        Slope::new(self.angle_deg)
    }

    /// Top of the incline. It lies above the screen for the default hill.
    pub fn apex(&self) -> Position {
        let (dx, dy) = self.slope().step(self.length);
        Position::new(self.base_x + dx, self.base_y - dy)
    }

    /// Corners of the hill polygon, clockwise from the foot.
    pub fn outline(&self) -> [Position; 4] {
        let apex = self.apex();
        [
            Position::new(self.base_x, self.base_y),
            apex,
            apex.offset(HILL_THICKNESS, 0.0),
            Position::new(self.base_x + HILL_THICKNESS, self.base_y),
        ]
    }
}

impl Default for Hill {
    fn default() -> Self {
        Self {
            base_x: 0.0,
            base_y: 700.0,
            length: 1440.0,
            angle_deg: HILL_ANGLE_DEG,
        }
    }
}

/// The boulder. It rolls down twice as fast as it is pushed up.
#[derive(Debug, Clone, PartialEq)]
pub struct Boulder {
    pub position: Position,
    pub radius: f64,
    pub speed: f64,
}

impl Boulder {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Position::new(x, y),
            radius: 30.0,
            speed: 5.0,
        }
    }

    pub fn move_up(&mut self) {
        self.position = Slope::default().ascend(self.position, self.speed);
    }

    pub fn move_down(&mut self) {
        self.position = Slope::default().descend(self.position, 2.0 * self.speed);
    }
}

/// The figure pushing the boulder.
///
/// `position` is the centre of a `width` x `height` sprite box.
#[derive(Debug, Clone, PartialEq)]
pub struct Sisyphus {
    pub position: Position,
    pub speed: f64,
    pub width: f64,
    pub height: f64,
}

impl Sisyphus {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Position::new(x, y),
            speed: 5.0,
            width: 100.0,
            height: 200.0,
        }
    }

    pub fn move_up(&mut self) {
        self.position = Slope::default().ascend(self.position, self.speed);
    }

    pub fn move_down(&mut self) {
        self.position = Slope::default().descend(self.position, self.speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hill_apex_is_above_the_base() {
        let hill = Hill::default();
        let apex = hill.apex();
        assert!((apex.x - 1198.15).abs() < 0.1);
        assert!((apex.y - (700.0 - 798.77)).abs() < 0.1);
        assert_eq!(hill.outline()[0], Position::new(0.0, 700.0));
        assert_eq!(hill.outline()[3], Position::new(100.0, 700.0));
    }

    #[test]
    fn boulder_rolls_back_twice_as_fast() {
        let mut boulder = Boulder::new(100.0, 500.0);
        boulder.move_down();
        let (_, dy) = Slope::default().step(boulder.speed);
        assert!((boulder.position.y - (500.0 + 2.0 * dy)).abs() < 1e-9);

        let mut sisyphus = Sisyphus::new(50.0, 500.0);
        sisyphus.move_down();
        assert!((sisyphus.position.y - (500.0 + dy)).abs() < 1e-9);
    }
}
