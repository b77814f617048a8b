//! Simulation context threaded through the behavior tree and the renderer.

use crate::config::SimConfig;
use crate::entities::{Boulder, Hill, Sisyphus};

/// Scene heights the starting layout is computed from.
///
/// Above the upper bound Sisyphus would start below the foot of the hill;
/// below the lower bound the boulder would start above the push band.
pub const LAYOUT_MIN_HEIGHT: f64 = 300.0;
pub const LAYOUT_MAX_HEIGHT: f64 = 800.0;

/// Size of the drawable area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Everything the leaf nodes read and mutate.
///
/// The world is owned by the frame loop and lent to the tree for each
/// update; nothing else holds onto the entities.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub bounds: Bounds,
    pub hill: Hill,
    pub boulder: Boulder,
    pub sisyphus: Sisyphus,
}

impl World {
    /// Starting layout: boulder 200px and Sisyphus 100px above the bottom edge.
    ///
    /// The edge used for placement is `height` clamped to
    /// [`LAYOUT_MIN_HEIGHT`]..=[`LAYOUT_MAX_HEIGHT`], so taller scenes only add
    /// empty space below the hill.
    pub fn new(width: f64, height: f64) -> Self {
        let floor = height.clamp(LAYOUT_MIN_HEIGHT, LAYOUT_MAX_HEIGHT);
        Self {
            bounds: Bounds { width, height },
            hill: Hill::default(),
            boulder: Boulder::new(100.0, floor - 200.0),
            sisyphus: Sisyphus::new(50.0, floor - 100.0),
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.width, config.height)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tall_scene_keeps_sisyphus_on_the_hill() {
        let world = World::new(1200.0, 900.0);

        assert_eq!(world.bounds.height, 900.0);
        assert_eq!(world.boulder.position.y, 600.0);
        assert_eq!(world.sisyphus.position.y, world.hill.base_y);
    }

    #[test]
    fn short_scene_follows_the_bottom_edge() {
        let world = World::new(1200.0, 500.0);
        assert_eq!(world.boulder.position.y, 300.0);
        assert_eq!(world.sisyphus.position.y, 400.0);

        let tiny = World::new(1200.0, 10.0);
        assert_eq!(tiny.boulder.position.y, LAYOUT_MIN_HEIGHT - 200.0);
    }
}
