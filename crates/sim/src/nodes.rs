//! Leaf nodes implementing the three phases of the cycle.
//!
//! Each node reads and moves the entities of the [`World`] it is executed
//! against. Thresholds are screen-space `y` values for the default 1200x800
//! scene.

use behavior_tree::{Behavior, Status};

use crate::config::BasePolarity;
use crate::world::World;

/// Pushing stops once the boulder rises to this height.
pub const PUSH_CEILING_Y: f64 = 50.0;
/// Pushing only happens while the boulder is above this height.
pub const PUSH_FLOOR_Y: f64 = 700.0;
/// The boulder keeps rolling until it drops to this height.
pub const ROLLBACK_REST_Y: f64 = 600.0;
/// Height at which Sisyphus stands at the foot of the hill.
pub const BASE_SISYPHUS_Y: f64 = 700.0;
/// Height the boulder is clamped to once Sisyphus is back at the base.
pub const BASE_BOULDER_Y: f64 = 600.0;

/// Pushes the boulder uphill, Sisyphus walking behind it.
///
/// Runs while the boulder is inside the push band, Sisyphus has not left the
/// hill and the boulder is still ahead of him. Any failed guard ends the
/// phase with `Success`.
#[derive(Debug, Default)]
pub struct PushBoulder;

impl PushBoulder {
    pub const NAME: &'static str = "Push Boulder";

    fn can_push(world: &World) -> bool {
        let boulder = world.boulder.position;
        let sisyphus = world.sisyphus.position;

        boulder.y > PUSH_CEILING_Y
            && boulder.y < PUSH_FLOOR_Y
            && sisyphus.y <= world.hill.base_y
            && boulder.x > sisyphus.x
    }
}

impl Behavior<World> for PushBoulder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn enter(&mut self, world: &mut World) {
        let apex = world.hill.apex();
        tracing::debug!(apex_y = apex.y, "push phase started");
    }

    fn execute(&mut self, world: &mut World) -> Status {
        if Self::can_push(world) {
            world.boulder.move_up();
            world.sisyphus.move_up();
            return Status::Running;
        }
        Status::Success
    }
}

/// The boulder escapes and rolls to the bottom, dragging Sisyphus along at
/// half its pace.
#[derive(Debug, Default)]
pub struct BoulderRollBack;

impl BoulderRollBack {
    pub const NAME: &'static str = "Boulder Rolls Back";
}

impl Behavior<World> for BoulderRollBack {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn enter(&mut self, world: &mut World) {
        tracing::debug!(
            base_y = world.hill.base_y,
            boulder_y = world.boulder.position.y,
            "boulder escaped"
        );
    }

    fn execute(&mut self, world: &mut World) -> Status {
        if world.boulder.position.y < ROLLBACK_REST_Y {
            world.boulder.move_down();
            world.sisyphus.move_down();
            return Status::Running;
        }
        Status::Success
    }
}

/// Walks Sisyphus back to the foot of the hill while the boulder waits.
///
/// The boulder is pinned to the height it had when the node was entered.
/// When Sisyphus reaches the base both entities snap to their resting
/// heights. Which status means "still walking" is decided by the configured
/// [`BasePolarity`].
#[derive(Debug)]
pub struct CheckBoulderAtBase {
    polarity: BasePolarity,
    baseline_y: f64,
}

impl CheckBoulderAtBase {
    pub const NAME: &'static str = "Check Boulder At Base";

    pub fn new(polarity: BasePolarity) -> Self {
        Self {
            polarity,
            baseline_y: BASE_BOULDER_Y,
        }
    }

    pub fn polarity(&self) -> BasePolarity {
        self.polarity
    }
}

impl Behavior<World> for CheckBoulderAtBase {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn enter(&mut self, world: &mut World) {
        self.baseline_y = world.boulder.position.y;
        tracing::debug!(baseline_y = self.baseline_y, "walking back to the base");
    }

    fn execute(&mut self, world: &mut World) -> Status {
        if world.sisyphus.position.y >= BASE_SISYPHUS_Y {
            return self.polarity.settled();
        }

        world.boulder.position.y = self.baseline_y;
        world.sisyphus.move_down();
        if world.sisyphus.position.y >= BASE_SISYPHUS_Y {
            world.sisyphus.position.y = BASE_SISYPHUS_Y;
            world.boulder.position.y = BASE_BOULDER_Y;
        }
        self.polarity.descending()
    }

    fn reset(&mut self) {
        self.baseline_y = BASE_BOULDER_Y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Position, Slope};

    fn world_with(boulder: Position, sisyphus: Position) -> World {
        let mut world = World::default();
        world.boulder.position = boulder;
        world.sisyphus.position = sisyphus;
        world
    }

    fn rise() -> f64 {
        Slope::default().step(5.0).1
    }

    #[test]
    fn push_moves_both_up_inside_band() {
        let mut world = world_with(Position::new(120.0, 650.0), Position::new(60.0, 650.0));
        let mut node = PushBoulder;
        node.enter(&mut world);

        assert_eq!(node.execute(&mut world), Status::Running);
        assert!((world.boulder.position.y - (650.0 - rise())).abs() < 1e-9);
        assert!((world.sisyphus.position.y - (650.0 - rise())).abs() < 1e-9);
        assert!(world.boulder.position.x > 120.0);
    }

    #[test]
    fn push_succeeds_outside_band() {
        for y in [PUSH_CEILING_Y, 20.0, PUSH_FLOOR_Y, 750.0] {
            let mut world = world_with(Position::new(120.0, y), Position::new(60.0, 650.0));
            let before = world.clone();
            assert_eq!(PushBoulder.execute(&mut world), Status::Success);
            assert_eq!(world, before);
        }
    }

    #[test]
    fn push_stops_when_boulder_is_behind() {
        let mut world = world_with(Position::new(40.0, 650.0), Position::new(60.0, 650.0));
        assert_eq!(PushBoulder.execute(&mut world), Status::Success);
    }

    #[test]
    fn push_stops_when_sisyphus_is_below_the_hill() {
        let mut world = world_with(Position::new(120.0, 650.0), Position::new(60.0, 750.0));
        let before = world.clone();

        assert_eq!(PushBoulder.execute(&mut world), Status::Success);
        assert_eq!(world, before);
    }

    #[test]
    fn rollback_moves_boulder_twice_as_fast() {
        let mut world = world_with(Position::new(500.0, 500.0), Position::new(450.0, 400.0));
        let mut node = BoulderRollBack;
        node.enter(&mut world);

        assert_eq!(node.execute(&mut world), Status::Running);
        assert!((world.boulder.position.y - (500.0 + 2.0 * rise())).abs() < 1e-9);
        assert!((world.sisyphus.position.y - (400.0 + rise())).abs() < 1e-9);
    }

    #[test]
    fn rollback_succeeds_at_rest_height() {
        let mut world = world_with(
            Position::new(500.0, ROLLBACK_REST_Y),
            Position::new(450.0, 400.0),
        );
        assert_eq!(BoulderRollBack.execute(&mut world), Status::Success);
    }

    #[test]
    fn base_check_pins_boulder_and_clamps_on_arrival() {
        let mut world = world_with(Position::new(96.0, 602.5), Position::new(200.0, 650.0));
        let mut node = CheckBoulderAtBase::new(BasePolarity::Legacy);
        node.enter(&mut world);

        assert_eq!(node.execute(&mut world), Status::Success);
        assert_eq!(world.boulder.position.y, 602.5);
        assert!(world.sisyphus.position.y < BASE_SISYPHUS_Y);

        let mut ticks = 1;
        while world.sisyphus.position.y < BASE_SISYPHUS_Y {
            assert_eq!(world.boulder.position.y, 602.5);
            node.execute(&mut world);
            ticks += 1;
            assert!(ticks < 100, "Sisyphus never reached the base");
        }

        assert_eq!(world.sisyphus.position.y, BASE_SISYPHUS_Y);
        assert_eq!(world.boulder.position.y, BASE_BOULDER_Y);
        assert_eq!(node.execute(&mut world), Status::Running);
    }

    #[test]
    fn conventional_polarity_runs_until_settled() {
        let mut world = world_with(Position::new(96.0, 602.5), Position::new(200.0, 690.0));
        let mut node = CheckBoulderAtBase::new(BasePolarity::Conventional);
        node.enter(&mut world);

        let mut statuses = Vec::new();
        for _ in 0..10 {
            statuses.push(node.execute(&mut world));
        }

        let first_success = statuses
            .iter()
            .position(|status| status.is_success())
            .expect("base check never settled");
        assert!(statuses[..first_success].iter().all(|s| s.is_running()));
        assert_eq!(world.sisyphus.position.y, BASE_SISYPHUS_Y);
        assert_eq!(world.boulder.position.y, BASE_BOULDER_Y);
    }
}
