//! Assembly of the Sisyphean behavior tree.

use behavior_tree::{BehaviorTree, Sequence};

use crate::config::SimConfig;
use crate::nodes::{BoulderRollBack, CheckBoulderAtBase, PushBoulder};
use crate::world::World;

/// Name of the root sequence.
pub const CYCLE_NAME: &str = "Sisyphean Cycle";

/// Tree type driven by the frame loop.
pub type CycleTree = BehaviorTree<World, Sequence<World>>;

/// Builds the cycle: push the boulder up, watch it roll back, walk down.
pub fn create_behavior_tree(config: &SimConfig) -> CycleTree {
    let mut root = Sequence::new(CYCLE_NAME);
    root.add_child(Box::new(PushBoulder));
    root.add_child(Box::new(BoulderRollBack));
    root.add_child(Box::new(CheckBoulderAtBase::new(config.base_polarity)));

    BehaviorTree::new(root).with_completion(config.completion)
}
