use crate::{Action, Cost, Point};

/// Handle of a [`SearchNode`] inside a [`SearchTree`]
pub(crate) type NodeID = usize;

/// One step of a candidate Path
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub state: Point,
    /// the Action that led here, `None` for the root
    pub action: Option<Action>,
    pub parent: Option<NodeID>,
    /// Cost from the root (g)
    pub cost: Cost,
    /// estimated Cost to the nearest objective (h)
    pub heuristic: Cost,
}

impl SearchNode {
    /// f = g + h
    pub fn evaluation(&self) -> Cost {
        self.cost + self.heuristic
    }
}

/// Arena of all Nodes created during one search.
///
/// Nodes only point to their parent, so the tree never forms cycles and is dropped in one
/// piece when the search returns.
#[derive(Clone, Debug)]
pub(crate) struct SearchTree {
    nodes: slab::Slab<SearchNode>,
}

impl SearchTree {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: slab::Slab::with_capacity(capacity),
        }
    }

    pub fn add_root(&mut self, state: Point, heuristic: Cost) -> NodeID {
        self.nodes.insert(SearchNode {
            state,
            action: None,
            parent: None,
            cost: 0,
            heuristic,
        })
    }

    pub fn add_child(
        &mut self,
        parent: NodeID,
        action: Action,
        state: Point,
        step_cost: Cost,
        heuristic: Cost,
    ) -> NodeID {
        let cost = self[parent].cost + step_cost;
        self.nodes.insert(SearchNode {
            state,
            action: Some(action),
            parent: Some(parent),
            cost,
            heuristic,
        })
    }

    /// The Actions leading from the root to `id`, in walking order
    pub fn actions_to(&self, id: NodeID) -> Vec<Action> {
        let mut actions = vec![];
        let mut current = &self[id];
        while let (Some(action), Some(parent)) = (current.action, current.parent) {
            actions.push(action);
            current = &self[parent];
        }
        actions.reverse();
        actions
    }
}

use std::ops::Index;
impl Index<NodeID> for SearchTree {
    type Output = SearchNode;
    #[track_caller]
    fn index(&self, index: NodeID) -> &SearchNode {
        &self.nodes[index]
    }
}

#[test]
fn actions_to_walks_back_to_root() {
    use crate::Action::*;

    let mut tree = SearchTree::with_capacity(4);
    let root = tree.add_root((1, 1), 4);
    let a = tree.add_child(root, Down, (1, 2), 1, 3);
    let b = tree.add_child(a, Right, (2, 2), 3, 2);
    let _sibling = tree.add_child(root, Right, (2, 1), 1, 3);

    assert!(tree.actions_to(root).is_empty());
    assert_eq!(tree.actions_to(b), vec![Down, Right]);
    assert_eq!(tree[b].cost, 4);
    assert_eq!(tree[b].evaluation(), 6);
}
