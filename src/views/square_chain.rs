// src/views/square_chain.rs
//
// The color-node chain and its traversal cursor.
//
// One node per palette color, held in a fixed arena built up front;
// neighbors are index lookups. The cursor walks the chain one settled
// animation segment at a time and bounces at both ends.

use crate::animation::ScaleState;

#[derive(Debug)]
pub struct SquareNode {
    pub index: usize,
    pub scale: ScaleState,
}

impl SquareNode {
    fn new(index: usize) -> Self {
        Self {
            index,
            scale: ScaleState::new(),
        }
    }
}

/// Where a traversal step landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    /// Node under the cursor after the step.
    pub index: usize,
    /// The settled checkpoint of the node that just finished (0 or 1).
    pub checkpoint: f32,
    /// True when the step hit a chain end and reversed direction.
    pub flipped: bool,
}

enum Neighbor {
    Index(usize),
    Boundary,
}

#[derive(Debug)]
pub struct SquareChain {
    nodes: Vec<SquareNode>,
    current: usize,
    direction: i32,
}

impl SquareChain {
    /// Build the full chain eagerly, cursor on node 0 heading forward.
    pub fn new(length: usize) -> Self {
        Self {
            nodes: (0..length).map(SquareNode::new).collect(),
            current: 0,
            direction: 1,
        }
    }

    /// Advance the current node's scale; on settlement move the cursor,
    /// flipping direction at either chain end.
    pub fn update(&mut self, step: f32) -> Option<Settlement> {
        let checkpoint = self.nodes[self.current].scale.advance(step)?;
        let flipped = match self.neighbor(self.current, self.direction) {
            Neighbor::Index(next) => {
                self.current = next;
                false
            }
            Neighbor::Boundary => {
                self.direction = -self.direction;
                true
            }
        };
        Some(Settlement {
            index: self.current,
            checkpoint,
            flipped,
        })
    }

    /// Arm the current node's next animation segment.
    pub fn start(&mut self) -> bool {
        self.nodes[self.current].scale.start()
    }

    fn neighbor(&self, index: usize, direction: i32) -> Neighbor {
        let next = index as i64 + direction as i64;
        if next < 0 || next >= self.nodes.len() as i64 {
            Neighbor::Boundary
        } else {
            Neighbor::Index(next as usize)
        }
    }

    pub fn current(&self) -> &SquareNode {
        &self.nodes[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
