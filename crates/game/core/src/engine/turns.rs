use std::collections::VecDeque;

use crate::state::Character;

/// Which side is currently acting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Player,
    Enemy,
}

/// Ordered roster indices that still have to act in the current phase.
///
/// Regenerated exactly at phase entry from the living members and only
/// trimmed at the head afterwards, so turn order never changes mid-phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnQueue {
    order: VecDeque<usize>,
}

impl TurnQueue {
    /// Snapshot of the given roster indices, in order.
    pub fn snapshot(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            order: indices.into_iter().collect(),
        }
    }

    pub fn head(&self) -> Option<usize> {
        self.order.front().copied()
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.order.pop_front()
    }

    /// Pops entries from the head while they point at defeated characters.
    pub fn drop_defeated(&mut self, roster: &[Character]) {
        while let Some(index) = self.head() {
            if roster.get(index).is_some_and(Character::is_alive) {
                break;
            }
            self.order.pop_front();
        }
    }

    /// Hands the head slot to another roster index.
    pub fn replace_head(&mut self, index: usize) {
        if let Some(head) = self.order.front_mut() {
            *head = index;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }
}
