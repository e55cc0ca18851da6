//! Handle-indexed storage for search-tree nodes.

use std::{iter::FusedIterator, ops::Index};

use crate::BoardState;

/// A handle to a [`BoardState`] stored in a [`StateArena`].
///
/// Handles are only meaningful for the arena that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("#{_0}")]
pub struct StateId(usize);

impl StateId {
    /// Creates a handle from a raw slot index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Owns the states of a search tree; parents are referenced by [`StateId`].
///
/// States are appended with [`push`](Self::push) and released in LIFO order
/// with [`truncate`](Self::truncate). A depth-first search that pushes each
/// child before descending and truncates on the way back keeps exactly the
/// current path alive, so abandoned branches are reclaimed as soon as they
/// are left.
///
/// # Examples
///
/// ```
/// use npuzzle_core::{BoardState, Direction, StateArena};
///
/// let mut arena = StateArena::new();
/// let root = arena.push(BoardState::solved(3)?);
/// let child = arena[root].child(Direction::Right, root).unwrap();
/// let child = arena.push(child);
///
/// let path: Vec<_> = arena.ancestry(child).map(|s| s.g()).collect();
/// assert_eq!(path, [1, 0]);
///
/// arena.truncate(1);
/// assert_eq!(arena.len(), 1);
/// # Ok::<(), npuzzle_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StateArena {
    states: Vec<BoardState>,
}

impl StateArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `state` and returns its handle.
    pub fn push(&mut self, state: BoardState) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        id
    }

    /// Returns the state behind `id`, or `None` if it has been released.
    #[must_use]
    pub fn get(&self, id: StateId) -> Option<&BoardState> {
        self.states.get(id.0)
    }

    /// Returns the number of live states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if no state is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Releases every state whose slot index is `len` or above.
    pub fn truncate(&mut self, len: usize) {
        self.states.truncate(len);
    }

    /// Returns the successors of the state behind `id`, linked to `id`.
    ///
    /// The successors are not stored; push the ones to keep.
    ///
    /// # Panics
    ///
    /// Panics if `id` has been released.
    #[must_use]
    pub fn successors(&self, id: StateId) -> Vec<BoardState> {
        self[id].successors(id)
    }

    /// Walks the parent links from `id` back to the root, starting with `id`.
    ///
    /// Stops early at a link that points to a released slot.
    #[must_use]
    pub fn ancestry(&self, id: StateId) -> Ancestry<'_> {
        Ancestry {
            arena: self,
            next: Some(id),
        }
    }
}

impl Index<StateId> for StateArena {
    type Output = BoardState;

    fn index(&self, id: StateId) -> &Self::Output {
        &self.states[id.0]
    }
}

/// Iterator returned by [`StateArena::ancestry`].
#[derive(Debug, Clone)]
pub struct Ancestry<'a> {
    arena: &'a StateArena,
    next: Option<StateId>,
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = &'a BoardState;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.arena.get(self.next?)?;
        self.next = state.parent();
        Some(state)
    }
}

impl FusedIterator for Ancestry<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_push_and_index() {
        let mut arena = StateArena::new();
        assert!(arena.is_empty());
        let root = arena.push(BoardState::solved(3).unwrap());
        assert_eq!(root, StateId::new(0));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[root].g(), 0);
        assert!(arena.get(StateId::new(1)).is_none());
    }

    #[test]
    fn test_ancestry_walks_to_root() {
        let mut arena = StateArena::new();
        let mut id = arena.push(BoardState::solved(3).unwrap());
        for dir in [Direction::Right, Direction::Down, Direction::Left] {
            let child = arena[id].child(dir, id).unwrap();
            id = arena.push(child);
        }

        let g: Vec<_> = arena.ancestry(id).map(BoardState::g).collect();
        assert_eq!(g, [3, 2, 1, 0]);
        let last = arena.ancestry(id).last().unwrap();
        assert_eq!(last.board().tiles(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_truncate_releases_branch() {
        let mut arena = StateArena::new();
        let root = arena.push(BoardState::solved(2).unwrap());
        let children = arena.successors(root);
        assert_eq!(children.len(), 2);
        for child in children {
            arena.push(child);
        }
        assert_eq!(arena.len(), 3);

        arena.truncate(1);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.ancestry(StateId::new(2)).count(), 0);
        assert_eq!(arena.ancestry(root).count(), 1);
    }

    #[test]
    fn test_state_id_display() {
        assert_eq!(StateId::new(12).to_string(), "#12");
        assert_eq!(StateId::new(12).index(), 12);
    }
}
