//! Reconstructed solution paths.

use std::time::Duration;

use npuzzle_core::{Board, BoardState, Direction, StateArena, StateId};

use crate::SearchStats;

/// An optimal path found by the solver, with the search statistics.
///
/// The path is reconstructed once, at construction, by following parent
/// links from the goal back to the root. [`states`](Self::states) yields it
/// in that order: goal first, initial state last. [`playback`](Self::playback)
/// yields the same boards the other way round, from the initial board to the
/// goal.
///
/// # Examples
///
/// ```
/// use npuzzle_core::{Board, BoardState};
/// use npuzzle_solver::IdaStarSolver;
///
/// let target = Board::solved(3)?;
/// let initial = BoardState::new(vec![1, 0, 2, 3, 4, 5, 6, 7, 8])?;
/// let solution = IdaStarSolver::new().solve(initial, &target)?;
///
/// let boards: Vec<String> = solution.playback().map(|b| b.to_string()).collect();
/// assert_eq!(boards, ["1 . 2\n3 4 5\n6 7 8", ". 1 2\n3 4 5\n6 7 8"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    arena: StateArena,
    sequence: Vec<StateId>,
    stats: SearchStats,
}

impl Solution {
    /// Builds a solution by walking the ancestry of `goal` inside `arena`.
    ///
    /// `goal` must be stored in `arena`, and the arena must hold no released
    /// branches, which is what the search leaves behind when it finds a goal.
    pub(crate) fn from_goal(arena: StateArena, goal: StateId, stats: SearchStats) -> Self {
        debug_assert!(arena.get(goal).is_some(), "goal {goal} is not in the arena");
        let mut sequence = Vec::new();
        let mut next = Some(goal);
        while let Some(id) = next {
            let Some(state) = arena.get(id) else {
                break;
            };
            sequence.push(id);
            next = state.parent();
        }
        Self {
            arena,
            sequence,
            stats,
        }
    }

    /// Returns the goal state.
    #[must_use]
    pub fn goal(&self) -> &BoardState {
        &self.arena[self.sequence[0]]
    }

    /// Returns the initial state the search started from.
    #[must_use]
    pub fn initial(&self) -> &BoardState {
        &self.arena[self.sequence[self.sequence.len() - 1]]
    }

    /// Returns the states on the path, goal first and initial state last.
    pub fn states(&self) -> impl DoubleEndedIterator<Item = &BoardState> + ExactSizeIterator {
        self.sequence.iter().map(|&id| &self.arena[id])
    }

    /// Returns the boards on the path from the initial board to the goal.
    pub fn playback(&self) -> impl DoubleEndedIterator<Item = &Board> + ExactSizeIterator {
        self.states().rev().map(BoardState::board)
    }

    /// Returns the blank movements leading from the initial board to the goal.
    #[must_use]
    pub fn moves(&self) -> Vec<Direction> {
        let boards: Vec<_> = self.playback().collect();
        boards
            .windows(2)
            .filter_map(|pair| {
                Direction::between(pair[0].blank_position(), pair[1].blank_position())
            })
            .collect()
    }

    /// Returns the number of slides on the path.
    #[must_use]
    pub fn optimal_move_count(&self) -> usize {
        self.sequence.len() - 1
    }

    /// Returns the number of states the search visited.
    #[must_use]
    pub fn nodes_explored(&self) -> u64 {
        self.stats.nodes_explored()
    }

    /// Returns the wall-clock time the search took.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed()
    }

    /// Returns the full search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IdaStarSolver;

    fn walk(directions: &[Direction]) -> (StateArena, StateId) {
        let mut arena = StateArena::new();
        let mut id = arena.push(BoardState::solved(3).unwrap());
        for &dir in directions {
            let child = arena[id].child(dir, id).unwrap();
            id = arena.push(child);
        }
        (arena, id)
    }

    fn stats_of(target: &Board) -> SearchStats {
        // borrow real statistics from a trivial solve
        *IdaStarSolver::new()
            .solve(BoardState::root(target.clone()), target)
            .unwrap()
            .stats()
    }

    #[test]
    fn test_from_goal_orders_goal_first() {
        let path = [Direction::Right, Direction::Down, Direction::Left];
        let (arena, goal) = walk(&path);
        let stats = stats_of(arena[goal].board());
        let solution = Solution::from_goal(arena, goal, stats);

        assert_eq!(solution.optimal_move_count(), 3);
        let g: Vec<_> = solution.states().map(BoardState::g).collect();
        assert_eq!(g, [3, 2, 1, 0]);
        assert_eq!(solution.goal().g(), 3);
        assert_eq!(solution.initial().g(), 0);
        assert_eq!(solution.moves(), path);
        assert_eq!(solution.playback().len(), 4);
        assert_eq!(
            solution.playback().next().unwrap(),
            &Board::solved(3).unwrap()
        );
    }

    #[test]
    fn test_from_goal_on_root() {
        let (arena, root) = walk(&[]);
        let stats = stats_of(arena[root].board());
        let solution = Solution::from_goal(arena, root, stats);
        assert_eq!(solution.optimal_move_count(), 0);
        assert!(solution.moves().is_empty());
        assert_eq!(solution.goal(), solution.initial());
    }

    #[test]
    fn test_solver_path_is_linked() {
        let target = Board::solved(3).unwrap();
        let initial = BoardState::new(vec![1, 4, 2, 3, 0, 5, 6, 7, 8]).unwrap();
        let solution = IdaStarSolver::new().solve(initial, &target).unwrap();

        let states: Vec<_> = solution.states().collect();
        assert_eq!(states.len(), 3);
        for pair in states.windows(2) {
            assert_eq!(pair[0].g(), pair[1].g() + 1);
            assert!(pair[0].parent().is_some());
        }
        assert_eq!(solution.initial().parent(), None);
        assert_eq!(solution.moves(), [Direction::Up, Direction::Left]);
    }
}
