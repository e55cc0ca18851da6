//! Permutation-parity reachability check.
//!
//! Every slide swaps the blank with one neighbor, which flips both the parity
//! of the tile permutation and the parity of the blank's grid distance to any
//! fixed cell. A target is therefore reachable exactly when the permutation
//! taking `start` onto `target` has the same parity as the distance between
//! the two blank cells.

use crate::Board;

/// Errors raised by [`is_solvable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolvabilityError {
    /// The boards do not have the same side length.
    #[display("dimension mismatch: start is {start}x{start}, target is {target}x{target}")]
    DimensionMismatch {
        /// Side length of the start board.
        start: usize,
        /// Side length of the target board.
        target: usize,
    },
}

/// Returns `true` if `target` can be reached from `start` by sliding tiles.
///
/// # Errors
///
/// Returns [`SolvabilityError::DimensionMismatch`] if the boards have
/// different side lengths.
///
/// # Examples
///
/// ```
/// use npuzzle_core::{Board, is_solvable};
///
/// let target = Board::solved(3)?;
/// let start: Board = "1,2,0,4,5,3,7,8,6".parse().unwrap();
/// assert!(is_solvable(&start, &target).unwrap());
///
/// // Swapping two tiles makes the puzzle unsolvable.
/// let swapped: Board = "0,2,1,3,4,5,6,7,8".parse().unwrap();
/// assert!(!is_solvable(&swapped, &target).unwrap());
/// # Ok::<(), npuzzle_core::BoardError>(())
/// ```
pub fn is_solvable(start: &Board, target: &Board) -> Result<bool, SolvabilityError> {
    if start.dimension() != target.dimension() {
        return Err(SolvabilityError::DimensionMismatch {
            start: start.dimension(),
            target: target.dimension(),
        });
    }

    let mut home = vec![0; target.len()];
    for (i, &tile) in target.tiles().iter().enumerate() {
        home[usize::from(tile)] = i;
    }
    let permutation: Vec<usize> = start
        .tiles()
        .iter()
        .map(|&tile| home[usize::from(tile)])
        .collect();

    let blank_distance = start
        .blank_position()
        .manhattan_distance(target.blank_position());
    Ok(permutation_is_odd(&permutation) == (blank_distance % 2 == 1))
}

/// A permutation of `n` elements with `c` cycles is odd iff `n - c` is odd.
fn permutation_is_odd(permutation: &[usize]) -> bool {
    let mut visited = vec![false; permutation.len()];
    let mut cycles = 0;
    for start in 0..permutation.len() {
        if visited[start] {
            continue;
        }
        cycles += 1;
        let mut i = start;
        while !visited[i] {
            visited[i] = true;
            i = permutation[i];
        }
    }
    (permutation.len() - cycles) % 2 == 1
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::BoardState;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_permutation_parity() {
        assert!(!permutation_is_odd(&[]));
        assert!(!permutation_is_odd(&[0, 1, 2]));
        assert!(permutation_is_odd(&[1, 0, 2]));
        assert!(!permutation_is_odd(&[1, 2, 0]));
        assert!(permutation_is_odd(&[3, 0, 1, 2]));
    }

    #[test]
    fn test_known_instances() {
        let target = Board::solved(3).unwrap();
        assert!(is_solvable(&target, &target).unwrap());
        assert!(is_solvable(&board("1,2,0,4,5,3,7,8,6"), &target).unwrap());
        assert!(!is_solvable(&board("0,2,1,3,4,5,6,7,8"), &target).unwrap());

        // classic 15-puzzle with 14 and 15 swapped
        let target = board("1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0");
        let swapped = board("1 2 3 4 5 6 7 8 9 10 11 12 13 15 14 0");
        assert!(!is_solvable(&swapped, &target).unwrap());
    }

    #[test]
    fn test_dimension_mismatch() {
        let result = is_solvable(&Board::solved(3).unwrap(), &Board::solved(4).unwrap());
        assert_eq!(
            result,
            Err(SolvabilityError::DimensionMismatch {
                start: 3,
                target: 4
            })
        );
    }

    proptest! {
        #[test]
        fn prop_random_walks_stay_solvable(
            dimension in 2_usize..=5,
            steps in 0_usize..200,
            seed in any::<u64>(),
        ) {
            let target = Board::solved(dimension).unwrap();
            let mut rng = Pcg64Mcg::seed_from_u64(seed);
            let mut state = BoardState::root(target.clone());
            for _ in 0..steps {
                state = state.random_successor(&mut rng);
            }
            prop_assert!(is_solvable(state.board(), &target).unwrap());
            prop_assert!(is_solvable(&target, state.board()).unwrap());
        }
    }
}
