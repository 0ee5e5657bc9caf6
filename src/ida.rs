//! Iterative-deepening A*
//!
//! Depth-first search bounded by a cost threshold that starts at the
//! initial Manhattan distance and rises by one after every failed pass.
//! Only the current path is held in memory, at the price of revisiting
//! shallow nodes on each pass. There is no twin search here, so boards are
//! screened with the parity test before searching.

use log::{debug, trace};

use crate::{
    board::{Board, Direction},
    SearchStats, Solve,
};

/// One level of the explicit depth-first stack.
struct Frame {
    board: Board,
    moves: u32,
    // index into `Direction::ALL` of the next child to try
    next: usize,
}

impl Frame {
    fn new(board: Board, moves: u32) -> Self {
        Self {
            board,
            moves,
            next: 0,
        }
    }
}

/// Solves a board with iterative-deepening A*.
#[derive(Clone, Debug)]
pub struct IdaSolver {
    solution: Option<Vec<Board>>,
    stats: SearchStats,
}

impl IdaSolver {
    pub fn new(initial: &Board) -> Self {
        let mut stats = SearchStats::default();

        if !initial.is_solvable() {
            debug!("IDA* skipped, board fails the parity test");
            return Self {
                solution: None,
                stats,
            };
        }

        let mut threshold = initial.manhattan();
        debug!(
            "starting IDA* with initial Manhattan distance estimate = {} moves",
            threshold
        );

        let solution = loop {
            stats.thresholds += 1;
            if let Some(path) = bounded_search(initial, threshold, &mut stats) {
                break path;
            }
            threshold += 1;
            debug!(
                "estimate increased to {} moves, {} nodes expanded so far",
                threshold, stats.expanded
            );
        };

        debug!(
            "IDA* solved in {} moves, {} nodes expanded over {} thresholds",
            solution.len() - 1,
            stats.expanded,
            stats.thresholds
        );

        Self {
            solution: Some(solution),
            stats,
        }
    }
}

/// Depth-first search from `root` that prunes every node whose
/// moves + manhattan exceeds `threshold`. Returns the path to the first
/// goal found.
fn bounded_search(root: &Board, threshold: u32, stats: &mut SearchStats) -> Option<Vec<Board>> {
    if root.is_goal() {
        return Some(vec![root.clone()]);
    }
    if root.manhattan() > threshold {
        return None;
    }

    let mut stack = vec![Frame::new(root.clone(), 0)];
    stats.enqueued += 1;

    while let Some(top) = stack.last_mut() {
        let Some(&dir) = Direction::ALL.get(top.next) else {
            stack.pop();
            continue;
        };
        top.next += 1;

        let Some(child) = top.board.slide(dir) else {
            continue;
        };
        let moves = top.moves + 1;

        // never step straight back onto the parent board
        if stack.len() >= 2 && stack[stack.len() - 2].board == child {
            continue;
        }
        stats.expanded += 1;

        if child.is_goal() {
            let mut path: Vec<Board> = stack.into_iter().map(|frame| frame.board).collect();
            path.push(child);
            return Some(path);
        }
        if moves + child.manhattan() > threshold {
            continue;
        }

        trace!(
            "sliding blank {} to depth {}, priority {}",
            dir,
            moves,
            moves + child.manhattan()
        );
        stack.push(Frame::new(child, moves));
        stats.enqueued += 1;
    }

    None
}

impl Solve for IdaSolver {
    fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(grid: &[&[u16]]) -> Board {
        Board::new(grid.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    #[test]
    fn solves_reference_board_optimally() {
        let initial = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        let solver = IdaSolver::new(&initial);

        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), Some(14));

        let solution = solver.solution().unwrap();
        assert_eq!(solution.first(), Some(&initial));
        assert!(solution.last().unwrap().is_goal());
        for step in solution.windows(2) {
            assert!(step[0].neighbors().any(|next| next == step[1]));
        }
    }

    #[test]
    fn threshold_starts_at_manhattan_distance() {
        // manhattan distance 4 and optimal length 4: a single pass suffices
        let solver = IdaSolver::new(&board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]));

        assert_eq!(solver.moves(), Some(4));
        assert_eq!(solver.stats().thresholds, 1);
    }

    #[test]
    fn goal_board_needs_no_moves() {
        let goal = Board::goal(2).unwrap();
        let solver = IdaSolver::new(&goal);

        assert_eq!(solver.moves(), Some(0));
        assert_eq!(solver.solution().map(|path| path.len()), Some(1));
    }

    #[test]
    fn unsolvable_board_is_rejected_without_search() {
        let solver = IdaSolver::new(&board(&[&[2, 1, 3], &[4, 5, 6], &[7, 8, 0]]));

        assert!(!solver.is_solvable());
        assert_eq!(solver.moves(), None);
        assert_eq!(solver.stats().thresholds, 0);
    }

    #[test]
    fn bounded_search_fails_below_optimal_length() {
        let initial = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        let mut stats = SearchStats::default();

        assert!(bounded_search(&initial, 13, &mut stats).is_none());
        assert_eq!(bounded_search(&initial, 14, &mut stats).map(|path| path.len()), Some(15));
    }
}
