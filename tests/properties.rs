use proptest::prelude::*;

use npuzzle::min_pq::MinPq;
use npuzzle::{Board, Direction, IdaSolver, Solve, Solver};

/// Slides the blank of the goal board along a random walk, which only ever
/// reaches solvable boards.
fn scrambled(max_steps: usize) -> impl Strategy<Value = (Board, usize)> {
    (2usize..=4, prop::collection::vec(0usize..4, 0..=max_steps)).prop_map(|(size, walk)| {
        let mut board = Board::goal(size).unwrap();
        let mut steps = 0;
        for dir in walk {
            if let Some(next) = board.slide(Direction::ALL[dir]) {
                board = next;
                steps += 1;
            }
        }
        (board, steps)
    })
}

proptest! {
    #[test]
    fn distances_are_ordered_and_vanish_at_goal((board, _) in scrambled(40)) {
        prop_assert!(board.manhattan() >= board.hamming());
        prop_assert_eq!(board.is_goal(), board.manhattan() == 0);
        prop_assert_eq!(board.is_goal(), board.hamming() == 0);
    }

    #[test]
    fn neighbors_depend_on_blank_position((board, _) in scrambled(40)) {
        let last = board.dimension() - 1;
        let (row, col) = board.blank();
        let on_border = [row == 0, row == last, col == 0, col == last]
            .iter()
            .filter(|&&edge| edge)
            .count();

        let neighbors: Vec<Board> = board.neighbors().collect();
        prop_assert_eq!(neighbors.len(), 4 - on_border);
        for neighbor in &neighbors {
            prop_assert_eq!(neighbor.manhattan().abs_diff(board.manhattan()), 1);
        }
    }

    #[test]
    fn exactly_one_of_board_and_twin_is_solvable((board, _) in scrambled(40)) {
        let twin = board.twin();

        prop_assert_ne!(&twin, &board);
        prop_assert!(board.is_solvable());
        prop_assert!(!twin.is_solvable());
    }

    #[test]
    fn heap_order_survives_every_operation(keys in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut pq = MinPq::new();
        for &key in &keys {
            pq.insert(key);
            prop_assert!(pq.is_heap());
        }

        let mut sorted = keys.clone();
        sorted.sort();
        for expected in sorted {
            prop_assert_eq!(pq.min(), Some(&expected));
            prop_assert_eq!(pq.extract_min(), Some(expected));
            prop_assert!(pq.is_heap());
        }
        prop_assert!(pq.is_empty());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn solvers_agree_and_respect_the_heuristic((board, steps) in scrambled(20)) {
        let astar = Solver::new(&board);
        let ida = IdaSolver::new(&board);

        let moves = astar.moves().unwrap();
        prop_assert!(moves >= board.manhattan() as usize);
        prop_assert!(moves <= steps);
        prop_assert_eq!(ida.moves(), Some(moves));
    }

    #[test]
    fn astar_rejects_twins((board, _) in scrambled(12)) {
        let solver = Solver::new(&board.twin());

        prop_assert!(!solver.is_solvable());
        prop_assert_eq!(solver.moves(), None);
    }
}
