//! A* search over two game trees in lockstep
//!
//! Boards split into two classes: those that reach the goal, and those
//! that reach it after any two tiles are swapped. Searching the initial
//! board and its twin side by side therefore always terminates, and
//! whichever tree dequeues the goal first decides solvability.

use log::{debug, trace};

use crate::{board::Board, min_pq::MinPq, SearchStats, Solve};

/// Handle of a node inside a [`SearchTree`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct NodeId(usize);

struct SearchNode {
    board: Board,
    moves: u32,
    parent: Option<NodeId>,
    priority: u32,
}

impl SearchNode {
    fn new(board: Board, moves: u32, parent: Option<NodeId>) -> Self {
        let priority = moves + board.manhattan();
        Self {
            board,
            moves,
            parent,
            priority,
        }
    }
}

/// Frontier key. Orders by priority, then prefers the node closer to the
/// goal, then the one enqueued first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    priority: u32,
    manhattan: u32,
    id: NodeId,
}

/// One game tree: every node ever enqueued plus the frontier of those not
/// yet expanded.
struct SearchTree {
    nodes: Vec<SearchNode>,
    frontier: MinPq<Candidate>,
}

impl SearchTree {
    fn new(root: Board) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            frontier: MinPq::new(),
        };
        tree.push(root, 0, None);
        tree
    }

    fn push(&mut self, board: Board, moves: u32, parent: Option<NodeId>) {
        let id = NodeId(self.nodes.len());
        let node = SearchNode::new(board, moves, parent);
        self.frontier.insert(Candidate {
            priority: node.priority,
            manhattan: node.board.manhattan(),
            id,
        });
        self.nodes.push(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.frontier.extract_min().map(|candidate| candidate.id)
    }

    fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Enqueues the neighbors of `id`, except the board it came from.
    /// Returns how many were enqueued.
    fn expand(&mut self, id: NodeId) -> usize {
        let node = self.node(id);
        let previous = node.parent.map(|parent| &self.node(parent).board);
        let children: Vec<Board> = node
            .board
            .neighbors()
            .filter(|child| Some(child) != previous)
            .collect();

        trace!(
            "expanding node at {} moves, priority {}, {} children",
            node.moves,
            node.priority,
            children.len()
        );

        let moves = node.moves + 1;
        let count = children.len();
        for child in children {
            self.push(child, moves, Some(id));
        }
        count
    }

    /// Boards from the root down to `id`.
    fn path(&self, id: NodeId) -> Vec<Board> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.node(current);
            path.push(node.board.clone());
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}

/// Solves a board with A*, proving unsolvability through its twin.
///
/// The search runs to completion inside [`Solver::new`]; the queries on
/// [`Solve`] only read the stored result.
#[derive(Clone, Debug)]
pub struct Solver {
    solution: Option<Vec<Board>>,
    stats: SearchStats,
}

impl Solver {
    pub fn new(initial: &Board) -> Self {
        debug!(
            "starting A* on {0}x{0} board, manhattan {1}, hamming {2}",
            initial.dimension(),
            initial.manhattan(),
            initial.hamming()
        );

        let mut game_tree = SearchTree::new(initial.clone());
        let mut twin_tree = SearchTree::new(initial.twin());
        let mut stats = SearchStats {
            enqueued: 2,
            ..SearchStats::default()
        };

        let solution = loop {
            // extract from both trees before testing either
            let game_min = game_tree.pop();
            let twin_min = twin_tree.pop();

            let Some(game_id) = game_min else {
                break None;
            };
            if game_tree.node(game_id).board.is_goal() {
                break Some(game_tree.path(game_id));
            }
            if let Some(twin_id) = twin_min {
                if twin_tree.node(twin_id).board.is_goal() {
                    break None;
                }
            }

            stats.expanded += 1;
            stats.enqueued += game_tree.expand(game_id);
            if let Some(twin_id) = twin_min {
                stats.expanded += 1;
                stats.enqueued += twin_tree.expand(twin_id);
            }
        };

        match &solution {
            Some(path) => debug!(
                "A* solved in {} moves, {} nodes expanded, {} enqueued",
                path.len() - 1,
                stats.expanded,
                stats.enqueued
            ),
            None => debug!(
                "A* proved board unsolvable, {} nodes expanded, {} enqueued",
                stats.expanded, stats.enqueued
            ),
        }

        Self { solution, stats }
    }
}

impl Solve for Solver {
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
