use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};

use crate::game::{has_four, simulate, Board, Side};

use super::heuristic::{Heuristic, WindowHeuristic};

pub type Score = i32;

/// Sentinels for the open search window. Symmetric so negation never overflows.
pub const INFINITY: Score = i32::MAX;
pub const NEG_INFINITY: Score = -i32::MAX;

pub const WIN_SCORE: Score = 1_000_000;
pub const LOSS_SCORE: Score = -WIN_SCORE;
pub const DRAW_SCORE: Score = 0;

pub const DEFAULT_DEPTH: usize = 4;

/// Column picked by a search call and the score backing it.
///
/// `column` is `None` for leaves: depth exhausted or a finished position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: Score,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        SearchResult {
            column: None,
            score,
        }
    }
}

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

impl SearchStats {
    fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Searcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched below the root.
    pub depth: usize,
    /// Alpha-beta cutoffs. Disabling them never changes the chosen column.
    pub pruning: bool,
    /// Threads used to explore root columns. 1 keeps the search on the
    /// calling thread.
    pub root_threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            pruning: true,
            root_threads: 1,
        }
    }
}

/// Score of a finished position from the automated side's point of view,
/// or `None` while the game is still open.
pub fn terminal_score(board: &Board) -> Option<Score> {
    if has_four(board, Side::Automated) {
        Some(WIN_SCORE)
    } else if has_four(board, Side::Human) {
        Some(LOSS_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// The automated side maximizes and the human side minimizes. Scores are
/// always from the automated side's point of view. Columns are tried in
/// ascending order and only a strictly better score replaces the current
/// best, so ties resolve to the lowest column.
pub struct Minimax {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Minimax {
            config,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        Minimax { config, heuristic }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Pick a column for the automated side at the configured depth.
    pub fn best_move(&self, board: &Board) -> SearchResult {
        let (result, stats) = if self.config.root_threads > 1 {
            self.search_root_parallel(board)
        } else {
            self.search_with_stats(board, self.config.depth, NEG_INFINITY, INFINITY, true)
        };
        tracing::debug!(
            column = ?result.column,
            score = result.score,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            depth = self.config.depth,
            "search finished"
        );
        result
    }

    /// Search `board` with an explicit window and side to move.
    pub fn search(
        &self,
        board: &Board,
        depth: usize,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> SearchResult {
        self.search_with_stats(board, depth, alpha, beta, maximizing).0
    }

    pub fn search_with_stats(
        &self,
        board: &Board,
        depth: usize,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> (SearchResult, SearchStats) {
        let mut stats = SearchStats::default();
        let result = self.search_node(board, depth, alpha, beta, maximizing, &mut stats);
        (result, stats)
    }

    fn search_node(
        &self,
        board: &Board,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        stats: &mut SearchStats,
    ) -> SearchResult {
        stats.nodes += 1;

        if let Some(score) = terminal_score(board) {
            return SearchResult::leaf(score);
        }
        if depth == 0 {
            return SearchResult::leaf(self.heuristic.evaluate(board, Side::Automated));
        }

        let moves = board.legal_moves();
        // A position with no legal moves is full, which terminal_score caught.
        let Some(&first) = moves.first() else {
            return SearchResult::leaf(DRAW_SCORE);
        };

        let side = if maximizing { Side::Automated } else { Side::Human };
        let mut best_column = first;
        let mut best_score = if maximizing { NEG_INFINITY } else { INFINITY };

        for col in moves {
            let Ok(child) = simulate(board, col, side) else {
                continue;
            };
            let score = self
                .search_node(&child, depth - 1, alpha, beta, !maximizing, stats)
                .score;

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_column = col;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_column = col;
                }
                beta = beta.min(best_score);
            }

            if self.config.pruning && alpha >= beta {
                stats.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            column: Some(best_column),
            score: best_score,
        }
    }

    /// Root search with the legal columns spread over a rayon pool.
    ///
    /// Each branch gets its own board copy and a full window, so every root
    /// score is exact. Reducing in ascending column order with a strict
    /// comparison gives the same column and score as the sequential search.
    fn search_root_parallel(&self, board: &Board) -> (SearchResult, SearchStats) {
        let depth = self.config.depth;
        let moves = board.legal_moves();
        if depth == 0 || moves.is_empty() || terminal_score(board).is_some() {
            return self.search_with_stats(board, depth, NEG_INFINITY, INFINITY, true);
        }

        let pool = match ThreadPoolBuilder::new()
            .num_threads(self.config.root_threads.min(moves.len()))
            .build()
        {
            Ok(pool) => pool,
            Err(err) => {
                tracing::warn!(%err, "could not start search threads, searching sequentially");
                return self.search_with_stats(board, depth, NEG_INFINITY, INFINITY, true);
            }
        };

        // par_iter().collect() keeps the input order.
        let branches: Vec<(usize, Score, SearchStats)> = pool.install(|| {
            moves
                .par_iter()
                .filter_map(|&col| {
                    let child = simulate(board, col, Side::Automated).ok()?;
                    let (result, stats) =
                        self.search_with_stats(&child, depth - 1, NEG_INFINITY, INFINITY, false);
                    Some((col, result.score, stats))
                })
                .collect()
        });

        let mut stats = SearchStats {
            nodes: 1,
            cutoffs: 0,
        };
        let mut best = SearchResult {
            column: Some(moves[0]),
            score: NEG_INFINITY,
        };
        for (col, score, branch_stats) in branches {
            stats.merge(branch_stats);
            if score > best.score {
                best = SearchResult {
                    column: Some(col),
                    score,
                };
            }
        }
        (best, stats)
    }
}
