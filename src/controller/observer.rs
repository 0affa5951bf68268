use std::sync::mpsc;

use crate::game::{Board, GameOutcome, Side};

use super::Phase;

/// Where a disc landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub side: Side,
    pub column: usize,
    pub row: usize,
}

/// Read-only snapshot sent to observers after every change to the live board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameUpdate {
    pub board: Board,
    pub phase: Phase,
    pub outcome: GameOutcome,
    /// `None` after a reset.
    pub last_move: Option<Placement>,
}

/// Implemented by anything that redraws or records the game.
pub trait GameObserver {
    fn on_update(&mut self, update: &GameUpdate);
}

impl<F: FnMut(&GameUpdate)> GameObserver for F {
    fn on_update(&mut self, update: &GameUpdate) {
        self(update)
    }
}

/// Forwards every update over a channel, for UIs that run their own loop.
pub struct ChannelObserver {
    tx: mpsc::Sender<GameUpdate>,
}

impl ChannelObserver {
    pub fn new(tx: mpsc::Sender<GameUpdate>) -> Self {
        ChannelObserver { tx }
    }

    /// Observer plus the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::Receiver<GameUpdate>) {
        let (tx, rx) = mpsc::channel();
        (ChannelObserver { tx }, rx)
    }
}

impl GameObserver for ChannelObserver {
    fn on_update(&mut self, update: &GameUpdate) {
        if self.tx.send(update.clone()).is_err() {
            tracing::debug!("game update receiver dropped");
        }
    }
}
