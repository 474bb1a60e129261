//! Recorded games and random playouts

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Player};
use crate::error::{Error, Result};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history.
///
/// The game stores its initial position and the move list; intermediate
/// states are reconstructed by replay rather than stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: BoardState,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the standard initial position
    pub fn new() -> Self {
        Game {
            initial: BoardState::new(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move at `position` for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once the outcome is decided, or the
    /// underlying move error for an illegal position.
    pub fn play(&mut self, position: usize) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.make_move(position)?;

        self.moves.push(Move {
            position,
            player: current.to_move,
        });

        if next.is_terminal() {
            self.outcome = Some(match next.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            });
        }

        Ok(())
    }

    /// Get the current board state by replaying the move history.
    ///
    /// # Errors
    ///
    /// Returns an error if any recorded move is illegal for the state it is
    /// applied to, which indicates corrupted game data.
    pub fn current_state(&self) -> Result<BoardState> {
        let mut state = self.initial;
        for m in &self.moves {
            state = state.make_move(m.position)?;
        }
        Ok(state)
    }

    /// Get the full sequence of board states, initial position first.
    ///
    /// # Errors
    ///
    /// Returns an error if any recorded move is illegal for the state it is
    /// applied to.
    pub fn state_sequence(&self) -> Result<Vec<BoardState>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);
        for m in &self.moves {
            state = state.make_move(m.position)?;
            states.push(state);
        }
        Ok(states)
    }

    /// Play a full game choosing uniformly among the legal moves.
    pub fn play_random<R: Rng + ?Sized>(rng: &mut R) -> Result<Game> {
        let mut game = Game::new();

        while game.outcome.is_none() {
            let moves = game.current_state()?.legal_moves();
            let Some(&pos) = moves.choose(rng) else {
                break;
            };
            game.play(pos)?;
        }

        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
