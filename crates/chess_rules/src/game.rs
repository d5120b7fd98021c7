//! Game aggregate: the state a caller threads through the engine between moves.
//!
//! The rule functions take plain parameters; [`GameState`] only owns the board,
//! side to move, castling rights, last move and history, and keeps them in step
//! when a move is played.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    attacks::is_king_in_check,
    board::{is_castle, is_en_passant, is_promotion, Board, CastlingRights, LastMove},
    error::{RulesError, RulesResult},
    legal::{all_legal_moves, legal_moves},
    notation::{move_description, move_to_notation},
    outcome::{game_outcome, GameOutcome},
    types::*,
};

/// A played move with everything a presentation layer wants to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    #[serde(flatten)]
    pub mv: Move,
    /// The piece that moved (the pawn, for promotions)
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub notation: String,
    pub description: String,
    /// Full-move number, starting at 1
    pub move_number: u32,
    pub color: Color,
}

/// Cue a caller can map to feedback such as a sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveEvent {
    Move,
    Capture,
    Check,
    Checkmate,
}

impl MoveRecord {
    /// The move cue, followed by a check or checkmate cue when one was given.
    pub fn events(&self) -> Vec<MoveEvent> {
        let mut events = vec![if self.captured.is_some() {
            MoveEvent::Capture
        } else {
            MoveEvent::Move
        }];
        if self.mv.is_checkmate {
            events.push(MoveEvent::Checkmate);
        } else if self.mv.is_check {
            events.push(MoveEvent::Check);
        }
        events
    }

    pub fn last_move(&self) -> LastMove {
        LastMove {
            from: self.mv.from,
            to: self.mv.to,
            piece: self.piece,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub castling: CastlingRights,
    pub last_move: Option<LastMove>,
    pub history: Vec<MoveRecord>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::startpos(),
            turn: Color::White,
            castling: CastlingRights::all(),
            last_move: None,
            history: Vec::new(),
        }
    }

    /// Start from an arbitrary position with an empty history.
    pub fn from_parts(
        board: Board,
        turn: Color,
        castling: CastlingRights,
        last_move: Option<LastMove>,
    ) -> Self {
        Self {
            board,
            turn,
            castling,
            last_move,
            history: Vec::new(),
        }
    }

    /// Legal destinations of the piece on `from`; empty if the square is empty.
    pub fn legal_moves_from(&self, from: Position) -> Vec<Position> {
        match self.board.piece_at(from) {
            Some(pc) => legal_moves(
                &self.board,
                from,
                pc,
                &self.castling,
                self.last_move.as_ref(),
            ),
            None => Vec::new(),
        }
    }

    /// Every legal `(from, to)` pair for the side to move.
    pub fn all_legal_moves(&self) -> Vec<(Position, Position)> {
        all_legal_moves(
            &self.board,
            self.turn,
            &self.castling,
            self.last_move.as_ref(),
        )
    }

    pub fn is_in_check(&self, c: Color) -> bool {
        is_king_in_check(&self.board, c, self.last_move.as_ref())
    }

    /// Outcome for the side to move.
    pub fn outcome(&self) -> GameOutcome {
        game_outcome(
            &self.board,
            self.turn,
            &self.castling,
            self.last_move.as_ref(),
        )
    }

    /// True when the piece on `from` is a pawn that would land on its last row.
    pub fn is_promotion(&self, from: Position, to: Position) -> bool {
        self.board
            .piece_at(from)
            .is_some_and(|pc| is_promotion(to, pc))
    }

    /// Number of half-moves played so far.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Validate and apply one move for the side to move.
    ///
    /// The state is left untouched when an error is returned.
    pub fn play(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> RulesResult<MoveRecord> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(RulesError::EmptySquare { square: from })?;
        if piece.color != self.turn {
            return Err(RulesError::WrongTurn {
                square: from,
                color: piece.color,
                turn: self.turn,
            });
        }
        if !self.legal_moves_from(from).contains(&to) {
            let outcome = self.outcome();
            if outcome.is_over() {
                return Err(RulesError::GameOver(outcome));
            }
            return Err(RulesError::IllegalMove { from, to });
        }
        match (is_promotion(to, piece), promotion) {
            (true, None) => return Err(RulesError::PromotionRequired { from, to }),
            (false, Some(_)) => return Err(RulesError::UnexpectedPromotion { from, to }),
            (true, Some(kind)) if !kind.is_promotion_target() => {
                return Err(RulesError::InvalidPromotion(kind));
            }
            _ => {}
        }

        let en_passant = is_en_passant(&self.board, from, to, piece);
        let castle = is_castle(from, to, piece);
        let captured = self.board.apply_move(from, to, promotion);
        self.castling.update_after_move(piece, from);
        self.last_move = Some(LastMove { from, to, piece });

        let mover = self.turn;
        self.turn = mover.other();
        let is_check = self.is_in_check(self.turn);
        let is_checkmate = is_check && self.outcome() == GameOutcome::Checkmate;

        let mv = Move {
            from,
            to,
            is_capture: captured.is_some(),
            is_check,
            is_checkmate,
            promotion,
        };
        let record = MoveRecord {
            mv,
            piece,
            captured,
            notation: move_to_notation(&mv, piece),
            description: move_description(piece, from, to, captured.is_some()),
            move_number: (self.history.len() / 2) as u32 + 1,
            color: mover,
        };
        debug!(
            notation = %record.notation,
            piece = %piece.name(),
            en_passant,
            castle,
            check = is_check,
            "move applied"
        );
        if is_checkmate {
            debug!(winner = %mover, "checkmate");
        }
        self.history.push(record.clone());
        Ok(record)
    }

    pub fn to_json(&self) -> RulesResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> RulesResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save the game to a JSON file
    pub fn save(&self, path: &Path) -> RulesResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load a game from a JSON file
    pub fn load(path: &Path) -> RulesResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
