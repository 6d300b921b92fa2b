//! Game session - the spawn, fall, lock, clear, respawn cycle.
//!
//! A session is an explicit value owned by the caller; there are no
//! globals. Each tick advances gravity by one row, resolves locking and
//! line clears, and consults the move policy for a horizontal nudge.
//! A blocked spawn restarts the session silently: the loop never halts.

use crate::board::Board;
use crate::piece::Piece;
use crate::policy::{MovePolicy, RandomNudge};
use crate::rng::SimpleRng;
use crate::scoring::line_score;
use crate::types::{GameAction, GameConfig, PieceKind, Rgb};
use crate::view::StateView;

/// Offset applied to the config seed for the default policy stream, so
/// policy draws do not mirror piece draws.
const POLICY_SEED_OFFSET: u32 = 0x9E37_79B9;

/// One running game: board, active piece, counters, and the move policy.
pub struct GameSession {
    config: GameConfig,
    board: Board,
    piece: Piece,
    rng: SimpleRng,
    policy: Box<dyn MovePolicy>,
    score: u32,
    generation: u32,
}

impl GameSession {
    /// Create a session driven by the reference [`RandomNudge`] policy.
    pub fn new(config: GameConfig) -> Self {
        let policy = Box::new(RandomNudge::new(config.seed ^ POLICY_SEED_OFFSET));
        Self::with_policy(config, policy)
    }

    /// Create a session with a caller-supplied move policy.
    pub fn with_policy(config: GameConfig, policy: Box<dyn MovePolicy>) -> Self {
        assert!(!config.palette.is_empty(), "palette must not be empty");
        let board = Board::new(config.board_width, config.board_height);
        let mut rng = SimpleRng::new(config.seed);
        let piece = Self::draw_piece(&mut rng, &config.palette, board.width());
        Self {
            config,
            board,
            piece,
            rng,
            policy,
            score: 0,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of automatic restarts since the session was created.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn view(&self) -> StateView<'_> {
        StateView {
            board: &self.board,
            piece: &self.piece,
            score: self.score,
            generation: self.generation,
        }
    }

    /// Advance one frame: apply the optional manual action, apply
    /// gravity (locking on contact), then let the policy nudge the
    /// active piece. Returns the renderable state.
    pub fn tick(&mut self, input: Option<GameAction>) -> StateView<'_> {
        if let Some(action) = input {
            self.apply_action(action);
        }
        self.apply_gravity();
        self.apply_policy_nudge();
        self.view()
    }

    /// Apply a manual action speculatively, reverting on collision.
    /// Returns whether the action took effect. An invalid move is a
    /// no-op, not an error.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_shift(-1),
            GameAction::MoveRight => self.try_shift(1),
            GameAction::SoftDrop => self.try_descend(),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        self.piece.x += dx;
        if self.board.collides(&self.piece) {
            self.piece.x -= dx;
            return false;
        }
        true
    }

    fn try_descend(&mut self) -> bool {
        // A failed manual descent does not lock; only gravity locks.
        self.piece.y += 1;
        if self.board.collides(&self.piece) {
            self.piece.y -= 1;
            return false;
        }
        true
    }

    fn try_rotate(&mut self) -> bool {
        self.piece.shape = self.piece.shape.rotated(1);
        if self.board.collides(&self.piece) {
            self.piece.shape = self.piece.shape.rotated(-1);
            return false;
        }
        true
    }

    /// Drop the piece one row; on contact, lock it and run the
    /// lock/clear/reward/respawn sequence.
    fn apply_gravity(&mut self) {
        self.piece.y += 1;
        if self.board.collides(&self.piece) {
            self.piece.y -= 1;
            self.lock_and_respawn();
        }
    }

    fn lock_and_respawn(&mut self) {
        self.board.lock(&self.piece);
        let cleared = self.board.clear_lines();
        self.score += line_score(cleared);
        // The outgoing policy state receives the reward before any
        // restart resets it.
        self.policy.on_lines_cleared(cleared);

        self.piece = Self::draw_piece(&mut self.rng, &self.config.palette, self.board.width());
        if self.board.collides(&self.piece) {
            self.restart();
        }
    }

    /// Board full at the spawn point: wipe the session and keep going.
    fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.generation += 1;
        self.policy.reset();
        self.piece = Self::draw_piece(&mut self.rng, &self.config.palette, self.board.width());
    }

    /// Consult the policy once and apply its nudge if collision-free.
    /// Only deltas in the contract (-1, 0, +1) are considered; a failed
    /// nudge is reverted by exact negation.
    fn apply_policy_nudge(&mut self) {
        let view = StateView {
            board: &self.board,
            piece: &self.piece,
            score: self.score,
            generation: self.generation,
        };
        let delta = self.policy.propose_delta(&view);
        if let -1 | 1 = delta {
            self.piece.x += delta;
            if self.board.collides(&self.piece) {
                self.piece.x -= delta;
            }
        }
    }

    fn draw_piece(rng: &mut SimpleRng, palette: &[Rgb], board_width: u8) -> Piece {
        let kind = PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let color = palette[rng.next_range(palette.len() as u32) as usize];
        Piece::spawn(kind, color, board_width)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }
}
