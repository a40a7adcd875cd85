//! Game state module - owns the whole session
//!
//! Ties together grid, active piece, RNG, score, and the gravity clock.
//! Every operation runs to completion synchronously; the host decides when to
//! call [`GameState::tick`] and when to draw [`GameState::frame`].
//!
//! Piece lifecycle: spawned -> falling -> locked -> line clear -> spawned, with
//! `Ended` as the terminal status once a fresh spawn collides.

use log::{debug, info, trace};

use crate::config::{ConfigError, GameConfig};
use crate::events::GameEvent;
use crate::frame::{Frame, PieceView};
use crate::gravity::GravityClock;
use crate::grid::Grid;
use crate::pieces::Piece;
use crate::rng::SimpleRng;
use crate::types::{GameAction, GameStatus, PieceKind, COLS, ROWS};

/// Undrained events kept before the oldest are discarded
pub const MAX_PENDING_EVENTS: usize = 256;

/// Complete game state
///
/// Hosts should drain [`GameState::take_events`] once per frame. Undrained
/// events are capped at [`MAX_PENDING_EVENTS`], oldest dropped first.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    active: Piece,
    score: u32,
    status: GameStatus,
    rng: SimpleRng,
    /// `None` while no gravity timer is armed (after game over).
    gravity: Option<GravityClock>,
    /// Pending notifications for the host (drained by `take_events`, bounded).
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game and run the start sequence: empty grid, first piece, gravity armed.
    pub fn new(config: GameConfig) -> Self {
        let mut state = Self {
            config,
            grid: Grid::new(),
            active: Piece::new(PieceKind::I),
            score: 0,
            status: GameStatus::Running,
            rng: SimpleRng::new(config.seed),
            gravity: None,
            events: Vec::new(),
        };
        state.reset();
        state
    }

    /// Like [`GameState::new`], rejecting invalid configuration
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for scripted setups
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// Replace the active piece wholesale (scripted setups)
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Ended
    }

    /// Whether a gravity timer is armed
    pub fn gravity_armed(&self) -> bool {
        self.gravity.is_some()
    }

    /// Milliseconds until the next gravity step, if the timer is armed
    pub fn next_gravity_in_ms(&self) -> Option<u32> {
        self.gravity.map(|g| g.until_next_ms())
    }

    /// Drain pending events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let stale = self.events.len() + 1 - MAX_PENDING_EVENTS / 2;
            self.events.drain(..stale);
            debug!("dropped {} undrained events", stale);
        }
        self.events.push(event);
    }

    /// Start over: cancel gravity, zero the score, empty the grid, spawn, re-arm gravity.
    pub fn reset(&mut self) {
        self.gravity = None;
        self.score = 0;
        self.push_event(GameEvent::ScoreChanged { score: 0 });
        self.grid.clear();
        self.status = GameStatus::Running;
        info!("game reset (seed state {})", self.rng.state());

        if self.spawn_piece() {
            self.gravity = Some(GravityClock::new(self.config.gravity_interval_ms));
        }
    }

    /// Stop gravity and report the final score. Idempotent.
    pub fn end_game(&mut self) {
        if self.is_over() {
            return;
        }
        self.gravity = None;
        self.status = GameStatus::Ended;
        self.push_event(GameEvent::GameOver {
            final_score: self.score,
        });
        info!("game over, final score {}", self.score);
    }

    /// Spawn a uniformly random piece. Returns false if it collided and ended the game.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.rng.next_kind();
        self.spawn_kind(kind)
    }

    /// Spawn a specific kind at the top center. Returns false if it collided and ended the game.
    ///
    /// The grid is never touched here; a blocked spawn only changes the status.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        self.active = Piece::new(kind);
        if self.grid.collides(&self.active) {
            self.end_game();
            return false;
        }
        debug!("spawned {:?} at ({}, {})", kind, self.active.x, self.active.y);
        true
    }

    /// Try to shift the active piece; reverts on collision
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let moved = self.active.shifted(dx, dy);
        if self.grid.collides(&moved) {
            return false;
        }
        self.active = moved;
        true
    }

    pub fn move_left(&mut self) -> bool {
        !self.is_over() && self.try_shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        !self.is_over() && self.try_shift(1, 0)
    }

    /// One-row descent (gravity step or manual down).
    ///
    /// If the piece cannot descend it settles where it is and locks. Returns true
    /// if the piece moved, false if it locked (or the game is over).
    pub fn move_down(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        if self.try_shift(0, 1) {
            return true;
        }
        self.lock_active();
        false
    }

    /// Rotate in place. A colliding rotation is discarded entirely.
    pub fn rotate(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        let rotated = self.active.rotated();
        if self.grid.collides(&rotated) {
            return false;
        }
        self.active = rotated;
        true
    }

    /// Drop to the lowest valid row and lock immediately. Returns rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        if self.is_over() {
            return 0;
        }
        let mut distance = 0;
        while self.try_shift(0, 1) {
            distance += 1;
        }
        self.lock_active();
        distance
    }

    /// Lock the active piece, clear full rows, spawn the next piece
    fn lock_active(&mut self) {
        let written = self.grid.place(&self.active);
        let total = self.active.cells().count();
        if written < total {
            debug!("{} cells locked above the grid were dropped", total - written);
        }
        let lines_cleared = self.clear_lines();
        self.push_event(GameEvent::PieceLocked {
            lines_cleared: lines_cleared as u32,
        });
        debug!(
            "locked {:?} at ({}, {}), cleared {} rows",
            self.active.kind, self.active.x, self.active.y, lines_cleared
        );
        self.spawn_piece();
    }

    /// Remove every full row and score each one. Returns the number of rows cleared.
    pub fn clear_lines(&mut self) -> usize {
        let cleared = self.grid.clear_full_rows();
        for _ in &cleared {
            self.score += self.config.line_clear_score;
            self.push_event(GameEvent::ScoreChanged { score: self.score });
        }
        if !cleared.is_empty() {
            debug!("cleared rows {:?}, score {}", cleared.as_slice(), self.score);
        }
        cleared.len()
    }

    /// Advance the gravity clock by `elapsed_ms` of host time.
    ///
    /// Performs one [`move_down`](Self::move_down) per whole interval that has
    /// elapsed and returns how many were taken. Does nothing once the game has ended.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        match self.gravity.as_mut() {
            Some(clock) => clock.advance(elapsed_ms),
            None => return 0,
        }

        let mut steps = 0;
        while self.gravity.as_mut().is_some_and(|clock| clock.take_step()) {
            trace!("gravity step");
            self.move_down();
            steps += 1;
        }
        steps
    }

    /// Apply a player or host action.
    ///
    /// Once the game has ended only `Restart` has any effect. Returns true if the
    /// state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.is_over() && action != GameAction::Restart {
            trace!("ignoring {:?} after game over", action);
            return false;
        }
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => {
                self.move_down();
                true
            }
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Describe the current state for rendering
    pub fn frame(&self) -> Frame {
        let mut grid = [[None; COLS]; ROWS];
        self.grid.write_rows(&mut grid);
        Frame {
            grid,
            piece: PieceView::from(self.active),
            score: self.score,
            status: self.status,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
