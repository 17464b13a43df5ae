use std::time::Duration;

use rand::{Rng, rngs::ThreadRng};
use tracing::{debug, error, info, trace, warn};

use super::{
    action::{Direction, GameEvent},
    apple::place_apple,
    collision::{Collision, classify},
    config::{ConfigError, GameConfig},
    error::GameError,
    grid::Grid,
    state::{GameSession, Snake},
    timer::TickTimer,
    view::{Outcome, Phase, RenderSink, RenderView},
};
use crate::metrics::RunStats;

/// The game controller: sole owner and mutator of the session and run stats.
///
/// Driven one event at a time through [`GameController::handle`] (or the
/// individual operations). Every call that changes state ends by handing a
/// [`RenderView`] to the supplied sink and returns `true`; calls that do not
/// apply in the current phase are ignored and return `false`.
pub struct GameController<R = ThreadRng> {
    config: GameConfig,
    grid: Grid,
    phase: Phase,
    session: Option<GameSession>,
    stats: RunStats,
    timer: TickTimer,
    rng: R,
}

impl GameController<ThreadRng> {
    /// Create a controller with the given configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameController<R> {
    /// Create a controller drawing apple positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            grid: config.grid(),
            config,
            phase: Phase::Idle,
            session: None,
            stats: RunStats::new(),
            timer: TickTimer::new(),
            rng,
        })
    }

    /// Apply one queued event
    pub fn handle(&mut self, event: GameEvent, sink: &mut dyn RenderSink) -> bool {
        match event {
            GameEvent::Start(speed_ms) => self.start(speed_ms, sink),
            GameEvent::Direction(direction) => self.on_direction_input(direction, sink),
            GameEvent::Tick => self.on_tick(sink),
            GameEvent::Reset => self.reset(sink),
        }
    }

    /// Begin a new game ticking every `speed_ms` milliseconds
    pub fn start(&mut self, speed_ms: u64, sink: &mut dyn RenderSink) -> bool {
        if self.phase != Phase::Idle {
            debug!(phase = ?self.phase, "start ignored");
            return false;
        }
        if speed_ms == 0 {
            warn!("refusing to start with a zero tick interval");
            return false;
        }

        let snake = Snake::new(
            self.config.initial_body.iter().copied(),
            self.config.initial_direction,
        );
        self.session = Some(GameSession::new(snake, self.config.initial_apple));
        self.stats.on_game_start();
        self.timer.arm(Duration::from_millis(speed_ms));
        self.phase = Phase::Running;

        info!(
            speed_ms,
            grid = self.grid.size(),
            game = self.stats.games_played,
            "game started"
        );
        sink.render(&self.view());
        true
    }

    /// Steer the snake. A turn onto a new axis moves the snake one cell right
    /// away; a request along the current axis changes nothing.
    pub fn on_direction_input(
        &mut self,
        direction: Direction,
        sink: &mut dyn RenderSink,
    ) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.snake.set_direction(direction) {
            trace!(?direction, "direction ignored");
            return false;
        }

        self.step(sink);
        true
    }

    /// Advance the snake one cell in its current direction
    pub fn on_tick(&mut self, sink: &mut dyn RenderSink) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.step(sink);
        true
    }

    /// Drop the current game and return to idle. Run stats are kept.
    pub fn reset(&mut self, sink: &mut dyn RenderSink) -> bool {
        if self.phase == Phase::Running {
            debug!("reset ignored while running");
            return false;
        }

        self.session = None;
        self.timer.stop();
        self.phase = Phase::Idle;

        debug!("game reset");
        sink.render(&self.view());
        true
    }

    fn step(&mut self, sink: &mut dyn RenderSink) {
        let ending = match self.advance() {
            Ok(ending) => ending,
            Err(err) => {
                error!(%err, "game aborted");
                Some(Outcome::Fault)
            }
        };

        if let Some(outcome) = ending {
            self.finish(outcome);
        }
        sink.render(&self.view());
    }

    /// Resolve one move. Returns the outcome if the move ends the game.
    fn advance(&mut self) -> Result<Option<Outcome>, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NoSession)?;
        let candidate = session.snake.next_head()?;
        let collision = classify(
            &self.grid,
            candidate,
            session.snake.body_excluding_tail(),
            session.apple,
        );
        trace!(x = candidate.x, y = candidate.y, ?collision, "step");

        match collision {
            Collision::Wall | Collision::Body => return Ok(Some(Outcome::GameOver)),
            Collision::Apple => {
                session.snake.grow(candidate);
                session.score += 1;
                if self.stats.record_score(session.score) {
                    debug!(best = session.score, "new best score");
                }

                if session.snake.len() >= self.grid.area() {
                    return Ok(Some(Outcome::Win));
                }
                session.apple =
                    place_apple(&self.grid, &session.snake.occupied(), &mut self.rng)?;
            }
            Collision::Empty => {
                session.snake.grow(candidate);
                session.snake.shrink();
            }
        }

        Ok(None)
    }

    fn finish(&mut self, outcome: Outcome) {
        let score = match self.session.as_mut() {
            Some(session) => {
                session.finish = true;
                session.score
            }
            None => 0,
        };

        self.stats.on_game_over(score);
        self.timer.stop();
        self.phase = Phase::Ended(outcome);

        info!(
            ?outcome,
            score,
            total = self.stats.total,
            average = self.stats.average,
            best = self.stats.best,
            "game ended"
        );
    }

    /// Snapshot of what should be on screen. While idle this previews the
    /// starting layout.
    pub fn view(&self) -> RenderView<'_> {
        match &self.session {
            Some(session) => RenderView {
                grid: self.grid,
                snake_body: session.snake.segments().collect(),
                apple: (self.phase != Phase::Ended(Outcome::Win)).then_some(session.apple),
                score: session.score,
                phase: self.phase,
                stats: &self.stats,
            },
            None => RenderView {
                grid: self.grid,
                snake_body: self.config.initial_body.clone(),
                apple: Some(self.config.initial_apple),
                score: 0,
                phase: self.phase,
                stats: &self.stats,
            },
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
