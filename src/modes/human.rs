use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::{debug, info};

use crate::game::{
    GameConfig, GameController, GameEvent, Phase, RenderSink, RenderView, SpeedLevel,
};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

/// Render sink for the terminal: remembers that the screen is stale and lets
/// the loop redraw once the event has been fully handled.
#[derive(Debug, Default)]
struct RedrawFlag {
    dirty: bool,
}

impl RenderSink for RedrawFlag {
    fn render(&mut self, _view: &RenderView<'_>) {
        self.dirty = true;
    }
}

pub struct HumanMode {
    controller: GameController,
    renderer: Renderer,
    input_handler: InputHandler,
    redraw: RedrawFlag,
    speed: SpeedLevel,
    speed_ms: u64,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let speed = config.speed;
        let speed_ms = config.speed_ms();
        let controller = GameController::new(config).context("Invalid game configuration")?;

        Ok(Self {
            controller,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            redraw: RedrawFlag { dirty: true },
            speed,
            speed_ms,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        // Mirrors the controller's tick timer; only polled while it is armed
        let mut tick_timer: Option<Interval> = None;

        loop {
            if self.redraw.dirty {
                let view = self.controller.view();
                terminal
                    .draw(|frame| self.renderer.render(frame, &view, self.speed))
                    .context("Failed to draw frame")?;
                self.redraw.dirty = false;
            }

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = Self::next_tick(&mut tick_timer), if tick_timer.is_some() => {
                    self.apply(GameEvent::Tick);
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            self.sync_timer(&mut tick_timer);

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    async fn next_tick(timer: &mut Option<Interval>) {
        match timer {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending().await,
        }
    }

    /// Arm, re-arm or drop the tokio interval to match the controller
    fn sync_timer(&self, tick_timer: &mut Option<Interval>) {
        let wanted = self.controller.timer().period();
        let current = tick_timer.as_ref().map(Interval::period);
        if wanted == current {
            return;
        }

        *tick_timer = wanted.map(|period| {
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            timer
        });
        debug!(?wanted, "tick timer updated");
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Steer(direction) => self.apply(GameEvent::Direction(direction)),
                    KeyAction::Start => self.apply(GameEvent::Start(self.speed_ms)),
                    KeyAction::Reset => self.apply(GameEvent::Reset),
                    KeyAction::SelectSpeed(speed) => self.select_speed(speed),
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::None => {}
                }
            }
            Event::Resize(_, _) => self.redraw.dirty = true,
            _ => {}
        }
    }

    fn apply(&mut self, event: GameEvent) {
        self.controller.handle(event, &mut self.redraw);
    }

    /// The speed select only works between games
    fn select_speed(&mut self, speed: SpeedLevel) {
        if self.controller.phase() != Phase::Idle {
            return;
        }
        info!(speed = speed.as_str(), "speed selected");
        self.speed = speed;
        self.speed_ms = speed.millis();
        self.redraw.dirty = true;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
