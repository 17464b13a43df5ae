use std::collections::HashSet;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Outcome, Phase, Position, RenderView, SpeedLevel};

const BOARD_DARK: Color = Color::Rgb(232, 140, 52);
const BOARD_LIGHT: Color = Color::Rgb(244, 180, 110);
const SNAKE_BODY: Color = Color::Rgb(40, 80, 200);
const SNAKE_HEAD: Color = Color::Rgb(20, 40, 140);
const APPLE: Color = Color::Rgb(210, 30, 30);

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderView<'_>, speed: SpeedLevel) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], view);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match view.phase {
            Phase::Ended(outcome) => {
                let result = self.render_result(game_area, view, outcome);
                frame.render_widget(result, game_area);
            }
            Phase::Idle | Phase::Running => {
                let grid = self.render_grid(game_area, view);
                frame.render_widget(grid, game_area);
            }
        }

        let controls = self.render_controls(chunks[2], view.phase, speed);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, view: &RenderView<'_>) -> Paragraph<'_> {
        let body: HashSet<Position> = view.snake_body.iter().copied().collect();
        let head = view.head();
        let size = view.grid.size() as i32;
        let mut lines = Vec::new();

        for y in 0..size {
            let mut spans = Vec::new();

            for x in 0..size {
                let pos = Position::new(x, y);
                // Checkerboard background
                let shade = if (x + y) % 2 == 0 { BOARD_DARK } else { BOARD_LIGHT };
                let base = Style::default().bg(shade);

                let cell = if Some(pos) == head {
                    Span::styled(
                        "██",
                        base.fg(SNAKE_HEAD).add_modifier(Modifier::BOLD),
                    )
                } else if body.contains(&pos) {
                    Span::styled("██", base.fg(SNAKE_BODY))
                } else if Some(pos) == view.apple {
                    Span::styled("()", base.fg(APPLE).add_modifier(Modifier::BOLD))
                } else {
                    Span::styled("  ", base)
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, _area: Rect, view: &RenderView<'_>) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(view.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Average Score: ", label),
            Span::styled(view.stats.format_average(), value),
            Span::raw("    "),
            Span::styled("Best Record: ", label),
            Span::styled(view.stats.best.to_string(), value),
            Span::raw("    "),
            Span::styled("Games: ", label),
            Span::styled(view.stats.games_played.to_string(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_result(
        &self,
        _area: Rect,
        view: &RenderView<'_>,
        outcome: Outcome,
    ) -> Paragraph<'_> {
        let accent = match outcome {
            Outcome::Win => Color::Green,
            Outcome::GameOver | Outcome::Fault => Color::Red,
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                outcome.message(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    view.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        )
    }

    fn render_controls(&self, _area: Rect, phase: Phase, speed: SpeedLevel) -> Paragraph<'_> {
        let line = match phase {
            Phase::Idle => Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::raw(" to start | Speed: "),
                Span::styled(speed.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw(" ("),
                Span::styled("1-4", Style::default().fg(Color::Cyan)),
                Span::raw(" to change) | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            Phase::Running | Phase::Ended(_) => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameController, NoRender};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(view: &RenderView<'_>, speed: SpeedLevel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, view, speed))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_idle_screen() {
        let game = GameController::new(GameConfig::default()).unwrap();
        let screen = draw(&game.view(), SpeedLevel::Fast);

        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("Average Score: 0.0"));
        assert!(screen.contains("Best Record: 0"));
        assert!(screen.contains("Speed: Fast"));
        // Initial apple preview
        assert!(screen.contains("()"));
    }

    #[test]
    fn test_result_screen() {
        let config = GameConfig {
            initial_body: vec![Position::new(1, 0), Position::new(0, 0)],
            initial_direction: crate::game::Direction::Left,
            initial_apple: Position::new(5, 5),
            ..GameConfig::default()
        };
        let mut game = GameController::new(config).unwrap();
        game.start(250, &mut NoRender);
        game.on_tick(&mut NoRender);

        let screen = draw(&game.view(), SpeedLevel::Normal);
        assert!(screen.contains("Game Over!"));
        assert!(screen.contains("Final Score: 0"));
        assert!(screen.contains("to play again"));
        assert!(screen.contains("Games: 1"));
    }
}
