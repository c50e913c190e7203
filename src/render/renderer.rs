use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Paragraph,
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
    },
};

use crate::game::{GameState, Point, SimConfig, Snake, collides};
use crate::metrics::GameMetrics;

const SNAKE_COLORS: [Color; 4] = [Color::Blue, Color::Magenta, Color::Yellow, Color::Cyan];

/// Draws simulation snapshots onto a braille canvas.
///
/// Every shape is drawn once more shifted left, up, and both, so bodies that
/// hang past the bottom or right edge show up again on the opposite side.
pub struct Renderer {
    config: SimConfig,
}

impl Renderer {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics, paused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Playfield
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with basic stats
        let stats = self.render_stats(chunks[0], state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the playfield horizontally
        let field_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let title = if paused { " Paused " } else { " Torus Snake " };
        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, f64::from(self.config.width)])
            .y_bounds([0.0, f64::from(self.config.height)])
            .paint(|ctx| self.paint(ctx, state));
        frame.render_widget(canvas, field_area);

        // Render footer with controls
        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn paint(&self, ctx: &mut Context, state: &GameState) {
        self.paint_apple(ctx, state.apple.pos);
        ctx.layer();
        for snake in &state.snakes {
            self.paint_snake(ctx, snake, state.frame);
        }
    }

    fn paint_apple(&self, ctx: &mut Context, pos: Point) {
        let r = self.config.apple_radius;
        self.circle(ctx, pos, r, Color::Red);
        self.line(ctx, pos, pos.moved_by(r, -r), Color::Green);
    }

    fn paint_snake(&self, ctx: &mut Context, snake: &Snake, frame: u64) {
        let color = SNAKE_COLORS[snake.player() % SNAKE_COLORS.len()];
        let cap = self.config.body_margin();

        for (start, end) in snake.body_lines(frame, &self.config) {
            self.line(ctx, start, end, color);
            self.circle(ctx, end, cap, color);
        }
        let (neck, mouth) = snake.neck_line(&self.config);
        self.line(ctx, neck, mouth, color);

        // Head turns red while it overlaps the body
        let head_color = if collides(snake, snake.mouth(), &self.config) {
            Color::Red
        } else {
            Color::LightBlue
        };
        self.circle(ctx, snake.mouth(), cap, head_color);
        if !snake.is_blinking() {
            self.circle(ctx, snake.eye(), 1, Color::White);
        }
    }

    fn line(&self, ctx: &mut Context, start: Point, end: Point, color: Color) {
        for (dx, dy) in ghost_offsets(&self.config) {
            let (x1, y1) = to_canvas(start.moved_by(dx, dy), self.config.height);
            let (x2, y2) = to_canvas(end.moved_by(dx, dy), self.config.height);
            ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
        }
    }

    fn circle(&self, ctx: &mut Context, center: Point, radius: i32, color: Color) {
        for (dx, dy) in ghost_offsets(&self.config) {
            let (x, y) = to_canvas(center.moved_by(dx, dy), self.config.height);
            ctx.draw(&Circle {
                x,
                y,
                radius: f64::from(radius),
                color,
            });
        }
    }

    fn render_stats(&self, _area: Rect, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let score = &state.score;
        let hunger_style = if score.hunger_frames < self.config.hunger_period / 4 {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White)
        };

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                score.value.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Hunger: ", Style::default().fg(Color::Yellow)),
            Span::styled(score.hunger_frames.to_string(), hunger_style),
            Span::raw("    "),
            Span::styled("Shield: ", Style::default().fg(Color::Yellow)),
            Span::styled(score.invulnerable_frames.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" / "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" steer | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

/// Shifts at which every shape is repeated to show wrapped copies
fn ghost_offsets(config: &SimConfig) -> [(i32, i32); 4] {
    [
        (0, 0),
        (-config.width, 0),
        (0, -config.height),
        (-config.width, -config.height),
    ]
}

/// Convert screen coordinates (Y down) to canvas coordinates (Y up)
fn to_canvas(p: Point, height: i32) -> (f64, f64) {
    (f64::from(p.x), f64::from(height - p.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameEngine;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_to_canvas_flips_y() {
        assert_eq!(to_canvas(Point::new(10, 0), 150), (10.0, 150.0));
        assert_eq!(to_canvas(Point::new(10, 150), 150), (10.0, 0.0));
    }

    #[test]
    fn test_ghost_offsets() {
        let config = SimConfig::new(200, 150);
        assert_eq!(
            ghost_offsets(&config),
            [(0, 0), (-200, 0), (0, -150), (-200, -150)]
        );
    }

    #[test]
    fn test_render_frame() {
        let config = SimConfig::new(200, 150);
        let mut engine = GameEngine::with_rng(config.clone(), ChaCha8Rng::seed_from_u64(1)).unwrap();
        let mut state = engine.reset(&[0, 1]);
        for _ in 0..25 {
            engine.step(&mut state, &[]);
        }

        let renderer = Renderer::new(config);
        let metrics = GameMetrics::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| renderer.render(frame, &state, &metrics, true))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Score:"));
        assert!(text.contains("Paused"));
    }
}
