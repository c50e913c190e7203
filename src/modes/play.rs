use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{ControlInput, GameEngine, GameState, PlayerId, SimConfig};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Local multiplayer session in the terminal
pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    players: Vec<PlayerId>,
    inputs: Vec<ControlInput>,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    frame_interval: Duration,
    paused: bool,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: SimConfig, players: usize, fps: u32) -> Result<Self> {
        let mut engine = GameEngine::new(config.clone())?;
        let players: Vec<PlayerId> = (0..players).collect();
        let state = engine.reset(&players);

        Ok(Self {
            engine,
            state,
            inputs: vec![ControlInput::default(); players.len()],
            input_handler: InputHandler::new(players.len()),
            players,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(config),
            frame_interval: Duration::from_secs(1) / fps.max(1),
            paused: false,
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

        // One simulation step and one draw per display frame
        let mut frame_timer = interval(self.frame_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Simulate and render
                _ = frame_timer.tick() => {
                    if !self.paused {
                        self.update_game();
                    }
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics, self.paused);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer { player, heading } => {
                    if let Some(input) = self.inputs.get_mut(player) {
                        *input = ControlInput::steer(heading.0, heading.1);
                    }
                }
                KeyAction::Cheat(cheat) => {
                    let value = self.engine.cheat(&mut self.state, cheat);
                    tracing::info!(?cheat, value, "cheat");
                    self.metrics.on_score(self.state.score.value);
                }
                KeyAction::TogglePause => self.paused = !self.paused,
                KeyAction::Restart => self.reset_game(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let result = self.engine.step(&mut self.state, &self.inputs);
        self.metrics.on_step(&result);
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset(&self.players);
        self.inputs.fill(ControlInput::default());
        self.metrics.on_game_start();
        self.paused = false;
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
