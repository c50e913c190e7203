use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Cheat, PlayerId};

const UP: (f32, f32) = (0.0, 1.0);
const DOWN: (f32, f32) = (0.0, -1.0);
const LEFT: (f32, f32) = (-1.0, 0.0);
const RIGHT: (f32, f32) = (1.0, 0.0);

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// Point a player's stick in a direction (Y up)
    Steer { player: PlayerId, heading: (f32, f32) },
    Cheat(Cheat),
    TogglePause,
    Restart,
    Quit,
    None,
}

/// Maps keys to player steering. Arrows drive the first player and WASD the
/// second; with a single player both sets steer player 0.
pub struct InputHandler {
    players: usize,
}

impl InputHandler {
    pub fn new(players: usize) -> Self {
        Self { players }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        let wasd_player = if self.players > 1 { 1 } else { 0 };
        let steer = |player, heading| KeyAction::Steer { player, heading };

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => steer(0, UP),
            KeyCode::Down => steer(0, DOWN),
            KeyCode::Left => steer(0, LEFT),
            KeyCode::Right => steer(0, RIGHT),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => steer(wasd_player, UP),
            KeyCode::Char('s') | KeyCode::Char('S') => steer(wasd_player, DOWN),
            KeyCode::Char('a') | KeyCode::Char('A') => steer(wasd_player, LEFT),
            KeyCode::Char('d') | KeyCode::Char('D') => steer(wasd_player, RIGHT),

            // Debug
            KeyCode::Char('n') | KeyCode::Char('N') => KeyAction::Cheat(Cheat::RelocateApple),
            KeyCode::Char('+') | KeyCode::Char('=') => KeyAction::Cheat(Cheat::Reward(1)),
            KeyCode::Char('-') => KeyAction::Cheat(Cheat::Penalize(1)),

            // Controls
            KeyCode::Char(' ') => KeyAction::TogglePause,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new(2);

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up)),
            KeyAction::Steer { player: 0, heading: UP }
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down)),
            KeyAction::Steer { player: 0, heading: DOWN }
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left)),
            KeyAction::Steer { player: 0, heading: LEFT }
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            KeyAction::Steer { player: 0, heading: RIGHT }
        );
    }

    #[test]
    fn test_wasd_steers_second_player() {
        let handler = InputHandler::new(2);

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w'))),
            KeyAction::Steer { player: 1, heading: UP }
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a'))),
            KeyAction::Steer { player: 1, heading: LEFT }
        );

        let d_upper = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(d_upper),
            KeyAction::Steer { player: 1, heading: RIGHT }
        );
    }

    #[test]
    fn test_wasd_single_player() {
        let handler = InputHandler::new(1);
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('s'))),
            KeyAction::Steer { player: 0, heading: DOWN }
        );
    }

    #[test]
    fn test_cheat_keys() {
        let handler = InputHandler::default();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('n'))),
            KeyAction::Cheat(Cheat::RelocateApple)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('+'))),
            KeyAction::Cheat(Cheat::Reward(1))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('-'))),
            KeyAction::Cheat(Cheat::Penalize(1))
        );
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::default();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('r'))), KeyAction::Restart);
        assert_eq!(handler.handle_key_event(press(KeyCode::Char(' '))), KeyAction::TogglePause);
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::default();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}
