use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use darts_core::{InputState, Point};

/// Collects terminal events into the per-frame [`InputState`].
#[derive(Debug, Default)]
pub struct InputMapper {
    state: InputState,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns true on Ctrl+C.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.menu_up = true,
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.state.menu_down = true,
            KeyCode::Left | KeyCode::Char('h') => self.state.menu_left = true,
            KeyCode::Right | KeyCode::Char('l') => self.state.menu_right = true,
            KeyCode::Enter | KeyCode::Char(' ') => self.state.menu_select = true,
            KeyCode::Esc | KeyCode::Backspace => self.state.menu_cancel = true,
            _ => {}
        }
        false
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.state
            .move_pointer(Point::new(mouse.column as i32, mouse.row as i32));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.state.mouse_click = true,
            MouseEventKind::Down(MouseButton::Right) => self.state.mouse_right_click = true,
            _ => {}
        }
    }

    /// Input for this frame; pulses are cleared for the next one.
    pub fn take(&mut self) -> InputState {
        let frame = self.state.clone();
        self.state.clear_pulses();
        frame
    }
}
