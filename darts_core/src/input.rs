use crate::geometry::Point;

/// Polled input for one frame.
///
/// Every flag except `pointer` is a pulse: the host sets it for the frame in
/// which the key or button went down and clears it with [`InputState::clear_pulses`]
/// once the frame has been handled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub pointer: Point,
    pub pointer_moved: bool,
    pub mouse_click: bool,
    pub mouse_right_click: bool,
    pub menu_up: bool,
    pub menu_down: bool,
    pub menu_left: bool,
    pub menu_right: bool,
    pub menu_select: bool,
    pub menu_cancel: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the pointer, flagging movement only when the cell changed.
    pub fn move_pointer(&mut self, to: Point) {
        if self.pointer != to {
            self.pointer = to;
            self.pointer_moved = true;
        }
    }

    /// Reset all one-frame signals, keeping the pointer position.
    pub fn clear_pulses(&mut self) {
        *self = InputState {
            pointer: self.pointer,
            ..InputState::default()
        };
    }

    /// True when the pointer moved or a button was pressed this frame.
    pub fn pointer_active(&self) -> bool {
        self.pointer_moved || self.mouse_click || self.mouse_right_click
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_pulses_keeps_pointer() {
        let mut input = InputState::new();
        input.move_pointer(Point::new(4, 9));
        input.menu_down = true;
        input.mouse_click = true;
        input.clear_pulses();

        assert_eq!(input.pointer, Point::new(4, 9));
        assert!(!input.menu_down);
        assert!(!input.mouse_click);
        assert!(!input.pointer_active());
    }

    #[test]
    fn test_move_to_same_cell_is_not_movement() {
        let mut input = InputState::new();
        input.move_pointer(Point::new(0, 0));
        assert!(!input.pointer_moved);
        input.move_pointer(Point::new(1, 0));
        assert!(input.pointer_moved);
    }
}
