use unicode_width::UnicodeWidthStr;

use crate::color::Color;
use crate::input::InputState;

/// The value an entry holds after it changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValue {
    Toggle(bool),
    Choice(usize),
}

/// Events a menu reports back to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent<A> {
    /// A button was activated.
    Selected(A),
    /// A toggle or choice entry changed its value.
    Changed(A, EntryValue),
    /// An entry received its cancel action (secondary click).
    Cancelled(A),
    /// The whole screen was cancelled and is exiting.
    ScreenCancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Button,
    Toggle(bool),
    Choice { options: Vec<String>, index: usize },
}

/// A selectable leaf item of a menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry<A> {
    pub label: String,
    pub action: A,
    pub kind: EntryKind,
    pub enabled: bool,
    pub color: Color,
    pub padding_x: i32,
    pub padding_y: i32,
}

impl<A> MenuEntry<A> {
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn display_text(&self) -> String {
        match &self.kind {
            EntryKind::Button => self.label.clone(),
            EntryKind::Toggle(on) => {
                format!("{}: {}", self.label, if *on { "On" } else { "Off" })
            }
            EntryKind::Choice { options, index } => match options.get(*index) {
                Some(option) => format!("{}: < {} >", self.label, option),
                None => self.label.clone(),
            },
        }
    }

    pub fn width(&self) -> i32 {
        self.display_text().width() as i32 + 2 * self.padding_x
    }

    pub fn height(&self) -> i32 {
        1 + 2 * self.padding_y
    }

    pub fn value(&self) -> Option<EntryValue> {
        match &self.kind {
            EntryKind::Button => None,
            EntryKind::Toggle(on) => Some(EntryValue::Toggle(*on)),
            EntryKind::Choice { index, .. } => Some(EntryValue::Choice(*index)),
        }
    }
}

impl<A: Clone> MenuEntry<A> {
    fn with_kind(label: impl Into<String>, action: A, kind: EntryKind) -> Self {
        Self {
            label: label.into(),
            action,
            kind,
            enabled: true,
            color: Color::WHITE,
            padding_x: 0,
            padding_y: 0,
        }
    }

    pub fn button(label: impl Into<String>, action: A) -> Self {
        Self::with_kind(label, action, EntryKind::Button)
    }

    pub fn toggle(label: impl Into<String>, action: A, on: bool) -> Self {
        Self::with_kind(label, action, EntryKind::Toggle(on))
    }

    /// A value picked from `options`. An out-of-range `index` is clamped.
    pub fn choice(label: impl Into<String>, action: A, options: Vec<String>, index: usize) -> Self {
        let index = index.min(options.len().saturating_sub(1));
        Self::with_kind(label, action, EntryKind::Choice { options, index })
    }

    /// Activate the entry: buttons fire, toggles flip, choices advance.
    pub fn select(&mut self) -> MenuEvent<A> {
        match self.kind {
            EntryKind::Button => MenuEvent::Selected(self.action.clone()),
            EntryKind::Toggle(_) | EntryKind::Choice { .. } => self.step(1),
        }
    }

    pub fn cancel(&self) -> MenuEvent<A> {
        MenuEvent::Cancelled(self.action.clone())
    }

    /// Let the entry consume keyboard signals while it is selected.
    pub fn handle_input(&mut self, input: &InputState) -> Option<MenuEvent<A>> {
        if !self.enabled {
            return None;
        }
        if input.menu_select {
            return Some(self.select());
        }

        match self.kind {
            EntryKind::Button => None,
            EntryKind::Toggle(_) | EntryKind::Choice { .. } => {
                if input.menu_left {
                    Some(self.step(-1))
                } else if input.menu_right {
                    Some(self.step(1))
                } else {
                    None
                }
            }
        }
    }

    fn step(&mut self, delta: isize) -> MenuEvent<A> {
        let value = match &mut self.kind {
            EntryKind::Button => return MenuEvent::Selected(self.action.clone()),
            EntryKind::Toggle(on) => {
                *on = !*on;
                EntryValue::Toggle(*on)
            }
            EntryKind::Choice { options, index } => {
                let len = options.len().max(1) as isize;
                *index = (*index as isize + delta).rem_euclid(len) as usize;
                EntryValue::Choice(*index)
            }
        };
        MenuEvent::Changed(self.action.clone(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modes() -> Vec<String> {
        ["301", "501", "701"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_button_select_fires_action() {
        let mut entry = MenuEntry::button("Play", 7u8);
        assert_eq!(entry.select(), MenuEvent::Selected(7));
        assert_eq!(entry.cancel(), MenuEvent::Cancelled(7));
    }

    #[test]
    fn test_toggle_flips_on_left_right_and_select() {
        let mut entry = MenuEntry::toggle("Sound", (), true);
        let mut input = InputState::new();
        input.menu_left = true;
        assert_eq!(
            entry.handle_input(&input),
            Some(MenuEvent::Changed((), EntryValue::Toggle(false)))
        );
        assert_eq!(entry.display_text(), "Sound: Off");

        let mut input = InputState::new();
        input.menu_select = true;
        entry.handle_input(&input);
        assert_eq!(entry.value(), Some(EntryValue::Toggle(true)));
    }

    #[test]
    fn test_choice_wraps_both_ways() {
        let mut entry = MenuEntry::choice("Mode", (), modes(), 0);
        let mut left = InputState::new();
        left.menu_left = true;
        entry.handle_input(&left);
        assert_eq!(entry.value(), Some(EntryValue::Choice(2)));
        assert_eq!(entry.display_text(), "Mode: < 701 >");

        let mut right = InputState::new();
        right.menu_right = true;
        entry.handle_input(&right);
        assert_eq!(entry.value(), Some(EntryValue::Choice(0)));
    }

    #[test]
    fn test_choice_index_clamped() {
        let entry = MenuEntry::choice("Mode", (), modes(), 10);
        assert_eq!(entry.value(), Some(EntryValue::Choice(2)));
    }

    #[test]
    fn test_button_ignores_left_right() {
        let mut entry = MenuEntry::button("Quit", ());
        let mut input = InputState::new();
        input.menu_right = true;
        assert_eq!(entry.handle_input(&input), None);
    }

    #[test]
    fn test_disabled_entry_consumes_nothing() {
        let mut entry = MenuEntry::button("Online", ()).disabled();
        let mut input = InputState::new();
        input.menu_select = true;
        assert_eq!(entry.handle_input(&input), None);
    }

    #[test]
    fn test_width_includes_padding() {
        let mut entry = MenuEntry::button("Play", ());
        entry.padding_x = 2;
        entry.padding_y = 1;
        assert_eq!(entry.width(), 8);
        assert_eq!(entry.height(), 3);
    }

    #[test]
    fn test_width_counts_terminal_cells() {
        let entry = MenuEntry::button("\u{30c0}\u{30fc}\u{30c4}", ());
        assert_eq!(entry.width(), 6);
    }
}
