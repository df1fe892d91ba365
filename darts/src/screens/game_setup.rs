use ratatui::layout::Rect;
use ratatui::Frame;

use darts_core::{
    ContentManager, EntryValue, InputState, MenuContext, MenuEntry, MenuError, MenuEvent,
    MenuScreen, Options, ScreenState, ScreenStatus,
};

use crate::app::ScreenAction;
use crate::screens::{back_out, draw_menu, Screen};

pub const MAX_PLAYERS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    ThreeOhOne,
    FiveOhOne,
    SevenOhOne,
    Cricket,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::ThreeOhOne,
        GameMode::FiveOhOne,
        GameMode::SevenOhOne,
        GameMode::Cricket,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GameMode::ThreeOhOne => "301",
            GameMode::FiveOhOne => "501",
            GameMode::SevenOhOne => "701",
            GameMode::Cricket => "Cricket",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetupItem {
    Mode,
    Players,
    Start,
    Back,
}

pub struct GameSetupScreen {
    menu: MenuScreen<SetupItem>,
    mode: GameMode,
    players: u8,
}

impl GameSetupScreen {
    pub fn new(options: &Options) -> Result<Self, MenuError> {
        let modes = GameMode::ALL.iter().map(|m| m.label().to_string()).collect();
        let players = (1..=MAX_PLAYERS).map(|n| n.to_string()).collect();
        let menu = MenuScreen::new(
            "NEW GAME",
            vec![
                MenuEntry::choice("Mode", SetupItem::Mode, modes, 1),
                MenuEntry::choice("Players", SetupItem::Players, players, 0),
                MenuEntry::button("Start", SetupItem::Start),
                MenuEntry::button("Back", SetupItem::Back),
            ],
            options,
        )?;
        Ok(Self {
            menu,
            mode: GameMode::FiveOhOne,
            players: 1,
        })
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn players(&self) -> u8 {
        self.players
    }
}

impl Screen for GameSetupScreen {
    fn load_content(&mut self, content: &mut ContentManager, options: &Options) -> Result<(), MenuError> {
        self.menu.load_content(content, options)
    }

    fn unload_content(&mut self) {
        self.menu.unload_content();
    }

    fn handle_input(&mut self, input: &InputState, ctx: &mut MenuContext<'_>) -> Vec<ScreenAction> {
        let mut actions = Vec::new();
        for event in self.menu.handle_input(input, ctx) {
            match event {
                MenuEvent::Changed(SetupItem::Mode, EntryValue::Choice(i)) => {
                    if let Some(mode) = GameMode::ALL.get(i) {
                        self.mode = *mode;
                    }
                }
                MenuEvent::Changed(SetupItem::Players, EntryValue::Choice(i)) => {
                    self.players = (i as u8 + 1).min(MAX_PLAYERS);
                }
                MenuEvent::Selected(SetupItem::Start) => actions.push(ScreenAction::StartGame {
                    mode: self.mode,
                    players: self.players,
                }),
                MenuEvent::Selected(SetupItem::Back) | MenuEvent::Cancelled(_) => {
                    back_out(&mut self.menu, ctx)
                }
                _ => {}
            }
        }
        actions
    }

    fn update(&mut self, dt: f32, covered: bool) -> ScreenStatus {
        self.menu.update(dt, covered)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, options: &Options) {
        draw_menu(&mut self.menu, frame, area, options);
    }

    fn state(&self) -> ScreenState {
        self.menu.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use darts_core::{Silent, Viewport};

    fn press(f: impl FnOnce(&mut InputState)) -> InputState {
        let mut input = InputState::new();
        f(&mut input);
        input
    }

    #[test]
    fn test_start_carries_chosen_mode_and_players() {
        let options = Options::default();
        let mut screen = GameSetupScreen::new(&options).unwrap();
        let mut audio = Silent;
        let mut ctx = MenuContext {
            options: &options,
            viewport: Viewport::new(80, 24),
            audio: &mut audio,
        };

        // Mode: 501 -> Cricket
        screen.handle_input(&press(|i| i.menu_left = true), &mut ctx);
        screen.handle_input(&press(|i| i.menu_left = true), &mut ctx);
        assert_eq!(screen.mode(), GameMode::Cricket);

        screen.handle_input(&press(|i| i.menu_down = true), &mut ctx);
        screen.handle_input(&press(|i| i.menu_right = true), &mut ctx);
        screen.handle_input(&press(|i| i.menu_right = true), &mut ctx);
        assert_eq!(screen.players(), 3);

        screen.handle_input(&press(|i| i.menu_down = true), &mut ctx);
        let actions = screen.handle_input(&press(|i| i.menu_select = true), &mut ctx);
        assert_eq!(
            actions,
            vec![ScreenAction::StartGame {
                mode: GameMode::Cricket,
                players: 3,
            }]
        );
    }

    #[test]
    fn test_players_wrap_back_to_one() {
        let options = Options::default();
        let mut screen = GameSetupScreen::new(&options).unwrap();
        let mut audio = Silent;
        let mut ctx = MenuContext {
            options: &options,
            viewport: Viewport::new(80, 24),
            audio: &mut audio,
        };

        screen.handle_input(&press(|i| i.menu_down = true), &mut ctx);
        screen.handle_input(&press(|i| i.menu_left = true), &mut ctx);
        assert_eq!(screen.players(), MAX_PLAYERS);
        screen.handle_input(&press(|i| i.menu_right = true), &mut ctx);
        assert_eq!(screen.players(), 1);
    }
}
