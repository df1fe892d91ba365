use ratatui::layout::Rect;
use ratatui::Frame;

use darts_core::{
    ContentManager, InputState, MenuContext, MenuEntry, MenuError, MenuEvent, MenuScreen, Options,
    ScreenState, ScreenStatus,
};

use crate::app::ScreenAction;
use crate::screens::{back_out, draw_menu, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainItem {
    Play,
    Options,
    Quit,
}

pub struct MainMenuScreen {
    menu: MenuScreen<MainItem>,
}

impl MainMenuScreen {
    pub fn new(options: &Options) -> Result<Self, MenuError> {
        let menu = MenuScreen::new(
            "D A R T S",
            vec![
                MenuEntry::button("Play", MainItem::Play),
                MenuEntry::button("Options", MainItem::Options),
                MenuEntry::button("Quit", MainItem::Quit),
            ],
            options,
        )?;
        Ok(Self { menu })
    }
}

impl Screen for MainMenuScreen {
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
                MenuEvent::Selected(MainItem::Play) => actions.push(ScreenAction::OpenGameSetup),
                MenuEvent::Selected(MainItem::Options) => actions.push(ScreenAction::OpenOptions),
                MenuEvent::Selected(MainItem::Quit) | MenuEvent::Cancelled(_) => {
                    back_out(&mut self.menu, ctx)
                }
                MenuEvent::Changed(..) | MenuEvent::ScreenCancelled => {}
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

    #[test]
    fn test_entries_open_screens() {
        let options = Options::default();
        let mut screen = MainMenuScreen::new(&options).unwrap();
        let mut audio = Silent;
        let mut ctx = MenuContext {
            options: &options,
            viewport: Viewport::new(80, 24),
            audio: &mut audio,
        };

        let select = InputState {
            menu_select: true,
            ..InputState::default()
        };
        assert_eq!(screen.handle_input(&select, &mut ctx), vec![ScreenAction::OpenGameSetup]);

        let down = InputState {
            menu_down: true,
            ..InputState::default()
        };
        screen.handle_input(&down, &mut ctx);
        assert_eq!(screen.handle_input(&select, &mut ctx), vec![ScreenAction::OpenOptions]);
    }

    #[test]
    fn test_quit_exits_menu() {
        let options = Options::default();
        let mut screen = MainMenuScreen::new(&options).unwrap();
        let mut audio = Silent;
        let mut ctx = MenuContext {
            options: &options,
            viewport: Viewport::new(80, 24),
            audio: &mut audio,
        };

        let up = InputState {
            menu_up: true,
            ..InputState::default()
        };
        screen.handle_input(&up, &mut ctx);
        let select = InputState {
            menu_select: true,
            ..InputState::default()
        };
        assert!(screen.handle_input(&select, &mut ctx).is_empty());
        assert_eq!(screen.state(), ScreenState::TransitionOff);
    }
}
