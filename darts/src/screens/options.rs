use ratatui::layout::Rect;
use ratatui::Frame;

use darts_core::{
    Color, ContentManager, EntryValue, InputState, MenuContext, MenuEntry, MenuError, MenuEvent,
    MenuScreen, Options, ScreenState, ScreenStatus,
};

use crate::app::ScreenAction;
use crate::screens::{back_out, draw_menu, Screen};

/// Highlight colours offered for the selected entry.
pub const HIGHLIGHTS: [(&str, Color); 4] = [
    ("Gold", Color::rgb(255, 183, 3)),
    ("Green", Color::rgb(46, 160, 67)),
    ("Red", Color::rgb(200, 40, 40)),
    ("Blue", Color::LIGHT_BLUE),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionItem {
    Sound,
    Highlight,
    Back,
}

pub struct OptionsScreen {
    menu: MenuScreen<OptionItem>,
    palette: Vec<(String, Color)>,
}

impl OptionsScreen {
    pub fn new(options: &Options) -> Result<Self, MenuError> {
        let configured = options.selected_menu_item_foreground;
        let mut palette: Vec<(String, Color)> = HIGHLIGHTS
            .iter()
            .map(|(name, color)| (name.to_string(), *color))
            .collect();
        let current = match palette.iter().position(|(_, color)| *color == configured) {
            Some(index) => index,
            None => {
                log::debug!("highlight {configured:?} not in palette, offering it as Custom");
                palette.push(("Custom".to_string(), configured));
                palette.len() - 1
            }
        };
        let names = palette.iter().map(|(name, _)| name.clone()).collect();
        let menu = MenuScreen::new(
            "OPTIONS",
            vec![
                MenuEntry::toggle("Sound", OptionItem::Sound, options.sound_enabled),
                MenuEntry::choice("Highlight", OptionItem::Highlight, names, current),
                MenuEntry::button("Back", OptionItem::Back),
            ],
            options,
        )?;
        Ok(Self { menu, palette })
    }
}

impl Screen for OptionsScreen {
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
                MenuEvent::Changed(OptionItem::Sound, EntryValue::Toggle(on)) => {
                    actions.push(ScreenAction::SetSound(on))
                }
                MenuEvent::Changed(OptionItem::Highlight, EntryValue::Choice(i)) => {
                    if let Some((_, color)) = self.palette.get(i) {
                        actions.push(ScreenAction::SetHighlight(*color));
                    }
                }
                MenuEvent::Selected(OptionItem::Back) | MenuEvent::Cancelled(_) => {
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
